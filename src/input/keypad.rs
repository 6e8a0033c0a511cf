//! Fixed-point weight entry for the digit-only keypad
//!
//! The keypad has no decimal key; typed digits are reinterpreted with an
//! implied decimal shift. Typing "655" means 65.5 kg. Buffers starting with
//! "1" or "2" get a fourth digit so three-digit weights like 120.5 kg stay
//! reachable.
//!
//! Live display formatting and commit parsing intentionally follow different
//! rules for the 1/2-leading-digit case: the display formatter treats a
//! 3-digit "120" as 120.0 while the commit parser reads it as 12.0. Earlier
//! versions shipped with this drift and existing data depends on the commit
//! reading, so both rules are kept as-is rather than unified.

use crate::models::Weight;

/// Maximum digits for a buffer with the given leading digit
fn digit_limit(first: Option<char>) -> usize {
    match first {
        Some('1') | Some('2') => 4,
        _ => 3,
    }
}

/// The in-progress digit sequence typed on the keypad
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DigitBuffer {
    digits: String,
}

impl DigitBuffer {
    /// Create an empty buffer
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a buffer from already-typed digits, applying the length cap
    pub fn from_digits(digits: &str) -> Self {
        let mut buffer = Self::new();
        for c in digits.chars() {
            buffer.push(c);
        }
        buffer
    }

    /// Append a digit, returning whether it was accepted
    ///
    /// Rejects non-digit characters and appends past the length limit
    /// (4 digits when the leading digit is 1 or 2, otherwise 3).
    pub fn push(&mut self, digit: char) -> bool {
        if !digit.is_ascii_digit() {
            return false;
        }
        if self.digits.len() >= digit_limit(self.digits.chars().next()) {
            return false;
        }
        self.digits.push(digit);
        true
    }

    /// Remove the last digit; no-op on an empty buffer
    pub fn backspace(&mut self) -> bool {
        self.digits.pop().is_some()
    }

    /// Clear the buffer (after a successful save)
    pub fn clear(&mut self) {
        self.digits.clear();
    }

    /// Whether the buffer is empty
    pub fn is_empty(&self) -> bool {
        self.digits.is_empty()
    }

    /// The raw digit string
    pub fn as_str(&self) -> &str {
        &self.digits
    }

    /// The live display string for the current buffer
    pub fn display(&self) -> String {
        format_weight(&self.digits)
    }

    /// The committed weight for the current buffer
    pub fn commit(&self) -> Weight {
        parse_weight(&self.digits)
    }
}

/// Format a raw digit buffer for live display
///
/// Empty or non-numeric input renders as "0.0".
pub fn format_weight(raw: &str) -> String {
    if raw.is_empty() || !raw.chars().all(|c| c.is_ascii_digit()) {
        return "0.0".to_string();
    }
    let Some(first) = raw.chars().next() else {
        return "0.0".to_string();
    };

    if first == '1' || first == '2' {
        if raw.len() <= 3 {
            // Up to 3 digits: treat the buffer as an integer
            format!("{}.0", raw)
        } else {
            // 4+ digits: last digit becomes the decimal
            let (int_part, decimal) = raw.split_at(raw.len() - 1);
            format!("{}.{}", int_part, decimal)
        }
    } else {
        match raw.len() {
            1 => {
                let digit = raw.parse::<i64>().unwrap_or(0);
                format!("{}.0", digit * 10)
            }
            2 => format!("{}.0", raw),
            _ => {
                // Cap at 5 digits ("65555" -> "6555.5"), then shift
                let trimmed = &raw[..raw.len().min(5)];
                let (int_part, decimal) = trimmed.split_at(trimmed.len() - 1);
                format!("{}.{}", int_part, decimal)
            }
        }
    }
}

/// Parse a raw digit buffer into the weight to persist
///
/// Unlike the live display, the commit parsing has no special case for a
/// leading 1 or 2: "655" -> 65.5
pub fn parse_weight(raw: &str) -> Weight {
    if raw.is_empty() || !raw.chars().all(|c| c.is_ascii_digit()) {
        return Weight::zero();
    }

    match raw.len() {
        1 => raw
            .parse::<i64>()
            .map(|d| Weight::from_tenths(d * 100))
            .unwrap_or_else(|_| Weight::zero()),
        2 => raw
            .parse::<i64>()
            .map(|n| Weight::from_tenths(n * 10))
            .unwrap_or_else(|_| Weight::zero()),
        _ => {
            // All-but-last digits are the integer part; the digit string is
            // therefore already the weight in tenths
            raw.parse::<i64>()
                .map(Weight::from_tenths)
                .unwrap_or_else(|_| Weight::zero())
        }
    }
}
