//! Weight type for representing body-weight measurements
//!
//! Internally stores weights as tenths of a kilogram (i64), matching the one
//! implied decimal place of precision the keypad input produces. This avoids
//! floating-point drift in stored values and display formatting.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A body weight in kilograms, stored as tenths of a kilogram
///
/// `Weight::from_tenths(655)` is 65.5 kg. Display always renders exactly one
/// decimal place.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct Weight(i64);

impl Weight {
    /// Create a Weight from tenths of a kilogram
    pub const fn from_tenths(tenths: i64) -> Self {
        Self(tenths)
    }

    /// Create a Weight from a kilogram value, rounded to one decimal place
    pub fn from_kg(kg: f64) -> Self {
        Self((kg * 10.0).round() as i64)
    }

    /// Create a zero Weight
    pub const fn zero() -> Self {
        Self(0)
    }

    /// Get the weight in tenths of a kilogram
    pub const fn tenths(&self) -> i64 {
        self.0
    }

    /// Get the weight in kilograms
    pub fn kg(&self) -> f64 {
        self.0 as f64 / 10.0
    }

    /// Check if the weight is zero
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Check if the weight is positive
    pub const fn is_positive(&self) -> bool {
        self.0 > 0
    }

    /// Parse a weight from a decimal string
    ///
    /// Accepts formats: "65.5", "65", "65.55" (rounded to one decimal place).
    pub fn parse(s: &str) -> Result<Self, WeightParseError> {
        let s = s.trim();
        let kg: f64 = s
            .parse()
            .map_err(|_| WeightParseError::InvalidFormat(s.to_string()))?;
        if !kg.is_finite() {
            return Err(WeightParseError::InvalidFormat(s.to_string()));
        }
        Ok(Self::from_kg(kg))
    }
}

impl fmt::Display for Weight {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        let abs = self.0.abs();
        write!(f, "{}{}.{}", sign, abs / 10, abs % 10)
    }
}

/// Errors from parsing a weight string
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WeightParseError {
    InvalidFormat(String),
}

impl fmt::Display for WeightParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidFormat(s) => write!(f, "Invalid weight format: '{}'", s),
        }
    }
}

impl std::error::Error for WeightParseError {}
