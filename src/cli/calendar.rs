//! Calendar CLI command
//!
//! Renders a month grid with the first recorded weight under each day.

use chrono::{Local, NaiveDate};

use crate::display::format_month_calendar;
use crate::error::{WeightLogError, WeightLogResult};
use crate::services::aggregate::first_of_month;
use crate::storage::Storage;

/// Parse a `YYYY-MM` month argument into the first day of that month.
fn parse_month_arg(arg: &str) -> WeightLogResult<NaiveDate> {
    let (year, month) = arg
        .split_once('-')
        .ok_or_else(|| WeightLogError::Validation(format!("Invalid month '{}': expected YYYY-MM", arg)))?;
    let year: i32 = year
        .parse()
        .map_err(|_| WeightLogError::Validation(format!("Invalid month '{}': expected YYYY-MM", arg)))?;
    let month: u32 = month
        .parse()
        .map_err(|_| WeightLogError::Validation(format!("Invalid month '{}': expected YYYY-MM", arg)))?;
    NaiveDate::from_ymd_opt(year, month, 1)
        .ok_or_else(|| WeightLogError::Validation(format!("Invalid month '{}'", arg)))
}

/// Handle the calendar command
pub fn handle_calendar_command(storage: &Storage, month: Option<String>) -> WeightLogResult<()> {
    let anchor = match month {
        Some(arg) => parse_month_arg(&arg)?,
        None => first_of_month(Local::now().date_naive()),
    };

    let records = storage.records.get_all_ascending()?;
    print!("{}", format_month_calendar(anchor, &records));

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_month_arg() {
        assert_eq!(
            parse_month_arg("2025-10").unwrap(),
            NaiveDate::from_ymd_opt(2025, 10, 1).unwrap()
        );
        assert!(parse_month_arg("2025").is_err());
        assert!(parse_month_arg("2025-13").is_err());
    }
}
