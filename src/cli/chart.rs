//! Trend chart CLI command
//!
//! Renders an ASCII weight trend chart with the target weight overlaid.

use chrono::NaiveDate;

use crate::config::Settings;
use crate::display::{format_selected_point, format_trend_chart};
use crate::error::{WeightLogError, WeightLogResult};
use crate::storage::Storage;

/// Handle the chart command
pub fn handle_chart_command(
    storage: &Storage,
    settings: &Settings,
    date: Option<String>,
) -> WeightLogResult<()> {
    let records = storage.records.get_all_ascending()?;

    print!("{}", format_trend_chart(&records, settings.target_weight));

    if let Some(arg) = date {
        let date = NaiveDate::parse_from_str(&arg, "%Y-%m-%d").map_err(|_| {
            WeightLogError::Validation(format!("Invalid date '{}': expected YYYY-MM-DD", arg))
        })?;
        println!();
        println!("{}", format_selected_point(&records, date));
    }

    Ok(())
}
