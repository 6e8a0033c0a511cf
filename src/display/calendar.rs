//! Month calendar display
//!
//! Renders a Sunday-first month grid with the day's weight under each date.
//! Leading placeholder cells keep the first day on its weekday column.

use chrono::{Datelike, NaiveDate};

use crate::models::WeightRecord;
use crate::services::aggregate::{first_record_on_day, month_calendar_dates};

const CELL_WIDTH: usize = 7;

/// Render the month grid containing `anchor`
pub fn format_month_calendar(anchor: NaiveDate, records: &[WeightRecord]) -> String {
    let mut output = String::new();

    output.push_str(&format!("{:^width$}\n", anchor.format("%Y-%m"), width = CELL_WIDTH * 7));
    for day in ["Su", "Mo", "Tu", "We", "Th", "Fr", "Sa"] {
        output.push_str(&format!("{:^width$}", day, width = CELL_WIDTH));
    }
    output.push('\n');

    let cells = month_calendar_dates(anchor);
    for week in cells.chunks(7) {
        let mut day_line = String::new();
        let mut weight_line = String::new();

        for cell in week {
            match cell {
                Some(date) => {
                    day_line.push_str(&format!("{:^width$}", date.day(), width = CELL_WIDTH));
                    let weight = first_record_on_day(records, *date)
                        .map(|r| r.weight.to_string())
                        .unwrap_or_default();
                    weight_line.push_str(&format!("{:^width$}", weight, width = CELL_WIDTH));
                }
                None => {
                    // Empty leading cell
                    day_line.push_str(&" ".repeat(CELL_WIDTH));
                    weight_line.push_str(&" ".repeat(CELL_WIDTH));
                }
            }
        }

        output.push_str(day_line.trim_end());
        output.push('\n');
        if !weight_line.trim().is_empty() {
            output.push_str(weight_line.trim_end());
            output.push('\n');
        }
    }

    output
}
