//! Trend chart display
//!
//! Renders the weight history as a simple terminal chart with the target
//! weight drawn as a dashed reference line. The Y axis uses the same range
//! rule as the app's chart: one kilogram of margin rounded outward, with a
//! 50..70 fallback when there is nothing to plot.

use chrono::NaiveDate;

use crate::models::WeightRecord;
use crate::services::aggregate::{first_record_on_day, weight_axis_range};

const CHART_HEIGHT: usize = 11;

/// Render the trend chart for `records` (expected oldest first)
pub fn format_trend_chart(records: &[WeightRecord], target: f64) -> String {
    if records.is_empty() {
        return "No records yet.\n".to_string();
    }

    let (lower, upper) = weight_axis_range(records, target);
    let span = upper - lower;

    // Top row is the upper bound
    let row_of = |kg: f64| -> usize {
        let frac = (upper - kg) / span;
        ((frac * (CHART_HEIGHT - 1) as f64).round() as usize).min(CHART_HEIGHT - 1)
    };
    let target_row = row_of(target);

    let mut grid = vec![vec![' '; records.len()]; CHART_HEIGHT];
    for (col, record) in records.iter().enumerate() {
        grid[row_of(record.weight.kg())][col] = '*';
    }
    for cell in grid[target_row].iter_mut() {
        if *cell == ' ' {
            *cell = '-';
        }
    }

    let mut output = String::new();
    for (row_idx, row) in grid.iter().enumerate() {
        let label = if row_idx == 0 {
            format!("{:>6.1}", upper)
        } else if row_idx == CHART_HEIGHT - 1 {
            format!("{:>6.1}", lower)
        } else if row_idx == target_row {
            format!("{:>6.1}", target)
        } else {
            " ".repeat(6)
        };
        let line: String = row.iter().collect();
        output.push_str(&format!("{} |{}\n", label, line));
    }

    output.push_str(&format!(
        "        {} .. {}  ({} records, target {:.1} kg)\n",
        records[0].date.format("%Y-%m-%d"),
        records[records.len() - 1].date.format("%Y-%m-%d"),
        records.len(),
        target
    ));

    if records.len() < 3 {
        output.push_str("Note: with few records the trend may not be meaningful.\n");
    }

    output
}

/// Format the detail annotation for a selected chart date
///
/// If multiple records share the day, the first in collection order is shown.
pub fn format_selected_point(records: &[WeightRecord], date: NaiveDate) -> String {
    match first_record_on_day(records, date) {
        Some(record) => format!(
            "{}  {} kg{}\n",
            record.date.format("%Y/%m/%d"),
            record.weight,
            if record.memo.is_empty() {
                String::new()
            } else {
                format!("  {}", record.memo)
            }
        ),
        None => format!("No record on {}\n", date.format("%Y/%m/%d")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Weight;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn record(d: u32, kg: f64) -> WeightRecord {
        WeightRecord::new(date(2025, 5, d), Weight::from_kg(kg))
    }

    #[test]
    fn test_empty_chart() {
        assert_eq!(format_trend_chart(&[], 60.0), "No records yet.\n");
    }

    #[test]
    fn test_chart_has_bounds_and_target() {
        let records = vec![record(10, 59.4), record(11, 61.2), record(12, 60.8)];
        let output = format_trend_chart(&records, 60.0);

        // Axis range per the 1 kg margin rule
        assert!(output.contains("63.0"));
        assert!(output.contains("58.0"));
        assert!(output.contains("target 60.0 kg"));
        assert!(output.contains('-'));
        assert_eq!(output.matches('*').count(), 3);
    }

    #[test]
    fn test_chart_few_records_note() {
        let records = vec![record(10, 60.0)];
        let output = format_trend_chart(&records, 60.0);
        assert!(output.contains("few records"));
    }

    #[test]
    fn test_selected_point() {
        let records = vec![record(10, 63.4), record(10, 62.0)];

        let hit = format_selected_point(&records, date(2025, 5, 10));
        assert!(hit.contains("2025/05/10"));
        assert!(hit.contains("63.4 kg"));

        let miss = format_selected_point(&records, date(2025, 5, 11));
        assert!(miss.contains("No record on 2025/05/11"));
    }
}
