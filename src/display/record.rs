//! Record list display formatting
//!
//! Renders the month-grouped record list with per-month statistics headers,
//! mirroring the sectioned list view of the app.

use crate::models::WeightRecord;
use crate::services::aggregate::{stats, MonthGroup};

/// Format a single record for list display
pub fn format_record_row(record: &WeightRecord) -> String {
    let memo = if record.memo.is_empty() {
        String::new()
    } else {
        format!("  {}", record.memo)
    };

    format!(
        "  {} {} ({})  {:>6} kg{}",
        record.id,
        record.date.format("%Y-%m-%d"),
        record.date.format("%a"),
        record.weight.to_string(),
        memo
    )
}

/// Format a month section header with average, minimum, and maximum
pub fn format_month_header(group: &MonthGroup) -> String {
    let s = stats(&group.records);
    format!(
        "{}  avg {:.1}  min {}  max {} kg",
        group.month.format("%Y-%m"),
        s.average,
        s.min,
        s.max
    )
}

/// Format month-grouped records as a sectioned list
pub fn format_record_list(groups: &[MonthGroup]) -> String {
    if groups.is_empty() {
        return "No records yet. Run 'weightlog record add' to get started.\n".to_string();
    }

    let mut output = String::new();
    for group in groups {
        output.push_str(&format_month_header(group));
        output.push('\n');
        for record in &group.records {
            output.push_str(&format_record_row(record));
            output.push('\n');
        }
        output.push('\n');
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Weight;
    use crate::services::aggregate::group_by_month;
    use chrono::NaiveDate;

    fn record(y: i32, m: u32, d: u32, kg: f64, memo: &str) -> WeightRecord {
        WeightRecord::with_memo(
            NaiveDate::from_ymd_opt(y, m, d).unwrap(),
            Weight::from_kg(kg),
            memo,
        )
    }

    #[test]
    fn test_format_record_row() {
        let row = format_record_row(&record(2025, 5, 24, 65.5, "after run"));
        assert!(row.contains("2025-05-24"));
        assert!(row.contains("65.5 kg"));
        assert!(row.contains("after run"));
    }

    #[test]
    fn test_format_month_header() {
        let records = vec![
            record(2025, 5, 10, 60.0, ""),
            record(2025, 5, 11, 62.0, ""),
            record(2025, 5, 12, 64.0, ""),
        ];
        let groups = group_by_month(&records);

        let header = format_month_header(&groups[0]);
        assert!(header.contains("2025-05"));
        assert!(header.contains("avg 62.0"));
        assert!(header.contains("min 60.0"));
        assert!(header.contains("max 64.0"));
    }

    #[test]
    fn test_empty_list() {
        let output = format_record_list(&[]);
        assert!(output.contains("No records yet"));
    }

    #[test]
    fn test_sectioned_list() {
        let records = vec![record(2025, 4, 28, 66.0, ""), record(2025, 5, 2, 65.5, "")];
        let groups = group_by_month(&records);

        let output = format_record_list(&groups);
        let may_pos = output.find("2025-05").unwrap();
        let april_pos = output.find("2025-04").unwrap();
        assert!(may_pos < april_pos);
    }
}
