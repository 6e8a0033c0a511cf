//! CSV export functionality
//!
//! Writes weight records in the app's CSV exchange format. The header and
//! row layout are fixed so exports stay readable by older versions:
//!
//! ```text
//! 日付,体重(kg),メモ
//! 2025/05/24,65.5,after run
//! ```

use std::io::Write;

use crate::error::{WeightLogError, WeightLogResult};
use crate::models::WeightRecord;

/// CSV header line
pub const CSV_HEADER: &str = "日付,体重(kg),メモ";

/// Date format used in CSV rows
pub const CSV_DATE_FORMAT: &str = "%Y/%m/%d";

/// Render records as a CSV string
///
/// Weights carry exactly one decimal place; commas in memos are replaced
/// with spaces so rows stay three fields wide.
pub fn generate_csv(records: &[WeightRecord]) -> String {
    let mut csv = String::from(CSV_HEADER);
    csv.push('\n');

    for record in records {
        let date = record.date.format(CSV_DATE_FORMAT);
        let memo = record.memo.replace(',', " ");
        csv.push_str(&format!("{},{},{}\n", date, record.weight, memo));
    }

    csv
}

/// Export records as CSV to a writer
pub fn export_records_csv<W: Write>(records: &[WeightRecord], writer: &mut W) -> WeightLogResult<()> {
    writer
        .write_all(generate_csv(records).as_bytes())
        .map_err(|e| WeightLogError::Export(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Weight;
    use chrono::NaiveDate;

    fn record(y: i32, m: u32, d: u32, tenths: i64, memo: &str) -> WeightRecord {
        WeightRecord::with_memo(
            NaiveDate::from_ymd_opt(y, m, d).unwrap(),
            Weight::from_tenths(tenths),
            memo,
        )
    }

    #[test]
    fn test_generate_csv_format() {
        let records = vec![
            record(2025, 5, 24, 655, "after run"),
            record(2025, 5, 25, 650, ""),
        ];

        let csv = generate_csv(&records);
        assert_eq!(
            csv,
            "日付,体重(kg),メモ\n2025/05/24,65.5,after run\n2025/05/25,65.0,\n"
        );
    }

    #[test]
    fn test_generate_csv_empty() {
        assert_eq!(generate_csv(&[]), "日付,体重(kg),メモ\n");
    }

    #[test]
    fn test_memo_commas_replaced_with_spaces() {
        let records = vec![record(2025, 5, 24, 655, "one,two,three")];
        let csv = generate_csv(&records);
        assert!(csv.contains("65.5,one two three"));
    }

    #[test]
    fn test_weight_always_one_decimal_place() {
        let records = vec![record(2025, 5, 24, 650, "")];
        let csv = generate_csv(&records);
        assert!(csv.contains(",65.0,"));
    }

    #[test]
    fn test_export_to_writer() {
        let records = vec![record(2025, 5, 24, 655, "memo")];
        let mut buf = Vec::new();
        export_records_csv(&records, &mut buf).unwrap();
        assert_eq!(String::from_utf8(buf).unwrap(), generate_csv(&records));
    }
}
