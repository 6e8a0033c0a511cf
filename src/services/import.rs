//! CSV import service
//!
//! Reads weight records from the app's CSV exchange format. Rows that fail
//! to parse are skipped and reported per-row; a file that cannot be read at
//! all fails the whole import with a single error before any row is stored.

use std::path::Path;

use chrono::NaiveDate;

use crate::error::{WeightLogError, WeightLogResult};
use crate::export::csv::CSV_DATE_FORMAT;
use crate::models::{Weight, WeightRecord};
use crate::storage::Storage;

/// A row the importer could not accept
#[derive(Debug, Clone)]
pub struct SkippedRow {
    /// 1-based data row number (header not counted)
    pub row: usize,
    /// Human-readable reason
    pub reason: String,
}

/// Result of a completed import
#[derive(Debug, Clone, Default)]
pub struct ImportResult {
    /// Number of records imported
    pub imported: usize,
    /// Rows that were skipped, with reasons
    pub skipped: Vec<SkippedRow>,
}

/// Service for CSV import
pub struct ImportService<'a> {
    storage: &'a Storage,
}

impl<'a> ImportService<'a> {
    /// Create a new import service
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    /// Import records from a CSV file
    pub fn import_from_path(&self, path: &Path) -> WeightLogResult<ImportResult> {
        let contents = std::fs::read_to_string(path).map_err(|e| {
            WeightLogError::Import(format!("Failed to read {}: {}", path.display(), e))
        })?;
        self.import_from_str(&contents)
    }

    /// Import records from CSV data
    ///
    /// The first line is treated as the header and skipped. A data row is
    /// accepted when its first field parses as `yyyy/MM/dd` and its second
    /// as a decimal number; the third field is an optional memo.
    pub fn import_from_str(&self, data: &str) -> WeightLogResult<ImportResult> {
        let mut reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .from_reader(data.as_bytes());

        let mut result = ImportResult::default();
        let mut accepted: Vec<WeightRecord> = Vec::new();

        for (idx, row) in reader.records().enumerate() {
            let row_number = idx + 1;
            let record = match row {
                Ok(record) => record,
                Err(e) => {
                    result.skipped.push(SkippedRow {
                        row: row_number,
                        reason: format!("Unreadable row: {}", e),
                    });
                    continue;
                }
            };

            match parse_row(&record) {
                Ok(parsed) => accepted.push(parsed),
                Err(reason) => result.skipped.push(SkippedRow {
                    row: row_number,
                    reason,
                }),
            }
        }

        for record in accepted {
            self.storage.records.upsert(record)?;
            result.imported += 1;
        }
        self.storage.records.save()?;

        Ok(result)
    }
}

/// Parse a single CSV data row into a record
fn parse_row(record: &csv::StringRecord) -> Result<WeightRecord, String> {
    let date_str = record
        .get(0)
        .ok_or_else(|| "Missing date field".to_string())?
        .trim();
    let date = NaiveDate::parse_from_str(date_str, CSV_DATE_FORMAT)
        .map_err(|_| format!("Could not parse date: '{}'", date_str))?;

    let weight_str = record
        .get(1)
        .ok_or_else(|| "Missing weight field".to_string())?
        .trim();
    let weight = Weight::parse(weight_str)
        .map_err(|_| format!("Could not parse weight: '{}'", weight_str))?;

    let memo = record.get(2).map(|s| s.to_string()).unwrap_or_default();

    Ok(WeightRecord::with_memo(date, weight, memo))
}
