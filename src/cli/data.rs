//! CSV export and import CLI commands
//!
//! Export writes the fixed-column CSV (date, weight, memo); import reads
//! the same layout back, skipping malformed rows and reporting them.

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

use crate::error::{WeightLogError, WeightLogResult};
use crate::export::export_records_csv;
use crate::services::ImportService;
use crate::storage::Storage;

/// Handle the export command
pub fn handle_export_command(storage: &Storage, output: Option<PathBuf>) -> WeightLogResult<()> {
    let records = storage.records.get_all_ascending()?;

    match output {
        Some(path) => {
            let file = File::create(&path).map_err(|e| {
                WeightLogError::Export(format!("Failed to create {}: {}", path.display(), e))
            })?;
            let mut writer = BufWriter::new(file);
            export_records_csv(&records, &mut writer)?;
            writer
                .flush()
                .map_err(|e| WeightLogError::Export(format!("Failed to write CSV: {}", e)))?;

            println!("Exported {} records to {}", records.len(), path.display());
        }
        None => {
            let stdout = io::stdout();
            let mut writer = stdout.lock();
            export_records_csv(&records, &mut writer)?;
        }
    }

    Ok(())
}

/// Handle the import command
pub fn handle_import_command(storage: &Storage, file: &str) -> WeightLogResult<()> {
    let path = Path::new(file);
    if !path.exists() {
        return Err(WeightLogError::Import(format!("File not found: {}", file)));
    }

    let import_service = ImportService::new(storage);
    let result = import_service.import_from_path(path)?;

    println!("Imported {} records.", result.imported);
    if !result.skipped.is_empty() {
        println!("Skipped {} rows:", result.skipped.len());
        for skipped in &result.skipped {
            println!("  row {}: {}", skipped.row, skipped.reason);
        }
    }

    Ok(())
}
