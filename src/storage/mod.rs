//! Storage layer for WeightLog
//!
//! Provides JSON file storage with atomic writes and automatic directory
//! creation.

pub mod file_io;
pub mod init;
pub mod records;

pub use file_io::{read_json, write_json_atomic};
pub use init::initialize_storage;
pub use records::RecordRepository;

use crate::config::paths::WeightLogPaths;
use crate::error::WeightLogError;

/// Main storage coordinator
pub struct Storage {
    paths: WeightLogPaths,
    pub records: RecordRepository,
}

impl Storage {
    /// Create a new Storage instance
    pub fn new(paths: WeightLogPaths) -> Result<Self, WeightLogError> {
        // Ensure directories exist
        paths.ensure_directories()?;

        Ok(Self {
            records: RecordRepository::new(paths.records_file()),
            paths,
        })
    }

    /// Get the paths configuration
    pub fn paths(&self) -> &WeightLogPaths {
        &self.paths
    }

    /// Load all data from disk
    pub fn load_all(&mut self) -> Result<(), WeightLogError> {
        self.records.load()?;
        Ok(())
    }

    /// Save all data to disk
    pub fn save_all(&self) -> Result<(), WeightLogError> {
        self.records.save()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Weight, WeightRecord};
    use chrono::NaiveDate;
    use tempfile::TempDir;

    #[test]
    fn test_storage_lifecycle() {
        let temp_dir = TempDir::new().unwrap();
        let paths = WeightLogPaths::with_base_dir(temp_dir.path().to_path_buf());

        let mut storage = Storage::new(paths.clone()).unwrap();
        storage.load_all().unwrap();

        let record = WeightRecord::new(
            NaiveDate::from_ymd_opt(2025, 5, 24).unwrap(),
            Weight::from_tenths(655),
        );
        storage.records.upsert(record).unwrap();
        storage.save_all().unwrap();

        let mut storage2 = Storage::new(paths).unwrap();
        storage2.load_all().unwrap();
        assert_eq!(storage2.records.count().unwrap(), 1);
    }
}
