//! Weight record repository for JSON storage
//!
//! Manages loading and saving weight records to records.json

use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::RwLock;

use chrono::NaiveDate;

use crate::error::WeightLogError;
use crate::models::{RecordId, WeightRecord};

use super::file_io::{read_json, write_json_atomic};

/// Serializable record data structure
#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
struct RecordData {
    records: Vec<WeightRecord>,
}

/// Repository for weight record persistence
pub struct RecordRepository {
    path: PathBuf,
    data: RwLock<HashMap<RecordId, WeightRecord>>,
}

impl RecordRepository {
    /// Create a new record repository
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            data: RwLock::new(HashMap::new()),
        }
    }

    /// Load records from disk
    pub fn load(&self) -> Result<(), WeightLogError> {
        let file_data: RecordData = read_json(&self.path)?;

        let mut data = self
            .data
            .write()
            .map_err(|e| WeightLogError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        data.clear();
        for record in file_data.records {
            data.insert(record.id, record);
        }

        Ok(())
    }

    /// Save records to disk
    pub fn save(&self) -> Result<(), WeightLogError> {
        let data = self
            .data
            .read()
            .map_err(|e| WeightLogError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        let mut records: Vec<_> = data.values().cloned().collect();
        records.sort_by(|a, b| b.date.cmp(&a.date).then(b.created_at.cmp(&a.created_at)));

        let file_data = RecordData { records };
        write_json_atomic(&self.path, &file_data)
    }

    /// Get a record by ID
    pub fn get(&self, id: RecordId) -> Result<Option<WeightRecord>, WeightLogError> {
        let data = self
            .data
            .read()
            .map_err(|e| WeightLogError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        Ok(data.get(&id).cloned())
    }

    /// Get all records, newest first
    pub fn get_all(&self) -> Result<Vec<WeightRecord>, WeightLogError> {
        let data = self
            .data
            .read()
            .map_err(|e| WeightLogError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        let mut records: Vec<_> = data.values().cloned().collect();
        records.sort_by(|a, b| b.date.cmp(&a.date).then(b.created_at.cmp(&a.created_at)));
        Ok(records)
    }

    /// Get all records, oldest first (chart and calendar order)
    pub fn get_all_ascending(&self) -> Result<Vec<WeightRecord>, WeightLogError> {
        let mut records = self.get_all()?;
        records.reverse();
        Ok(records)
    }

    /// Get records in an inclusive date range, newest first
    pub fn get_by_date_range(
        &self,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<Vec<WeightRecord>, WeightLogError> {
        let all = self.get_all()?;
        Ok(all
            .into_iter()
            .filter(|r| r.date >= start && r.date <= end)
            .collect())
    }

    /// Insert or update a record
    pub fn upsert(&self, record: WeightRecord) -> Result<(), WeightLogError> {
        let mut data = self
            .data
            .write()
            .map_err(|e| WeightLogError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        data.insert(record.id, record);
        Ok(())
    }

    /// Delete a record, returning whether it existed
    pub fn delete(&self, id: RecordId) -> Result<bool, WeightLogError> {
        let mut data = self
            .data
            .write()
            .map_err(|e| WeightLogError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        Ok(data.remove(&id).is_some())
    }

    /// Delete all records, returning how many were removed
    pub fn delete_all(&self) -> Result<usize, WeightLogError> {
        let mut data = self
            .data
            .write()
            .map_err(|e| WeightLogError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        let count = data.len();
        data.clear();
        Ok(count)
    }

    /// Count records
    pub fn count(&self) -> Result<usize, WeightLogError> {
        let data = self
            .data
            .read()
            .map_err(|e| WeightLogError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        Ok(data.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Weight;
    use tempfile::TempDir;

    fn create_test_repo() -> (TempDir, RecordRepository) {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("records.json");
        let repo = RecordRepository::new(path);
        (temp_dir, repo)
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_empty_load() {
        let (_temp_dir, repo) = create_test_repo();
        repo.load().unwrap();
        assert_eq!(repo.count().unwrap(), 0);
    }

    #[test]
    fn test_upsert_and_get() {
        let (_temp_dir, repo) = create_test_repo();
        repo.load().unwrap();

        let record = WeightRecord::new(date(2025, 5, 24), Weight::from_tenths(655));
        let id = record.id;

        repo.upsert(record).unwrap();

        let retrieved = repo.get(id).unwrap().unwrap();
        assert_eq!(retrieved.weight, Weight::from_tenths(655));
    }

    #[test]
    fn test_get_all_sorted_newest_first() {
        let (_temp_dir, repo) = create_test_repo();
        repo.load().unwrap();

        repo.upsert(WeightRecord::new(date(2025, 5, 10), Weight::from_tenths(650)))
            .unwrap();
        repo.upsert(WeightRecord::new(date(2025, 5, 20), Weight::from_tenths(645)))
            .unwrap();
        repo.upsert(WeightRecord::new(date(2025, 5, 15), Weight::from_tenths(648)))
            .unwrap();

        let all = repo.get_all().unwrap();
        assert_eq!(all.len(), 3);
        assert_eq!(all[0].date, date(2025, 5, 20));
        assert_eq!(all[2].date, date(2025, 5, 10));

        let ascending = repo.get_all_ascending().unwrap();
        assert_eq!(ascending[0].date, date(2025, 5, 10));
    }

    #[test]
    fn test_save_and_reload() {
        let (temp_dir, repo) = create_test_repo();
        repo.load().unwrap();

        let record = WeightRecord::with_memo(date(2025, 5, 24), Weight::from_tenths(655), "memo");
        let id = record.id;

        repo.upsert(record).unwrap();
        repo.save().unwrap();

        let path = temp_dir.path().join("records.json");
        let repo2 = RecordRepository::new(path);
        repo2.load().unwrap();

        assert_eq!(repo2.count().unwrap(), 1);
        let retrieved = repo2.get(id).unwrap().unwrap();
        assert_eq!(retrieved.weight, Weight::from_tenths(655));
        assert_eq!(retrieved.memo, "memo");
    }

    #[test]
    fn test_delete() {
        let (_temp_dir, repo) = create_test_repo();
        repo.load().unwrap();

        let record = WeightRecord::new(date(2025, 5, 24), Weight::from_tenths(655));
        let id = record.id;

        repo.upsert(record).unwrap();
        assert_eq!(repo.count().unwrap(), 1);

        assert!(repo.delete(id).unwrap());
        assert_eq!(repo.count().unwrap(), 0);
        assert!(!repo.delete(id).unwrap());
    }

    #[test]
    fn test_delete_all() {
        let (_temp_dir, repo) = create_test_repo();
        repo.load().unwrap();

        repo.upsert(WeightRecord::new(date(2025, 5, 10), Weight::from_tenths(650)))
            .unwrap();
        repo.upsert(WeightRecord::new(date(2025, 5, 11), Weight::from_tenths(649)))
            .unwrap();

        assert_eq!(repo.delete_all().unwrap(), 2);
        assert_eq!(repo.count().unwrap(), 0);
    }

    #[test]
    fn test_date_range_query() {
        let (_temp_dir, repo) = create_test_repo();
        repo.load().unwrap();

        repo.upsert(WeightRecord::new(date(2025, 1, 10), Weight::from_tenths(650)))
            .unwrap();
        repo.upsert(WeightRecord::new(date(2025, 1, 15), Weight::from_tenths(645)))
            .unwrap();
        repo.upsert(WeightRecord::new(date(2025, 1, 20), Weight::from_tenths(640)))
            .unwrap();

        let range = repo
            .get_by_date_range(date(2025, 1, 12), date(2025, 1, 18))
            .unwrap();

        assert_eq!(range.len(), 1);
        assert_eq!(range[0].date, date(2025, 1, 15));
    }

    #[test]
    fn test_duplicate_dates_allowed() {
        let (_temp_dir, repo) = create_test_repo();
        repo.load().unwrap();

        repo.upsert(WeightRecord::new(date(2025, 5, 24), Weight::from_tenths(655)))
            .unwrap();
        repo.upsert(WeightRecord::new(date(2025, 5, 24), Weight::from_tenths(650)))
            .unwrap();

        assert_eq!(repo.count().unwrap(), 2);
    }
}
