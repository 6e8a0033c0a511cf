//! Weight record service
//!
//! Provides business logic for record management: creation with validation,
//! edits, deletion, and filtered listing.

use chrono::NaiveDate;

use crate::error::{WeightLogError, WeightLogResult};
use crate::models::{RecordId, Weight, WeightRecord};
use crate::storage::Storage;

/// Options for filtering listed records
#[derive(Debug, Clone, Copy, Default)]
pub struct RecordFilter {
    /// Inclusive range start
    pub start_date: Option<NaiveDate>,
    /// Inclusive range end
    pub end_date: Option<NaiveDate>,
}

impl RecordFilter {
    /// Create a new empty filter
    pub fn new() -> Self {
        Self::default()
    }

    /// Filter by inclusive date range
    pub fn date_range(mut self, start: NaiveDate, end: NaiveDate) -> Self {
        self.start_date = Some(start);
        self.end_date = Some(end);
        self
    }
}

/// Input for creating a new record
#[derive(Debug, Clone)]
pub struct CreateRecordInput {
    pub date: NaiveDate,
    pub weight: Weight,
    pub memo: Option<String>,
}

/// Input for editing an existing record
#[derive(Debug, Clone, Default)]
pub struct UpdateRecordInput {
    pub date: Option<NaiveDate>,
    pub weight: Option<Weight>,
    pub memo: Option<String>,
}

/// Service for weight record management
pub struct RecordService<'a> {
    storage: &'a Storage,
}

impl<'a> RecordService<'a> {
    /// Create a new record service
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    /// Create and persist a new record
    ///
    /// A non-positive weight is rejected without touching the store.
    pub fn create(&self, input: CreateRecordInput) -> WeightLogResult<WeightRecord> {
        if !input.weight.is_positive() {
            return Err(WeightLogError::Validation("Please enter a weight".into()));
        }

        let mut record = WeightRecord::new(input.date, input.weight);
        if let Some(memo) = input.memo {
            record.memo = memo.trim().to_string();
        }

        self.storage.records.upsert(record.clone())?;
        self.storage.records.save()?;

        Ok(record)
    }

    /// Get a record by ID
    pub fn get(&self, id: RecordId) -> WeightLogResult<WeightRecord> {
        self.storage
            .records
            .get(id)?
            .ok_or_else(|| WeightLogError::record_not_found(id.to_string()))
    }

    /// Update an existing record
    pub fn update(&self, id: RecordId, input: UpdateRecordInput) -> WeightLogResult<WeightRecord> {
        let mut record = self.get(id)?;

        if let Some(weight) = input.weight {
            if !weight.is_positive() {
                return Err(WeightLogError::Validation("Please enter a weight".into()));
            }
            record.set_weight(weight);
        }
        if let Some(date) = input.date {
            record.set_date(date);
        }
        if let Some(memo) = input.memo {
            record.set_memo(memo.trim().to_string());
        }

        self.storage.records.upsert(record.clone())?;
        self.storage.records.save()?;

        Ok(record)
    }

    /// Delete a record
    pub fn delete(&self, id: RecordId) -> WeightLogResult<()> {
        if !self.storage.records.delete(id)? {
            return Err(WeightLogError::record_not_found(id.to_string()));
        }
        self.storage.records.save()?;
        Ok(())
    }

    /// Delete all records, returning how many were removed
    pub fn delete_all(&self) -> WeightLogResult<usize> {
        let count = self.storage.records.delete_all()?;
        self.storage.records.save()?;
        Ok(count)
    }

    /// Resolve a user-supplied ID string to a record ID
    ///
    /// Accepts the full UUID or the short display form ("rec-1a2b3c4d").
    pub fn resolve_id(&self, s: &str) -> WeightLogResult<RecordId> {
        if let Ok(id) = s.parse::<RecordId>() {
            return Ok(id);
        }

        let needle = s.strip_prefix("rec-").unwrap_or(s);
        let matches: Vec<RecordId> = self
            .storage
            .records
            .get_all()?
            .iter()
            .map(|r| r.id)
            .filter(|id| id.as_uuid().to_string().starts_with(needle))
            .collect();

        match matches.len() {
            0 => Err(WeightLogError::record_not_found(s)),
            1 => Ok(matches[0]),
            _ => Err(WeightLogError::Validation(format!(
                "Record ID '{}' is ambiguous ({} matches)",
                s,
                matches.len()
            ))),
        }
    }

    /// List records newest first, optionally date-filtered
    pub fn list(&self, filter: RecordFilter) -> WeightLogResult<Vec<WeightRecord>> {
        match (filter.start_date, filter.end_date) {
            (Some(start), Some(end)) => self.storage.records.get_by_date_range(start, end),
            (Some(start), None) => {
                let all = self.storage.records.get_all()?;
                Ok(all.into_iter().filter(|r| r.date >= start).collect())
            }
            (None, Some(end)) => {
                let all = self.storage.records.get_all()?;
                Ok(all.into_iter().filter(|r| r.date <= end).collect())
            }
            (None, None) => self.storage.records.get_all(),
        }
    }
}
