//! Weight record model
//!
//! Represents a single dated weight measurement with an optional memo.
//! Multiple records on the same calendar day are allowed; the aggregation
//! layer decides which one a calendar cell shows.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::RecordId;
use super::weight::Weight;

/// A persisted weight measurement
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeightRecord {
    /// Unique identifier
    pub id: RecordId,

    /// Measurement date (time of day is not significant)
    pub date: NaiveDate,

    /// The measured weight
    pub weight: Weight,

    /// Free-text memo, may be empty
    #[serde(default)]
    pub memo: String,

    /// When the record was created
    pub created_at: DateTime<Utc>,

    /// When the record was last modified
    pub updated_at: DateTime<Utc>,
}

impl WeightRecord {
    /// Create a new record
    pub fn new(date: NaiveDate, weight: Weight) -> Self {
        let now = Utc::now();
        Self {
            id: RecordId::new(),
            date,
            weight,
            memo: String::new(),
            created_at: now,
            updated_at: now,
        }
    }

    /// Create a record with a memo
    pub fn with_memo(date: NaiveDate, weight: Weight, memo: impl Into<String>) -> Self {
        let mut record = Self::new(date, weight);
        record.memo = memo.into();
        record
    }

    /// Update the measured weight
    pub fn set_weight(&mut self, weight: Weight) {
        self.weight = weight;
        self.updated_at = Utc::now();
    }

    /// Update the measurement date
    pub fn set_date(&mut self, date: NaiveDate) {
        self.date = date;
        self.updated_at = Utc::now();
    }

    /// Update the memo
    pub fn set_memo(&mut self, memo: impl Into<String>) {
        self.memo = memo.into();
        self.updated_at = Utc::now();
    }

    /// Validate the record
    pub fn validate(&self) -> Result<(), RecordValidationError> {
        if !self.weight.is_positive() {
            return Err(RecordValidationError::NonPositiveWeight(self.weight));
        }
        Ok(())
    }
}

impl fmt::Display for WeightRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} kg", self.date.format("%Y-%m-%d"), self.weight)
    }
}

/// Validation errors for weight records
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecordValidationError {
    NonPositiveWeight(Weight),
}

impl fmt::Display for RecordValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NonPositiveWeight(w) => {
                write!(f, "Weight must be positive, got {} kg", w)
            }
        }
    }
}

impl std::error::Error for RecordValidationError {}
