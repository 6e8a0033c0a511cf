//! Service layer for WeightLog
//!
//! The service layer provides business logic on top of the storage layer:
//! record management, view aggregation, and CSV import.

pub mod aggregate;
pub mod import;
pub mod record;

pub use aggregate::{MonthGroup, WeightStats};
pub use import::{ImportResult, ImportService, SkippedRow};
pub use record::{CreateRecordInput, RecordFilter, RecordService, UpdateRecordInput};
