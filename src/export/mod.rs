//! Data export for WeightLog
//!
//! Currently the only exchange format is the fixed CSV layout.

pub mod csv;

pub use csv::{export_records_csv, generate_csv};
