//! Core data models for WeightLog
//!
//! This module contains the data structures that represent the weight
//! tracking domain: records, weights, and their identifiers.

pub mod ids;
pub mod record;
pub mod weight;

pub use ids::RecordId;
pub use record::{RecordValidationError, WeightRecord};
pub use weight::{Weight, WeightParseError};
