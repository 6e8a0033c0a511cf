//! Configuration module for WeightLog
//!
//! This module provides configuration management including:
//! - XDG-compliant path resolution
//! - User settings persistence

pub mod paths;
pub mod settings;

pub use paths::WeightLogPaths;
pub use settings::{ColorScheme, Settings};
