//! weightlog - Terminal-based personal weight tracking application
//!
//! This library provides the core functionality for the weightlog CLI.
//! Weights are entered keypad-style (digits only, implied decimal point),
//! stored as daily records, and viewed as monthly lists, a calendar grid,
//! or an ASCII trend chart against a target weight.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Configuration and path management
//! - `error`: Custom error types
//! - `models`: Core data models (records, weights, IDs)
//! - `storage`: JSON file storage layer
//! - `input`: Keypad digit buffer and weight formatting/parsing
//! - `services`: Business logic layer (records, aggregation, import)
//! - `export`: CSV export
//! - `display`: Terminal rendering (lists, calendar, chart)
//! - `cli`: clap command handlers
//!
//! # Example
//!
//! ```rust,ignore
//! use weightlog_cli::config::{WeightLogPaths, Settings};
//!
//! let paths = WeightLogPaths::new()?;
//! let settings = Settings::load_or_create(&paths)?;
//! ```

pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod export;
pub mod input;
pub mod models;
pub mod services;
pub mod storage;

pub use error::WeightLogError;
