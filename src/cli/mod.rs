//! CLI command handlers
//!
//! This module contains the implementation of CLI commands,
//! bridging the clap argument parsing with the service layer.

pub mod calendar;
pub mod chart;
pub mod data;
pub mod record;
pub mod target;

pub use calendar::handle_calendar_command;
pub use chart::handle_chart_command;
pub use data::{handle_export_command, handle_import_command};
pub use record::{handle_record_command, RecordCommands};
pub use target::{handle_target_command, TargetCommands};
