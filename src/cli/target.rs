//! Target weight CLI commands
//!
//! Shows or updates the target weight used by the trend chart.

use clap::Subcommand;

use crate::config::{Settings, WeightLogPaths};
use crate::error::{WeightLogError, WeightLogResult};
use crate::models::Weight;

/// Target subcommands
#[derive(Subcommand)]
pub enum TargetCommands {
    /// Show the current target weight
    Show,

    /// Set the target weight
    Set {
        /// Target weight in kg (e.g., "60.0")
        weight: String,
    },
}

/// Handle a target command
pub fn handle_target_command(
    settings: &mut Settings,
    paths: &WeightLogPaths,
    cmd: TargetCommands,
) -> WeightLogResult<()> {
    match cmd {
        TargetCommands::Show => {
            println!("Target weight: {:.1} kg", settings.target_weight);
        }
        TargetCommands::Set { weight } => {
            let weight = Weight::parse(&weight)
                .map_err(|e| WeightLogError::Validation(format!("Invalid target weight: {}", e)))?;
            if !weight.is_positive() {
                return Err(WeightLogError::Validation(
                    "Target weight must be positive".to_string(),
                ));
            }

            settings.target_weight = weight.kg();
            settings.save(paths)?;

            println!("Target weight set to {} kg", weight);
        }
    }

    Ok(())
}
