//! Record CLI commands
//!
//! Implements add/list/edit/delete for weight records. Adding takes the
//! keypad digit form ("655" means 65.5 kg) and echoes the live-format
//! preview before committing; editing takes a plain decimal weight, like
//! the app's edit form did.

use chrono::{Local, NaiveDate};
use clap::Subcommand;

use crate::config::{Settings, WeightLogPaths};
use crate::display::format_record_list;
use crate::error::{WeightLogError, WeightLogResult};
use crate::input::DigitBuffer;
use crate::models::Weight;
use crate::services::aggregate::group_by_month;
use crate::services::{CreateRecordInput, RecordFilter, RecordService, UpdateRecordInput};
use crate::storage::Storage;

/// Record subcommands
#[derive(Subcommand)]
pub enum RecordCommands {
    /// Add a new weight record using keypad digits (e.g. "655" for 65.5 kg)
    Add {
        /// Keypad digit input, no decimal point
        digits: String,
        /// Record date (YYYY-MM-DD), defaults to today
        #[arg(short, long)]
        date: Option<String>,
        /// Memo
        #[arg(short, long)]
        memo: Option<String>,
    },
    /// List records grouped by month
    List {
        /// Start date (YYYY-MM-DD)
        #[arg(long)]
        from: Option<String>,
        /// End date (YYYY-MM-DD)
        #[arg(long)]
        to: Option<String>,
    },
    /// Edit a record
    Edit {
        /// Record ID
        id: String,
        /// New weight as a decimal (e.g. "65.4")
        #[arg(short, long)]
        weight: Option<String>,
        /// New date (YYYY-MM-DD)
        #[arg(short, long)]
        date: Option<String>,
        /// New memo
        #[arg(short, long)]
        memo: Option<String>,
    },
    /// Delete a record
    Delete {
        /// Record ID
        id: String,
    },
    /// Delete all records
    DeleteAll {
        /// Confirm the deletion
        #[arg(long)]
        force: bool,
    },
}

/// Parse a YYYY-MM-DD date argument
pub fn parse_date_arg(s: &str) -> WeightLogResult<NaiveDate> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .map_err(|_| WeightLogError::Validation(format!("Invalid date: '{}' (expected YYYY-MM-DD)", s)))
}

/// Handle a record command
pub fn handle_record_command(
    storage: &Storage,
    settings: &mut Settings,
    paths: &WeightLogPaths,
    cmd: RecordCommands,
) -> WeightLogResult<()> {
    let service = RecordService::new(storage);

    match cmd {
        RecordCommands::Add { digits, date, memo } => {
            let date = match date {
                Some(s) => parse_date_arg(&s)?,
                None => Local::now().date_naive(),
            };

            let buffer = DigitBuffer::from_digits(&digits);
            println!("{} kg", buffer.display());

            let record = service.create(CreateRecordInput {
                date,
                weight: buffer.commit(),
                memo,
            })?;

            // Remembered for compatibility with the settings file, never read
            settings.last_saved_weight = record.weight.kg();
            settings.save(paths)?;

            println!("Saved {} kg on {} ({})", record.weight, record.date, record.id);
        }
        RecordCommands::List { from, to } => {
            let mut filter = RecordFilter::new();
            if let Some(s) = from {
                filter.start_date = Some(parse_date_arg(&s)?);
            }
            if let Some(s) = to {
                filter.end_date = Some(parse_date_arg(&s)?);
            }

            let records = service.list(filter)?;
            let groups = group_by_month(&records);
            print!("{}", format_record_list(&groups));
        }
        RecordCommands::Edit {
            id,
            weight,
            date,
            memo,
        } => {
            let id = service.resolve_id(&id)?;

            let mut input = UpdateRecordInput::default();
            if let Some(s) = weight {
                let parsed = Weight::parse(&s)
                    .map_err(|e| WeightLogError::Validation(e.to_string()))?;
                input.weight = Some(parsed);
            }
            if let Some(s) = date {
                input.date = Some(parse_date_arg(&s)?);
            }
            input.memo = memo;

            let record = service.update(id, input)?;
            println!("Updated {}: {} kg on {}", record.id, record.weight, record.date);
        }
        RecordCommands::Delete { id } => {
            let id = service.resolve_id(&id)?;
            service.delete(id)?;
            println!("Deleted {}", id);
        }
        RecordCommands::DeleteAll { force } => {
            if !force {
                return Err(WeightLogError::Validation(
                    "This deletes every record and cannot be undone; pass --force to confirm"
                        .into(),
                ));
            }
            let count = service.delete_all()?;
            println!("Deleted {} records", count);
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_date_arg() {
        assert_eq!(
            parse_date_arg("2025-05-24").unwrap(),
            NaiveDate::from_ymd_opt(2025, 5, 24).unwrap()
        );
        assert!(parse_date_arg("2025/05/24").is_err());
        assert!(parse_date_arg("yesterday").is_err());
    }
}
