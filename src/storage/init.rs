//! Storage initialization
//!
//! Handles first-run setup.

use crate::config::paths::WeightLogPaths;
use crate::error::WeightLogError;

use super::file_io::write_json_atomic;

/// Initialize storage for a fresh installation
///
/// Creates the data directory and an empty records file if none exists.
pub fn initialize_storage(paths: &WeightLogPaths) -> Result<(), WeightLogError> {
    paths.ensure_directories()?;

    if !paths.records_file().exists() {
        let empty = serde_json::json!({ "records": [] });
        write_json_atomic(paths.records_file(), &empty)?;
    }

    Ok(())
}
