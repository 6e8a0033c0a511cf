//! User settings for WeightLog
//!
//! Manages user preferences: the target weight shown on the trend chart,
//! the color scheme preference, and the last saved weight.

use serde::{Deserialize, Serialize};

use super::paths::WeightLogPaths;
use crate::error::WeightLogError;

/// Color scheme preference
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ColorScheme {
    /// Follow the system appearance (default)
    #[default]
    System,
    /// Always light
    Light,
    /// Always dark
    Dark,
}

impl std::fmt::Display for ColorScheme {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::System => write!(f, "system"),
            Self::Light => write!(f, "light"),
            Self::Dark => write!(f, "dark"),
        }
    }
}

impl std::str::FromStr for ColorScheme {
    type Err = WeightLogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "system" => Ok(Self::System),
            "light" => Ok(Self::Light),
            "dark" => Ok(Self::Dark),
            other => Err(WeightLogError::Validation(format!(
                "Unknown color scheme: '{}'",
                other
            ))),
        }
    }
}

/// User settings for WeightLog
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Target weight in kilograms, drawn as a reference line on the chart
    #[serde(default = "default_target_weight")]
    pub target_weight: f64,

    /// Color scheme preference
    #[serde(default)]
    pub color_scheme: ColorScheme,

    /// Last successfully saved weight in kilograms.
    /// Written on every save, never read back; kept for compatibility with
    /// earlier data files.
    #[serde(default)]
    pub last_saved_weight: f64,
}

fn default_schema_version() -> u32 {
    1
}

fn default_target_weight() -> f64 {
    60.0
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            target_weight: default_target_weight(),
            color_scheme: ColorScheme::default(),
            last_saved_weight: 0.0,
        }
    }
}

impl Settings {
    /// Load settings from disk, or create default settings if file doesn't exist
    pub fn load_or_create(paths: &WeightLogPaths) -> Result<Self, WeightLogError> {
        let settings_path = paths.settings_file();

        if settings_path.exists() {
            let contents = std::fs::read_to_string(&settings_path)
                .map_err(|e| WeightLogError::Io(format!("Failed to read settings file: {}", e)))?;

            let settings: Settings = serde_json::from_str(&contents).map_err(|e| {
                WeightLogError::Config(format!("Failed to parse settings file: {}", e))
            })?;

            Ok(settings)
        } else {
            // Don't save yet - let caller decide when to persist
            Ok(Settings::default())
        }
    }

    /// Save settings to disk
    pub fn save(&self, paths: &WeightLogPaths) -> Result<(), WeightLogError> {
        paths.ensure_directories()?;

        let settings_path = paths.settings_file();
        let contents = serde_json::to_string_pretty(self)
            .map_err(|e| WeightLogError::Config(format!("Failed to serialize settings: {}", e)))?;

        std::fs::write(&settings_path, contents)
            .map_err(|e| WeightLogError::Io(format!("Failed to write settings file: {}", e)))?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_settings() {
        let settings = Settings::default();
        assert_eq!(settings.target_weight, 60.0);
        assert_eq!(settings.color_scheme, ColorScheme::System);
        assert_eq!(settings.last_saved_weight, 0.0);
    }

    #[test]
    fn test_save_and_load() {
        let temp_dir = TempDir::new().unwrap();
        let paths = WeightLogPaths::with_base_dir(temp_dir.path().to_path_buf());

        let mut settings = Settings::default();
        settings.target_weight = 58.5;
        settings.color_scheme = ColorScheme::Dark;

        settings.save(&paths).unwrap();

        let loaded = Settings::load_or_create(&paths).unwrap();
        assert_eq!(loaded.target_weight, 58.5);
        assert_eq!(loaded.color_scheme, ColorScheme::Dark);
    }

    #[test]
    fn test_load_missing_file_returns_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let paths = WeightLogPaths::with_base_dir(temp_dir.path().to_path_buf());

        let settings = Settings::load_or_create(&paths).unwrap();
        assert_eq!(settings.target_weight, 60.0);
    }

    #[test]
    fn test_color_scheme_from_str() {
        assert_eq!("dark".parse::<ColorScheme>().unwrap(), ColorScheme::Dark);
        assert_eq!("system".parse::<ColorScheme>().unwrap(), ColorScheme::System);
        assert!("purple".parse::<ColorScheme>().is_err());
    }

    #[test]
    fn test_serde_round_trip() {
        let settings = Settings::default();
        let json = serde_json::to_string(&settings).unwrap();
        let deserialized: Settings = serde_json::from_str(&json).unwrap();
        assert_eq!(settings.target_weight, deserialized.target_weight);
        assert_eq!(settings.color_scheme, deserialized.color_scheme);
    }
}
