//! User settings for the finance tracker
//!
//! Stored as `config.json` in the base directory. Every field has a default,
//! so a missing or partial file still loads.

use serde::{Deserialize, Serialize};

use super::paths::TrackerPaths;
use crate::error::TrackerError;
use crate::models::DEFAULT_ACCOUNT_TYPE;

/// User settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Nominal currency code. Informational only; amounts are never converted.
    #[serde(default = "default_currency")]
    pub currency: String,

    /// Symbol used when displaying amounts
    #[serde(default = "default_currency_symbol")]
    pub currency_symbol: String,

    /// Nominal base tax multiplier. Not applied to any computation.
    #[serde(default = "default_base_tax_rate")]
    pub base_tax_rate: f64,

    /// Type given to accounts created from the command line without `--type`
    #[serde(default = "default_account_type")]
    pub default_account_type: String,

    /// Date format preference (strftime format) for display
    #[serde(default = "default_date_format")]
    pub date_format: String,
}

fn default_schema_version() -> u32 {
    1
}

fn default_currency() -> String {
    "CAD".to_string()
}

fn default_currency_symbol() -> String {
    "$".to_string()
}

fn default_base_tax_rate() -> f64 {
    1.13
}

fn default_account_type() -> String {
    DEFAULT_ACCOUNT_TYPE.to_string()
}

fn default_date_format() -> String {
    "%Y-%m-%d".to_string()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            currency: default_currency(),
            currency_symbol: default_currency_symbol(),
            base_tax_rate: default_base_tax_rate(),
            default_account_type: default_account_type(),
            date_format: default_date_format(),
        }
    }
}

impl Settings {
    /// Load settings from disk, or use defaults if the file doesn't exist
    pub fn load_or_create(paths: &TrackerPaths) -> Result<Self, TrackerError> {
        let settings_path = paths.settings_file();

        if !settings_path.exists() {
            // Don't save yet - let caller decide when to persist
            return Ok(Settings::default());
        }

        let contents = std::fs::read_to_string(&settings_path)
            .map_err(|e| TrackerError::Io(format!("Failed to read settings file: {}", e)))?;

        serde_json::from_str(&contents)
            .map_err(|e| TrackerError::Config(format!("Failed to parse settings file: {}", e)))
    }

    /// Save settings to disk
    pub fn save(&self, paths: &TrackerPaths) -> Result<(), TrackerError> {
        paths.ensure_directories()?;

        let contents = serde_json::to_string_pretty(self)
            .map_err(|e| TrackerError::Config(format!("Failed to serialize settings: {}", e)))?;

        std::fs::write(paths.settings_file(), contents)
            .map_err(|e| TrackerError::Io(format!("Failed to write settings file: {}", e)))?;

        Ok(())
    }
}
