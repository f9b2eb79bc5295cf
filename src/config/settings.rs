//! User settings for BudgetBuddy
//!
//! Holds the period reset configuration and display preferences. Settings
//! are persisted in `config.json`, independently of the budget snapshot.

use chrono::format::{Item, StrftimeItems};
use serde::{Deserialize, Deserializer, Serialize};

use super::paths::BudgetPaths;
use crate::error::BudgetError;

/// Earliest configurable reset day
pub const MIN_RESET_DAY: u32 = 1;
/// Latest configurable reset day
pub const MAX_RESET_DAY: u32 = 31;

/// When and how a budget period rolls over
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResetConfig {
    /// Day of month on which a new period starts (1-31)
    #[serde(default = "default_reset_day", deserialize_with = "deserialize_reset_day")]
    pub reset_day: u32,

    /// Whether a carry-over transaction is booked at the boundary
    #[serde(default = "default_carry_over")]
    pub carry_over: bool,
}

fn default_reset_day() -> u32 {
    MIN_RESET_DAY
}

fn default_carry_over() -> bool {
    true
}

fn deserialize_reset_day<'de, D>(deserializer: D) -> Result<u32, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<u32>::deserialize(deserializer)?;
    Ok(ResetConfig::clamp_day(raw.unwrap_or(MIN_RESET_DAY)))
}

impl Default for ResetConfig {
    fn default() -> Self {
        Self {
            reset_day: default_reset_day(),
            carry_over: default_carry_over(),
        }
    }
}

impl ResetConfig {
    /// Create a reset configuration, normalizing the day into 1-31
    pub fn new(reset_day: u32, carry_over: bool) -> Self {
        Self {
            reset_day: Self::clamp_day(reset_day),
            carry_over,
        }
    }

    /// 0 falls back to the default day; anything past 31 is capped
    pub fn clamp_day(day: u32) -> u32 {
        if day < MIN_RESET_DAY {
            MIN_RESET_DAY
        } else {
            day.min(MAX_RESET_DAY)
        }
    }
}

/// User settings for BudgetBuddy
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Period reset configuration
    #[serde(default)]
    pub reset: ResetConfig,

    /// Currency symbol used for display only
    #[serde(default = "default_currency")]
    pub currency_symbol: String,

    /// Date format preference (strftime format)
    #[serde(default = "default_date_format")]
    pub date_format: String,
}

fn default_schema_version() -> u32 {
    1
}

fn default_currency() -> String {
    "€".to_string()
}

fn default_date_format() -> String {
    "%d.%m.%Y".to_string()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            reset: ResetConfig::default(),
            currency_symbol: default_currency(),
            date_format: default_date_format(),
        }
    }
}

impl Settings {
    /// Load settings from disk, or fall back to defaults if the file doesn't exist
    pub fn load_or_create(paths: &BudgetPaths) -> Result<Self, BudgetError> {
        let settings_path = paths.settings_file();

        if !settings_path.exists() {
            // Not written until the user changes something
            return Ok(Settings::default());
        }

        let contents = std::fs::read_to_string(&settings_path)
            .map_err(|e| BudgetError::Io(format!("Failed to read settings file: {}", e)))?;

        let settings: Settings = serde_json::from_str(&contents)
            .map_err(|e| BudgetError::Config(format!("Failed to parse settings file: {}", e)))?;

        if !is_valid_date_format(&settings.date_format) {
            return Err(BudgetError::Config(format!(
                "Invalid date_format '{}' in settings file",
                settings.date_format
            )));
        }

        Ok(settings)
    }

    /// Save settings to disk
    pub fn save(&self, paths: &BudgetPaths) -> Result<(), BudgetError> {
        paths.ensure_directories()?;

        let contents = serde_json::to_string_pretty(self)
            .map_err(|e| BudgetError::Config(format!("Failed to serialize settings: {}", e)))?;

        std::fs::write(paths.settings_file(), contents)
            .map_err(|e| BudgetError::Io(format!("Failed to write settings file: {}", e)))?;

        Ok(())
    }
}

/// Whether `format` is a strftime pattern chrono can render
pub fn is_valid_date_format(format: &str) -> bool {
    !StrftimeItems::new(format).any(|item| matches!(item, Item::Error))
}
