//! Runtime configuration
//!
//! Reads settings from the environment (optionally seeded from a `.env`
//! file) into explicit values handed to the client and calculator.

use std::collections::HashMap;

use thiserror::Error;

use crate::models::ActivityLevel;
use crate::nutrition::{ActivityTable, TargetConfig};

pub const DEFAULT_BASE_URL: &str = "https://api.nal.usda.gov/fdc/v1";
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Configuration error types
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{var} must be a number, got '{value}'")]
    InvalidNumber { var: String, value: String },

    #[error("{var} must be positive, got {value}")]
    NotPositive { var: String, value: f64 },

    #[error("Invalid activity multiplier override '{0}' (expected level=multiplier)")]
    InvalidOverride(String),

    #[error("Unknown activity level in override: '{0}'")]
    UnknownActivityLevel(String),
}

/// Result type for configuration loading
pub type ConfigResult<T> = Result<T, ConfigError>;

/// FoodData Central connection settings
#[derive(Debug, Clone, PartialEq)]
pub struct UsdaConfig {
    pub api_key: Option<String>,
    pub base_url: String,
    pub timeout_secs: u64,
}

impl Default for UsdaConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}

/// All runtime settings
#[derive(Debug, Clone, Default)]
pub struct Config {
    pub usda: UsdaConfig,
    pub targets: TargetConfig,
}

impl Config {
    /// Load from the process environment, after merging any `.env` file
    pub fn from_env() -> ConfigResult<Self> {
        match dotenvy::dotenv() {
            Ok(path) => tracing::debug!("Loaded environment from {}", path.display()),
            Err(e) if e.not_found() => {}
            Err(e) => tracing::warn!("Ignoring unreadable .env file: {}", e),
        }

        Self::from_vars(std::env::vars().collect())
    }

    /// Build from an explicit variable map
    pub fn from_vars(vars: HashMap<String, String>) -> ConfigResult<Self> {
        let get = |name: &str| {
            vars.get(name)
                .map(|v| v.trim())
                .filter(|v| !v.is_empty())
        };

        let mut config = Config::default();

        config.usda.api_key = get("USDA_API_KEY")
            .or_else(|| get("API_KEY"))
            .map(str::to_string);

        if let Some(url) = get("NUTRICALC_USDA_BASE_URL") {
            config.usda.base_url = url.to_string();
        }

        if let Some(raw) = get("NUTRICALC_HTTP_TIMEOUT_SECS") {
            let secs = parse_positive("NUTRICALC_HTTP_TIMEOUT_SECS", raw)?;
            config.usda.timeout_secs = secs.ceil() as u64;
        }

        if let Some(raw) = get("NUTRICALC_CALORIE_TOLERANCE_PCT") {
            let value = raw.parse::<f64>().map_err(|_| ConfigError::InvalidNumber {
                var: "NUTRICALC_CALORIE_TOLERANCE_PCT".into(),
                value: raw.into(),
            })?;
            // zero is allowed: an exact calorie target
            if !value.is_finite() || value < 0.0 {
                return Err(ConfigError::NotPositive {
                    var: "NUTRICALC_CALORIE_TOLERANCE_PCT".into(),
                    value,
                });
            }
            config.targets.calorie_tolerance_pct = value;
        }

        if let Some(raw) = get("NUTRICALC_ACTIVITY_MULTIPLIERS") {
            config.targets.activity_table = parse_activity_overrides(raw)?;
        }

        Ok(config)
    }
}

fn parse_positive(var: &str, raw: &str) -> ConfigResult<f64> {
    let value = raw.parse::<f64>().map_err(|_| ConfigError::InvalidNumber {
        var: var.to_string(),
        value: raw.to_string(),
    })?;
    if !value.is_finite() || value <= 0.0 {
        return Err(ConfigError::NotPositive {
            var: var.to_string(),
            value,
        });
    }
    Ok(value)
}

/// Parse "sedentary=1.25,active=1.8" on top of the standard table
pub fn parse_activity_overrides(raw: &str) -> ConfigResult<ActivityTable> {
    let mut table = ActivityTable::standard();

    for entry in raw.split(',').map(str::trim).filter(|e| !e.is_empty()) {
        let (level, multiplier) = entry
            .split_once('=')
            .ok_or_else(|| ConfigError::InvalidOverride(entry.to_string()))?;

        let level: ActivityLevel = level
            .parse()
            .map_err(|_| ConfigError::UnknownActivityLevel(level.trim().to_string()))?;
        let multiplier = parse_positive("NUTRICALC_ACTIVITY_MULTIPLIERS", multiplier.trim())?;

        table.set(level, multiplier);
    }

    Ok(table)
}
