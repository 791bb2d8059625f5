use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::ConfigError;
use crate::estimator::Estimator;
use crate::rates::{default_location_entries, LocationEntry, LocationMultipliers, RateTable};

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub display: DisplayConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
    #[serde(default)]
    pub rates: RateTable,
    #[serde(default = "default_location_entries")]
    pub locations: Vec<LocationEntry>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DisplayConfig {
    #[serde(default = "default_currency_symbol")]
    pub currency_symbol: String,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
    /// Log file for the interactive wizard; logs are discarded when unset
    #[serde(default)]
    pub file: Option<PathBuf>,
}

fn default_currency_symbol() -> String {
    "₹".to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            currency_symbol: default_currency_symbol(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            file: None,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            display: DisplayConfig::default(),
            logging: LoggingConfig::default(),
            rates: RateTable::default(),
            locations: default_location_entries(),
        }
    }
}

impl Config {
    /// Build an estimator from the configured tables
    pub fn estimator(&self) -> Result<Estimator, ConfigError> {
        self.rates.validate()?;
        let locations = LocationMultipliers::new(self.locations.clone())?;
        Ok(Estimator::new(self.rates, locations))
    }
}

/// Load configuration from `path` (optional) and `COST_PREDICTOR__*` variables
pub fn load_config(path: &Path) -> Result<Config, ConfigError> {
    let config = config::Config::builder()
        .add_source(config::File::from(path).required(false))
        .add_source(config::Environment::with_prefix("COST_PREDICTOR").separator("__"))
        .build()?;

    let cfg: Config = config.try_deserialize()?;
    validate_config(&cfg)?;

    Ok(cfg)
}

pub fn validate_config(cfg: &Config) -> Result<(), ConfigError> {
    if cfg.display.currency_symbol.trim().is_empty() {
        return Err(ConfigError::EmptyCurrencySymbol);
    }

    cfg.estimator()?;

    Ok(())
}
