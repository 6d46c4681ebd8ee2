use serde::Deserialize;
use std::{fs, path::Path};

use crate::error::ConfigError;
use crate::fluid::pool::DEFAULT_BATCH_SIZE;

const DEFAULT_CONFIG: &str = include_str!("../../package-content/archimedes.json5");

/// Tunables for pool exploration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct PoolConfig {
    /// Positions processed per exploration step.
    pub batch_size: usize,
    /// Upper bound on positions a single pool explores before it reports
    /// itself exhausted. `None` explores until the pool runs out.
    pub search_limit: Option<usize>,
    /// Logging options for hosts that install a subscriber.
    pub log: LogConfig,
}

/// Logging options.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct LogConfig {
    /// Default filter directive, e.g. `info` or `archimedes_core=trace`.
    pub level: String,
}

impl PoolConfig {
    /// Reads the config at `path`, or writes the bundled default there and
    /// returns it if the file does not exist yet.
    pub fn load_or_create(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            let config_str = fs::read_to_string(path)?;
            Self::from_json5(&config_str)
        } else {
            if let Some(parent) = path.parent() {
                fs::create_dir_all(parent)?;
            }
            fs::write(path, DEFAULT_CONFIG)?;
            log::info!("Wrote default config to {}", path.display());
            Ok(Self::default())
        }
    }

    /// Parses and validates a json5 config.
    pub fn from_json5(source: &str) -> Result<Self, ConfigError> {
        let config: PoolConfig = serde_json5::from_str(source)?;
        config.validate().map_err(ConfigError::Invalid)?;
        Ok(config)
    }

    /// Checks value ranges.
    pub fn validate(&self) -> Result<(), &'static str> {
        if !(1..=4096).contains(&self.batch_size) {
            return Err("Batch size must be in range 1..4096");
        }
        if self.search_limit == Some(0) {
            return Err("Search limit must be at least 1");
        }
        Ok(())
    }
}

impl Default for PoolConfig {
    fn default() -> Self {
        Self {
            batch_size: DEFAULT_BATCH_SIZE,
            search_limit: None,
            log: LogConfig::default(),
        }
    }
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
        }
    }
}
