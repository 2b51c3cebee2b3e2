//! Configuration loading for the dashboard.
//!
//! Every field has a default, so running without a config file talks to a
//! backend on localhost.

use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::app::weather::DEFAULT_LOCATION;

pub const CONFIG_ENV: &str = "PHISHGUARD_CONFIG";
pub const BACKEND_URL_ENV: &str = "PHISHGUARD_BACKEND_URL";

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub backend_url: String,
    pub default_location: String,
    /// How long the event loop waits for input before redrawing.
    pub tick_rate_ms: u64,
    pub clock_interval_ms: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            backend_url: "http://127.0.0.1:5000".to_string(),
            default_location: DEFAULT_LOCATION.to_string(),
            tick_rate_ms: 100,
            clock_interval_ms: 1_000,
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("Failed to parse config TOML: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("Invalid config value for {field}: {reason}")]
    InvalidValue { field: &'static str, reason: String },
}

impl Config {
    /// Reads `--config <path>` or `PHISHGUARD_CONFIG` when given, falls back
    /// to defaults otherwise, then applies `PHISHGUARD_BACKEND_URL`.
    pub fn load() -> Result<Self, ConfigError> {
        let mut config = match config_path_from_args().or_else(config_path_from_env) {
            Some(path) => Self::from_path(&path)?,
            None => Self::default(),
        };
        config.override_backend_url(std::env::var(BACKEND_URL_ENV).ok());
        config.validate()?;
        Ok(config)
    }

    pub fn from_path(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml(&contents)
    }

    pub fn from_toml(contents: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(contents)?)
    }

    pub fn override_backend_url(&mut self, value: Option<String>) {
        if let Some(url) = value.filter(|v| !v.trim().is_empty()) {
            self.backend_url = url;
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if let Err(e) = url::Url::parse(self.backend_url.trim()) {
            return Err(ConfigError::InvalidValue {
                field: "backend_url",
                reason: e.to_string(),
            });
        }
        if self.default_location.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "default_location",
                reason: "must not be empty".to_string(),
            });
        }
        if self.tick_rate_ms == 0 {
            return Err(ConfigError::InvalidValue {
                field: "tick_rate_ms",
                reason: "must be > 0".to_string(),
            });
        }
        if self.clock_interval_ms == 0 {
            return Err(ConfigError::InvalidValue {
                field: "clock_interval_ms",
                reason: "must be > 0".to_string(),
            });
        }
        Ok(())
    }

    pub fn tick_rate(&self) -> Duration {
        Duration::from_millis(self.tick_rate_ms)
    }

    pub fn clock_interval(&self) -> Duration {
        Duration::from_millis(self.clock_interval_ms)
    }
}

fn config_path_from_env() -> Option<PathBuf> {
    std::env::var(CONFIG_ENV).ok().map(PathBuf::from)
}

fn config_path_from_args() -> Option<PathBuf> {
    let mut args = std::env::args().skip(1);
    while let Some(arg) = args.next() {
        if arg == "--config" {
            return args.next().map(PathBuf::from);
        }
    }
    None
}
