//! Environment-driven logging configuration.

use core::str::FromStr;

use thiserror::Error;

/// Filter directives variable (standard `tracing-subscriber` syntax).
pub const FILTER_ENV: &str = "RUST_LOG";
/// Output format variable: `json` or `pretty`.
pub const FORMAT_ENV: &str = "STOREFRONT_LOG_FORMAT";

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid log format {0:?} (expected \"json\" or \"pretty\")")]
    InvalidLogFormat(String),
}

#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub enum LogFormat {
    #[default]
    Json,
    Pretty,
}

impl FromStr for LogFormat {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "json" => Ok(LogFormat::Json),
            "pretty" => Ok(LogFormat::Pretty),
            _ => Err(ConfigError::InvalidLogFormat(s.to_string())),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ObservabilityConfig {
    pub filter: String,
    pub format: LogFormat,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            filter: "info".to_string(),
            format: LogFormat::default(),
        }
    }
}

impl ObservabilityConfig {
    /// Read from `RUST_LOG` and `STOREFRONT_LOG_FORMAT`, defaulting unset values.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary variable lookup (tests avoid touching the process env).
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let defaults = Self::default();
        let filter = lookup(FILTER_ENV)
            .filter(|v| !v.trim().is_empty())
            .unwrap_or(defaults.filter);
        let format = match lookup(FORMAT_ENV) {
            Some(raw) => raw.parse()?,
            None => defaults.format,
        };
        Ok(Self { filter, format })
    }
}
