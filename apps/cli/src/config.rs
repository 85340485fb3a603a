//! CLI configuration module.
//!
//! Configuration is loaded from environment variables with fallback to
//! defaults. Command-line flags override it in `main.rs`.

use serde::{Deserialize, Serialize};
use std::env;
use std::fmt;
use std::str::FromStr;

/// Default tracing directive when neither `RUST_LOG` nor a flag is given.
pub const DEFAULT_LOG_LEVEL: &str = "warn";

/// How results are written to stdout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Strings raw, everything else as compact JSON.
    #[default]
    Plain,
    /// `{"ok": ...}` or `{"error": {...}}` envelopes.
    Json,
}

impl FromStr for OutputFormat {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "plain" => Ok(OutputFormat::Plain),
            "json" => Ok(OutputFormat::Json),
            _ => Err(ConfigError::InvalidValue("WARMUP_OUTPUT".to_string())),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Plain => write!(f, "plain"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}

/// CLI configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CliConfig {
    /// Tracing directive (`warn`, `debug`, `warmup_core=trace`, ...)
    pub log_level: String,

    /// Result rendering
    pub output: OutputFormat,
}

impl Default for CliConfig {
    fn default() -> Self {
        CliConfig {
            log_level: DEFAULT_LOG_LEVEL.to_string(),
            output: OutputFormat::default(),
        }
    }
}

impl CliConfig {
    /// Load configuration from environment variables.
    pub fn load() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration from any key lookup (the environment in production).
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let log_level = lookup("WARMUP_LOG_LEVEL")
            .unwrap_or_else(|| DEFAULT_LOG_LEVEL.to_string());
        if log_level.trim().is_empty() {
            return Err(ConfigError::InvalidValue("WARMUP_LOG_LEVEL".to_string()));
        }

        let output = match lookup("WARMUP_OUTPUT") {
            Some(value) => value.parse()?,
            None => OutputFormat::default(),
        };

        Ok(CliConfig { log_level, output })
    }
}

/// Configuration error types.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for {0}")]
    InvalidValue(String),
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = CliConfig::from_lookup(lookup_from(&[])).unwrap();
        assert_eq!(config, CliConfig::default());
        assert_eq!(config.log_level, "warn");
        assert_eq!(config.output, OutputFormat::Plain);
    }

    #[test]
    fn test_reads_environment_values() {
        let config = CliConfig::from_lookup(lookup_from(&[
            ("WARMUP_LOG_LEVEL", "debug"),
            ("WARMUP_OUTPUT", "JSON"),
        ]))
        .unwrap();
        assert_eq!(config.log_level, "debug");
        assert_eq!(config.output, OutputFormat::Json);
    }

    #[test]
    fn test_rejects_invalid_values() {
        let err = CliConfig::from_lookup(lookup_from(&[("WARMUP_OUTPUT", "yaml")])).unwrap_err();
        assert_eq!(err.to_string(), "Invalid value for WARMUP_OUTPUT");

        assert!(CliConfig::from_lookup(lookup_from(&[("WARMUP_LOG_LEVEL", " ")])).is_err());
    }
}
