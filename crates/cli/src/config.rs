//! CLI configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! All optional:
//! - `DESK_DATA_DIR` - Directory holding the stored keys (default: `.service-desk`)
//! - `DESK_SUBMIT_DELAY_MS` - Simulated submission latency in ms (default: 800, 0 disables)
//! - `DESK_LOG_FORMAT` - `pretty` or `json` (default: pretty)
//! - `RUST_LOG` - Log filter (default: warn)

use std::path::PathBuf;
use std::time::Duration;

use thiserror::Error;

const DEFAULT_DATA_DIR: &str = ".service-desk";
const DEFAULT_SUBMIT_DELAY_MS: u64 = 800;

/// Configuration errors that can occur during loading.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Log output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    /// Human-readable lines.
    #[default]
    Pretty,
    /// One JSON object per event.
    Json,
}

/// Service desk CLI configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeskConfig {
    /// Directory for the file-backed store
    pub data_dir: PathBuf,
    /// Pause before a submission is saved
    pub submit_delay: Duration,
    /// Log output format
    pub log_format: LogFormat,
}

impl Default for DeskConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from(DEFAULT_DATA_DIR),
            submit_delay: Duration::from_millis(DEFAULT_SUBMIT_DELAY_MS),
            log_format: LogFormat::default(),
        }
    }
}

impl DeskConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a variable is set to an invalid value.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build configuration from an arbitrary variable lookup.
    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let defaults = Self::default();

        let data_dir = lookup("DESK_DATA_DIR")
            .filter(|dir| !dir.trim().is_empty())
            .map_or(defaults.data_dir, PathBuf::from);

        let submit_delay = match lookup("DESK_SUBMIT_DELAY_MS") {
            Some(raw) => raw
                .trim()
                .parse::<u64>()
                .map(Duration::from_millis)
                .map_err(|e| {
                    ConfigError::InvalidEnvVar("DESK_SUBMIT_DELAY_MS".to_owned(), e.to_string())
                })?,
            None => defaults.submit_delay,
        };

        let log_format = match lookup("DESK_LOG_FORMAT").as_deref().map(str::trim) {
            None | Some("" | "pretty") => LogFormat::Pretty,
            Some("json") => LogFormat::Json,
            Some(other) => {
                return Err(ConfigError::InvalidEnvVar(
                    "DESK_LOG_FORMAT".to_owned(),
                    format!("expected `pretty` or `json`, got `{other}`"),
                ));
            }
        };

        Ok(Self {
            data_dir,
            submit_delay,
            log_format,
        })
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn load(vars: &[(&str, &str)]) -> Result<DeskConfig, ConfigError> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| ((*k).to_owned(), (*v).to_owned()))
            .collect();
        DeskConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_defaults() {
        assert_eq!(load(&[]).unwrap(), DeskConfig::default());
    }

    #[test]
    fn test_overrides() {
        let config = load(&[
            ("DESK_DATA_DIR", "/var/lib/desk"),
            ("DESK_SUBMIT_DELAY_MS", "0"),
            ("DESK_LOG_FORMAT", "json"),
        ])
        .unwrap();

        assert_eq!(config.data_dir, PathBuf::from("/var/lib/desk"));
        assert_eq!(config.submit_delay, Duration::ZERO);
        assert_eq!(config.log_format, LogFormat::Json);
    }

    #[test]
    fn test_invalid_delay() {
        let err = load(&[("DESK_SUBMIT_DELAY_MS", "soon")]).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidEnvVar(name, _) if name == "DESK_SUBMIT_DELAY_MS"));
    }

    #[test]
    fn test_invalid_log_format() {
        assert!(load(&[("DESK_LOG_FORMAT", "xml")]).is_err());
    }
}
