//! `feedctl` configuration.
//!
//! Read from the environment, then overridden by command-line flags.

use std::path::PathBuf;
use std::str::FromStr;

/// Log output format of the binary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    /// Human-readable lines.
    #[default]
    Text,
    /// One JSON object per event.
    Json,
}

impl FromStr for LogFormat {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "text" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            other => Err(ConfigError::InvalidLogFormat(other.to_string())),
        }
    }
}

/// Configuration for the `feedctl` binary.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CliConfig {
    /// Directory of `*.schema.json` files used instead of the embedded
    /// schemas. `None` uses the embedded set.
    pub schema_dir: Option<PathBuf>,
    pub log_format: LogFormat,
}

impl CliConfig {
    /// Load configuration from environment variables.
    ///
    /// Variables:
    /// - `FEED_SCHEMA_DIR` (default: unset, embedded schemas)
    /// - `FEED_LOG_FORMAT` (`text` or `json`, default: `text`)
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Load configuration through an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let schema_dir = lookup("FEED_SCHEMA_DIR")
            .filter(|v| !v.trim().is_empty())
            .map(PathBuf::from);
        let log_format = match lookup("FEED_LOG_FORMAT") {
            Some(raw) if !raw.trim().is_empty() => raw.parse()?,
            _ => LogFormat::default(),
        };
        Ok(Self {
            schema_dir,
            log_format,
        })
    }

    /// Apply command-line overrides. Flags win over the environment.
    pub fn with_overrides(mut self, schema_dir: Option<PathBuf>, log_format: Option<LogFormat>) -> Self {
        if schema_dir.is_some() {
            self.schema_dir = schema_dir;
        }
        if let Some(format) = log_format {
            self.log_format = format;
        }
        self
    }
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid log format {0:?} (expected \"text\" or \"json\")")]
    InvalidLogFormat(String),
}
