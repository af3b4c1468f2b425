//! Structured logging built on the `tracing` crate.
//!
//! A one-shot tool has no rotation or file sinks; logs go to stderr so that
//! command output on stdout stays machine-readable.

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Registry};

/// Logging initialization errors
#[derive(Debug, Error)]
pub enum LoggingError {
    #[error("Invalid log filter {filter:?}: {reason}")]
    InvalidFilter { filter: String, reason: String },

    #[error("Failed to install subscriber: {0}")]
    Install(String),
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level: trace, debug, info, warn, error, off
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Output format: json, text
    #[serde(default = "default_format")]
    pub format: String,

    /// Enable colored output (text format only)
    #[serde(default = "default_true")]
    pub color: bool,
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_format() -> String {
    "text".to_string()
}

fn default_true() -> bool {
    true
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_format(),
            color: default_true(),
        }
    }
}

/// Initialize the logging system.
///
/// `TRELLIS_LOG` takes precedence over the configured level, so individual
/// modules can be turned up without touching CLI flags.
pub fn init_logging(config: &LoggingConfig) -> Result<(), LoggingError> {
    let filter = match std::env::var("TRELLIS_LOG") {
        Ok(env_filter) => {
            EnvFilter::try_new(&env_filter).map_err(|e| LoggingError::InvalidFilter {
                filter: env_filter,
                reason: e.to_string(),
            })?
        }
        Err(_) => EnvFilter::try_new(&config.level).map_err(|e| LoggingError::InvalidFilter {
            filter: config.level.clone(),
            reason: e.to_string(),
        })?,
    };

    let base = Registry::default().with(filter);

    let result = if config.format == "json" {
        base.with(fmt::layer().json().with_writer(std::io::stderr))
            .try_init()
    } else {
        base.with(
            fmt::layer()
                .with_ansi(config.color)
                .with_writer(std::io::stderr),
        )
        .try_init()
    };

    result.map_err(|e| LoggingError::Install(e.to_string()))
}
