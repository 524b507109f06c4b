//! Structured logging with tracing.
//!
//! Verbosity flags on the CLI map onto levels: no flag logs warnings and
//! errors only, `-v` adds info, `-vv` debug, `-vvv` trace.
//!
//! # Example
//!
//! ```no_run
//! use solsign::logging::{init_logging, LogConfig};
//!
//! init_logging(&LogConfig::default()).expect("failed to initialize logging");
//! tracing::info!("ready");
//! ```

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Error type for logging initialization failures.
#[derive(Debug, thiserror::Error)]
pub enum LogError {
    /// The subscriber could not be installed (e.g. already initialized).
    #[error("failed to initialize logging: {0}")]
    SubscriberInit(String),

    /// The level filter could not be built.
    #[error("invalid log configuration: {0}")]
    InvalidConfig(String),
}

/// Log level configuration.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LogLevel {
    /// Most verbose: trace, debug, info, warn, error.
    Trace,
    /// Verbose: debug, info, warn, error.
    Debug,
    /// Standard: info, warn, error.
    Info,
    /// Quiet: warn, error (default for a CLI tool).
    #[default]
    Warn,
    /// Quietest: error only.
    Error,
}

impl LogLevel {
    /// The string representation used by the env filter.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Trace => "trace",
            Self::Debug => "debug",
            Self::Info => "info",
            Self::Warn => "warn",
            Self::Error => "error",
        }
    }
}

impl std::fmt::Display for LogLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Log output format configuration.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LogFormat {
    /// Human-readable single-line format (default).
    #[default]
    Compact,
    /// JSON structured format for log aggregation.
    Json,
}

/// Configuration for the logging system.
#[derive(Debug, Clone, Default)]
pub struct LogConfig {
    /// Minimum severity of messages that will be logged.
    pub level: LogLevel,
    /// Output format for log messages.
    pub format: LogFormat,
}

/// Map a `-v` count onto a [`LogLevel`].
#[must_use]
pub const fn verbosity_to_level(verbose: u8) -> LogLevel {
    match verbose {
        0 => LogLevel::Warn,
        1 => LogLevel::Info,
        2 => LogLevel::Debug,
        _ => LogLevel::Trace,
    }
}

/// Initialize the logging system.
///
/// Logs go to stderr so command output on stdout stays clean for piping.
///
/// # Errors
///
/// Returns [`LogError`] if the filter cannot be built or a subscriber is
/// already installed.
pub fn init_logging(config: &LogConfig) -> Result<(), LogError> {
    let filter = EnvFilter::try_new(config.level.as_str())
        .map_err(|e| LogError::InvalidConfig(e.to_string()))?;

    match config.format {
        LogFormat::Compact => {
            let fmt_layer = fmt::layer()
                .compact()
                .with_target(false)
                .with_writer(std::io::stderr);
            tracing_subscriber::registry()
                .with(filter)
                .with(fmt_layer)
                .try_init()
                .map_err(|e| LogError::SubscriberInit(e.to_string()))?;
        }
        LogFormat::Json => {
            let fmt_layer = fmt::layer().json().with_writer(std::io::stderr);
            tracing_subscriber::registry()
                .with(filter)
                .with(fmt_layer)
                .try_init()
                .map_err(|e| LogError::SubscriberInit(e.to_string()))?;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_verbosity_mapping() {
        assert_eq!(verbosity_to_level(0), LogLevel::Warn);
        assert_eq!(verbosity_to_level(1), LogLevel::Info);
        assert_eq!(verbosity_to_level(2), LogLevel::Debug);
        assert_eq!(verbosity_to_level(3), LogLevel::Trace);
        assert_eq!(verbosity_to_level(200), LogLevel::Trace);
    }

    #[test]
    fn test_level_strings() {
        assert_eq!(LogLevel::Trace.as_str(), "trace");
        assert_eq!(LogLevel::Warn.to_string(), "warn");
    }

    #[test]
    fn test_default_level_is_warn() {
        assert_eq!(LogLevel::default(), LogLevel::Warn);
    }
}
