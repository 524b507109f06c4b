//! Configuration file handling.
//!
//! `solsign` reads an optional TOML file for defaults that would otherwise
//! be repeated on every invocation:
//!
//! ```toml
//! # ~/.config/solsign/config.toml
//!
//! # Emit JSON instead of the human-readable summary.
//! output = "json"
//!
//! # Derivation path applied to seed phrases when --path is not given.
//! # When absent, the default raw-seed-first fallback chain is used.
//! derivation_path = "m/44'/501'/0'/0'"
//! ```
//!
//! A missing file at the default location is not an error; explicit
//! `--config` paths must exist.

use std::path::{Path, PathBuf};

use serde::Deserialize;

/// Errors that can occur while loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// An explicitly requested configuration file does not exist.
    #[error("configuration file not found: {path}")]
    FileNotFound {
        /// The path that was not found.
        path: String,
    },

    /// The file could not be read.
    #[error("failed to read configuration: {0}")]
    Io(#[from] std::io::Error),

    /// The file is not valid TOML or has unexpected fields.
    #[error("failed to parse configuration: {context}")]
    ParseFailed {
        /// What the TOML parser reported.
        context: String,
    },
}

/// How command results are printed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable summary (default).
    #[default]
    Text,
    /// A single JSON object on stdout.
    Json,
}

/// User configuration, all fields optional.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Default output format; overridden by `--json`.
    #[serde(default)]
    pub output: OutputFormat,

    /// Derivation path applied to seed phrases when `--path` is not given.
    #[serde(default)]
    pub derivation_path: Option<String>,
}

impl Config {
    /// Load configuration.
    ///
    /// With an explicit `path`, the file must exist and parse. Without one,
    /// the default location is tried and a missing file yields defaults.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] for a missing explicit file, an unreadable
    /// file, or invalid TOML.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(explicit) => {
                if !explicit.exists() {
                    return Err(ConfigError::FileNotFound {
                        path: explicit.display().to_string(),
                    });
                }
                Self::from_file(explicit)
            }
            None => match Self::default_path() {
                Some(default) if default.exists() => Self::from_file(&default),
                _ => Ok(Self::default()),
            },
        }
    }

    /// The default configuration path
    /// (`<platform config dir>/solsign/config.toml`).
    #[must_use]
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("solsign").join("config.toml"))
    }

    /// Parse a configuration file.
    fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        toml::from_str(&content).map_err(|e| ConfigError::ParseFailed {
            context: e.to_string(),
        })
    }
}

// ============================================================================
// Tests
// ============================================================================
