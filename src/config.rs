//! Configuration for escalog.
//!
//! This module provides:
//! - TOML configuration file loading from `~/.escalog/config.toml`
//! - Applying the escape-code setting to the process
//! - Trace log file settings for the binary
//!
//! # Configuration File
//!
//! The configuration file is located at `~/.escalog/config.toml`:
//!
//! ```toml
//! # Color the severity tag of diagnostic lines
//! escape_codes = true
//!
//! [trace]
//! enabled = true
//! level = "info"
//! file = "escalog.log"
//! ```
//!
//! A non-empty `NO_COLOR` environment variable disables escape codes
//! regardless of the file.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::log::disable_escape_codes;

/// Directory under the home directory holding config and trace log
const CONFIG_DIR: &str = ".escalog";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to parse config {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Failed to serialize config: {0}")]
    Serialize(#[from] toml::ser::Error),

    #[error("Failed to write config {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Could not determine config path")]
    NoHome,
}

pub type Result<T> = std::result::Result<T, ConfigError>;

/// Main configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Color the severity tag of diagnostic lines
    pub escape_codes: bool,
    /// Trace log settings
    pub trace: TraceConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            escape_codes: true,
            trace: TraceConfig::default(),
        }
    }
}

/// Trace log configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TraceConfig {
    pub enabled: bool,
    pub level: String, // "trace", "debug", "info", "warn", "error"
    /// Log file, relative paths are resolved against `~/.escalog`
    pub file: PathBuf,
}

impl Default for TraceConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            level: "info".to_string(),
            file: PathBuf::from("escalog.log"),
        }
    }
}

impl Config {
    /// Load configuration from `~/.escalog/config.toml`, falling back to
    /// defaults if it is missing or unreadable
    pub fn load() -> Self {
        if let Some(path) = Self::get_config_path() {
            if path.exists() {
                if let Ok(config) = Self::load_from(&path) {
                    return config;
                }
            }
        }
        Self::default()
    }

    /// Load configuration from a specific file
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        toml::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Save configuration to `~/.escalog/config.toml`
    pub fn save(&self) -> Result<()> {
        let path = Self::get_config_path().ok_or(ConfigError::NoHome)?;
        self.save_to(&path)
    }

    /// Save configuration to a specific file
    pub fn save_to(&self, path: &Path) -> Result<()> {
        let content = toml::to_string_pretty(self)?;
        fs::write(path, content).map_err(|source| ConfigError::Write {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Whether diagnostics should carry escape codes, taking `NO_COLOR` into account
    pub fn wants_escape_codes(&self) -> bool {
        self.escape_codes && !no_color_requested(std::env::var_os("NO_COLOR").as_deref())
    }

    /// Apply process-wide settings. Escape codes can only be turned off here,
    /// never back on.
    pub fn apply(&self) {
        if !self.wants_escape_codes() {
            disable_escape_codes();
        }
    }

    /// Resolved trace log path
    pub fn trace_path(&self) -> PathBuf {
        if self.trace.file.is_absolute() {
            return self.trace.file.clone();
        }
        match config_dir() {
            Some(dir) => dir.join(&self.trace.file),
            None => self.trace.file.clone(),
        }
    }

    /// Get config file path
    fn get_config_path() -> Option<PathBuf> {
        let dir = config_dir()?;
        if !dir.exists() {
            let _ = fs::create_dir_all(&dir);
        }
        Some(dir.join("config.toml"))
    }
}

fn no_color_requested(value: Option<&std::ffi::OsStr>) -> bool {
    value.map_or(false, |v| !v.is_empty())
}

fn config_dir() -> Option<PathBuf> {
    home_dir().map(|home| home.join(CONFIG_DIR))
}

// Get home directory
fn home_dir() -> Option<PathBuf> {
    std::env::var_os("USERPROFILE")
        .or_else(|| std::env::var_os("HOME"))
        .map(PathBuf::from)
}
