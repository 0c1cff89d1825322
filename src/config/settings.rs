//! Scan defaults, optionally read from a JSON settings file.
//!
//! Lookup order: an explicit `--config` path, then `settings.json` in the
//! platform configuration directory, then the built-in defaults. The file
//! is only ever read.

use crate::error::{ConfigError, ConfigResult};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Ports probed when none are given.
pub const DEFAULT_PORTS: &str = "22,80,443";

/// Probe timeout used when none is given.
pub const DEFAULT_TIMEOUT_MS: u64 = 500;

/// Location of the per-user settings file, if the platform has one.
pub fn default_settings_file() -> Option<PathBuf> {
    ProjectDirs::from("com", "pscan", "pscan").map(|dirs| dirs.config_dir().join("settings.json"))
}

/// Scan defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Default timeout in milliseconds.
    pub default_timeout_ms: u64,
    /// Default port specification.
    pub default_ports: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            default_timeout_ms: DEFAULT_TIMEOUT_MS,
            default_ports: DEFAULT_PORTS.to_string(),
        }
    }
}

impl Settings {
    /// Load settings from `explicit` if given, else from the default location.
    ///
    /// An explicit path must exist; a missing default file means defaults.
    pub fn load(explicit: Option<&Path>) -> ConfigResult<Self> {
        if let Some(path) = explicit {
            return Self::load_from(path);
        }

        match default_settings_file() {
            Some(path) if path.is_file() => Self::load_from(&path),
            _ => Ok(Self::default()),
        }
    }

    /// Load settings from a specific file.
    pub fn load_from(path: &Path) -> ConfigResult<Self> {
        debug!(path = %path.display(), "loading settings");
        let content = fs::read_to_string(path).map_err(|e| ConfigError::ReadFailed {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;

        serde_json::from_str(&content).map_err(|e| ConfigError::InvalidFormat(e.to_string()))
    }
}
