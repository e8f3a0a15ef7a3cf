//! Settings discovery and loading.
//!
//! Settings are layered, later layers overriding earlier ones:
//! 1. Built-in defaults
//! 2. Config file (`~/.dbcookbook/config.yml`, or an explicit `--config` path)
//! 3. Environment / command-line overrides

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use super::DEFAULT_FLAVOR;
use crate::error::{CookbookError, Result};

/// Effective cookbook settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Directory holding one subdirectory per installed release
    pub sandbox_binary: PathBuf,

    /// Directory where rendered scripts are written
    pub cookbook_directory: PathBuf,

    /// Version family used when a caller asks for "any version"
    pub wanted_version: Option<String>,

    /// Flavor used when none is requested, and for per-family fields
    pub default_flavor: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            sandbox_binary: dirs::home_dir()
                .unwrap_or_default()
                .join("opt")
                .join("mysql"),
            cookbook_directory: PathBuf::from("recipes"),
            wanted_version: None,
            default_flavor: DEFAULT_FLAVOR.to_string(),
        }
    }
}

/// Values that take precedence over the config file.
#[derive(Debug, Clone, Default)]
pub struct SettingsOverrides {
    pub sandbox_binary: Option<PathBuf>,
    pub cookbook_directory: Option<PathBuf>,
    pub wanted_version: Option<String>,
}

impl Settings {
    /// Apply overrides on top of these settings.
    pub fn with_overrides(mut self, overrides: SettingsOverrides) -> Self {
        if let Some(dir) = overrides.sandbox_binary {
            self.sandbox_binary = dir;
        }
        if let Some(dir) = overrides.cookbook_directory {
            self.cookbook_directory = dir;
        }
        if let Some(wanted) = overrides.wanted_version.filter(|w| !w.trim().is_empty()) {
            self.wanted_version = Some(wanted);
        }
        if self.default_flavor.trim().is_empty() {
            self.default_flavor = DEFAULT_FLAVOR.to_string();
        }
        self
    }
}

/// Default config file location: `~/.dbcookbook/config.yml`.
pub fn default_config_path() -> Option<PathBuf> {
    Some(dirs::home_dir()?.join(".dbcookbook").join("config.yml"))
}

/// Parse YAML content into Settings.
///
/// # Arguments
///
/// * `content` - The YAML content to parse
/// * `source_path` - Path for error reporting
pub fn parse_settings(content: &str, source_path: &Path) -> Result<Settings> {
    if content.trim().is_empty() {
        return Ok(Settings::default());
    }
    serde_yaml::from_str(content).map_err(|e| CookbookError::ConfigParseError {
        path: source_path.to_path_buf(),
        message: e.to_string(),
    })
}

/// Load a single settings file.
///
/// # Errors
///
/// Returns `ConfigNotFound` if the file doesn't exist.
/// Returns `ConfigParseError` if the YAML is invalid.
pub fn load_settings_file(path: &Path) -> Result<Settings> {
    let content = fs::read_to_string(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            CookbookError::ConfigNotFound {
                path: path.to_path_buf(),
            }
        } else {
            CookbookError::Io(e)
        }
    })?;

    parse_settings(&content, path)
}

/// Load settings from an explicit file, the default file, or defaults.
///
/// An explicit path must exist; the default path is optional.
pub fn load_settings(explicit: Option<&Path>) -> Result<Settings> {
    if let Some(path) = explicit {
        tracing::debug!("Loading settings from {}", path.display());
        return load_settings_file(path);
    }

    match default_config_path() {
        Some(path) if path.is_file() => {
            tracing::debug!("Loading settings from {}", path.display());
            load_settings_file(&path)
        }
        _ => Ok(Settings::default()),
    }
}
