//! Configuration for the cookbook.
//!
//! - Settings schema, discovery and loading in [`settings`]
//! - Project-wide constants (default flavor, copyright notice)
//!
//! # Example
//!
//! ```
//! use dbcookbook::config::{parse_settings, SettingsOverrides};
//! use std::path::{Path, PathBuf};
//!
//! let settings = parse_settings("sandbox_binary: /opt/mysql", Path::new("config.yml"))
//!     .unwrap()
//!     .with_overrides(SettingsOverrides {
//!         wanted_version: Some("8.0".to_string()),
//!         ..Default::default()
//!     });
//! assert_eq!(settings.sandbox_binary, PathBuf::from("/opt/mysql"));
//! assert_eq!(settings.wanted_version.as_deref(), Some("8.0"));
//! ```

pub mod settings;

pub use settings::{
    default_config_path, load_settings, load_settings_file, parse_settings, Settings,
    SettingsOverrides,
};

/// Flavor assumed when none is requested.
pub const DEFAULT_FLAVOR: &str = "mysql";

/// Notice substituted for `{{.Copyright}}`.
///
/// Continuation lines carry their own `#` so the notice stays a shell comment.
pub const COPYRIGHT: &str = "dbcookbook - database sandbox recipes
# Released under the Apache License, Version 2.0";
