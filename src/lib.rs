//! dbcookbook - Ready-made shell scripts for database sandboxes.
//!
//! dbcookbook keeps a catalog of recipe templates. Each recipe is rendered
//! against the database releases installed in the sandbox-binary directory
//! and written into a cookbook directory as a shell script.
//!
//! # Modules
//!
//! - [`catalog`] - Built-in recipe templates
//! - [`cli`] - Command-line interface and argument parsing
//! - [`config`] - Settings loading and project constants
//! - [`cookbook`] - Writing rendered recipes into the cookbook directory
//! - [`error`] - Error types and result aliases
//! - [`render`] - Placeholder filling and template context
//! - [`ui`] - Terminal output
//! - [`versions`] - Installed-version discovery and latest-version resolution
//!
//! # Example
//!
//! ```
//! use dbcookbook::render::fill_placeholders;
//!
//! let text = fill_placeholders("deploy {{.LatestVersion}}", |field| {
//!     (field == "LatestVersion").then(|| "8.0.30".to_string())
//! })
//! .unwrap();
//! assert_eq!(text, "deploy 8.0.30");
//! ```
//!
//! For end-to-end cookbook creation, see the integration tests.

pub mod catalog;
pub mod cli;
pub mod config;
pub mod cookbook;
pub mod error;
pub mod render;
pub mod ui;
pub mod versions;

pub use error::{CookbookError, Result};
