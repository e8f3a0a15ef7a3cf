//! Error types for cookbook operations.
//!
//! This module defines [`CookbookError`], the primary error type used
//! throughout the crate, and a [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - Catalog misses and filesystem failures are always fatal to the caller
//! - Missing versions are advisory; they only become errors where a command
//!   explicitly needs a version (see [`crate::versions::ResolvedVersion::require`])
//! - Render failures are fatal for user recipes and tolerated for auxiliary ones
//! - Every variant maps to a distinct process exit code via [`CookbookError::exit_code`]

use std::path::PathBuf;
use thiserror::Error;

use crate::render::VersionStatus;

/// Core error type for cookbook operations.
#[derive(Debug, Error)]
pub enum CookbookError {
    /// Requested recipe is not in the catalog.
    #[error("recipe {name} not found")]
    RecipeNotFound { name: String },

    /// No installed version matches the requested family and flavor.
    #[error("no version found for flavor {flavor}")]
    NoVersionFound { flavor: String },

    /// Template substitution could not complete.
    #[error("error rendering recipe {recipe}: {message}")]
    RenderFailure {
        recipe: String,
        message: String,
        status: VersionStatus,
    },

    /// The cookbook directory could not be created.
    #[error("error creating cookbook directory {}: {source}", path.display())]
    DirectoryCreateFailure {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A rendered script could not be written.
    #[error("error writing file {}: {source}", path.display())]
    WriteFailure {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A rendered script could not be made executable.
    #[error("error while making file {} executable: {source}", path.display())]
    PermissionFailure {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Configuration file not found at an explicitly requested location.
    #[error("Configuration not found: {}", path.display())]
    ConfigNotFound { path: PathBuf },

    /// Failed to parse a configuration or recipe file.
    #[error("Failed to parse {path}: {message}")]
    ConfigParseError { path: PathBuf, message: String },

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl CookbookError {
    /// Process exit code for this error class.
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::RecipeNotFound { .. } => 2,
            Self::NoVersionFound { .. } => 3,
            Self::RenderFailure { .. } => 4,
            Self::DirectoryCreateFailure { .. } => 5,
            Self::WriteFailure { .. } => 6,
            Self::PermissionFailure { .. } => 7,
            Self::ConfigNotFound { .. }
            | Self::ConfigParseError { .. }
            | Self::Io(_)
            | Self::Other(_) => 1,
        }
    }
}

/// Result type alias for cookbook operations.
pub type Result<T> = std::result::Result<T, CookbookError>;
