//! Latest-version resolution.

use std::path::{Path, PathBuf};

use super::scanner::{DirectoryScanner, VersionSource};
use super::version::ResolvedVersion;
use crate::config::Settings;

/// Resolves the highest installed version for a flavor and family.
pub struct VersionResolver {
    source: Box<dyn VersionSource>,
    sandbox_binary: PathBuf,
    wanted_version: Option<String>,
}

impl VersionResolver {
    /// Create a resolver over an arbitrary version source.
    pub fn new(source: Box<dyn VersionSource>, sandbox_binary: impl Into<PathBuf>) -> Self {
        Self {
            source,
            sandbox_binary: sandbox_binary.into(),
            wanted_version: None,
        }
    }

    /// Create a resolver scanning the directory named in the settings.
    pub fn from_settings(settings: &Settings) -> Self {
        Self::new(Box::new(DirectoryScanner::new()), &settings.sandbox_binary)
            .with_wanted_version(settings.wanted_version.clone())
    }

    /// Family used whenever a caller asks for "any version".
    pub fn with_wanted_version(mut self, wanted: Option<String>) -> Self {
        self.wanted_version = wanted.filter(|w| !w.trim().is_empty());
        self
    }

    /// Directory being scanned.
    pub fn sandbox_binary(&self) -> &Path {
        &self.sandbox_binary
    }

    /// Resolve the latest installed version.
    ///
    /// An empty `wanted_family` means any version, unless a wanted-version
    /// override is configured, in which case the override is the family.
    pub fn resolve_latest(&self, wanted_family: &str, flavor: &str) -> ResolvedVersion {
        let family = match (wanted_family.trim(), &self.wanted_version) {
            ("", Some(wanted)) => wanted.as_str(),
            (family, _) => family,
        };

        let latest = self
            .source
            .installed_versions(&self.sandbox_binary, flavor)
            .into_iter()
            .filter(|v| v.matches_family(family))
            .max();

        tracing::debug!(
            "Latest {} version for family '{}': {:?}",
            flavor,
            family,
            latest.as_ref().map(|v| v.as_str())
        );

        match latest {
            Some(v) => ResolvedVersion::Found(v),
            None => ResolvedVersion::NotFound {
                flavor: flavor.to_string(),
            },
        }
    }
}

impl std::fmt::Debug for VersionResolver {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("VersionResolver")
            .field("sandbox_binary", &self.sandbox_binary)
            .field("wanted_version", &self.wanted_version)
            .finish_non_exhaustive()
    }
}
