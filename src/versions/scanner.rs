//! Discovery of installed database releases.
//!
//! A sandbox-binary directory holds one subdirectory per expanded tarball,
//! named after its version (`8.0.30`, `ps8.0.20`, ...). The flavor of each
//! release is read from a `FLAVOR` file inside it, defaulting to
//! [`DEFAULT_FLAVOR`] when the file is absent.

use std::fs;
use std::path::Path;

use super::version::Version;
use crate::config::DEFAULT_FLAVOR;

/// Name of the per-release file declaring its flavor.
pub const FLAVOR_FILE: &str = "FLAVOR";

/// Source of installed versions.
///
/// Implementations are treated as ground truth by the resolver.
pub trait VersionSource {
    /// List versions installed under `directory` for `flavor`.
    fn installed_versions(&self, directory: &Path, flavor: &str) -> Vec<Version>;
}

/// Scans a sandbox-binary directory on disk.
#[derive(Debug, Clone, Copy, Default)]
pub struct DirectoryScanner;

impl DirectoryScanner {
    /// Create a new scanner.
    pub fn new() -> Self {
        Self
    }

    fn release_flavor(release_dir: &Path) -> String {
        let flavor_file = release_dir.join(FLAVOR_FILE);
        if !flavor_file.is_file() {
            return DEFAULT_FLAVOR.to_string();
        }
        match fs::read_to_string(&flavor_file) {
            Ok(content) if !content.trim().is_empty() => content.trim().to_string(),
            Ok(_) => DEFAULT_FLAVOR.to_string(),
            Err(e) => {
                tracing::warn!("Cannot read {}: {}", flavor_file.display(), e);
                DEFAULT_FLAVOR.to_string()
            }
        }
    }
}

impl VersionSource for DirectoryScanner {
    fn installed_versions(&self, directory: &Path, flavor: &str) -> Vec<Version> {
        let entries = match fs::read_dir(directory) {
            Ok(entries) => entries,
            Err(e) => {
                tracing::debug!("No versions in {}: {}", directory.display(), e);
                return Vec::new();
            }
        };

        let mut versions: Vec<Version> = entries
            .filter_map(|entry| entry.ok())
            .filter(|entry| entry.path().is_dir())
            .filter_map(|entry| {
                let name = entry.file_name().to_string_lossy().into_owned();
                let version: Version = name.parse().ok()?;
                // A single number is not a release directory.
                if version.parts().len() < 2 {
                    return None;
                }
                (Self::release_flavor(&entry.path()) == flavor).then_some(version)
            })
            .collect();

        versions.sort();
        versions
    }
}

/// In-memory version source, keyed by flavor.
///
/// Useful for embedding the engine where versions come from elsewhere,
/// and for tests.
#[derive(Debug, Clone, Default)]
pub struct StaticVersions {
    versions: Vec<(String, Version)>,
}

impl StaticVersions {
    /// Create an empty source.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add versions for a flavor. Unparseable entries are ignored.
    pub fn with(mut self, flavor: &str, versions: &[&str]) -> Self {
        for v in versions {
            if let Ok(version) = v.parse() {
                self.versions.push((flavor.to_string(), version));
            }
        }
        self
    }
}

impl VersionSource for StaticVersions {
    fn installed_versions(&self, _directory: &Path, flavor: &str) -> Vec<Version> {
        let mut found: Vec<Version> = self
            .versions
            .iter()
            .filter(|(f, _)| f == flavor)
            .map(|(_, v)| v.clone())
            .collect();
        found.sort();
        found
    }
}
