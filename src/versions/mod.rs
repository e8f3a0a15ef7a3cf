//! Installed-version discovery and resolution.
//!
//! - [`version`] - dotted numeric versions and the not-found marker
//! - [`scanner`] - the [`VersionSource`] seam and its directory implementation
//! - [`resolver`] - picking the latest version for a flavor and family

pub mod resolver;
pub mod scanner;
pub mod version;

pub use resolver::VersionResolver;
pub use scanner::{DirectoryScanner, StaticVersions, VersionSource, FLAVOR_FILE};
pub use version::{ResolvedVersion, Version, VERSION_NOT_FOUND};
