//! Dotted numeric versions and resolution results.

use regex::Regex;
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

use crate::error::{CookbookError, Result};

/// Prefix of the marker returned when no version can be resolved.
pub const VERSION_NOT_FOUND: &str = "NOTFOUND";

/// Optional alphabetic prefix (e.g. `ps`) followed by dotted numbers.
static VERSION_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^([A-Za-z][A-Za-z_-]*)?(\d+(?:\.\d+)*)$").expect("VERSION_REGEX must compile")
});

/// An installed release identifier such as `5.7.25` or `ps8.0.20`.
///
/// Ordering is numeric per component, so `5.10` sorts after `5.9`.
/// The prefix is kept for display but ignored when comparing.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Version {
    raw: String,
    parts: Vec<u32>,
}

impl Version {
    /// Numeric components.
    pub fn parts(&self) -> &[u32] {
        &self.parts
    }

    /// The version as written (including any prefix).
    pub fn as_str(&self) -> &str {
        &self.raw
    }

    /// Whether this version belongs to `family`.
    ///
    /// A family is a dotted numeric prefix compared component-wise:
    /// `5.7` matches `5.7.25` but neither `5.70.1` nor `15.7.1`.
    /// An empty family matches everything.
    pub fn matches_family(&self, family: &str) -> bool {
        let family = family.trim();
        if family.is_empty() {
            return true;
        }
        match parse_components(family) {
            Some(wanted) => self.parts.starts_with(&wanted),
            None => false,
        }
    }
}

fn parse_components(s: &str) -> Option<Vec<u32>> {
    s.split('.').map(|p| p.parse::<u32>().ok()).collect()
}

impl FromStr for Version {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let caps = VERSION_REGEX
            .captures(s)
            .ok_or_else(|| format!("invalid version: {}", s))?;
        let parts = parse_components(&caps[2]).ok_or_else(|| format!("invalid version: {}", s))?;
        Ok(Self {
            raw: s.to_string(),
            parts,
        })
    }
}

impl Ord for Version {
    fn cmp(&self, other: &Self) -> Ordering {
        self.parts
            .cmp(&other.parts)
            .then_with(|| self.raw.cmp(&other.raw))
    }
}

impl PartialOrd for Version {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}

/// Outcome of a latest-version lookup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResolvedVersion {
    /// Highest matching installed version.
    Found(Version),
    /// Nothing installed for this flavor; displays as `NOTFOUND_<flavor>`.
    NotFound { flavor: String },
}

impl ResolvedVersion {
    /// Check whether a version was found.
    pub fn is_found(&self) -> bool {
        matches!(self, Self::Found(_))
    }

    /// Convert into a hard requirement.
    ///
    /// # Errors
    ///
    /// Returns `NoVersionFound` tagged with the flavor when nothing matched.
    pub fn require(self) -> Result<Version> {
        match self {
            Self::Found(v) => Ok(v),
            Self::NotFound { flavor } => Err(CookbookError::NoVersionFound { flavor }),
        }
    }
}

impl fmt::Display for ResolvedVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Found(v) => write!(f, "{}", v),
            Self::NotFound { flavor } => write!(f, "{}_{}", VERSION_NOT_FOUND, flavor),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn v(s: &str) -> Version {
        s.parse().unwrap()
    }

    #[test]
    fn parses_plain_and_prefixed_versions() {
        assert_eq!(v("5.7.25").parts(), &[5, 7, 25]);
        assert_eq!(v("ps8.0.20").parts(), &[8, 0, 20]);
        assert_eq!(v("ps8.0.20").as_str(), "ps8.0.20");
    }

    #[test]
    fn rejects_non_versions() {
        assert!("".parse::<Version>().is_err());
        assert!("mysql".parse::<Version>().is_err());
        assert!("5.7.x".parse::<Version>().is_err());
        assert!("5..7".parse::<Version>().is_err());
    }

    #[test]
    fn ordering_is_numeric_not_lexicographic() {
        assert!(v("5.10") > v("5.9"));
        assert!(v("5.7.100") > v("5.7.25"));
        assert!(v("10.0.1") > v("8.0.30"));
        assert!(v("5.7") < v("5.7.0"));
    }

    #[test]
    fn max_picks_highest_numeric() {
        let versions = [v("5.7.9"), v("5.7.25"), v("5.7.10")];
        assert_eq!(versions.iter().max().unwrap().as_str(), "5.7.25");
    }

    #[test]
    fn family_matching_is_component_wise() {
        assert!(v("5.7.25").matches_family("5.7"));
        assert!(v("5.7.25").matches_family(""));
        assert!(v("5.7.25").matches_family("5"));
        assert!(!v("5.70.1").matches_family("5.7"));
        assert!(!v("15.7.1").matches_family("5.7"));
        assert!(!v("5.7.25").matches_family("garbage"));
    }

    #[test]
    fn not_found_marker_is_tagged_with_flavor() {
        let r = ResolvedVersion::NotFound {
            flavor: "pxc".into(),
        };
        assert_eq!(r.to_string(), "NOTFOUND_pxc");
        assert!(!r.is_found());
    }

    #[test]
    fn require_converts_not_found_to_error() {
        let r = ResolvedVersion::NotFound {
            flavor: "mysql".into(),
        };
        assert!(matches!(
            r.require(),
            Err(CookbookError::NoVersionFound { flavor }) if flavor == "mysql"
        ));

        let r = ResolvedVersion::Found(v("8.0.30"));
        assert_eq!(r.require().unwrap().as_str(), "8.0.30");
    }
}
