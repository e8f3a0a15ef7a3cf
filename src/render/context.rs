//! Substitution data for recipe templates.

use regex::Regex;
use std::collections::BTreeMap;
use std::sync::LazyLock;

use crate::config::COPYRIGHT;
use crate::versions::{ResolvedVersion, VersionResolver};

/// Release families that always get a `Latest<family>` field.
pub const KNOWN_FAMILIES: [&str; 6] = ["5.0", "5.1", "5.5", "5.6", "5.7", "8.0"];

static FIELD_SEPARATOR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^A-Za-z0-9]").expect("FIELD_SEPARATOR must compile"));

/// Placeholder name for a family: `5.7` becomes `Latest5_7`.
pub fn family_field_name(family: &str) -> String {
    format!("Latest{}", FIELD_SEPARATOR.replace_all(family, "_"))
}

/// Whether the requested flavor had any version installed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum VersionStatus {
    /// `LatestVersion` holds a real version.
    #[default]
    Resolved,
    /// `LatestVersion` holds the not-found marker.
    NoVersionFound,
}

/// Latest installed version for each of the [`KNOWN_FAMILIES`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FamilyVersions {
    pub latest_5_0: ResolvedVersion,
    pub latest_5_1: ResolvedVersion,
    pub latest_5_5: ResolvedVersion,
    pub latest_5_6: ResolvedVersion,
    pub latest_5_7: ResolvedVersion,
    pub latest_8_0: ResolvedVersion,
}

impl FamilyVersions {
    /// Resolve every known family for `flavor`.
    pub fn resolve(resolver: &VersionResolver, flavor: &str) -> Self {
        let latest = |family: &str| resolver.resolve_latest(family, flavor);
        Self {
            latest_5_0: latest("5.0"),
            latest_5_1: latest("5.1"),
            latest_5_5: latest("5.5"),
            latest_5_6: latest("5.6"),
            latest_5_7: latest("5.7"),
            latest_8_0: latest("8.0"),
        }
    }

    /// Family string paired with its resolved version.
    pub fn entries(&self) -> [(&'static str, &ResolvedVersion); 6] {
        [
            ("5.0", &self.latest_5_0),
            ("5.1", &self.latest_5_1),
            ("5.5", &self.latest_5_5),
            ("5.6", &self.latest_5_6),
            ("5.7", &self.latest_5_7),
            ("8.0", &self.latest_8_0),
        ]
    }

    /// Look up a family by its placeholder name (`Latest5_7`).
    pub fn by_field(&self, field: &str) -> Option<&ResolvedVersion> {
        self.entries()
            .into_iter()
            .find(|(family, _)| family_field_name(family) == field)
            .map(|(_, version)| version)
    }
}

/// Everything a recipe template can reference.
///
/// Built fresh for every render and never persisted.
#[derive(Debug, Clone)]
pub struct TemplateContext {
    pub copyright: String,
    pub template_name: String,
    /// Latest version for the requested flavor.
    pub latest_version: ResolvedVersion,
    /// Per-family versions, always for the default flavor.
    pub families: FamilyVersions,
    /// Additional fields, consulted after the fixed ones.
    pub extra: BTreeMap<String, String>,
}

impl TemplateContext {
    /// Build the context for rendering `recipe_name` with `flavor`.
    ///
    /// Family fields are resolved under `family_flavor` so that scripts for
    /// other flavors still see baseline version data.
    pub fn build(
        recipe_name: &str,
        flavor: &str,
        family_flavor: &str,
        resolver: &VersionResolver,
    ) -> (Self, VersionStatus) {
        let families = FamilyVersions::resolve(resolver, family_flavor);
        let latest_version = resolver.resolve_latest("", flavor);
        let status = if latest_version.is_found() {
            VersionStatus::Resolved
        } else {
            VersionStatus::NoVersionFound
        };

        let context = Self {
            copyright: COPYRIGHT.to_string(),
            template_name: recipe_name.to_string(),
            latest_version,
            families,
            extra: BTreeMap::new(),
        };
        (context, status)
    }

    /// Add an extra field.
    pub fn with_extra(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.extra.insert(name.into(), value.into());
        self
    }

    /// Value for a placeholder name.
    pub fn lookup(&self, field: &str) -> Option<String> {
        match field {
            "Copyright" => Some(self.copyright.clone()),
            "TemplateName" => Some(self.template_name.clone()),
            "LatestVersion" => Some(self.latest_version.to_string()),
            _ => self
                .families
                .by_field(field)
                .map(|v| v.to_string())
                .or_else(|| self.extra.get(field).cloned()),
        }
    }
}
