//! Recipe schema definitions.
//!
//! A recipe is a named shell-script template plus the metadata needed to
//! place it in the cookbook.

use serde::{Deserialize, Serialize};

/// Recipe materialized as `prerequisites.sh`.
pub const PREREQUISITES_RECIPE: &str = "prerequisites";

/// Recipe materialized as the shared include script.
pub const INCLUDE_RECIPE: &str = "include";

/// Recipes created on demand as dependencies of other recipes.
pub const AUXILIARY_RECIPES: [&str; 2] = [PREREQUISITES_RECIPE, INCLUDE_RECIPE];

/// Script written by the prerequisites recipe.
pub const PREREQUISITES_SCRIPT: &str = "prerequisites.sh";

/// Script written by the include recipe, sourced by every other script.
pub const INCLUDE_SCRIPT: &str = "cookbook_include.sh";

/// A recipe template.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecipeTemplate {
    /// Recipe name (unique within the catalog)
    pub name: String,

    /// File name of the generated script
    pub script_name: String,

    /// Human-readable description
    pub description: String,

    /// Whether users run the script directly (and it gets the executable bit)
    #[serde(default)]
    pub executable: bool,

    /// Flavor this recipe always uses; empty accepts the caller's flavor
    #[serde(default)]
    pub required_flavor: String,

    /// Template body
    #[serde(skip_serializing)]
    pub contents: String,
}

/// Check whether `name` is one of the [`AUXILIARY_RECIPES`].
pub fn is_auxiliary(name: &str) -> bool {
    AUXILIARY_RECIPES.contains(&name)
}
