//! Recipe catalog.
//!
//! The catalog is a read-only mapping from recipe name to
//! [`RecipeTemplate`]. The built-in catalog is embedded in the binary from
//! `templates/recipes/*.yml`; other catalogs can be assembled with
//! [`Catalog::from_recipes`].
//!
//! # Example
//!
//! ```
//! use dbcookbook::catalog::Catalog;
//!
//! let catalog = Catalog::builtin().unwrap();
//! let single = catalog.get("single").unwrap();
//! assert!(single.executable);
//! ```

pub mod builtin;
pub mod recipe;

pub use recipe::{
    is_auxiliary, RecipeTemplate, AUXILIARY_RECIPES, INCLUDE_RECIPE, INCLUDE_SCRIPT,
    PREREQUISITES_RECIPE, PREREQUISITES_SCRIPT,
};

use std::collections::BTreeMap;

use crate::error::Result;

/// Read-only set of recipes keyed by name.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    recipes: BTreeMap<String, RecipeTemplate>,
}

impl Catalog {
    /// Load the built-in catalog.
    pub fn builtin() -> Result<Self> {
        Ok(Self::from_recipes(builtin::load_recipes()?))
    }

    /// Build a catalog from recipes. Later duplicates replace earlier ones.
    pub fn from_recipes(recipes: impl IntoIterator<Item = RecipeTemplate>) -> Self {
        Self {
            recipes: recipes
                .into_iter()
                .map(|r| (r.name.clone(), r))
                .collect(),
        }
    }

    /// Get a recipe by name.
    pub fn get(&self, name: &str) -> Option<&RecipeTemplate> {
        self.recipes.get(name)
    }

    /// Check if a recipe exists.
    pub fn contains(&self, name: &str) -> bool {
        self.recipes.contains_key(name)
    }

    /// Snapshot of all recipe names, sorted.
    pub fn names(&self) -> Vec<String> {
        self.recipes.keys().cloned().collect()
    }

    /// All recipes, sorted by name.
    pub fn recipes(&self) -> impl Iterator<Item = &RecipeTemplate> {
        self.recipes.values()
    }

    /// Recipes users run directly, sorted by name.
    pub fn executable_recipes(&self) -> impl Iterator<Item = &RecipeTemplate> {
        self.recipes.values().filter(|r| r.executable)
    }

    /// Number of recipes.
    pub fn len(&self) -> usize {
        self.recipes.len()
    }

    /// Check if the catalog is empty.
    pub fn is_empty(&self) -> bool {
        self.recipes.is_empty()
    }
}
