//! Turning recipes into scripts on disk.
//!
//! A recipe is materialized by rendering it, making sure the shared include
//! script is present, and writing the result into the cookbook. When no
//! tarball is installed for the requested flavor the user is pointed, once
//! per session, at the generated prerequisites script.

use std::path::PathBuf;

use super::session::CookbookSession;
use super::store::CookbookStore;
use crate::catalog::{
    is_auxiliary, Catalog, AUXILIARY_RECIPES, INCLUDE_RECIPE, INCLUDE_SCRIPT,
    PREREQUISITES_RECIPE, PREREQUISITES_SCRIPT,
};
use crate::error::{CookbookError, Result};
use crate::render::{Renderer, VersionStatus};
use crate::ui::{hints, UserInterface};
use crate::versions::VersionResolver;

/// Name that expands to every recipe in the catalog.
pub const ALL_RECIPES: &str = "all";

/// Renders recipes and writes them into a [`CookbookStore`].
#[derive(Debug)]
pub struct Materializer<'a> {
    catalog: &'a Catalog,
    renderer: Renderer<'a>,
    store: &'a CookbookStore,
    default_flavor: String,
}

impl<'a> Materializer<'a> {
    /// Create a materializer. `default_flavor` fills in for an empty flavor
    /// and is the flavor per-family fields are resolved under.
    pub fn new(
        catalog: &'a Catalog,
        resolver: &'a VersionResolver,
        store: &'a CookbookStore,
        default_flavor: impl Into<String>,
    ) -> Self {
        let default_flavor = default_flavor.into();
        Self {
            catalog,
            renderer: Renderer::new(catalog, resolver, default_flavor.clone()),
            store,
            default_flavor,
        }
    }

    /// Write the script for `recipe_name`, or for every recipe when the
    /// name is `all` (any case).
    ///
    /// # Errors
    ///
    /// Returns `RecipeNotFound` before touching the disk when the name is
    /// unknown, `RenderFailure` when a non-auxiliary recipe cannot be
    /// rendered, and the store's errors when writing fails.
    pub fn materialize(
        &self,
        session: &mut CookbookSession,
        ui: &mut dyn UserInterface,
        recipe_name: &str,
        flavor: &str,
    ) -> Result<()> {
        if recipe_name.eq_ignore_ascii_case(ALL_RECIPES) {
            // Auxiliaries go first so later recipes find them in place.
            let names = self.catalog.names();
            let (auxiliary, regular): (Vec<_>, Vec<_>) =
                names.into_iter().partition(|name| is_auxiliary(name));
            for name in auxiliary.iter().chain(&regular) {
                self.materialize_one(session, ui, name, flavor)?;
            }
            return Ok(());
        }
        self.materialize_one(session, ui, recipe_name, flavor)
    }

    fn materialize_one(
        &self,
        session: &mut CookbookSession,
        ui: &mut dyn UserInterface,
        recipe_name: &str,
        flavor: &str,
    ) -> Result<()> {
        let recipe = self
            .catalog
            .get(recipe_name)
            .ok_or_else(|| CookbookError::RecipeNotFound {
                name: recipe_name.to_string(),
            })?;
        let auxiliary = is_auxiliary(recipe_name);
        let flavor = self.effective_flavor(&recipe.required_flavor, flavor);

        let (text, latest_version) = match self.renderer.render(recipe_name, &flavor) {
            Ok(rendered) => {
                if rendered.status == VersionStatus::NoVersionFound && !auxiliary {
                    self.show_prerequisites(session, ui, &flavor)?;
                }
                (rendered.text, Some(rendered.latest_version))
            }
            Err(err) if auxiliary => {
                tracing::warn!("Writing empty {}: {}", recipe.script_name, err);
                (String::new(), None)
            }
            Err(err) => {
                self.show_prerequisites(session, ui, &flavor)?;
                return Err(err);
            }
        };

        let needs_include = recipe.script_name != INCLUDE_SCRIPT && !auxiliary;
        if needs_include && !self.store.exists(INCLUDE_SCRIPT) {
            self.materialize_one(session, ui, INCLUDE_RECIPE, &flavor)?;
        }

        let path = self
            .store
            .write(&recipe.script_name, &text, recipe.executable)?;
        ui.success(&format!("{} created", path.display()));
        if let Some(latest_version) = latest_version {
            ui.message(&format!(
                "{}: flavor {}, LatestVersion {}",
                recipe.name, flavor, latest_version
            ));
        }
        Ok(())
    }

    /// Render `recipe_name` for display without writing it.
    ///
    /// With `raw` the template body is returned as stored.
    ///
    /// # Errors
    ///
    /// Returns `RecipeNotFound` for unknown names and `RenderFailure` when
    /// the template cannot be filled; the latter after the one-time
    /// prerequisites hint.
    pub fn show(
        &self,
        session: &mut CookbookSession,
        ui: &mut dyn UserInterface,
        recipe_name: &str,
        flavor: &str,
        raw: bool,
    ) -> Result<String> {
        let recipe = self
            .catalog
            .get(recipe_name)
            .ok_or_else(|| CookbookError::RecipeNotFound {
                name: recipe_name.to_string(),
            })?;
        if raw {
            return Ok(recipe.contents.clone());
        }

        // The caller's flavor wins here, unlike `materialize`.
        let flavor = if flavor.is_empty() {
            self.effective_flavor(&recipe.required_flavor, "")
        } else {
            flavor.to_string()
        };

        match self.renderer.render(recipe_name, &flavor) {
            Ok(rendered) => Ok(rendered.text),
            Err(err) => {
                self.show_prerequisites(session, ui, &flavor)?;
                Err(err)
            }
        }
    }

    fn effective_flavor(&self, required: &str, requested: &str) -> String {
        [required, requested]
            .into_iter()
            .find(|f| !f.is_empty())
            .unwrap_or(self.default_flavor.as_str())
            .to_string()
    }

    fn show_prerequisites(
        &self,
        session: &mut CookbookSession,
        ui: &mut dyn UserInterface,
        flavor: &str,
    ) -> Result<()> {
        if !session.mark_prerequisites_shown() {
            return Ok(());
        }

        for name in AUXILIARY_RECIPES {
            if !self.has_script(name) {
                self.materialize_one(session, ui, name, "")?;
            }
        }

        ui.warning(&hints::no_tarballs_found(flavor));
        ui.show_hint(&hints::read_instructions(&self.prerequisites_path()));
        Ok(())
    }

    fn has_script(&self, recipe_name: &str) -> bool {
        self.catalog
            .get(recipe_name)
            .is_some_and(|r| self.store.exists(&r.script_name))
    }

    fn prerequisites_path(&self) -> PathBuf {
        let script = self
            .catalog
            .get(PREREQUISITES_RECIPE)
            .map(|r| r.script_name.as_str())
            .unwrap_or(PREREQUISITES_SCRIPT);
        self.store.path_of(script)
    }
}
