//! Create command implementation.
//!
//! The `dbcookbook create` command writes recipe scripts into the cookbook
//! directory.

use crate::catalog::Catalog;
use crate::cli::args::CreateArgs;
use crate::config::Settings;
use crate::cookbook::{CookbookSession, CookbookStore, Materializer};
use crate::error::Result;
use crate::ui::UserInterface;
use crate::versions::VersionResolver;

use super::dispatcher::{Command, CommandResult};
use super::report_unknown_recipe;

/// The create command implementation.
pub struct CreateCommand<'a> {
    settings: &'a Settings,
    catalog: &'a Catalog,
    args: CreateArgs,
}

impl<'a> CreateCommand<'a> {
    /// Create a new create command.
    pub fn new(settings: &'a Settings, catalog: &'a Catalog, args: CreateArgs) -> Self {
        Self {
            settings,
            catalog,
            args,
        }
    }

    fn create(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let resolver = VersionResolver::from_settings(self.settings);
        let store = CookbookStore::new(&self.settings.cookbook_directory);
        let materializer =
            Materializer::new(self.catalog, &resolver, &store, &self.settings.default_flavor);

        tracing::debug!(
            "Creating {} in {} from {}",
            self.args.recipe,
            store.directory().display(),
            resolver.sandbox_binary().display()
        );

        let mut session = CookbookSession::new();
        materializer.materialize(&mut session, ui, &self.args.recipe, &self.args.flavor)?;
        Ok(CommandResult::success())
    }
}

impl Command for CreateCommand<'_> {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let result = self.create(ui);
        report_unknown_recipe(result, ui)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    use crate::ui::MockUI;

    fn settings(temp: &TempDir) -> Settings {
        let opt = temp.path().join("opt");
        fs::create_dir_all(opt.join("8.0.30")).unwrap();
        Settings {
            sandbox_binary: opt,
            cookbook_directory: temp.path().join("recipes"),
            ..Default::default()
        }
    }

    fn args(recipe: &str) -> CreateArgs {
        CreateArgs {
            recipe: recipe.to_string(),
            flavor: String::new(),
        }
    }

    #[test]
    fn creates_builtin_recipe_with_include() {
        let temp = TempDir::new().unwrap();
        let settings = settings(&temp);
        let catalog = Catalog::builtin().unwrap();
        let mut ui = MockUI::new();

        let result = CreateCommand::new(&settings, &catalog, args("single"))
            .execute(&mut ui)
            .unwrap();

        assert!(result.success);
        let recipes = temp.path().join("recipes");
        assert!(recipes.join("cookbook_include.sh").is_file());
        let script = catalog.get("single").unwrap().script_name.clone();
        let text = fs::read_to_string(recipes.join(script)).unwrap();
        assert!(text.contains("8.0.30"));
        assert!(ui.hints().is_empty());
    }

    #[test]
    fn unknown_recipe_creates_nothing() {
        let temp = TempDir::new().unwrap();
        let settings = settings(&temp);
        let catalog = Catalog::builtin().unwrap();
        let mut ui = MockUI::new();

        let result = CreateCommand::new(&settings, &catalog, args("nosuch"))
            .execute(&mut ui)
            .unwrap();

        assert_eq!(result.exit_code, 2);
        assert!(!temp.path().join("recipes").exists());
    }
}
