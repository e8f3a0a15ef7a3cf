//! Show command implementation.
//!
//! The `dbcookbook show` command prints a rendered recipe without creating
//! its script.

use crate::catalog::Catalog;
use crate::cli::args::ShowArgs;
use crate::config::Settings;
use crate::cookbook::{CookbookSession, CookbookStore, Materializer};
use crate::error::Result;
use crate::ui::UserInterface;
use crate::versions::VersionResolver;

use super::dispatcher::{Command, CommandResult};
use super::report_unknown_recipe;

/// The show command implementation.
pub struct ShowCommand<'a> {
    settings: &'a Settings,
    catalog: &'a Catalog,
    args: ShowArgs,
}

impl<'a> ShowCommand<'a> {
    /// Create a new show command.
    pub fn new(settings: &'a Settings, catalog: &'a Catalog, args: ShowArgs) -> Self {
        Self {
            settings,
            catalog,
            args,
        }
    }

    fn show(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let resolver = VersionResolver::from_settings(self.settings);
        let store = CookbookStore::new(&self.settings.cookbook_directory);
        let materializer =
            Materializer::new(self.catalog, &resolver, &store, &self.settings.default_flavor);

        let mut session = CookbookSession::new();
        let text = materializer.show(
            &mut session,
            ui,
            &self.args.recipe,
            &self.args.flavor,
            self.args.raw,
        )?;
        ui.output(&text);
        Ok(CommandResult::success())
    }
}

impl Command for ShowCommand<'_> {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let result = self.show(ui);
        report_unknown_recipe(result, ui)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::RecipeTemplate;
    use crate::ui::MockUI;
    use tempfile::TempDir;

    fn settings(temp: &TempDir) -> Settings {
        Settings {
            sandbox_binary: temp.path().join("opt"),
            cookbook_directory: temp.path().join("recipes"),
            ..Default::default()
        }
    }

    fn catalog() -> Catalog {
        Catalog::from_recipes(vec![RecipeTemplate {
            name: "single".to_string(),
            script_name: "single.sh".to_string(),
            description: "single".to_string(),
            executable: true,
            required_flavor: String::new(),
            contents: "deploy {{.LatestVersion}}".to_string(),
        }])
    }

    fn args(recipe: &str, raw: bool) -> ShowArgs {
        ShowArgs {
            recipe: recipe.to_string(),
            flavor: String::new(),
            raw,
        }
    }

    #[test]
    fn prints_rendered_recipe() {
        let temp = TempDir::new().unwrap();
        let settings = settings(&temp);
        let catalog = catalog();
        let mut ui = MockUI::new();

        let result = ShowCommand::new(&settings, &catalog, args("single", false))
            .execute(&mut ui)
            .unwrap();

        assert!(result.success);
        assert_eq!(ui.outputs(), &["deploy NOTFOUND_mysql".to_string()]);
    }

    #[test]
    fn prints_raw_recipe() {
        let temp = TempDir::new().unwrap();
        let settings = settings(&temp);
        let catalog = catalog();
        let mut ui = MockUI::new();

        ShowCommand::new(&settings, &catalog, args("single", true))
            .execute(&mut ui)
            .unwrap();
        assert_eq!(ui.outputs(), &["deploy {{.LatestVersion}}".to_string()]);
    }

    #[test]
    fn unknown_recipe_reports_failure() {
        let temp = TempDir::new().unwrap();
        let settings = settings(&temp);
        let catalog = catalog();
        let mut ui = MockUI::new();

        let result = ShowCommand::new(&settings, &catalog, args("nosuch", false))
            .execute(&mut ui)
            .unwrap();

        assert!(!result.success);
        assert_eq!(result.exit_code, 2);
        assert!(ui.has_error("recipe nosuch not found"));
        assert!(ui.has_hint("dbcookbook list"));
    }
}
