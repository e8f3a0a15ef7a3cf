//! List command implementation.
//!
//! The `dbcookbook list` command lists the recipes that produce runnable
//! scripts.

use serde::Serialize;

use crate::catalog::{Catalog, RecipeTemplate};
use crate::cli::args::ListArgs;
use crate::error::Result;
use crate::ui::{Table, UserInterface};

use super::dispatcher::{Command, CommandResult};

/// One listed recipe.
#[derive(Debug, Serialize)]
struct RecipeRow<'a> {
    recipe: &'a str,
    script_name: &'a str,
    description: &'a str,
    needed_flavor: &'a str,
}

impl<'a> From<&'a RecipeTemplate> for RecipeRow<'a> {
    fn from(recipe: &'a RecipeTemplate) -> Self {
        Self {
            recipe: &recipe.name,
            script_name: &recipe.script_name,
            description: &recipe.description,
            needed_flavor: &recipe.required_flavor,
        }
    }
}

/// The list command implementation.
pub struct ListCommand<'a> {
    catalog: &'a Catalog,
    args: ListArgs,
}

impl<'a> ListCommand<'a> {
    /// Create a new list command.
    pub fn new(catalog: &'a Catalog, args: ListArgs) -> Self {
        Self { catalog, args }
    }
}

impl Command for ListCommand<'_> {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let rows: Vec<RecipeRow<'_>> = self
            .catalog
            .executable_recipes()
            .map(RecipeRow::from)
            .collect();

        if self.args.json {
            let json = serde_json::to_string_pretty(&rows).map_err(anyhow::Error::from)?;
            ui.output(&json);
            return Ok(CommandResult::success());
        }

        let mut table = Table::new(&["recipe", "script name", "description", "needed flavor"]);
        for row in &rows {
            table.add_row(&[
                row.recipe,
                row.script_name,
                row.description,
                row.needed_flavor,
            ]);
        }
        ui.output(&table.render());
        Ok(CommandResult::success())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::MockUI;

    fn catalog() -> Catalog {
        let recipe = |name: &str, executable: bool, flavor: &str| RecipeTemplate {
            name: name.to_string(),
            script_name: format!("{}.sh", name),
            description: format!("{} description", name),
            executable,
            required_flavor: flavor.to_string(),
            contents: String::new(),
        };
        Catalog::from_recipes(vec![
            recipe("single", true, ""),
            recipe("include", false, ""),
            recipe("pxc", true, "pxc"),
        ])
    }

    #[test]
    fn table_lists_executable_recipes_only() {
        let catalog = catalog();
        let mut ui = MockUI::new();
        let result = ListCommand::new(&catalog, ListArgs::default())
            .execute(&mut ui)
            .unwrap();

        assert!(result.success);
        let out = &ui.outputs()[0];
        assert!(out.contains("single.sh"));
        assert!(out.contains("pxc description"));
        assert!(out.contains("needed flavor"));
        assert!(!out.contains("include.sh"));
    }

    #[test]
    fn json_rows_sorted_by_name() {
        let catalog = catalog();
        let mut ui = MockUI::new();
        ListCommand::new(&catalog, ListArgs { json: true })
            .execute(&mut ui)
            .unwrap();

        let rows: Vec<serde_json::Value> = serde_json::from_str(&ui.outputs()[0]).unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0]["recipe"], "pxc");
        assert_eq!(rows[0]["needed_flavor"], "pxc");
        assert_eq!(rows[1]["script_name"], "single.sh");
    }
}
