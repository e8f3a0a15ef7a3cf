//! Built-in recipes embedded at compile time.

use include_dir::{include_dir, Dir};

use crate::catalog::recipe::RecipeTemplate;
use crate::error::{CookbookError, Result};

/// Embedded recipes directory.
static RECIPES_DIR: Dir<'_> = include_dir!("$CARGO_MANIFEST_DIR/templates/recipes");

/// Load all built-in recipes.
pub fn load_recipes() -> Result<Vec<RecipeTemplate>> {
    let mut recipes = Vec::new();

    for file in RECIPES_DIR.files() {
        let is_yaml = file
            .path()
            .extension()
            .is_some_and(|ext| ext == "yml" || ext == "yaml");
        if !is_yaml {
            continue;
        }

        let content = file
            .contents_utf8()
            .ok_or_else(|| CookbookError::ConfigParseError {
                path: file.path().to_path_buf(),
                message: "Invalid UTF-8".to_string(),
            })?;

        let recipe: RecipeTemplate =
            serde_yaml::from_str(content).map_err(|e| CookbookError::ConfigParseError {
                path: file.path().to_path_buf(),
                message: e.to_string(),
            })?;
        recipes.push(recipe);
    }

    Ok(recipes)
}
