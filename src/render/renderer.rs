//! Rendering recipes into script text.

use super::context::{TemplateContext, VersionStatus};
use super::placeholder::fill_placeholders;
use crate::catalog::Catalog;
use crate::error::{CookbookError, Result};
use crate::versions::{ResolvedVersion, VersionResolver};

/// A rendered recipe.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rendered {
    /// Final script text.
    pub text: String,
    /// Whether `LatestVersion` was resolved for the requested flavor.
    pub status: VersionStatus,
    /// Value substituted for `LatestVersion`.
    pub latest_version: ResolvedVersion,
}

/// Fills recipe templates with version data.
#[derive(Debug)]
pub struct Renderer<'a> {
    catalog: &'a Catalog,
    resolver: &'a VersionResolver,
    family_flavor: String,
}

impl<'a> Renderer<'a> {
    /// Create a renderer. Family fields are resolved under `family_flavor`.
    pub fn new(
        catalog: &'a Catalog,
        resolver: &'a VersionResolver,
        family_flavor: impl Into<String>,
    ) -> Self {
        Self {
            catalog,
            resolver,
            family_flavor: family_flavor.into(),
        }
    }

    /// Render `recipe_name` for `flavor`.
    ///
    /// # Errors
    ///
    /// Returns `RecipeNotFound` for names outside the catalog and
    /// `RenderFailure` when the template cannot be filled completely.
    pub fn render(&self, recipe_name: &str, flavor: &str) -> Result<Rendered> {
        let recipe = self
            .catalog
            .get(recipe_name)
            .ok_or_else(|| CookbookError::RecipeNotFound {
                name: recipe_name.to_string(),
            })?;

        let (context, status) =
            TemplateContext::build(recipe_name, flavor, &self.family_flavor, self.resolver);

        let text = fill_placeholders(&recipe.contents, |field| context.lookup(field)).map_err(
            |message| CookbookError::RenderFailure {
                recipe: recipe_name.to_string(),
                message,
                status,
            },
        )?;

        tracing::debug!("Rendered {} for flavor {} ({:?})", recipe_name, flavor, status);
        Ok(Rendered {
            text,
            status,
            latest_version: context.latest_version,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::RecipeTemplate;
    use crate::versions::StaticVersions;

    fn catalog() -> Catalog {
        let recipe = |name: &str, contents: &str| RecipeTemplate {
            name: name.to_string(),
            script_name: format!("{}.sh", name),
            description: name.to_string(),
            executable: true,
            required_flavor: String::new(),
            contents: contents.to_string(),
        };
        Catalog::from_recipes(vec![
            recipe("start", "# {{.TemplateName}}\ndeploy {{.LatestVersion}} {{.Latest5_7}}\n"),
            recipe("broken", "deploy {{.LatestVersion}} {{.NoSuchField}}\n"),
            recipe("unclosed", "deploy {{.LatestVersion\n"),
        ])
    }

    fn resolver(source: StaticVersions) -> VersionResolver {
        VersionResolver::new(Box::new(source), "/opt/mysql")
    }

    #[test]
    fn unknown_recipe_is_not_found() {
        let catalog = catalog();
        let resolver = resolver(StaticVersions::new());
        let result = Renderer::new(&catalog, &resolver, "mysql").render("nosuch", "mysql");
        assert!(matches!(result, Err(CookbookError::RecipeNotFound { name }) if name == "nosuch"));
    }

    #[test]
    fn renders_version_data() {
        let catalog = catalog();
        let resolver = resolver(StaticVersions::new().with("mysql", &["5.7.25", "8.0.30"]));
        let rendered = Renderer::new(&catalog, &resolver, "mysql")
            .render("start", "mysql")
            .unwrap();
        assert_eq!(rendered.text, "# start\ndeploy 8.0.30 5.7.25\n");
        assert_eq!(rendered.status, VersionStatus::Resolved);
        assert_eq!(rendered.latest_version.to_string(), "8.0.30");
    }

    #[test]
    fn missing_versions_still_render_with_marker() {
        let catalog = catalog();
        let resolver = resolver(StaticVersions::new());
        let rendered = Renderer::new(&catalog, &resolver, "mysql")
            .render("start", "mysql")
            .unwrap();
        assert_eq!(
            rendered.text,
            "# start\ndeploy NOTFOUND_mysql NOTFOUND_mysql\n"
        );
        assert_eq!(rendered.status, VersionStatus::NoVersionFound);
        assert!(!rendered.latest_version.is_found());
    }

    #[test]
    fn unknown_field_is_render_failure_carrying_status() {
        let catalog = catalog();
        let resolver = resolver(StaticVersions::new());
        let err = Renderer::new(&catalog, &resolver, "mysql")
            .render("broken", "mysql")
            .unwrap_err();
        match err {
            CookbookError::RenderFailure {
                recipe,
                message,
                status,
            } => {
                assert_eq!(recipe, "broken");
                assert!(message.contains("NoSuchField"));
                assert_eq!(status, VersionStatus::NoVersionFound);
            }
            other => panic!("expected RenderFailure, got {:?}", other),
        }
    }

    #[test]
    fn malformed_template_is_render_failure() {
        let catalog = catalog();
        let resolver = resolver(StaticVersions::new());
        let result = Renderer::new(&catalog, &resolver, "mysql").render("unclosed", "mysql");
        assert!(matches!(result, Err(CookbookError::RenderFailure { .. })));
    }

    #[test]
    fn rendering_is_idempotent() {
        let catalog = catalog();
        let resolver = resolver(StaticVersions::new().with("mysql", &["5.6.10", "5.7.25"]));
        let renderer = Renderer::new(&catalog, &resolver, "mysql");
        let first = renderer.render("start", "mysql").unwrap();
        let second = renderer.render("start", "mysql").unwrap();
        assert_eq!(first, second);
    }
}
