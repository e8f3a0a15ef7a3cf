//! Latest command implementation.
//!
//! The `dbcookbook latest` command prints the highest installed version for
//! a flavor.

use crate::cli::args::LatestArgs;
use crate::config::Settings;
use crate::error::Result;
use crate::ui::UserInterface;
use crate::versions::VersionResolver;

use super::dispatcher::{Command, CommandResult};

/// The latest command implementation.
pub struct LatestCommand<'a> {
    settings: &'a Settings,
    args: LatestArgs,
}

impl<'a> LatestCommand<'a> {
    /// Create a new latest command.
    pub fn new(settings: &'a Settings, args: LatestArgs) -> Self {
        Self { settings, args }
    }
}

impl Command for LatestCommand<'_> {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let flavor = if self.args.flavor.is_empty() {
            self.settings.default_flavor.as_str()
        } else {
            self.args.flavor.as_str()
        };

        let version = VersionResolver::from_settings(self.settings)
            .resolve_latest(&self.args.family, flavor)
            .require()?;
        ui.output(version.as_str());
        Ok(CommandResult::success())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CookbookError;
    use crate::ui::MockUI;
    use std::fs;
    use tempfile::TempDir;

    fn settings(temp: &TempDir) -> Settings {
        for version in ["5.7.9", "5.7.25", "8.0.30"] {
            fs::create_dir_all(temp.path().join(version)).unwrap();
        }
        Settings {
            sandbox_binary: temp.path().to_path_buf(),
            ..Default::default()
        }
    }

    fn args(flavor: &str, family: &str) -> LatestArgs {
        LatestArgs {
            flavor: flavor.to_string(),
            family: family.to_string(),
        }
    }

    #[test]
    fn prints_latest_for_default_flavor() {
        let temp = TempDir::new().unwrap();
        let settings = settings(&temp);
        let mut ui = MockUI::new();

        LatestCommand::new(&settings, args("", ""))
            .execute(&mut ui)
            .unwrap();
        assert_eq!(ui.outputs(), &["8.0.30".to_string()]);
    }

    #[test]
    fn family_restricts_result() {
        let temp = TempDir::new().unwrap();
        let settings = settings(&temp);
        let mut ui = MockUI::new();

        LatestCommand::new(&settings, args("mysql", "5.7"))
            .execute(&mut ui)
            .unwrap();
        assert_eq!(ui.outputs(), &["5.7.25".to_string()]);
    }

    #[test]
    fn missing_flavor_is_an_error() {
        let temp = TempDir::new().unwrap();
        let settings = settings(&temp);
        let mut ui = MockUI::new();

        let err = LatestCommand::new(&settings, args("tidb", ""))
            .execute(&mut ui)
            .unwrap_err();
        assert!(matches!(err, CookbookError::NoVersionFound { ref flavor } if flavor == "tidb"));
        assert_eq!(err.exit_code(), 3);
    }
}
