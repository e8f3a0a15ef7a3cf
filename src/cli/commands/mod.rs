//! CLI command implementations.
//!
//! Each command implements the [`Command`] trait, which provides a uniform
//! interface for executing commands and reporting results.
//!
//! # Architecture
//!
//! Commands are dispatched via [`CommandDispatcher`], which routes CLI
//! subcommands to their implementations. This allows:
//! - Single binary with subcommands (`dbcookbook create`, `dbcookbook show`)
//! - Settings and catalog loaded once in `main`
//! - Consistent global flag handling

pub mod completions;
pub mod create;
pub mod dispatcher;
pub mod latest;
pub mod list;
pub mod show;

pub use dispatcher::{Command, CommandDispatcher, CommandResult};

use crate::error::{CookbookError, Result};
use crate::ui::{hints, UserInterface};

/// Turn an unknown recipe into a reported failure; other errors pass through.
fn report_unknown_recipe(
    result: Result<CommandResult>,
    ui: &mut dyn UserInterface,
) -> Result<CommandResult> {
    match result {
        Err(err @ CookbookError::RecipeNotFound { .. }) => {
            ui.error(&err.to_string());
            ui.show_hint(hints::list_recipes());
            Ok(CommandResult::failure(err.exit_code()))
        }
        other => other,
    }
}
