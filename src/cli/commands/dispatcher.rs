//! Command dispatching.
//!
//! This module provides the core command infrastructure:
//! - [`Command`] trait for implementing commands
//! - [`CommandResult`] for uniform result reporting
//! - [`CommandDispatcher`] for routing CLI subcommands

use crate::catalog::Catalog;
use crate::cli::args::{Cli, Commands, ListArgs};
use crate::config::Settings;
use crate::error::Result;
use crate::ui::UserInterface;

/// Trait for command implementations.
///
/// Each CLI subcommand implements this trait to provide its execution logic.
pub trait Command {
    /// Execute the command.
    ///
    /// # Arguments
    ///
    /// * `ui` - User interface for displaying output
    ///
    /// # Returns
    ///
    /// A [`CommandResult`] indicating success/failure and exit code.
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult>;
}

/// Result of command execution.
#[derive(Debug)]
pub struct CommandResult {
    /// Whether the command succeeded.
    pub success: bool,

    /// Exit code to use (0 for success, non-zero for failure).
    pub exit_code: i32,
}

impl CommandResult {
    /// Create a successful result.
    pub fn success() -> Self {
        Self {
            success: true,
            exit_code: 0,
        }
    }

    /// Create a failure result.
    pub fn failure(exit_code: i32) -> Self {
        Self {
            success: false,
            exit_code,
        }
    }
}

/// Dispatches CLI commands to their implementations.
pub struct CommandDispatcher {
    settings: Settings,
    catalog: Catalog,
}

impl CommandDispatcher {
    /// Create a new dispatcher over effective settings and a catalog.
    pub fn new(settings: Settings, catalog: Catalog) -> Self {
        Self { settings, catalog }
    }

    /// Dispatch and execute a command.
    ///
    /// Routes the CLI subcommand to the appropriate command implementation
    /// and executes it.
    pub fn dispatch(&self, cli: &Cli, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        match &cli.command {
            Some(Commands::List(args)) => {
                let cmd = super::list::ListCommand::new(&self.catalog, args.clone());
                cmd.execute(ui)
            }
            Some(Commands::Show(args)) => {
                let cmd =
                    super::show::ShowCommand::new(&self.settings, &self.catalog, args.clone());
                cmd.execute(ui)
            }
            Some(Commands::Create(args)) => {
                let cmd =
                    super::create::CreateCommand::new(&self.settings, &self.catalog, args.clone());
                cmd.execute(ui)
            }
            Some(Commands::Latest(args)) => {
                let cmd = super::latest::LatestCommand::new(&self.settings, args.clone());
                cmd.execute(ui)
            }
            Some(Commands::Completions(args)) => {
                let cmd = super::completions::CompletionsCommand::new(args.clone());
                cmd.execute(ui)
            }
            None => {
                // Default to listing recipes
                let cmd = super::list::ListCommand::new(&self.catalog, ListArgs::default());
                cmd.execute(ui)
            }
        }
    }
}
