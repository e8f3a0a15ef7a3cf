//! CLI argument definitions.
//!
//! This module defines all CLI arguments using clap's derive macros.
//! The main entry point is the [`Cli`] struct.

use clap::{Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

use crate::config::SettingsOverrides;

/// dbcookbook - Ready-made scripts for database sandboxes.
#[derive(Debug, Parser)]
#[command(name = "dbcookbook")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to config file (overrides default ~/.dbcookbook/config.yml)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Directory holding the installed database tarballs
    #[arg(long, global = true, env = "SANDBOX_BINARY", value_name = "DIR")]
    pub sandbox_binary: Option<PathBuf>,

    /// Directory where scripts are created
    #[arg(long, global = true, env = "COOKBOOK_DIR", value_name = "DIR")]
    pub cookbook_dir: Option<PathBuf>,

    /// Version family used when a recipe asks for the latest version
    #[arg(long, global = true, env = "WANTED_VERSION", value_name = "FAMILY")]
    pub wanted_version: Option<String>,

    /// Show verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Minimal output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

impl Cli {
    /// Settings overrides given on the command line or in the environment.
    pub fn overrides(&self) -> SettingsOverrides {
        SettingsOverrides {
            sandbox_binary: self.sandbox_binary.clone(),
            cookbook_directory: self.cookbook_dir.clone(),
            wanted_version: self.wanted_version.clone(),
        }
    }
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// List available recipes (default if no command specified)
    List(ListArgs),

    /// Print a recipe to stdout
    Show(ShowArgs),

    /// Create a recipe script in the cookbook directory
    Create(CreateArgs),

    /// Print the latest installed version for a flavor
    Latest(LatestArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

/// Arguments for the `list` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct ListArgs {
    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `show` command.
#[derive(Debug, Clone, clap::Args)]
pub struct ShowArgs {
    /// Recipe name
    pub recipe: String,

    /// Database flavor (defaults to the recipe's flavor, then mysql)
    #[arg(default_value = "")]
    pub flavor: String,

    /// Print the template without filling in versions
    #[arg(long)]
    pub raw: bool,
}

/// Arguments for the `create` command.
#[derive(Debug, Clone, clap::Args)]
pub struct CreateArgs {
    /// Recipe name, or `all` for every recipe
    pub recipe: String,

    /// Database flavor (ignored for recipes that require their own)
    #[arg(default_value = "")]
    pub flavor: String,
}

/// Arguments for the `latest` command.
#[derive(Debug, Clone, clap::Args)]
pub struct LatestArgs {
    /// Database flavor
    #[arg(default_value = "")]
    pub flavor: String,

    /// Restrict to a version family such as 5.7
    #[arg(long, default_value = "")]
    pub family: String,
}

/// Arguments for the `completions` command.
#[derive(Debug, Clone, clap::Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: Shell,
}
