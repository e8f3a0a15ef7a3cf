//! dbcookbook CLI entry point.

use std::process::ExitCode;

use clap::Parser;
use dbcookbook::catalog::Catalog;
use dbcookbook::cli::{Cli, CommandDispatcher, CommandResult};
use dbcookbook::config::load_settings;
use dbcookbook::ui::{create_ui, OutputMode, UserInterface};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Initialize the tracing subscriber for logging.
///
/// Log level is controlled by:
/// 1. `--debug` flag sets level to DEBUG
/// 2. `RUST_LOG` environment variable (if set)
/// 3. Default is INFO
fn init_tracing(debug: bool) {
    let filter = if debug {
        EnvFilter::new("dbcookbook=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("dbcookbook=info"))
    };

    // stdout carries command payload; logs go to stderr.
    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
        .with(filter)
        .init();
}

fn run(cli: &Cli, ui: &mut dyn UserInterface) -> dbcookbook::Result<CommandResult> {
    let settings = load_settings(cli.config.as_deref())?.with_overrides(cli.overrides());
    tracing::debug!("Effective settings: {:?}", settings);

    let catalog = Catalog::builtin()?;
    tracing::debug!("Loaded {} recipes", catalog.len());

    CommandDispatcher::new(settings, catalog).dispatch(cli, ui)
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.debug);

    tracing::debug!("dbcookbook starting with args: {:?}", cli);

    // Determine output mode
    let output_mode = if cli.quiet {
        OutputMode::Quiet
    } else if cli.verbose {
        OutputMode::Verbose
    } else {
        OutputMode::Normal
    };

    // Handle --no-color
    if cli.no_color {
        std::env::set_var("NO_COLOR", "1");
    }

    let mut ui = create_ui(output_mode);

    match run(&cli, ui.as_mut()) {
        Ok(result) => ExitCode::from(result.exit_code as u8),
        Err(e) => {
            ui.error(&format!("Error: {}", e));
            ExitCode::from(e.exit_code() as u8)
        }
    }
}
