//! User-facing terminal output.
//!
//! This module provides:
//! - [`UserInterface`] trait for UI abstraction
//! - [`TerminalUI`] for real terminal usage
//! - [`MockUI`] for capturing output in tests
//! - [`Table`] for the recipe listing
//! - [`hints`] for remediation messages
//!
//! # Example
//!
//! ```
//! use dbcookbook::ui::{MockUI, UserInterface};
//!
//! let mut ui = MockUI::new();
//! ui.success("recipes/single-deployment.sh created");
//! assert!(ui.has_success("single-deployment.sh"));
//! ```

pub mod hints;
pub mod mock;
pub mod output;
pub mod table;
pub mod terminal;
pub mod theme;

pub use mock::MockUI;
pub use output::OutputMode;
pub use table::Table;
pub use terminal::{create_ui, TerminalUI};
pub use theme::{should_use_colors, CookbookTheme};

/// Trait for user interface interactions.
///
/// This trait allows mocking the UI in tests.
pub trait UserInterface {
    /// Get the current output mode.
    fn output_mode(&self) -> OutputMode;

    /// Display a detail message, shown only in verbose mode.
    fn message(&mut self, msg: &str);

    /// Display a success message.
    fn success(&mut self, msg: &str);

    /// Display a warning message.
    fn warning(&mut self, msg: &str);

    /// Display an error message.
    fn error(&mut self, msg: &str);

    /// Display a remediation hint.
    fn show_hint(&mut self, hint: &str);

    /// Write command payload (script text, tables, versions) to stdout.
    ///
    /// Payload is written in every output mode.
    fn output(&mut self, text: &str);
}
