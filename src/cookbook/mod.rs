//! The cookbook directory and the scripts materialized into it.
//!
//! - [`CookbookStore`] owns the directory and its file modes
//! - [`CookbookSession`] remembers whether the prerequisites hint was shown
//! - [`Materializer`] renders recipes and writes them through the store
//!
//! # Example
//!
//! ```no_run
//! use dbcookbook::catalog::Catalog;
//! use dbcookbook::config::Settings;
//! use dbcookbook::cookbook::{CookbookSession, CookbookStore, Materializer};
//! use dbcookbook::ui::MockUI;
//! use dbcookbook::versions::VersionResolver;
//!
//! let settings = Settings::default();
//! let catalog = Catalog::builtin().unwrap();
//! let resolver = VersionResolver::from_settings(&settings);
//! let store = CookbookStore::new(&settings.cookbook_directory);
//! let materializer = Materializer::new(&catalog, &resolver, &store, "mysql");
//!
//! let mut session = CookbookSession::new();
//! let mut ui = MockUI::new();
//! materializer.materialize(&mut session, &mut ui, "single", "").unwrap();
//! ```

pub mod materialize;
pub mod session;
pub mod store;

pub use materialize::{Materializer, ALL_RECIPES};
pub use session::CookbookSession;
pub use store::{CookbookStore, DIRECTORY_MODE, EXECUTABLE_MODE};
