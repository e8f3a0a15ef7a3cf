//! Recipe rendering.
//!
//! - [`placeholder`] - `{{.Field}}` parsing and all-or-nothing substitution
//! - [`context`] - the structured data a template can reference
//! - [`renderer`] - catalog lookup plus substitution

pub mod context;
pub mod placeholder;
pub mod renderer;

pub use context::{
    family_field_name, FamilyVersions, TemplateContext, VersionStatus, KNOWN_FAMILIES,
};
pub use placeholder::{extract_fields, fill_placeholders, parse_placeholders, Segment};
pub use renderer::{Rendered, Renderer};
