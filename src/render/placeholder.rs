//! Placeholder substitution for recipe templates.
//!
//! Recipe bodies are shell scripts, so the shell's own `${var}` syntax is
//! left alone. Placeholders use double braces around a dotted field name.
//!
//! # Syntax
//!
//! - `{{.FieldName}}` - replaced with the field value
//! - `{{ .FieldName }}` - inner whitespace is allowed
//!
//! Anything else between `{{` and `}}` is an error, as is an unterminated `{{`.
//!
//! # Example
//!
//! ```
//! use dbcookbook::render::fill_placeholders;
//!
//! let text = fill_placeholders("deploy {{.LatestVersion}}", |name| {
//!     (name == "LatestVersion").then(|| "8.0.30".to_string())
//! })
//! .unwrap();
//! assert_eq!(text, "deploy 8.0.30");
//! ```

use std::collections::BTreeSet;

/// A segment of a template body.
#[derive(Debug, Clone, PartialEq)]
pub enum Segment {
    /// Literal text
    Literal(String),
    /// Field reference: {{.Name}}
    Field(String),
}

fn line_of(input: &str, offset: usize) -> usize {
    input[..offset].matches('\n').count() + 1
}

fn is_field_name(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}

/// Parse a template body into segments.
///
/// # Errors
///
/// Returns a message naming the line of the first malformed action.
pub fn parse_placeholders(input: &str) -> Result<Vec<Segment>, String> {
    let mut segments = Vec::new();
    let mut rest = input;
    let mut consumed = 0;

    while let Some(start) = rest.find("{{") {
        if start > 0 {
            segments.push(Segment::Literal(rest[..start].to_string()));
        }
        let after_open = &rest[start + 2..];
        let end = after_open.find("}}").ok_or_else(|| {
            format!(
                "line {}: unclosed action",
                line_of(input, consumed + start)
            )
        })?;

        let action = after_open[..end].trim();
        let field = action
            .strip_prefix('.')
            .filter(|name| is_field_name(name))
            .ok_or_else(|| {
                format!(
                    "line {}: unsupported action {{{{{}}}}}",
                    line_of(input, consumed + start),
                    action
                )
            })?;
        segments.push(Segment::Field(field.to_string()));

        let advance = start + 2 + end + 2;
        consumed += advance;
        rest = &rest[advance..];
    }

    if !rest.is_empty() {
        segments.push(Segment::Literal(rest.to_string()));
    }

    Ok(segments)
}

/// Collect the field names referenced by a template body.
pub fn extract_fields(input: &str) -> Result<BTreeSet<String>, String> {
    Ok(parse_placeholders(input)?
        .into_iter()
        .filter_map(|seg| match seg {
            Segment::Field(name) => Some(name),
            Segment::Literal(_) => None,
        })
        .collect())
}

/// Fill every placeholder in `input` using `lookup`.
///
/// Substitution is all-or-nothing: the output is returned only when every
/// placeholder resolved.
///
/// # Errors
///
/// Returns a message for malformed actions and unknown fields.
pub fn fill_placeholders<F>(input: &str, lookup: F) -> Result<String, String>
where
    F: Fn(&str) -> Option<String>,
{
    let segments = parse_placeholders(input)?;
    let mut result = String::with_capacity(input.len());

    for segment in segments {
        match segment {
            Segment::Literal(text) => result.push_str(&text),
            Segment::Field(name) => {
                let value = lookup(&name).ok_or_else(|| format!("no field named {}", name))?;
                result.push_str(&value);
            }
        }
    }

    Ok(result)
}
