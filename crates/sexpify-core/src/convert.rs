//! One-shot conversion pipeline: YAML text in, S-expression text out.
//!
//! Wires the loader (`serde_yaml`), the structurer, and the formatter
//! together, with the empty-document rule applied in between.

use crate::error::Result;
use crate::format::{format_document, EMPTY_DOCUMENT};
use crate::structure::{to_sexp_with_limit, DEFAULT_MAX_DEPTH};
use serde_yaml::Value;

/// Convert YAML text into pretty-printed S-expression text, using
/// [`DEFAULT_MAX_DEPTH`] as the nesting limit.
///
/// # Examples
///
/// ```
/// use sexpify_core::convert;
///
/// let sexp = convert("port: 8080").unwrap();
/// assert_eq!(sexp, "(\n  (port 8080)\n)");
/// ```
///
/// # Errors
///
/// Returns an error if the input is not well-formed YAML or nests deeper
/// than the default limit.
pub fn convert(yaml: &str) -> Result<String> {
    convert_with_limit(yaml, DEFAULT_MAX_DEPTH)
}

/// Convert YAML text with an explicit nesting limit.
///
/// Blank text, an explicit null document, an empty mapping, and an empty
/// sequence all produce the fixed text [`EMPTY_DOCUMENT`] rather than an
/// empty wrapper. Blank input short-circuits before the parser runs.
pub fn convert_with_limit(yaml: &str, max_depth: usize) -> Result<String> {
    if yaml.trim().is_empty() {
        return Ok(EMPTY_DOCUMENT.to_string());
    }
    let value: Value = serde_yaml::from_str(yaml)?;
    if is_empty_document(&value) {
        return Ok(EMPTY_DOCUMENT.to_string());
    }
    let nodes = to_sexp_with_limit(&value, max_depth)?;
    Ok(format_document(&nodes))
}

/// True for documents with nothing to render: an explicit null, an empty
/// mapping, or an empty sequence (looked at through `!tag` wrappers).
///
/// Scalar documents such as `0`, `false`, or `""` are real values, not empty.
pub fn is_empty_document(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Mapping(map) => map.is_empty(),
        Value::Sequence(items) => items.is_empty(),
        Value::Tagged(tagged) => is_empty_document(&tagged.value),
        Value::Bool(_) | Value::Number(_) | Value::String(_) => false,
    }
}
