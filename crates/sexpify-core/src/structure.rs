//! Structurer — converts a parsed YAML value tree into S-expression nodes.
//!
//! The walk is a single recursive pass implementing three rules:
//!
//! - **Mapping entries**: each `(key, value)` entry becomes one construct, in
//!   document order — a single-line pair for scalar values, a tagged list of
//!   sub-entries for mapping values.
//! - **Pluralized sequences**: a key holding a sequence becomes a tagged list
//!   under the original key whose children each repeat the key with its
//!   trailing `s` stripped (`users` wraps every element as `user`).
//! - **Splicing**: mappings and bare sequences never introduce a construct of
//!   their own; their entries/items become siblings in the enclosing child
//!   list (or top-level siblings at the document root).
//!
//! Nesting is bounded by an explicit budget so adversarial documents fail
//! with [`SexpifyError::TooDeep`] instead of exhausting the call stack.

use crate::error::{Result, SexpifyError};
use crate::sexp::{Atom, Sexp};
use serde_yaml::{Mapping, Value};

/// Container nesting levels accepted before conversion aborts, unless a
/// caller supplies its own limit.
pub const DEFAULT_MAX_DEPTH: usize = 128;

/// Strip a trailing `s` (or `S`) from a word.
///
/// The rule is deliberately naive: any word ending in `s` loses its final
/// character, so already-singular words like "status" come out as "statu",
/// and `"s"` comes out empty. Words not ending in `s` are returned unchanged.
/// There is no exception dictionary; irregular plurals are not handled.
pub fn singularize(word: &str) -> &str {
    word.strip_suffix(['s', 'S']).unwrap_or(word)
}

/// Convert a YAML value tree into the ordered list of top-level S-expression
/// nodes, using [`DEFAULT_MAX_DEPTH`] as the nesting limit.
pub fn to_sexp(value: &Value) -> Result<Vec<Sexp>> {
    to_sexp_with_limit(value, DEFAULT_MAX_DEPTH)
}

/// Convert a YAML value tree into the ordered list of top-level S-expression
/// nodes.
///
/// A mapping contributes one node per entry, a sequence one node per item
/// (spliced, untagged), and a scalar a single atom. `max_depth` bounds how
/// many container levels (mappings and sequences) may nest on any path before
/// the walk aborts with [`SexpifyError::TooDeep`].
pub fn to_sexp_with_limit(value: &Value, max_depth: usize) -> Result<Vec<Sexp>> {
    nodes_for(value, max_depth, max_depth)
}

/// Sibling nodes for one value: containers expand to one node per
/// entry/item, scalars produce a single atom.
fn nodes_for(value: &Value, remaining: usize, limit: usize) -> Result<Vec<Sexp>> {
    match untag(value) {
        Value::Mapping(map) => {
            let inner = descend(remaining, limit)?;
            map_entries(map, inner, limit)
        }
        Value::Sequence(items) => {
            let inner = descend(remaining, limit)?;
            seq_nodes(items, inner, limit)
        }
        scalar => Ok(vec![Sexp::Atom(scalar_atom(scalar))]),
    }
}

/// One construct per mapping entry, preserving document key order.
fn map_entries(map: &Mapping, remaining: usize, limit: usize) -> Result<Vec<Sexp>> {
    map.iter()
        .map(|(key, value)| map_entry(key, value, remaining, limit))
        .collect()
}

/// Build the construct for a single mapping entry:
///
/// - sequence value → tagged list under the original key, each item wrapped
///   under the singularized key
/// - mapping value → tagged list whose children are the sub-entries
/// - scalar value → single-line `(key value)` pair
fn map_entry(key: &Value, value: &Value, remaining: usize, limit: usize) -> Result<Sexp> {
    let tag = tag_of(key);
    match untag(value) {
        Value::Sequence(items) => {
            let inner = descend(remaining, limit)?;
            let singular = singularize(&tag);
            let children = items
                .iter()
                .map(|item| tagged_item(singular, item, inner, limit))
                .collect::<Result<Vec<_>>>()?;
            Ok(Sexp::List(tag, children))
        }
        Value::Mapping(map) => {
            let inner = descend(remaining, limit)?;
            Ok(Sexp::List(tag, map_entries(map, inner, limit)?))
        }
        scalar => Ok(Sexp::pair(tag, scalar_atom(scalar))),
    }
}

/// Wrap one sequence item under its singular tag: scalar items become pairs,
/// container items become tagged lists holding the item's own nodes.
fn tagged_item(tag: &str, item: &Value, remaining: usize, limit: usize) -> Result<Sexp> {
    match untag(item) {
        Value::Mapping(map) => {
            let inner = descend(remaining, limit)?;
            Ok(Sexp::List(tag.to_string(), map_entries(map, inner, limit)?))
        }
        Value::Sequence(items) => {
            let inner = descend(remaining, limit)?;
            Ok(Sexp::List(tag.to_string(), seq_nodes(items, inner, limit)?))
        }
        scalar => Ok(Sexp::pair(tag, scalar_atom(scalar))),
    }
}

/// Nodes for sequence items outside the mapping-key rule: items are
/// structured in order with no tagging applied and spliced as siblings.
fn seq_nodes(items: &[Value], remaining: usize, limit: usize) -> Result<Vec<Sexp>> {
    let mut nodes = Vec::new();
    for item in items {
        nodes.extend(nodes_for(item, remaining, limit)?);
    }
    Ok(nodes)
}

/// Consume one unit of nesting budget, failing once the document nests
/// deeper than the configured limit.
fn descend(remaining: usize, limit: usize) -> Result<usize> {
    if remaining == 0 {
        return Err(SexpifyError::TooDeep { max_depth: limit });
    }
    Ok(remaining - 1)
}

/// Atom for a scalar value. Strings are wrapped in double quotes with no
/// escaping applied, so an embedded `"` passes through verbatim. Numbers and
/// booleans keep their parsed representation.
fn scalar_atom(value: &Value) -> Atom {
    match value {
        Value::Null => Atom::Nil,
        Value::Bool(b) => Atom::Bool(*b),
        Value::Number(n) => Atom::Number(n.clone()),
        Value::String(s) => Atom::Str(s.clone()),
        // Containers never reach scalar position; callers dispatch them first.
        Value::Sequence(_) | Value::Mapping(_) | Value::Tagged(_) => Atom::Nil,
    }
}

/// Tag text for a mapping key. YAML permits non-string keys: scalar keys use
/// their literal text, container keys fall back to `?` (YAML's complex-key
/// indicator) so the walk stays total.
fn tag_of(key: &Value) -> String {
    match untag(key) {
        Value::String(s) => s.clone(),
        Value::Bool(b) => if *b { "true" } else { "false" }.to_string(),
        Value::Number(n) => n.to_string(),
        Value::Null => "nil".to_string(),
        Value::Sequence(_) | Value::Mapping(_) | Value::Tagged(_) => "?".to_string(),
    }
}

/// Look through `!tag` wrappers; YAML tags carry no structure of their own.
fn untag(value: &Value) -> &Value {
    match value {
        Value::Tagged(tagged) => untag(&tagged.value),
        other => other,
    }
}
