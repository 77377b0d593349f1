//! Formatter — renders S-expression nodes as indented text.
//!
//! Layout rules:
//!
//! - a pair holding an atom renders on a single line as `(tag value)`
//! - every other construct opens with `(tag`, renders each child on its own
//!   line two spaces deeper, and closes with `)` back at the construct's own
//!   indentation
//! - the document wraps its top-level constructs in one outer unlabeled pair
//!   of parentheses, always multi-line
//!
//! Depth is tracked explicitly as an integer parameter. Rendering is total:
//! any node tree formats without error, including childless lists and pairs
//! holding non-atom values.

use crate::sexp::Sexp;

/// Fixed output for an empty or all-null document.
pub const EMPTY_DOCUMENT: &str = "(nil)";

/// Render the top-level nodes inside the outer document wrapper: `(` on its
/// own line, each node indented one level, `)` on its own line at column 0.
///
/// The result carries no trailing newline; callers writing to a file or
/// stream append exactly one.
pub fn format_document(nodes: &[Sexp]) -> String {
    let mut out = String::new();
    out.push('(');
    for node in nodes {
        out.push('\n');
        out.push_str(&make_indent(1));
        write_node(node, 1, &mut out);
    }
    out.push('\n');
    out.push(')');
    out
}

/// Render a single node at the given indentation depth.
///
/// The first line carries no indentation (the caller places it);
/// continuation lines indent themselves relative to `depth`.
pub fn format_node(node: &Sexp, depth: usize) -> String {
    let mut out = String::new();
    write_node(node, depth, &mut out);
    out
}

fn write_node(node: &Sexp, depth: usize, out: &mut String) {
    match node {
        Sexp::Atom(atom) => out.push_str(&atom.to_string()),
        Sexp::Pair(tag, value) => match value.as_ref() {
            Sexp::Atom(atom) => {
                out.push('(');
                out.push_str(tag);
                out.push(' ');
                out.push_str(&atom.to_string());
                out.push(')');
            }
            // A pair whose value is itself a construct falls back to the
            // multi-line form with a single child line.
            nested => write_block(tag, std::slice::from_ref(nested), depth, out),
        },
        Sexp::List(tag, children) => write_block(tag, children, depth, out),
    }
}

/// Multi-line form: `(tag`, one line per child at depth + 1, then `)`
/// aligned with the construct's own depth.
fn write_block(tag: &str, children: &[Sexp], depth: usize, out: &mut String) {
    out.push('(');
    out.push_str(tag);
    for child in children {
        out.push('\n');
        out.push_str(&make_indent(depth + 1));
        write_node(child, depth + 1, out);
    }
    out.push('\n');
    out.push_str(&make_indent(depth));
    out.push(')');
}

/// Generate the indentation string for a given depth (two spaces per level).
fn make_indent(depth: usize) -> String {
    "  ".repeat(depth)
}
