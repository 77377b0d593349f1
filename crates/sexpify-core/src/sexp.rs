//! S-expression node types: the intermediate form between a parsed YAML
//! document and its rendered text.
//!
//! The structurer builds these bottom-up in a single pass; the formatter
//! consumes them and nothing outlives one conversion run.

use std::fmt;

/// A leaf value in S-expression output.
#[derive(Debug, Clone, PartialEq)]
pub enum Atom {
    /// YAML null, rendered as the bare token `nil`.
    Nil,
    /// Rendered as the lowercase literals `true` / `false`.
    Bool(bool),
    /// Keeps the parser's own representation: integers render bare, floats
    /// keep their decimal point (`1.0` stays `1.0`).
    Number(serde_yaml::Number),
    /// Rendered wrapped in double quotes. Embedded quotes are not escaped,
    /// so strings containing `"` produce ambiguous output — a documented
    /// limitation of the format.
    Str(String),
}

/// One node of the intermediate S-expression tree.
#[derive(Debug, Clone, PartialEq)]
pub enum Sexp {
    Atom(Atom),
    /// A tag with exactly one value: renders as `(tag value)` on a single
    /// line when the value is an atom.
    Pair(String, Box<Sexp>),
    /// A tag with any number of children, always rendered multi-line.
    List(String, Vec<Sexp>),
}

impl Sexp {
    /// Pair holding an atomic value.
    pub fn pair(tag: impl Into<String>, atom: Atom) -> Self {
        Sexp::Pair(tag.into(), Box::new(Sexp::Atom(atom)))
    }

    /// Tagged list with the given children.
    pub fn list(tag: impl Into<String>, children: Vec<Sexp>) -> Self {
        Sexp::List(tag.into(), children)
    }
}

impl fmt::Display for Atom {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Atom::Nil => f.write_str("nil"),
            Atom::Bool(b) => f.write_str(if *b { "true" } else { "false" }),
            Atom::Number(n) => write!(f, "{}", n),
            Atom::Str(s) => write!(f, "\"{}\"", s),
        }
    }
}
