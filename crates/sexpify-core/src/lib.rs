//! # sexpify-core
//!
//! Convert YAML documents into pretty-printed **S-expressions**.
//!
//! The conversion runs in two pure stages. The *structurer* walks the parsed
//! YAML value tree and produces an intermediate tree of [`Sexp`] nodes: every
//! mapping key becomes a tag, and a key holding a sequence becomes a tagged
//! list whose children repeat the key with its trailing `s` stripped (`users`
//! wraps each element as `user`). The *formatter* renders that tree with
//! two-space indentation, keeping `(tag atom)` pairs on a single line and
//! breaking everything else across lines.
//!
//! ## Quick start
//!
//! ```rust
//! use sexpify_core::convert;
//!
//! let yaml = "name: Alice\ntags:\n  - a\n  - b\n";
//! let sexp = convert(yaml).unwrap();
//! assert_eq!(
//!     sexp,
//!     "(\n  (name \"Alice\")\n  (tags\n    (tag \"a\")\n    (tag \"b\")\n  )\n)"
//! );
//! ```
//!
//! ## Modules
//!
//! - [`structure`] — YAML value tree → [`Sexp`] nodes (pluralized-key rule,
//!   nesting guard)
//! - [`format`] — [`Sexp`] nodes → indented text
//! - [`convert`] — one-shot pipeline, YAML text → S-expression text
//! - [`error`] — error types for parse and nesting-limit failures
//! - [`sexp`] — the [`Atom`] and [`Sexp`] node types

pub mod convert;
pub mod error;
pub mod format;
pub mod sexp;
pub mod structure;

pub use convert::{convert, convert_with_limit, is_empty_document};
pub use error::{Result, SexpifyError};
pub use format::{format_document, format_node, EMPTY_DOCUMENT};
pub use sexp::{Atom, Sexp};
pub use structure::{singularize, to_sexp, to_sexp_with_limit, DEFAULT_MAX_DEPTH};
