//! `sexpify` CLI — convert YAML files to pretty-printed S-expressions.
//!
//! ## Usage
//!
//! ```sh
//! # Convert a YAML file and print the result
//! sexpify config.yaml
//!
//! # Convert into a file
//! sexpify config.yaml config.sexp
//!
//! # Tighten the nesting guard for untrusted input
//! sexpify --max-depth 16 config.yaml
//! ```
//!
//! Errors (unreadable input, malformed YAML, unwritable output, nesting
//! overflow) go to stderr with exit code 1. An empty or all-null document is
//! not an error: it converts to `(nil)` with a warning on stderr.

use anyhow::{Context, Result};
use clap::Parser;
use sexpify_core::{
    format_document, is_empty_document, to_sexp_with_limit, DEFAULT_MAX_DEPTH, EMPTY_DOCUMENT,
};

#[derive(Parser)]
#[command(
    name = "sexpify",
    version,
    about = "Convert a YAML file to an S-expression",
    after_help = "If no output file is specified, the result is printed to standard output."
)]
struct Cli {
    /// Path to the source YAML file
    input: String,

    /// Path to the output S-expression file (prints to stdout if omitted)
    output: Option<String>,

    /// Maximum container nesting depth accepted before conversion aborts
    #[arg(long, default_value_t = DEFAULT_MAX_DEPTH)]
    max_depth: usize,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let text = std::fs::read_to_string(&cli.input)
        .with_context(|| format!("Failed to read input file: {}", cli.input))?;

    let sexp = render(&text, &cli)?;

    match cli.output.as_deref() {
        Some(path) => {
            std::fs::write(path, format!("{}\n", sexp))
                .with_context(|| format!("Failed to write output file: {}", path))?;
            println!("Successfully converted '{}' to '{}'", cli.input, path);
        }
        None => println!("{}", sexp),
    }

    Ok(())
}

/// Produce the S-expression text for the raw input, applying the
/// empty-document rule before the parser and transform run.
fn render(text: &str, cli: &Cli) -> Result<String> {
    if text.trim().is_empty() {
        warn_empty();
        return Ok(EMPTY_DOCUMENT.to_string());
    }

    let value: serde_yaml::Value = serde_yaml::from_str(text)
        .with_context(|| format!("Failed to parse YAML file: {}", cli.input))?;

    if is_empty_document(&value) {
        warn_empty();
        return Ok(EMPTY_DOCUMENT.to_string());
    }

    let nodes = to_sexp_with_limit(&value, cli.max_depth)
        .with_context(|| format!("Failed to convert YAML file: {}", cli.input))?;
    Ok(format_document(&nodes))
}

/// Empty and all-null documents still succeed; the fixed `(nil)` output is
/// paired with a warning on the diagnostic stream.
fn warn_empty() {
    eprintln!("Warning: input YAML file is empty or contains only null values");
}
