//! Error types for YAML-to-S-expression conversion.

use thiserror::Error;

/// Errors that can occur while converting a YAML document.
#[derive(Error, Debug)]
pub enum SexpifyError {
    /// The input text was not well-formed YAML.
    #[error("YAML parse error: {0}")]
    YamlParse(#[from] serde_yaml::Error),

    /// Container nesting exceeded the configured guard.
    /// Carries the limit that was in effect when the walk aborted.
    #[error("document too deeply nested: more than {max_depth} levels")]
    TooDeep { max_depth: usize },
}

/// Convenience alias used throughout sexpify-core.
pub type Result<T> = std::result::Result<T, SexpifyError>;
