//! Errors raised while parsing or reconciling a configuration document.
//!
//! None of these escape the plugin: the loader in `ess-plugin` catches every
//! one of them and falls back to the default configuration.  A missing
//! document is not an error and has no variant here; semantic problems are
//! reported as [`crate::Violation`]s instead.

use thiserror::Error;

use super::fields::FieldKind;

#[derive(Debug, Error)]
pub enum ConfigError {
    /// The document text is not valid JSON.
    #[error("failed to parse config JSON: {0}")]
    Parse(#[source] serde_json::Error),

    /// The document is valid JSON but its top level is not an object.
    #[error("config document must be a JSON object, got {0}")]
    NotAnObject(&'static str),

    /// A stored value cannot be read as the type the schema expects.
    #[error("invalid value for {field} (expected {expected}): {source}")]
    TypeMismatch {
        field: String,
        expected: FieldKind,
        #[source]
        source: serde_json::Error,
    },

    /// The in-memory record could not be serialized.
    #[error("failed to serialize config: {0}")]
    Serialize(#[source] serde_json::Error),
}

// ── Tests ─────────────────────────────────────────────────────────────────────
