//! Reconciles a persisted document with the current schema.
//!
//! # Algorithm
//!
//! 1. Apply every [`MIGRATION_RULES`] entry to a copy of the document, so the
//!    rest of the engine only sees current-shaped data.
//! 2. `needs_update` = number of schema fields != number of top-level keys.
//!    This only notices added or removed top-level fields.  A field whose type
//!    changed, or a swap of one unknown key for one missing field, keeps the
//!    count equal and does not trigger a rewrite.
//! 3. Start from [`EssConfig::default`] and overwrite every field whose name is
//!    present in the document.  Unknown keys are dropped; fields missing from
//!    the document keep their default.
//!
//! The caller persists [`Migration::config`] only when
//! [`Migration::requires_rewrite`] is `true`.

use serde_json::{Map, Value};
use tracing::{debug, info};

use super::error::ConfigError;
use super::fields::fields;
use super::rules::MIGRATION_RULES;
use super::schema::EssConfig;

/// Raw on-disk representation: field name to JSON value.
pub type ConfigDocument = Map<String, Value>;

/// Result of reconciling one document.
#[derive(Debug, Clone, PartialEq)]
pub struct Migration {
    /// The fully populated record.
    pub config: EssConfig,
    /// `old -> new` description of every rule that fired.
    pub applied_rules: Vec<String>,
    /// Top-level field count differs from the document's key count.
    pub needs_update: bool,
    /// Document keys that are not part of the schema.
    pub dropped_keys: Vec<String>,
    /// Schema fields absent from the document (now holding defaults).
    pub missing_fields: Vec<&'static str>,
}

impl Migration {
    /// Whether the document on disk no longer matches [`Self::config`] closely
    /// enough and must be rewritten.
    pub fn requires_rewrite(&self) -> bool {
        self.needs_update || !self.applied_rules.is_empty()
    }
}

/// Parses document text into a top-level JSON object.
///
/// # Errors
///
/// [`ConfigError::Parse`] for malformed JSON, [`ConfigError::NotAnObject`]
/// when the top-level value is an array, string, number, boolean or null.
pub fn parse_document(text: &str) -> Result<ConfigDocument, ConfigError> {
    let value: Value = serde_json::from_str(text).map_err(ConfigError::Parse)?;
    match value {
        Value::Object(map) => Ok(map),
        Value::Array(_) => Err(ConfigError::NotAnObject("array")),
        Value::String(_) => Err(ConfigError::NotAnObject("string")),
        Value::Number(_) => Err(ConfigError::NotAnObject("number")),
        Value::Bool(_) => Err(ConfigError::NotAnObject("boolean")),
        Value::Null => Err(ConfigError::NotAnObject("null")),
    }
}

/// Builds a current [`EssConfig`] from `document`.
///
/// The input is not modified.
///
/// # Errors
///
/// [`ConfigError::TypeMismatch`] if a rule transform or any present field
/// cannot be read as its schema type.  No partial result is returned.
pub fn migrate(document: &ConfigDocument) -> Result<Migration, ConfigError> {
    let mut document = document.clone();

    let mut applied_rules = Vec::new();
    for rule in MIGRATION_RULES {
        if rule.apply(&mut document)? {
            applied_rules.push(format!("{} -> {}", rule.from_path(), rule.to_path()));
        }
    }

    let table = fields();
    let needs_update = table.len() != document.len();

    let mut config = EssConfig::default();
    let mut missing_fields = Vec::new();
    for field in table {
        match document.get(field.name) {
            Some(Value::Null) | None => missing_fields.push(field.name),
            Some(value) => {
                (field.write)(&mut config, value.clone()).map_err(|source| {
                    ConfigError::TypeMismatch {
                        field: field.name.to_string(),
                        expected: field.kind,
                        source,
                    }
                })?;
            }
        }
    }

    let dropped_keys: Vec<String> = document
        .keys()
        .filter(|key| !table.iter().any(|field| field.name == key.as_str()))
        .cloned()
        .collect();

    if needs_update {
        info!(
            "config shape changed: {} new field(s), {} unrecognized key(s) dropped",
            missing_fields.len(),
            dropped_keys.len()
        );
    }
    debug!(
        ?applied_rules,
        ?missing_fields,
        ?dropped_keys,
        needs_update,
        "config migration complete"
    );

    Ok(Migration {
        config,
        applied_rules,
        needs_update,
        dropped_keys,
        missing_fields,
    })
}

// ── Tests ─────────────────────────────────────────────────────────────────────
