//! Point migrations for fields that were renamed or moved.
//!
//! Generic reconciliation only matches top-level names, so a leaf renamed
//! inside a settings group would silently reset to its default.  Each
//! [`MigrationRule`] copies the old value to the new path before generic
//! reconciliation runs.  Rules run in declaration order.

use serde_json::{Map, Value};
use tracing::debug;

use super::error::ConfigError;
use super::fields::FieldKind;
use super::lenient;

/// A single old-path → new-path rewrite.
#[derive(Debug, Clone, Copy)]
pub struct MigrationRule {
    /// Object keys from the document root to the old leaf.
    pub from: &'static [&'static str],
    /// Object keys from the document root to the new leaf.
    pub to: &'static [&'static str],
    /// Kind of the target leaf, reported on a failed transform.
    pub kind: FieldKind,
    /// Converts the old value into the shape expected at `to`.
    pub transform: fn(Value) -> Result<Value, serde_json::Error>,
}

/// Every rule the loader applies, oldest rename first.
pub const MIGRATION_RULES: &[MigrationRule] = &[MigrationRule {
    from: &["HomeCommand", "CancelWhenMove"],
    to: &["HomeCommand", "CancelTeleportWhenMove"],
    kind: FieldKind::Bool,
    transform: expect_bool,
}];

fn expect_bool(value: Value) -> Result<Value, serde_json::Error> {
    lenient::boolean(value).map(Value::Bool)
}

impl MigrationRule {
    /// Dotted form of the old path, e.g. `HomeCommand.CancelWhenMove`.
    pub fn from_path(&self) -> String {
        self.from.join(".")
    }

    /// Dotted form of the new path.
    pub fn to_path(&self) -> String {
        self.to.join(".")
    }

    /// Applies the rule to `document` in place.
    ///
    /// Returns `Ok(true)` when the value was copied, `Ok(false)` when the old
    /// path is absent or the new path already exists.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::TypeMismatch`] when the transform rejects the
    /// old value.
    pub fn apply(&self, document: &mut Map<String, Value>) -> Result<bool, ConfigError> {
        let Some(old) = lookup(document, self.from) else {
            return Ok(false);
        };
        if lookup(document, self.to).is_some() {
            return Ok(false);
        }

        let migrated = (self.transform)(old.clone()).map_err(|source| ConfigError::TypeMismatch {
            field: self.to_path(),
            expected: self.kind,
            source,
        })?;

        if !insert(document, self.to, migrated) {
            return Ok(false);
        }
        debug!("migrated {} -> {}", self.from_path(), self.to_path());
        Ok(true)
    }
}

/// Follows `path` through nested objects.  Explicit `null` counts as absent.
fn lookup<'a>(document: &'a Map<String, Value>, path: &[&str]) -> Option<&'a Value> {
    let (last, parents) = path.split_last()?;
    let mut current = document;
    for key in parents {
        current = current.get(*key)?.as_object()?;
    }
    current.get(*last).filter(|value| !value.is_null())
}

/// Writes `value` at `path`, creating missing intermediate objects.
///
/// Returns `false` without writing if an intermediate value exists but is not
/// an object; generic reconciliation reports that case as a type mismatch.
fn insert(document: &mut Map<String, Value>, path: &[&str], value: Value) -> bool {
    let Some((last, parents)) = path.split_last() else {
        return false;
    };
    let mut current = document;
    for key in parents {
        let entry = current
            .entry((*key).to_string())
            .or_insert_with(|| Value::Object(Map::new()));
        match entry.as_object_mut() {
            Some(object) => current = object,
            None => return false,
        }
    }
    current.insert((*last).to_string(), value);
    true
}

// ── Tests ─────────────────────────────────────────────────────────────────────
