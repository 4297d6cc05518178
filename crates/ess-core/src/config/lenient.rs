//! Forgiving decoders for configuration leaves.
//!
//! Documents are edited by hand, and the plugin's older releases wrote them
//! with a JSON library that coerces scalars.  These decoders accept the same
//! spellings so that an edit like `"Cooldown": 30.0` or
//! `"ItemSpawnLimit": "25"` does not throw the whole configuration away:
//!
//! | Target  | Accepted                                                    |
//! |---------|-------------------------------------------------------------|
//! | integer | integers, floats with no fractional part, numeric strings  |
//! | boolean | booleans, `"true"`/`"false"` (any case), integer numbers   |
//! | group   | JSON objects only                                          |
//!
//! Anything else (`"fast"`, `30.5`, an object, an out-of-range number) is
//! still an error, which the migration engine reports as a type mismatch.
//!
//! Each function has the `deserialize_with` signature, and since
//! [`serde_json::Value`] is itself a deserializer it can be called directly
//! on a value.

use std::any::type_name;

use serde::de::Error as _;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Decodes an integer of any width, range-checked against `T`.
pub fn int<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: TryFrom<i64>,
{
    let value = Value::deserialize(deserializer)?;
    coerce_int(&value)
        .and_then(|n| T::try_from(n).ok())
        .ok_or_else(|| D::Error::custom(mismatch(&value, type_name::<T>())))
}

/// Decodes a list of integers, coercing each element like [`int`].
pub fn int_list<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: TryFrom<i64>,
{
    let value = Value::deserialize(deserializer)?;
    let Value::Array(items) = &value else {
        return Err(D::Error::custom(mismatch(&value, "a list")));
    };
    items
        .iter()
        .map(|item| {
            coerce_int(item)
                .and_then(|n| T::try_from(n).ok())
                .ok_or_else(|| D::Error::custom(mismatch(item, type_name::<T>())))
        })
        .collect()
}

/// Decodes a boolean.
pub fn boolean<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    coerce_bool(&value).ok_or_else(|| D::Error::custom(mismatch(&value, "bool")))
}

/// Decodes a settings group, which must be a JSON object.
///
/// Derived struct decoding would otherwise accept a positional array.
pub fn group<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let value = Value::deserialize(deserializer)?;
    if !value.is_object() {
        return Err(D::Error::custom(mismatch(&value, "a settings object")));
    }
    T::deserialize(value).map_err(D::Error::custom)
}

fn coerce_int(value: &Value) -> Option<i64> {
    match value {
        Value::Number(n) => n.as_i64().or_else(|| n.as_f64().and_then(integral)),
        Value::String(s) => {
            let s = s.trim();
            s.parse::<i64>()
                .ok()
                .or_else(|| s.parse::<f64>().ok().and_then(integral))
        }
        _ => None,
    }
}

/// `Some` only for finite floats without a fractional part that fit `i64`.
fn integral(f: f64) -> Option<i64> {
    // i64::MAX is not exactly representable; 2^63 is the first float past it.
    const LIMIT: f64 = 9_223_372_036_854_775_808.0;
    (f.is_finite() && f.fract() == 0.0 && f >= -LIMIT && f < LIMIT).then(|| f as i64)
}

fn coerce_bool(value: &Value) -> Option<bool> {
    match value {
        Value::Bool(b) => Some(*b),
        Value::String(s) => match s.trim().to_ascii_lowercase().as_str() {
            "true" => Some(true),
            "false" => Some(false),
            _ => None,
        },
        Value::Number(n) => n.as_i64().map(|n| n != 0),
        _ => None,
    }
}

fn mismatch(value: &Value, expected: &str) -> String {
    let found = match value {
        Value::Null => "null".to_string(),
        Value::Bool(b) => format!("boolean `{b}`"),
        Value::Number(n) => format!("number `{n}`"),
        Value::String(s) => format!("string {s:?}"),
        Value::Array(_) => "list".to_string(),
        Value::Object(_) => "object".to_string(),
    };
    format!("invalid type: {found}, expected {expected}")
}

// ── Tests ─────────────────────────────────────────────────────────────────────
