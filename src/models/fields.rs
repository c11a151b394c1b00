//! Ordered candidate-field lookups over loosely typed JSON rows.
//!
//! Catalog rows come from more than one upstream schema, so the same concept
//! may live under different keys (`tier` vs `era`, `item` vs `reward`). Each
//! accessor names its candidates explicitly and takes the first one present.

use serde_json::{Map, Value};

/// Return the first candidate field that holds a usable value.
///
/// A value is usable when it is a non-empty string or a number. `null`,
/// empty strings, booleans, arrays and objects fall through to the next
/// candidate.
pub fn first_field<'a>(fields: &'a Map<String, Value>, candidates: &[&str]) -> Option<&'a Value> {
    candidates
        .iter()
        .filter_map(|key| fields.get(*key))
        .find(|value| is_usable(value))
}

/// Like [`first_field`], coerced to a display string.
///
/// Numbers are stringified as written in the source document.
pub fn first_text(fields: &Map<String, Value>, candidates: &[&str]) -> Option<String> {
    first_field(fields, candidates).and_then(value_text)
}

fn is_usable(value: &Value) -> bool {
    match value {
        Value::String(s) => !s.is_empty(),
        Value::Number(_) => true,
        _ => false,
    }
}

fn value_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

