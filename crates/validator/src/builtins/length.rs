//! Length rules: `min` and `max`.
//!
//! Strings are measured in Unicode scalar values, arrays in elements.
//! Anything else (absent, null, numbers, booleans, objects) has no length
//! and fails both rules.

use serde_json::Value;

/// Length of a value, if it has one.
#[must_use]
pub fn measure(value: &Value) -> Option<usize> {
    match value {
        Value::String(s) => Some(s.chars().count()),
        Value::Array(items) => Some(items.len()),
        _ => None,
    }
}

/// `min`: length is at least `min`.
#[must_use]
pub fn min(value: Option<&Value>, min: usize) -> bool {
    value.and_then(measure).is_some_and(|len| len >= min)
}

/// `max`: length is at most `max`.
#[must_use]
pub fn max(value: Option<&Value>, max: usize) -> bool {
    value.and_then(measure).is_some_and(|len| len <= max)
}
