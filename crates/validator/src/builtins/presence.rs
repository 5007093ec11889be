//! Presence rule.

use serde_json::Value;

/// `required`: fails on an absent path, `null`, or an empty string.
///
/// Empty arrays and objects count as present.
#[must_use]
pub fn required(value: Option<&Value>) -> bool {
    match value {
        None | Some(Value::Null) => false,
        Some(Value::String(s)) => !s.is_empty(),
        Some(_) => true,
    }
}
