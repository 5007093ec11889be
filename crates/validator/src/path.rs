//! Dotted field-path resolution over JSON data.
//!
//! `"user.address.zip"` walks object keys segment by segment. A segment that
//! meets an array is read as an index, so `"items.0.name"` reaches into the
//! first element.
//!
//! Any segment that cannot be followed (missing key, out-of-range index,
//! walking into a scalar) makes the whole path *absent*. Rules see that as
//! `None`, which is the same thing they see for a missing leaf.

use serde_json::Value;

/// Separator between path segments.
pub const SEPARATOR: char = '.';

/// Resolves `path` against `data`.
///
/// Returns `None` when any segment is missing. An explicit JSON `null` at the
/// end of the path is returned as `Some(&Value::Null)`.
///
/// # Examples
///
/// ```
/// use serde_json::json;
/// use verdict_validator::path::get_nested_value;
///
/// let data = json!({"a": {"b": {"c": 5}}});
/// assert_eq!(get_nested_value(&data, "a.b.c"), Some(&json!(5)));
/// assert_eq!(get_nested_value(&data, "a.x.c"), None);
/// ```
#[must_use]
pub fn get_nested_value<'a>(data: &'a Value, path: &str) -> Option<&'a Value> {
    path.split(SEPARATOR)
        .try_fold(data, |current, segment| step(current, segment))
}

/// Shorthand for [`get_nested_value`] used throughout the crate.
#[inline]
#[must_use]
pub fn resolve<'a>(data: &'a Value, path: &str) -> Option<&'a Value> {
    get_nested_value(data, path)
}

fn step<'a>(current: &'a Value, segment: &str) -> Option<&'a Value> {
    match current {
        Value::Object(map) => map.get(segment),
        Value::Array(items) => segment.parse::<usize>().ok().and_then(|i| items.get(i)),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;
    use serde_json::json;

    #[test]
    fn test_nested_lookup() {
        let data = json!({"a": {"b": {"c": 5}}});
        assert_eq!(get_nested_value(&data, "a.b.c"), Some(&json!(5)));
        assert_eq!(get_nested_value(&data, "a.b"), Some(&json!({"c": 5})));
    }

    #[test]
    fn test_top_level_key() {
        let data = json!({"name": "John"});
        assert_eq!(resolve(&data, "name"), Some(&json!("John")));
    }

    #[rstest]
    #[case::missing_leaf("a.b.z")]
    #[case::missing_intermediate("a.x.c")]
    #[case::through_scalar("a.b.c.d")]
    #[case::through_null("n.x")]
    #[case::empty_path("")]
    fn test_absent_paths(#[case] path: &str) {
        let data = json!({"a": {"b": {"c": 5}}, "n": null});
        assert_eq!(get_nested_value(&data, path), None);
    }

    #[test]
    fn test_explicit_null_is_present() {
        let data = json!({"a": {"b": null}});
        assert_eq!(get_nested_value(&data, "a.b"), Some(&Value::Null));
    }

    #[test]
    fn test_array_index_segments() {
        let data = json!({"items": [{"name": "first"}, {"name": "second"}]});
        assert_eq!(
            get_nested_value(&data, "items.1.name"),
            Some(&json!("second"))
        );
        assert_eq!(get_nested_value(&data, "items.2.name"), None);
        assert_eq!(get_nested_value(&data, "items.first"), None);
    }

    #[test]
    fn test_dotted_key_is_not_a_single_segment() {
        let data = json!({"user.name": "flat"});
        assert_eq!(get_nested_value(&data, "user.name"), None);
    }
}
