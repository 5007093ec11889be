//! Field-path to rule-string mapping for one validation run.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::parser::RuleSpec;

/// Ordered mapping of field path to rule string.
///
/// Fields are validated, and reported, in insertion order.
///
/// ```
/// use verdict_validator::RuleSet;
///
/// let rules = RuleSet::from([
///     ("user.name", "required"),
///     ("user.password", "required|min:8"),
/// ]);
/// assert_eq!(rules.fields().collect::<Vec<_>>(), ["user.name", "user.password"]);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RuleSet {
    rules: IndexMap<String, String>,
}

impl RuleSet {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the rule string for `field`. A field that is already present
    /// keeps its position.
    pub fn insert(&mut self, field: impl Into<String>, rules: impl Into<String>) -> Option<String> {
        self.rules.insert(field.into(), rules.into())
    }

    /// Builder-style [`insert`](Self::insert).
    #[must_use]
    pub fn rule(mut self, field: impl Into<String>, rules: impl Into<String>) -> Self {
        self.insert(field, rules);
        self
    }

    #[must_use]
    pub fn get(&self, field: &str) -> Option<&str> {
        self.rules.get(field).map(String::as_str)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    pub fn fields(&self) -> impl Iterator<Item = &str> {
        self.rules.keys().map(String::as_str)
    }

    /// `(field, rule string)` pairs in order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.rules
            .iter()
            .map(|(field, rules)| (field.as_str(), rules.as_str()))
    }

    /// `(field, parsed spec)` pairs in order.
    pub fn parsed(&self) -> impl Iterator<Item = (&str, RuleSpec)> {
        self.iter().map(|(field, rules)| (field, RuleSpec::parse(rules)))
    }
}

impl<K, V> FromIterator<(K, V)> for RuleSet
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            rules: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

impl<K, V, const N: usize> From<[(K, V); N]> for RuleSet
where
    K: Into<String>,
    V: Into<String>,
{
    fn from(entries: [(K, V); N]) -> Self {
        entries.into_iter().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insertion_order() {
        let rules = RuleSet::new()
            .rule("zeta", "required")
            .rule("alpha", "email")
            .rule("mid", "min:1");
        assert_eq!(rules.fields().collect::<Vec<_>>(), ["zeta", "alpha", "mid"]);
    }

    #[test]
    fn test_reinsert_keeps_position() {
        let mut rules = RuleSet::from([("a", "required"), ("b", "email")]);
        assert_eq!(rules.insert("a", "min:2"), Some("required".into()));
        assert_eq!(rules.fields().collect::<Vec<_>>(), ["a", "b"]);
        assert_eq!(rules.get("a"), Some("min:2"));
    }

    #[test]
    fn test_deserialize_preserves_json_order() {
        let rules: RuleSet =
            serde_json::from_str(r#"{"z": "required", "a": "email", "m": "min:3"}"#).unwrap();
        assert_eq!(rules.fields().collect::<Vec<_>>(), ["z", "a", "m"]);
    }

    #[test]
    fn test_parsed() {
        let rules = RuleSet::from([("user.password", "required|min:8")]);
        let (field, spec) = rules.parsed().next().unwrap();
        assert_eq!(field, "user.password");
        assert_eq!(spec.len(), 2);
    }
}
