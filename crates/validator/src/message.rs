//! Failure messages.
//!
//! A [`MessageTable`] maps message keys to display strings. For a failed
//! rule the key `"<field>.<rule>"` is tried first, then `"<rule>"`; if
//! neither is present the default `"The <field> field is invalid."` is used.
//!
//! Chosen messages may carry placeholders:
//!
//! | Placeholder | Replaced with |
//! |---|---|
//! | `:field` | the field path |
//! | `:<name>` | the parameter the rule declares under `name` (`:min` for `min`) |
//! | `:1`, `:2`, ... | positional parameters |
//!
//! Unknown placeholders are left as written.

use std::borrow::Cow;
use std::collections::HashMap;
use std::sync::LazyLock;

use serde::{Deserialize, Serialize};

static PLACEHOLDER_REGEX: LazyLock<regex::Regex> =
    LazyLock::new(|| regex::Regex::new(r":([A-Za-z0-9_]+)").unwrap());

/// Builds the message used when no table entry matches.
#[must_use]
pub fn default_message(field: &str) -> String {
    format!("The {field} field is invalid.")
}

/// Context for resolving one failure message.
#[derive(Debug, Clone, Copy)]
pub struct MessageContext<'a> {
    pub field: &'a str,
    pub rule: &'a str,
    pub params: &'a [String],
    pub param_names: &'a [&'a str],
}

impl MessageContext<'_> {
    fn lookup(&self, placeholder: &str) -> Option<&str> {
        if placeholder == "field" {
            return Some(self.field);
        }
        if let Some(i) = self.param_names.iter().position(|name| *name == placeholder) {
            return self.params.get(i).map(String::as_str);
        }
        placeholder
            .parse::<usize>()
            .ok()
            .and_then(|n| n.checked_sub(1))
            .and_then(|i| self.params.get(i))
            .map(String::as_str)
    }

    /// Substitutes placeholders in `template`.
    #[must_use]
    pub fn render<'t>(&self, template: &'t str) -> Cow<'t, str> {
        PLACEHOLDER_REGEX.replace_all(template, |caps: &regex::Captures<'_>| {
            self.lookup(&caps[1])
                .map_or_else(|| caps[0].to_owned(), ToOwned::to_owned)
        })
    }
}

// ============================================================================
// MESSAGE TABLE
// ============================================================================

/// Message keys to display strings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MessageTable {
    messages: HashMap<String, String>,
}

impl MessageTable {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the message for `key`, returning the previous one.
    pub fn insert(&mut self, key: impl Into<String>, message: impl Into<String>) -> Option<String> {
        self.messages.insert(key.into(), message.into())
    }

    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.messages.get(key).map(String::as_str)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.messages.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    /// Returns the raw template for a failed rule, if the table has one.
    ///
    /// `"<field>.<rule>"` wins over `"<rule>"`.
    #[must_use]
    pub fn template(&self, field: &str, rule: &str) -> Option<&str> {
        self.get(&format!("{field}.{rule}"))
            .or_else(|| self.get(rule))
    }

    /// Resolves and renders the message for a failed rule.
    #[must_use]
    pub fn resolve(&self, ctx: &MessageContext<'_>) -> String {
        match self.template(ctx.field, ctx.rule) {
            Some(template) => ctx.render(template).into_owned(),
            None => default_message(ctx.field),
        }
    }
}

impl<K, V> FromIterator<(K, V)> for MessageTable
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            messages: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

impl<K, V, const N: usize> From<[(K, V); N]> for MessageTable
where
    K: Into<String>,
    V: Into<String>,
{
    fn from(entries: [(K, V); N]) -> Self {
        entries.into_iter().collect()
    }
}

impl<K, V> Extend<(K, V)> for MessageTable
where
    K: Into<String>,
    V: Into<String>,
{
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        self.messages
            .extend(iter.into_iter().map(|(k, v)| (k.into(), v.into())));
    }
}

impl IntoIterator for MessageTable {
    type Item = (String, String);
    type IntoIter = std::collections::hash_map::IntoIter<String, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.messages.into_iter()
    }
}
