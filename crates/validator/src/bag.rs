//! Per-field failure messages from one validation run.

use std::fmt;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Ordered map of field path to failure messages.
///
/// A field is present iff at least one of its rules failed. Fields appear in
/// the order they were first recorded, which is rule-set order; messages
/// appear in rule evaluation order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ErrorBag {
    errors: IndexMap<String, Vec<String>>,
}

impl ErrorBag {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a message for `field`, creating its entry on first use.
    pub fn add(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.errors
            .entry(field.into())
            .or_default()
            .push(message.into());
    }

    pub(crate) fn clear(&mut self) {
        self.errors.clear();
    }

    /// Returns true if no field failed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    /// Number of failed fields.
    #[must_use]
    pub fn len(&self) -> usize {
        self.errors.len()
    }

    /// Total number of messages across all fields.
    #[must_use]
    pub fn message_count(&self) -> usize {
        self.errors.values().map(Vec::len).sum()
    }

    /// Messages recorded for `field`.
    #[must_use]
    pub fn get(&self, field: &str) -> Option<&[String]> {
        self.errors.get(field).map(Vec::as_slice)
    }

    /// First message recorded for `field`.
    #[must_use]
    pub fn first(&self, field: &str) -> Option<&str> {
        self.get(field)
            .and_then(<[String]>::first)
            .map(String::as_str)
    }

    #[must_use]
    pub fn contains(&self, field: &str) -> bool {
        self.errors.contains_key(field)
    }

    /// Failed fields in recording order.
    pub fn fields(&self) -> impl Iterator<Item = &str> {
        self.errors.keys().map(String::as_str)
    }

    /// `(field, messages)` pairs in recording order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.errors
            .iter()
            .map(|(field, messages)| (field.as_str(), messages.as_slice()))
    }

    /// Consumes the bag, returning the underlying ordered map.
    #[must_use]
    pub fn into_inner(self) -> IndexMap<String, Vec<String>> {
        self.errors
    }
}

impl fmt::Display for ErrorBag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (field, messages) in self.iter() {
            for message in messages {
                writeln!(f, "{field}: {message}")?;
            }
        }
        Ok(())
    }
}
