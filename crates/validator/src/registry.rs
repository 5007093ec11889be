//! Rule registry: custom rules plus the built-in vocabulary.
//!
//! Lookup order is custom first, then built-in. Registering a custom rule
//! under a built-in name therefore shadows the built-in.

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use crate::builtins::BuiltinRule;
use crate::error::RuleResult;
use crate::rule::{Rule, RuleCall};

// ============================================================================
// RULE REF
// ============================================================================

/// A resolved rule, ready to be invoked.
#[derive(Clone)]
pub enum RuleRef {
    /// One of the built-in rules.
    Builtin(BuiltinRule),
    /// A caller-supplied rule.
    Custom(Arc<dyn Rule>),
}

impl RuleRef {
    /// Invokes the rule. Built-ins complete immediately; custom rules are
    /// awaited.
    pub async fn check(&self, call: &RuleCall<'_>) -> RuleResult {
        match self {
            Self::Builtin(rule) => rule.evaluate(call),
            Self::Custom(rule) => rule.check(call).await,
        }
    }

    /// Names of the positional parameters, for message placeholders.
    #[must_use]
    pub fn param_names(&self) -> &[&str] {
        match self {
            Self::Builtin(rule) => rule.param_names(),
            Self::Custom(rule) => rule.param_names(),
        }
    }

    #[must_use]
    pub fn is_builtin(&self) -> bool {
        matches!(self, Self::Builtin(_))
    }
}

impl fmt::Debug for RuleRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Builtin(rule) => f.debug_tuple("Builtin").field(rule).finish(),
            Self::Custom(_) => f.debug_tuple("Custom").field(&"<rule>").finish(),
        }
    }
}

// ============================================================================
// RULE REGISTRY
// ============================================================================

/// Maps rule names to rules.
#[derive(Clone, Default)]
pub struct RuleRegistry {
    custom: HashMap<String, Arc<dyn Rule>>,
}

impl RuleRegistry {
    /// Creates a registry holding only the built-in rules.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `rule` under `name`, replacing any custom rule already
    /// there. Returns the replaced rule, if any.
    pub fn define(&mut self, name: impl Into<String>, rule: Arc<dyn Rule>) -> Option<Arc<dyn Rule>> {
        let name = name.into();
        if BuiltinRule::from_name(&name).is_some() {
            tracing::debug!(rule = %name, "custom rule shadows built-in");
        } else {
            tracing::debug!(rule = %name, "registered custom rule");
        }
        self.custom.insert(name, rule)
    }

    /// Removes a custom rule. Built-ins cannot be removed; a shadowed
    /// built-in becomes visible again.
    pub fn remove(&mut self, name: &str) -> Option<Arc<dyn Rule>> {
        self.custom.remove(name)
    }

    /// Resolves `name`: custom rules first, then built-ins.
    #[must_use]
    pub fn resolve(&self, name: &str) -> Option<RuleRef> {
        self.custom
            .get(name)
            .map(|rule| RuleRef::Custom(Arc::clone(rule)))
            .or_else(|| BuiltinRule::from_name(name).map(RuleRef::Builtin))
    }

    /// Returns true if `name` resolves to any rule.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.custom.contains_key(name) || BuiltinRule::from_name(name).is_some()
    }

    /// Names of all custom rules, sorted.
    #[must_use]
    pub fn custom_names(&self) -> Vec<&str> {
        let mut names: Vec<_> = self.custom.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }
}

impl fmt::Debug for RuleRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RuleRegistry")
            .field("custom", &self.custom_names())
            .finish()
    }
}
