//! The validation orchestrator.
//!
//! [`Validator`] owns the rule registry and the message table. A run walks
//! the rule set in order, evaluates every rule of every field (no
//! short-circuiting), and collects failures into an [`ErrorBag`].
//!
//! # Examples
//!
//! ```
//! use serde_json::json;
//! use verdict_validator::{RuleSet, Validator};
//!
//! let mut validator = Validator::builder()
//!     .message("user.password.min", "The password must be at least :min characters.")
//!     .build();
//!
//! let data = json!({"user": {"name": "John Doe", "password": "short"}});
//! let rules = RuleSet::from([("user.name", "required"), ("user.password", "required|min:8")]);
//!
//! let valid = validator.validate_blocking(&data, &rules).unwrap();
//! assert!(!valid);
//! assert_eq!(
//!     validator.errors().first("user.password"),
//!     Some("The password must be at least 8 characters.")
//! );
//! ```

use std::sync::Arc;

use serde::Deserialize;
use serde_json::Value;

use crate::bag::ErrorBag;
use crate::error::ValidatorError;
use crate::message::{MessageContext, MessageTable};
use crate::parser::RuleSpec;
use crate::registry::RuleRegistry;
use crate::rule::{Rule, RuleCall};
use crate::ruleset::RuleSet;

// ============================================================================
// CONFIGURATION
// ============================================================================

/// Serializable validator configuration.
///
/// Custom rules are code and cannot be deserialized; register them with
/// [`ValidatorBuilder::rule`] or [`Validator::define_rule`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ValidatorConfig {
    /// Message overrides, keyed by `"<field>.<rule>"` or `"<rule>"`.
    pub messages: MessageTable,
}

impl ValidatorConfig {
    /// Parses a configuration from JSON such as
    /// `{"messages": {"required": "This field is required."}}`.
    pub fn from_json_str(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

// ============================================================================
// VALIDATOR
// ============================================================================

/// Validates data objects against rule sets.
///
/// [`check`](Self::check) takes `&self` and returns a fresh [`ErrorBag`]
/// for each call, so a shared validator can serve concurrent runs.
/// [`validate`](Self::validate) additionally publishes the bag on the
/// instance, readable through [`errors`](Self::errors).
#[derive(Debug, Clone, Default)]
pub struct Validator {
    registry: RuleRegistry,
    messages: MessageTable,
    errors: ErrorBag,
}

impl Validator {
    /// Creates a validator with no custom rules and no messages.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a validator from a configuration.
    #[must_use]
    pub fn with_config(config: ValidatorConfig) -> Self {
        Self {
            messages: config.messages,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn builder() -> ValidatorBuilder {
        ValidatorBuilder::new()
    }

    /// Registers or replaces a custom rule. Custom rules take precedence
    /// over built-ins of the same name in subsequent runs.
    pub fn define_rule(&mut self, name: impl Into<String>, rule: impl Rule + 'static) {
        self.registry.define(name, Arc::new(rule));
    }

    /// Registers a rule that is already shared.
    pub fn define_shared_rule(&mut self, name: impl Into<String>, rule: Arc<dyn Rule>) {
        self.registry.define(name, rule);
    }

    /// Sets a message override.
    pub fn set_message(&mut self, key: impl Into<String>, message: impl Into<String>) {
        self.messages.insert(key, message);
    }

    #[must_use]
    pub fn registry(&self) -> &RuleRegistry {
        &self.registry
    }

    #[must_use]
    pub fn messages(&self) -> &MessageTable {
        &self.messages
    }

    /// Errors from the most recent [`validate`](Self::validate) call.
    #[must_use]
    pub fn errors(&self) -> &ErrorBag {
        &self.errors
    }

    /// Validates `data` and publishes the resulting errors.
    ///
    /// Returns `Ok(true)` when every rule passed. The published bag is
    /// cleared first; if the run aborts with an error it stays empty.
    pub async fn validate(&mut self, data: &Value, rules: &RuleSet) -> Result<bool, ValidatorError> {
        self.errors.clear();
        let errors = self.check(data, rules).await?;
        let valid = errors.is_empty();
        self.errors = errors;
        Ok(valid)
    }

    /// Validates `data` and returns the errors without touching the
    /// published bag.
    ///
    /// Fields are evaluated in rule-set order and rules in declaration
    /// order. Every rule runs, including after earlier failures. An unknown
    /// rule or a fatal rule error aborts the run immediately.
    pub async fn check(&self, data: &Value, rules: &RuleSet) -> Result<ErrorBag, ValidatorError> {
        let mut errors = ErrorBag::new();
        for (field, rule_string) in rules.iter() {
            let spec = RuleSpec::parse(rule_string);
            self.check_field(data, field, &spec, &mut errors).await?;
        }
        tracing::debug!(
            fields = rules.len(),
            failed = errors.len(),
            "validation finished"
        );
        Ok(errors)
    }

    async fn check_field(
        &self,
        data: &Value,
        field: &str,
        spec: &RuleSpec,
        errors: &mut ErrorBag,
    ) -> Result<(), ValidatorError> {
        for invocation in spec {
            let rule = self.registry.resolve(&invocation.name).ok_or_else(|| {
                tracing::warn!(rule = %invocation.name, field, "unknown validation rule");
                ValidatorError::UnknownRule {
                    rule: invocation.name.clone(),
                    field: field.to_owned(),
                }
            })?;

            let call = RuleCall::new(data, field, &invocation.params);
            let passed = rule.check(&call).await.map_err(|source| {
                tracing::warn!(rule = %invocation.name, field, error = %source, "rule aborted validation");
                ValidatorError::Rule {
                    rule: invocation.name.clone(),
                    field: field.to_owned(),
                    source,
                }
            })?;
            tracing::trace!(rule = %invocation.name, field, passed, "rule evaluated");

            if !passed {
                let message = self.messages.resolve(&MessageContext {
                    field,
                    rule: &invocation.name,
                    params: &invocation.params,
                    param_names: rule.param_names(),
                });
                errors.add(field, message);
            }
        }
        Ok(())
    }

    /// Blocking form of [`validate`](Self::validate) for synchronous
    /// callers. Must not be called from inside an async runtime worker.
    pub fn validate_blocking(&mut self, data: &Value, rules: &RuleSet) -> Result<bool, ValidatorError> {
        futures::executor::block_on(self.validate(data, rules))
    }

    /// Blocking form of [`check`](Self::check).
    pub fn check_blocking(&self, data: &Value, rules: &RuleSet) -> Result<ErrorBag, ValidatorError> {
        futures::executor::block_on(self.check(data, rules))
    }
}

// ============================================================================
// BUILDER
// ============================================================================

/// Builder for [`Validator`].
#[derive(Debug, Default)]
pub struct ValidatorBuilder {
    validator: Validator,
}

impl ValidatorBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts from a configuration.
    #[must_use]
    pub fn config(mut self, config: ValidatorConfig) -> Self {
        self.validator.messages.extend(config.messages);
        self
    }

    /// Adds one message override.
    #[must_use]
    pub fn message(mut self, key: impl Into<String>, message: impl Into<String>) -> Self {
        self.validator.set_message(key, message);
        self
    }

    /// Adds every entry of `messages`.
    #[must_use]
    pub fn messages(mut self, messages: MessageTable) -> Self {
        self.validator.messages.extend(messages);
        self
    }

    /// Registers a custom rule.
    #[must_use]
    pub fn rule(mut self, name: impl Into<String>, rule: impl Rule + 'static) -> Self {
        self.validator.define_rule(name, rule);
        self
    }

    #[must_use]
    pub fn build(self) -> Validator {
        self.validator
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::RuleError;
    use crate::rule::{async_rule_fn, rule_fn};
    use async_trait::async_trait;
    use pretty_assertions::assert_eq;
    use serde_json::json;
    use std::sync::Mutex;

    #[tokio::test]
    async fn test_empty_rule_set_is_valid() {
        let mut validator = Validator::new();
        assert_eq!(validator.validate(&json!({}), &RuleSet::new()).await, Ok(true));
        assert!(validator.errors().is_empty());
    }

    #[tokio::test]
    async fn test_empty_rule_string_never_fails() {
        let mut validator = Validator::new();
        let rules = RuleSet::from([("anything", "")]);
        assert_eq!(validator.validate(&json!({}), &rules).await, Ok(true));
        assert!(!validator.errors().contains("anything"));
    }

    #[tokio::test]
    async fn test_all_rules_run_after_failure() {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let mut validator = Validator::new();
        for name in ["first", "second", "third"] {
            let seen = Arc::clone(&seen);
            validator.define_rule(
                name,
                rule_fn(move |_| {
                    seen.lock().unwrap().push(name);
                    name == "second"
                }),
            );
        }

        let rules = RuleSet::from([("x", "first|second|third")]);
        assert_eq!(validator.validate(&json!({}), &rules).await, Ok(false));
        assert_eq!(*seen.lock().unwrap(), ["first", "second", "third"]);
        assert_eq!(
            validator.errors().get("x").unwrap(),
            ["The x field is invalid.", "The x field is invalid."]
        );
    }

    #[tokio::test]
    async fn test_errors_cleared_between_runs() {
        let mut validator = Validator::new();
        let rules = RuleSet::from([("name", "required")]);

        assert_eq!(validator.validate(&json!({}), &rules).await, Ok(false));
        assert!(validator.errors().contains("name"));

        assert_eq!(validator.validate(&json!({"name": "Ada"}), &rules).await, Ok(true));
        assert!(validator.errors().is_empty());
    }

    #[tokio::test]
    async fn test_unknown_rule_aborts_and_leaves_bag_empty() {
        let mut validator = Validator::new();
        let rules = RuleSet::from([("name", "required"), ("id", "uuid")]);

        let err = validator.validate(&json!({}), &rules).await.unwrap_err();
        assert_eq!(
            err,
            ValidatorError::UnknownRule {
                rule: "uuid".into(),
                field: "id".into()
            }
        );
        assert!(validator.errors().is_empty());
    }

    #[tokio::test]
    async fn test_fatal_rule_error_is_wrapped() {
        struct Broken;

        #[async_trait]
        impl Rule for Broken {
            async fn check(&self, _call: &RuleCall<'_>) -> crate::RuleResult {
                Err(RuleError::failed("store offline"))
            }
        }

        let validator = Validator::builder().rule("unique", Broken).build();
        let rules = RuleSet::from([("email", "unique")]);
        let err = validator.check(&json!({}), &rules).await.unwrap_err();
        assert_eq!(err.rule(), "unique");
        assert_eq!(err.field(), "email");
        assert_eq!(err.code(), "RULE_FAILED");
    }

    #[tokio::test]
    async fn test_async_rule_result_recorded_after_await() {
        let validator = Validator::builder()
            .rule(
                "slow",
                async_rule_fn(|_args| async {
                    tokio::time::sleep(std::time::Duration::from_millis(5)).await;
                    false
                }),
            )
            .message("slow", "Slow rule rejected :field.")
            .build();

        let rules = RuleSet::from([("a", "slow"), ("b", "required")]);
        let errors = validator.check(&json!({"b": "ok"}), &rules).await.unwrap();
        assert_eq!(errors.get("a").unwrap(), ["Slow rule rejected a."]);
        assert!(!errors.contains("b"));
    }

    #[tokio::test]
    async fn test_custom_param_names_feed_placeholders() {
        struct Between;

        #[async_trait]
        impl Rule for Between {
            async fn check(&self, call: &RuleCall<'_>) -> crate::RuleResult {
                let lo = call.parse_param::<usize>(0, "lo")?;
                let hi = call.parse_param::<usize>(1, "hi")?;
                let len = call
                    .value()
                    .and_then(crate::builtins::length::measure)
                    .unwrap_or_default();
                Ok((lo..=hi).contains(&len))
            }

            fn param_names(&self) -> &[&str] {
                &["lo", "hi"]
            }
        }

        let validator = Validator::builder()
            .rule("between", Between)
            .message("between", ":field must have :lo to :hi characters (:1-:2).")
            .build();
        let rules = RuleSet::from([("name", "between:3:5")]);
        let errors = validator.check(&json!({"name": "Al"}), &rules).await.unwrap();
        assert_eq!(
            errors.first("name"),
            Some("name must have 3 to 5 characters (3-5).")
        );
    }

    #[test]
    fn test_config_from_json() {
        let config =
            ValidatorConfig::from_json_str(r#"{"messages": {"required": "Required."}}"#).unwrap();
        let mut validator = Validator::with_config(config);
        let rules = RuleSet::from([("name", "required")]);
        assert_eq!(validator.validate_blocking(&json!({}), &rules), Ok(false));
        assert_eq!(validator.errors().first("name"), Some("Required."));
    }

    #[test]
    fn test_config_rejects_unknown_keys() {
        assert!(ValidatorConfig::from_json_str(r#"{"customRules": {}}"#).is_err());
        assert_eq!(
            ValidatorConfig::from_json_str("{}").unwrap(),
            ValidatorConfig::default()
        );
    }

    #[test]
    fn test_check_blocking_leaves_published_bag_alone() {
        let mut validator = Validator::new();
        let rules = RuleSet::from([("name", "required")]);
        validator.validate_blocking(&json!({}), &rules).unwrap();

        let fresh = validator
            .check_blocking(&json!({"name": "Ada"}), &rules)
            .unwrap();
        assert!(fresh.is_empty());
        assert!(validator.errors().contains("name"));
    }
}
