//! Error types for the rule engine.
//!
//! Only *fatal* conditions live here: an unknown rule name, a malformed rule
//! parameter, or a rule that reports it cannot run at all. A rule that simply
//! judges a value invalid is not an error; it is recorded in the
//! [`ErrorBag`](crate::ErrorBag) and the run continues.

/// Result type for a single rule evaluation.
pub type RuleResult = Result<bool, RuleError>;

// ============================================================================
// RULE ERROR
// ============================================================================

/// Fatal error raised from inside a rule.
///
/// Rules don't know which field or rule name they were invoked under, so
/// these variants carry only rule-local context. The engine wraps them in
/// [`ValidatorError::Rule`] with the field and rule name attached.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RuleError {
    /// A positional parameter the rule needs was not supplied.
    #[error("missing parameter #{position} `{name}`")]
    MissingParameter {
        /// 1-based position in the rule token.
        position: usize,
        name: String,
    },

    /// A parameter was supplied but cannot be interpreted.
    #[error("invalid parameter `{name}` = {value:?}: {reason}")]
    InvalidParameter {
        name: String,
        value: String,
        reason: String,
    },

    /// The rule could not be evaluated.
    #[error("{0}")]
    Failed(String),
}

impl RuleError {
    /// Creates a [`RuleError::Failed`] from any message.
    pub fn failed(message: impl Into<String>) -> Self {
        Self::Failed(message.into())
    }

    /// Machine-readable error code.
    #[must_use]
    pub fn code(&self) -> &str {
        match self {
            Self::MissingParameter { .. } => "RULE_MISSING_PARAM",
            Self::InvalidParameter { .. } => "RULE_INVALID_PARAM",
            Self::Failed(_) => "RULE_FAILED",
        }
    }
}

// ============================================================================
// VALIDATOR ERROR
// ============================================================================

/// Fatal error that aborts a whole validation run.
///
/// Nothing is recorded in the error bag when one of these is returned.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidatorError {
    /// The rule name is neither a custom nor a built-in rule.
    #[error("validation rule `{rule}` does not exist (field `{field}`)")]
    UnknownRule { rule: String, field: String },

    /// A rule raised a fatal error while evaluating a field.
    #[error("rule `{rule}` failed on field `{field}`: {source}")]
    Rule {
        rule: String,
        field: String,
        #[source]
        source: RuleError,
    },
}

impl ValidatorError {
    /// Name of the rule that caused the error.
    #[must_use]
    pub fn rule(&self) -> &str {
        match self {
            Self::UnknownRule { rule, .. } | Self::Rule { rule, .. } => rule,
        }
    }

    /// Field that was being validated when the error occurred.
    #[must_use]
    pub fn field(&self) -> &str {
        match self {
            Self::UnknownRule { field, .. } | Self::Rule { field, .. } => field,
        }
    }

    /// Machine-readable error code.
    #[must_use]
    pub fn code(&self) -> &str {
        match self {
            Self::UnknownRule { .. } => "VALIDATOR_UNKNOWN_RULE",
            Self::Rule { source, .. } => source.code(),
        }
    }

    /// Whether the run might succeed if retried with the same input.
    ///
    /// Rule configuration errors are deterministic. Returns `false` for
    /// every variant.
    #[must_use]
    pub fn is_retryable(&self) -> bool {
        false
    }
}
