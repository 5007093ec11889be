//! Built-in rules.
//!
//! The vocabulary is fixed: `required`, `min`, `max` and `email`. Custom
//! rules registered under the same name shadow these.

pub mod content;
pub mod length;
pub mod presence;

use std::fmt;

use crate::error::RuleResult;
use crate::rule::RuleCall;

/// Names of all built-in rules.
pub const BUILTIN_RULES: [&str; 4] = ["required", "min", "max", "email"];

/// One of the built-in rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BuiltinRule {
    /// Value must be present, non-null and not an empty string.
    Required,
    /// Length must be at least the `min` parameter.
    Min,
    /// Length must be at most the `max` parameter.
    Max,
    /// Value must be a syntactically valid email address.
    Email,
}

impl BuiltinRule {
    /// All built-in rules, in documentation order.
    pub const ALL: [BuiltinRule; 4] = [Self::Required, Self::Min, Self::Max, Self::Email];

    /// Looks up a built-in rule by name.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "required" => Some(Self::Required),
            "min" => Some(Self::Min),
            "max" => Some(Self::Max),
            "email" => Some(Self::Email),
            _ => None,
        }
    }

    /// The rule's registered name.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Required => "required",
            Self::Min => "min",
            Self::Max => "max",
            Self::Email => "email",
        }
    }

    /// Names of the positional parameters.
    #[must_use]
    pub fn param_names(self) -> &'static [&'static str] {
        match self {
            Self::Min => &["min"],
            Self::Max => &["max"],
            Self::Required | Self::Email => &[],
        }
    }

    /// Evaluates the rule.
    pub fn evaluate(self, call: &RuleCall<'_>) -> RuleResult {
        match self {
            Self::Required => Ok(presence::required(call.value())),
            Self::Min => {
                let min = call.parse_param::<usize>(0, "min")?;
                Ok(length::min(call.value(), min))
            }
            Self::Max => {
                let max = call.parse_param::<usize>(0, "max")?;
                Ok(length::max(call.value(), max))
            }
            Self::Email => Ok(content::email(call.value())),
        }
    }
}

impl fmt::Display for BuiltinRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
