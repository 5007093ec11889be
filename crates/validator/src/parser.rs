//! Rule-string parsing.
//!
//! A rule string is a `|`-separated list of rule tokens. Each token is a rule
//! name optionally followed by `:`-separated parameters:
//!
//! ```text
//! required|min:8|between:3:20
//! ```
//!
//! Parameters are split on `:` only; commas are part of the parameter text.

use std::fmt;

/// Separator between rule tokens.
pub const RULE_SEPARATOR: char = '|';

/// Separator between a rule name and its parameters.
pub const PARAM_SEPARATOR: char = ':';

// ============================================================================
// RULE INVOCATION
// ============================================================================

/// One parsed rule token: a rule name plus its raw parameters.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RuleInvocation {
    /// Rule name, looked up in the registry.
    pub name: String,
    /// Raw parameter strings, in token order.
    pub params: Vec<String>,
}

impl RuleInvocation {
    /// Creates an invocation from a name and parameters.
    pub fn new<I, S>(name: impl Into<String>, params: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            name: name.into(),
            params: params.into_iter().map(Into::into).collect(),
        }
    }

    /// Parses a single rule token such as `min:8`.
    #[must_use]
    pub fn parse(token: &str) -> Self {
        let mut parts = token.split(PARAM_SEPARATOR);
        let name = parts.next().unwrap_or_default();
        Self::new(name, parts)
    }
}

impl fmt::Display for RuleInvocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)?;
        for param in &self.params {
            write!(f, "{PARAM_SEPARATOR}{param}")?;
        }
        Ok(())
    }
}

// ============================================================================
// RULE SPEC
// ============================================================================

/// Ordered rule invocations for a single field.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RuleSpec {
    invocations: Vec<RuleInvocation>,
}

impl RuleSpec {
    /// Parses a full rule string.
    ///
    /// Tokens are trimmed and empty tokens are skipped, so `""`, `"|"` and
    /// `"required||email"` are all accepted.
    ///
    /// # Examples
    ///
    /// ```
    /// use verdict_validator::parser::RuleSpec;
    ///
    /// let spec = RuleSpec::parse("required|min:8");
    /// let names: Vec<_> = spec.iter().map(|r| r.name.as_str()).collect();
    /// assert_eq!(names, ["required", "min"]);
    /// assert_eq!(spec.invocations()[1].params, ["8"]);
    /// ```
    #[must_use]
    pub fn parse(rules: &str) -> Self {
        let invocations = rules
            .split(RULE_SEPARATOR)
            .map(str::trim)
            .filter(|token| !token.is_empty())
            .map(RuleInvocation::parse)
            .collect();
        Self { invocations }
    }

    /// Parsed invocations in declaration order.
    #[must_use]
    pub fn invocations(&self) -> &[RuleInvocation] {
        &self.invocations
    }

    /// Iterates over the invocations in declaration order.
    pub fn iter(&self) -> std::slice::Iter<'_, RuleInvocation> {
        self.invocations.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.invocations.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.invocations.is_empty()
    }
}

impl<'a> IntoIterator for &'a RuleSpec {
    type Item = &'a RuleInvocation;
    type IntoIter = std::slice::Iter<'a, RuleInvocation>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl fmt::Display for RuleSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, invocation) in self.invocations.iter().enumerate() {
            if i > 0 {
                write!(f, "{RULE_SEPARATOR}")?;
            }
            write!(f, "{invocation}")?;
        }
        Ok(())
    }
}

/// Parses a rule string into a [`RuleSpec`].
#[must_use]
pub fn parse(rules: &str) -> RuleSpec {
    RuleSpec::parse(rules)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[test]
    fn test_single_rule() {
        let spec = parse("required");
        assert_eq!(spec.invocations(), [RuleInvocation::new("required", Vec::<String>::new())]);
    }

    #[test]
    fn test_rules_keep_declaration_order() {
        let spec = parse("required|email|min:8");
        let names: Vec<_> = spec.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, ["required", "email", "min"]);
    }

    #[test]
    fn test_colon_delimited_params() {
        let spec = parse("between:3:20");
        assert_eq!(spec.invocations()[0], RuleInvocation::new("between", ["3", "20"]));
    }

    #[test]
    fn test_commas_stay_inside_param() {
        let spec = parse("in:a,b,c");
        assert_eq!(spec.invocations()[0].params, ["a,b,c"]);
    }

    #[test]
    fn test_trailing_colon_yields_empty_param() {
        let spec = parse("min:");
        assert_eq!(spec.invocations()[0].params, [""]);
    }

    #[rstest]
    #[case("")]
    #[case("|")]
    #[case("  ")]
    #[case(" | | ")]
    fn test_empty_specs(#[case] rules: &str) {
        assert!(parse(rules).is_empty());
    }

    #[test]
    fn test_whitespace_and_empty_tokens_are_skipped() {
        let spec = parse(" required || min:8 |");
        assert_eq!(spec.len(), 2);
        assert_eq!(spec.invocations()[1], RuleInvocation::new("min", ["8"]));
    }

    #[test]
    fn test_display_round_trips_canonical_form() {
        let spec = parse("required|min:8|between:3:20");
        assert_eq!(spec.to_string(), "required|min:8|between:3:20");
    }
}
