//! The rule contract.
//!
//! A [`Rule`] judges one field of the data against zero or more raw string
//! parameters. Every rule is asynchronous from the engine's point of view;
//! synchronous closures are lifted with [`rule_fn`], asynchronous ones with
//! [`async_rule_fn`].

use std::fmt;
use std::future::Future;
use std::str::FromStr;

use async_trait::async_trait;
use serde_json::Value;

use crate::error::{RuleError, RuleResult};
use crate::path;

// ============================================================================
// RULE CALL
// ============================================================================

/// Everything a rule gets to see for one invocation.
#[derive(Debug, Clone, Copy)]
pub struct RuleCall<'a> {
    data: &'a Value,
    field: &'a str,
    params: &'a [String],
}

impl<'a> RuleCall<'a> {
    /// Creates a call for `field` of `data` with raw `params`.
    #[must_use]
    pub fn new(data: &'a Value, field: &'a str, params: &'a [String]) -> Self {
        Self {
            data,
            field,
            params,
        }
    }

    /// The whole data object being validated.
    #[must_use]
    pub fn data(&self) -> &'a Value {
        self.data
    }

    /// Dotted path of the field under validation.
    #[must_use]
    pub fn field(&self) -> &'a str {
        self.field
    }

    /// Raw parameters in token order.
    #[must_use]
    pub fn params(&self) -> &'a [String] {
        self.params
    }

    /// Parameter at zero-based `index`, if present.
    #[must_use]
    pub fn param(&self, index: usize) -> Option<&'a str> {
        self.params.get(index).map(String::as_str)
    }

    /// Value at [`field`](Self::field), or `None` if the path is absent.
    #[must_use]
    pub fn value(&self) -> Option<&'a Value> {
        path::resolve(self.data, self.field)
    }

    /// Parameter at `index`, or [`RuleError::MissingParameter`].
    pub fn required_param(&self, index: usize, name: &str) -> Result<&'a str, RuleError> {
        self.param(index).ok_or_else(|| RuleError::MissingParameter {
            position: index + 1,
            name: name.to_owned(),
        })
    }

    /// Parses the parameter at `index` into `T`.
    ///
    /// Missing parameters and parse failures are both fatal.
    pub fn parse_param<T>(&self, index: usize, name: &str) -> Result<T, RuleError>
    where
        T: FromStr,
        T::Err: fmt::Display,
    {
        let raw = self.required_param(index, name)?;
        raw.trim()
            .parse()
            .map_err(|err: T::Err| RuleError::InvalidParameter {
                name: name.to_owned(),
                value: raw.to_owned(),
                reason: err.to_string(),
            })
    }
}

// ============================================================================
// RULE TRAIT
// ============================================================================

/// A named predicate over one field.
///
/// Return `Ok(true)` when the field passes and `Ok(false)` when it fails;
/// a failure is recorded with a message and validation continues. Return
/// `Err` only when the rule cannot be evaluated at all, which aborts the
/// whole run.
///
/// # Examples
///
/// ```
/// use async_trait::async_trait;
/// use verdict_validator::{Rule, RuleCall, RuleResult};
///
/// struct Uppercase;
///
/// #[async_trait]
/// impl Rule for Uppercase {
///     async fn check(&self, call: &RuleCall<'_>) -> RuleResult {
///         Ok(call
///             .value()
///             .and_then(|v| v.as_str())
///             .is_some_and(|s| s.chars().all(|c| !c.is_lowercase())))
///     }
/// }
/// ```
#[async_trait]
pub trait Rule: Send + Sync {
    /// Evaluates the rule for one invocation.
    async fn check(&self, call: &RuleCall<'_>) -> RuleResult;

    /// Names of the positional parameters, used as `:name` message
    /// placeholders. Empty by default.
    fn param_names(&self) -> &[&str] {
        &[]
    }
}

// ============================================================================
// CLOSURE ADAPTERS
// ============================================================================

/// A synchronous closure lifted into a [`Rule`].
#[derive(Clone)]
pub struct FnRule<F> {
    func: F,
}

impl<F> fmt::Debug for FnRule<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FnRule").field("func", &"<function>").finish()
    }
}

#[async_trait]
impl<F> Rule for FnRule<F>
where
    F: Fn(&RuleCall<'_>) -> bool + Send + Sync,
{
    async fn check(&self, call: &RuleCall<'_>) -> RuleResult {
        Ok((self.func)(call))
    }
}

/// Lifts a synchronous predicate into a [`Rule`].
///
/// ```
/// use verdict_validator::rule::rule_fn;
///
/// let not_admin = rule_fn(|call| call.value().and_then(|v| v.as_str()) != Some("admin"));
/// # let _ = not_admin;
/// ```
pub fn rule_fn<F>(func: F) -> FnRule<F>
where
    F: Fn(&RuleCall<'_>) -> bool + Send + Sync,
{
    FnRule { func }
}

/// Owned arguments handed to asynchronous closure rules.
///
/// The future returned by an async closure may outlive the borrow of the
/// data, so the adapter clones the data, field and parameters. Implement
/// [`Rule`] directly to avoid the copy.
#[derive(Debug, Clone, PartialEq)]
pub struct RuleArgs {
    pub data: Value,
    pub field: String,
    pub params: Vec<String>,
}

impl RuleArgs {
    fn from_call(call: &RuleCall<'_>) -> Self {
        Self {
            data: call.data().clone(),
            field: call.field().to_owned(),
            params: call.params().to_vec(),
        }
    }

    /// Value at `field`, or `None` if the path is absent.
    #[must_use]
    pub fn value(&self) -> Option<&Value> {
        path::resolve(&self.data, &self.field)
    }

    /// Parameter at zero-based `index`, if present.
    #[must_use]
    pub fn param(&self, index: usize) -> Option<&str> {
        self.params.get(index).map(String::as_str)
    }
}

/// An asynchronous closure lifted into a [`Rule`].
#[derive(Clone)]
pub struct AsyncFnRule<F> {
    func: F,
}

impl<F> fmt::Debug for AsyncFnRule<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AsyncFnRule")
            .field("func", &"<function>")
            .finish()
    }
}

#[async_trait]
impl<F, Fut> Rule for AsyncFnRule<F>
where
    F: Fn(RuleArgs) -> Fut + Send + Sync,
    Fut: Future<Output = bool> + Send + 'static,
{
    async fn check(&self, call: &RuleCall<'_>) -> RuleResult {
        Ok((self.func)(RuleArgs::from_call(call)).await)
    }
}

/// Lifts an asynchronous predicate into a [`Rule`].
///
/// ```
/// use verdict_validator::rule::async_rule_fn;
///
/// let unique = async_rule_fn(|args| async move {
///     // e.g. look the value up in a store
///     args.value().and_then(|v| v.as_str()) != Some("taken")
/// });
/// # let _ = unique;
/// ```
pub fn async_rule_fn<F, Fut>(func: F) -> AsyncFnRule<F>
where
    F: Fn(RuleArgs) -> Fut + Send + Sync,
    Fut: Future<Output = bool> + Send + 'static,
{
    AsyncFnRule { func }
}
