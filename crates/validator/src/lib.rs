//! # verdict-validator
//!
//! A declarative rule engine for validating JSON data.
//!
//! A [`RuleSet`] maps dotted field paths to rule strings such as
//! `"required|min:8"`. The [`Validator`] evaluates every rule of every field
//! and collects human-readable failure messages per field in an
//! [`ErrorBag`].
//!
//! ## Quick Start
//!
//! ```rust
//! use serde_json::json;
//! use verdict_validator::prelude::*;
//!
//! let data = json!({"user": {"name": "John Doe", "email": "invalid-email"}});
//! let rules = RuleSet::from([
//!     ("user.name", "required"),
//!     ("user.email", "required|email"),
//! ]);
//!
//! let mut validator = Validator::new();
//! assert!(!validator.validate_blocking(&data, &rules).unwrap());
//! assert_eq!(
//!     validator.errors().first("user.email"),
//!     Some("The user.email field is invalid.")
//! );
//! ```
//!
//! ## Rules
//!
//! - **Built-in**: `required`, `min:<n>`, `max:<n>`, `email`
//!   (see [`builtins`]).
//! - **Custom**: anything implementing [`Rule`], or a closure lifted with
//!   [`rule_fn`](rule::rule_fn) / [`async_rule_fn`](rule::async_rule_fn).
//!   Custom rules shadow built-ins of the same name.
//!
//! Unknown rule names and malformed rule parameters are fatal and returned
//! as [`ValidatorError`]; they are never recorded as field failures.
//!
//! ## Messages
//!
//! See [`message`] for lookup priority and `:placeholder` substitution.

pub mod bag;
pub mod builtins;
pub mod error;
pub mod message;
pub mod parser;
pub mod path;
pub mod prelude;
pub mod registry;
pub mod rule;
pub mod ruleset;
pub mod validator;

pub use bag::ErrorBag;
pub use error::{RuleError, RuleResult, ValidatorError};
pub use message::MessageTable;
pub use parser::{RuleInvocation, RuleSpec};
pub use registry::{RuleRef, RuleRegistry};
pub use rule::{Rule, RuleArgs, RuleCall};
pub use ruleset::RuleSet;
pub use validator::{Validator, ValidatorBuilder, ValidatorConfig};
