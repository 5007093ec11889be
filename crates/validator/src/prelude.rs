//! Prelude module for convenient imports.
//!
//! ```rust
//! use verdict_validator::prelude::*;
//!
//! let rules = RuleSet::from([("name", "required|max:40")]);
//! let validator = Validator::builder()
//!     .rule("nonblank", rule_fn(|call| {
//!         call.value().and_then(|v| v.as_str()).is_some_and(|s| !s.trim().is_empty())
//!     }))
//!     .build();
//! # let _ = (rules, validator);
//! ```

// ============================================================================
// ENGINE
// ============================================================================

pub use crate::validator::{Validator, ValidatorBuilder, ValidatorConfig};

// ============================================================================
// DATA MODEL
// ============================================================================

pub use crate::bag::ErrorBag;
pub use crate::message::MessageTable;
pub use crate::ruleset::RuleSet;

// ============================================================================
// RULES
// ============================================================================

pub use crate::error::{RuleError, RuleResult, ValidatorError};
pub use crate::path::get_nested_value;
pub use crate::rule::{Rule, RuleArgs, RuleCall, async_rule_fn, rule_fn};
