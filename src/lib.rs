//! # Rulecheck
//!
//! Single-value validation driven by a compact rule string.
//!
//! A rule specification such as `"Required|Pattern:^[a-z]+$"` is parsed into
//! configured rules once, up front. Each call to
//! [`ValidatorItem::validate`] then runs every rule against the value and
//! collects one human-readable message per failing rule, in order.
//!
//! Two kinds of problems are kept apart:
//!
//! - a value that fails its rules is ordinary data: [`Validation::Failure`]
//!   with the list of messages;
//! - a broken specification (unknown rule name, missing or malformed
//!   parameter) is a caller error: [`SpecError`], returned from the call that
//!   received it.
//!
//! ## Quick Example
//!
//! ```rust
//! use rulecheck::{Validation, ValidatorItem, Value};
//!
//! assert_eq!(
//!     ValidatorItem::quick("abc", "Required|Number").unwrap(),
//!     Validation::Failure(vec!["Value should be a number".to_string()])
//! );
//!
//! // A missing value trips both rules.
//! assert_eq!(
//!     ValidatorItem::quick(Value::NotProvided, "required|number").unwrap(),
//!     Validation::Failure(vec![
//!         "Value is required".to_string(),
//!         "Value should be a number".to_string(),
//!     ])
//! );
//!
//! // Typos fail fast instead of silently passing.
//! assert!(ValidatorItem::quick("abc", "Requird").is_err());
//! ```
//!
//! ## Features
//!
//! - `tracing`: debug/trace events for rule registration, resolution and runs
//! - `serde`: `Serialize`/`Deserialize` for [`Value`] and [`Validation`]
//! - `proptest`: `Arbitrary` for [`Value`]

#![warn(missing_docs)]
#![warn(missing_debug_implementations)]

pub mod error;
pub mod grammar;
pub mod item;
pub mod params;
pub mod predicate;
pub mod registry;
pub mod rule;
pub mod rules;
pub mod spec;
pub mod testing;
pub mod validation;
pub mod value;

// Re-exports
pub use error::{RuleError, SpecError};
pub use item::ValidatorItem;
pub use registry::RuleRegistry;
pub use rule::{Callable, Configure, ResolvedRule, Rule};
pub use spec::RuleSpec;
pub use validation::{Outcome, Validation};
pub use value::Value;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::error::{RuleError, SpecError};
    pub use crate::item::ValidatorItem;
    pub use crate::predicate::{Predicate, PredicateExt, PredicateRule};
    pub use crate::registry::RuleRegistry;
    pub use crate::rule::{fail, pass, Callable, Configure, ResolvedRule, Rule};
    pub use crate::rules::{Number, Pattern, Required};
    pub use crate::spec::RuleSpec;
    pub use crate::validation::{Outcome, Validation};
    pub use crate::value::Value;
}
