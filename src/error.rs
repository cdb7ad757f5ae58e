//! Caller errors
//!
//! These describe a misconfigured validation (bad rule specification, unknown
//! rule name, bad parameters). They are returned from the call that received the
//! bad input and are never mixed into a value's list of validation failures.

use thiserror::Error;

/// Errors raised while binding parameters to a rule.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum RuleError {
    /// A parameter without a default was not supplied.
    #[error("Rule '{rule}' requires parameter '{param}'")]
    MissingParameter {
        /// Rule being configured
        rule: String,
        /// Missing parameter name
        param: String,
    },

    /// A supplied parameter could not be parsed into its declared kind.
    #[error("Rule '{rule}' got an invalid '{param}' parameter '{value}': {reason}")]
    InvalidParameter {
        /// Rule being configured
        rule: String,
        /// Parameter name
        param: String,
        /// Raw value as supplied
        value: String,
        /// Why it was rejected
        reason: String,
    },
}

/// Errors raised while turning a rule specification into rules.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum SpecError {
    /// A name token was empty or contained characters outside the grammar.
    #[error("Invalid rule name '{name}' in specification '{spec}'")]
    InvalidRuleName {
        /// Offending token as written
        name: String,
        /// Segment it appeared in
        spec: String,
    },

    /// No rule is registered under the normalized name.
    #[error("Unknown rule '{name}'")]
    UnknownRule {
        /// Normalized (PascalCase) rule name
        name: String,
    },

    /// A collection element was itself a collection.
    #[error("Rule list element {index} is a nested list; elements must be a rule name, a rule, or a callable")]
    InvalidSpecification {
        /// Position of the offending element
        index: usize,
    },

    /// The rule was found but refused its parameters.
    #[error(transparent)]
    Rule(#[from] RuleError),
}
