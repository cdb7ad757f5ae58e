//! Predicates as rules
//!
//! A [`Predicate`] is a yes/no check over a [`Value`]. Predicates compose with
//! `and`, `or` and `not`, and a [`PredicateRule`] pairs one with an error
//! message so it can join a rule list.
//!
//! # Example
//!
//! ```
//! use rulecheck::predicate::*;
//! use rulecheck::rule::Rule;
//! use rulecheck::Value;
//!
//! let username = len_between(3, 20).and(|v: &Value| {
//!     v.as_text()
//!         .map(|t| t.chars().all(|c| c.is_alphanumeric() || c == '_'))
//!         .unwrap_or(false)
//! });
//!
//! let rule = PredicateRule::new("Username", username, "Value is not a valid username");
//! assert!(rule.validate(&Value::from("john_doe")).is_success());
//! assert!(rule.validate(&Value::from("no")).is_failure());
//! ```

use std::fmt;

use crate::rule::{fail, pass, Rule};
use crate::validation::Outcome;
use crate::value::Value;

/// A composable check over a [`Value`].
pub trait Predicate: Send + Sync {
    /// Check if the value satisfies this predicate.
    fn check(&self, value: &Value) -> bool;
}

// Blanket impl for closures
impl<F> Predicate for F
where
    F: Fn(&Value) -> bool + Send + Sync,
{
    #[inline]
    fn check(&self, value: &Value) -> bool {
        self(value)
    }
}

/// Method chaining for combining predicates.
pub trait PredicateExt: Predicate + Sized {
    /// Both predicates must hold.
    fn and<P: Predicate>(self, other: P) -> And<Self, P> {
        And(self, other)
    }

    /// Either predicate must hold.
    fn or<P: Predicate>(self, other: P) -> Or<Self, P> {
        Or(self, other)
    }

    /// Invert the predicate.
    fn not(self) -> Not<Self> {
        Not(self)
    }
}

impl<P: Predicate> PredicateExt for P {}

/// AND combinator - both predicates must be true.
#[derive(Clone, Copy, Debug)]
pub struct And<P1, P2>(pub P1, pub P2);

impl<P1: Predicate, P2: Predicate> Predicate for And<P1, P2> {
    #[inline]
    fn check(&self, value: &Value) -> bool {
        self.0.check(value) && self.1.check(value)
    }
}

/// OR combinator - either predicate must be true.
#[derive(Clone, Copy, Debug)]
pub struct Or<P1, P2>(pub P1, pub P2);

impl<P1: Predicate, P2: Predicate> Predicate for Or<P1, P2> {
    #[inline]
    fn check(&self, value: &Value) -> bool {
        self.0.check(value) || self.1.check(value)
    }
}

/// NOT combinator - inverts the predicate.
#[derive(Clone, Copy, Debug)]
pub struct Not<P>(pub P);

impl<P: Predicate> Predicate for Not<P> {
    #[inline]
    fn check(&self, value: &Value) -> bool {
        !self.0.check(value)
    }
}

/// Holds when the value has non-empty text.
#[derive(Clone, Copy, Default, Debug)]
pub struct NotEmpty;

impl Predicate for NotEmpty {
    #[inline]
    fn check(&self, value: &Value) -> bool {
        value.as_text().is_some_and(|text| !text.is_empty())
    }
}

/// Create a predicate that holds for values with non-empty text.
pub fn not_empty() -> NotEmpty {
    NotEmpty
}

/// Holds when the value's text has between `min` and `max` characters.
#[derive(Clone, Copy, Debug)]
pub struct LenBetween {
    min: usize,
    max: usize,
}

impl Predicate for LenBetween {
    #[inline]
    fn check(&self, value: &Value) -> bool {
        value.as_text().is_some_and(|text| {
            let len = text.chars().count();
            len >= self.min && len <= self.max
        })
    }
}

/// Create a predicate on text length in characters, both ends inclusive.
///
/// ```
/// use rulecheck::predicate::*;
/// use rulecheck::Value;
///
/// let p = len_between(2, 4);
/// assert!(p.check(&Value::from("abc")));
/// assert!(!p.check(&Value::from("a")));
/// assert!(!p.check(&Value::NotProvided));
/// ```
pub fn len_between(min: usize, max: usize) -> LenBetween {
    LenBetween { min, max }
}

/// A predicate with a name and a failure message, usable as a [`Rule`].
pub struct PredicateRule<P> {
    name: String,
    predicate: P,
    message: String,
    skip_not_provided: bool,
}

impl<P: Predicate> PredicateRule<P> {
    /// Fail with `message` whenever `predicate` does not hold.
    pub fn new(name: impl Into<String>, predicate: P, message: impl Into<String>) -> Self {
        PredicateRule {
            name: name.into(),
            predicate,
            message: message.into(),
            skip_not_provided: false,
        }
    }

    /// Skip this rule when the value was not provided.
    pub fn skip_not_provided(mut self) -> Self {
        self.skip_not_provided = true;
        self
    }
}

impl<P> fmt::Debug for PredicateRule<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PredicateRule")
            .field("name", &self.name)
            .field("message", &self.message)
            .field("skip_not_provided", &self.skip_not_provided)
            .finish_non_exhaustive()
    }
}

impl<P: Predicate> Rule for PredicateRule<P> {
    fn name(&self) -> &str {
        &self.name
    }

    fn ignores_not_provided(&self) -> bool {
        self.skip_not_provided
    }

    fn validate(&self, value: &Value) -> Outcome {
        if self.predicate.check(value) {
            pass()
        } else {
            fail(self.message.as_str())
        }
    }
}
