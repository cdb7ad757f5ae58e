//! The rule contract
//!
//! A [`Rule`] is an immutable, reusable check over a single [`Value`]. It
//! returns [`Outcome`]: `Success(())` to pass, or `Failure(message)` with one
//! human-readable message. Rules that can be named from the grammar also
//! implement [`Configure`], which builds a ready rule from raw parameters.
//!
//! After resolution every rule is held as a [`ResolvedRule`]: either an object
//! rule (`Arc<dyn Rule>`) or a plain callable.
//!
//! # Example
//!
//! ```
//! use rulecheck::rule::{fail, pass, Configure, Rule};
//! use rulecheck::params::{ParamKind, ParamSpec, Params};
//! use rulecheck::{Outcome, RuleError, Value};
//!
//! #[derive(Debug)]
//! struct MinLength(usize);
//!
//! impl Rule for MinLength {
//!     fn name(&self) -> &str {
//!         "MinLength"
//!     }
//!
//!     fn ignores_not_provided(&self) -> bool {
//!         true
//!     }
//!
//!     fn validate(&self, value: &Value) -> Outcome {
//!         match value.as_text() {
//!             Some(text) if text.chars().count() >= self.0 => pass(),
//!             _ => fail(format!("Value should have at least {} characters", self.0)),
//!         }
//!     }
//! }
//!
//! impl Configure for MinLength {
//!     const NAME: &'static str = "MinLength";
//!
//!     fn schema() -> &'static [ParamSpec] {
//!         const SCHEMA: &[ParamSpec] = &[ParamSpec::required("min", ParamKind::Integer)];
//!         SCHEMA
//!     }
//!
//!     fn from_params(params: &Params) -> Result<Self, RuleError> {
//!         let min = params.integer("min").unwrap_or(0).max(0) as usize;
//!         Ok(MinLength(min))
//!     }
//! }
//!
//! let rule = MinLength::configure(&["3"]).unwrap();
//! assert!(rule.validate(&Value::from("abcd")).is_success());
//! assert!(rule.validate(&Value::from("ab")).is_failure());
//! ```

use std::fmt;
use std::sync::Arc;

use crate::error::RuleError;
use crate::params::{ParamSpec, Params};
use crate::validation::{Outcome, Validation};
use crate::value::Value;

/// The passing outcome.
#[inline]
pub fn pass() -> Outcome {
    Validation::Success(())
}

/// A failing outcome carrying `message`.
#[inline]
pub fn fail(message: impl Into<String>) -> Outcome {
    Validation::Failure(message.into())
}

/// A configured, immutable validation rule.
pub trait Rule: fmt::Debug + Send + Sync {
    /// Name used in logs and, for registered rules, in the grammar.
    fn name(&self) -> &str;

    /// Skip this rule (counting it as a pass) when the value was not provided.
    ///
    /// Defaults to `false`, so a rule runs on every value unless it opts out.
    fn ignores_not_provided(&self) -> bool {
        false
    }

    /// Check `value`.
    fn validate(&self, value: &Value) -> Outcome;
}

impl<R: Rule + ?Sized> Rule for Arc<R> {
    fn name(&self) -> &str {
        (**self).name()
    }

    fn ignores_not_provided(&self) -> bool {
        (**self).ignores_not_provided()
    }

    fn validate(&self, value: &Value) -> Outcome {
        (**self).validate(value)
    }
}

/// A rule that can be built from raw positional parameters.
///
/// This is what lets a rule be registered under a grammar name.
pub trait Configure: Rule + Sized + 'static {
    /// Canonical PascalCase name, e.g. `"Pattern"`.
    const NAME: &'static str;

    /// Declared parameter slots, in positional order.
    fn schema() -> &'static [ParamSpec] {
        &[]
    }

    /// Build the rule from parameters already bound to [`Configure::schema`].
    fn from_params(params: &Params) -> Result<Self, RuleError>;

    /// Bind `raw` to the schema and build the rule.
    ///
    /// Surplus parameters are ignored; missing or malformed ones fail here,
    /// never later during validation.
    fn configure<S: AsRef<str>>(raw: &[S]) -> Result<Self, RuleError> {
        let params = Params::bind(Self::NAME, Self::schema(), raw)?;
        Self::from_params(&params)
    }
}

type CallableFn = dyn Fn(&Value) -> Outcome + Send + Sync;

/// A plain function used as a rule.
#[derive(Clone)]
pub struct Callable {
    name: Arc<str>,
    f: Arc<CallableFn>,
}

impl Callable {
    /// Wrap `f`.
    pub fn new<F>(f: F) -> Self
    where
        F: Fn(&Value) -> Outcome + Send + Sync + 'static,
    {
        Callable::named("callable", f)
    }

    /// Wrap `f` under a name shown in logs.
    pub fn named<F>(name: impl Into<Arc<str>>, f: F) -> Self
    where
        F: Fn(&Value) -> Outcome + Send + Sync + 'static,
    {
        Callable {
            name: name.into(),
            f: Arc::new(f),
        }
    }

    /// Name shown in logs.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Invoke the function.
    #[inline]
    pub fn call(&self, value: &Value) -> Outcome {
        (self.f)(value)
    }
}

impl fmt::Debug for Callable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Callable")
            .field("name", &self.name)
            .finish_non_exhaustive()
    }
}

/// A rule ready to run, as held by a [`ValidatorItem`](crate::ValidatorItem).
#[derive(Debug, Clone)]
pub enum ResolvedRule {
    /// An object rule, built by the registry or supplied directly.
    Object(Arc<dyn Rule>),
    /// A callable. Always runs, including on the not-provided value.
    Callable(Callable),
}

impl ResolvedRule {
    /// Rule or callable name.
    pub fn name(&self) -> &str {
        match self {
            ResolvedRule::Object(rule) => rule.name(),
            ResolvedRule::Callable(callable) => callable.name(),
        }
    }

    /// Whether the pipeline skips this rule for the not-provided value.
    pub fn ignores_not_provided(&self) -> bool {
        match self {
            ResolvedRule::Object(rule) => rule.ignores_not_provided(),
            ResolvedRule::Callable(_) => false,
        }
    }

    /// Run the rule against `value`.
    pub fn apply(&self, value: &Value) -> Outcome {
        match self {
            ResolvedRule::Object(rule) => rule.validate(value),
            ResolvedRule::Callable(callable) => callable.call(value),
        }
    }
}

impl From<Arc<dyn Rule>> for ResolvedRule {
    fn from(rule: Arc<dyn Rule>) -> Self {
        ResolvedRule::Object(rule)
    }
}

impl From<Callable> for ResolvedRule {
    fn from(callable: Callable) -> Self {
        ResolvedRule::Callable(callable)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug)]
    struct Optional;

    impl Rule for Optional {
        fn name(&self) -> &str {
            "Optional"
        }

        fn ignores_not_provided(&self) -> bool {
            true
        }

        fn validate(&self, _value: &Value) -> Outcome {
            fail("always fails")
        }
    }

    #[test]
    fn pass_and_fail_helpers() {
        assert_eq!(pass(), Validation::Success(()));
        assert_eq!(fail("nope"), Validation::Failure("nope".to_string()));
    }

    #[test]
    fn resolved_object_rule_delegates() {
        let rule = ResolvedRule::from(Arc::new(Optional) as Arc<dyn Rule>);
        assert_eq!(rule.name(), "Optional");
        assert!(rule.ignores_not_provided());
        assert_eq!(rule.apply(&Value::Null), fail("always fails"));
    }

    #[test]
    fn callables_never_skip() {
        let rule = ResolvedRule::from(Callable::named("even", |v: &Value| match v {
            Value::Int(n) if n % 2 == 0 => pass(),
            _ => fail("Value should be even"),
        }));
        assert_eq!(rule.name(), "even");
        assert!(!rule.ignores_not_provided());
        assert!(rule.apply(&Value::Int(4)).is_success());
        assert!(rule.apply(&Value::NotProvided).is_failure());
    }

    #[test]
    fn callable_debug_shows_name() {
        let callable = Callable::new(|_: &Value| pass());
        assert!(format!("{:?}", callable).contains("callable"));
    }

    #[test]
    fn arc_rules_are_rules() {
        let shared = Arc::new(Optional);
        assert_eq!(Rule::name(&shared), "Optional");
        assert!(shared.ignores_not_provided());
    }
}
