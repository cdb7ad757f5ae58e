//! Rule specifications
//!
//! A [`RuleSpec`] is everything a caller may use to say which rules apply:
//! a rule string, a rule object, a callable, or a list of those. The shape is
//! decided once, here, when the spec is built; [`RuleSpec::resolve`] then
//! flattens it into an ordered list of [`ResolvedRule`]s.
//!
//! # Example
//!
//! ```
//! use rulecheck::rule::{fail, pass};
//! use rulecheck::rules::Pattern;
//! use rulecheck::{RuleRegistry, RuleSpec, Value};
//!
//! let spec = RuleSpec::from(vec![
//!     RuleSpec::from("Required|Number"),
//!     RuleSpec::rule(Pattern::new(r"^\d{2}$").unwrap()),
//!     RuleSpec::from_fn(|v: &Value| match v {
//!         Value::Text(t) if t.starts_with('0') => fail("Value should not start with 0"),
//!         _ => pass(),
//!     }),
//! ]);
//!
//! let rules = spec.resolve(&RuleRegistry::builtin()).unwrap();
//! let names: Vec<&str> = rules.iter().map(|r| r.name()).collect();
//! assert_eq!(names, ["Required", "Number", "Pattern", "callable"]);
//! ```

use std::sync::Arc;

use crate::error::SpecError;
use crate::grammar;
use crate::predicate::{Predicate, PredicateRule};
use crate::registry::RuleRegistry;
use crate::rule::{Callable, ResolvedRule, Rule};
use crate::validation::Outcome;
use crate::value::Value;

/// A description of which rules to apply.
#[derive(Debug, Clone)]
pub enum RuleSpec {
    /// A rule string such as `"Required|Pattern:^[a-z]+$"`.
    Text(String),
    /// A configured rule object.
    Rule(Arc<dyn Rule>),
    /// A plain function.
    Callable(Callable),
    /// An ordered list of rule strings, objects and callables. Lists may not nest.
    List(Vec<RuleSpec>),
}

impl RuleSpec {
    /// A spec with no rules.
    pub fn none() -> Self {
        RuleSpec::List(Vec::new())
    }

    /// Use a rule object as-is.
    pub fn rule<R: Rule + 'static>(rule: R) -> Self {
        RuleSpec::Rule(Arc::new(rule))
    }

    /// Use a function as a rule.
    pub fn from_fn<F>(f: F) -> Self
    where
        F: Fn(&Value) -> Outcome + Send + Sync + 'static,
    {
        RuleSpec::Callable(Callable::new(f))
    }

    /// Fail with `message` whenever `predicate` does not hold.
    pub fn predicate<P: Predicate + 'static>(
        name: impl Into<String>,
        predicate: P,
        message: impl Into<String>,
    ) -> Self {
        RuleSpec::rule(PredicateRule::new(name, predicate, message))
    }

    /// Flatten into ready rules, in declaration order.
    ///
    /// Rule names are resolved through `registry`. Unknown names, bad
    /// parameters and nested lists fail here.
    pub fn resolve(&self, registry: &RuleRegistry) -> Result<Vec<ResolvedRule>, SpecError> {
        let mut rules = Vec::new();
        self.resolve_into(registry, &mut rules)?;
        Ok(rules)
    }

    fn resolve_into(
        &self,
        registry: &RuleRegistry,
        rules: &mut Vec<ResolvedRule>,
    ) -> Result<(), SpecError> {
        match self {
            RuleSpec::Text(text) => {
                for segment in grammar::parse(text)? {
                    rules.push(ResolvedRule::Object(registry.resolve(&segment)?));
                }
            }
            RuleSpec::Rule(rule) => rules.push(ResolvedRule::Object(Arc::clone(rule))),
            RuleSpec::Callable(callable) => rules.push(ResolvedRule::Callable(callable.clone())),
            RuleSpec::List(items) => {
                for (index, item) in items.iter().enumerate() {
                    if let RuleSpec::List(_) = item {
                        return Err(SpecError::InvalidSpecification { index });
                    }
                    item.resolve_into(registry, rules)?;
                }
            }
        }
        Ok(())
    }
}

impl From<&str> for RuleSpec {
    fn from(text: &str) -> Self {
        RuleSpec::Text(text.to_string())
    }
}

impl From<String> for RuleSpec {
    fn from(text: String) -> Self {
        RuleSpec::Text(text)
    }
}

impl From<&String> for RuleSpec {
    fn from(text: &String) -> Self {
        RuleSpec::Text(text.clone())
    }
}

impl From<Arc<dyn Rule>> for RuleSpec {
    fn from(rule: Arc<dyn Rule>) -> Self {
        RuleSpec::Rule(rule)
    }
}

impl From<Callable> for RuleSpec {
    fn from(callable: Callable) -> Self {
        RuleSpec::Callable(callable)
    }
}

impl<T: Into<RuleSpec>> From<Vec<T>> for RuleSpec {
    fn from(items: Vec<T>) -> Self {
        RuleSpec::List(items.into_iter().map(Into::into).collect())
    }
}

impl<T: Into<RuleSpec>, const N: usize> From<[T; N]> for RuleSpec {
    fn from(items: [T; N]) -> Self {
        RuleSpec::List(items.into_iter().map(Into::into).collect())
    }
}
