//! The per-value validation pipeline
//!
//! A [`ValidatorItem`] binds one [`Value`] to an ordered list of rules and
//! keeps the error messages of its most recent run.
//!
//! Every rule runs on every call to [`ValidatorItem::validate`]; a failing rule
//! never stops the ones after it. Rules that opt out of the not-provided value
//! are skipped (counted as passing) when the value is [`Value::NotProvided`].
//!
//! # Example
//!
//! ```
//! use rulecheck::{ValidatorItem, Validation};
//!
//! let mut item = ValidatorItem::with_rules("abc", "Required|Number").unwrap();
//! assert!(!item.validate());
//! assert_eq!(item.errors(), ["Value should be a number"]);
//!
//! item.set_value(5);
//! assert!(item.validate());
//! assert!(item.errors().is_empty());
//!
//! assert_eq!(
//!     ValidatorItem::quick("12a", r"Pattern:^\d+$").unwrap(),
//!     Validation::Failure(vec!["Value does not meet the required pattern".to_string()])
//! );
//! ```

use std::sync::Arc;

use crate::error::SpecError;
use crate::registry::RuleRegistry;
use crate::rule::ResolvedRule;
use crate::spec::RuleSpec;
use crate::validation::Validation;
use crate::value::Value;

/// A value, its rules, and the errors from the last validation.
#[derive(Debug, Clone)]
pub struct ValidatorItem {
    value: Value,
    rules: Vec<ResolvedRule>,
    errors: Vec<String>,
    validated: bool,
    registry: Arc<RuleRegistry>,
}

impl ValidatorItem {
    /// An item with no rules, resolving names through the built-in registry.
    pub fn new(value: impl Into<Value>) -> Self {
        Self::with_registry(value, RuleRegistry::builtin())
    }

    /// An item with no rules, resolving names through `registry`.
    pub fn with_registry(value: impl Into<Value>, registry: Arc<RuleRegistry>) -> Self {
        ValidatorItem {
            value: value.into(),
            rules: Vec::new(),
            errors: Vec::new(),
            validated: false,
            registry,
        }
    }

    /// An item whose rules are resolved from `spec` right away.
    pub fn with_rules(value: impl Into<Value>, spec: impl Into<RuleSpec>) -> Result<Self, SpecError> {
        let mut item = Self::new(value);
        item.set_rules(spec)?;
        Ok(item)
    }

    /// Build, validate, and return the result.
    ///
    /// Success carries no data; failure carries every error in rule order.
    pub fn quick(
        value: impl Into<Value>,
        spec: impl Into<RuleSpec>,
    ) -> Result<Validation<(), Vec<String>>, SpecError> {
        Self::quick_item(value, spec).map(|(result, _)| result)
    }

    /// Like [`ValidatorItem::quick`], also handing back the item for inspection.
    pub fn quick_item(
        value: impl Into<Value>,
        spec: impl Into<RuleSpec>,
    ) -> Result<(Validation<(), Vec<String>>, Self), SpecError> {
        let mut item = Self::with_rules(value, spec)?;
        item.validate();
        Ok((item.validation(), item))
    }

    /// The value under test.
    pub fn value(&self) -> &Value {
        &self.value
    }

    /// Replace the value under test.
    ///
    /// Errors from an earlier run stay until the next [`ValidatorItem::validate`].
    pub fn set_value(&mut self, value: impl Into<Value>) -> &mut Self {
        self.value = value.into();
        self
    }

    /// The active rules, in evaluation order.
    pub fn rules(&self) -> &[ResolvedRule] {
        &self.rules
    }

    /// The registry rule names resolve through.
    pub fn registry(&self) -> &Arc<RuleRegistry> {
        &self.registry
    }

    /// Append the rules described by `spec`.
    ///
    /// On error nothing is appended.
    pub fn set_rules(&mut self, spec: impl Into<RuleSpec>) -> Result<&mut Self, SpecError> {
        let resolved = spec.into().resolve(&self.registry)?;
        self.rules.extend(resolved);
        Ok(self)
    }

    /// Replace the active rules with those described by `spec`.
    ///
    /// On error the previous rules are kept.
    pub fn reset_rules(&mut self, spec: impl Into<RuleSpec>) -> Result<&mut Self, SpecError> {
        self.rules = spec.into().resolve(&self.registry)?;
        Ok(self)
    }

    /// Drop all rules.
    pub fn clear_rules(&mut self) -> &mut Self {
        self.rules.clear();
        self
    }

    /// Run every rule against the value.
    ///
    /// Replaces the stored errors with this run's and returns `true` when there
    /// are none.
    pub fn validate(&mut self) -> bool {
        let value = &self.value;

        let outcomes = self.rules.iter().filter_map(|rule| {
            if rule.ignores_not_provided() && value.is_not_provided() {
                #[cfg(feature = "tracing")]
                tracing::trace!(rule = rule.name(), "Skipping rule for missing value");
                return None;
            }

            let outcome = rule.apply(value);

            #[cfg(feature = "tracing")]
            tracing::trace!(rule = rule.name(), passed = outcome.is_success(), "Applied rule");

            Some(outcome)
        });

        let errors = match Validation::accumulate(outcomes) {
            Validation::Success(()) => Vec::new(),
            Validation::Failure(errors) => errors,
        };

        #[cfg(feature = "tracing")]
        tracing::debug!(
            value = %self.value,
            rules = self.rules.len(),
            errors = errors.len(),
            "Validated value"
        );

        self.errors = errors;
        self.validated = true;
        self.errors.is_empty()
    }

    /// Error messages from the most recent run, in rule order.
    pub fn errors(&self) -> &[String] {
        &self.errors
    }

    /// Whether the most recent run produced no errors.
    ///
    /// `false` until [`ValidatorItem::validate`] has run once. Changing the
    /// value or the rules afterwards does not reset it.
    pub fn passed(&self) -> bool {
        self.validated && self.errors.is_empty()
    }

    /// The most recent run as a [`Validation`].
    ///
    /// Before the first run there are no errors, so this is `Success`; use
    /// [`ValidatorItem::passed`] to tell that apart from a passing run.
    pub fn validation(&self) -> Validation<(), Vec<String>> {
        if self.errors.is_empty() {
            Validation::Success(())
        } else {
            Validation::Failure(self.errors.clone())
        }
    }
}
