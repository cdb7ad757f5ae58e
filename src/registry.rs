//! Rule name resolution
//!
//! A [`RuleRegistry`] is a closed table from rule name to factory. The grammar
//! can only produce rules that are registered here; any other name fails with
//! [`SpecError::UnknownRule`] at resolution time.
//!
//! The built-in table (Required, Number, Pattern) is built once, on first use,
//! and shared. Custom tables start from [`RuleRegistry::empty`] or from a copy
//! of the built-ins.
//!
//! # Example
//!
//! ```
//! use rulecheck::registry::RuleRegistry;
//! use rulecheck::rules::{Number, Required};
//!
//! let registry = RuleRegistry::empty().with::<Required>().with::<Number>();
//! assert!(registry.contains("required"));
//! assert!(!registry.contains("pattern"));
//! assert!(registry.resolve_name("Pattern", &[]).is_err());
//! ```

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use once_cell::sync::Lazy;

use crate::error::{RuleError, SpecError};
use crate::grammar::{RuleName, Segment};
use crate::rule::{Configure, Rule};
use crate::rules::{Number, Pattern, Required};

/// Builds a configured rule from raw positional parameters.
pub type RuleFactory = dyn Fn(&[String]) -> Result<Arc<dyn Rule>, RuleError> + Send + Sync;

static BUILTIN: Lazy<Arc<RuleRegistry>> = Lazy::new(|| {
    Arc::new(
        RuleRegistry::empty()
            .with::<Required>()
            .with::<Number>()
            .with::<Pattern>(),
    )
});

#[derive(Clone)]
struct Entry {
    name: String,
    factory: Arc<RuleFactory>,
}

/// Closed mapping from rule name to rule factory.
#[derive(Clone, Default)]
pub struct RuleRegistry {
    entries: HashMap<String, Entry>,
}

impl RuleRegistry {
    /// A registry that resolves nothing.
    pub fn empty() -> Self {
        Self::default()
    }

    /// The shared built-in registry.
    pub fn builtin() -> Arc<RuleRegistry> {
        Arc::clone(&BUILTIN)
    }

    /// Register `R` under [`Configure::NAME`].
    ///
    /// A later registration under the same (case-folded) name replaces the
    /// earlier one. `NAME` must be a name the grammar can produce; an invalid
    /// one is a bug in the rule and is skipped.
    pub fn register<R: Configure>(&mut self) -> &mut Self {
        let registered = self
            .register_fn(R::NAME, |raw: &[String]| {
                let rule: Arc<dyn Rule> = Arc::new(R::configure(raw)?);
                Ok(rule)
            })
            .is_ok();

        #[cfg(feature = "tracing")]
        if !registered {
            tracing::warn!(rule = R::NAME, "Skipping rule with invalid name");
        }
        debug_assert!(registered, "Configure::NAME {:?} is not a valid rule name", R::NAME);
        self
    }

    /// Register an arbitrary factory under `name`.
    ///
    /// Names are matched the way the grammar matches them: ignoring case, `_`
    /// and `-`. A name the grammar cannot produce, such as `"Max Length"` or
    /// `""`, fails with [`SpecError::InvalidRuleName`] and registers nothing.
    pub fn register_fn<F>(&mut self, name: &str, factory: F) -> Result<&mut Self, SpecError>
    where
        F: Fn(&[String]) -> Result<Arc<dyn Rule>, RuleError> + Send + Sync + 'static,
    {
        let parsed = RuleName::parse(name).ok_or_else(|| SpecError::InvalidRuleName {
            name: name.to_string(),
            spec: name.to_string(),
        })?;

        #[cfg(feature = "tracing")]
        tracing::debug!(rule = name, "Registering rule");

        self.entries.insert(
            parsed.key().to_string(),
            Entry {
                name: name.trim().to_string(),
                factory: Arc::new(factory),
            },
        );
        Ok(self)
    }

    /// Builder form of [`RuleRegistry::register`].
    pub fn with<R: Configure>(mut self) -> Self {
        self.register::<R>();
        self
    }

    /// Whether `name` resolves.
    pub fn contains(&self, name: &str) -> bool {
        RuleName::parse(name).is_some_and(|parsed| self.entries.contains_key(parsed.key()))
    }

    /// Registered names, sorted.
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.entries.values().map(|e| e.name.as_str()).collect();
        names.sort_unstable();
        names
    }

    /// Number of registered rules.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether nothing is registered.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Build the rule a parsed segment names.
    pub fn resolve(&self, segment: &Segment) -> Result<Arc<dyn Rule>, SpecError> {
        self.build(&segment.name, &segment.params)
    }

    /// Parse `name` and build that rule with `params`.
    pub fn resolve_name(&self, name: &str, params: &[String]) -> Result<Arc<dyn Rule>, SpecError> {
        let parsed = RuleName::parse(name).ok_or_else(|| SpecError::InvalidRuleName {
            name: name.to_string(),
            spec: name.to_string(),
        })?;
        self.build(&parsed, params)
    }

    fn build(&self, name: &RuleName, params: &[String]) -> Result<Arc<dyn Rule>, SpecError> {
        let entry = self
            .entries
            .get(name.key())
            .ok_or_else(|| SpecError::UnknownRule {
                name: name.to_string(),
            })?;

        #[cfg(feature = "tracing")]
        tracing::debug!(rule = %entry.name, params = params.len(), "Resolving rule");

        Ok((entry.factory)(params)?)
    }
}

impl fmt::Debug for RuleRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RuleRegistry")
            .field("rules", &self.names())
            .finish()
    }
}
