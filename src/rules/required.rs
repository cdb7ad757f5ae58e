use crate::error::RuleError;
use crate::params::Params;
use crate::rule::{fail, pass, Configure, Rule};
use crate::validation::Outcome;
use crate::value::Value;

/// Fails when no value was provided.
///
/// This is the one rule that must see the not-provided value, so it never
/// opts out of it.
///
/// ```
/// use rulecheck::rules::Required;
/// use rulecheck::rule::Rule;
/// use rulecheck::Value;
///
/// assert!(Required.validate(&Value::from("")).is_success());
/// assert!(Required.validate(&Value::NotProvided).is_failure());
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Required;

impl Required {
    /// Failure message.
    pub const MESSAGE: &'static str = "Value is required";
}

impl Rule for Required {
    fn name(&self) -> &str {
        Self::NAME
    }

    fn validate(&self, value: &Value) -> Outcome {
        if value.is_not_provided() {
            fail(Self::MESSAGE)
        } else {
            pass()
        }
    }
}

impl Configure for Required {
    const NAME: &'static str = "Required";

    fn from_params(_params: &Params) -> Result<Self, RuleError> {
        Ok(Required)
    }
}
