use regex::Regex;

use crate::error::RuleError;
use crate::params::{ParamKind, ParamSpec, Params};
use crate::rule::{fail, pass, Configure, Rule};
use crate::validation::Outcome;
use crate::value::Value;

const SCHEMA: &[ParamSpec] = &[ParamSpec::required("pattern", ParamKind::Regex).rest()];

/// Fails unless the value's text matches a regular expression.
///
/// The expression may be bare (`^\d+$`) or a delimited literal with flags
/// (`/^[a-z]+$/i`). Values with no text form (not provided, null, booleans)
/// never match.
///
/// ```
/// use rulecheck::rules::Pattern;
/// use rulecheck::rule::Rule;
/// use rulecheck::Value;
///
/// let rule = Pattern::new("/^[a-z]+$/i").unwrap();
/// assert!(rule.validate(&Value::from("Hello")).is_success());
/// assert!(rule.validate(&Value::from("hello!")).is_failure());
/// ```
#[derive(Debug, Clone)]
pub struct Pattern {
    regex: Regex,
}

impl Pattern {
    /// Failure message.
    pub const MESSAGE: &'static str = "Value does not meet the required pattern";

    /// Compile `literal` into a pattern rule.
    pub fn new(literal: &str) -> Result<Self, RuleError> {
        Self::configure(&[literal])
    }

    /// Use an already compiled expression.
    pub fn from_regex(regex: Regex) -> Self {
        Pattern { regex }
    }

    /// The compiled expression.
    pub fn regex(&self) -> &Regex {
        &self.regex
    }
}

impl Rule for Pattern {
    fn name(&self) -> &str {
        Self::NAME
    }

    fn validate(&self, value: &Value) -> Outcome {
        match value.as_text() {
            Some(text) if self.regex.is_match(&text) => pass(),
            _ => fail(Self::MESSAGE),
        }
    }
}

impl Configure for Pattern {
    const NAME: &'static str = "Pattern";

    fn schema() -> &'static [ParamSpec] {
        SCHEMA
    }

    fn from_params(params: &Params) -> Result<Self, RuleError> {
        match params.regex("pattern") {
            Some(regex) => Ok(Pattern::from_regex(regex.clone())),
            None => Err(RuleError::MissingParameter {
                rule: Self::NAME.to_string(),
                param: "pattern".to_string(),
            }),
        }
    }
}

impl TryFrom<&str> for Pattern {
    type Error = RuleError;

    fn try_from(literal: &str) -> Result<Self, Self::Error> {
        Pattern::new(literal)
    }
}
