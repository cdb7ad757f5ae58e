use crate::error::RuleError;
use crate::params::Params;
use crate::rule::{fail, pass, Configure, Rule};
use crate::validation::Outcome;
use crate::value::Value;

/// Fails unless the value is a number or numeric text.
///
/// See [`Value::is_numeric`] for what counts as numeric text.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Number;

impl Number {
    /// Failure message.
    pub const MESSAGE: &'static str = "Value should be a number";
}

impl Rule for Number {
    fn name(&self) -> &str {
        Self::NAME
    }

    fn validate(&self, value: &Value) -> Outcome {
        if value.is_numeric() {
            pass()
        } else {
            fail(Self::MESSAGE)
        }
    }
}

impl Configure for Number {
    const NAME: &'static str = "Number";

    fn from_params(_params: &Params) -> Result<Self, RuleError> {
        Ok(Number)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numbers_and_numeric_text_pass() {
        for value in [
            Value::from(5),
            Value::from(-2.5),
            Value::from("123"),
            Value::from("1e3"),
        ] {
            assert!(Number.validate(&value).is_success(), "{value}");
        }
    }

    #[test]
    fn everything_else_fails() {
        for value in [
            Value::from("abc"),
            Value::from(""),
            Value::from(true),
            Value::Null,
            Value::NotProvided,
        ] {
            assert_eq!(Number.validate(&value), fail("Value should be a number"));
        }
    }

    #[test]
    fn only_ascii_digits_count() {
        for text in ["١٢٣", "१२", "１２"] {
            assert!(text.parse::<f64>().is_err());
            assert_eq!(
                Number.validate(&Value::from(text)),
                fail("Value should be a number"),
                "{text}"
            );
        }
    }
}
