//! Test helpers
//!
//! Assertion macros for [`Validation`](crate::Validation) results and, with the
//! `proptest` feature, an `Arbitrary` implementation for [`Value`](crate::Value).
//!
//! # Example
//!
//! ```rust
//! use rulecheck::{assert_failure, assert_success, assert_validation_errors, ValidatorItem};
//!
//! assert_success!(ValidatorItem::quick("42", "Required|Number").unwrap());
//! assert_failure!(ValidatorItem::quick("abc", "Number").unwrap());
//! assert_validation_errors!(
//!     ValidatorItem::quick("abc", "Number").unwrap(),
//!     vec!["Value should be a number".to_string()]
//! );
//! ```

/// Assert that a validation succeeds.
///
/// This macro will panic if the validation is a `Failure`.
#[macro_export]
macro_rules! assert_success {
    ($validation:expr) => {
        match $validation {
            $crate::Validation::Success(_) => {}
            $crate::Validation::Failure(e) => {
                panic!("Expected Success, got Failure: {:?}", e);
            }
        }
    };
}

/// Assert that a validation fails.
///
/// This macro will panic if the validation is a `Success`.
#[macro_export]
macro_rules! assert_failure {
    ($validation:expr) => {
        match $validation {
            $crate::Validation::Failure(_) => {}
            $crate::Validation::Success(v) => {
                panic!("Expected Failure, got Success: {:?}", v);
            }
        }
    };
}

/// Assert that a validation fails with exactly these errors, in order.
#[macro_export]
macro_rules! assert_validation_errors {
    ($validation:expr, $expected:expr) => {
        match $validation {
            $crate::Validation::Failure(errors) => {
                assert_eq!(errors, $expected);
            }
            $crate::Validation::Success(v) => {
                panic!(
                    "Expected Failure with errors {:?}, got Success: {:?}",
                    $expected, v
                );
            }
        }
    };
}

#[cfg(feature = "proptest")]
use proptest::prelude::*;

#[cfg(feature = "proptest")]
impl Arbitrary for crate::Value {
    type Parameters = ();
    type Strategy = BoxedStrategy<Self>;

    fn arbitrary_with(_args: Self::Parameters) -> Self::Strategy {
        use crate::Value;

        prop_oneof![
            Just(Value::NotProvided),
            Just(Value::Null),
            any::<bool>().prop_map(Value::Bool),
            any::<i64>().prop_map(Value::Int),
            any::<f64>().prop_map(Value::Float),
            any::<String>().prop_map(Value::Text),
        ]
        .boxed()
    }
}

#[cfg(test)]
mod tests {
    use crate::Validation;

    #[test]
    fn assert_success_macro() {
        let val = Validation::<_, Vec<String>>::success(());
        assert_success!(val);
    }

    #[test]
    fn assert_failure_macro() {
        let val = Validation::<(), _>::failure(vec!["error".to_string()]);
        assert_failure!(val);
    }

    #[test]
    fn assert_validation_errors_macro() {
        let val = Validation::<(), _>::failure(vec!["error1", "error2"]);
        assert_validation_errors!(val, vec!["error1", "error2"]);
    }

    #[test]
    #[should_panic(expected = "Expected Success, got Failure")]
    fn assert_success_panics_on_failure() {
        let val = Validation::<(), _>::failure(vec!["error".to_string()]);
        assert_success!(val);
    }

    #[test]
    #[should_panic(expected = "Expected Failure, got Success")]
    fn assert_failure_panics_on_success() {
        let val = Validation::<_, Vec<String>>::success(());
        assert_failure!(val);
    }

    #[test]
    #[should_panic(expected = "Expected Failure with errors")]
    fn assert_validation_errors_panics_on_success() {
        let val = Validation::<_, Vec<String>>::success(());
        assert_validation_errors!(val, vec!["error".to_string()]);
    }

    #[cfg(feature = "proptest")]
    mod proptest_tests {
        use crate::Value;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn arbitrary_values_display(value in any::<Value>()) {
                prop_assert!(!value.to_string().is_empty());
            }
        }
    }
}
