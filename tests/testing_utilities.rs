//! Assertion macros exercised against real rule specs
//!
//! This test suite shows how the testing helpers read when checking form-like
//! inputs one field at a time.

use rulecheck::prelude::*;
use rulecheck::{assert_failure, assert_success, assert_validation_errors};

// Example field specs
const AGE: &str = "Required|Number";
const USERNAME: &str = r"required|pattern:/^[a-z][a-z0-9_]{2,15}$/i";

fn check(value: impl Into<Value>, spec: &str) -> Validation<(), Vec<String>> {
    ValidatorItem::quick(value, spec).expect("field spec should resolve")
}

#[test]
fn test_assert_success_with_valid_age() {
    assert_success!(check("42", AGE));
    assert_success!(check(42, AGE));
}

#[test]
fn test_assert_failure_with_invalid_age() {
    assert_failure!(check("forty-two", AGE));
}

#[test]
fn test_assert_validation_errors_with_missing_age() {
    assert_validation_errors!(
        check(Value::NotProvided, AGE),
        vec![
            "Value is required".to_string(),
            "Value should be a number".to_string()
        ]
    );
}

#[test]
fn test_username_with_commas_in_quantifier() {
    assert_success!(check("John_Doe", USERNAME));
    assert_validation_errors!(
        check("1john", USERNAME),
        vec!["Value does not meet the required pattern".to_string()]
    );
}

#[test]
fn test_checking_several_fields() {
    let form = [
        ("age", Value::from("abc"), AGE),
        ("username", Value::from("ok_name"), USERNAME),
        ("nickname", Value::NotProvided, "Pattern:^[a-z]+$"),
    ];

    let errors: Vec<(&str, Vec<String>)> = form
        .into_iter()
        .filter_map(|(field, value, spec)| match check(value, spec) {
            Validation::Success(()) => None,
            Validation::Failure(errors) => Some((field, errors)),
        })
        .collect();

    assert_eq!(
        errors,
        vec![
            ("age", vec!["Value should be a number".to_string()]),
            (
                "nickname",
                vec!["Value does not meet the required pattern".to_string()]
            ),
        ]
    );
}

#[test]
#[should_panic(expected = "Expected Success, got Failure")]
fn test_assert_success_panics_with_errors() {
    assert_success!(check("abc", AGE));
}
