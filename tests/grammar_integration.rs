//! End-to-end behavior of the rule string grammar

use rulecheck::prelude::*;
use rulecheck::{assert_success, assert_validation_errors};

#[test]
fn required_then_number_on_text() {
    let mut item = ValidatorItem::with_rules("abc", "Required|Number").unwrap();
    assert!(!item.validate());
    assert_eq!(item.errors(), ["Value should be a number"]);
}

#[test]
fn required_then_number_on_missing_value() {
    let mut item = ValidatorItem::with_rules(Value::NotProvided, "Required|Number").unwrap();
    assert!(!item.validate());
    assert_eq!(
        item.errors(),
        ["Value is required", "Value should be a number"]
    );
}

#[test]
fn empty_text_is_provided() {
    let mut item = ValidatorItem::with_rules("", "Required|Number").unwrap();
    assert!(!item.validate());
    assert_eq!(item.errors(), ["Value should be a number"]);
}

#[test]
fn digit_pattern() {
    assert_success!(ValidatorItem::quick("123", r"Pattern:^\d+$").unwrap());
    assert_validation_errors!(
        ValidatorItem::quick("12a", r"Pattern:^\d+$").unwrap(),
        vec!["Value does not meet the required pattern".to_string()]
    );
}

#[test]
fn rule_names_are_case_insensitive() {
    for spec in [r"pattern:^\d+$", r"Pattern:^\d+$", r"PATTERN:^\d+$"] {
        assert_success!(ValidatorItem::quick("7", spec).unwrap());
    }
}

#[test]
fn delimited_pattern_with_flags() {
    assert_success!(ValidatorItem::quick("HELLO", "Pattern:/^[a-z]+$/i").unwrap());
    assert_validation_errors!(
        ValidatorItem::quick("HELLO", "Pattern:/^[a-z]+$/").unwrap(),
        vec!["Value does not meet the required pattern".to_string()]
    );
}

#[test]
fn pattern_parameters_keep_commas_and_colons() {
    assert_success!(ValidatorItem::quick("12:30", r"Pattern:^\d{1,2}:\d{2}$").unwrap());
}

#[test]
fn re_running_after_set_value_replaces_errors() {
    let mut item = ValidatorItem::with_rules("abc", "Number").unwrap();
    assert!(!item.validate());
    assert_eq!(item.errors(), ["Value should be a number"]);

    item.set_value(5);
    assert!(item.validate());
    assert!(item.errors().is_empty());
}

#[test]
fn unknown_rule_fails_fast() {
    let err = ValidatorItem::with_rules("abc", "Frobnicate").unwrap_err();
    assert_eq!(err.to_string(), "Unknown rule 'Frobnicate'");

    let mut item = ValidatorItem::new("abc");
    assert!(matches!(
        item.set_rules("Required|Frobnicate"),
        Err(SpecError::UnknownRule { .. })
    ));
    assert!(item.rules().is_empty());
}

#[test]
fn missing_and_invalid_patterns_are_caller_errors() {
    assert!(matches!(
        ValidatorItem::quick("x", "Pattern"),
        Err(SpecError::Rule(RuleError::MissingParameter { .. }))
    ));
    assert!(matches!(
        ValidatorItem::quick("x", "Pattern:(unclosed"),
        Err(SpecError::Rule(RuleError::InvalidParameter { .. }))
    ));
}

#[test]
fn malformed_rule_strings() {
    for spec in ["", "Required|", "Requ ired", "Required||Number"] {
        assert!(
            matches!(
                ValidatorItem::quick("x", spec),
                Err(SpecError::InvalidRuleName { .. })
            ),
            "{spec:?}"
        );
    }
}

#[test]
fn mixed_list_specs() {
    let spec = RuleSpec::from(vec![
        RuleSpec::from("required"),
        RuleSpec::rule(Pattern::new("^[0-9]+$").unwrap()),
        RuleSpec::from_fn(|value: &Value| match value {
            Value::Text(text) if text.len() > 3 => fail("Value is too long"),
            _ => pass(),
        }),
    ]);

    let mut item = ValidatorItem::with_rules("12345", spec).unwrap();
    assert!(!item.validate());
    assert_eq!(item.errors(), ["Value is too long"]);
}

#[test]
fn nested_lists_are_caller_errors() {
    let spec = RuleSpec::List(vec![RuleSpec::List(vec![RuleSpec::from("Required")])]);
    assert_eq!(
        ValidatorItem::with_rules("x", spec).unwrap_err(),
        SpecError::InvalidSpecification { index: 0 }
    );
}

#[test]
fn rules_are_shareable_across_items() {
    let rules = RuleSpec::from("Required|Number")
        .resolve(&RuleRegistry::builtin())
        .unwrap();

    let shared: Vec<RuleSpec> = rules
        .into_iter()
        .map(|rule| match rule {
            ResolvedRule::Object(rule) => RuleSpec::Rule(rule),
            ResolvedRule::Callable(callable) => RuleSpec::Callable(callable),
        })
        .collect();

    let mut a = ValidatorItem::with_rules("1", shared.clone()).unwrap();
    let mut b = ValidatorItem::with_rules("b", shared).unwrap();
    assert!(a.validate());
    assert!(!b.validate());
}

#[test]
fn number_rejects_non_ascii_digits() {
    for text in ["١٢٣", "१२", "１２"] {
        assert_validation_errors!(
            ValidatorItem::quick(text, "Number").unwrap(),
            vec!["Value should be a number".to_string()]
        );
    }
}

#[test]
fn resolved_rules_run_on_other_threads() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<ResolvedRule>();
    assert_send_sync::<RuleSpec>();
    assert_send_sync::<ValidatorItem>();

    let rules = RuleSpec::from(r"Required|Number|Pattern:^\d{1,3}$")
        .resolve(&RuleRegistry::builtin())
        .unwrap();

    let handles: Vec<_> = ["1", "abc", "1234"]
        .into_iter()
        .map(|text| {
            let rules = rules.clone();
            std::thread::spawn(move || {
                rules
                    .iter()
                    .filter_map(|rule| rule.apply(&Value::from(text)).into_result().err())
                    .collect::<Vec<_>>()
            })
        })
        .collect();

    let errors: Vec<Vec<String>> = handles
        .into_iter()
        .map(|handle| handle.join().unwrap())
        .collect();
    assert_eq!(
        errors,
        [
            vec![],
            vec![
                "Value should be a number".to_string(),
                "Value does not meet the required pattern".to_string(),
            ],
            vec!["Value does not meet the required pattern".to_string()],
        ]
    );

    let mut item = ValidatorItem::with_rules("12", "Required|Number").unwrap();
    let passed = std::thread::spawn(move || item.validate()).join().unwrap();
    assert!(passed);
}
