//! Property-based tests for the validation pipeline

use proptest::prelude::*;
use rulecheck::prelude::*;

proptest! {
    #[test]
    fn prop_opted_out_rules_skip_missing_values(message in "[a-z ]{1,20}") {
        let rule = PredicateRule::new("Never", |_: &Value| false, message).skip_not_provided();
        let mut item = ValidatorItem::with_rules(Value::NotProvided, RuleSpec::rule(rule)).unwrap();
        prop_assert!(item.validate());
    }

    #[test]
    fn prop_digit_pattern_matches_digit_strings(text in "[a-z0-9]{0,8}") {
        let expected = !text.is_empty() && text.chars().all(|c| c.is_ascii_digit());
        let result = ValidatorItem::quick(text, r"Pattern:^\d+$").unwrap();
        prop_assert_eq!(result.is_success(), expected);
    }

    #[test]
    fn prop_integers_are_numbers(n in any::<i64>()) {
        prop_assert!(ValidatorItem::quick(n, "Number").unwrap().is_success());
        prop_assert!(ValidatorItem::quick(n.to_string(), "Number").unwrap().is_success());
    }
}

#[cfg(feature = "proptest")]
mod arbitrary_values {
    use proptest::prelude::*;
    use rulecheck::prelude::*;

    proptest! {
        #[test]
        fn prop_no_rules_always_pass(value in any::<Value>()) {
            let mut item = ValidatorItem::new(value);
            prop_assert!(item.validate());
            prop_assert!(item.errors().is_empty());
        }

        #[test]
        fn prop_required_fails_only_when_not_provided(value in any::<Value>()) {
            let missing = value.is_not_provided();
            let mut item = ValidatorItem::with_rules(value, "Required").unwrap();

            prop_assert_eq!(item.validate(), !missing);
            if missing {
                prop_assert_eq!(item.errors(), ["Value is required"]);
            } else {
                prop_assert!(item.errors().is_empty());
            }
        }

        #[test]
        fn prop_validate_is_repeatable(first in any::<Value>(), second in any::<Value>()) {
            let spec = "Required|Number";
            let mut item = ValidatorItem::with_rules(first, spec).unwrap();
            item.validate();
            let once = item.errors().to_vec();
            item.validate();
            prop_assert_eq!(item.errors(), once.as_slice());

            item.set_value(second.clone());
            item.validate();
            let mut fresh = ValidatorItem::with_rules(second, spec).unwrap();
            fresh.validate();
            prop_assert_eq!(item.errors(), fresh.errors());
        }

        #[test]
        fn prop_one_error_per_failing_rule(value in any::<Value>()) {
            let mut item = ValidatorItem::with_rules(value, r"Required|Number|Pattern:^x$").unwrap();
            item.validate();
            prop_assert!(item.errors().len() <= item.rules().len());
            prop_assert_eq!(item.passed(), item.errors().is_empty());
        }
    }
}
