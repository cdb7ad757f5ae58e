//! Adding rules the grammar can name, plus ad hoc callables
//!
//! Run with: cargo run --example custom_rules

use std::sync::Arc;

use rulecheck::params::{ParamKind, ParamSpec, Params};
use rulecheck::predicate::{len_between, not_empty};
use rulecheck::prelude::*;

/// Integer value no greater than `max`.
#[derive(Debug)]
struct Max(i64);

impl Rule for Max {
    fn name(&self) -> &str {
        Self::NAME
    }

    fn ignores_not_provided(&self) -> bool {
        true
    }

    fn validate(&self, value: &Value) -> Outcome {
        match value {
            Value::Int(n) if *n <= self.0 => pass(),
            _ => fail(format!("Value should be at most {}", self.0)),
        }
    }
}

impl Configure for Max {
    const NAME: &'static str = "Max";

    fn schema() -> &'static [ParamSpec] {
        const SCHEMA: &[ParamSpec] = &[ParamSpec::required("max", ParamKind::Integer)];
        SCHEMA
    }

    fn from_params(params: &Params) -> Result<Self, RuleError> {
        Ok(Max(params.integer("max").unwrap_or(i64::MAX)))
    }
}

fn main() -> Result<(), SpecError> {
    let registry = Arc::new((*RuleRegistry::builtin()).clone().with::<Max>());
    println!("registered: {:?}", registry.names());

    let mut item = ValidatorItem::with_registry(150, Arc::clone(&registry));
    item.set_rules("Required|Number|max:120")?;
    item.validate();
    println!("150 -> {:?}", item.validation());

    let mut name = ValidatorItem::with_registry("x", registry);
    name.set_rules(vec![
        RuleSpec::from("Required"),
        RuleSpec::predicate(
            "Name",
            not_empty().and(len_between(2, 32)),
            "Value should be 2 to 32 characters",
        ),
        RuleSpec::from_fn(|value: &Value| match value.as_text() {
            Some(text) if text.trim() != text => fail("Value has surrounding whitespace"),
            _ => pass(),
        }),
    ])?;
    name.validate();
    println!("'x' -> {:?}", name.errors());

    Ok(())
}
