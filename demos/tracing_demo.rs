//! Shows the tracing events emitted while resolving and running rules
//!
//! Run with: cargo run --example tracing_demo --features tracing

use rulecheck::prelude::*;

fn main() {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::TRACE)
        .init();

    tracing::info!("Starting tracing demo");

    // Each rule is resolved, then applied, with an event per step
    match ValidatorItem::quick("abc", r"Required|Number|Pattern:^[a-z]+$") {
        Ok(result) => tracing::info!("Result: {:?}", result),
        Err(e) => tracing::error!("Spec rejected: {}", e),
    }

    // Opted-out rules are skipped for missing values
    let lowercase = |v: &Value| {
        v.as_text()
            .is_some_and(|t| t.chars().all(|c| c.is_lowercase()))
    };
    let rule = PredicateRule::new("Lowercase", lowercase, "Value should be lowercase")
        .skip_not_provided();

    match ValidatorItem::with_rules(Value::NotProvided, RuleSpec::rule(rule)) {
        Ok(mut item) => {
            let ok = item.validate();
            tracing::info!(ok, "Missing value checked");
        }
        Err(e) => tracing::error!("Spec rejected: {}", e),
    }

    if let Err(e) = ValidatorItem::quick("abc", "Frobnicate") {
        tracing::warn!("Expected failure: {}", e);
    }
}
