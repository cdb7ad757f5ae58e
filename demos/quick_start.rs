//! Validating a handful of form fields with rule strings
//!
//! Run with: cargo run --example quick_start

use rulecheck::prelude::*;

fn main() -> Result<(), SpecError> {
    let fields = [
        ("age", Value::from("27"), "Required|Number"),
        ("zip", Value::from("9021"), r"Required|Pattern:^\d{5}$"),
        ("nickname", Value::NotProvided, "Pattern:/^[a-z]+$/i"),
        ("email", Value::NotProvided, "required|pattern:^[^@]+@[^@]+$"),
    ];

    for (field, value, spec) in fields {
        match ValidatorItem::quick(value, spec)? {
            Validation::Success(()) => println!("{field}: ok"),
            Validation::Failure(errors) => println!("{field}: {}", errors.join("; ")),
        }
    }

    // Reuse one item while the value changes
    let mut item = ValidatorItem::with_rules("abc", "Required|Number")?;
    println!("'abc' valid? {} {:?}", item.validate(), item.errors());
    item.set_value(42);
    println!("42 valid? {} {:?}", item.validate(), item.errors());

    // A typo is a caller error, not a failed value
    if let Err(err) = ValidatorItem::quick("abc", "Requird|Number") {
        println!("spec error: {err}");
    }

    Ok(())
}
