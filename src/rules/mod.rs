//! Built-in rules
//!
//! These are the rules the default registry resolves from the grammar:
//!
//! | Grammar       | Rule         | Fails with                                   |
//! |---------------|--------------|----------------------------------------------|
//! | `Required`    | [`Required`] | `Value is required`                          |
//! | `Number`      | [`Number`]   | `Value should be a number`                   |
//! | `Pattern:<re>`| [`Pattern`]  | `Value does not meet the required pattern`   |
//!
//! None of them opt out of the not-provided value, so `Required|Number` on a
//! missing value reports both messages.

mod number;
mod pattern;
mod required;

pub use number::Number;
pub use pattern::Pattern;
pub use required::Required;
