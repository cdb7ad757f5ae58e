//! Validation results
//!
//! [`Validation`] is shaped like `Result`, but it is the *expected* outcome of
//! checking a value rather than a programming error. A single rule produces an
//! [`Outcome`] (`Validation<(), String>`), and a whole pipeline run produces a
//! `Validation<(), Vec<String>>` holding every failure in rule order.
//!
//! # Examples
//!
//! ```
//! use rulecheck::Validation;
//!
//! let outcomes = vec![
//!     Validation::success(()),
//!     Validation::failure("Value should be a number".to_string()),
//!     Validation::failure("Value does not meet the required pattern".to_string()),
//! ];
//!
//! assert_eq!(
//!     Validation::accumulate(outcomes),
//!     Validation::Failure(vec![
//!         "Value should be a number".to_string(),
//!         "Value does not meet the required pattern".to_string(),
//!     ])
//! );
//! ```

/// A validation that either succeeds with a value or fails with an error.
///
/// Unlike `Result`, failures here are data to be reported, not faults to be
/// propagated with `?`.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Validation<T, E> {
    /// Successful validation with a value
    Success(T),
    /// Failed validation with its error(s)
    Failure(E),
}

/// What a single rule returns: pass, or one human-readable message.
pub type Outcome = Validation<(), String>;

impl<T, E> Validation<T, E> {
    /// Create a successful validation
    #[inline]
    pub fn success(value: T) -> Self {
        Validation::Success(value)
    }

    /// Create a failed validation
    #[inline]
    pub fn failure(error: E) -> Self {
        Validation::Failure(error)
    }

    /// Convert this validation to a Result
    #[inline]
    pub fn into_result(self) -> Result<T, E> {
        match self {
            Validation::Success(value) => Ok(value),
            Validation::Failure(error) => Err(error),
        }
    }

    /// Check if this validation is successful
    #[inline]
    pub fn is_success(&self) -> bool {
        matches!(self, Validation::Success(_))
    }

    /// Check if this validation failed
    #[inline]
    pub fn is_failure(&self) -> bool {
        matches!(self, Validation::Failure(_))
    }
}

impl<E> Validation<(), Vec<E>> {
    /// Collect per-rule outcomes into one result, keeping every error in order.
    ///
    /// Evaluation is not short-circuited: all outcomes are consumed.
    /// An empty input is a success.
    pub fn accumulate<I>(outcomes: I) -> Self
    where
        I: IntoIterator<Item = Validation<(), E>>,
    {
        let errors: Vec<E> = outcomes
            .into_iter()
            .filter_map(|outcome| outcome.into_result().err())
            .collect();

        if errors.is_empty() {
            Validation::Success(())
        } else {
            Validation::Failure(errors)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_success_and_failure() {
        let ok = Validation::<_, Vec<&str>>::success(1);
        let bad = Validation::<i32, _>::failure(vec!["error"]);
        assert!(ok.is_success());
        assert!(!ok.is_failure());
        assert!(bad.is_failure());
    }

    #[test]
    fn test_into_result() {
        assert_eq!(Validation::<_, String>::success(3).into_result(), Ok(3));
        assert_eq!(Validation::<(), _>::failure("nope").into_result(), Err("nope"));
    }

    #[test]
    fn test_accumulate_empty_is_success() {
        let v = Validation::<(), Vec<String>>::accumulate(Vec::new());
        assert_eq!(v, Validation::Success(()));
    }

    #[test]
    fn test_accumulate_all_pass() {
        let outcomes: Vec<Outcome> = vec![Validation::success(()), Validation::success(())];
        assert!(Validation::accumulate(outcomes).is_success());
    }

    #[test]
    fn test_accumulate_keeps_order() {
        let outcomes: Vec<Validation<(), &str>> = vec![
            Validation::failure("first"),
            Validation::success(()),
            Validation::failure("second"),
        ];
        assert_eq!(
            Validation::accumulate(outcomes),
            Validation::Failure(vec!["first", "second"])
        );
    }
}
