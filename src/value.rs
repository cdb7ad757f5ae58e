//! The value under test
//!
//! A [`Value`] is whatever a caller hands to a [`ValidatorItem`](crate::ValidatorItem).
//! It carries a distinguished [`Value::NotProvided`] variant so that "the caller
//! supplied nothing at all" can be told apart from an explicit null, an empty
//! string, or any other legitimate value.
//!
//! # Examples
//!
//! ```
//! use rulecheck::Value;
//!
//! assert_eq!(Value::from("abc"), Value::Text("abc".to_string()));
//! assert_eq!(Value::from(42), Value::Int(42));
//! assert_eq!(Value::from(None::<&str>), Value::NotProvided);
//! assert!(Value::from("12.5").is_numeric());
//! ```

use std::borrow::Cow;
use std::fmt;

use once_cell::sync::Lazy;
use regex::Regex;

// ASCII decimal literal with optional sign, fraction, exponent and surrounding
// ASCII whitespace. `\d` and `\s` would also admit non-ASCII digits and spaces.
static NUMERIC_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"^[ \t\n\r\x0B\x0C]*[+-]?(?:[0-9]+(?:\.[0-9]*)?|\.[0-9]+)(?:[eE][+-]?[0-9]+)?[ \t\n\r\x0B\x0C]*$",
    )
    .expect("numeric literal regex is valid")
});

/// A single value handed to the validation pipeline.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Value {
    /// No value was supplied at all.
    #[default]
    NotProvided,
    /// An explicit null.
    Null,
    /// A boolean.
    Bool(bool),
    /// A signed integer.
    Int(i64),
    /// A floating point number.
    Float(f64),
    /// A piece of text.
    Text(String),
}

impl Value {
    /// Returns `true` for the not-provided sentinel.
    ///
    /// ```
    /// use rulecheck::Value;
    ///
    /// assert!(Value::NotProvided.is_not_provided());
    /// assert!(!Value::Null.is_not_provided());
    /// assert!(!Value::from("").is_not_provided());
    /// ```
    #[inline]
    pub fn is_not_provided(&self) -> bool {
        matches!(self, Value::NotProvided)
    }

    /// Whether the value is a number or a text holding a decimal number.
    ///
    /// ```
    /// use rulecheck::Value;
    ///
    /// assert!(Value::from(7).is_numeric());
    /// assert!(Value::from(" -1.5e3 ").is_numeric());
    /// assert!(!Value::from("abc").is_numeric());
    /// assert!(!Value::from(true).is_numeric());
    /// ```
    pub fn is_numeric(&self) -> bool {
        match self {
            Value::Int(_) | Value::Float(_) => true,
            Value::Text(text) => NUMERIC_REGEX.is_match(text),
            Value::NotProvided | Value::Null | Value::Bool(_) => false,
        }
    }

    /// Text view used for pattern matching.
    ///
    /// Numbers are rendered in decimal. The sentinel, nulls and booleans have no
    /// text and return `None`.
    ///
    /// ```
    /// use rulecheck::Value;
    ///
    /// assert_eq!(Value::from("abc").as_text().as_deref(), Some("abc"));
    /// assert_eq!(Value::from(12).as_text().as_deref(), Some("12"));
    /// assert_eq!(Value::NotProvided.as_text(), None);
    /// ```
    pub fn as_text(&self) -> Option<Cow<'_, str>> {
        match self {
            Value::Text(text) => Some(Cow::Borrowed(text.as_str())),
            Value::Int(n) => Some(Cow::Owned(n.to_string())),
            Value::Float(n) => Some(Cow::Owned(n.to_string())),
            Value::NotProvided | Value::Null | Value::Bool(_) => None,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::NotProvided => write!(f, "<not provided>"),
            Value::Null => write!(f, "null"),
            Value::Bool(b) => write!(f, "{}", b),
            Value::Int(n) => write!(f, "{}", n),
            Value::Float(n) => write!(f, "{}", n),
            Value::Text(text) => write!(f, "{:?}", text),
        }
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::Text(value.to_string())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::Text(value)
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Value::Bool(value)
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Value::Float(value)
    }
}

impl From<f32> for Value {
    fn from(value: f32) -> Self {
        Value::Float(f64::from(value))
    }
}

macro_rules! impl_from_int {
    ($($t:ty),*) => {
        $(
            impl From<$t> for Value {
                fn from(value: $t) -> Self {
                    Value::Int(i64::from(value))
                }
            }
        )*
    };
}

impl_from_int!(i8, i16, i32, i64, u8, u16, u32);

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(value: Option<T>) -> Self {
        value.map_or(Value::NotProvided, Into::into)
    }
}
