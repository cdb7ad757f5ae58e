//! Rule parameter schemas and binding
//!
//! Every configurable rule declares an ordered list of [`ParamSpec`] slots.
//! Raw positional strings (from the grammar, or passed directly) are bound to
//! those slots at configure time, parsed into typed [`ParamValue`]s, and
//! rejected immediately if they are missing or malformed.
//!
//! # Example
//!
//! ```
//! use rulecheck::params::{ParamKind, ParamSpec, Params};
//!
//! const SCHEMA: &[ParamSpec] = &[
//!     ParamSpec::required("min", ParamKind::Integer),
//!     ParamSpec::with_default("unit", ParamKind::Text, "chars"),
//! ];
//!
//! let params = Params::bind("Length", SCHEMA, &["3"]).unwrap();
//! assert_eq!(params.integer("min"), Some(3));
//! assert_eq!(params.text("unit"), Some("chars"));
//!
//! assert!(Params::bind("Length", SCHEMA, &["three"]).is_err());
//! ```

use std::borrow::Cow;

use regex::Regex;

use crate::error::RuleError;

/// Delimiters accepted around a regular expression literal such as `/^[a-z]+$/i`.
const REGEX_DELIMITERS: &[char] = &['/', '#', '~', '%', '@', '!'];

/// The type a parameter slot parses its raw string into.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParamKind {
    /// Kept verbatim.
    Text,
    /// A signed 64-bit integer.
    Integer,
    /// A regular expression, bare (`^\d+$`) or delimited with flags (`/^ab$/i`).
    Regex,
}

impl ParamKind {
    fn parse(self, rule: &str, param: &str, raw: &str) -> Result<ParamValue, RuleError> {
        let invalid = |reason: String| RuleError::InvalidParameter {
            rule: rule.to_string(),
            param: param.to_string(),
            value: raw.to_string(),
            reason,
        };

        match self {
            ParamKind::Text => Ok(ParamValue::Text(raw.to_string())),
            ParamKind::Integer => raw
                .trim()
                .parse::<i64>()
                .map(ParamValue::Integer)
                .map_err(|e| invalid(e.to_string())),
            ParamKind::Regex => compile_regex_literal(raw)
                .map(ParamValue::Regex)
                .map_err(invalid),
        }
    }
}

/// One declared parameter slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParamSpec {
    /// Slot name, used to look the bound value up.
    pub name: &'static str,
    /// What the raw string is parsed into.
    pub kind: ParamKind,
    /// Whether binding fails when the slot is not supplied and has no default.
    pub required: bool,
    /// Raw default used when the slot is not supplied.
    pub default: Option<&'static str>,
    /// Swallow every remaining raw parameter, re-joined with `,`.
    pub rest: bool,
}

impl ParamSpec {
    /// A slot that must be supplied.
    pub const fn required(name: &'static str, kind: ParamKind) -> Self {
        ParamSpec {
            name,
            kind,
            required: true,
            default: None,
            rest: false,
        }
    }

    /// A slot that may be left unbound.
    pub const fn optional(name: &'static str, kind: ParamKind) -> Self {
        ParamSpec {
            name,
            kind,
            required: false,
            default: None,
            rest: false,
        }
    }

    /// A slot that falls back to `default` when not supplied.
    pub const fn with_default(name: &'static str, kind: ParamKind, default: &'static str) -> Self {
        ParamSpec {
            name,
            kind,
            required: false,
            default: Some(default),
            rest: false,
        }
    }

    /// Make this slot take all remaining raw parameters.
    ///
    /// Only meaningful on the last slot. The grammar splits parameters on `,`,
    /// so this lets an expression such as `^\d{1,3}$` reach the rule intact.
    pub const fn rest(mut self) -> Self {
        self.rest = true;
        self
    }
}

/// A parsed parameter value.
#[derive(Debug, Clone)]
pub enum ParamValue {
    /// Verbatim text
    Text(String),
    /// Parsed integer
    Integer(i64),
    /// Compiled expression
    Regex(Regex),
}

/// Parameters bound to a rule's schema, by slot name.
#[derive(Debug, Clone, Default)]
pub struct Params {
    values: Vec<(&'static str, ParamValue)>,
}

impl Params {
    /// Bind raw positional parameters to `schema`, in declaration order.
    ///
    /// Surplus parameters are ignored. Missing required slots and unparsable
    /// values fail with a [`RuleError`] naming `rule`.
    pub fn bind<S: AsRef<str>>(
        rule: &str,
        schema: &[ParamSpec],
        raw: &[S],
    ) -> Result<Self, RuleError> {
        let mut values = Vec::with_capacity(schema.len());
        let mut consumed = 0;

        for (index, spec) in schema.iter().enumerate() {
            let supplied = if spec.rest && index < raw.len() {
                consumed = raw.len();
                let joined: Vec<&str> = raw[index..].iter().map(|s| s.as_ref()).collect();
                Some(Cow::Owned(joined.join(",")))
            } else {
                raw.get(index).map(|s| {
                    consumed = index + 1;
                    Cow::Borrowed(s.as_ref())
                })
            };

            let text = match supplied.or_else(|| spec.default.map(Cow::Borrowed)) {
                Some(text) => text,
                None if spec.required => {
                    return Err(RuleError::MissingParameter {
                        rule: rule.to_string(),
                        param: spec.name.to_string(),
                    })
                }
                None => continue,
            };

            values.push((spec.name, spec.kind.parse(rule, spec.name, &text)?));
        }

        if raw.len() > consumed {
            #[cfg(feature = "tracing")]
            tracing::debug!(
                rule,
                ignored = raw.len() - consumed,
                "Ignoring surplus rule parameters"
            );
        }

        Ok(Params { values })
    }

    /// Look up a bound value by slot name.
    pub fn get(&self, name: &str) -> Option<&ParamValue> {
        self.values
            .iter()
            .find(|(slot, _)| *slot == name)
            .map(|(_, value)| value)
    }

    /// Bound text value, if the slot is a bound `Text`.
    pub fn text(&self, name: &str) -> Option<&str> {
        match self.get(name) {
            Some(ParamValue::Text(text)) => Some(text),
            _ => None,
        }
    }

    /// Bound integer value, if the slot is a bound `Integer`.
    pub fn integer(&self, name: &str) -> Option<i64> {
        match self.get(name) {
            Some(ParamValue::Integer(n)) => Some(*n),
            _ => None,
        }
    }

    /// Bound expression, if the slot is a bound `Regex`.
    pub fn regex(&self, name: &str) -> Option<&Regex> {
        match self.get(name) {
            Some(ParamValue::Regex(re)) => Some(re),
            _ => None,
        }
    }

    /// Number of bound slots.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether nothing was bound.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

/// Compile a bare or delimited regular expression literal.
///
/// `/body/flags` (or `#`, `~`, `%`, `@`, `!` as delimiter) has its flags turned
/// into an inline group; anything else is compiled as written.
fn compile_regex_literal(literal: &str) -> Result<Regex, String> {
    let (body, flags) = split_delimited(literal).unwrap_or((literal, ""));

    let mut inline = String::new();
    for flag in flags.chars() {
        match flag {
            'i' | 'm' | 's' | 'x' | 'U' => {
                if !inline.contains(flag) {
                    inline.push(flag);
                }
            }
            // Unicode mode is always on.
            'u' => {}
            other => return Err(format!("unsupported pattern flag '{}'", other)),
        }
    }

    let source = if inline.is_empty() {
        Cow::Borrowed(body)
    } else {
        Cow::Owned(format!("(?{}){}", inline, body))
    };

    Regex::new(&source).map_err(|e| e.to_string())
}

fn split_delimited(literal: &str) -> Option<(&str, &str)> {
    let delimiter = literal
        .chars()
        .next()
        .filter(|c| REGEX_DELIMITERS.contains(c))?;
    let close = literal.rfind(delimiter)?;
    if close == 0 {
        return None;
    }

    let flags = &literal[close + 1..];
    flags
        .chars()
        .all(|c| c.is_ascii_alphabetic())
        .then(|| (&literal[1..close], flags))
}
