//! The rule string grammar
//!
//! ```text
//! spec      := segment ('|' segment)*
//! segment   := name (':' paramList)?
//! paramList := param (',' param)*
//! name      := word (('_' | '-') word)*
//! ```
//!
//! Names are case-insensitive: `pattern`, `Pattern`, `PATTERN` and `some_rule`,
//! `some-rule`, `SomeRule` resolve the same way. Only the name is normalized;
//! parameters reach the rule verbatim. A segment splits on its first `:` only,
//! so parameters may themselves contain `:`. A `|` can never appear inside a
//! parameter.
//!
//! # Example
//!
//! ```
//! use rulecheck::grammar;
//!
//! let segments = grammar::parse(r"required|pattern:^\d+$|max_length:10").unwrap();
//! let names: Vec<&str> = segments.iter().map(|s| s.name.as_str()).collect();
//! assert_eq!(names, ["Required", "Pattern", "MaxLength"]);
//! assert_eq!(segments[1].params, [r"^\d+$"]);
//! ```

use std::fmt;

use crate::error::SpecError;

/// A normalized rule name.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RuleName {
    canonical: String,
    key: String,
}

impl RuleName {
    /// Normalize `token`, or `None` if it is not a valid name.
    ///
    /// ```
    /// use rulecheck::grammar::RuleName;
    ///
    /// assert_eq!(RuleName::parse("some-rule").unwrap().as_str(), "SomeRule");
    /// assert_eq!(RuleName::parse(" required ").unwrap().as_str(), "Required");
    /// assert!(RuleName::parse("not a name").is_none());
    /// ```
    pub fn parse(token: &str) -> Option<Self> {
        let token = token.trim();
        if !token
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-')
        {
            return None;
        }

        let canonical: String = token
            .split(['_', '-'])
            .filter(|word| !word.is_empty())
            .map(capitalize)
            .collect();

        if canonical.is_empty() {
            return None;
        }

        let key = canonical.to_ascii_lowercase();
        Some(RuleName { canonical, key })
    }

    /// PascalCase form, e.g. `MaxLength`.
    pub fn as_str(&self) -> &str {
        &self.canonical
    }

    /// Case-folded form used for registry lookups.
    pub fn key(&self) -> &str {
        &self.key
    }
}

impl fmt::Display for RuleName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.canonical)
    }
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_ascii_uppercase().to_string() + chars.as_str(),
        None => String::new(),
    }
}

/// One `name:params` segment of a rule string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Segment {
    /// Normalized rule name
    pub name: RuleName,
    /// Raw positional parameters
    pub params: Vec<String>,
}

impl fmt::Display for Segment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)?;
        if !self.params.is_empty() {
            write!(f, ":{}", self.params.join(","))?;
        }
        Ok(())
    }
}

/// Split a rule string into segments, in order.
///
/// An empty name, or a name with characters outside the grammar, fails with
/// [`SpecError::InvalidRuleName`]. `name:` with nothing after the colon has no
/// parameters.
pub fn parse(spec: &str) -> Result<Vec<Segment>, SpecError> {
    spec.split('|').map(parse_segment).collect()
}

fn parse_segment(segment: &str) -> Result<Segment, SpecError> {
    let (token, raw_params) = segment.split_once(':').unwrap_or((segment, ""));

    let name = RuleName::parse(token).ok_or_else(|| SpecError::InvalidRuleName {
        name: token.to_string(),
        spec: segment.to_string(),
    })?;

    let params = if raw_params.is_empty() {
        Vec::new()
    } else {
        raw_params.split(',').map(str::to_string).collect()
    };

    Ok(Segment { name, params })
}
