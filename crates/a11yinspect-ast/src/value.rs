//! Static resolution of attribute values.

use std::borrow::Cow;
use std::fmt;

use serde::Deserialize;
use serde::Serialize;

use crate::tree::Expression;
use crate::tree::Initializer;

/// A statically known value.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Literal {
    /// The `null` literal.
    #[default]
    Null,
    /// A boolean literal.
    Boolean(bool),
    /// A numeric literal.
    Number(f64),
    /// A string literal.
    String(String),
}

impl Literal {
    /// Gets the literal as a string slice if it is a string.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(s) => Some(s),
            _ => None,
        }
    }

    /// Gets the literal as a boolean if it is a boolean.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Boolean(b) => Some(*b),
            _ => None,
        }
    }

    /// Determines if the literal is truthy.
    ///
    /// Empty strings, `0`, `NaN`, `false` and `null` are falsy.
    pub fn is_truthy(&self) -> bool {
        match self {
            Self::Null => false,
            Self::Boolean(b) => *b,
            Self::Number(n) => *n != 0.0 && !n.is_nan(),
            Self::String(s) => !s.is_empty(),
        }
    }

    /// Determines if the literal is the string `"true"` or the boolean `true`.
    pub fn is_true(&self) -> bool {
        matches!(self, Self::Boolean(true)) || self.as_str() == Some("true")
    }

    /// Determines if the literal is the string `"false"` or the boolean
    /// `false`.
    pub fn is_false(&self) -> bool {
        matches!(self, Self::Boolean(false)) || self.as_str() == Some("false")
    }

    /// Determines if the literal is a string that is empty after trimming.
    pub fn is_blank(&self) -> bool {
        self.as_str().is_some_and(|s| s.trim().is_empty())
    }

    /// Renders the literal as rendered text.
    ///
    /// Falsy values render as nothing.
    pub fn to_text(&self) -> Cow<'_, str> {
        match self {
            Self::String(s) => Cow::Borrowed(s),
            _ if !self.is_truthy() => Cow::Borrowed(""),
            _ => Cow::Owned(self.to_string()),
        }
    }

    /// Parses a leading integer from the literal.
    ///
    /// Strings are parsed after leading whitespace with an optional sign and
    /// stop at the first non-digit; numbers are truncated.
    pub fn to_integer(&self) -> Option<i64> {
        match self {
            Self::Number(n) if n.is_finite() => Some(n.trunc() as i64),
            Self::String(s) => {
                let s = s.trim_start();
                let (negative, digits) = match s.as_bytes().first() {
                    Some(b'-') => (true, &s[1..]),
                    Some(b'+') => (false, &s[1..]),
                    _ => (false, s),
                };

                let end = digits
                    .find(|c: char| !c.is_ascii_digit())
                    .unwrap_or(digits.len());
                let value: i64 = digits[..end].parse().ok()?;
                Some(if negative { -value } else { value })
            }
            _ => None,
        }
    }
}

impl fmt::Display for Literal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Null => write!(f, "null"),
            Self::Boolean(b) => write!(f, "{b}"),
            Self::Number(n) => write!(f, "{n}"),
            Self::String(s) => write!(f, "{s}"),
        }
    }
}

impl From<&str> for Literal {
    fn from(value: &str) -> Self {
        Self::String(value.to_string())
    }
}

impl From<String> for Literal {
    fn from(value: String) -> Self {
        Self::String(value)
    }
}

impl From<bool> for Literal {
    fn from(value: bool) -> Self {
        Self::Boolean(value)
    }
}

impl From<f64> for Literal {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<i32> for Literal {
    fn from(value: i32) -> Self {
        Self::Number(value.into())
    }
}

/// The statically resolved value of an attribute.
///
/// A [`Dynamic`](AttributeValue::Dynamic) value can neither pass nor fail a
/// check that depends on its content; such checks must abstain.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AttributeValue<'a> {
    /// The attribute is not present.
    Absent,
    /// The attribute is present without an initializer.
    Bare,
    /// The attribute has a statically known value.
    ///
    /// Both `alt="x"` and `alt={"x"}` resolve to a literal.
    Literal(&'a Literal),
    /// The attribute's value is an expression that cannot be known
    /// statically.
    Dynamic,
}

impl<'a> AttributeValue<'a> {
    /// Resolves an optional attribute initializer.
    ///
    /// The outer option is whether the attribute is present at all.
    pub fn resolve(initializer: Option<Option<&'a Initializer>>) -> Self {
        match initializer {
            None => Self::Absent,
            Some(None) => Self::Bare,
            Some(Some(Initializer::Literal(literal))) => Self::Literal(literal),
            Some(Some(Initializer::Expression { expression })) => match expression {
                Expression::Literal { value } => Self::Literal(value),
                Expression::Dynamic { .. } => Self::Dynamic,
            },
        }
    }

    /// Determines if the attribute is absent.
    pub fn is_absent(&self) -> bool {
        matches!(self, Self::Absent)
    }

    /// Determines if the attribute is present, with or without a value.
    pub fn is_present(&self) -> bool {
        !self.is_absent()
    }

    /// Determines if the attribute is present with an initializer.
    pub fn has_value(&self) -> bool {
        matches!(self, Self::Literal(_) | Self::Dynamic)
    }

    /// Determines if the value is dynamic.
    pub fn is_dynamic(&self) -> bool {
        matches!(self, Self::Dynamic)
    }

    /// Gets the literal value, if statically known.
    pub fn literal(&self) -> Option<&'a Literal> {
        match self {
            Self::Literal(literal) => Some(literal),
            _ => None,
        }
    }

    /// Gets the literal string value, if statically known to be a string.
    pub fn as_str(&self) -> Option<&'a str> {
        self.literal().and_then(Literal::as_str)
    }

    /// Determines if the value is statically `"true"` or `true`.
    pub fn is_true(&self) -> bool {
        self.literal().is_some_and(Literal::is_true)
    }

    /// Determines if the value is a literal string that is blank.
    pub fn is_blank(&self) -> bool {
        self.literal().is_some_and(Literal::is_blank)
    }

    /// Determines if the value is a truthy literal.
    pub fn is_truthy(&self) -> bool {
        self.literal().is_some_and(Literal::is_truthy)
    }

    /// Determines if the value is a falsy literal.
    pub fn is_falsy(&self) -> bool {
        self.literal().is_some_and(|l| !l.is_truthy())
    }
}
