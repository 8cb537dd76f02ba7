use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::version::error::VersionError;

/// The literal shapes a version may be written in.
///
/// Profiles and callers may hand over `3`, `3.2` or `"3.3a"`; all of them are
/// normalized into a [`VersionValue`] by [`VersionValue::parse`] and never
/// inspected again.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum VersionLiteral {
    Integer(i64),
    Decimal(f64),
    Text(String),
}

impl VersionLiteral {
    /// Negative literals are reserved for the skip sentinel.
    pub fn is_negative(&self) -> bool {
        match self {
            VersionLiteral::Integer(n) => *n < 0,
            VersionLiteral::Decimal(d) => *d < 0.0,
            VersionLiteral::Text(s) => {
                let s = s.trim();
                s.starts_with('-') && s[1..].parse::<f64>().is_ok()
            }
        }
    }
}

impl fmt::Display for VersionLiteral {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            VersionLiteral::Integer(n) => write!(f, "{}", n),
            VersionLiteral::Decimal(d) => write!(f, "{}", d),
            VersionLiteral::Text(s) => write!(f, "{}", s),
        }
    }
}

impl From<i64> for VersionLiteral {
    fn from(value: i64) -> Self {
        VersionLiteral::Integer(value)
    }
}

impl From<i32> for VersionLiteral {
    fn from(value: i32) -> Self {
        VersionLiteral::Integer(i64::from(value))
    }
}

impl From<u32> for VersionLiteral {
    fn from(value: u32) -> Self {
        VersionLiteral::Integer(i64::from(value))
    }
}

impl From<f64> for VersionLiteral {
    fn from(value: f64) -> Self {
        VersionLiteral::Decimal(value)
    }
}

impl From<&str> for VersionLiteral {
    fn from(value: &str) -> Self {
        VersionLiteral::Text(value.to_string())
    }
}

impl From<String> for VersionLiteral {
    fn from(value: String) -> Self {
        VersionLiteral::Text(value)
    }
}

impl From<&VersionValue> for VersionLiteral {
    fn from(value: &VersionValue) -> Self {
        VersionLiteral::Text(value.to_text().to_string())
    }
}

/// A tmux version such as `3.2` or `3.3a`.
///
/// Ordering compares `(major, minor)` numerically, then the suffix, where no
/// suffix sorts before any suffix. Equality ignores how the value was written,
/// so `3`, `3.0` and `"3.0"` are all equal.
#[derive(Debug, Clone)]
pub struct VersionValue {
    major: u32,
    minor: u32,
    suffix: Option<char>,
    /// Text used for display; the exact input for string literals
    text: String,
}

impl VersionValue {
    /// Creates a suffix-less version
    pub fn new(major: u32, minor: u32) -> Self {
        Self {
            major,
            minor,
            suffix: None,
            text: format!("{}.{}", major, minor),
        }
    }

    /// Parses any of the accepted literal shapes.
    pub fn parse<L: Into<VersionLiteral>>(literal: L) -> Result<Self, VersionError> {
        match literal.into() {
            VersionLiteral::Integer(n) => {
                let major = u32::try_from(n)
                    .map_err(|_| VersionError::MalformedVersion(n.to_string()))?;
                Ok(Self::new(major, 0))
            }
            VersionLiteral::Decimal(d) => {
                if !d.is_finite() || d < 0.0 {
                    return Err(VersionError::MalformedVersion(d.to_string()));
                }
                // -0.0 passes the sign check
                let d = d.abs();
                if d.fract() == 0.0 {
                    // 3.0 formats as "3"
                    Self::parse_text(&format!("{}.0", d))
                } else {
                    Self::parse_text(&d.to_string())
                }
            }
            VersionLiteral::Text(s) => Self::parse_text(&s),
        }
    }

    /// Parses `major.minor` optionally followed by one lowercase letter
    fn parse_text(text: &str) -> Result<Self, VersionError> {
        let malformed = || VersionError::MalformedVersion(text.to_string());

        let (major_part, rest) = text.split_once('.').ok_or_else(malformed)?;
        let (minor_part, suffix) = match rest.char_indices().last() {
            Some((idx, c)) if c.is_ascii_lowercase() => (&rest[..idx], Some(c)),
            _ => (rest, None),
        };

        let parse_part = |part: &str| -> Result<u32, VersionError> {
            if part.is_empty() || !part.bytes().all(|b| b.is_ascii_digit()) {
                return Err(malformed());
            }
            part.parse::<u32>().map_err(|_| malformed())
        };

        Ok(Self {
            major: parse_part(major_part)?,
            minor: parse_part(minor_part)?,
            suffix,
            text: text.to_string(),
        })
    }

    pub fn major(&self) -> u32 {
        self.major
    }

    pub fn minor(&self) -> u32 {
        self.minor
    }

    pub fn suffix(&self) -> Option<char> {
        self.suffix
    }

    /// Returns the version as written, e.g. `"3.3a"`
    pub fn to_text(&self) -> &str {
        &self.text
    }

    fn key(&self) -> (u32, u32, Option<char>) {
        (self.major, self.minor, self.suffix)
    }
}

impl PartialEq for VersionValue {
    fn eq(&self, other: &Self) -> bool {
        self.key() == other.key()
    }
}

impl Eq for VersionValue {}

impl Hash for VersionValue {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.key().hash(state);
    }
}

impl PartialOrd for VersionValue {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for VersionValue {
    fn cmp(&self, other: &Self) -> Ordering {
        self.key().cmp(&other.key())
    }
}

impl fmt::Display for VersionValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}

impl FromStr for VersionValue {
    type Err = VersionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        VersionValue::parse_text(s)
    }
}

impl TryFrom<VersionLiteral> for VersionValue {
    type Error = VersionError;

    fn try_from(literal: VersionLiteral) -> Result<Self, Self::Error> {
        VersionValue::parse(literal)
    }
}
