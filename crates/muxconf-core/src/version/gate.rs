use std::fmt;

use serde::{Deserialize, Serialize};

use crate::version::error::VersionError;
use crate::version::value::{VersionLiteral, VersionValue};

/// A minimum-version requirement attached to a statement or plugin.
///
/// `Skip` is the sentinel written as a negative version (conventionally `-1`).
/// It is never satisfied, and plugins carrying it are reported as skipped
/// rather than ignored.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "VersionLiteral", into = "VersionLiteral")]
pub enum VersionGate {
    Minimum(VersionValue),
    Skip,
}

impl VersionGate {
    /// Literal written for the skip sentinel
    pub const SKIP_LITERAL: i64 = -1;

    /// Builds a gate from any literal shape; negative literals yield [`VersionGate::Skip`].
    pub fn minimum<L: Into<VersionLiteral>>(literal: L) -> Result<Self, VersionError> {
        let literal = literal.into();
        if literal.is_negative() {
            return Ok(VersionGate::Skip);
        }
        Ok(VersionGate::Minimum(VersionValue::parse(literal)?))
    }

    pub fn at_least(version: VersionValue) -> Self {
        VersionGate::Minimum(version)
    }

    pub fn skip() -> Self {
        VersionGate::Skip
    }

    pub fn is_skip(&self) -> bool {
        matches!(self, VersionGate::Skip)
    }

    pub fn minimum_version(&self) -> Option<&VersionValue> {
        match self {
            VersionGate::Minimum(v) => Some(v),
            VersionGate::Skip => None,
        }
    }

    /// Inclusive check: a version equal to the minimum satisfies the gate.
    pub fn is_satisfied(&self, current: &VersionValue) -> bool {
        match self {
            VersionGate::Minimum(minimum) => current >= minimum,
            VersionGate::Skip => false,
        }
    }
}

impl fmt::Display for VersionGate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            VersionGate::Minimum(v) => write!(f, "{}", v),
            VersionGate::Skip => write!(f, "{}", Self::SKIP_LITERAL),
        }
    }
}

impl TryFrom<VersionLiteral> for VersionGate {
    type Error = VersionError;

    fn try_from(literal: VersionLiteral) -> Result<Self, Self::Error> {
        VersionGate::minimum(literal)
    }
}

impl From<VersionGate> for VersionLiteral {
    fn from(gate: VersionGate) -> Self {
        match gate {
            VersionGate::Minimum(v) => VersionLiteral::from(&v),
            VersionGate::Skip => VersionLiteral::Integer(VersionGate::SKIP_LITERAL),
        }
    }
}
