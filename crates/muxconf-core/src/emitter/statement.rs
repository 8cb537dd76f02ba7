use serde::{Deserialize, Serialize};

use crate::version::error::VersionError;
use crate::version::gate::VersionGate;
use crate::version::value::VersionLiteral;

/// One line or block of config text, optionally gated on a minimum version.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConditionalStatement {
    pub text: String,
    #[serde(default, rename = "min_version", skip_serializing_if = "Option::is_none")]
    pub gate: Option<VersionGate>,
}

impl ConditionalStatement {
    /// A statement that is always emitted
    pub fn always(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            gate: None,
        }
    }

    pub fn gated(text: impl Into<String>, gate: VersionGate) -> Self {
        Self {
            text: text.into(),
            gate: Some(gate),
        }
    }

    /// Gated on a minimum version given in any literal shape
    pub fn requires<L: Into<VersionLiteral>>(
        text: impl Into<String>,
        minimum: L,
    ) -> Result<Self, VersionError> {
        Ok(Self::gated(text, VersionGate::minimum(minimum)?))
    }
}

impl From<&str> for ConditionalStatement {
    fn from(text: &str) -> Self {
        ConditionalStatement::always(text)
    }
}

impl From<String> for ConditionalStatement {
    fn from(text: String) -> Self {
        ConditionalStatement::always(text)
    }
}
