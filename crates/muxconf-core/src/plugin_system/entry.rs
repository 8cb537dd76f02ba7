use serde::{Deserialize, Serialize};

use crate::version::error::VersionError;
use crate::version::gate::VersionGate;
use crate::version::value::VersionLiteral;

/// A plugin declaration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PluginEntry {
    /// `owner/repo`, also the sort key
    pub id: String,
    #[serde(rename = "min_version")]
    pub gate: VersionGate,
    /// Plugin settings, written verbatim after the `@plugin` line
    #[serde(default)]
    pub code: String,
}

impl PluginEntry {
    pub fn new(id: impl Into<String>, gate: VersionGate) -> Self {
        Self {
            id: id.into(),
            gate,
            code: String::new(),
        }
    }

    /// Entry gated on a version literal, `-1` meaning skip
    pub fn requires<L: Into<VersionLiteral>>(id: impl Into<String>, literal: L) -> Result<Self, VersionError> {
        Ok(Self::new(id, VersionGate::minimum(literal)?))
    }

    pub fn with_code(mut self, code: impl Into<String>) -> Self {
        self.code = code.into();
        self
    }

    /// The repository name without its owner
    pub fn short_name(&self) -> &str {
        short_name(&self.id)
    }
}

pub(crate) fn short_name(id: &str) -> &str {
    match id.split_once('/') {
        Some((_, name)) => name,
        None => id,
    }
}
