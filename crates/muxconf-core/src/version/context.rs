use crate::version::gate::VersionGate;
use crate::version::value::VersionValue;

/// The version of the installed binary and the version being generated for.
///
/// A config can be requested for another version than the one installed, for
/// instance to check what an older tmux would receive. Every gate is
/// evaluated against [`VersionContext::target`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VersionContext {
    actual: VersionValue,
    target: VersionValue,
}

impl VersionContext {
    pub fn new(actual: VersionValue, requested: Option<VersionValue>) -> Self {
        let target = requested.unwrap_or_else(|| actual.clone());
        Self { actual, target }
    }

    /// Context where the target is the installed version
    pub fn for_version(version: VersionValue) -> Self {
        Self::new(version, None)
    }

    pub fn target(&self) -> &VersionValue {
        &self.target
    }

    pub fn actual(&self) -> &VersionValue {
        &self.actual
    }

    /// True when generating for a version other than the installed one
    pub fn is_forced(&self) -> bool {
        self.actual != self.target
    }

    pub fn satisfies(&self, gate: &VersionGate) -> bool {
        gate.is_satisfied(&self.target)
    }

    /// Checks the target against a fixed `(major, minor)` feature level.
    pub fn is_at_least(&self, (major, minor): (u32, u32)) -> bool {
        self.target >= VersionValue::new(major, minor)
    }
}
