use std::collections::HashSet;

use crate::scripts::spec::ScriptSpec;

/// Decides which script definitions are accepted
#[derive(Debug, Default, Clone)]
pub struct ScriptRegistry {
    defined: HashSet<String>,
    built_in_accepted: HashSet<String>,
}

impl ScriptRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// User scripts always register. A built-in registers once, and only if
    /// no user script took its name.
    pub fn accept(&mut self, spec: &ScriptSpec) -> bool {
        if !spec.built_in {
            self.defined.insert(spec.name.clone());
            return true;
        }
        if self.defined.contains(&spec.name) {
            return false;
        }
        self.built_in_accepted.insert(spec.name.clone())
    }

    pub fn is_known(&self, name: &str) -> bool {
        self.defined.contains(name) || self.built_in_accepted.contains(name)
    }
}
