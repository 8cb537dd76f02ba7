use serde::{Deserialize, Serialize};

/// A named shell function
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScriptSpec {
    pub name: String,
    pub lines: Vec<String>,
    #[serde(default)]
    pub use_bash: bool,
    /// Scripts provided by the generator itself; a user script of the same
    /// name takes precedence.
    #[serde(skip)]
    pub built_in: bool,
}

impl ScriptSpec {
    pub fn new(name: impl Into<String>, lines: Vec<String>) -> Self {
        Self {
            name: name.into(),
            lines,
            use_bash: false,
            built_in: false,
        }
    }

    pub fn bash(mut self) -> Self {
        self.use_bash = true;
        self
    }

    pub fn built_in(mut self) -> Self {
        self.built_in = true;
        self
    }
}
