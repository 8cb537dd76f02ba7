use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InheritanceError {
    #[error("Statement group '{0}' is declared twice in the same profile")]
    DuplicateGroup(String),

    #[error("Script '{0}' is declared twice in the same profile")]
    DuplicateScript(String),

    #[error("Profile inheritance cycle: {}", .0.join(" -> "))]
    BaseCycle(Vec<String>),
}
