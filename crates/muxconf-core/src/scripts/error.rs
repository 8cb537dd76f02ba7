use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ScriptError {
    #[error("Script '{0}' is referenced but was never defined")]
    UnknownScript(String),
}
