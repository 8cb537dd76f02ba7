use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EmitterError {
    /// Embedded scripts are extracted from the config with `cut | sh`, so a
    /// bare back-tick would be executed.
    #[error("Un-escaped back-tick in generated line while embedded scripts are used: {0}")]
    UnescapedBacktick(String),
}
