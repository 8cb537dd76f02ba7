//! # Kernel Errors
//!
//! [`Error`] wraps every subsystem error so the generator and the binary can
//! propagate with `?`.
use std::path::PathBuf;
use std::result::Result as StdResult;

use thiserror::Error as ThisError;

use crate::emitter::error::EmitterError;
use crate::inheritance::error::InheritanceError;
use crate::plugin_system::error::PluginSystemError;
use crate::scripts::error::ScriptError;
use crate::storage::error::StorageSystemError;
use crate::version::error::VersionError;

#[derive(Debug, ThisError)]
pub enum Error {
    #[error("Version error: {0}")]
    Version(#[from] VersionError),

    #[error("Emitter error: {0}")]
    Emitter(#[from] EmitterError),

    #[error("Plugin system error: {0}")]
    PluginSystem(#[from] PluginSystemError),

    #[error("Inheritance error: {0}")]
    Inheritance(#[from] InheritanceError),

    #[error("Script error: {0}")]
    Script(#[from] ScriptError),

    #[error("Storage system error: {0}")]
    StorageSystem(#[from] StorageSystemError),

    /// Generic error with message
    #[error("Error: {0}")]
    Other(String),
}

/// Shorthand for Result with our Error type
pub type Result<T> = StdResult<T, Error>;

impl From<&str> for Error {
    fn from(msg: &str) -> Self {
        Error::Other(msg.to_string())
    }
}

impl From<String> for Error {
    fn from(msg: String) -> Self {
        Error::Other(msg)
    }
}

impl Error {
    /// Wraps an I/O failure with the operation and path it happened on
    pub fn io(source: std::io::Error, operation: impl Into<String>, path: PathBuf) -> Self {
        Error::StorageSystem(StorageSystemError::io(source, operation, path))
    }
}
