//! # Storage System Errors
//!
//! [`StorageSystemError`] covers I/O failures and profile documents that
//! cannot be parsed.
use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum StorageSystemError {
    #[error("I/O error during operation '{operation}' on path '{path}': {source}")]
    Io {
        path: PathBuf,
        operation: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Deserialization from '{format}' failed for '{path}': {source}")]
    DeserializationError {
        format: String,
        path: PathBuf,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync + 'static>,
    },

    #[error("Unsupported profile format: {0}")]
    UnsupportedConfigFormat(String),

    #[error("Storage operation '{operation}' failed for path '{path}': {message}")]
    OperationFailed {
        operation: String,
        path: PathBuf,
        message: String,
    },
}

impl StorageSystemError {
    pub fn io(source: std::io::Error, operation: impl Into<String>, path: PathBuf) -> Self {
        StorageSystemError::Io {
            source,
            operation: operation.into(),
            path,
        }
    }
}
