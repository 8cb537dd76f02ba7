//! # Version Errors
//!
//! Failures while parsing version literals or a binary's version report.
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum VersionError {
    /// The literal is not an integer, a decimal or a `major.minor[letter]` string.
    #[error("Malformed version '{0}': expected major.minor with an optional trailing letter")]
    MalformedVersion(String),

    /// The probed command did not identify itself as tmux or tmate.
    #[error("'{0}' does not look like a tmux version report")]
    NotMultiplexer(String),

    /// The binary identified itself but its version could not be reduced to major.minor.
    #[error("Unsupported tmux version '{0}'")]
    UnsupportedBinaryVersion(String),
}
