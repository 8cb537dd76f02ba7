//! Errors raised while resolving and deploying plugins.
use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PluginSystemError {
    #[error("Plugin '{0}' is defined more than once")]
    DuplicatePlugin(String),

    #[error("Invalid plugin handler '{0}': expected \"\", \"manual\" or an owner/repo")]
    InvalidHandler(String),

    #[error("Plugins display mode must be 1, 2 or 3, got {0}")]
    InvalidDisplayMode(u8),

    #[error("Refusing to clear plugins due to suspicious plugin dir: {0}")]
    SuspiciousPluginDir(PathBuf),
}
