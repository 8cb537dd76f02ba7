use std::fmt;
use std::str::FromStr;

use log::info;

use crate::kernel::constants::{DEFAULT_PLUGIN_HANDLER, MANUAL_PLUGIN_HANDLER, PLUGIN_MANAGER_MIN_VERSION};
use crate::plugin_system::error::PluginSystemError;
use crate::version::context::VersionContext;

/// How used plugins get installed and started
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PluginHandler {
    /// tpm or a compatible fork, given as `owner/repo`
    Tpm(String),
    /// Built-in script cloning each plugin and running its init file
    Manual,
    /// No plugin support at all
    Disabled,
}

impl Default for PluginHandler {
    fn default() -> Self {
        PluginHandler::Tpm(DEFAULT_PLUGIN_HANDLER.to_string())
    }
}

impl PluginHandler {
    /// tpm cannot drive tmux older than 1.9, use the manual installer there.
    pub fn for_target(self, ctx: &VersionContext) -> Self {
        match self {
            PluginHandler::Tpm(repo) if !ctx.is_at_least(PLUGIN_MANAGER_MIN_VERSION) => {
                info!("{} needs tmux 1.9 or later, using manual plugin handling", repo);
                PluginHandler::Manual
            }
            other => other,
        }
    }

    pub fn is_disabled(&self) -> bool {
        matches!(self, PluginHandler::Disabled)
    }
}

impl FromStr for PluginHandler {
    type Err = PluginSystemError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() {
            return Ok(PluginHandler::Disabled);
        }
        if s == MANUAL_PLUGIN_HANDLER {
            return Ok(PluginHandler::Manual);
        }
        match s.split_once('/') {
            Some((owner, repo))
                if !owner.is_empty()
                    && !repo.is_empty()
                    && !repo.contains('/')
                    && !s.contains(char::is_whitespace) =>
            {
                Ok(PluginHandler::Tpm(s.to_string()))
            }
            _ => Err(PluginSystemError::InvalidHandler(s.to_string())),
        }
    }
}

impl fmt::Display for PluginHandler {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PluginHandler::Tpm(repo) => write!(f, "{}", repo),
            PluginHandler::Manual => write!(f, "{}", MANUAL_PLUGIN_HANDLER),
            PluginHandler::Disabled => Ok(()),
        }
    }
}
