use std::path::{Path, PathBuf};

use log::info;

use crate::kernel::error::Result;
use crate::plugin_system::error::PluginSystemError;
use crate::storage::provider::StorageProvider;

/// Where plugins for a given config file are installed
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PluginEnvironment {
    plugins_dir: PathBuf,
    /// `XDG_CONFIG_HOME="…" ` prefix handed to tpm, empty for the default
    /// config locations
    tpm_env: String,
}

impl PluginEnvironment {
    /// Configs directly in `home` use `~/.tmux/plugins` (`~/.tmate/plugins`
    /// for tmate); anything else uses `<xdg or parent of the conf dir>/tmux/plugins`.
    pub fn resolve(conf_file: &Path, home: &Path, xdg_config_home: Option<&Path>) -> Self {
        let location = conf_file.parent().unwrap_or(home);
        if location == home {
            let is_tmate = conf_file.to_string_lossy().contains("tmate");
            let sub = if is_tmate { ".tmate" } else { ".tmux" };
            return Self {
                plugins_dir: home.join(sub).join("plugins"),
                tpm_env: String::new(),
            };
        }

        let conf_base = match xdg_config_home {
            Some(xdg) => xdg.to_path_buf(),
            None => location.parent().unwrap_or(location).to_path_buf(),
        };
        Self {
            plugins_dir: conf_base.join("tmux").join("plugins"),
            tpm_env: format!("XDG_CONFIG_HOME=\"{}\" ", conf_base.display()),
        }
    }

    pub fn plugins_dir(&self) -> &Path {
        &self.plugins_dir
    }

    pub fn tpm_env(&self) -> &str {
        &self.tpm_env
    }

    /// Names of the directories currently in the plugin dir
    pub fn installed(&self, provider: &dyn StorageProvider) -> Result<Vec<String>> {
        if !provider.is_dir(&self.plugins_dir) {
            return Ok(Vec::new());
        }
        let mut names: Vec<String> = provider
            .read_dir(&self.plugins_dir)?
            .into_iter()
            .filter(|p| provider.is_dir(p))
            .filter_map(|p| p.file_name().map(|n| n.to_string_lossy().into_owned()))
            .collect();
        names.sort();
        Ok(names)
    }

    /// Removes every installed plugin.
    ///
    /// The plugin dir must contain `tmux/`, anything else is refused.
    pub fn clear_plugins(&self, provider: &dyn StorageProvider) -> Result<Vec<String>> {
        if !self.plugins_dir.to_string_lossy().contains("tmux/") {
            return Err(PluginSystemError::SuspiciousPluginDir(self.plugins_dir.clone()).into());
        }
        if !provider.is_dir(&self.plugins_dir) {
            return Ok(Vec::new());
        }

        let mut removed = Vec::new();
        for path in provider.read_dir(&self.plugins_dir)? {
            let name = path
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_default();
            info!("removing plugin {}", name);
            if provider.is_dir(&path) {
                provider.remove_dir_all(&path)?;
            } else {
                provider.remove_file(&path)?;
            }
            removed.push(name);
        }
        removed.sort();
        Ok(removed)
    }
}
