//! Profile documents: user-authored declarations in JSON, YAML or TOML.
//!
//! ```yaml
//! base: ../common.yaml
//! settings:
//!   plugin_handler: manual
//! groups:
//!   - name: navigation
//!     statements:
//!       - text: bind -N "Select pane left" h select-pane -L
//!         min_version: "3.1"
//! plugins:
//!   - id: jaclu/tmux-menus
//!     min_version: "1.8"
//! ```
//!
//! Quote versions in YAML: a bare `3.10` is read as the number 3.1.
use std::collections::HashSet;
use std::path::{Path, PathBuf};

use log::debug;
use serde::{Deserialize, Serialize};

use crate::inheritance::declarations::{Declarations, StatementGroup};
use crate::inheritance::error::InheritanceError;
use crate::inheritance::resolver::InheritanceResolver;
use crate::kernel::error::Result;
use crate::plugin_system::entry::PluginEntry;
use crate::scripts::spec::ScriptSpec;
use crate::storage::error::StorageSystemError;
use crate::storage::provider::StorageProvider;
use crate::utils::fs::normalize;

/// Supported profile formats
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProfileFormat {
    /// JSON format (.json)
    Json,
    /// YAML format (.yaml, .yml) - requires "yaml-config" feature
    #[cfg(feature = "yaml-config")]
    Yaml,
    /// TOML format (.toml) - requires "toml-config" feature
    #[cfg(feature = "toml-config")]
    Toml,
}

impl ProfileFormat {
    pub fn extension(&self) -> &'static str {
        match self {
            ProfileFormat::Json => "json",
            #[cfg(feature = "yaml-config")]
            ProfileFormat::Yaml => "yaml",
            #[cfg(feature = "toml-config")]
            ProfileFormat::Toml => "toml",
        }
    }

    /// Determine format from file extension
    pub fn from_path(path: &Path) -> Option<Self> {
        path.extension()
            .and_then(|ext| ext.to_str())
            .and_then(|ext| match ext.to_lowercase().as_str() {
                "json" => Some(ProfileFormat::Json),
                #[cfg(feature = "yaml-config")]
                "yaml" | "yml" => Some(ProfileFormat::Yaml),
                #[cfg(feature = "toml-config")]
                "toml" => Some(ProfileFormat::Toml),
                _ => None,
            })
    }

    pub fn parse(&self, text: &str, path: &Path) -> Result<ProfileDocument> {
        let parsed: std::result::Result<ProfileDocument, Box<dyn std::error::Error + Send + Sync>> = match self {
            ProfileFormat::Json => serde_json::from_str(text).map_err(Into::into),
            #[cfg(feature = "yaml-config")]
            ProfileFormat::Yaml => serde_yaml::from_str(text).map_err(Into::into),
            #[cfg(feature = "toml-config")]
            ProfileFormat::Toml => toml::from_str(text).map_err(Into::into),
        };
        parsed.map_err(|source| {
            StorageSystemError::DeserializationError {
                format: self.extension().to_string(),
                path: path.to_path_buf(),
                source,
            }
            .into()
        })
    }
}

/// Generator settings a profile may set; unset fields fall back to the base
/// profile, then to the defaults.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ProfileSettings {
    pub plugin_handler: Option<String>,
    pub use_embedded_scripts: Option<bool>,
    pub use_notes_as_comments: Option<bool>,
    pub is_limited_host: Option<bool>,
    /// Key for the edit-config binding, empty string disables it
    pub edit_key: Option<String>,
}

impl ProfileSettings {
    /// Field-wise merge, `derived` wins
    pub fn merged_with(&self, derived: &ProfileSettings) -> ProfileSettings {
        ProfileSettings {
            plugin_handler: derived.plugin_handler.clone().or_else(|| self.plugin_handler.clone()),
            use_embedded_scripts: derived.use_embedded_scripts.or(self.use_embedded_scripts),
            use_notes_as_comments: derived.use_notes_as_comments.or(self.use_notes_as_comments),
            is_limited_host: derived.is_limited_host.or(self.is_limited_host),
            edit_key: derived.edit_key.clone().or_else(|| self.edit_key.clone()),
        }
    }
}

/// One profile file as written
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ProfileDocument {
    /// Profile this one derives from, relative to this file
    #[serde(default)]
    pub base: Option<PathBuf>,
    #[serde(default)]
    pub settings: ProfileSettings,
    #[serde(default)]
    pub groups: Vec<StatementGroup>,
    #[serde(default)]
    pub plugins: Vec<PluginEntry>,
    #[serde(default)]
    pub scripts: Vec<ScriptSpec>,
}

impl ProfileDocument {
    /// Declarations of this document alone, rejecting duplicates
    pub fn declarations(&self) -> Result<Declarations> {
        let mut declarations = Declarations::new();
        for group in &self.groups {
            declarations.add_group(group.clone())?;
        }
        for plugin in &self.plugins {
            declarations.add_plugin(plugin.clone())?;
        }
        for script in &self.scripts {
            declarations.add_script(script.clone())?;
        }
        Ok(declarations)
    }
}

/// A loaded profile chain, folded into one set of declarations
#[derive(Debug, Clone)]
pub struct Profile {
    pub declarations: Declarations,
    pub settings: ProfileSettings,
    /// Files of the chain, root first
    pub sources: Vec<PathBuf>,
}

impl Profile {
    /// The leaf profile, the one given by the user
    pub fn source(&self) -> Option<&Path> {
        self.sources.last().map(PathBuf::as_path)
    }
}

/// Reads profiles through a [`StorageProvider`]
#[derive(Debug)]
pub struct ProfileLoader<'a> {
    provider: &'a dyn StorageProvider,
}

impl<'a> ProfileLoader<'a> {
    pub fn new(provider: &'a dyn StorageProvider) -> Self {
        Self { provider }
    }

    pub fn read_document(&self, path: &Path) -> Result<ProfileDocument> {
        let format = ProfileFormat::from_path(path)
            .ok_or_else(|| StorageSystemError::UnsupportedConfigFormat(path.display().to_string()))?;
        let text = self.provider.read_to_string(path)?;
        format.parse(&text, path)
    }

    /// Loads `path` and every profile it derives from.
    pub fn load(&self, path: &Path) -> Result<Profile> {
        let mut chain: Vec<(PathBuf, ProfileDocument)> = Vec::new();
        let mut visited = HashSet::new();
        let mut next = Some(normalize(path));

        while let Some(current) = next.take() {
            if !visited.insert(current.clone()) {
                let mut cycle: Vec<String> = chain.iter().map(|(p, _)| p.display().to_string()).collect();
                cycle.push(current.display().to_string());
                return Err(InheritanceError::BaseCycle(cycle).into());
            }
            debug!("Reading profile {}", current.display());
            let document = self.read_document(&current)?;
            next = document.base.as_ref().map(|base| {
                let dir = current.parent().unwrap_or(Path::new(""));
                normalize(&dir.join(base))
            });
            chain.push((current, document));
        }
        chain.reverse();

        let mut layers = Vec::with_capacity(chain.len());
        let mut settings = ProfileSettings::default();
        for (_, document) in &chain {
            layers.push(document.declarations()?);
            settings = settings.merged_with(&document.settings);
        }

        Ok(Profile {
            declarations: InheritanceResolver::resolve_chain(&layers),
            settings,
            sources: chain.into_iter().map(|(p, _)| p).collect(),
        })
    }
}
