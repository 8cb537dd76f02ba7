use serde::{Deserialize, Serialize};

use crate::emitter::statement::ConditionalStatement;
use crate::inheritance::error::InheritanceError;
use crate::plugin_system::catalog::PluginCatalog;
use crate::plugin_system::entry::PluginEntry;
use crate::plugin_system::error::PluginSystemError;
use crate::scripts::spec::ScriptSpec;

/// Where a group lands in the generated config
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Placement {
    /// Main body, before plugins
    #[default]
    Content,
    /// After the plugin section, for host specific tweaks
    LocalOverrides,
}

/// Named, ordered block of statements
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatementGroup {
    pub name: String,
    #[serde(default)]
    pub placement: Placement,
    #[serde(default)]
    pub statements: Vec<ConditionalStatement>,
}

impl StatementGroup {
    pub fn new(name: impl Into<String>, statements: Vec<ConditionalStatement>) -> Self {
        Self {
            name: name.into(),
            placement: Placement::Content,
            statements,
        }
    }

    pub fn local_overrides(mut self) -> Self {
        self.placement = Placement::LocalOverrides;
        self
    }
}

/// Everything one profile declares
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Declarations {
    groups: Vec<StatementGroup>,
    plugins: Vec<PluginEntry>,
    scripts: Vec<ScriptSpec>,
}

impl Declarations {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_group(&mut self, group: StatementGroup) -> Result<(), InheritanceError> {
        if self.group(&group.name).is_some() {
            return Err(InheritanceError::DuplicateGroup(group.name));
        }
        self.groups.push(group);
        Ok(())
    }

    pub fn add_plugin(&mut self, entry: PluginEntry) -> Result<(), PluginSystemError> {
        if self.plugin(&entry.id).is_some() {
            return Err(PluginSystemError::DuplicatePlugin(entry.id));
        }
        self.plugins.push(entry);
        Ok(())
    }

    pub fn add_script(&mut self, script: ScriptSpec) -> Result<(), InheritanceError> {
        if self.script(&script.name).is_some() {
            return Err(InheritanceError::DuplicateScript(script.name));
        }
        self.scripts.push(script);
        Ok(())
    }

    pub fn group(&self, name: &str) -> Option<&StatementGroup> {
        self.groups.iter().find(|g| g.name == name)
    }

    pub fn plugin(&self, id: &str) -> Option<&PluginEntry> {
        self.plugins.iter().find(|p| p.id == id)
    }

    pub fn script(&self, name: &str) -> Option<&ScriptSpec> {
        self.scripts.iter().find(|s| s.name == name)
    }

    pub fn groups(&self) -> &[StatementGroup] {
        &self.groups
    }

    /// Groups with the given placement, in declaration order
    pub fn groups_at(&self, placement: Placement) -> impl Iterator<Item = &StatementGroup> {
        self.groups.iter().filter(move |g| g.placement == placement)
    }

    pub fn plugins(&self) -> &[PluginEntry] {
        &self.plugins
    }

    pub fn scripts(&self) -> &[ScriptSpec] {
        &self.scripts
    }

    /// The plugins as a catalog, checking ids are unique
    pub fn plugin_catalog(&self) -> Result<PluginCatalog, PluginSystemError> {
        let mut catalog = PluginCatalog::new();
        for entry in &self.plugins {
            catalog.register(entry.clone())?;
        }
        Ok(catalog)
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty() && self.plugins.is_empty() && self.scripts.is_empty()
    }

    pub(crate) fn groups_mut(&mut self) -> &mut Vec<StatementGroup> {
        &mut self.groups
    }

    pub(crate) fn plugins_mut(&mut self) -> &mut Vec<PluginEntry> {
        &mut self.plugins
    }

    pub(crate) fn scripts_mut(&mut self) -> &mut Vec<ScriptSpec> {
        &mut self.scripts
    }
}
