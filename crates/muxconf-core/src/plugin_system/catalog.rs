use std::collections::HashSet;

use log::debug;

use crate::plugin_system::entry::{PluginEntry, short_name};
use crate::plugin_system::error::PluginSystemError;
use crate::version::value::VersionValue;

/// Ordered collection of plugin declarations
#[derive(Debug, Clone, Default)]
pub struct PluginCatalog {
    entries: Vec<PluginEntry>,
}

impl PluginCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a plugin; an id may only be registered once.
    pub fn register(&mut self, entry: PluginEntry) -> Result<(), PluginSystemError> {
        if self.contains(&entry.id) {
            return Err(PluginSystemError::DuplicatePlugin(entry.id));
        }
        self.entries.push(entry);
        Ok(())
    }

    pub fn contains(&self, id: &str) -> bool {
        self.entries.iter().any(|e| e.id == id)
    }

    pub fn entries(&self) -> &[PluginEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn resolve(&self, current: &VersionValue) -> Result<PluginResolution, PluginSystemError> {
        resolve_entries(&self.entries, current)
    }
}

/// Partitions `entries` against `current`.
///
/// Skip-gated entries are never evaluated. Used plugins are sorted by id,
/// which is the order they get installed in.
pub fn resolve_entries(
    entries: &[PluginEntry],
    current: &VersionValue,
) -> Result<PluginResolution, PluginSystemError> {
    let mut seen = HashSet::new();
    let mut resolution = PluginResolution::default();

    for entry in entries {
        if !seen.insert(entry.id.as_str()) {
            return Err(PluginSystemError::DuplicatePlugin(entry.id.clone()));
        }
        if entry.gate.is_skip() {
            debug!("Plugin {} skipped", entry.id);
            resolution.skipped.push(entry.id.clone());
        } else if entry.gate.is_satisfied(current) {
            resolution.used.push(entry.clone());
        } else {
            debug!("Plugin {} needs {}, ignored for {}", entry.id, entry.gate, current);
            resolution.ignored.push(entry.clone());
        }
    }

    resolution.used.sort_by(|a, b| a.id.cmp(&b.id));
    resolution
        .ignored
        .sort_by(|a, b| a.gate.minimum_version().cmp(&b.gate.minimum_version()).then_with(|| a.id.cmp(&b.id)));
    resolution.skipped.sort();
    Ok(resolution)
}

/// Outcome of resolving plugins for one target version
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PluginResolution {
    /// Sorted by id
    pub used: Vec<PluginEntry>,
    /// Sorted by minimum version, then id
    pub ignored: Vec<PluginEntry>,
    pub skipped: Vec<String>,
}

impl PluginResolution {
    /// Ids of the used plugins, in install order
    pub fn found(&self) -> Vec<&str> {
        self.used.iter().map(|e| e.id.as_str()).collect()
    }

    /// Like [`found`](Self::found) but without the `owner/` prefix
    pub fn found_short(&self) -> Vec<&str> {
        self.used.iter().map(|e| e.short_name()).collect()
    }

    /// Matches either a full id or a bare repository name
    pub fn is_used(&self, name: &str) -> bool {
        self.used.iter().any(|e| e.id == name || e.short_name() == short_name(name))
    }

    pub fn has_plugins(&self) -> bool {
        !self.used.is_empty()
    }
}
