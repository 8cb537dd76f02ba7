use std::fmt::Write;

use crate::plugin_system::catalog::PluginResolution;
use crate::plugin_system::entry::short_name;
use crate::plugin_system::error::PluginSystemError;
use crate::version::value::VersionValue;

/// How much the plugin report shows
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DisplayMode {
    /// Used and unused plugins
    Brief,
    /// Also plugins ignored for this version
    WithIgnored,
    /// Used plugins with their settings
    Verbose,
}

impl TryFrom<u8> for DisplayMode {
    type Error = PluginSystemError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(DisplayMode::Brief),
            2 => Ok(DisplayMode::WithIgnored),
            3 => Ok(DisplayMode::Verbose),
            other => Err(PluginSystemError::InvalidDisplayMode(other)),
        }
    }
}

/// Human readable summary of the plugin resolution
#[derive(Debug)]
pub struct PluginReport<'a> {
    resolution: &'a PluginResolution,
    /// Directory names found in the plugin dir
    installed: Vec<String>,
    mode: DisplayMode,
}

impl<'a> PluginReport<'a> {
    pub fn new(resolution: &'a PluginResolution, installed: Vec<String>, mode: DisplayMode) -> Self {
        let installed = installed.into_iter().filter(|n| n != "tpm").collect();
        Self { resolution, installed, mode }
    }

    pub fn render(&self, target: &VersionValue, source: &str) -> String {
        let mut out = String::new();
        let mut unused = self.installed.clone();
        let _ = writeln!(out, "\n\t=====  tmux {} - Plugins defined  =====", target);
        let _ = writeln!(out, " for: {}", source);

        let width = self
            .resolution
            .used
            .iter()
            .map(|e| e.id.len() + 2)
            .max()
            .unwrap_or(0);

        if self.resolution.has_plugins() {
            let _ = writeln!(out, "\n\t-----   Plugins used   -----");
            let _ = writeln!(out, "{:<width$}|  Min version", "Plugin");
            for entry in &self.resolution.used {
                let name = entry.short_name();
                let marker = if take(&mut unused, name) { "" } else { " *** Not installed ***" };
                if self.mode == DisplayMode::Verbose {
                    let _ = writeln!(out, "{}", "-".repeat(name.len() + 2));
                    let _ = writeln!(
                        out,
                        "> {:<w$} - {} {}",
                        name,
                        entry.gate,
                        marker,
                        w = width.saturating_sub(2)
                    );
                    for line in entry.code.lines() {
                        let _ = writeln!(out, "{}", line.trim());
                    }
                } else {
                    let _ = writeln!(out, "{:<width$} - {} {}", name, entry.gate, marker);
                }
            }
        }

        for id in self.resolution.skipped.iter().chain(self.resolution.ignored.iter().map(|e| &e.id)) {
            take(&mut unused, short_name(id));
        }
        if !unused.is_empty() {
            let _ = writeln!(out, "\n-----   Unused plugins found   -----");
            for name in &unused {
                let _ = writeln!(out, "\t {}", name);
            }
        }

        if self.mode == DisplayMode::WithIgnored && !self.resolution.ignored.is_empty() {
            let versions: Vec<String> = self.resolution.ignored.iter().map(|e| e.gate.to_string()).collect();
            let vw = versions.iter().map(String::len).max().unwrap_or(0);
            let _ = writeln!(out, "\n-----   Plugins ignored   -----");
            let _ = writeln!(out, "{:<vw$}|{:<width$}", "Min", " Plugin name");
            let _ = writeln!(out, "{:<vw$}|\n", "vers");
            for (entry, version) in self.resolution.ignored.iter().zip(&versions) {
                let _ = writeln!(out, "{:>vw$}  {:<width$}", version, entry.id);
            }
        }
        out
    }
}

fn take(names: &mut Vec<String>, name: &str) -> bool {
    match names.iter().position(|n| n == name) {
        Some(pos) => {
            names.remove(pos);
            true
        }
        None => false,
    }
}
