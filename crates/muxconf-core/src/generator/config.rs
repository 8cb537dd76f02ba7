use crate::plugin_system::catalog::PluginResolution;
use crate::scripts::catalog::ExternalScript;

/// A generated config, ready to be written
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedConfiguration {
    pub lines: Vec<String>,
    /// Used plugin ids in install order
    pub used: Vec<String>,
    pub ignored: Vec<String>,
    pub skipped: Vec<String>,
    pub external_scripts: Vec<ExternalScript>,
}

impl ResolvedConfiguration {
    pub(crate) fn new(lines: Vec<String>, plugins: &PluginResolution, external_scripts: Vec<ExternalScript>) -> Self {
        Self {
            lines,
            used: plugins.found().into_iter().map(String::from).collect(),
            ignored: plugins.ignored.iter().map(|e| e.id.clone()).collect(),
            skipped: plugins.skipped.clone(),
            external_scripts,
        }
    }

    /// File contents, one line per statement
    pub fn render(&self) -> String {
        let mut out = self.lines.join("\n");
        out.push('\n');
        out
    }
}
