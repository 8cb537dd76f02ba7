use std::path::PathBuf;

use crate::emitter::emitter::NoteMode;
use crate::kernel::error::Result;
use crate::plugin_system::handler::PluginHandler;
use crate::storage::profile::ProfileSettings;

/// Everything the generator needs besides declarations and versions
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratorSettings {
    /// Absolute path of the config being generated
    pub conf_file: PathBuf,
    pub home: PathBuf,
    pub xdg_config_home: Option<PathBuf>,
    /// Value of `TMUX_BIN`
    pub tmux_bin: String,
    /// Value of `TMUX_SOURCE`, the profile the config was generated from
    pub source: String,
    /// Command re-running the generator, used by the edit-config binding
    pub regenerate_cmd: String,
    pub plugin_handler: PluginHandler,
    pub use_embedded_scripts: bool,
    pub note_mode: NoteMode,
    pub is_limited_host: bool,
    /// `None` leaves out the edit-config binding
    pub edit_key: Option<String>,
    pub bash_path: String,
    pub created_at: Option<String>,
    pub created_on: Option<String>,
}

impl GeneratorSettings {
    pub fn new(conf_file: PathBuf, home: PathBuf) -> Self {
        Self {
            conf_file,
            home,
            xdg_config_home: None,
            tmux_bin: "tmux".to_string(),
            source: String::new(),
            regenerate_cmd: crate::kernel::constants::APP_NAME.to_string(),
            plugin_handler: PluginHandler::default(),
            use_embedded_scripts: true,
            note_mode: NoteMode::Comment,
            is_limited_host: false,
            edit_key: Some("e".to_string()),
            bash_path: "bash".to_string(),
            created_at: None,
            created_on: None,
        }
    }

    /// Applies whatever the profile chain sets.
    pub fn apply_profile(mut self, profile: &ProfileSettings) -> Result<Self> {
        if let Some(handler) = &profile.plugin_handler {
            self.plugin_handler = handler.parse()?;
        }
        if let Some(embedded) = profile.use_embedded_scripts {
            self.use_embedded_scripts = embedded;
        }
        if let Some(as_comments) = profile.use_notes_as_comments {
            self.note_mode = if as_comments { NoteMode::Comment } else { NoteMode::Discard };
        }
        if let Some(limited) = profile.is_limited_host {
            self.is_limited_host = limited;
        }
        if let Some(key) = &profile.edit_key {
            self.edit_key = Some(key.clone()).filter(|k| !k.trim().is_empty());
        }
        Ok(self)
    }
}
