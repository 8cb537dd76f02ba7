/// Application name
pub const APP_NAME: &str = "muxconf";

/// Application version
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// tmux version that introduced `bind -N` notes
pub const NOTES_MIN_VERSION: (u32, u32) = (3, 1);

/// Before this, `@variables` make tmux hang while parsing the config
pub const PLUGIN_VARIABLES_MIN_VERSION: (u32, u32) = (1, 8);

/// First version where `run-shell -b` is available
pub const RUN_SHELL_BACKGROUND_MIN_VERSION: (u32, u32) = (1, 8);

/// Oldest tmux tpm can drive; older targets fall back to manual handling
pub const PLUGIN_MANAGER_MIN_VERSION: (u32, u32) = (1, 9);

/// Default plugin handler repository
pub const DEFAULT_PLUGIN_HANDLER: &str = "tmux-plugins/tpm";

/// Plugin handler setting selecting the built-in manual installer
pub const MANUAL_PLUGIN_HANDLER: &str = "manual";

/// Default config file
pub const DEFAULT_CONF_FILE: &str = "~/.tmux.conf";

/// Default config file when the binary is tmate
pub const TMATE_CONF_FILE: &str = "~/.tmate.conf";

/// tmate reports its own version; configs target this tmux level
pub const TMATE_DEFAULT_VERSION: &str = "2.4";

/// Environment variable overriding the config base directory
pub const XDG_CONFIG_HOME: &str = "XDG_CONFIG_HOME";

/// Marker closing the here-doc that hides the config from `sh`
pub const EMBEDDED_SCRIPTS_MARKER: &str = "EMBEDDED-SCRIPTS-STARTING-POINT";

/// Built-in script bootstrapping tpm
pub const ACTIVATE_TPM_SCRIPT: &str = "activate_tpm";

/// Built-in script installing and starting plugins without tpm
pub const ACTIVATE_MANUALLY_SCRIPT: &str = "activate_plugins_manually";

/// Separator written before each plugin in the plugin section
pub const PLUGIN_SEPARATOR: &str = "#------------------------------";
