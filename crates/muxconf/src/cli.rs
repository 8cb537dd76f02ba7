use std::path::PathBuf;

use clap::{ArgAction, Parser};
use muxconf_core::kernel::constants::DEFAULT_CONF_FILE;

/// muxconf: generates a tmux config matching the installed tmux version
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None, disable_version_flag = true)]
pub struct CliArgs {
    /// Config file to write
    #[arg(default_value = DEFAULT_CONF_FILE)]
    pub conf_file: String,

    /// Profile with the declarations (json, yaml or toml)
    #[arg(short = 'P', long)]
    pub profile: PathBuf,

    /// tmux (or tmate) binary to generate the config for
    #[arg(short = 't', long = "tmux-bin", default_value = "tmux")]
    pub tmux_bin: String,

    /// Generate the config for this tmux version instead of the installed one
    #[arg(short = 'V', long = "forced-version")]
    pub forced_version: Option<String>,

    /// Replace an existing config without asking
    #[arg(short = 'r', long)]
    pub replace: bool,

    /// Remove all installed plugins first
    #[arg(short = 'c', long = "clear-plugins")]
    pub clear_plugins: bool,

    /// Show plugin info and exit: 1 used/unused, 2 also ignored, 3 used with settings
    #[arg(short = 'p', long = "plugins-display", value_parser = clap::value_parser!(u8).range(1..=3))]
    pub plugins_display: Option<u8>,

    /// Debug logging
    #[arg(long)]
    pub debug: bool,

    /// Print version
    #[arg(long, action = ArgAction::Version)]
    pub version: Option<bool>,
}
