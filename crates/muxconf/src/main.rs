mod cli;
mod probe;

use std::env;
use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::Parser;
use log::{info, warn};
use muxconf_core::generator::{Generator, GeneratorSettings};
use muxconf_core::kernel::constants::{DEFAULT_CONF_FILE, TMATE_CONF_FILE, TMATE_DEFAULT_VERSION, XDG_CONFIG_HOME};
use muxconf_core::kernel::error::{Error, Result};
use muxconf_core::plugin_system::{DisplayMode, PluginHandler, PluginReport};
use muxconf_core::storage::{ConfigWriter, LocalStorageProvider, ProfileLoader, StorageProvider};
use muxconf_core::utils::expand_home;
use muxconf_core::version::{BinaryKind, VersionContext, VersionValue};

use crate::cli::CliArgs;

fn main() -> ExitCode {
    let args = CliArgs::parse();

    let default_filter = if args.debug { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter)).init();

    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("ERROR: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(args: CliArgs) -> Result<()> {
    let home = dirs::home_dir().ok_or("Could not determine the home directory")?;
    let cwd = env::current_dir().map_err(|e| Error::io(e, "current_dir", PathBuf::from(".")))?;
    let provider = LocalStorageProvider::new(cwd.clone());

    let mux = probe::probe(&args.tmux_bin)?;
    let is_tmate = mux.detected.kind == BinaryKind::Tmate;

    let mut conf_file = args.conf_file.clone();
    let mut replace = args.replace;
    let mut forced_version = args.forced_version.clone();
    if is_tmate {
        forced_version.get_or_insert_with(|| TMATE_DEFAULT_VERSION.to_string());
        if conf_file == DEFAULT_CONF_FILE {
            conf_file = TMATE_CONF_FILE.to_string();
            replace = true;
        }
    }

    let requested = forced_version.as_deref().map(|v| VersionValue::parse(v)).transpose()?;
    let ctx = VersionContext::new(mux.detected.version.clone(), requested);
    if ctx.is_forced() && !is_tmate {
        warn!("Config requested for tmux {}, installed is {}", ctx.target(), ctx.actual());
        println!(
            "\nConfig has been requested for another version of tmux than the one used to generate this.\n\
             Since the config file will point to the tmux used, this might cause problems\n\
             \ttmux vers is:    {}\n\
             \trequested vers:  {}\n\n\
             WARNING: Running this config with the current tmux might give some errors!\n",
            ctx.actual(),
            ctx.target()
        );
    }

    let conf_path = absolute(&expand_home(&conf_file, &home), &cwd);
    let profile_path = absolute(&args.profile, &cwd);
    println!("Processing: {}", profile_path.display());
    let profile = ProfileLoader::new(&provider).load(&profile_path)?;

    let mut settings = GeneratorSettings::new(conf_path.clone(), home.clone()).apply_profile(&profile.settings)?;
    settings.xdg_config_home = env::var_os(XDG_CONFIG_HOME)
        .filter(|v| !v.is_empty())
        .map(|v| expand_home(&v.to_string_lossy(), &home));
    settings.tmux_bin = mux.path.display().to_string();
    settings.source = profile_path.display().to_string();
    settings.regenerate_cmd = env::current_exe()
        .map(|p| p.display().to_string())
        .unwrap_or_else(|_| muxconf_core::kernel::constants::APP_NAME.to_string());
    settings.bash_path = probe::full_path_cmd("bash");
    settings.created_at = Some(chrono::Local::now().format("%y-%m-%d %H:%M:%S").to_string());
    settings.created_on = hostname::get().ok().map(|h| h.to_string_lossy().into_owned());
    if is_tmate && !settings.plugin_handler.is_disabled() {
        info!("tmate only supports manual plugin handling");
        settings.plugin_handler = PluginHandler::Manual;
    }

    let generator = Generator::new(settings);
    let environment = generator.plugin_environment();

    if args.clear_plugins {
        for name in environment.clear_plugins(&provider)? {
            println!("removing plugin {}", name);
        }
    }

    if let Some(display) = args.plugins_display {
        let mode = DisplayMode::try_from(display)?;
        let resolution = generator.resolve_plugins(&profile.declarations, &ctx)?;
        let installed = environment.installed(&provider)?;
        let report = PluginReport::new(&resolution, installed, mode);
        print!("{}", report.render(ctx.target(), &profile_path.display().to_string()));
        return Ok(());
    }

    if !replace {
        verify_replace(&provider, &conf_path, &home)?;
    }

    let config = generator.generate(&profile.declarations, &ctx)?;
    println!("Writing tmux {} config to {}", ctx.target(), conf_path.display());
    ConfigWriter::new(&provider).write(&config, &conf_path)?;
    Ok(())
}

fn absolute(path: &Path, cwd: &Path) -> PathBuf {
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        cwd.join(path)
    }
}

/// Asks before creating the default config or replacing any existing one.
fn verify_replace(provider: &dyn StorageProvider, conf_path: &Path, home: &Path) -> Result<()> {
    let is_default = conf_path == expand_home(DEFAULT_CONF_FILE, home);
    let question = if is_default {
        if provider.exists(conf_path) {
            "Do you wish to replace the default config file (y/n)?".to_string()
        } else {
            "Do you wish to create a default config file (y/n)?".to_string()
        }
    } else if provider.exists(conf_path) {
        format!("Do you wish to replace {} (y/n)?", conf_path.display())
    } else {
        return Ok(());
    };

    print!("{}", question);
    io::stdout()
        .flush()
        .map_err(|e| Error::io(e, "flush", PathBuf::from("<stdout>")))?;
    let mut answer = String::new();
    io::stdin()
        .lock()
        .read_line(&mut answer)
        .map_err(|e| Error::io(e, "read_line", PathBuf::from("<stdin>")))?;
    match answer.trim() {
        "y" | "Y" => Ok(()),
        _ => Err(Error::Other("Terminating...".to_string())),
    }
}
