use std::collections::HashSet;
use std::path::{Path, PathBuf};

use log::debug;

use crate::kernel::constants::{EMBEDDED_SCRIPTS_MARKER, RUN_SHELL_BACKGROUND_MIN_VERSION};
use crate::scripts::error::ScriptError;
use crate::scripts::registry::ScriptRegistry;
use crate::scripts::spec::ScriptSpec;
use crate::utils::fs::tilde_home;
use crate::version::context::VersionContext;

/// Where scripts end up
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScriptMode {
    /// Appended to the config file as `# `-prefixed lines
    Embedded,
    /// Written as `<dir>/<name>.sh`
    External { dir: PathBuf },
}

impl ScriptMode {
    /// External mode with the script directory derived from the config file:
    /// `~/.tmux/scripts` or `~/.tmate/scripts` for the default files, else
    /// `<xdg or grandparent of conf>/tmux/scripts`.
    pub fn external_for(conf_file: &Path, home: &Path, xdg_config_home: Option<&Path>) -> Self {
        let dir = match tilde_home(conf_file, home).as_str() {
            "~/.tmux.conf" => home.join(".tmux").join("scripts"),
            "~/.tmate.conf" => home.join(".tmate").join("scripts"),
            _ => {
                let base = match xdg_config_home {
                    Some(xdg) => xdg.to_path_buf(),
                    None => conf_file
                        .parent()
                        .and_then(Path::parent)
                        .map(Path::to_path_buf)
                        .unwrap_or_else(|| home.to_path_buf()),
                };
                base.join("tmux").join("scripts")
            }
        };
        ScriptMode::External { dir }
    }
}

/// A script file the writer has to create and mark executable
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExternalScript {
    pub path: PathBuf,
    pub contents: String,
}

/// Collects scripts for one generation run and renders the calls to them.
#[derive(Debug, Clone)]
pub struct ScriptCatalog {
    /// Config file path as it appears inside `run-shell` commands
    conf_file: String,
    mode: ScriptMode,
    /// Every script runs under bash (manual plugin handling emits bashisms)
    force_bash: bool,
    bash_path: String,
    registry: ScriptRegistry,
    bash_scripts: HashSet<String>,
    embedded_text: Vec<String>,
    external: Vec<ExternalScript>,
}

impl ScriptCatalog {
    pub fn new(conf_file: impl Into<String>, mode: ScriptMode) -> Self {
        Self {
            conf_file: conf_file.into(),
            mode,
            force_bash: false,
            bash_path: "bash".to_string(),
            registry: ScriptRegistry::new(),
            bash_scripts: HashSet::new(),
            embedded_text: Vec::new(),
            external: Vec::new(),
        }
    }

    pub fn with_forced_bash(mut self, force_bash: bool) -> Self {
        self.force_bash = force_bash;
        self
    }

    /// Path of the bash interpreter used for embedded bash scripts
    pub fn with_bash_path(mut self, bash_path: impl Into<String>) -> Self {
        self.bash_path = bash_path.into();
        self
    }

    pub fn mode(&self) -> &ScriptMode {
        &self.mode
    }

    pub fn is_embedded(&self) -> bool {
        matches!(self.mode, ScriptMode::Embedded)
    }

    /// Registers a script. Returns false when it was shadowed by a user script.
    pub fn create(&mut self, mut spec: ScriptSpec) -> bool {
        if self.force_bash && self.is_embedded() {
            spec.use_bash = true;
        }
        if !self.registry.accept(&spec) {
            debug!("Built-in script '{}' overridden, skipping", spec.name);
            return false;
        }
        if spec.use_bash {
            self.bash_scripts.insert(spec.name.clone());
        }

        match &self.mode {
            ScriptMode::Embedded => {
                for line in &spec.lines {
                    for part in line.split('\n') {
                        self.embedded_text.push(format!("# {}", part));
                    }
                }
                self.embedded_text.push(String::new());
            }
            ScriptMode::External { dir } => {
                let shebang = if spec.use_bash { "#!/usr/bin/env bash" } else { "#!/bin/sh" };
                let mut contents = format!("{}\n\n", shebang);
                for line in &spec.lines {
                    contents.push_str(line.trim_end_matches('\n'));
                    contents.push('\n');
                }
                contents.push_str(&format!("{} \"$@\"\n", spec.name));
                self.external.push(ExternalScript {
                    path: dir.join(format!("{}.sh", spec.name)),
                    contents,
                });
            }
        }
        true
    }

    /// The `run-shell` line executing a script.
    pub fn run_it(&self, name: &str, in_bg: bool, ctx: &VersionContext) -> Result<String, ScriptError> {
        self.ensure_known(name)?;
        let mut cmd = String::from("run-shell ");
        if in_bg && ctx.is_at_least(RUN_SHELL_BACKGROUND_MIN_VERSION) {
            cmd.push_str("-b ");
        }
        cmd.push('"');
        match &self.mode {
            ScriptMode::Embedded => {
                let shell = if self.bash_scripts.contains(name) { self.bash_path.as_str() } else { "sh" };
                cmd.push_str(&format!("cut -c3- '{}' | {} -s {}", self.conf_file, shell, name));
            }
            ScriptMode::External { dir } => {
                cmd.push_str(&self.external_path(dir, name));
            }
        }
        cmd.push('"');
        Ok(cmd)
    }

    /// How another script calls this one: the function name when embedded,
    /// the script path when external.
    pub fn call_script(&self, name: &str) -> Result<String, ScriptError> {
        self.ensure_known(name)?;
        Ok(match &self.mode {
            ScriptMode::Embedded => name.to_string(),
            ScriptMode::External { dir } => self.external_path(dir, name),
        })
    }

    /// The trailing block of the config holding embedded scripts
    pub fn embedded_block(&self) -> Vec<String> {
        if !self.is_embedded() || self.embedded_text.is_empty() {
            return Vec::new();
        }
        let mut out = vec![
            String::new(),
            "#======================================================".to_string(),
            "#".to_string(),
            format!("# {}", EMBEDDED_SCRIPTS_MARKER),
            "#".to_string(),
        ];
        out.extend(self.embedded_text.iter().cloned());
        out.push("# \"$@\" #  This triggers the embedded script".to_string());
        out
    }

    pub fn external_scripts(&self) -> &[ExternalScript] {
        &self.external
    }

    fn external_path(&self, dir: &Path, name: &str) -> String {
        dir.join(format!("{}.sh", name)).display().to_string()
    }

    fn ensure_known(&self, name: &str) -> Result<(), ScriptError> {
        if self.registry.is_known(name) {
            Ok(())
        } else {
            Err(ScriptError::UnknownScript(name.to_string()))
        }
    }
}
