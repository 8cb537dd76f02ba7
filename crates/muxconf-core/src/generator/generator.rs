use log::{debug, info};

use crate::emitter::emitter::ConditionalEmitter;
use crate::emitter::statement::ConditionalStatement;
use crate::generator::config::ResolvedConfiguration;
use crate::generator::settings::GeneratorSettings;
use crate::inheritance::declarations::{Declarations, Placement};
use crate::kernel::constants::{APP_NAME, APP_VERSION, EMBEDDED_SCRIPTS_MARKER};
use crate::kernel::error::Result;
use crate::plugin_system::catalog::PluginResolution;
use crate::plugin_system::deployment::{PluginDeployment, section_header};
use crate::plugin_system::environment::PluginEnvironment;
use crate::plugin_system::handler::PluginHandler;
use crate::scripts::catalog::{ScriptCatalog, ScriptMode};
use crate::scripts::placeholders::expand_placeholders;
use crate::version::context::VersionContext;

/// Turns declarations into a [`ResolvedConfiguration`].
#[derive(Debug, Clone)]
pub struct Generator {
    settings: GeneratorSettings,
}

/// State of a single generation run
struct Run<'a> {
    ctx: &'a VersionContext,
    emitter: ConditionalEmitter,
    scripts: ScriptCatalog,
    lines: Vec<String>,
}

impl Run<'_> {
    fn text(&mut self, text: &str) -> Result<()> {
        let ctx = self.ctx;
        let expanded = expand_placeholders(text, &self.scripts, ctx)?;
        let lines = self.emitter.emit_text(&expanded, ctx.target())?;
        self.lines.extend(lines);
        Ok(())
    }

    fn statements(&mut self, statements: &[ConditionalStatement]) -> Result<()> {
        let ctx = self.ctx;
        let current = ctx.target();
        let mut included = Vec::with_capacity(statements.len());
        for statement in statements.iter().filter(|s| self.emitter.is_included(s, current)) {
            included.push(ConditionalStatement {
                text: expand_placeholders(&statement.text, &self.scripts, ctx)?,
                gate: statement.gate.clone(),
            });
        }
        let lines = self.emitter.emit(&included, current)?;
        self.lines.extend(lines);
        Ok(())
    }
}

impl Generator {
    pub fn new(settings: GeneratorSettings) -> Self {
        Self { settings }
    }

    pub fn settings(&self) -> &GeneratorSettings {
        &self.settings
    }

    /// The handler actually used for `ctx`
    pub fn plugin_handler(&self, ctx: &VersionContext) -> PluginHandler {
        self.settings.plugin_handler.clone().for_target(ctx)
    }

    pub fn plugin_environment(&self) -> PluginEnvironment {
        PluginEnvironment::resolve(
            &self.settings.conf_file,
            &self.settings.home,
            self.settings.xdg_config_home.as_deref(),
        )
    }

    /// Plugin partition for `ctx`; empty when plugin handling is disabled.
    pub fn resolve_plugins(&self, declarations: &Declarations, ctx: &VersionContext) -> Result<PluginResolution> {
        let catalog = declarations.plugin_catalog()?;
        if self.plugin_handler(ctx).is_disabled() {
            debug!("Plugin handling disabled, ignoring {} plugins", catalog.len());
            return Ok(PluginResolution::default());
        }
        Ok(catalog.resolve(ctx.target())?)
    }

    pub fn generate(&self, declarations: &Declarations, ctx: &VersionContext) -> Result<ResolvedConfiguration> {
        let settings = &self.settings;
        let handler = self.plugin_handler(ctx);
        let plugins = self.resolve_plugins(declarations, ctx)?;
        let environment = self.plugin_environment();

        let mode = if settings.use_embedded_scripts {
            ScriptMode::Embedded
        } else {
            ScriptMode::external_for(&settings.conf_file, &settings.home, settings.xdg_config_home.as_deref())
        };
        let mut scripts = ScriptCatalog::new(settings.conf_file.display().to_string(), mode)
            .with_forced_bash(settings.use_embedded_scripts && handler == PluginHandler::Manual)
            .with_bash_path(settings.bash_path.clone());
        for script in declarations.scripts() {
            scripts.create(script.clone());
        }

        let mut run = Run {
            ctx,
            emitter: ConditionalEmitter::new(settings.note_mode).with_backtick_guard(settings.use_embedded_scripts),
            scripts,
            lines: Vec::new(),
        };

        info!("Generating tmux {} config for {}", ctx.target(), settings.conf_file.display());
        if settings.use_embedded_scripts {
            run.text(&format!(
                "# : << {}\n#\n# The above line tells embedded scripts where they start\n# further down in this file",
                EMBEDDED_SCRIPTS_MARKER
            ))?;
        }
        run.text(&self.header(ctx))?;

        for group in declarations.groups_at(Placement::Content) {
            debug!("Emitting group {}", group.name);
            run.statements(&group.statements)?;
        }

        if let Some(key) = &settings.edit_key {
            run.text(&section_header(&format!("Edit config     <prefix>  {}", key)))?;
            run.text(&self.edit_binding(key))?;
            run.text("")?;
        }

        let deployment = PluginDeployment::new(&plugins, &environment, &handler)
            .with_limited_host(settings.is_limited_host);
        if plugins.has_plugins() {
            run.text(&section_header("Plugins"))?;
            for line in deployment.plugin_section(ctx) {
                run.text(&line)?;
            }
        }

        run.text(&section_header("Local overrides"))?;
        for group in declarations.groups_at(Placement::LocalOverrides) {
            debug!("Emitting group {}", group.name);
            run.statements(&group.statements)?;
        }

        for line in deployment.deploy_handler(&mut run.scripts, ctx)? {
            run.text(&line)?;
        }
        run.text("")?;

        let Run { mut lines, scripts, .. } = run;
        lines.extend(scripts.embedded_block());
        Ok(ResolvedConfiguration::new(lines, &plugins, scripts.external_scripts().to_vec()))
    }

    fn header(&self, ctx: &VersionContext) -> String {
        let settings = &self.settings;
        let mut header = format!("#\n#  This config was created using\n#      {} {}\n#", APP_NAME, APP_VERSION);
        if let Some(created_at) = &settings.created_at {
            header.push_str(&format!("\n#      Creation time: {}", created_at));
        }
        if let Some(created_on) = &settings.created_on {
            header.push_str(&format!("\n#         Created on: {}", created_on));
        }
        if ctx.is_forced() {
            header.push_str(&format!("\n#     actual version: ({})", ctx.actual()));
        }
        header.push_str(&format!("\n#   For tmux version: {}", ctx.target()));
        header.push_str(&format!(
            r#"
#
#
#  Three env variables defining this instance of tmux:
#

#
#  When you might use various tmux instances or tmux is not in
#  path, the safe bet is to always use $TMUX_BIN in a shell, not tmux!
#
TMUX_BIN="{bin}"

#
#  Conf file defining this env, source it with:
#    $TMUX_BIN source $TMUX_CONF
#
TMUX_CONF="{conf}"

#
#  This file is generated, make changes in $TMUX_SOURCE instead.
#  This .conf file will frequently be over-written!
#
TMUX_SOURCE="{source}"
"#,
            bin = settings.tmux_bin,
            conf = settings.conf_file.display(),
            source = settings.source,
        ));
        header
    }

    /// Binding opening the profile in `$EDITOR`, then regenerating and
    /// sourcing the config.
    fn edit_binding(&self, key: &str) -> String {
        format!(
            "bind -N \"Edit local config files\"  {key}  new-window -n \"$TMUX_BIN config\" \
             \"/bin/sh -c '\\${{EDITOR:-vi}} $TMUX_SOURCE && \
             {cmd} -P $TMUX_SOURCE -t $TMUX_BIN -r $TMUX_CONF && sleep 1 && \
             $TMUX_BIN source $TMUX_CONF && $TMUX_BIN display \\\"$TMUX_CONF sourced\\\"'\"",
            cmd = self.settings.regenerate_cmd,
        )
    }
}
