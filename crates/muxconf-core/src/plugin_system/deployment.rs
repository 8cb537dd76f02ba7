use crate::kernel::constants::{
    ACTIVATE_MANUALLY_SCRIPT, ACTIVATE_TPM_SCRIPT, PLUGIN_SEPARATOR, PLUGIN_VARIABLES_MIN_VERSION,
};
use crate::plugin_system::catalog::PluginResolution;
use crate::plugin_system::environment::PluginEnvironment;
use crate::plugin_system::handler::PluginHandler;
use crate::scripts::catalog::ScriptCatalog;
use crate::scripts::error::ScriptError;
use crate::scripts::spec::ScriptSpec;
use crate::version::context::VersionContext;

/// Produces the plugin related parts of the config
#[derive(Debug)]
pub struct PluginDeployment<'a> {
    resolution: &'a PluginResolution,
    environment: &'a PluginEnvironment,
    handler: &'a PluginHandler,
    /// Slow hosts get step by step progress messages while plugins start
    limited_host: bool,
}

impl<'a> PluginDeployment<'a> {
    pub fn new(
        resolution: &'a PluginResolution,
        environment: &'a PluginEnvironment,
        handler: &'a PluginHandler,
    ) -> Self {
        Self {
            resolution,
            environment,
            handler,
            limited_host: false,
        }
    }

    pub fn with_limited_host(mut self, limited_host: bool) -> Self {
        self.limited_host = limited_host;
        self
    }

    /// `@plugin` declarations plus each plugin's settings.
    ///
    /// Before 1.8 any `@variable` makes tmux hang while parsing, so only a
    /// comment is left for each plugin.
    pub fn plugin_section(&self, ctx: &VersionContext) -> Vec<String> {
        let mut out = Vec::new();
        for entry in &self.resolution.used {
            out.push(PLUGIN_SEPARATOR.to_string());
            if ctx.is_at_least(PLUGIN_VARIABLES_MIN_VERSION) {
                out.push(format!("set -g @plugin \"{}\"", entry.id));
                out.push(entry.code.clone());
            } else {
                out.push(format!("# plugin: {}", entry.id));
                out.push("# in versions < 1.8 @variables can not be used".to_string());
                out.push(String::new());
            }
        }
        out
    }

    /// Registers the handler script and returns the lines starting it.
    pub fn deploy_handler(
        &self,
        scripts: &mut ScriptCatalog,
        ctx: &VersionContext,
    ) -> Result<Vec<String>, ScriptError> {
        if !self.resolution.has_plugins() {
            return Ok(Vec::new());
        }
        let (title, name) = match self.handler {
            PluginHandler::Disabled => return Ok(Vec::new()),
            PluginHandler::Manual => {
                scripts.create(self.manual_script());
                ("Manual Plugin Handling", ACTIVATE_MANUALLY_SCRIPT)
            }
            PluginHandler::Tpm(repo) => {
                scripts.create(self.tpm_script(repo));
                ("Tmux Plugin Manager", ACTIVATE_TPM_SCRIPT)
            }
        };
        Ok(vec![
            section_header(title),
            scripts.run_it(name, true, ctx)?,
        ])
    }

    fn manual_script(&self) -> ScriptSpec {
        let dir = self.environment.plugins_dir().display().to_string();
        let plugins: String = self
            .resolution
            .found()
            .iter()
            .map(|id| format!(" {}", id))
            .collect();
        let progress = if self.limited_host {
            "        $TMUX_BIN display \"Plugin $name initialized\"\n"
        } else {
            ""
        };

        let body = format!(
            r#"
#
#  Manual plugin handler, installs any missing plugin and runs its init.
#  The plugin list is regenerated together with the config.
#
{fnc}() {{
    mkdir -p "{dir}"

    plugins=({plugins} )
    for plugin in "${{plugins[@]}}"; do
        name="$(echo "$plugin" | cut -d / -f2)"
        if [[ ! -d "{dir}/$name" ]]; then
            $TMUX_BIN display "cloning  $name"
            git clone "https://github.com/$plugin" "{dir}/$name"
        fi
        #  plugin folders might be symlinks
        d_plugin_folder="$(realpath "{dir}/$name")"
        init_script="$(find "$d_plugin_folder" -maxdepth 1 | grep tmux$ | head -n 1)"
        if [[ -n "$init_script" ]]; then
            $init_script || $TMUX_BIN display "ERROR in $init_script"
        else
            $TMUX_BIN display "Could not find init for plugin: $name"
            sleep 2
        fi
{progress}    done
    $TMUX_BIN display "Plugins initialized!"
}}"#,
            fnc = ACTIVATE_MANUALLY_SCRIPT,
        );
        ScriptSpec::new(ACTIVATE_MANUALLY_SCRIPT, vec![body]).bash().built_in()
    }

    fn tpm_script(&self, repo: &str) -> ScriptSpec {
        let dir = self.environment.plugins_dir();
        let tpm_location = dir.join("tpm").display().to_string();
        let tpm_app = dir.join("tpm").join("tpm").display().to_string();
        let env = self.environment.tpm_env();
        let dir = dir.display().to_string();
        let progress = |msg: &str| {
            if self.limited_host {
                format!("\n    $TMUX_BIN display \"{}\"", msg)
            } else {
                String::new()
            }
        };
        let running = progress("Running cloned tpm...");
        let installing = progress("Installing all plugins...");

        let body = format!(
            r#"
{fnc}() {{
    #
    #  Initialize already installed tpm if found
    #
    if [ -x "{tpm_app}" ]; then
        {env}"{tpm_app}"
        exit 0
    fi

    #  Create plugin dir if needed
    mkdir -p "{dir}"

    #  Remove potentially broken tpm install
    rm -rf "{tpm_location}"

    $TMUX_BIN display "Cloning {repo} into {tpm_location} ..."
    git clone https://github.com/{repo} "{tpm_location}"
    if [ "$?" -ne 0 ]; then
        echo "Failed to clone tmux plugin handler:"
        echo "  https://github.com/{repo}"
        exit 11
    fi
{running}
    {env}"{tpm_app}"
    if [ "$?" -ne 0 ]; then
        echo "Failed to run: {tpm_app}"
        exit 12
    fi

    #
    #  Plugins are only installed here when tpm itself had to be installed,
    #  otherwise tpm handles it (<prefix> I)
    #{installing}
    {env}"{tpm_location}/bindings/install_plugins"
    if [ "$?" -ne 0 ]; then
        echo "Failed to run: {tpm_location}/bindings/install_plugins"
        exit 12
    fi

    $TMUX_BIN display "Plugin setup completed"
}}"#,
            fnc = ACTIVATE_TPM_SCRIPT,
        );
        ScriptSpec::new(ACTIVATE_TPM_SCRIPT, vec![body]).built_in()
    }
}

/// Banner comment introducing a section of the config
pub(crate) fn section_header(title: &str) -> String {
    format!(
        "\n#======================================================\n#\n#   {}\n#\n#======================================================",
        title
    )
}
