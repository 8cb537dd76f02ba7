// crates/muxconf-core/src/plugin_system/tests/deployment_tests.rs
#![cfg(test)]

use std::path::Path;

use crate::plugin_system::catalog::resolve_entries;
use crate::plugin_system::deployment::PluginDeployment;
use crate::plugin_system::entry::PluginEntry;
use crate::plugin_system::environment::PluginEnvironment;
use crate::plugin_system::handler::PluginHandler;
use crate::scripts::catalog::{ScriptCatalog, ScriptMode};
use crate::version::context::VersionContext;
use crate::version::value::VersionValue;

fn ctx(s: &str) -> VersionContext {
    VersionContext::for_version(VersionValue::parse(s).unwrap())
}

fn env() -> PluginEnvironment {
    PluginEnvironment::resolve(Path::new("/home/u/.tmux.conf"), Path::new("/home/u"), None)
}

fn entries() -> Vec<PluginEntry> {
    vec![PluginEntry::requires("jaclu/tmux-menus", 1.8)
        .unwrap()
        .with_code("set -g @menus_trigger  Space")]
}

#[test]
fn test_plugin_section_lines() {
    let current = ctx("3.2");
    let resolution = resolve_entries(&entries(), current.target()).unwrap();
    let env = env();
    let handler = PluginHandler::default();
    let deployment = PluginDeployment::new(&resolution, &env, &handler);

    assert_eq!(
        deployment.plugin_section(&current),
        vec![
            "#------------------------------".to_string(),
            "set -g @plugin \"jaclu/tmux-menus\"".to_string(),
            "set -g @menus_trigger  Space".to_string(),
        ]
    );
}

#[test]
fn test_plugin_section_before_variables_supported() {
    let forced = VersionContext::new(
        VersionValue::parse("3.2").unwrap(),
        Some(VersionValue::parse("1.7").unwrap()),
    );
    let entries = vec![PluginEntry::requires("a/old", 1.0).unwrap()];
    let resolution = resolve_entries(&entries, forced.target()).unwrap();
    let env = env();
    let handler = PluginHandler::Manual;
    let section = PluginDeployment::new(&resolution, &env, &handler).plugin_section(&forced);
    assert_eq!(section[1], "# plugin: a/old");
    assert!(section.iter().all(|l| !l.contains("@plugin")));
}

#[test]
fn test_tpm_deployment_registers_script() {
    let current = ctx("3.2");
    let resolution = resolve_entries(&entries(), current.target()).unwrap();
    let env = env();
    let handler = PluginHandler::default();
    let mut scripts = ScriptCatalog::new("/home/u/.tmux.conf", ScriptMode::Embedded);

    let lines = PluginDeployment::new(&resolution, &env, &handler)
        .deploy_handler(&mut scripts, &current)
        .unwrap();
    assert!(lines[0].contains("Tmux Plugin Manager"));
    assert_eq!(
        lines[1],
        "run-shell -b \"cut -c3- '/home/u/.tmux.conf' | sh -s activate_tpm\""
    );

    let block = scripts.embedded_block().join("\n");
    assert!(block.contains("# activate_tpm() {"));
    assert!(block.contains("git clone https://github.com/tmux-plugins/tpm \"/home/u/.tmux/plugins/tpm\""));
}

#[test]
fn test_manual_deployment_lists_plugins() {
    let current = ctx("3.2");
    let resolution = resolve_entries(&entries(), current.target()).unwrap();
    let env = env();
    let handler = PluginHandler::Manual;
    let mut scripts = ScriptCatalog::new("/home/u/.tmux.conf", ScriptMode::Embedded);

    let lines = PluginDeployment::new(&resolution, &env, &handler)
        .with_limited_host(true)
        .deploy_handler(&mut scripts, &current)
        .unwrap();
    assert!(lines[1].ends_with("| bash -s activate_plugins_manually\""));

    let block = scripts.embedded_block().join("\n");
    assert!(block.contains("plugins=( jaclu/tmux-menus )"));
    assert!(block.contains("Plugin $name initialized"));
}

#[test]
fn test_no_deployment_without_plugins() {
    let current = ctx("3.2");
    let resolution = resolve_entries(&[], current.target()).unwrap();
    let env = env();
    let handler = PluginHandler::default();
    let mut scripts = ScriptCatalog::new("/c.conf", ScriptMode::Embedded);
    let lines = PluginDeployment::new(&resolution, &env, &handler)
        .deploy_handler(&mut scripts, &current)
        .unwrap();
    assert!(lines.is_empty());
    assert!(scripts.embedded_block().is_empty());
}
