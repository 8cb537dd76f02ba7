// crates/muxconf-core/src/plugin_system/tests/display_tests.rs
#![cfg(test)]

use crate::plugin_system::catalog::resolve_entries;
use crate::plugin_system::display::{DisplayMode, PluginReport};
use crate::plugin_system::entry::PluginEntry;
use crate::plugin_system::error::PluginSystemError;
use crate::version::value::VersionValue;

fn resolution() -> crate::plugin_system::catalog::PluginResolution {
    let entries = vec![
        PluginEntry::requires("jaclu/tmux-menus", 1.8).unwrap().with_code("set -g @menus_trigger  Space"),
        PluginEntry::requires("tmux-plugins/tmux-resurrect", 1.9).unwrap(),
        PluginEntry::requires("a/future", 9.0).unwrap(),
        PluginEntry::requires("a/off", -1).unwrap(),
    ];
    resolve_entries(&entries, &VersionValue::parse("3.2").unwrap()).unwrap()
}

#[test]
fn test_display_mode_from_number() {
    assert_eq!(DisplayMode::try_from(1).unwrap(), DisplayMode::Brief);
    assert_eq!(DisplayMode::try_from(3).unwrap(), DisplayMode::Verbose);
    assert_eq!(DisplayMode::try_from(4), Err(PluginSystemError::InvalidDisplayMode(4)));
}

#[test]
fn test_brief_report_marks_missing_and_unused() {
    let resolution = resolution();
    let installed = vec!["tmux-menus".to_string(), "tpm".to_string(), "stale".to_string(), "off".to_string()];
    let report = PluginReport::new(&resolution, installed, DisplayMode::Brief)
        .render(&VersionValue::parse("3.2").unwrap(), "profile.yaml");

    assert!(report.contains("tmux 3.2 - Plugins defined"));
    assert!(report.contains("tmux-resurrect"));
    assert!(report.contains("*** Not installed ***"));
    assert!(report.contains("Unused plugins found"));
    assert!(report.contains("\t stale"));
    assert!(!report.contains("\t off"));
    assert!(!report.contains("\t tpm"));
    assert!(!report.contains("Plugins ignored"));
}

#[test]
fn test_ignored_and_verbose_modes() {
    let resolution = resolution();
    let v = VersionValue::parse("3.2").unwrap();

    let report = PluginReport::new(&resolution, Vec::new(), DisplayMode::WithIgnored).render(&v, "p");
    assert!(report.contains("Plugins ignored"));
    assert!(report.contains("a/future"));

    let report = PluginReport::new(&resolution, Vec::new(), DisplayMode::Verbose).render(&v, "p");
    assert!(report.contains("set -g @menus_trigger  Space"));
    assert!(!report.contains("Plugins ignored"));
}
