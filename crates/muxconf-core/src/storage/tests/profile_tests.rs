// crates/muxconf-core/src/storage/tests/profile_tests.rs
#![cfg(test)]

use std::fs;
use std::path::Path;

use tempfile::tempdir;

use crate::inheritance::declarations::Placement;
use crate::inheritance::error::InheritanceError;
use crate::kernel::error::Error;
use crate::storage::error::StorageSystemError;
use crate::storage::local::LocalStorageProvider;
use crate::storage::profile::{ProfileFormat, ProfileLoader};
use crate::version::value::VersionValue;

#[test]
fn test_format_from_path() {
    assert_eq!(ProfileFormat::from_path(Path::new("a.json")), Some(ProfileFormat::Json));
    assert_eq!(ProfileFormat::from_path(Path::new("a.YML")), Some(ProfileFormat::Yaml));
    assert_eq!(ProfileFormat::from_path(Path::new("a.toml")), Some(ProfileFormat::Toml));
    assert_eq!(ProfileFormat::from_path(Path::new("a.conf")), None);
}

#[test]
fn test_load_yaml_profile() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("laptop.yaml");
    fs::write(
        &path,
        r#"
settings:
  plugin_handler: manual
  edit_key: E
groups:
  - name: general
    statements:
      - text: set -g mouse on
      - text: set -g extended-keys on
        min_version: "3.2"
  - name: host
    placement: local_overrides
    statements:
      - text: set -g status-style bg=blue
plugins:
  - id: jaclu/tmux-menus
    min_version: 1.8
    code: set -g @menus_trigger Space
  - id: tmux-plugins/tmux-resurrect
    min_version: -1
scripts:
  - name: hello
    lines: ["hello() {", "    echo hi", "}"]
"#,
    )
    .unwrap();

    let provider = LocalStorageProvider::new(dir.path().to_path_buf());
    let profile = ProfileLoader::new(&provider).load(&path).unwrap();

    assert_eq!(profile.sources, vec![path.clone()]);
    assert_eq!(profile.settings.plugin_handler.as_deref(), Some("manual"));
    assert_eq!(profile.settings.edit_key.as_deref(), Some("E"));

    let d = &profile.declarations;
    assert_eq!(d.groups().len(), 2);
    assert_eq!(d.group("host").unwrap().placement, Placement::LocalOverrides);
    let gated = &d.group("general").unwrap().statements[1];
    assert_eq!(gated.gate.as_ref().unwrap().minimum_version(), Some(&VersionValue::new(3, 2)));
    assert!(d.plugin("tmux-plugins/tmux-resurrect").unwrap().gate.is_skip());
    assert_eq!(d.script("hello").unwrap().lines.len(), 3);
}

#[test]
fn test_base_chain_across_formats() {
    let dir = tempdir().unwrap();
    fs::create_dir_all(dir.path().join("hosts")).unwrap();
    fs::write(
        dir.path().join("common.toml"),
        r#"
[settings]
use_embedded_scripts = false
edit_key = "e"

[[groups]]
name = "general"
statements = [{ text = "set -g mouse on" }]

[[plugins]]
id = "a/foo"
min_version = 1.8
"#,
    )
    .unwrap();
    fs::write(
        dir.path().join("hosts").join("ish.json"),
        r#"{
  "base": "../common.toml",
  "settings": { "is_limited_host": true },
  "plugins": [{ "id": "a/foo", "min_version": -1 }]
}"#,
    )
    .unwrap();

    let provider = LocalStorageProvider::new(dir.path().to_path_buf());
    let leaf = dir.path().join("hosts").join("ish.json");
    let profile = ProfileLoader::new(&provider).load(&leaf).unwrap();

    assert_eq!(profile.sources.len(), 2);
    assert_eq!(profile.source(), Some(leaf.as_path()));
    assert_eq!(profile.settings.use_embedded_scripts, Some(false));
    assert_eq!(profile.settings.is_limited_host, Some(true));
    assert_eq!(profile.settings.edit_key.as_deref(), Some("e"));
    assert!(profile.declarations.plugin("a/foo").unwrap().gate.is_skip());
    assert!(profile.declarations.group("general").is_some());
}

#[test]
fn test_base_cycle_is_rejected() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("a.json"), r#"{ "base": "b.json" }"#).unwrap();
    fs::write(dir.path().join("b.json"), r#"{ "base": "./a.json" }"#).unwrap();

    let provider = LocalStorageProvider::new(dir.path().to_path_buf());
    match ProfileLoader::new(&provider).load(&dir.path().join("a.json")) {
        Err(Error::Inheritance(InheritanceError::BaseCycle(chain))) => assert_eq!(chain.len(), 3),
        other => panic!("expected BaseCycle, got {:?}", other),
    }
}

#[test]
fn test_bad_documents() {
    let dir = tempdir().unwrap();
    let provider = LocalStorageProvider::new(dir.path().to_path_buf());
    let loader = ProfileLoader::new(&provider);

    fs::write(dir.path().join("p.ini"), "").unwrap();
    assert!(matches!(
        loader.load(&dir.path().join("p.ini")),
        Err(Error::StorageSystem(StorageSystemError::UnsupportedConfigFormat(_)))
    ));

    fs::write(dir.path().join("v.json"), r#"{ "plugins": [{ "id": "a/b", "min_version": "3" }] }"#).unwrap();
    assert!(matches!(
        loader.load(&dir.path().join("v.json")),
        Err(Error::StorageSystem(StorageSystemError::DeserializationError { .. }))
    ));

    fs::write(
        dir.path().join("dup.json"),
        r#"{ "groups": [{ "name": "g" }, { "name": "g" }] }"#,
    )
    .unwrap();
    assert!(matches!(
        loader.load(&dir.path().join("dup.json")),
        Err(Error::Inheritance(InheritanceError::DuplicateGroup(_)))
    ));
}
