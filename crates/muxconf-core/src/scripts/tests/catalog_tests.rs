// crates/muxconf-core/src/scripts/tests/catalog_tests.rs
#![cfg(test)]

use std::path::{Path, PathBuf};

use crate::scripts::catalog::{ScriptCatalog, ScriptMode};
use crate::scripts::error::ScriptError;
use crate::scripts::spec::ScriptSpec;
use crate::version::context::VersionContext;
use crate::version::value::VersionValue;

fn ctx(v: &str) -> VersionContext {
    VersionContext::for_version(VersionValue::parse(v).unwrap())
}

fn hello() -> ScriptSpec {
    ScriptSpec::new("hello", vec!["hello() {".into(), "    echo hi".into(), "}".into()])
}

#[test]
fn test_embedded_run_it_uses_cut() {
    let mut catalog = ScriptCatalog::new("/home/u/.tmux.conf", ScriptMode::Embedded);
    assert!(catalog.create(hello()));

    let cmd = catalog.run_it("hello", false, &ctx("3.2")).unwrap();
    assert_eq!(cmd, "run-shell \"cut -c3- '/home/u/.tmux.conf' | sh -s hello\"");

    let bg = catalog.run_it("hello", true, &ctx("3.2")).unwrap();
    assert!(bg.starts_with("run-shell -b \""));
}

#[test]
fn test_background_dropped_on_old_target() {
    let mut catalog = ScriptCatalog::new("/home/u/.tmux.conf", ScriptMode::Embedded);
    catalog.create(hello());
    let cmd = catalog.run_it("hello", true, &ctx("1.7")).unwrap();
    assert!(cmd.starts_with("run-shell \""));
}

#[test]
fn test_bash_scripts_run_with_bash() {
    let mut catalog =
        ScriptCatalog::new("/c.conf", ScriptMode::Embedded).with_bash_path("/usr/local/bin/bash");
    catalog.create(hello().bash());
    let cmd = catalog.run_it("hello", false, &ctx("3.2")).unwrap();
    assert!(cmd.contains("| /usr/local/bin/bash -s hello"));
}

#[test]
fn test_forced_bash_applies_to_embedded_scripts() {
    let mut catalog = ScriptCatalog::new("/c.conf", ScriptMode::Embedded).with_forced_bash(true);
    catalog.create(hello());
    let cmd = catalog.run_it("hello", false, &ctx("3.2")).unwrap();
    assert!(cmd.contains("| bash -s hello"));
}

#[test]
fn test_embedded_block_layout() {
    let mut catalog = ScriptCatalog::new("/c.conf", ScriptMode::Embedded);
    assert!(catalog.embedded_block().is_empty());

    catalog.create(hello());
    let block = catalog.embedded_block();
    assert!(block.contains(&"# EMBEDDED-SCRIPTS-STARTING-POINT".to_string()));
    assert!(block.contains(&"#     echo hi".to_string()));
    assert_eq!(
        block.last().map(String::as_str),
        Some("# \"$@\" #  This triggers the embedded script")
    );
}

#[test]
fn test_external_script_contents() {
    let dir = PathBuf::from("/home/u/.tmux/scripts");
    let mut catalog =
        ScriptCatalog::new("/home/u/.tmux.conf", ScriptMode::External { dir: dir.clone() });
    catalog.create(hello());

    let scripts = catalog.external_scripts();
    assert_eq!(scripts.len(), 1);
    assert_eq!(scripts[0].path, dir.join("hello.sh"));
    assert_eq!(
        scripts[0].contents,
        "#!/bin/sh\n\nhello() {\n    echo hi\n}\nhello \"$@\"\n"
    );
    assert!(catalog.embedded_block().is_empty());

    let cmd = catalog.run_it("hello", false, &ctx("3.2")).unwrap();
    assert_eq!(cmd, "run-shell \"/home/u/.tmux/scripts/hello.sh\"");
    assert_eq!(catalog.call_script("hello").unwrap(), "/home/u/.tmux/scripts/hello.sh");
}

#[test]
fn test_user_script_overrides_built_in() {
    let mut catalog = ScriptCatalog::new("/c.conf", ScriptMode::Embedded);
    assert!(catalog.create(ScriptSpec::new("activate_tpm", vec!["activate_tpm() { :; }".into()])));
    assert!(!catalog.create(
        ScriptSpec::new("activate_tpm", vec!["activate_tpm() { exit 1; }".into()]).built_in()
    ));

    let block = catalog.embedded_block().join("\n");
    assert!(block.contains(":; }"));
    assert!(!block.contains("exit 1"));
}

#[test]
fn test_unknown_script_is_an_error() {
    let catalog = ScriptCatalog::new("/c.conf", ScriptMode::Embedded);
    assert_eq!(
        catalog.run_it("nope", false, &ctx("3.2")),
        Err(ScriptError::UnknownScript("nope".into()))
    );
    assert!(catalog.call_script("nope").is_err());
}

#[test]
fn test_external_dir_for_config_locations() {
    let home = Path::new("/home/u");
    assert_eq!(
        ScriptMode::external_for(Path::new("/home/u/.tmux.conf"), home, None),
        ScriptMode::External { dir: PathBuf::from("/home/u/.tmux/scripts") }
    );
    assert_eq!(
        ScriptMode::external_for(Path::new("/home/u/.tmate.conf"), home, None),
        ScriptMode::External { dir: PathBuf::from("/home/u/.tmate/scripts") }
    );
    assert_eq!(
        ScriptMode::external_for(Path::new("/home/u/.config/tmux/tmux.conf"), home, None),
        ScriptMode::External { dir: PathBuf::from("/home/u/.config/tmux/scripts") }
    );
    assert_eq!(
        ScriptMode::external_for(
            Path::new("/home/u/.config/tmux/tmux.conf"),
            home,
            Some(Path::new("/xdg"))
        ),
        ScriptMode::External { dir: PathBuf::from("/xdg/tmux/scripts") }
    );
}
