// crates/muxconf-core/src/storage/tests/writer_tests.rs
#![cfg(test)]

use std::fs;

use tempfile::tempdir;

use crate::generator::config::ResolvedConfiguration;
use crate::scripts::catalog::ExternalScript;
use crate::storage::local::LocalStorageProvider;
use crate::storage::writer::ConfigWriter;

#[test]
fn test_writes_config_and_scripts() {
    let dir = tempdir().unwrap();
    let conf = dir.path().join("tmux").join("tmux.conf");
    let script = dir.path().join("tmux").join("scripts").join("hello.sh");
    let config = ResolvedConfiguration {
        lines: vec!["set -g mouse on".into(), "".into()],
        used: Vec::new(),
        ignored: Vec::new(),
        skipped: Vec::new(),
        external_scripts: vec![ExternalScript {
            path: script.clone(),
            contents: "#!/bin/sh\n\nhello \"$@\"\n".into(),
        }],
    };

    let provider = LocalStorageProvider::new(dir.path().to_path_buf());
    ConfigWriter::new(&provider).write(&config, &conf).unwrap();

    assert_eq!(fs::read_to_string(&conf).unwrap(), "set -g mouse on\n\n");
    assert!(fs::read_to_string(&script).unwrap().starts_with("#!/bin/sh"));
}
