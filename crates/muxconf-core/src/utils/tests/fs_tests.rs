use std::path::{Path, PathBuf};

use crate::utils::fs::{expand_home, normalize, tilde_home};

#[test]
fn test_expand_home() {
    let home = Path::new("/home/user");
    assert_eq!(expand_home("~/.tmux.conf", home), PathBuf::from("/home/user/.tmux.conf"));
    assert_eq!(expand_home("~", home), PathBuf::from("/home/user"));
    assert_eq!(expand_home("/etc/tmux.conf", home), PathBuf::from("/etc/tmux.conf"));
    assert_eq!(expand_home("rel/tmux.conf", home), PathBuf::from("rel/tmux.conf"));
}

#[test]
fn test_tilde_home() {
    let home = Path::new("/home/user");
    assert_eq!(tilde_home(Path::new("/home/user/.tmux.conf"), home), "~/.tmux.conf");
    assert_eq!(tilde_home(Path::new("/home/user"), home), "~");
    assert_eq!(tilde_home(Path::new("/home/username/x"), home), "/home/username/x");
    assert_eq!(tilde_home(Path::new("/etc/tmux.conf"), home), "/etc/tmux.conf");
}

#[test]
fn test_normalize() {
    assert_eq!(normalize(Path::new("/a/b/../c/./d.yaml")), PathBuf::from("/a/c/d.yaml"));
    assert_eq!(normalize(Path::new("profiles/../base.toml")), PathBuf::from("base.toml"));
}
