use std::fmt::Debug;
use std::path::{Path, PathBuf};

use crate::kernel::error::Result;

/// Filesystem operations the generator needs
pub trait StorageProvider: Send + Sync + Debug {
    fn exists(&self, path: &Path) -> bool;

    fn is_dir(&self, path: &Path) -> bool;

    fn read_to_string(&self, path: &Path) -> Result<String>;

    /// Replaces `path` atomically, creating parent directories as needed
    fn write_string(&self, path: &Path, contents: &str) -> Result<()>;

    /// Like [`write_string`](Self::write_string), then marks the file executable
    fn write_executable(&self, path: &Path, contents: &str) -> Result<()>;

    fn remove_file(&self, path: &Path) -> Result<()>;

    fn remove_dir_all(&self, path: &Path) -> Result<()>;

    /// Entries of a directory
    fn read_dir(&self, path: &Path) -> Result<Vec<PathBuf>>;
}
