use std::fmt;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;

use crate::kernel::error::{Error, Result};
use crate::storage::error::StorageSystemError;
use crate::storage::provider::StorageProvider;

/// Local filesystem storage provider
#[derive(Clone)]
pub struct LocalStorageProvider {
    base_path: PathBuf,
}

impl LocalStorageProvider {
    /// Relative paths resolve against `base_path`, absolute ones are used as is
    pub fn new(base_path: PathBuf) -> Self {
        Self { base_path }
    }

    fn resolve_path<P: AsRef<Path>>(&self, path: P) -> PathBuf {
        self.base_path.join(path)
    }

    #[cfg(unix)]
    fn set_executable(&self, path: &Path) -> Result<()> {
        use std::os::unix::fs::PermissionsExt;

        let metadata = fs::metadata(path).map_err(|e| Error::io(e, "metadata", path.to_path_buf()))?;
        let mut permissions = metadata.permissions();
        permissions.set_mode(permissions.mode() | 0o111);
        fs::set_permissions(path, permissions).map_err(|e| Error::io(e, "set_permissions", path.to_path_buf()))
    }

    #[cfg(not(unix))]
    fn set_executable(&self, _path: &Path) -> Result<()> {
        Ok(())
    }
}

impl StorageProvider for LocalStorageProvider {
    fn exists(&self, path: &Path) -> bool {
        self.resolve_path(path).exists()
    }

    fn is_dir(&self, path: &Path) -> bool {
        self.resolve_path(path).is_dir()
    }

    fn read_to_string(&self, path: &Path) -> Result<String> {
        let full_path = self.resolve_path(path);
        fs::read_to_string(&full_path).map_err(|e| Error::io(e, "read_to_string", full_path))
    }

    fn write_string(&self, path: &Path, contents: &str) -> Result<()> {
        let full_path = self.resolve_path(path);
        let Some(parent) = full_path.parent().filter(|p| !p.as_os_str().is_empty()) else {
            return Err(StorageSystemError::OperationFailed {
                operation: "write_string".to_string(),
                path: full_path,
                message: "Cannot write to path without parent directory".to_string(),
            }
            .into());
        };
        if !parent.is_dir() {
            fs::create_dir_all(parent).map_err(|e| Error::io(e, "create_dir_all", parent.to_path_buf()))?;
        }

        // Written next to the target so persist is a rename on the same filesystem
        let mut temp_file =
            NamedTempFile::new_in(parent).map_err(|e| Error::io(e, "create_temp_file", parent.to_path_buf()))?;
        temp_file
            .write_all(contents.as_bytes())
            .map_err(|e| Error::io(e, "write_to_temp_file", temp_file.path().to_path_buf()))?;
        temp_file
            .persist(&full_path)
            .map_err(|e| Error::io(e.error, "persist_temp_file", full_path.clone()))?;
        Ok(())
    }

    fn write_executable(&self, path: &Path, contents: &str) -> Result<()> {
        self.write_string(path, contents)?;
        self.set_executable(&self.resolve_path(path))
    }

    fn remove_file(&self, path: &Path) -> Result<()> {
        let full_path = self.resolve_path(path);
        fs::remove_file(&full_path).map_err(|e| Error::io(e, "remove_file", full_path))
    }

    fn remove_dir_all(&self, path: &Path) -> Result<()> {
        let full_path = self.resolve_path(path);
        fs::remove_dir_all(&full_path).map_err(|e| Error::io(e, "remove_dir_all", full_path))
    }

    fn read_dir(&self, path: &Path) -> Result<Vec<PathBuf>> {
        let full_path = self.resolve_path(path);
        let entries = fs::read_dir(&full_path).map_err(|e| Error::io(e, "read_dir", full_path.clone()))?;
        let mut result = Vec::new();
        for entry in entries {
            let entry = entry.map_err(|e| Error::io(e, "read_dir_entry", full_path.clone()))?;
            result.push(entry.path());
        }
        result.sort();
        Ok(result)
    }
}

impl fmt::Debug for LocalStorageProvider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LocalStorageProvider")
            .field("base_path", &self.base_path)
            .finish()
    }
}
