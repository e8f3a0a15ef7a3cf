//! On-disk cookbook directory.
//!
//! Every write replaces the target script in full. There is no
//! "already exists" check, so scripts always reflect the versions installed
//! when they were last created, and hand edits are lost on the next write.
//! No locking is performed: concurrent processes writing the same cookbook
//! can race on the same file.

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{CookbookError, Result};

/// Mode of the cookbook directory.
pub const DIRECTORY_MODE: u32 = 0o755;

/// Mode of scripts marked executable.
pub const EXECUTABLE_MODE: u32 = 0o744;

/// Owns the directory where rendered scripts live.
#[derive(Debug, Clone)]
pub struct CookbookStore {
    directory: PathBuf,
}

impl CookbookStore {
    /// Create a store rooted at `directory`. Nothing is touched on disk yet.
    pub fn new(directory: impl Into<PathBuf>) -> Self {
        Self {
            directory: directory.into(),
        }
    }

    /// The cookbook directory.
    pub fn directory(&self) -> &Path {
        &self.directory
    }

    /// Full path of a script in the cookbook.
    pub fn path_of(&self, script_name: &str) -> PathBuf {
        self.directory.join(script_name)
    }

    /// Check whether a script is already present.
    pub fn exists(&self, script_name: &str) -> bool {
        self.path_of(script_name).is_file()
    }

    /// Create the cookbook directory if it is missing.
    ///
    /// # Errors
    ///
    /// Returns `DirectoryCreateFailure` naming the directory.
    pub fn ensure(&self) -> Result<PathBuf> {
        if self.directory.is_dir() {
            return Ok(self.directory.clone());
        }

        fs::create_dir_all(&self.directory)
            .and_then(|_| set_mode(&self.directory, DIRECTORY_MODE))
            .map_err(|source| CookbookError::DirectoryCreateFailure {
                path: self.directory.clone(),
                source,
            })?;

        tracing::debug!("Created cookbook directory {}", self.directory.display());
        Ok(self.directory.clone())
    }

    /// Write a script, replacing any previous content.
    ///
    /// # Errors
    ///
    /// Returns `DirectoryCreateFailure`, `WriteFailure` or
    /// `PermissionFailure`, each naming the path involved.
    pub fn write(&self, script_name: &str, text: &str, executable: bool) -> Result<PathBuf> {
        self.ensure()?;
        let target = self.path_of(script_name);

        fs::write(&target, text).map_err(|source| CookbookError::WriteFailure {
            path: target.clone(),
            source,
        })?;

        if executable {
            set_mode(&target, EXECUTABLE_MODE).map_err(|source| {
                CookbookError::PermissionFailure {
                    path: target.clone(),
                    source,
                }
            })?;
        }

        tracing::debug!(
            "Wrote {} ({} bytes, executable: {})",
            target.display(),
            text.len(),
            executable
        );
        Ok(target)
    }
}

#[cfg(unix)]
fn set_mode(path: &Path, mode: u32) -> std::io::Result<()> {
    use std::os::unix::fs::PermissionsExt;
    fs::set_permissions(path, fs::Permissions::from_mode(mode))
}

#[cfg(not(unix))]
fn set_mode(_path: &Path, _mode: u32) -> std::io::Result<()> {
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn new_does_not_touch_disk() {
        let temp = TempDir::new().unwrap();
        let store = CookbookStore::new(temp.path().join("recipes"));
        assert!(!store.directory().exists());
    }

    #[test]
    fn ensure_creates_missing_directory() {
        let temp = TempDir::new().unwrap();
        let store = CookbookStore::new(temp.path().join("nested").join("recipes"));
        let dir = store.ensure().unwrap();
        assert!(dir.is_dir());
        // Second call is a no-op
        assert_eq!(store.ensure().unwrap(), dir);
    }

    #[cfg(unix)]
    #[test]
    fn ensure_uses_world_readable_mode() {
        use std::os::unix::fs::PermissionsExt;
        let temp = TempDir::new().unwrap();
        let store = CookbookStore::new(temp.path().join("recipes"));
        store.ensure().unwrap();
        let mode = fs::metadata(store.directory()).unwrap().permissions().mode();
        assert_eq!(mode & 0o777, DIRECTORY_MODE);
    }

    #[test]
    fn ensure_fails_when_path_is_a_file() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("recipes");
        fs::write(&path, "not a dir").unwrap();
        let result = CookbookStore::new(&path).ensure();
        assert!(matches!(
            result,
            Err(CookbookError::DirectoryCreateFailure { .. })
        ));
    }

    #[test]
    fn write_overwrites_existing_content() {
        let temp = TempDir::new().unwrap();
        let store = CookbookStore::new(temp.path().join("recipes"));
        store.write("a.sh", "first version, quite long\n", false).unwrap();
        let path = store.write("a.sh", "second\n", false).unwrap();
        assert_eq!(fs::read_to_string(path).unwrap(), "second\n");
        assert!(store.exists("a.sh"));
        assert!(!store.exists("b.sh"));
    }

    #[cfg(unix)]
    #[test]
    fn write_sets_executable_bit_only_when_asked() {
        use std::os::unix::fs::PermissionsExt;
        let temp = TempDir::new().unwrap();
        let store = CookbookStore::new(temp.path());

        let exe = store.write("run.sh", "#!/bin/sh\n", true).unwrap();
        let mode = fs::metadata(exe).unwrap().permissions().mode();
        assert_eq!(mode & 0o777, EXECUTABLE_MODE);

        let inc = store.write("inc.sh", "x=1\n", false).unwrap();
        let mode = fs::metadata(inc).unwrap().permissions().mode();
        assert_eq!(mode & 0o100, 0);
    }

    #[test]
    fn write_failure_names_the_path() {
        let temp = TempDir::new().unwrap();
        let store = CookbookStore::new(temp.path());
        fs::create_dir(temp.path().join("busy.sh")).unwrap();
        let err = store.write("busy.sh", "x", false).unwrap_err();
        assert!(matches!(err, CookbookError::WriteFailure { .. }));
        assert!(err.to_string().contains("busy.sh"));
    }
}
