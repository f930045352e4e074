//! FileSystem port - the directory operations staging needs
//!
//! Staging only ever copies whole files and directory trees, so the port is
//! shaped around that rather than around reading and writing content.

use std::path::{Path, PathBuf};

use crate::error::WasmdistResult;

/// Abstract file system interface
///
/// Implementations:
/// - `LocalFs` - standard disk operations
pub trait FileSystem {
    /// Check if a path exists (file or directory)
    fn exists(&self, path: &Path) -> bool;

    /// Check if a path is an existing directory
    fn is_dir(&self, path: &Path) -> bool;

    /// Create directory and parents
    fn create_dir_all(&self, path: &Path) -> WasmdistResult<()>;

    /// Remove a directory and everything below it
    fn remove_dir_all(&self, path: &Path) -> WasmdistResult<()>;

    /// Immediate children of a directory, sorted by name
    fn list_dir(&self, path: &Path) -> WasmdistResult<Vec<PathBuf>>;

    /// Copy one file, overwriting `to`. Parent directories are created.
    fn copy_file(&self, from: &Path, to: &Path) -> WasmdistResult<()>;

    /// Copy a directory tree into `to` (created if missing).
    ///
    /// Returns the number of files copied.
    fn copy_dir(&self, from: &Path, to: &Path) -> WasmdistResult<usize>;
}

impl<T: FileSystem + ?Sized> FileSystem for &T {
    fn exists(&self, path: &Path) -> bool {
        (**self).exists(path)
    }

    fn is_dir(&self, path: &Path) -> bool {
        (**self).is_dir(path)
    }

    fn create_dir_all(&self, path: &Path) -> WasmdistResult<()> {
        (**self).create_dir_all(path)
    }

    fn remove_dir_all(&self, path: &Path) -> WasmdistResult<()> {
        (**self).remove_dir_all(path)
    }

    fn list_dir(&self, path: &Path) -> WasmdistResult<Vec<PathBuf>> {
        (**self).list_dir(path)
    }

    fn copy_file(&self, from: &Path, to: &Path) -> WasmdistResult<()> {
        (**self).copy_file(from, to)
    }

    fn copy_dir(&self, from: &Path, to: &Path) -> WasmdistResult<usize> {
        (**self).copy_dir(from, to)
    }
}
