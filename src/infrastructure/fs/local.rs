//! Local File System Implementation
//!
//! Implements the FileSystem port for local disk operations. Directory trees
//! are walked with `ignore::WalkBuilder` with every filter turned off, so
//! hidden files and gitignored files are staged like everything else.

use std::io;
use std::path::{Path, PathBuf};

use ignore::WalkBuilder;

use crate::domain::ports::FileSystem;
use crate::error::{WasmdistError, WasmdistResult};

/// Local file system implementation
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalFs;

impl LocalFs {
    /// Create a new LocalFs instance
    pub fn new() -> Self {
        Self
    }
}

impl FileSystem for LocalFs {
    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }

    fn is_dir(&self, path: &Path) -> bool {
        path.is_dir()
    }

    fn create_dir_all(&self, path: &Path) -> WasmdistResult<()> {
        std::fs::create_dir_all(path).map_err(WasmdistError::fs("failed to create", path))
    }

    fn remove_dir_all(&self, path: &Path) -> WasmdistResult<()> {
        std::fs::remove_dir_all(path).map_err(WasmdistError::fs("failed to remove", path))
    }

    fn list_dir(&self, path: &Path) -> WasmdistResult<Vec<PathBuf>> {
        let read = std::fs::read_dir(path).map_err(WasmdistError::fs("failed to read", path))?;
        let mut entries = read
            .map(|entry| entry.map(|e| e.path()))
            .collect::<io::Result<Vec<_>>>()
            .map_err(WasmdistError::fs("failed to read", path))?;
        entries.sort();
        Ok(entries)
    }

    fn copy_file(&self, from: &Path, to: &Path) -> WasmdistResult<()> {
        if let Some(parent) = to.parent() {
            self.create_dir_all(parent)?;
        }
        std::fs::copy(from, to).map_err(WasmdistError::fs("failed to copy", from))?;
        Ok(())
    }

    fn copy_dir(&self, from: &Path, to: &Path) -> WasmdistResult<usize> {
        let walker = WalkBuilder::new(from)
            .standard_filters(false)
            .follow_links(true)
            .sort_by_file_name(|a, b| a.cmp(b))
            .build();

        let mut copied = 0;
        for entry in walker {
            let entry = entry.map_err(|e| WasmdistError::Fs {
                action: "failed to walk",
                path: from.to_path_buf(),
                source: io::Error::other(e.to_string()),
            })?;

            let relative = entry.path().strip_prefix(from).unwrap_or(entry.path());
            let target = to.join(relative);

            if entry.file_type().is_some_and(|ft| ft.is_dir()) {
                self.create_dir_all(&target)?;
            } else {
                self.copy_file(entry.path(), &target)?;
                copied += 1;
            }
        }

        Ok(copied)
    }
}
