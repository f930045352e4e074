//! Build result types

use std::path::PathBuf;

use crate::domain::ports::RunOutcome;

/// A file or directory copied into the deploy directory
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CopiedItem {
    pub source: PathBuf,
    pub destination: PathBuf,
    /// Number of files copied (1 for a single file)
    pub files: usize,
}

/// Result of a build
#[derive(Debug, Clone, Default)]
pub struct BuildResult {
    pub deploy_dir: PathBuf,
    /// Items copied, in staging order
    pub copied: Vec<CopiedItem>,
    /// Asset entries that were not found on disk
    pub skipped: Vec<PathBuf>,
    /// Whether an existing deploy directory was removed first
    pub cleaned: bool,
    /// How the serve step ended, if it ran
    pub served: Option<RunOutcome>,
}

impl BuildResult {
    pub fn new(deploy_dir: PathBuf) -> Self {
        Self {
            deploy_dir,
            ..Self::default()
        }
    }

    pub fn add_copied(&mut self, source: PathBuf, destination: PathBuf, files: usize) {
        self.copied.push(CopiedItem {
            source,
            destination,
            files,
        });
    }

    pub fn add_skipped(&mut self, path: PathBuf) {
        self.skipped.push(path);
    }

    /// Total number of files written into the deploy directory
    pub fn file_count(&self) -> usize {
        self.copied.iter().map(|c| c.files).sum()
    }
}
