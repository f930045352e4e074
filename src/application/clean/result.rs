//! Clean result types

use std::path::PathBuf;

/// Result of a clean operation
#[derive(Debug, Clone, Default)]
pub struct CleanResult {
    /// Directories that were removed (or would be removed in dry run)
    pub removed: Vec<PathBuf>,
    /// Directories that did not exist
    pub missing: Vec<PathBuf>,
    /// Directories left in place because removing them would delete the project
    pub kept: Vec<PathBuf>,
}

impl CleanResult {
    pub fn new() -> Self {
        Self::default()
    }

    /// Check if anything was (or would be) removed
    pub fn is_empty(&self) -> bool {
        self.removed.is_empty()
    }
}
