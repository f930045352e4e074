use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use wasmdist::config::CONFIG_FILE_NAME;

/// Discover the project root directory from an invocation directory.
///
/// Heuristics (first match wins, walking upward from `start`):
/// - `wasmdist.toml`
/// - `Cargo.toml` (the crate wasm-pack builds)
///
/// Falls back to `start` when no markers are found.
pub(crate) fn discover_project_root(start: &Path) -> PathBuf {
    for dir in start.ancestors() {
        if dir.join(CONFIG_FILE_NAME).is_file() {
            return dir.to_path_buf();
        }
        if dir.join("Cargo.toml").is_file() {
            return dir.to_path_buf();
        }
    }
    start.to_path_buf()
}

/// Project root from `--project-root`, or discovered from the current directory
pub(crate) fn resolve_project_root(explicit: Option<&Path>) -> Result<PathBuf> {
    let cwd = std::env::current_dir().context("failed to read current directory")?;
    match explicit {
        Some(path) => {
            let root = cwd.join(path);
            if !root.is_dir() {
                anyhow::bail!("project root is not a directory: {}", root.display());
            }
            Ok(root)
        }
        None => Ok(discover_project_root(&cwd)),
    }
}
