//! Error types for wasmdist
//!
//! Library errors use `thiserror`; the binary wraps them in `anyhow`.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for wasmdist operations
pub type WasmdistResult<T> = Result<T, WasmdistError>;

/// Main error type for wasmdist operations
#[derive(Error, Debug)]
pub enum WasmdistError {
    /// External command exited with a non-zero status
    #[error("command failed with exit code {code}: {command}")]
    CommandFailed { command: String, code: i32 },

    /// External command could not be started at all
    #[error("failed to start '{command}': {source}")]
    CommandSpawn {
        command: String,
        #[source]
        source: std::io::Error,
    },

    /// Compiler finished but its output directory is missing
    #[error("compiler output directory not found: {path}")]
    MissingOutputDir { path: PathBuf },

    /// Deploy directory would destroy or recurse into project files
    #[error("refusing to use deploy directory {path}: {reason}")]
    UnsafeDeployDir { path: PathBuf, reason: &'static str },

    /// Filesystem operation failed on a known path
    #[error("{action} {path}: {source}")]
    Fs {
        action: &'static str,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Invalid configuration file
    #[error("invalid config in {file}: {message}")]
    InvalidConfig { file: PathBuf, message: String },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl WasmdistError {
    /// Process exit code this error should terminate with.
    ///
    /// A failing subprocess hands its own status through; everything else
    /// is a generic failure.
    pub fn exit_code(&self) -> i32 {
        match self {
            WasmdistError::CommandFailed { code, .. } => *code,
            _ => 1,
        }
    }

    pub(crate) fn fs(action: &'static str, path: impl Into<PathBuf>) -> impl FnOnce(std::io::Error) -> Self {
        let path = path.into();
        move |source| WasmdistError::Fs {
            action,
            path,
            source,
        }
    }
}
