//! Build mode value object - debug or release compilation

use serde::{Deserialize, Serialize};

/// Compilation mode handed to the WebAssembly toolchain
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BuildMode {
    /// Fast, unoptimized build (default)
    #[default]
    Debug,
    /// Optimized, smaller output
    Release,
}

impl BuildMode {
    pub fn from_release_flag(release: bool) -> Self {
        if release {
            BuildMode::Release
        } else {
            BuildMode::Debug
        }
    }

    pub fn is_release(&self) -> bool {
        matches!(self, BuildMode::Release)
    }

    /// Extra compiler flag for this mode, if any
    pub fn compiler_flag(&self) -> Option<&'static str> {
        match self {
            BuildMode::Debug => None,
            BuildMode::Release => Some("--release"),
        }
    }

    /// Short human description shown before the build starts
    pub fn describe(&self) -> &'static str {
        match self {
            BuildMode::Debug => "DEBUG mode (fast, unoptimized)",
            BuildMode::Release => "RELEASE mode (optimized, smaller WASM)",
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            BuildMode::Debug => "debug",
            BuildMode::Release => "release",
        }
    }
}

impl std::fmt::Display for BuildMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
