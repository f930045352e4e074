//! Configuration type definitions

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::domain::value_objects::{AssetList, DeployLayout, StagePaths};
use crate::error::WasmdistResult;

use super::loader::{self, ConfigWarning};

/// Compiler settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BuildConfig {
    /// Compiler executable
    #[serde(default = "default_tool")]
    pub tool: String,

    /// Value passed to `--target`
    #[serde(default = "default_target")]
    pub target: String,

    /// Directory the compiler writes to, relative to the project root
    #[serde(default = "default_out_dir")]
    pub out_dir: PathBuf,
}

impl Default for BuildConfig {
    fn default() -> Self {
        Self {
            tool: default_tool(),
            target: default_target(),
            out_dir: default_out_dir(),
        }
    }
}

fn default_tool() -> String {
    "wasm-pack".to_string()
}

fn default_target() -> String {
    "web".to_string()
}

fn default_out_dir() -> PathBuf {
    PathBuf::from("pkg")
}

/// Deploy directory settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeployConfig {
    #[serde(default = "default_deploy_dir")]
    pub dir: PathBuf,

    #[serde(default)]
    pub layout: DeployLayout,

    /// Static assets staged next to the package (replaces the default list)
    #[serde(default)]
    pub assets: AssetList,
}

impl Default for DeployConfig {
    fn default() -> Self {
        Self {
            dir: default_deploy_dir(),
            layout: DeployLayout::default(),
            assets: AssetList::default(),
        }
    }
}

fn default_deploy_dir() -> PathBuf {
    PathBuf::from("dist")
}

/// Static file server settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServeConfig {
    /// Server command line; the port is appended as the last argument
    #[serde(default = "default_serve_command")]
    pub command: Vec<String>,

    #[serde(default = "default_port")]
    pub port: u16,
}

impl Default for ServeConfig {
    fn default() -> Self {
        Self {
            command: default_serve_command(),
            port: default_port(),
        }
    }
}

fn default_serve_command() -> Vec<String> {
    vec![
        "python".to_string(),
        "-m".to_string(),
        "http.server".to_string(),
    ]
}

fn default_port() -> u16 {
    8000
}

/// Main configuration structure
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub build: BuildConfig,

    #[serde(default)]
    pub deploy: DeployConfig,

    #[serde(default)]
    pub serve: ServeConfig,
}

impl Config {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> WasmdistResult<Self> {
        Ok(loader::load_with_warnings(path)?.0)
    }

    /// Load configuration and collect non-fatal warnings (e.g. unknown keys)
    pub fn load_with_warnings(path: &Path) -> WasmdistResult<(Self, Vec<ConfigWarning>)> {
        loader::load_with_warnings(path)
    }

    /// Resolve build directories against the project root
    pub fn stage_paths(&self, root: &Path) -> StagePaths {
        StagePaths::resolve(root, &self.build.out_dir, &self.deploy.dir)
    }
}
