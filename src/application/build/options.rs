//! Build options

use crate::config::Config;
use crate::domain::value_objects::{AssetList, BuildMode, DeployLayout};

/// Static file server settings for the serve step
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServeOptions {
    /// Server command line, port appended as last argument
    pub command: Vec<String>,
    pub port: u16,
}

impl ServeOptions {
    pub fn url(&self) -> String {
        format!("http://localhost:{}", self.port)
    }
}

/// Options for one build invocation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildOptions {
    pub mode: BuildMode,
    pub layout: DeployLayout,
    /// Compiler executable
    pub tool: String,
    /// Compiler `--target` value
    pub target: String,
    /// Static assets staged in the structured layout
    pub assets: AssetList,
    /// Serve step, if requested
    pub serve: Option<ServeOptions>,
}

impl BuildOptions {
    /// Options from configuration: debug mode, no serve step
    pub fn from_config(config: &Config) -> Self {
        Self {
            mode: BuildMode::Debug,
            layout: config.deploy.layout,
            tool: config.build.tool.clone(),
            target: config.build.target.clone(),
            assets: config.deploy.assets.clone(),
            serve: None,
        }
    }

    pub fn with_release(mut self, release: bool) -> Self {
        self.mode = BuildMode::from_release_flag(release);
        self
    }

    pub fn with_layout(mut self, layout: DeployLayout) -> Self {
        self.layout = layout;
        self
    }

    pub fn with_serve(mut self, serve: Option<ServeOptions>) -> Self {
        self.serve = serve;
        self
    }
}

impl Default for BuildOptions {
    fn default() -> Self {
        Self::from_config(&Config::default())
    }
}
