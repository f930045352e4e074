//! Deploy layout value object
//!
//! Decides how the deploy directory is populated from the compiler output.

use serde::{Deserialize, Serialize};

/// Strategy used to assemble the deploy directory
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Hash, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum DeployLayout {
    /// Keep the deploy directory and copy compiler output into its top level
    Flat,
    /// Recreate the deploy directory, put compiler output under `pkg/`
    /// and copy the static asset list next to it
    #[default]
    Structured,
}

impl DeployLayout {
    /// Whether the deploy directory is wiped before staging
    pub fn cleans_deploy_dir(&self) -> bool {
        matches!(self, DeployLayout::Structured)
    }

    /// Whether the static asset list is staged
    pub fn stages_assets(&self) -> bool {
        matches!(self, DeployLayout::Structured)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            DeployLayout::Flat => "flat",
            DeployLayout::Structured => "structured",
        }
    }

    /// Lenient parse used for environment overrides
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_lowercase().as_str() {
            "flat" => Some(DeployLayout::Flat),
            "structured" => Some(DeployLayout::Structured),
            _ => None,
        }
    }
}

impl std::fmt::Display for DeployLayout {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
