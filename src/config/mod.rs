//! Configuration module for wasmdist
//!
//! Configuration hierarchy:
//! 1. CLI flags (highest priority, applied by the binary)
//! 2. Environment variables (WASMDIST_*)
//! 3. Project config (`wasmdist.toml` in the project root)
//! 4. Built-in defaults (lowest priority)

mod loader;
mod types;

pub use loader::{
    load_for_project, load_with_warnings, with_env_overrides, with_env_overrides_from,
    ConfigWarning, CONFIG_FILE_NAME,
};
pub use types::{BuildConfig, Config, DeployConfig, ServeConfig};
