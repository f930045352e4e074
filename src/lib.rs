//! wasmdist - build and stage wasm-pack projects for the web
//!
//! wasmdist runs the WebAssembly packaging tool, assembles a deployable
//! directory from its output and the project's static web assets, and can
//! hand that directory to a local static file server.

pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;

// Re-exports for convenience
pub use application::{BuildOptions, BuildResult, BuildUseCase, CleanOptions, CleanUseCase};
pub use config::Config;
pub use domain::value_objects::{AssetList, BuildMode, DeployLayout, ExternalCommand, StagePaths};
pub use error::{WasmdistError, WasmdistResult};
