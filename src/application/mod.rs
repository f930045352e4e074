//! Application Layer
//!
//! Use cases that orchestrate the build flow.
//! This layer:
//! - Depends on Domain layer (value objects, ports)
//! - Coordinates between Infrastructure and Domain
//!
//! ## Use Cases
//!
//! - `BuildUseCase` - compile, stage the deploy directory, optionally serve
//! - `CleanUseCase` - remove staged output

pub mod build;
pub mod clean;

pub use build::{BuildOptions, BuildResult, BuildUseCase, CopiedItem, ServeOptions};
pub use clean::{CleanOptions, CleanResult, CleanUseCase};
