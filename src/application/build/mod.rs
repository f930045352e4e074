//! Build Use Case
//!
//! Runs the WebAssembly compiler, assembles the deploy directory from its
//! output plus the static asset list, and optionally hands the result to a
//! static file server.
//!
//! Any failing step is fatal: a failing compiler leaves the deploy
//! directory untouched.

mod options;
mod result;
mod use_case;


pub use options::{BuildOptions, ServeOptions};
pub use result::{BuildResult, CopiedItem};
pub use use_case::BuildUseCase;
