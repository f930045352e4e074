//! Subprocess execution
//!
//! Concrete implementation of the CommandRunner port.

mod runner;

pub use runner::ProcessRunner;
