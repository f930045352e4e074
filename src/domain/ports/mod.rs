//! Domain Ports (Interfaces)
//!
//! These traits define the boundaries of the domain layer.
//! Infrastructure layer provides concrete implementations.

pub mod command_runner;
pub mod file_system;
pub mod stage_events;

pub use command_runner::{CommandRunner, RunOutcome};
pub use file_system::FileSystem;
pub use stage_events::{NoopEventSink, StageEvent, StageEventSink};
