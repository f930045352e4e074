//! Infrastructure Layer
//!
//! Concrete implementations of domain ports.
//! This layer handles all I/O operations.
//!
//! ## Structure
//!
//! - `fs/` - Local file system with recursive copy
//! - `process/` - Subprocess execution
//! - `events/` - Event sinks (NDJSON)

pub mod events;
pub mod fs;
pub mod process;

// Re-export for convenience
pub use events::JsonEventSink;
pub use fs::LocalFs;
pub use process::ProcessRunner;
