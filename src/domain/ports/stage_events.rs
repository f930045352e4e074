//! Stage Event Port
//!
//! Provides an observable interface for build and staging operations.
//! Enables progress reporting, JSON event streams, and debugging.

use std::path::PathBuf;

use crate::domain::value_objects::{BuildMode, DeployLayout};

/// Event emitted while building and staging
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StageEvent {
    /// Build started
    Started {
        root: PathBuf,
        mode: BuildMode,
        layout: DeployLayout,
    },

    /// An external command is about to run
    CommandStarted { command: String },

    /// Deploy directory is ready to receive files
    StageStarted { deploy_dir: PathBuf, cleaned: bool },

    /// A file or directory was copied into the deploy directory
    ItemCopied {
        source: PathBuf,
        destination: PathBuf,
        files: usize,
    },

    /// An asset entry was not staged
    ItemSkipped { path: PathBuf, reason: String },

    /// Staging finished
    Completed {
        deploy_dir: PathBuf,
        copied: usize,
        skipped: usize,
    },

    /// File server is starting
    ServeStarted { url: String, dir: PathBuf },

    /// File server stopped (interrupt or normal exit)
    ServeStopped { interrupted: bool },

    /// A directory was removed (or would be, in a dry run)
    Removed { path: PathBuf, dry_run: bool },

    /// A directory was not removed
    CleanSkipped { path: PathBuf, reason: String },
}

/// Trait for receiving stage events
///
/// Implementations can be:
/// - ConsoleEventSink: human-readable progress in the terminal
/// - JsonEventSink: NDJSON event stream for CI
/// - NoopEventSink: silent operation
pub trait StageEventSink {
    /// Handle a stage event
    fn on_event(&self, event: StageEvent);
}

impl<T: StageEventSink + ?Sized> StageEventSink for &T {
    fn on_event(&self, event: StageEvent) {
        (**self).on_event(event)
    }
}

/// No-op event sink for silent operation
pub struct NoopEventSink;

impl StageEventSink for NoopEventSink {
    fn on_event(&self, _event: StageEvent) {}
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    struct RecordingEventSink {
        events: RefCell<Vec<StageEvent>>,
    }

    impl StageEventSink for RecordingEventSink {
        fn on_event(&self, event: StageEvent) {
            self.events.borrow_mut().push(event);
        }
    }

    #[test]
    fn recording_sink_captures_events() {
        let sink = RecordingEventSink {
            events: RefCell::new(Vec::new()),
        };

        sink.on_event(StageEvent::CommandStarted {
            command: "wasm-pack build --target web".to_string(),
        });
        (&sink).on_event(StageEvent::ServeStopped { interrupted: true });

        let events = sink.events.borrow();
        assert_eq!(events.len(), 2);
        assert!(matches!(events[1], StageEvent::ServeStopped { interrupted: true }));
    }

    #[test]
    fn noop_sink_accepts_events() {
        NoopEventSink.on_event(StageEvent::ServeStopped { interrupted: false });
    }
}
