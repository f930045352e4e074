//! JSON Event Sink
//!
//! Outputs stage events as NDJSON for CI/automation consumption.

use std::io::{self, Write};
use std::sync::Mutex;

use crate::domain::ports::{StageEvent, StageEventSink};

/// Event sink that outputs NDJSON events to stdout
pub struct JsonEventSink {
    writer: Mutex<Box<dyn Write + Send>>,
}

impl JsonEventSink {
    /// Create a new JSON event sink writing to stdout
    pub fn stdout() -> Self {
        Self {
            writer: Mutex::new(Box::new(io::stdout())),
        }
    }

    /// Create a JSON event sink writing to a custom writer (for testing)
    pub fn with_writer<W: Write + Send + 'static>(writer: W) -> Self {
        Self {
            writer: Mutex::new(Box::new(writer)),
        }
    }

    fn write_event(&self, event: serde_json::Value) {
        if let Ok(mut writer) = self.writer.lock() {
            let _ = writeln!(writer, "{}", event);
            let _ = writer.flush();
        }
    }
}

/// JSON shape of a stage event
pub fn stage_event_json(event: &StageEvent) -> serde_json::Value {
    match event {
        StageEvent::Started { root, mode, layout } => serde_json::json!({
            "event": "build_start",
            "command": "build",
            "root": root.display().to_string(),
            "mode": mode.as_str(),
            "layout": layout.as_str(),
        }),

        StageEvent::CommandStarted { command } => serde_json::json!({
            "event": "command",
            "command": "build",
            "run": command,
        }),

        StageEvent::StageStarted {
            deploy_dir,
            cleaned,
        } => serde_json::json!({
            "event": "stage_start",
            "command": "build",
            "deploy_dir": deploy_dir.display().to_string(),
            "cleaned": cleaned,
        }),

        StageEvent::ItemCopied {
            source,
            destination,
            files,
        } => serde_json::json!({
            "event": "item_copied",
            "command": "build",
            "source": source.display().to_string(),
            "destination": destination.display().to_string(),
            "files": files,
        }),

        StageEvent::ItemSkipped { path, reason } => serde_json::json!({
            "event": "item_skipped",
            "command": "build",
            "path": path.display().to_string(),
            "reason": reason,
        }),

        StageEvent::Completed {
            deploy_dir,
            copied,
            skipped,
        } => serde_json::json!({
            "event": "complete",
            "command": "build",
            "status": "success",
            "deploy_dir": deploy_dir.display().to_string(),
            "copied": copied,
            "skipped": skipped,
        }),

        StageEvent::ServeStarted { url, dir } => serde_json::json!({
            "event": "serve",
            "command": "build",
            "url": url,
            "dir": dir.display().to_string(),
        }),

        StageEvent::ServeStopped { interrupted } => serde_json::json!({
            "event": "serve_stopped",
            "command": "build",
            "interrupted": interrupted,
        }),

        StageEvent::Removed { path, dry_run } => serde_json::json!({
            "event": "removed",
            "command": "clean",
            "path": path.display().to_string(),
            "dry_run": dry_run,
        }),

        StageEvent::CleanSkipped { path, reason } => serde_json::json!({
            "event": "item_skipped",
            "command": "clean",
            "path": path.display().to_string(),
            "reason": reason,
        }),
    }
}

impl StageEventSink for JsonEventSink {
    fn on_event(&self, event: StageEvent) {
        self.write_event(stage_event_json(&event));
    }
}
