//! Console Event Sink
//!
//! Human-readable progress for text mode. `-v` adds per-item lines.

use std::path::{Path, PathBuf};

use wasmdist::domain::ports::{StageEvent, StageEventSink};

use crate::ui::context::UiContext;
use crate::ui::views::build::{
    render_build_header, render_build_result, render_command, render_copied, render_serve_start,
    render_serve_stopped, render_skipped, render_stage_start,
};
use crate::ui::views::clean::render_removed;

/// Event sink that prints to stdout
pub struct ConsoleEventSink {
    ui: UiContext,
    root: PathBuf,
}

impl ConsoleEventSink {
    pub fn new(ui: UiContext, root: impl Into<PathBuf>) -> Self {
        Self {
            ui,
            root: root.into(),
        }
    }

    fn rel<'a>(&self, path: &'a Path) -> &'a Path {
        path.strip_prefix(&self.root).unwrap_or(path)
    }

    /// Text for an event, or `None` when hidden at this verbosity
    pub fn render(&self, event: &StageEvent) -> Option<String> {
        let (color, unicode) = (self.ui.color, self.ui.unicode);
        let out = match event {
            StageEvent::Started { root, mode, layout } => {
                render_build_header(root, *mode, *layout, color, unicode)
            }
            StageEvent::CommandStarted { command } => render_command(command, color, unicode),
            StageEvent::StageStarted {
                deploy_dir,
                cleaned,
            } => render_stage_start(self.rel(deploy_dir), *cleaned, color, unicode),
            StageEvent::ItemCopied {
                source,
                destination,
                files,
            } => render_copied(
                self.rel(source),
                self.rel(destination),
                *files,
                color,
                unicode,
            ),
            StageEvent::ItemSkipped { path, reason } => {
                if self.ui.verbose == 0 {
                    return None;
                }
                render_skipped(path, reason, color, unicode)
            }
            StageEvent::Completed {
                deploy_dir,
                copied,
                skipped,
            } => render_build_result(self.rel(deploy_dir), *copied, *skipped, color, unicode),
            StageEvent::ServeStarted { url, .. } => render_serve_start(url, color, unicode),
            StageEvent::ServeStopped { .. } => render_serve_stopped(color, unicode),
            StageEvent::Removed { path, dry_run } => {
                render_removed(self.rel(path), *dry_run, color, unicode)
            }
            StageEvent::CleanSkipped { path, reason } => {
                render_skipped(self.rel(path), reason, color, unicode)
            }
        };
        Some(out)
    }
}

impl StageEventSink for ConsoleEventSink {
    fn on_event(&self, event: StageEvent) {
        if let Some(text) = self.render(&event) {
            print!("{}", text);
        }
    }
}
