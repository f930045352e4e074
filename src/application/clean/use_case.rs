//! Clean Use Case
//!
//! Orchestrates removal of staged output.

use crate::domain::ports::{FileSystem, StageEvent, StageEventSink};
use crate::domain::value_objects::StagePaths;
use crate::error::{WasmdistError, WasmdistResult};

use super::options::CleanOptions;
use super::result::CleanResult;

/// Clean use case - removes the deploy (and optionally output) directory
pub struct CleanUseCase<FS, E>
where
    FS: FileSystem,
    E: StageEventSink,
{
    fs: FS,
    events: E,
}

impl<FS, E> CleanUseCase<FS, E>
where
    FS: FileSystem,
    E: StageEventSink,
{
    /// Create a new clean use case
    pub fn new(fs: FS, events: E) -> Self {
        Self { fs, events }
    }

    /// Execute the clean operation
    pub fn execute(&self, paths: &StagePaths, options: &CleanOptions) -> WasmdistResult<CleanResult> {
        if let Some(reason) = paths.deploy_dir_conflict() {
            return Err(WasmdistError::UnsafeDeployDir {
                path: paths.deploy_dir.clone(),
                reason,
            });
        }

        let mut result = CleanResult::new();
        let mut targets = vec![paths.deploy_dir.clone()];
        if options.include_output {
            if paths.root.starts_with(&paths.output_dir) {
                self.events.on_event(StageEvent::CleanSkipped {
                    path: paths.output_dir.clone(),
                    reason: "contains the project root".to_string(),
                });
                result.kept.push(paths.output_dir.clone());
            } else {
                targets.push(paths.output_dir.clone());
            }
        }

        for dir in targets {
            if !self.fs.exists(&dir) {
                self.events.on_event(StageEvent::CleanSkipped {
                    path: dir.clone(),
                    reason: "not found".to_string(),
                });
                result.missing.push(dir);
                continue;
            }

            if !options.dry_run {
                self.fs.remove_dir_all(&dir)?;
            }

            self.events.on_event(StageEvent::Removed {
                path: dir.clone(),
                dry_run: options.dry_run,
            });
            result.removed.push(dir);
        }

        Ok(result)
    }
}
