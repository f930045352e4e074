//! Build Use Case
//!
//! Orchestrates compile, stage and serve.

use std::path::{Path, PathBuf};

use crate::config::CONFIG_FILE_NAME;
use crate::domain::ports::{CommandRunner, FileSystem, RunOutcome, StageEvent, StageEventSink};
use crate::domain::value_objects::{DeployLayout, ExternalCommand, StagePaths};
use crate::error::{WasmdistError, WasmdistResult};

use super::options::{BuildOptions, ServeOptions};
use super::result::BuildResult;

/// Build use case - compiler invocation, deploy staging, serve handoff
pub struct BuildUseCase<R, FS, E>
where
    R: CommandRunner,
    FS: FileSystem,
    E: StageEventSink,
{
    runner: R,
    fs: FS,
    events: E,
}

impl<R, FS, E> BuildUseCase<R, FS, E>
where
    R: CommandRunner,
    FS: FileSystem,
    E: StageEventSink,
{
    /// Create a new build use case
    pub fn new(runner: R, fs: FS, events: E) -> Self {
        Self { runner, fs, events }
    }

    /// Run the whole pipeline. Blocks during the serve step, if any.
    pub fn execute(&self, paths: &StagePaths, options: &BuildOptions) -> WasmdistResult<BuildResult> {
        self.events.on_event(StageEvent::Started {
            root: paths.root.clone(),
            mode: options.mode,
            layout: options.layout,
        });

        if let Some(reason) = paths.deploy_dir_conflict() {
            return Err(WasmdistError::UnsafeDeployDir {
                path: paths.deploy_dir.clone(),
                reason,
            });
        }

        self.compile(paths, options)?;

        let mut result = self.stage(paths, options)?;

        if let Some(serve) = &options.serve {
            result.served = Some(self.serve(&paths.deploy_dir, serve)?);
        }

        Ok(result)
    }

    /// Run the compiler in the project root and check it produced output
    pub fn compile(&self, paths: &StagePaths, options: &BuildOptions) -> WasmdistResult<()> {
        let command = ExternalCommand::compiler(&options.tool, &options.target, options.mode)
            .current_dir(&paths.root);

        self.events.on_event(StageEvent::CommandStarted {
            command: command.display(),
        });
        self.runner.run(&command)?;

        if !self.fs.is_dir(&paths.output_dir) {
            return Err(WasmdistError::MissingOutputDir {
                path: paths.output_dir.clone(),
            });
        }

        Ok(())
    }

    /// Assemble the deploy directory from compiler output (and assets)
    pub fn stage(&self, paths: &StagePaths, options: &BuildOptions) -> WasmdistResult<BuildResult> {
        let deploy_dir = &paths.deploy_dir;
        let mut result = BuildResult::new(deploy_dir.clone());

        if options.layout.cleans_deploy_dir() && self.fs.exists(deploy_dir) {
            self.fs.remove_dir_all(deploy_dir)?;
            result.cleaned = true;
        }
        self.fs.create_dir_all(deploy_dir)?;

        self.events.on_event(StageEvent::StageStarted {
            deploy_dir: deploy_dir.clone(),
            cleaned: result.cleaned,
        });

        match options.layout {
            DeployLayout::Flat => {
                for entry in self.fs.list_dir(&paths.output_dir)? {
                    let Some(name) = entry.file_name() else {
                        continue;
                    };
                    let destination = deploy_dir.join(name);
                    self.copy_entry(&entry, destination, &mut result)?;
                }
            }
            DeployLayout::Structured => {
                self.copy_entry(&paths.output_dir, paths.package_dir(), &mut result)?;
            }
        }

        if options.layout.stages_assets() {
            for asset in options.assets.iter() {
                let source = paths.root.join(asset);
                if !self.fs.exists(&source) {
                    self.events.on_event(StageEvent::ItemSkipped {
                        path: asset.to_path_buf(),
                        reason: "not found".to_string(),
                    });
                    result.add_skipped(asset.to_path_buf());
                    continue;
                }
                self.copy_entry(&source, deploy_dir.join(asset), &mut result)?;
            }
        }

        self.events.on_event(StageEvent::Completed {
            deploy_dir: deploy_dir.clone(),
            copied: result.file_count(),
            skipped: result.skipped.len(),
        });

        Ok(result)
    }

    /// Serve the deploy directory until the server exits or is interrupted
    pub fn serve(&self, deploy_dir: &Path, serve: &ServeOptions) -> WasmdistResult<RunOutcome> {
        let command = ExternalCommand::file_server(&serve.command, serve.port)
            .ok_or_else(|| WasmdistError::InvalidConfig {
                file: PathBuf::from(CONFIG_FILE_NAME),
                message: "serve.command must not be empty".to_string(),
            })?
            .current_dir(deploy_dir);

        self.events.on_event(StageEvent::ServeStarted {
            url: serve.url(),
            dir: deploy_dir.to_path_buf(),
        });
        self.events.on_event(StageEvent::CommandStarted {
            command: command.display(),
        });

        let outcome = self.runner.run_until_interrupted(&command)?;

        self.events.on_event(StageEvent::ServeStopped {
            interrupted: outcome == RunOutcome::Interrupted,
        });

        Ok(outcome)
    }

    fn copy_entry(
        &self,
        source: &Path,
        destination: PathBuf,
        result: &mut BuildResult,
    ) -> WasmdistResult<()> {
        let files = if self.fs.is_dir(source) {
            self.fs.copy_dir(source, &destination)?
        } else {
            self.fs.copy_file(source, &destination)?;
            1
        };

        self.events.on_event(StageEvent::ItemCopied {
            source: source.to_path_buf(),
            destination: destination.clone(),
            files,
        });
        result.add_copied(source.to_path_buf(), destination, files);

        Ok(())
    }
}
