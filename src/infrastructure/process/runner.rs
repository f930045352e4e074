//! Process Runner
//!
//! Runs external tools with `std::process::Command`, inheriting the
//! terminal so their own progress output stays visible.

use std::process::{Command, ExitStatus, Stdio};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use crate::domain::ports::{CommandRunner, RunOutcome};
use crate::domain::value_objects::ExternalCommand;
use crate::error::{WasmdistError, WasmdistResult};

/// CommandRunner backed by real subprocesses
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessRunner {
    /// Route child stdout to our stderr so stdout carries only NDJSON
    pub json: bool,
}

impl ProcessRunner {
    pub fn new(json: bool) -> Self {
        Self { json }
    }

    fn command(&self, command: &ExternalCommand) -> Command {
        let mut cmd = Command::new(command.program());
        cmd.args(command.arguments()).stdin(Stdio::inherit());

        if let Some(dir) = command.working_dir() {
            cmd.current_dir(dir);
        }

        if self.json {
            cmd.stdout(Stdio::from(std::io::stderr()))
                .stderr(Stdio::inherit());
        } else {
            cmd.stdout(Stdio::inherit()).stderr(Stdio::inherit());
        }

        cmd
    }

    fn status(&self, command: &ExternalCommand) -> WasmdistResult<ExitStatus> {
        self.command(command)
            .status()
            .map_err(|source| WasmdistError::CommandSpawn {
                command: command.display(),
                source,
            })
    }
}

fn check_status(command: &ExternalCommand, status: ExitStatus) -> WasmdistResult<()> {
    if status.success() {
        return Ok(());
    }

    // Killed by a signal: no code to hand through
    Err(WasmdistError::CommandFailed {
        command: command.display(),
        code: status.code().filter(|c| *c != 0).unwrap_or(1),
    })
}

impl CommandRunner for ProcessRunner {
    fn run(&self, command: &ExternalCommand) -> WasmdistResult<()> {
        let status = self.status(command)?;
        check_status(command, status)
    }

    fn run_until_interrupted(&self, command: &ExternalCommand) -> WasmdistResult<RunOutcome> {
        // Ctrl+C reaches the child through the process group; keep ourselves
        // alive long enough to see it exit.
        let interrupted = Arc::new(AtomicBool::new(false));
        let interrupted_clone = interrupted.clone();

        ctrlc::set_handler(move || {
            interrupted_clone.store(true, Ordering::SeqCst);
        })
        .map_err(|e| WasmdistError::Io(std::io::Error::other(e.to_string())))?;

        let status = self.status(command)?;

        if interrupted.load(Ordering::SeqCst) {
            return Ok(RunOutcome::Interrupted);
        }

        check_status(command, status).map(|()| RunOutcome::Exited)
    }
}
