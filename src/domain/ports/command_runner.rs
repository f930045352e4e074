//! CommandRunner port - abstraction over subprocess execution
//!
//! Every external tool (the WebAssembly compiler, the static file server)
//! goes through this trait. A non-zero exit is reported as
//! `WasmdistError::CommandFailed` carrying the child's exit code, which the
//! binary turns into its own exit status.

use crate::domain::value_objects::ExternalCommand;
use crate::error::WasmdistResult;

/// How a long-running command ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunOutcome {
    /// The command exited on its own with status 0
    Exited,
    /// The user interrupted the command (Ctrl+C)
    Interrupted,
}

/// Synchronous command execution with inherited stdio
pub trait CommandRunner {
    /// Run `command` to completion.
    ///
    /// Errors with `CommandFailed` on a non-zero exit and with
    /// `CommandSpawn` when the program cannot be started.
    fn run(&self, command: &ExternalCommand) -> WasmdistResult<()>;

    /// Run a command that is expected to block until the user stops it.
    ///
    /// An interrupt is a normal way to end such a command and is reported
    /// as `RunOutcome::Interrupted` rather than as a failure.
    fn run_until_interrupted(&self, command: &ExternalCommand) -> WasmdistResult<RunOutcome> {
        self.run(command).map(|()| RunOutcome::Exited)
    }
}

impl<T: CommandRunner + ?Sized> CommandRunner for &T {
    fn run(&self, command: &ExternalCommand) -> WasmdistResult<()> {
        (**self).run(command)
    }

    fn run_until_interrupted(&self, command: &ExternalCommand) -> WasmdistResult<RunOutcome> {
        (**self).run_until_interrupted(command)
    }
}
