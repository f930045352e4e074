//! External command value object
//!
//! Describes a subprocess invocation without running it, so the exact
//! command line can be rendered, asserted on in tests, and handed to a
//! `CommandRunner`.

use std::path::{Path, PathBuf};

use super::BuildMode;

/// A program with arguments and an optional working directory
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExternalCommand {
    program: String,
    args: Vec<String>,
    cwd: Option<PathBuf>,
}

impl ExternalCommand {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            args: Vec::new(),
            cwd: None,
        }
    }

    pub fn arg(mut self, arg: impl Into<String>) -> Self {
        self.args.push(arg.into());
        self
    }

    pub fn args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.args.extend(args.into_iter().map(Into::into));
        self
    }

    pub fn current_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.cwd = Some(dir.into());
        self
    }

    /// `<tool> build --target <target> [--release]`
    pub fn compiler(tool: &str, target: &str, mode: BuildMode) -> Self {
        let cmd = Self::new(tool).args(["build", "--target", target]);
        match mode.compiler_flag() {
            Some(flag) => cmd.arg(flag),
            None => cmd,
        }
    }

    /// Static file server: the configured command line with the port appended.
    ///
    /// Returns `None` when the command line is empty.
    pub fn file_server(command_line: &[String], port: u16) -> Option<Self> {
        let (program, rest) = command_line.split_first()?;
        Some(
            Self::new(program.as_str())
                .args(rest.iter().cloned())
                .arg(port.to_string()),
        )
    }

    pub fn program(&self) -> &str {
        &self.program
    }

    pub fn arguments(&self) -> &[String] {
        &self.args
    }

    pub fn working_dir(&self) -> Option<&Path> {
        self.cwd.as_deref()
    }

    pub fn has_arg(&self, arg: &str) -> bool {
        self.args.iter().any(|a| a == arg)
    }

    /// Command line as typed in a shell (no quoting)
    pub fn display(&self) -> String {
        std::iter::once(self.program.as_str())
            .chain(self.args.iter().map(String::as_str))
            .collect::<Vec<_>>()
            .join(" ")
    }
}

impl std::fmt::Display for ExternalCommand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.display())
    }
}
