//! Clean options

/// Options for the clean command
#[derive(Debug, Clone, Copy, Default)]
pub struct CleanOptions {
    /// Report what would be removed without removing anything
    pub dry_run: bool,
    /// Also remove the compiler output directory
    pub include_output: bool,
}

impl CleanOptions {
    /// Create new clean options
    pub fn new() -> Self {
        Self::default()
    }

    /// Set dry run
    pub fn with_dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    /// Set whether the compiler output directory is removed too
    pub fn with_output(mut self, include_output: bool) -> Self {
        self.include_output = include_output;
        self
    }
}
