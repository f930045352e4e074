//! CLI Argument Parsing
//!
//! Global flags (`--release`, `--serve`, `--json`, ...) are accepted before or
//! after the subcommand; with no subcommand the tool builds.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use wasmdist::DeployLayout;

#[derive(clap::ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorWhen {
    Auto,
    Always,
    Never,
}

/// wasmdist - build a wasm-pack project and stage it for the web
#[derive(Parser, Debug)]
#[command(name = "wasmdist")]
#[command(author, version, about, long_about = None)]
#[command(after_help = "Running 'wasmdist' without a command is the same as 'wasmdist build'.")]
pub struct Cli {
    /// Build in release mode (optimized, smaller WASM)
    #[arg(long, global = true)]
    pub release: bool,

    /// Serve the deploy directory after building (blocks until Ctrl+C)
    #[arg(long, global = true)]
    pub serve: bool,

    /// Port for --serve [default: 8000]
    #[arg(long, global = true)]
    pub port: Option<u16>,

    /// How the deploy directory is assembled [default: structured]
    #[arg(long, global = true, value_enum)]
    pub layout: Option<DeployLayout>,

    /// Project root (default: nearest directory with wasmdist.toml or Cargo.toml)
    #[arg(long, global = true)]
    pub project_root: Option<PathBuf>,

    /// Output NDJSON events for CI
    #[arg(long, global = true)]
    pub json: bool,

    /// Color output mode
    #[arg(long, global = true, value_enum)]
    pub color: Option<ColorWhen>,

    /// Verbosity level (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Commands {
    /// Compile with wasm-pack and stage the deploy directory (default)
    Build,

    /// Remove the deploy directory
    Clean {
        /// Show what would be removed without removing it
        #[arg(long)]
        dry_run: bool,

        /// Also remove the compiler output directory
        #[arg(long)]
        all: bool,
    },
}
