//! wasmdist CLI - build and stage wasm-pack projects for the web
//!
//! Usage: wasmdist [--release] [--serve] [COMMAND]
//!
//! Commands:
//!   build   Compile and stage the deploy directory (default)
//!   clean   Remove staged output

use anyhow::Result;
use clap::Parser;

mod cli;
mod commands;
mod ui;

use cli::{Cli, Commands};
use ui::context::UiContext;

fn main() {
    let cli = Cli::parse();

    if let Err(err) = run(&cli) {
        let ui = UiContext::new(cli.json, cli.verbose, cli.color);
        if ui.json {
            println!("{}", ui::error::error_json(&err));
        } else {
            eprint!("{}", ui::error::format_error(&err, ui.color, ui.unicode));
        }
        std::process::exit(ui::error::exit_code(&err));
    }
}

fn run(cli: &Cli) -> Result<()> {
    match &cli.command {
        None | Some(Commands::Build) => commands::build::cmd_build(cli),
        Some(Commands::Clean { dry_run, all }) => commands::clean::cmd_clean(cli, *dry_run, *all),
    }
}
