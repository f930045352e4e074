//! Clean command handler
//!
//! Removes the deploy directory (and with `--all` the compiler output).

use anyhow::Result;

use wasmdist::application::{CleanOptions, CleanUseCase};
use wasmdist::config;
use wasmdist::domain::ports::StageEventSink;
use wasmdist::infrastructure::{JsonEventSink, LocalFs};

use crate::cli::Cli;
use crate::commands::build::print_config_warnings;
use crate::commands::project_root::resolve_project_root;
use crate::ui::console::ConsoleEventSink;
use crate::ui::context::UiContext;
use crate::ui::views::clean::{render_clean_header, render_clean_result};

/// Execute the clean command
pub fn cmd_clean(cli: &Cli, dry_run: bool, all: bool) -> Result<()> {
    let ui = UiContext::new(cli.json, cli.verbose, cli.color);
    let root = resolve_project_root(cli.project_root.as_deref())?;

    let (config, warnings) = config::load_for_project(&root)?;
    print_config_warnings(&warnings, &ui);

    let paths = config.stage_paths(&root);
    let options = CleanOptions::new().with_dry_run(dry_run).with_output(all);

    let sink: Box<dyn StageEventSink> = if ui.json {
        Box::new(JsonEventSink::stdout())
    } else {
        print!(
            "{}",
            render_clean_header(&root, dry_run, ui.color, ui.unicode)
        );
        Box::new(ConsoleEventSink::new(ui, &root))
    };

    let result = CleanUseCase::new(LocalFs::new(), sink.as_ref()).execute(&paths, &options)?;

    if ui.json {
        println!(
            "{}",
            serde_json::json!({
                "event": "complete",
                "command": "clean",
                "status": "success",
                "removed": result.removed.len(),
                "missing": result.missing.len(),
                "dry_run": dry_run,
            })
        );
    } else {
        print!(
            "{}",
            render_clean_result(&result, dry_run, ui.color, ui.unicode)
        );
    }

    Ok(())
}
