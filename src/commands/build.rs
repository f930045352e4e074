//! Build command handler
//!
//! Compiles with the configured WebAssembly tool, stages the deploy
//! directory and optionally serves it.

use anyhow::Result;

use wasmdist::application::{BuildOptions, BuildUseCase, ServeOptions};
use wasmdist::config::{self, ConfigWarning};
use wasmdist::domain::ports::StageEventSink;
use wasmdist::infrastructure::{JsonEventSink, LocalFs, ProcessRunner};

use crate::cli::Cli;
use crate::commands::project_root::resolve_project_root;
use crate::ui::console::ConsoleEventSink;
use crate::ui::context::UiContext;
use crate::ui::views::config::render_config_warning;

/// Execute the build command
pub fn cmd_build(cli: &Cli) -> Result<()> {
    let ui = UiContext::new(cli.json, cli.verbose, cli.color);
    let root = resolve_project_root(cli.project_root.as_deref())?;

    let (config, warnings) = config::load_for_project(&root)?;
    print_config_warnings(&warnings, &ui);

    let serve = cli.serve.then(|| ServeOptions {
        command: config.serve.command.clone(),
        port: cli.port.unwrap_or(config.serve.port),
    });

    let options = BuildOptions::from_config(&config)
        .with_release(cli.release)
        .with_layout(cli.layout.unwrap_or(config.deploy.layout))
        .with_serve(serve);

    let paths = config.stage_paths(&root);

    let sink: Box<dyn StageEventSink> = if ui.json {
        Box::new(JsonEventSink::stdout())
    } else {
        Box::new(ConsoleEventSink::new(ui, &root))
    };

    let use_case = BuildUseCase::new(ProcessRunner::new(ui.json), LocalFs::new(), sink.as_ref());
    use_case.execute(&paths, &options)?;

    Ok(())
}

pub(crate) fn print_config_warnings(warnings: &[ConfigWarning], ui: &UiContext) {
    for warning in warnings {
        if ui.json {
            println!(
                "{}",
                serde_json::json!({
                    "event": "config_warning",
                    "key": warning.key,
                    "file": warning.file.display().to_string(),
                    "line": warning.line,
                    "suggestion": warning.suggestion,
                })
            );
        } else {
            eprint!("{}", render_config_warning(warning, ui.color, ui.unicode));
        }
    }
}
