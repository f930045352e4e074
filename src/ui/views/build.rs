//! Build command UI views

use std::path::Path;

use wasmdist::domain::value_objects::{BuildMode, DeployLayout};

use crate::ui::blocks::header::CommandHeader;
use crate::ui::blocks::summary::ResultSummary;
use crate::ui::primitives::icon::Icon;
use crate::ui::primitives::text::ColoredText;

/// Render the build command header
pub fn render_build_header(
    root: &Path,
    mode: BuildMode,
    layout: DeployLayout,
    supports_color: bool,
    supports_unicode: bool,
) -> String {
    let mut header = CommandHeader::new(Icon::Build, format!("Building in {}", mode.describe()));
    header.add("Project", root.display().to_string());
    header.add("Layout", layout.as_str());
    header.render(supports_color, supports_unicode)
}

/// `▶ Running: <command>`
pub fn render_command(command: &str, supports_color: bool, supports_unicode: bool) -> String {
    format!(
        "{} Running: {}\n",
        Icon::Run.colored(supports_color, supports_unicode),
        ColoredText::dim(command).render(supports_color)
    )
}

/// Deploy directory is ready
pub fn render_stage_start(
    deploy_dir: &Path,
    cleaned: bool,
    supports_color: bool,
    supports_unicode: bool,
) -> String {
    let verb = if cleaned { "Recreated" } else { "Staging into" };
    format!(
        "{} {} {}/\n",
        Icon::Copy.colored(supports_color, supports_unicode),
        verb,
        deploy_dir.display()
    )
}

/// One copied file or directory
pub fn render_copied(
    source: &Path,
    destination: &Path,
    files: usize,
    supports_color: bool,
    supports_unicode: bool,
) -> String {
    let count = if files == 1 {
        String::new()
    } else {
        ColoredText::dim(format!(" ({} files)", files)).render(supports_color)
    };
    let arrow = if supports_unicode { "→" } else { "->" };
    format!(
        "  {} {} {} {}{}\n",
        Icon::Success.colored(supports_color, supports_unicode),
        source.display(),
        arrow,
        destination.display(),
        count
    )
}

/// An asset entry that was not staged
pub fn render_skipped(
    path: &Path,
    reason: &str,
    supports_color: bool,
    supports_unicode: bool,
) -> String {
    format!(
        "  {} {}\n",
        Icon::Pending.colored(supports_color, supports_unicode),
        ColoredText::dim(format!("{} ({})", path.display(), reason)).render(supports_color)
    )
}

/// Build summary
pub fn render_build_result(
    deploy_dir: &Path,
    copied: usize,
    skipped: usize,
    supports_color: bool,
    supports_unicode: bool,
) -> String {
    let mut summary = ResultSummary::success(format!("Build Complete: {}/", deploy_dir.display()));
    summary.add_stat("files staged", copied);
    if skipped > 0 {
        summary.add_stat("assets not found", skipped);
    }
    summary.render(supports_color, supports_unicode)
}

/// Serve step banner
pub fn render_serve_start(url: &str, supports_color: bool, supports_unicode: bool) -> String {
    format!(
        "{} Serving on {} (Ctrl+C to stop)\n",
        Icon::Serve.colored(supports_color, supports_unicode),
        ColoredText::info(url).bold().render(supports_color)
    )
}

pub fn render_serve_stopped(supports_color: bool, supports_unicode: bool) -> String {
    format!(
        "{} Server stopped\n",
        Icon::Success.colored(supports_color, supports_unicode)
    )
}
