//! Clean command UI views

use std::path::Path;

use wasmdist::application::CleanResult;

use crate::ui::blocks::header::CommandHeader;
use crate::ui::blocks::summary::ResultSummary;
use crate::ui::primitives::icon::Icon;

/// Render the clean command header
pub fn render_clean_header(
    root: &Path,
    dry_run: bool,
    supports_color: bool,
    supports_unicode: bool,
) -> String {
    let action = if dry_run { "Clean (Dry Run)" } else { "Clean" };
    let mut header = CommandHeader::new(Icon::Clean, format!("wasmdist {}", action));
    header.add("Project", root.display().to_string());
    header.render(supports_color, supports_unicode)
}

/// One removed directory
pub fn render_removed(path: &Path, dry_run: bool, supports_color: bool, supports_unicode: bool) -> String {
    let verb = if dry_run { "Would remove" } else { "Removed" };
    format!(
        "  {} {} {}/\n",
        Icon::Success.colored(supports_color, supports_unicode),
        verb,
        path.display()
    )
}

/// Render the clean result summary
pub fn render_clean_result(
    result: &CleanResult,
    dry_run: bool,
    supports_color: bool,
    supports_unicode: bool,
) -> String {
    let title = if dry_run {
        "Dry Run Complete"
    } else if result.is_empty() {
        "Nothing to Clean"
    } else {
        "Clean Complete"
    };

    let mut summary = ResultSummary::success(title);
    if dry_run {
        summary.add_stat("directories would be removed", result.removed.len());
        if !result.is_empty() {
            summary.with_next_step("Run without --dry-run to remove");
        }
    } else {
        summary.add_stat("directories removed", result.removed.len());
    }

    summary.render(supports_color, supports_unicode)
}
