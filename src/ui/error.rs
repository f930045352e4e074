use wasmdist::WasmdistError;

use crate::ui::primitives::icon::Icon;
use crate::ui::primitives::text::ColoredText;

/// Process exit code for a failed command
pub fn exit_code(err: &anyhow::Error) -> i32 {
    err.downcast_ref::<WasmdistError>()
        .map(WasmdistError::exit_code)
        .unwrap_or(1)
}

/// Diagnostic printed to stderr in text mode
pub fn format_error(err: &anyhow::Error, supports_color: bool, supports_unicode: bool) -> String {
    let mut out = format!(
        "{} {}\n",
        Icon::Error.colored(supports_color, supports_unicode),
        ColoredText::error("Command failed").bold().render(supports_color)
    );

    out.push_str(&format!("  {}\n", err));

    if let Some(hint) = err.downcast_ref::<WasmdistError>().and_then(hint_for) {
        out.push_str(&format!(
            "{} {}\n",
            Icon::Arrow.colored(supports_color, supports_unicode),
            hint
        ));
    }

    out
}

/// NDJSON `error` event for JSON mode
pub fn error_json(err: &anyhow::Error) -> serde_json::Value {
    serde_json::json!({
        "event": "error",
        "message": err.to_string(),
        "exit_code": exit_code(err),
    })
}

fn hint_for(err: &WasmdistError) -> Option<&'static str> {
    match err {
        WasmdistError::CommandSpawn { .. } => {
            Some("Is the tool installed and on PATH? Set [build] tool in wasmdist.toml to override.")
        }
        WasmdistError::MissingOutputDir { .. } => {
            Some("Check [build] out_dir in wasmdist.toml matches where the compiler writes.")
        }
        WasmdistError::UnsafeDeployDir { .. } => {
            Some("Point [deploy] dir at a dedicated directory such as \"dist\".")
        }
        _ => None,
    }
}
