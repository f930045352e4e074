//! Config warning rendering

use wasmdist::config::ConfigWarning;

use crate::ui::primitives::icon::Icon;
use crate::ui::primitives::text::ColoredText;

pub fn render_config_warning(
    warning: &ConfigWarning,
    supports_color: bool,
    supports_unicode: bool,
) -> String {
    let location = match warning.line {
        Some(line) => format!("{}:{}", warning.file.display(), line),
        None => warning.file.display().to_string(),
    };

    let mut out = format!(
        "{} {} {}\n",
        Icon::Warning.colored(supports_color, supports_unicode),
        ColoredText::warning(format!("Unknown config key '{}'", warning.key)).render(supports_color),
        ColoredText::dim(location).render(supports_color)
    );

    if let Some(suggestion) = &warning.suggestion {
        out.push_str(&format!("  Did you mean '{}'?\n", suggestion));
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn warning_includes_location_and_suggestion() {
        let warning = ConfigWarning {
            key: "layuot".to_string(),
            file: PathBuf::from("wasmdist.toml"),
            line: Some(3),
            suggestion: Some("layout".to_string()),
        };

        let out = render_config_warning(&warning, false, false);

        assert_eq!(
            out,
            "[WARN] Unknown config key 'layuot' wasmdist.toml:3\n  Did you mean 'layout'?\n"
        );
    }
}
