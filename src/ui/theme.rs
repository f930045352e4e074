use crossterm::style::Color;

/// Design tokens for the wasmdist CLI UI.
///
/// All colors and icons used by the UI come from this module.
pub mod colors {
    use super::Color;

    pub const SUCCESS: Color = Color::Green;
    pub const ERROR: Color = Color::Red;
    pub const WARNING: Color = Color::Yellow;
    pub const INFO: Color = Color::Cyan;
    pub const DIM: Color = Color::DarkGrey;
}

pub mod icons {
    pub const SUCCESS: &str = "✓";
    pub const ERROR: &str = "✗";
    pub const WARNING: &str = "⚠";
    pub const PENDING: &str = "○";
    pub const ARROW: &str = "↳";

    // Command identifiers (used in headers).
    pub const BUILD: &str = "🔧";
    pub const RUN: &str = "▶";
    pub const COPY: &str = "📦";
    pub const SERVE: &str = "🚀";
    pub const CLEAN: &str = "🧹";
}

pub mod icons_ascii {
    pub const SUCCESS: &str = "[OK]";
    pub const ERROR: &str = "[FAIL]";
    pub const WARNING: &str = "[WARN]";
    pub const PENDING: &str = "[ ]";
    pub const ARROW: &str = "[>]";

    pub const BUILD: &str = "[BUILD]";
    pub const RUN: &str = "[RUN]";
    pub const COPY: &str = "[COPY]";
    pub const SERVE: &str = "[SERVE]";
    pub const CLEAN: &str = "[CLEAN]";
}
