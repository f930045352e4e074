use crate::ui::primitives::icon::Icon;
use crate::ui::primitives::text::ColoredText;

/// Closing block of a command: title, counters, optional hint
#[derive(Debug, Clone)]
pub struct ResultSummary {
    title: String,
    stats: Vec<(String, usize)>,
    next_step: Option<String>,
}

impl ResultSummary {
    pub fn success(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            stats: Vec::new(),
            next_step: None,
        }
    }

    pub fn add_stat(&mut self, label: impl Into<String>, count: usize) {
        self.stats.push((label.into(), count));
    }

    pub fn with_next_step(&mut self, hint: impl Into<String>) {
        self.next_step = Some(hint.into());
    }

    pub fn render(&self, supports_color: bool, supports_unicode: bool) -> String {
        let mut out = format!(
            "{} {}\n",
            Icon::Success.colored(supports_color, supports_unicode),
            ColoredText::success(self.title.as_str())
                .bold()
                .render(supports_color)
        );

        for (label, count) in &self.stats {
            out.push_str(&format!("  {} {}\n", count, label));
        }

        if let Some(next_step) = &self.next_step {
            out.push_str(&format!(
                "{} {} {}\n",
                Icon::Arrow.colored(supports_color, supports_unicode),
                ColoredText::dim("Next:").render(supports_color),
                next_step
            ));
        }

        out
    }
}
