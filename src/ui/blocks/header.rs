use crate::ui::primitives::icon::Icon;
use crate::ui::primitives::text::ColoredText;

/// Opening block of a command: icon, title and aligned `label: value` lines
#[derive(Debug, Clone)]
pub struct CommandHeader {
    icon: Icon,
    title: String,
    fields: Vec<(String, String)>,
}

impl CommandHeader {
    pub fn new(icon: Icon, title: impl Into<String>) -> Self {
        Self {
            icon,
            title: title.into(),
            fields: Vec::new(),
        }
    }

    pub fn add(&mut self, label: impl Into<String>, value: impl Into<String>) {
        self.fields.push((label.into(), value.into()));
    }

    pub fn render(&self, supports_color: bool, supports_unicode: bool) -> String {
        let mut out = format!(
            "{} {}\n",
            self.icon.colored(supports_color, supports_unicode),
            ColoredText::info(self.title.as_str())
                .bold()
                .render(supports_color)
        );

        let width = self
            .fields
            .iter()
            .map(|(label, _)| label.len() + 1)
            .max()
            .unwrap_or(0);

        for (label, value) in &self.fields {
            out.push_str(&format!(
                "  {:<width$} {}\n",
                format!("{label}:"),
                ColoredText::dim(value.as_str()).render(supports_color),
            ));
        }
        out
    }
}
