use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::text::Span;
use ratatui::widgets::Paragraph;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Single-line bottom bar showing either a transient status message or the
/// key hints for the active page.
pub struct FooterBar {
    status_message: Option<String>,
    hint: &'static str,
}

impl FooterBar {
    pub fn new(status_message: Option<String>, hint: &'static str) -> Self {
        Self {
            status_message,
            hint,
        }
    }
}

impl crate::ui::Component for FooterBar {
    fn render(&self, f: &mut Frame, area: Rect) {
        let (text, style) = match &self.status_message {
            Some(message) => (
                format!(" {message}"),
                Style::default().bg(Color::DarkGray).fg(Color::Yellow),
            ),
            None => (
                format!(" {}", self.hint),
                Style::default().bg(Color::DarkGray).fg(Color::Gray),
            ),
        };
        let footer =
            Paragraph::new(Span::raw(truncate_to_width(&text, area.width as usize))).style(style);
        f.render_widget(footer, area);
    }
}

/// Trims the text to the given display width, accounting for wide glyphs.
fn truncate_to_width(text: &str, max_width: usize) -> String {
    if text.width() <= max_width {
        return text.to_string();
    }

    let mut truncated = String::new();
    let mut used = 0;
    for character in text.chars() {
        let character_width = character.width().unwrap_or(0);
        if used + character_width > max_width {
            break;
        }
        truncated.push(character);
        used += character_width;
    }

    truncated
}
