use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use unicode_width::UnicodeWidthStr;

use crate::ui::Component;

/// Single-line top bar showing the app version and the configured repository.
pub struct StatusBar {
    repo_label: Option<String>,
}

impl StatusBar {
    pub fn new(repo_label: Option<String>) -> Self {
        Self { repo_label }
    }
}

impl Component for StatusBar {
    fn render(&self, f: &mut Frame, area: Rect) {
        let version = env!("CARGO_PKG_VERSION");
        let left_text = Span::styled(
            format!(" octoview v{version}"),
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        );
        let right_text = match &self.repo_label {
            Some(label) => format!("{label} "),
            None => "not configured ".to_string(),
        };
        let left_width = u16::try_from(left_text.width()).unwrap_or(u16::MAX);
        let right_width = u16::try_from(right_text.as_str().width()).unwrap_or(u16::MAX);
        let padding = area
            .width
            .saturating_sub(left_width.saturating_add(right_width));
        let status_bar = Paragraph::new(Line::from(vec![
            left_text,
            Span::raw(" ".repeat(padding as usize)),
            Span::styled(right_text, Style::default().fg(Color::Gray)),
        ]))
        .style(Style::default().bg(Color::DarkGray).fg(Color::White));
        f.render_widget(status_bar, area);
    }
}
