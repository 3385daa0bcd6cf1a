use ratatui::Frame;
use ratatui::layout::{Constraint, Rect};
use ratatui::style::{Color, Style};
use ratatui::text::Span;
use ratatui::widgets::{Block, Borders, Paragraph, Row, Table};

use crate::app::BrowserManager;
use crate::ui::icon::Icon;
use crate::ui::{Page, style};

/// Directory listing page: one table row per remote entry.
pub struct BrowserPage<'a> {
    browser: &'a mut BrowserManager,
}

impl<'a> BrowserPage<'a> {
    pub fn new(browser: &'a mut BrowserManager) -> Self {
        Self { browser }
    }

    fn title(&self) -> String {
        let path = self.browser.navigation.current_path();
        let location = if path.is_empty() {
            "/".to_string()
        } else {
            format!("/{path}")
        };

        if self.browser.is_loading {
            format!(" {location} {} ", Icon::current_spinner())
        } else {
            format!(" {location} ")
        }
    }
}

impl Page for BrowserPage<'_> {
    fn render(&mut self, f: &mut Frame, area: Rect) {
        let block = Block::default()
            .borders(Borders::ALL)
            .title(Span::styled(self.title(), Style::default().fg(Color::Cyan)));

        if let Some(error) = &self.browser.error {
            let paragraph = Paragraph::new(Span::styled(format!("  {error}"), style::error()))
                .block(block);
            f.render_widget(paragraph, area);

            return;
        }

        if self.browser.entries.is_empty() && !self.browser.is_loading {
            let paragraph = Paragraph::new(Span::styled(
                "  (empty directory)",
                Style::default().fg(Color::DarkGray),
            ))
            .block(block);
            f.render_widget(paragraph, area);

            return;
        }

        let rows: Vec<Row<'_>> = self
            .browser
            .entries
            .iter()
            .map(|entry| {
                let name_style = if entry.is_dir() {
                    style::directory()
                } else {
                    style::file()
                };
                let kind_label = if entry.is_dir() { "dir" } else { "file" };

                Row::new(vec![
                    Span::raw(format!(" {} ", Icon::for_entry(entry))),
                    Span::styled(entry.name.clone(), name_style),
                    Span::styled(kind_label, Style::default().fg(Color::DarkGray)),
                ])
            })
            .collect();

        let table = Table::new(
            rows,
            [
                Constraint::Length(4),
                Constraint::Min(20),
                Constraint::Length(5),
            ],
        )
        .block(block)
        .row_highlight_style(style::selection());

        f.render_stateful_widget(table, area, &mut self.browser.table_state);
    }
}
