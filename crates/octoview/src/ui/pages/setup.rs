use ratatui::Frame;
use ratatui::layout::{Constraint, Rect};
use ratatui::style::{Color, Style};
use ratatui::text::Span;
use ratatui::widgets::{Block, Borders, Row, Table};

use crate::app::SetupManager;
use crate::ui::{Page, style};

/// GitHub configuration form: one table row per credential field.
pub struct SetupPage<'a> {
    setup: &'a mut SetupManager,
}

impl<'a> SetupPage<'a> {
    pub fn new(setup: &'a mut SetupManager) -> Self {
        Self { setup }
    }
}

impl Page for SetupPage<'_> {
    fn render(&mut self, f: &mut Frame, area: Rect) {
        let block = Block::default().borders(Borders::ALL).title(Span::styled(
            " GitHub Setup ",
            Style::default().fg(Color::Cyan),
        ));

        let rows: Vec<Row<'_>> = self
            .setup
            .rows()
            .into_iter()
            .map(|(label, value)| {
                Row::new(vec![
                    Span::styled(format!(" {label}"), Style::default().fg(Color::White)),
                    Span::styled(value, Style::default().fg(Color::Gray)),
                ])
            })
            .collect();

        let table = Table::new(rows, [Constraint::Length(20), Constraint::Min(20)])
            .block(block)
            .row_highlight_style(style::selection());

        f.render_stateful_widget(table, area, &mut self.setup.table_state);
    }
}
