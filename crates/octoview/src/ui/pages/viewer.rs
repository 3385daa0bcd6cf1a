use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, List, ListItem, Paragraph};

use crate::app::ViewerManager;
use crate::domain::json::TreeRow;
use crate::ui::icon::Icon;
use crate::ui::{Page, style};

/// Spaces of indentation per nesting level.
const INDENT_WIDTH: usize = 2;

/// JSON document page: one list row per visible tree node.
pub struct ViewerPage<'a> {
    viewer: &'a mut ViewerManager,
}

impl<'a> ViewerPage<'a> {
    pub fn new(viewer: &'a mut ViewerManager) -> Self {
        Self { viewer }
    }
}

impl Page for ViewerPage<'_> {
    fn render(&mut self, f: &mut Frame, area: Rect) {
        let title = if self.viewer.is_loading {
            format!(" {} {} ", self.viewer.title, Icon::current_spinner())
        } else {
            format!(" {} ", self.viewer.title)
        };
        let block = Block::default()
            .borders(Borders::ALL)
            .title(Span::styled(title, Style::default().fg(Color::Cyan)));

        if let Some(error) = &self.viewer.error {
            let paragraph =
                Paragraph::new(Span::styled(format!("  {error}"), style::error())).block(block);
            f.render_widget(paragraph, area);

            return;
        }

        let items: Vec<ListItem<'_>> = self
            .viewer
            .rows()
            .iter()
            .map(|row| ListItem::new(render_row(row)))
            .collect();
        let list = List::new(items)
            .block(block)
            .highlight_style(style::selection());

        f.render_stateful_widget(list, area, &mut self.viewer.list_state);
    }
}

/// Builds the display line for one tree row.
fn render_row(row: &TreeRow) -> Line<'static> {
    let mut spans = vec![Span::raw(" ".repeat(row.depth * INDENT_WIDTH))];

    let marker = if row.expandable {
        if row.expanded {
            Icon::Expanded
        } else {
            Icon::Collapsed
        }
        .as_str()
    } else {
        " "
    };
    spans.push(Span::styled(
        format!("{marker} "),
        Style::default().fg(Color::Gray),
    ));

    if let Some(label) = &row.label {
        spans.push(Span::styled(label.clone(), style::node_label()));
        spans.push(Span::raw(": "));
    }
    spans.push(Span::styled(
        row.preview.clone(),
        style::node_value(row.kind),
    ));

    Line::from(spans)
}
