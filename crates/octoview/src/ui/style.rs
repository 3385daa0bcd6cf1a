//! Shared styling for tree rows and list selections.

use ratatui::style::{Color, Modifier, Style};

use crate::domain::json::NodeKind;

/// Highlight style for the selected table or list row.
pub fn selection() -> Style {
    Style::default()
        .bg(Color::DarkGray)
        .add_modifier(Modifier::BOLD)
}

/// Style for directory names in the browser listing.
pub fn directory() -> Style {
    Style::default()
        .fg(Color::Blue)
        .add_modifier(Modifier::BOLD)
}

/// Style for file names in the browser listing.
pub fn file() -> Style {
    Style::default().fg(Color::White)
}

/// Style for error lines.
pub fn error() -> Style {
    Style::default().fg(Color::Red)
}

/// Style for a node key or `[index]` label.
pub fn node_label() -> Style {
    Style::default()
        .fg(Color::Cyan)
        .add_modifier(Modifier::BOLD)
}

/// Value style per node classification.
pub fn node_value(kind: NodeKind) -> Style {
    match kind {
        NodeKind::Object | NodeKind::Array => Style::default().fg(Color::Gray),
        NodeKind::String => Style::default().fg(Color::Green),
        NodeKind::Number => Style::default().fg(Color::Magenta),
        NodeKind::Bool => Style::default().fg(Color::Yellow),
        NodeKind::Null => Style::default()
            .fg(Color::DarkGray)
            .add_modifier(Modifier::ITALIC),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_node_value_distinguishes_scalar_kinds() {
        // Arrange & Act & Assert
        assert_ne!(node_value(NodeKind::String), node_value(NodeKind::Number));
        assert_ne!(node_value(NodeKind::Bool), node_value(NodeKind::Null));
        assert_eq!(node_value(NodeKind::Object), node_value(NodeKind::Array));
    }
}
