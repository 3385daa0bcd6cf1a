use std::fmt;
use std::time::{SystemTime, UNIX_EPOCH};

use crate::domain::entry::RepositoryEntry;

const SPINNER_FRAMES: &[&str] = &["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

/// A collection of icons used throughout the terminal UI.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Icon {
    /// A directory marker (▸).
    Folder,
    /// A JSON document marker ({}).
    Json,
    /// A markdown document marker (✎).
    Markdown,
    /// An image file marker (▦).
    Image,
    /// A generic file marker (·).
    File,
    /// A collapsed tree node marker (▸).
    Collapsed,
    /// An expanded tree node marker (▾).
    Expanded,
    /// A spinner symbol frame.
    Spinner(usize),
}

impl Icon {
    /// Returns the icon for a repository entry.
    pub fn for_entry(entry: &RepositoryEntry) -> Self {
        if entry.is_dir() {
            return Icon::Folder;
        }
        if entry.is_json() {
            return Icon::Json;
        }

        match entry.extension().as_deref() {
            Some("md" | "markdown") => Icon::Markdown,
            Some("png" | "jpg" | "jpeg" | "gif" | "webp" | "svg") => Icon::Image,
            _ => Icon::File,
        }
    }

    /// Returns a `Spinner` icon with the frame index calculated based on
    /// current time.
    pub fn current_spinner() -> Self {
        let now = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .as_millis();
        Icon::Spinner((now / 100) as usize)
    }

    /// Returns the string representation of the icon.
    pub fn as_str(self) -> &'static str {
        match self {
            Icon::Folder | Icon::Collapsed => "▸",
            Icon::Json => "{}",
            Icon::Markdown => "✎",
            Icon::Image => "▦",
            Icon::File => "·",
            Icon::Expanded => "▾",
            Icon::Spinner(frame) => SPINNER_FRAMES[frame % SPINNER_FRAMES.len()],
        }
    }
}

impl fmt::Display for Icon {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use crate::domain::entry::EntryKind;

    use super::*;

    fn entry(name: &str, kind: EntryKind) -> RepositoryEntry {
        RepositoryEntry {
            name: name.to_string(),
            kind,
            path: name.to_string(),
            download_url: None,
        }
    }

    #[test]
    fn test_for_entry_distinguishes_file_types() {
        // Arrange & Act & Assert
        assert_eq!(Icon::for_entry(&entry("docs", EntryKind::Dir)), Icon::Folder);
        assert_eq!(Icon::for_entry(&entry("en.json", EntryKind::File)), Icon::Json);
        assert_eq!(
            Icon::for_entry(&entry("README.md", EntryKind::File)),
            Icon::Markdown
        );
        assert_eq!(
            Icon::for_entry(&entry("logo.PNG", EntryKind::File)),
            Icon::Image
        );
        assert_eq!(
            Icon::for_entry(&entry("Makefile", EntryKind::File)),
            Icon::File
        );
    }

    #[test]
    fn test_spinner_wraps() {
        // Arrange & Act & Assert
        assert_eq!(Icon::Spinner(10).as_str(), Icon::Spinner(0).as_str());
        assert_eq!(Icon::Spinner(15).as_str(), Icon::Spinner(5).as_str());
    }

    #[test]
    fn test_current_spinner() {
        // Arrange & Act
        let icon = Icon::current_spinner();

        // Assert
        assert!(matches!(icon, Icon::Spinner(_)));
    }
}
