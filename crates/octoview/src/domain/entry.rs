use serde::Deserialize;

/// Kind of one remote listing entry.
///
/// The derived ordinal order (`Dir` before `File`) is the fixed primary sort
/// key for directory listings.
#[derive(Clone, Copy, Debug, Eq, Ord, PartialEq, PartialOrd)]
pub enum EntryKind {
    Dir,
    File,
}

/// One item in a remote directory listing.
///
/// Entries are rebuilt on every directory fetch and never mutated; navigating
/// away discards the whole listing.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct RepositoryEntry {
    /// Display name within the parent directory.
    pub name: String,
    pub kind: EntryKind,
    /// Full remote path from the repository root.
    pub path: String,
    /// Raw-content fetch URL; `None` for directories and for files the API
    /// reports without one.
    pub download_url: Option<String>,
}

impl RepositoryEntry {
    /// Returns whether this entry is a directory.
    pub fn is_dir(&self) -> bool {
        self.kind == EntryKind::Dir
    }

    /// Returns whether this file entry looks like a JSON document.
    pub fn is_json(&self) -> bool {
        self.kind == EntryKind::File && has_extension(&self.name, "json")
    }

    /// Returns the lowercase file extension used for icon selection.
    pub fn extension(&self) -> Option<String> {
        self.name
            .rsplit_once('.')
            .map(|(_, extension)| extension.to_ascii_lowercase())
    }
}

fn has_extension(name: &str, extension: &str) -> bool {
    name.rsplit_once('.')
        .is_some_and(|(_, found)| found.eq_ignore_ascii_case(extension))
}

/// Wire model for one element of a GitHub contents listing response.
#[derive(Debug, Deserialize)]
pub(crate) struct RawEntry {
    pub(crate) name: String,
    #[serde(rename = "type")]
    pub(crate) entry_type: String,
    pub(crate) path: String,
    #[serde(default)]
    pub(crate) download_url: Option<String>,
}

impl From<RawEntry> for RepositoryEntry {
    fn from(raw: RawEntry) -> Self {
        let kind = if raw.entry_type == "dir" {
            EntryKind::Dir
        } else {
            EntryKind::File
        };
        // Directories never carry a content URL; blank file URLs are kept
        // absent rather than treated as an error.
        let download_url = match kind {
            EntryKind::Dir => None,
            EntryKind::File => raw.download_url.filter(|url| !url.trim().is_empty()),
        };

        Self {
            name: raw.name,
            kind,
            path: raw.path,
            download_url,
        }
    }
}

/// Sorts a listing directories-first, then by name ascending.
///
/// This ordering is a contract of `list_directory`, not a display choice.
pub fn sort_entries(entries: &mut [RepositoryEntry]) {
    entries.sort_by(|a, b| a.kind.cmp(&b.kind).then_with(|| a.name.cmp(&b.name)));
}
