use std::collections::HashMap;

use ratatui::widgets::ListState;

use crate::app::{AppEvent, AppServices};
use crate::domain::error::ContentError;
use crate::domain::json::{JsonNode, NodePath, TreeRow, is_expanded, parse_document, tree_rows};

/// Manages one open JSON document and its per-node expand state.
///
/// The expand map is session state keyed by node path, so it survives
/// collapse/expand cycles of ancestors but is dropped whenever a reload
/// replaces the document.
pub struct ViewerManager {
    pub title: String,
    url: String,
    pub document: Option<JsonNode>,
    pub list_state: ListState,
    pub is_loading: bool,
    pub error: Option<String>,
    expand: HashMap<NodePath, bool>,
    latest_request_id: u64,
}

impl ViewerManager {
    /// Creates a viewer for the document behind `url`; nothing is fetched
    /// until [`Self::start_load`] runs.
    pub fn new(title: String, url: String) -> Self {
        Self {
            title,
            url,
            document: None,
            list_state: ListState::default(),
            is_loading: false,
            error: None,
            expand: HashMap::new(),
            latest_request_id: 0,
        }
    }

    /// Starts fetching the document in a background task.
    ///
    /// Takes a fresh app-wide request id, so a fetch still in flight for an
    /// earlier viewer session can never be mistaken for this one's.
    pub fn start_load(&mut self, services: &AppServices) {
        self.latest_request_id = services.next_request_id();
        self.is_loading = true;
        self.error = None;

        let request_id = self.latest_request_id;
        let url = self.url.clone();
        let contents = services.contents();
        let event_tx = services.event_sender();

        tokio::spawn(async move {
            let result = contents.fetch_document(&url).await;
            let _ = event_tx.send(AppEvent::DocumentLoaded { request_id, result });
        });
    }

    /// Applies a finished document fetch, ignoring stale results.
    ///
    /// Parsing happens here rather than in the fetch task so transport and
    /// parse failures surface through the same path. A successful parse
    /// resets the expand map and the selection.
    pub fn apply_document(&mut self, request_id: u64, result: Result<String, ContentError>) {
        if request_id != self.latest_request_id {
            tracing::debug!(
                request_id,
                latest_request_id = self.latest_request_id,
                "discarding stale document"
            );

            return;
        }

        self.is_loading = false;
        match result.and_then(|text| parse_document(&text)) {
            Ok(document) => {
                self.document = Some(document);
                self.expand.clear();
                self.list_state.select(Some(0));
                self.error = None;
            }
            Err(error) => {
                self.error = Some(error.to_string());
            }
        }
    }

    /// Returns the visible rows of the flattened tree.
    pub fn rows(&self) -> Vec<TreeRow> {
        self.document
            .as_ref()
            .map(|document| tree_rows(document, &self.expand))
            .unwrap_or_default()
    }

    /// Toggles the expand state of the selected row; leaves are ignored.
    pub fn toggle_selected(&mut self) {
        let rows = self.rows();
        let Some(row) = self.list_state.selected().and_then(|index| rows.get(index)) else {
            return;
        };
        if !row.expandable {
            return;
        }

        let currently_expanded = is_expanded(&self.expand, &row.path);
        self.expand.insert(row.path.clone(), !currently_expanded);
    }

    /// Moves the selection down one visible row.
    pub fn next(&mut self) {
        let row_count = self.rows().len();
        if row_count == 0 {
            return;
        }

        let next_index = (self.selected_index() + 1).min(row_count - 1);
        self.list_state.select(Some(next_index));
    }

    /// Moves the selection up one visible row.
    pub fn previous(&mut self) {
        if self.rows().is_empty() {
            return;
        }

        self.list_state
            .select(Some(self.selected_index().saturating_sub(1)));
    }

    /// Moves the selection to the first visible row.
    pub fn select_first(&mut self) {
        if !self.rows().is_empty() {
            self.list_state.select(Some(0));
        }
    }

    /// Moves the selection to the last visible row.
    pub fn select_last(&mut self) {
        let row_count = self.rows().len();
        if row_count > 0 {
            self.list_state.select(Some(row_count - 1));
        }
    }

    /// Keeps the selection within the visible row range after a collapse.
    pub fn clamp_selection(&mut self) {
        let row_count = self.rows().len();
        if row_count == 0 {
            self.list_state.select(None);

            return;
        }

        if self.selected_index() >= row_count {
            self.list_state.select(Some(row_count - 1));
        }
    }

    fn selected_index(&self) -> usize {
        self.list_state.selected().unwrap_or(0)
    }
}
