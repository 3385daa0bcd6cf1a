use ratatui::widgets::TableState;

use crate::app::{AppEvent, AppServices};
use crate::domain::entry::RepositoryEntry;
use crate::domain::error::ContentError;
use crate::domain::navigation::NavigationState;

/// Manages the remote directory listing and browse selection state.
///
/// Listings load in spawned tasks that report back through [`AppEvent`];
/// every load gets a fresh request id and results carrying an older id are
/// discarded, so a listing can never overwrite the state of a directory the
/// user has already navigated away from.
pub struct BrowserManager {
    pub entries: Vec<RepositoryEntry>,
    pub table_state: TableState,
    pub navigation: NavigationState,
    pub is_loading: bool,
    pub error: Option<String>,
    latest_request_id: u64,
}

impl BrowserManager {
    /// Creates an empty browser positioned at the repository root.
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
            table_state: TableState::default(),
            navigation: NavigationState::default(),
            is_loading: false,
            error: None,
            latest_request_id: 0,
        }
    }

    /// Moves the selection to the next entry, wrapping at the end.
    pub fn next(&mut self) {
        if self.entries.is_empty() {
            return;
        }

        let next_index = (self.selected_index() + 1) % self.entries.len();
        self.table_state.select(Some(next_index));
    }

    /// Moves the selection to the previous entry, wrapping at the start.
    pub fn previous(&mut self) {
        if self.entries.is_empty() {
            return;
        }

        let current_index = self.selected_index();
        let previous_index = if current_index == 0 {
            self.entries.len() - 1
        } else {
            current_index - 1
        };
        self.table_state.select(Some(previous_index));
    }

    /// Moves the selection to the first entry.
    pub fn select_first(&mut self) {
        if !self.entries.is_empty() {
            self.table_state.select(Some(0));
        }
    }

    /// Moves the selection to the last entry.
    pub fn select_last(&mut self) {
        if !self.entries.is_empty() {
            self.table_state.select(Some(self.entries.len() - 1));
        }
    }

    /// Returns the currently selected entry, if any.
    pub fn selected_entry(&self) -> Option<&RepositoryEntry> {
        self.entries.get(self.table_state.selected()?)
    }

    /// Starts loading the current directory in a background task.
    ///
    /// Takes a fresh app-wide request id so any listing still in flight for
    /// a previous load, even one started by a replaced manager, is discarded
    /// when it arrives.
    pub fn start_load(&mut self, services: &AppServices) {
        self.latest_request_id = services.next_request_id();
        self.is_loading = true;
        self.error = None;

        let request_id = self.latest_request_id;
        let path = self.navigation.current_path().to_string();
        let contents = services.contents();
        let event_tx = services.event_sender();

        tokio::spawn(async move {
            let result = contents.list_directory(&path).await;
            let _ = event_tx.send(AppEvent::ListingLoaded {
                request_id,
                path,
                result,
            });
        });
    }

    /// Applies a finished listing load, ignoring stale results.
    pub fn apply_listing(
        &mut self,
        request_id: u64,
        path: &str,
        result: Result<Vec<RepositoryEntry>, ContentError>,
    ) {
        if request_id != self.latest_request_id {
            tracing::debug!(
                request_id,
                latest_request_id = self.latest_request_id,
                path,
                "discarding stale directory listing"
            );

            return;
        }

        self.is_loading = false;
        match result {
            Ok(entries) => {
                let selection = if entries.is_empty() { None } else { Some(0) };
                self.entries = entries;
                self.table_state.select(selection);
                self.error = None;
            }
            Err(error) => {
                self.entries.clear();
                self.table_state.select(None);
                self.error = Some(error.to_string());
            }
        }
    }

    /// Descends into a subdirectory and starts loading it.
    pub fn descend(&mut self, services: &AppServices, path: String) {
        self.navigation.descend(path);
        self.start_load(services);
    }

    /// Moves one level up and reloads; returns `false` when already at root.
    pub fn go_back(&mut self, services: &AppServices) -> bool {
        if !self.navigation.go_back() {
            return false;
        }

        self.start_load(services);

        true
    }

    fn selected_index(&self) -> usize {
        self.table_state.selected().unwrap_or(0)
    }
}

impl Default for BrowserManager {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use tokio::sync::mpsc;

    use crate::domain::entry::EntryKind;
    use crate::infra::credentials::MockCredentialStore;
    use crate::infra::transport::{MockTransport, Response};

    use super::*;

    fn entry(name: &str, kind: EntryKind) -> RepositoryEntry {
        RepositoryEntry {
            name: name.to_string(),
            kind,
            path: name.to_string(),
            download_url: None,
        }
    }

    fn manager_with_entries(names: &[&str]) -> BrowserManager {
        let mut manager = BrowserManager::new();
        manager.entries = names
            .iter()
            .map(|name| entry(name, EntryKind::File))
            .collect();
        manager.table_state.select(Some(0));

        manager
    }

    fn services_listing(body: &'static str) -> (AppServices, mpsc::UnboundedReceiver<AppEvent>) {
        let mut credentials = MockCredentialStore::new();
        credentials
            .expect_token()
            .return_const(Some("t".to_string()));
        credentials
            .expect_owner()
            .return_const(Some("o".to_string()));
        credentials
            .expect_repo()
            .return_const(Some("r".to_string()));

        let mut transport = MockTransport::new();
        transport.expect_execute().returning(move |_| {
            Box::pin(async move {
                Ok(Response {
                    status: 200,
                    body: body.to_string(),
                })
            })
        });

        let (event_tx, event_rx) = mpsc::unbounded_channel();
        let services = AppServices::new(Arc::new(credentials), Arc::new(transport), event_tx);

        (services, event_rx)
    }

    #[test]
    fn test_next_wraps_to_first_entry() {
        // Arrange
        let mut manager = manager_with_entries(&["a", "b"]);
        manager.table_state.select(Some(1));

        // Act
        manager.next();

        // Assert
        assert_eq!(manager.table_state.selected(), Some(0));
    }

    #[test]
    fn test_previous_wraps_to_last_entry() {
        // Arrange
        let mut manager = manager_with_entries(&["a", "b", "c"]);

        // Act
        manager.previous();

        // Assert
        assert_eq!(manager.table_state.selected(), Some(2));
    }

    #[test]
    fn test_apply_listing_replaces_entries_and_selects_first() {
        // Arrange
        let mut manager = BrowserManager::new();
        manager.latest_request_id = 1;
        manager.is_loading = true;

        // Act
        manager.apply_listing(1, "", Ok(vec![entry("docs", EntryKind::Dir)]));

        // Assert
        assert!(!manager.is_loading);
        assert_eq!(manager.entries.len(), 1);
        assert_eq!(manager.table_state.selected(), Some(0));
    }

    #[test]
    fn test_apply_listing_discards_stale_request_id() {
        // Arrange
        let mut manager = BrowserManager::new();
        manager.latest_request_id = 2;
        manager.entries = vec![entry("kept", EntryKind::File)];

        // Act
        manager.apply_listing(1, "old", Ok(vec![entry("stale", EntryKind::File)]));

        // Assert
        assert_eq!(manager.entries[0].name, "kept");
    }

    #[test]
    fn test_apply_listing_error_clears_entries() {
        // Arrange
        let mut manager = manager_with_entries(&["a"]);
        manager.latest_request_id = 1;

        // Act
        manager.apply_listing(1, "", Err(ContentError::fetch_status(500)));

        // Assert
        assert!(manager.entries.is_empty());
        assert_eq!(manager.table_state.selected(), None);
        assert_eq!(
            manager.error.as_deref(),
            Some("request failed with HTTP status 500")
        );
    }

    #[tokio::test]
    async fn test_start_load_reports_listing_through_event() {
        // Arrange
        let (services, mut event_rx) = services_listing(
            "[{\"name\":\"en.json\",\"type\":\"file\",\"path\":\"en.json\",\"download_url\":\"https://raw.example/en.json\"}]",
        );
        let mut manager = BrowserManager::new();

        // Act
        manager.start_load(&services);
        let event = event_rx.recv().await.expect("event should arrive");

        // Assert
        assert!(manager.is_loading);
        let AppEvent::ListingLoaded {
            request_id,
            path,
            result,
        } = event
        else {
            unreachable!("expected a listing event");
        };
        assert_eq!(request_id, 1);
        assert_eq!(path, "");
        assert_eq!(result.expect("listing should succeed").len(), 1);
    }

    #[tokio::test]
    async fn test_replacement_manager_discards_in_flight_listing() {
        // Arrange
        let (services, mut event_rx) = services_listing("[]");
        let mut replaced = BrowserManager::new();
        replaced.start_load(&services);
        let AppEvent::ListingLoaded {
            request_id: stale_id,
            ..
        } = event_rx.recv().await.expect("event should arrive")
        else {
            unreachable!("expected a listing event");
        };

        let mut manager = BrowserManager::new();
        manager.start_load(&services);
        let AppEvent::ListingLoaded {
            request_id: fresh_id,
            ..
        } = event_rx.recv().await.expect("event should arrive")
        else {
            unreachable!("expected a listing event");
        };

        // Act: the fresh listing lands first, the replaced manager's after it
        manager.apply_listing(fresh_id, "", Ok(vec![entry("fresh", EntryKind::File)]));
        manager.apply_listing(stale_id, "", Ok(vec![entry("stale", EntryKind::File)]));

        // Assert
        assert!(fresh_id > stale_id);
        assert_eq!(manager.entries.len(), 1);
        assert_eq!(manager.entries[0].name, "fresh");
    }

    #[tokio::test]
    async fn test_go_back_at_root_does_not_start_a_load() {
        // Arrange
        let (services, mut event_rx) = services_listing("[]");
        let mut manager = BrowserManager::new();

        // Act
        let moved = manager.go_back(&services);

        // Assert
        assert!(!moved);
        assert!(event_rx.try_recv().is_err());
    }

    #[tokio::test]
    async fn test_descend_loads_the_new_directory() {
        // Arrange
        let (services, mut event_rx) = services_listing("[]");
        let mut manager = BrowserManager::new();

        // Act
        manager.descend(&services, "locales".to_string());
        let event = event_rx.recv().await.expect("event should arrive");

        // Assert
        assert_eq!(manager.navigation.current_path(), "locales");
        let AppEvent::ListingLoaded { path, .. } = event else {
            unreachable!("expected a listing event");
        };
        assert_eq!(path, "locales");
    }
}
