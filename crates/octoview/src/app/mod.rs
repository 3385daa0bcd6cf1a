//! App-layer composition root and shared state container.
//!
//! This module wires app submodules and exposes [`App`], the state holder
//! mutated by runtime mode handlers. Background fetches report through
//! [`AppEvent`]; state mutation is centralized in
//! [`App::process_pending_app_events`].

use std::path::PathBuf;
use std::sync::Arc;

use tokio::sync::mpsc;

use crate::domain::entry::RepositoryEntry;
use crate::domain::error::ContentError;
use crate::infra::credentials::CredentialStore;
use crate::infra::transport::Transport;
use crate::ui::state::app_mode::AppMode;

mod browser;
mod service;
mod setup;
mod viewer;

pub use browser::BrowserManager;
pub use service::AppServices;
pub use setup::SetupManager;
pub use viewer::ViewerManager;

/// Returns the octoview home directory (`~/.octoview`).
pub fn octoview_home() -> PathBuf {
    if let Some(home_dir) = dirs::home_dir() {
        return home_dir.join(".octoview");
    }

    PathBuf::from(".octoview")
}

/// Internal app events emitted by background fetch tasks.
///
/// Each event carries the request id its task was spawned with; the managers
/// compare it against their latest id and discard anything older.
#[derive(Debug)]
pub enum AppEvent {
    /// A directory listing fetch finished.
    ListingLoaded {
        request_id: u64,
        path: String,
        result: Result<Vec<RepositoryEntry>, ContentError>,
    },
    /// A raw document fetch finished.
    DocumentLoaded {
        request_id: u64,
        result: Result<String, ContentError>,
    },
}

/// Stores application state and coordinates browse/view/setup workflows.
pub struct App {
    pub mode: AppMode,
    pub browser: BrowserManager,
    pub viewer: Option<ViewerManager>,
    pub setup: SetupManager,
    pub status_message: Option<String>,
    pub(crate) services: AppServices,
    event_rx: mpsc::UnboundedReceiver<AppEvent>,
}

impl App {
    /// Builds the app state and, when a complete configuration is stored,
    /// starts loading the repository root.
    ///
    /// Must run inside a tokio runtime because loads spawn tasks.
    pub fn new(credentials: Arc<dyn CredentialStore>, transport: Arc<dyn Transport>) -> Self {
        let (event_tx, event_rx) = mpsc::unbounded_channel();
        let services = AppServices::new(credentials, transport, event_tx);
        let setup = SetupManager::new(&services);
        let mut browser = BrowserManager::new();

        let (mode, status_message) = if services.is_configured() {
            browser.start_load(&services);

            (AppMode::Browse, None)
        } else {
            (
                AppMode::Setup,
                Some(ContentError::Configuration.to_string()),
            )
        };

        Self {
            mode,
            browser,
            viewer: None,
            setup,
            status_message,
            services,
            event_rx,
        }
    }

    /// Drains queued fetch results and applies them to the managers.
    pub fn process_pending_app_events(&mut self) {
        while let Ok(event) = self.event_rx.try_recv() {
            self.apply_app_event(event);
        }
    }

    /// Acts on the selected browser entry.
    ///
    /// Directories are descended into, JSON files open the viewer, and any
    /// other file only reports its name in the status line.
    pub fn open_selected(&mut self) {
        let Some(entry) = self.browser.selected_entry() else {
            return;
        };
        let name = entry.name.clone();
        let path = entry.path.clone();
        let is_dir = entry.is_dir();
        let viewable_url = entry
            .download_url
            .clone()
            .filter(|_| entry.is_json())
            .filter(|candidate| url::Url::parse(candidate).is_ok());

        if is_dir {
            self.status_message = None;
            self.browser.descend(&self.services, path);

            return;
        }

        match viewable_url {
            Some(download_url) => self.open_viewer(name, download_url),
            None => self.status_message = Some(format!("Selected: {name}")),
        }
    }

    /// Moves the browser one level up; a no-op at the repository root.
    pub fn go_back(&mut self) {
        if self.browser.go_back(&self.services) {
            self.status_message = None;
        }
    }

    /// Reloads the current directory listing.
    pub fn refresh_listing(&mut self) {
        self.browser.start_load(&self.services);
    }

    /// Copies the selected file's download URL to the system clipboard.
    pub fn copy_selected_url(&mut self) {
        let Some(download_url) = self
            .browser
            .selected_entry()
            .and_then(|entry| entry.download_url.clone())
        else {
            return;
        };

        let copied = arboard::Clipboard::new()
            .and_then(|mut clipboard| clipboard.set_text(download_url));
        self.status_message = Some(match copied {
            Ok(()) => "URL copied to clipboard".to_string(),
            Err(error) => format!("Clipboard error: {error}"),
        });
    }

    /// Closes the viewer and returns to browsing.
    pub fn close_viewer(&mut self) {
        self.viewer = None;
        self.mode = AppMode::Browse;
    }

    /// Reloads the open document.
    pub fn reload_document(&mut self) {
        if let Some(viewer) = &mut self.viewer {
            viewer.start_load(&self.services);
        }
    }

    /// Opens the setup form, re-reading stored values.
    pub fn open_setup(&mut self) {
        self.setup = SetupManager::new(&self.services);
        self.mode = AppMode::Setup;
    }

    /// Persists the setup form and, on success, browses the repository root.
    pub fn save_setup(&mut self) {
        if !self.setup.is_complete() {
            self.status_message = Some("All fields are required".to_string());

            return;
        }

        match self.setup.save(&self.services) {
            Ok(()) => {
                self.status_message = Some("Configuration saved".to_string());
                self.browser = BrowserManager::new();
                self.browser.start_load(&self.services);
                self.mode = AppMode::Browse;
            }
            Err(error) => {
                self.status_message = Some(format!("Failed to save configuration: {error}"));
            }
        }
    }

    /// Clears the stored configuration and blanks the form.
    pub fn clear_setup(&mut self) {
        self.status_message = Some(match self.setup.clear(&self.services) {
            Ok(()) => "Configuration cleared".to_string(),
            Err(error) => format!("Failed to clear configuration: {error}"),
        });
    }

    /// Leaves setup for the browser when a configuration is stored.
    pub fn leave_setup(&mut self) {
        if self.services.is_configured() {
            self.mode = AppMode::Browse;
        }
    }

    /// Returns the `owner/repo` label for the status bar, when configured.
    pub fn repo_label(&self) -> Option<String> {
        self.services.repo_label()
    }

    fn open_viewer(&mut self, name: String, download_url: String) {
        let mut viewer = ViewerManager::new(name, download_url);
        viewer.start_load(&self.services);
        self.viewer = Some(viewer);
        self.status_message = None;
        self.mode = AppMode::Viewer;
    }

    fn apply_app_event(&mut self, event: AppEvent) {
        match event {
            AppEvent::ListingLoaded {
                request_id,
                path,
                result,
            } => {
                self.browser.apply_listing(request_id, &path, result);
            }
            AppEvent::DocumentLoaded { request_id, result } => match &mut self.viewer {
                Some(viewer) => viewer.apply_document(request_id, result),
                None => {
                    tracing::debug!(request_id, "discarding document for a closed viewer");
                }
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use crate::domain::entry::EntryKind;
    use crate::infra::credentials::MockCredentialStore;
    use crate::infra::transport::{MockTransport, Response};

    use super::*;

    fn configured_store() -> MockCredentialStore {
        let mut credentials = MockCredentialStore::new();
        credentials
            .expect_token()
            .return_const(Some("t".to_string()));
        credentials
            .expect_owner()
            .return_const(Some("byteflipper".to_string()));
        credentials
            .expect_repo()
            .return_const(Some("locales".to_string()));

        credentials
    }

    fn unconfigured_store() -> MockCredentialStore {
        let mut credentials = MockCredentialStore::new();
        credentials.expect_token().return_const(None);
        credentials.expect_owner().return_const(None);
        credentials.expect_repo().return_const(None);

        credentials
    }

    fn transport_returning(body: &'static str) -> MockTransport {
        let mut transport = MockTransport::new();
        transport.expect_execute().returning(move |_| {
            Box::pin(async move {
                Ok(Response {
                    status: 200,
                    body: body.to_string(),
                })
            })
        });

        transport
    }

    fn entry(name: &str, kind: EntryKind, download_url: Option<&str>) -> RepositoryEntry {
        RepositoryEntry {
            name: name.to_string(),
            kind,
            path: name.to_string(),
            download_url: download_url.map(str::to_string),
        }
    }

    async fn drain_events(app: &mut App) {
        // Spawned mock fetches resolve immediately; give them one scheduler
        // pass before draining.
        tokio::time::sleep(Duration::from_millis(20)).await;
        app.process_pending_app_events();
    }

    #[tokio::test]
    async fn test_new_without_configuration_starts_in_setup_mode() {
        // Arrange
        let mut transport = MockTransport::new();
        transport.expect_execute().times(0);

        // Act
        let app = App::new(Arc::new(unconfigured_store()), Arc::new(transport));

        // Assert
        assert!(matches!(app.mode, AppMode::Setup));
        assert_eq!(
            app.status_message.as_deref(),
            Some("GitHub configuration is not set up")
        );
    }

    #[tokio::test]
    async fn test_new_with_configuration_loads_repository_root() {
        // Arrange
        let listing =
            "[{\"name\":\"locales\",\"type\":\"dir\",\"path\":\"locales\"}]";

        // Act
        let mut app = App::new(
            Arc::new(configured_store()),
            Arc::new(transport_returning(listing)),
        );
        drain_events(&mut app).await;

        // Assert
        assert!(matches!(app.mode, AppMode::Browse));
        assert!(!app.browser.is_loading);
        assert_eq!(app.browser.entries.len(), 1);
    }

    #[tokio::test]
    async fn test_open_selected_directory_descends() {
        // Arrange
        let mut app = App::new(
            Arc::new(configured_store()),
            Arc::new(transport_returning("[]")),
        );
        drain_events(&mut app).await;
        app.browser.entries = vec![entry("locales", EntryKind::Dir, None)];
        app.browser.table_state.select(Some(0));

        // Act
        app.open_selected();

        // Assert
        assert_eq!(app.browser.navigation.current_path(), "locales");
        assert!(app.browser.is_loading);
    }

    #[tokio::test]
    async fn test_open_selected_plain_file_reports_name() {
        // Arrange
        let mut app = App::new(
            Arc::new(configured_store()),
            Arc::new(transport_returning("[]")),
        );
        drain_events(&mut app).await;
        app.browser.entries = vec![entry(
            "README.md",
            EntryKind::File,
            Some("https://raw.example/README.md"),
        )];
        app.browser.table_state.select(Some(0));

        // Act
        app.open_selected();

        // Assert
        assert!(matches!(app.mode, AppMode::Browse));
        assert_eq!(app.status_message.as_deref(), Some("Selected: README.md"));
    }

    #[tokio::test]
    async fn test_open_selected_json_file_opens_viewer() {
        // Arrange
        let mut app = App::new(
            Arc::new(configured_store()),
            Arc::new(transport_returning("{\"a\":1}")),
        );
        drain_events(&mut app).await;
        app.browser.entries = vec![entry(
            "en.json",
            EntryKind::File,
            Some("https://raw.example/en.json"),
        )];
        app.browser.table_state.select(Some(0));

        // Act
        app.open_selected();
        drain_events(&mut app).await;

        // Assert
        assert!(matches!(app.mode, AppMode::Viewer));
        let viewer = app.viewer.as_ref().expect("viewer should be open");
        assert_eq!(viewer.title, "en.json");
        assert!(viewer.document.is_some());
    }

    #[tokio::test]
    async fn test_json_file_without_download_url_only_reports_name() {
        // Arrange
        let mut app = App::new(
            Arc::new(configured_store()),
            Arc::new(transport_returning("[]")),
        );
        drain_events(&mut app).await;
        app.browser.entries = vec![entry("en.json", EntryKind::File, None)];
        app.browser.table_state.select(Some(0));

        // Act
        app.open_selected();

        // Assert
        assert!(app.viewer.is_none());
        assert_eq!(app.status_message.as_deref(), Some("Selected: en.json"));
    }

    #[tokio::test]
    async fn test_document_for_closed_viewer_is_discarded() {
        // Arrange
        let mut app = App::new(
            Arc::new(configured_store()),
            Arc::new(transport_returning("{\"a\":1}")),
        );
        drain_events(&mut app).await;
        app.browser.entries = vec![entry(
            "en.json",
            EntryKind::File,
            Some("https://raw.example/en.json"),
        )];
        app.browser.table_state.select(Some(0));
        app.open_selected();

        // Act — close before the fetch result is applied.
        app.close_viewer();
        drain_events(&mut app).await;

        // Assert
        assert!(app.viewer.is_none());
        assert!(matches!(app.mode, AppMode::Browse));
    }

    #[tokio::test]
    async fn test_save_setup_requires_all_fields() {
        // Arrange
        let mut transport = MockTransport::new();
        transport.expect_execute().times(0);
        let mut app = App::new(Arc::new(unconfigured_store()), Arc::new(transport));
        app.setup.token = "only-a-token".to_string();

        // Act
        app.save_setup();

        // Assert
        assert!(matches!(app.mode, AppMode::Setup));
        assert_eq!(app.status_message.as_deref(), Some("All fields are required"));
    }

    #[tokio::test]
    async fn test_save_setup_persists_and_returns_to_browse() {
        // Arrange
        let mut credentials = unconfigured_store();
        credentials
            .expect_save_config()
            .times(1)
            .returning(|_, _, _| Ok(()));
        let mut transport = MockTransport::new();
        transport.expect_execute().times(0);
        let mut app = App::new(Arc::new(credentials), Arc::new(transport));
        app.setup.token = "t".to_string();
        app.setup.owner = "o".to_string();
        app.setup.repo = "r".to_string();

        // Act
        app.save_setup();

        // Assert
        assert!(matches!(app.mode, AppMode::Browse));
        assert_eq!(app.status_message.as_deref(), Some("Configuration saved"));
    }

    #[tokio::test]
    async fn test_leave_setup_requires_stored_configuration() {
        // Arrange
        let mut transport = MockTransport::new();
        transport.expect_execute().times(0);
        let mut app = App::new(Arc::new(unconfigured_store()), Arc::new(transport));

        // Act
        app.leave_setup();

        // Assert
        assert!(matches!(app.mode, AppMode::Setup));
    }
}
