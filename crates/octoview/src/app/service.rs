use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use tokio::sync::mpsc;

use crate::app::AppEvent;
use crate::infra::credentials::CredentialStore;
use crate::infra::github::GithubContents;
use crate::infra::transport::Transport;

/// Shared service dependencies passed to app workflows.
///
/// Holding the GitHub client and credential store behind one container keeps
/// constructor signatures stable as dependencies evolve and lets tests inject
/// mocks in one place.
pub struct AppServices {
    contents: Arc<GithubContents>,
    credentials: Arc<dyn CredentialStore>,
    event_tx: mpsc::UnboundedSender<AppEvent>,
    request_counter: AtomicU64,
}

impl AppServices {
    /// Creates the service container and wires the GitHub client to the
    /// given transport and credential store.
    pub fn new(
        credentials: Arc<dyn CredentialStore>,
        transport: Arc<dyn Transport>,
        event_tx: mpsc::UnboundedSender<AppEvent>,
    ) -> Self {
        let contents = Arc::new(GithubContents::new(Arc::clone(&credentials), transport));

        Self {
            contents,
            credentials,
            event_tx,
            request_counter: AtomicU64::new(0),
        }
    }

    /// Issues the next request id.
    ///
    /// Ids are monotonic for the lifetime of the app, not per manager, so a
    /// result still in flight for a replaced browser or a closed viewer can
    /// never collide with the id of a newer load.
    pub(crate) fn next_request_id(&self) -> u64 {
        self.request_counter.fetch_add(1, Ordering::Relaxed) + 1
    }

    /// Returns a handle to the GitHub contents client.
    pub fn contents(&self) -> Arc<GithubContents> {
        Arc::clone(&self.contents)
    }

    /// Returns the credential store.
    pub fn credentials(&self) -> &Arc<dyn CredentialStore> {
        &self.credentials
    }

    /// Returns a sender that background tasks use to report results.
    pub(crate) fn event_sender(&self) -> mpsc::UnboundedSender<AppEvent> {
        self.event_tx.clone()
    }

    /// Returns whether a complete GitHub configuration is stored.
    pub fn is_configured(&self) -> bool {
        self.credentials.token().is_some()
            && self.credentials.owner().is_some()
            && self.credentials.repo().is_some()
    }

    /// Returns the `owner/repo` label for the status bar, when configured.
    pub fn repo_label(&self) -> Option<String> {
        let owner = self.credentials.owner()?;
        let repo = self.credentials.repo()?;

        Some(format!("{owner}/{repo}"))
    }
}
