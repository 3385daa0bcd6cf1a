//! Credential storage for the GitHub token, owner, and repository name.
//!
//! The file-backed store keeps the configuration as JSON under the user
//! config directory with owner-only permissions; at-rest encryption is left
//! to the platform.

use std::fs;
use std::io;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Persisted GitHub access configuration.
#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
pub struct GithubConfig {
    pub token: String,
    pub owner: String,
    pub repo: String,
}

impl GithubConfig {
    /// Returns whether every field is present and non-blank.
    pub fn is_complete(&self) -> bool {
        !self.token.trim().is_empty()
            && !self.owner.trim().is_empty()
            && !self.repo.trim().is_empty()
    }
}

/// Read/write access to the stored GitHub configuration.
///
/// Getters return `None` when the value is missing or blank, so callers can
/// treat "never configured" and "cleared" identically.
#[cfg_attr(test, mockall::automock)]
pub trait CredentialStore: Send + Sync {
    fn token(&self) -> Option<String>;
    fn owner(&self) -> Option<String>;
    fn repo(&self) -> Option<String>;

    /// Persists the full configuration, replacing any previous one.
    ///
    /// # Errors
    /// Returns an error when the backing storage cannot be written.
    fn save_config(&self, token: &str, owner: &str, repo: &str) -> io::Result<()>;

    /// Removes the stored configuration; clearing an empty store succeeds.
    ///
    /// # Errors
    /// Returns an error when the backing storage cannot be modified.
    fn clear_config(&self) -> io::Result<()>;
}

/// [`CredentialStore`] persisting a JSON file at a fixed path.
pub struct FileCredentialStore {
    path: PathBuf,
}

impl FileCredentialStore {
    /// Creates a store backed by `path`; the file may not exist yet.
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    fn read(&self) -> Option<GithubConfig> {
        let text = fs::read_to_string(&self.path).ok()?;

        serde_json::from_str(&text).ok()
    }

    fn field(&self, select: impl Fn(GithubConfig) -> String) -> Option<String> {
        self.read()
            .map(select)
            .filter(|value| !value.trim().is_empty())
    }
}

impl CredentialStore for FileCredentialStore {
    fn token(&self) -> Option<String> {
        self.field(|config| config.token)
    }

    fn owner(&self) -> Option<String> {
        self.field(|config| config.owner)
    }

    fn repo(&self) -> Option<String> {
        self.field(|config| config.repo)
    }

    fn save_config(&self, token: &str, owner: &str, repo: &str) -> io::Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }

        let config = GithubConfig {
            token: token.to_string(),
            owner: owner.to_string(),
            repo: repo.to_string(),
        };
        let payload = serde_json::to_string_pretty(&config).map_err(io::Error::other)?;
        fs::write(&self.path, payload)?;

        // The token is a secret; keep the file readable by the owner only.
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt as _;

            fs::set_permissions(&self.path, fs::Permissions::from_mode(0o600))?;
        }

        Ok(())
    }

    fn clear_config(&self) -> io::Result<()> {
        match fs::remove_file(&self.path) {
            Err(error) if error.kind() == io::ErrorKind::NotFound => Ok(()),
            other => other,
        }
    }
}
