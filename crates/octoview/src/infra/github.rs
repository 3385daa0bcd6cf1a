//! GitHub repository contents client.
//!
//! Wraps the injectable [`Transport`] with credential resolution, listing
//! normalization, raw document fetch, and the thin write surface (base64
//! file content, create/update, sha-preconditioned delete).

use std::sync::Arc;

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD as BASE64;
use serde::Deserialize;

use crate::domain::entry::{RawEntry, RepositoryEntry, sort_entries};
use crate::domain::error::ContentError;
use crate::infra::credentials::{CredentialStore, GithubConfig};
use crate::infra::transport::{Request, Transport};

/// Base URL of the GitHub REST API.
pub const API_ROOT: &str = "https://api.github.com";

/// Wire model for one file-content response.
#[derive(Debug, Deserialize)]
struct FileDescriptor {
    #[serde(default)]
    content: Option<String>,
    #[serde(default)]
    sha: Option<String>,
}

/// Read/write client for one configured GitHub repository.
pub struct GithubContents {
    credentials: Arc<dyn CredentialStore>,
    transport: Arc<dyn Transport>,
}

impl GithubContents {
    /// Creates a client over the given credential store and transport.
    pub fn new(credentials: Arc<dyn CredentialStore>, transport: Arc<dyn Transport>) -> Self {
        Self {
            credentials,
            transport,
        }
    }

    /// Lists one remote directory, sorted directories-first then by name.
    ///
    /// An empty `base_path` lists the repository root. The credential check
    /// happens before any network call; a missing or blank token, owner, or
    /// repo fails with [`ContentError::Configuration`] without touching the
    /// transport.
    ///
    /// # Errors
    /// [`ContentError::Configuration`] for absent credentials,
    /// [`ContentError::Fetch`] for transport failures, non-success statuses,
    /// and malformed listing payloads. No partial listing is ever returned.
    pub async fn list_directory(
        &self,
        base_path: &str,
    ) -> Result<Vec<RepositoryEntry>, ContentError> {
        let config = self.config()?;
        let request = Request::get(contents_url(&config, base_path)).with_token(&config.token);
        let response = self
            .transport
            .execute(request)
            .await
            .map_err(ContentError::Fetch)?;
        if !response.is_success() {
            return Err(ContentError::fetch_status(response.status));
        }

        let raw: Vec<RawEntry> = serde_json::from_str(&response.body)
            .map_err(|error| ContentError::Fetch(format!("unexpected listing payload: {error}")))?;
        let mut entries: Vec<RepositoryEntry> = raw.into_iter().map(Into::into).collect();
        sort_entries(&mut entries);

        Ok(entries)
    }

    /// Fetches one raw document by its download URL.
    ///
    /// # Errors
    /// [`ContentError::Fetch`] for transport failures (including the 5 s
    /// connect/read timeouts) and any non-200 status.
    pub async fn fetch_document(&self, url: &str) -> Result<String, ContentError> {
        let response = self
            .transport
            .execute(Request::get(url))
            .await
            .map_err(ContentError::Fetch)?;
        if response.status != 200 {
            return Err(ContentError::fetch_status(response.status));
        }

        Ok(response.body)
    }

    /// Returns the decoded text content of one repository file.
    ///
    /// # Errors
    /// [`ContentError::Configuration`] for absent credentials;
    /// [`ContentError::Fetch`] when the request fails or the response lacks a
    /// decodable base64 `content` field.
    pub async fn file_content(&self, path: &str) -> Result<String, ContentError> {
        let config = self.config()?;
        let descriptor = self.fetch_descriptor(&config, path).await?;
        let encoded = descriptor
            .content
            .ok_or_else(|| ContentError::Fetch("response carries no file content".to_string()))?;
        // GitHub wraps base64 payloads with line breaks.
        let compact: String = encoded.split_whitespace().collect();
        let bytes = BASE64
            .decode(compact)
            .map_err(|error| ContentError::Fetch(format!("invalid base64 content: {error}")))?;

        String::from_utf8(bytes)
            .map_err(|error| ContentError::Fetch(format!("file content is not UTF-8: {error}")))
    }

    /// Creates or updates one file with a commit message.
    ///
    /// # Errors
    /// [`ContentError::Configuration`] for absent credentials;
    /// [`ContentError::Fetch`] for transport failures or non-success
    /// statuses.
    pub async fn create_or_update_file(
        &self,
        path: &str,
        content: &str,
        message: &str,
    ) -> Result<(), ContentError> {
        let config = self.config()?;
        let body = serde_json::json!({
            "message": message,
            "content": BASE64.encode(content.as_bytes()),
        });
        let request = Request::put(contents_url(&config, path))
            .with_token(&config.token)
            .with_body(body.to_string());
        let response = self
            .transport
            .execute(request)
            .await
            .map_err(ContentError::Fetch)?;
        if !response.is_success() {
            return Err(ContentError::fetch_status(response.status));
        }

        Ok(())
    }

    /// Deletes one file, resolving its current sha first.
    ///
    /// # Errors
    /// [`ContentError::Configuration`] for absent credentials;
    /// [`ContentError::Fetch`] when the sha lookup or the delete itself
    /// fails.
    pub async fn delete_file(&self, path: &str, message: &str) -> Result<(), ContentError> {
        let config = self.config()?;
        let descriptor = self.fetch_descriptor(&config, path).await?;
        let sha = descriptor
            .sha
            .ok_or_else(|| ContentError::Fetch("response carries no file sha".to_string()))?;

        let body = serde_json::json!({
            "message": message,
            "sha": sha,
        });
        let request = Request::delete(contents_url(&config, path))
            .with_token(&config.token)
            .with_body(body.to_string());
        let response = self
            .transport
            .execute(request)
            .await
            .map_err(ContentError::Fetch)?;
        if !response.is_success() {
            return Err(ContentError::fetch_status(response.status));
        }

        Ok(())
    }

    /// Resolves the stored credentials, failing before any network call.
    fn config(&self) -> Result<GithubConfig, ContentError> {
        let config = GithubConfig {
            token: self.credentials.token().unwrap_or_default(),
            owner: self.credentials.owner().unwrap_or_default(),
            repo: self.credentials.repo().unwrap_or_default(),
        };
        if !config.is_complete() {
            return Err(ContentError::Configuration);
        }

        Ok(config)
    }

    async fn fetch_descriptor(
        &self,
        config: &GithubConfig,
        path: &str,
    ) -> Result<FileDescriptor, ContentError> {
        let request = Request::get(contents_url(config, path)).with_token(&config.token);
        let response = self
            .transport
            .execute(request)
            .await
            .map_err(ContentError::Fetch)?;
        if !response.is_success() {
            return Err(ContentError::fetch_status(response.status));
        }

        serde_json::from_str(&response.body)
            .map_err(|error| ContentError::Fetch(format!("unexpected file payload: {error}")))
    }
}

/// Builds the contents endpoint URL for one remote path.
fn contents_url(config: &GithubConfig, path: &str) -> String {
    let base = format!("{API_ROOT}/repos/{}/{}/contents", config.owner, config.repo);
    if path.is_empty() {
        base
    } else {
        format!("{base}/{path}")
    }
}
