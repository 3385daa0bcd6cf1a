//! Injectable HTTP transport seam.
//!
//! Defines the [`Transport`] trait used by the GitHub client so tests can
//! observe or suppress network traffic, plus the `reqwest`-backed
//! implementation with fixed connect/read timeouts.

use std::future::Future;
use std::pin::Pin;
use std::time::Duration;

/// Boxed async result used by [`Transport`] trait methods.
pub type TransportFuture<T> = Pin<Box<dyn Future<Output = T> + Send>>;

/// Connect and read timeout applied to every request.
pub const REQUEST_TIMEOUT: Duration = Duration::from_millis(5000);

/// HTTP verb for one transport request.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Method {
    Get,
    Put,
    Delete,
}

/// One transport request.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Request {
    pub method: Method,
    pub url: String,
    /// Bearer credential sent as `Authorization: token {token}` when present.
    pub token: Option<String>,
    /// JSON payload for write requests.
    pub body: Option<String>,
}

impl Request {
    /// Builds a GET request.
    pub fn get(url: impl Into<String>) -> Self {
        Self::new(Method::Get, url)
    }

    /// Builds a PUT request.
    pub fn put(url: impl Into<String>) -> Self {
        Self::new(Method::Put, url)
    }

    /// Builds a DELETE request.
    pub fn delete(url: impl Into<String>) -> Self {
        Self::new(Method::Delete, url)
    }

    fn new(method: Method, url: impl Into<String>) -> Self {
        Self {
            method,
            url: url.into(),
            token: None,
            body: None,
        }
    }

    /// Attaches an authorization token.
    pub fn with_token(mut self, token: &str) -> Self {
        self.token = Some(token.to_string());
        self
    }

    /// Attaches a JSON body.
    pub fn with_body(mut self, body: String) -> Self {
        self.body = Some(body);
        self
    }
}

/// One transport response; the body is raw UTF-8 text.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Response {
    pub status: u16,
    pub body: String,
}

impl Response {
    /// Returns whether the status code is in the 2xx range.
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Minimal HTTP transport used by the GitHub client.
///
/// The trait is object-safe so it can be held as `Arc<dyn Transport>` and
/// mocked in tests. Transport-level failures (connect, timeout, read) are
/// reported as a human-readable message; non-success statuses come back as a
/// normal [`Response`] for the caller to classify.
#[cfg_attr(test, mockall::automock)]
pub trait Transport: Send + Sync {
    /// Executes one HTTP request.
    fn execute(&self, request: Request) -> TransportFuture<Result<Response, String>>;
}

/// [`Transport`] backed by a shared `reqwest` client.
pub struct ReqwestTransport {
    client: reqwest::Client,
}

impl ReqwestTransport {
    /// Creates a transport whose client enforces [`REQUEST_TIMEOUT`] for both
    /// connecting and reading, on every request it issues.
    pub fn new() -> Self {
        let client = reqwest::Client::builder()
            .connect_timeout(REQUEST_TIMEOUT)
            .timeout(REQUEST_TIMEOUT)
            .user_agent(concat!("octoview/", env!("CARGO_PKG_VERSION")))
            .build()
            .unwrap_or_else(|_| reqwest::Client::new());

        Self { client }
    }
}

impl Default for ReqwestTransport {
    fn default() -> Self {
        Self::new()
    }
}

impl Transport for ReqwestTransport {
    fn execute(&self, request: Request) -> TransportFuture<Result<Response, String>> {
        let client = self.client.clone();

        Box::pin(async move {
            let mut builder = match request.method {
                Method::Get => client.get(&request.url),
                Method::Put => client.put(&request.url),
                Method::Delete => client.delete(&request.url),
            };

            if let Some(token) = &request.token {
                builder = builder.header(reqwest::header::AUTHORIZATION, format!("token {token}"));
            }
            if let Some(body) = request.body {
                builder = builder
                    .header(reqwest::header::CONTENT_TYPE, "application/json")
                    .body(body);
            }

            let response = builder.send().await.map_err(|error| error.to_string())?;
            let status = response.status().as_u16();
            let body = response.text().await.map_err(|error| error.to_string())?;

            Ok(Response { status, body })
        })
    }
}
