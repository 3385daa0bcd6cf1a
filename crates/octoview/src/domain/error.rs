use thiserror::Error;

/// Failure taxonomy for the remote navigator and the JSON tree engine.
///
/// Every fault inside the two core components is converted into one of these
/// variants at the component boundary; no transport or parser error escapes
/// raw, and nothing here is fatal to the process. Errors degrade to inline
/// text scoped to the current page, with no automatic retry.
#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub enum ContentError {
    /// Credentials are absent or blank; detected before any network call.
    #[error("GitHub configuration is not set up")]
    Configuration,
    /// Transport failure or non-success HTTP status.
    #[error("{0}")]
    Fetch(String),
    /// Payload does not match the object-or-array document grammar.
    #[error("JSON Parsing Error: {0}")]
    Parse(String),
}

impl ContentError {
    /// Builds a fetch error carrying the HTTP status code.
    pub fn fetch_status(status: u16) -> Self {
        Self::Fetch(format!("request failed with HTTP status {status}"))
    }

    /// Builds the parse error for payloads that are neither object nor array.
    pub fn invalid_json() -> Self {
        Self::Parse("Invalid JSON format".to_string())
    }
}
