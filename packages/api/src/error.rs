//! Errors raised while talking to the marketplace API.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    /// The server answered with a non-success status.
    #[error("request failed with status {status}")]
    Http { status: u16, detail: Option<String> },
    /// The request never completed.
    #[error("network error: {0}")]
    Network(String),
    /// The server answered but the body could not be read as expected.
    #[error("unexpected response body: {0}")]
    Decode(String),
    /// The configured base URL cannot carry the request path.
    #[error("invalid API url: {0}")]
    InvalidUrl(String),
}

impl ApiError {
    /// The server-provided `detail` message, if any.
    pub fn detail(&self) -> Option<&str> {
        match self {
            ApiError::Http { detail, .. } => detail.as_deref(),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_decode() {
            ApiError::Decode(e.to_string())
        } else {
            ApiError::Network(e.to_string())
        }
    }
}
