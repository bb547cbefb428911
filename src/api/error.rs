//! Backend Error Types
//!
//! Two kinds of failure reach the page: the backend answered but without a
//! success marker ([`ViewError::Server`]), or the request never produced a
//! usable JSON body ([`TransportError`]).

use thiserror::Error;

/// Failures below the JSON layer: connection, timeout, or an unparsable body
#[derive(Error, Debug)]
pub enum TransportError {
    /// The request did not complete within the configured timeout
    #[error("Request timeout")]
    Timeout,

    /// The backend could not be reached
    #[error("Backend unavailable: {0}")]
    Unavailable(String),

    /// Any other reqwest failure
    #[error("Request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The response body was not the expected JSON
    #[error("Invalid response body: {0}")]
    Decode(#[from] serde_json::Error),

    /// The HTTP client could not be built
    #[error("HTTP client error: {0}")]
    Client(String),
}

impl TransportError {
    /// Classify a reqwest error the same way for every endpoint
    pub(crate) fn from_reqwest(e: reqwest::Error) -> Self {
        if e.is_timeout() {
            TransportError::Timeout
        } else if e.is_connect() {
            TransportError::Unavailable(e.to_string())
        } else {
            TransportError::Request(e)
        }
    }
}

/// Outcome of a view operation that did not succeed
#[derive(Error, Debug)]
pub enum ViewError {
    /// The backend replied without a success marker
    #[error("{0}")]
    Server(String),

    /// The request failed before a reply could be read
    #[error(transparent)]
    Transport(#[from] TransportError),
}

impl ViewError {
    pub fn is_transport(&self) -> bool {
        matches!(self, ViewError::Transport(_))
    }
}

/// Result type for view operations
pub type ViewResult<T> = Result<T, ViewError>;
