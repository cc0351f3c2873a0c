//! Errors produced by the retrieval layer.

use reqwest::StatusCode;

/// Everything that can go wrong while talking to the YouTube Data API.
///
/// "Nothing matched" is not an error: the fetchers report that as an empty list or `None`.
#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    /// The client could not be built, most likely because no usable API key was supplied.
    #[error("YouTube client is not configured: {0}")]
    Configuration(String),

    /// YouTube answered with a non-success status.
    ///
    /// `body` is the raw error document, which names the reason (quota, bad key, ...).
    #[error("An HTTP error {} occurred: {}", .status.as_u16(), .body)]
    Http {
        endpoint: &'static str,
        status: StatusCode,
        body: String,
    },

    /// The request never produced a response (connect failure, timeout, ...).
    #[error("send request to YouTube {endpoint} API")]
    Request {
        endpoint: &'static str,
        #[source]
        source: reqwest::Error,
    },

    /// YouTube answered with success, but not with the JSON document we expected.
    #[error("parse YouTube {endpoint} API response as JSON")]
    Decode {
        endpoint: &'static str,
        #[source]
        source: reqwest::Error,
    },

    /// A resource that an earlier response pointed at could not be retrieved.
    #[error("{0} not found")]
    NotFound(String),
}

/// Coarse classification of a [`FetchError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Fatal to the session; the credential must be corrected before retrying.
    Configuration,
    /// The remote call failed; retrying the same action may succeed.
    Transport,
    NotFound,
}

impl FetchError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            FetchError::Configuration(_) => ErrorKind::Configuration,
            FetchError::Http { .. } | FetchError::Request { .. } | FetchError::Decode { .. } => {
                ErrorKind::Transport
            }
            FetchError::NotFound(_) => ErrorKind::NotFound,
        }
    }

    /// The HTTP status YouTube answered with, if it answered at all.
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            FetchError::Http { status, .. } => Some(*status),
            FetchError::Request { source, .. } | FetchError::Decode { source, .. } => {
                source.status()
            }
            _ => None,
        }
    }
}
