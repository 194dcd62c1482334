//! Client-side HTTP errors

use thiserror::Error;

/// Anything that stops a response from becoming records.
///
/// The users page treats every variant the same way: log it, keep the
/// current snapshot.
#[derive(Error, Debug)]
pub enum FetchError {
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("server returned {status}: {body}")]
    Status { status: u16, body: String },

    #[error("malformed payload: {0}")]
    Payload(#[from] serde_json::Error),

    #[error("bad endpoint '{endpoint}': {reason}")]
    Endpoint { endpoint: String, reason: String },
}

impl FetchError {
    /// HTTP status, when the server answered at all
    pub fn status(&self) -> Option<u16> {
        match self {
            FetchError::Status { status, .. } => Some(*status),
            FetchError::Network(e) => e.status().map(|s| s.as_u16()),
            FetchError::Payload(_) | FetchError::Endpoint { .. } => None,
        }
    }
}
