//! Error types for the remote host crate.

/// Errors that can occur while talking to the remote hosting service.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum HostError {
    /// The host rejected the credentials (HTTP 401 or 403).
    #[error("authentication rejected by {endpoint}: {message}")]
    Unauthorized { endpoint: String, message: String },

    /// The requested resource does not exist (HTTP 404).
    #[error("not found: {endpoint}")]
    NotFound { endpoint: String },

    /// Any other non-success response.
    #[error("HTTP {status} from {endpoint}: {message}")]
    Api { status: u16, endpoint: String, message: String },

    /// The request could not be sent or the response could not be read.
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// The response body did not have the expected shape.
    #[error("unexpected response from {endpoint}: {reason}")]
    Decode { endpoint: String, reason: String },

    /// The client could not be configured.
    #[error("invalid client configuration: {0}")]
    Config(String),
}

impl HostError {
    /// Returns `true` for [`HostError::NotFound`].
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(self, HostError::NotFound { .. })
    }
}
