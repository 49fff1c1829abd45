//! Error types for the gateway crate.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use repogate_core::{CoreError, CredentialError};
use repogate_github::HostError;

/// Errors that can occur during gateway request handling.
///
/// Every variant is reported to the client as `400 Bad Request` with the
/// message as a plain-text body.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum GatewayError {
    /// A repository or file name failed sanitization or length checks.
    #[error(transparent)]
    Validation(#[from] CoreError),

    /// A required query parameter was empty.
    #[error("{name} is required")]
    MissingParameter { name: &'static str },

    /// The repository does not exist or may not be touched.
    #[error("The repository don't exist.")]
    NotFound { repo: String },

    /// A file with the requested name is already at the repository root.
    #[error("Cannot add a new file with that name file because there another file was used.")]
    Conflict { file: String },

    /// Credentials are missing, malformed, or rejected by the host.
    #[error("authentication failed: {0}")]
    Auth(String),

    /// The remote host failed for any other reason.
    #[error("remote host error: {0}")]
    Remote(HostError),

    /// A check the gateway relies on could not be completed.
    #[error("internal error: {0}")]
    Internal(String),
}

impl From<CredentialError> for GatewayError {
    fn from(err: CredentialError) -> Self {
        GatewayError::Auth(err.to_string())
    }
}

impl From<HostError> for GatewayError {
    fn from(err: HostError) -> Self {
        match err {
            HostError::Unauthorized { message, .. } => GatewayError::Auth(message),
            other => GatewayError::Remote(other),
        }
    }
}

impl IntoResponse for GatewayError {
    fn into_response(self) -> Response {
        (StatusCode::BAD_REQUEST, self.to_string()).into_response()
    }
}
