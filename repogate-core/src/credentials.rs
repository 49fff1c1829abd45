//! Access credentials for the remote hosting service.

use std::fmt;

use base64::Engine as _;

use crate::error::CredentialError;

/// A decoded access token and the account it belongs to.
///
/// Built fresh for every request and dropped when the request completes.
/// The token never appears in `Debug` output.
#[derive(Clone, PartialEq, Eq)]
#[non_exhaustive]
pub struct Credentials {
    token: String,
    owner: String,
}

impl Credentials {
    /// Creates credentials from an already decoded token.
    ///
    /// # Errors
    /// Returns [`CredentialError::Empty`] if `token` or `owner` is empty.
    pub fn new(token: impl Into<String>, owner: impl Into<String>) -> Result<Self, CredentialError> {
        let token = token.into();
        let owner = owner.into();
        if token.trim().is_empty() {
            return Err(CredentialError::Empty { field: "access token" });
        }
        if owner.trim().is_empty() {
            return Err(CredentialError::Empty { field: "owner" });
        }
        Ok(Self { token, owner })
    }

    /// Creates credentials from a base64-encoded token, the form it is
    /// stored in at rest.
    ///
    /// Surrounding whitespace (such as a trailing newline from a secrets
    /// file) is ignored.
    ///
    /// # Errors
    /// Returns [`CredentialError::InvalidBase64`] or
    /// [`CredentialError::InvalidUtf8`] if the token cannot be decoded, or
    /// [`CredentialError::Empty`] if either value is empty.
    pub fn from_encoded(encoded_token: &str, owner: impl Into<String>) -> Result<Self, CredentialError> {
        let bytes = base64::engine::general_purpose::STANDARD.decode(encoded_token.trim())?;
        let token = String::from_utf8(bytes)?;
        Self::new(token.trim_end().to_owned(), owner)
    }

    /// The decoded access token.
    #[must_use]
    pub fn token(&self) -> &str {
        &self.token
    }

    /// The account that owns the repositories.
    #[must_use]
    pub fn owner(&self) -> &str {
        &self.owner
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("token", &"<redacted>")
            .field("owner", &self.owner)
            .finish()
    }
}
