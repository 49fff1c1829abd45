use crate::name::MAX_NAME_LEN;

/// Errors produced by the `repogate-core` crate.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum CoreError {
    /// A name contained no allowed characters once sanitized.
    #[error("the {kind} name is empty once special characters are removed")]
    EmptyName { kind: NameKind },

    /// A sanitized name exceeded [`MAX_NAME_LEN`] characters.
    #[error(
        "the name of the new {kind} is too long ({len} characters), try another one. \
         The limit is {max} characters.",
        max = MAX_NAME_LEN
    )]
    NameTooLong { kind: NameKind, len: usize },
}

/// Errors produced while building [`Credentials`](crate::Credentials).
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum CredentialError {
    /// A required environment variable is not set.
    #[error("environment variable {var} is not set")]
    Missing { var: String },

    /// The access token is not valid base64.
    #[error("access token is not valid base64: {0}")]
    InvalidBase64(#[from] base64::DecodeError),

    /// The decoded access token is not valid UTF-8.
    #[error("access token is not valid UTF-8")]
    InvalidUtf8(#[from] std::string::FromUtf8Error),

    /// The token or owner is empty.
    #[error("{field} is empty")]
    Empty { field: &'static str },
}

/// What a validated name refers to; used in error messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum NameKind {
    /// A remote repository.
    Repository,
    /// A file at a repository's root.
    File,
}

impl std::fmt::Display for NameKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            NameKind::Repository => f.write_str("repository"),
            NameKind::File => f.write_str("file"),
        }
    }
}
