//! Core types for the repogate repository gateway.
//!
//! Defines the domain types shared by the remote host client and the HTTP
//! gateway: sanitized names, credentials, repository records and the
//! requests that create repositories and files.

#![warn(clippy::pedantic)]
#![deny(clippy::unwrap_used)]

pub mod credentials;
pub mod error;
pub mod name;
pub mod repository;

pub use credentials::Credentials;
pub use error::{CoreError, CredentialError, NameKind};
pub use name::{sanitize, SanitizedName, MAX_NAME_LEN};
pub use repository::{
    frontmatter_body, EntryKind, NewFile, NewRepository, RemoteEntry, RemoteRepository, RepoSummary,
    DEFAULT_BRANCH,
};
