//! Remote host abstraction traits.
//!
//! Lets the gateway run against GitHub or an in-memory fake without
//! changing the request handling logic.

use async_trait::async_trait;
use repogate_core::{Credentials, NewFile, NewRepository, RemoteEntry, RemoteRepository};

use crate::HostError;

/// Repository operations offered by a source-control hosting service.
///
/// Implementations are scoped to one authenticated account and must be
/// `Send + Sync` to be used from async handlers.
///
/// No call is atomic with respect to another: a caller that lists and then
/// writes can race with other writers.
#[async_trait]
pub trait RepoHost: Send + Sync {
    /// List every repository owned by the authenticated account, in the
    /// order the host returns them.
    ///
    /// # Errors
    /// Returns [`HostError::Unauthorized`] if the credentials are rejected.
    async fn list_repositories(&self) -> Result<Vec<RemoteRepository>, HostError>;

    /// Create a repository for the authenticated account.
    ///
    /// # Errors
    /// Returns [`HostError::Api`] if the host refuses, e.g. on a name
    /// collision.
    async fn create_repository(&self, repo: &NewRepository) -> Result<RemoteRepository, HostError>;

    /// Delete the repository with the given host id.
    ///
    /// # Errors
    /// Returns [`HostError::NotFound`] if no such repository is visible.
    async fn delete_repository(&self, id: u64) -> Result<(), HostError>;

    /// List the entries at the root of `owner/repo`.
    ///
    /// # Errors
    /// Returns [`HostError::NotFound`] if the repository is missing or has
    /// no commits yet.
    async fn list_root(&self, owner: &str, repo: &str) -> Result<Vec<RemoteEntry>, HostError>;

    /// Commit a new file to `owner/repo`.
    ///
    /// # Errors
    /// Returns [`HostError::Api`] if the file already exists or the branch
    /// is missing.
    async fn create_file(&self, owner: &str, repo: &str, file: &NewFile) -> Result<(), HostError>;
}

/// Builds a [`RepoHost`] scoped to a set of credentials.
///
/// The gateway calls this once per request; implementations should not
/// cache clients across calls.
pub trait HostConnector: Send + Sync + 'static {
    /// The host client produced by this connector.
    type Host: RepoHost;

    /// Create a host client authenticated as `credentials`.
    ///
    /// # Errors
    /// Returns [`HostError::Config`] if the client cannot be built.
    fn connect(&self, credentials: &Credentials) -> Result<Self::Host, HostError>;
}
