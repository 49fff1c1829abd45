//! Repository gateway operations.
//!
//! Each operation runs against a [`RepoHost`] that was connected for the
//! current request. Lookups are linear scans over the account's
//! repositories, and `add_file` checks for an existing file before writing
//! without any lock: two concurrent calls for the same name can both pass
//! the check.

use chrono::Utc;
use tracing::info;

use repogate_core::{
    NewFile, NewRepository, RemoteEntry, RemoteRepository, RepoSummary, SanitizedName,
};
use repogate_github::RepoHost;

use crate::error::GatewayError;

/// The four repository operations, bound to one authenticated account.
pub struct RepoGateway<H: RepoHost> {
    host: H,
    owner: String,
}

impl<H: RepoHost> RepoGateway<H> {
    /// Bind a connected host to the account `owner`.
    pub fn new(host: H, owner: impl Into<String>) -> Self {
        Self { host, owner: owner.into() }
    }

    /// Create a public, auto-initialized template repository.
    ///
    /// # Errors
    /// Returns [`GatewayError::Remote`] or [`GatewayError::Auth`] if the
    /// host refuses the creation.
    pub async fn create_repository(&self, name: &SanitizedName) -> Result<(), GatewayError> {
        let new_repo = NewRepository::template(name, Utc::now());
        let created = self.host.create_repository(&new_repo).await?;
        info!(owner = %self.owner, repo = %created.name, id = created.id, "repository created");
        Ok(())
    }

    /// Delete the template repository named exactly `name`.
    ///
    /// # Errors
    /// Returns [`GatewayError::NotFound`] if no template repository has that
    /// name.
    pub async fn delete_repository(&self, name: &str) -> Result<(), GatewayError> {
        let repos = self.host.list_repositories().await?;
        // The listing includes collaborator and organisation repositories, so
        // a name can appear more than once.
        let target = repos
            .iter()
            .find(|repo| repo.name == name && repo.is_deletable())
            .ok_or_else(|| GatewayError::NotFound { repo: name.to_owned() })?;

        self.host.delete_repository(target.id).await?;
        info!(owner = %self.owner, repo = %name, id = target.id, "repository deleted");
        Ok(())
    }

    /// List every repository of the account in host order.
    ///
    /// # Errors
    /// Returns [`GatewayError::Remote`] or [`GatewayError::Auth`] if the
    /// listing fails.
    pub async fn list_repositories(&self) -> Result<Vec<RepoSummary>, GatewayError> {
        let repos = self.host.list_repositories().await?;
        Ok(repos.iter().map(RepoSummary::from).collect())
    }

    /// Commit a frontmatter stub named `file` to the root of `repo`.
    ///
    /// # Errors
    /// Returns [`GatewayError::NotFound`] if `repo` does not exist,
    /// [`GatewayError::Conflict`] if the root already has an entry named
    /// `file`, and [`GatewayError::Internal`] if the root cannot be listed
    /// for any reason, a missing root included.
    pub async fn add_file(&self, repo: &str, file: &SanitizedName) -> Result<(), GatewayError> {
        let repos = self.host.list_repositories().await?;
        if find_by_name(&repos, repo).is_none() {
            return Err(GatewayError::NotFound { repo: repo.to_owned() });
        }

        if count_named(&self.root_entries(repo).await?, file.as_str()) > 0 {
            return Err(GatewayError::Conflict { file: file.to_string() });
        }

        let new_file = NewFile::frontmatter_stub(file, Utc::now());
        self.host.create_file(&self.owner, repo, &new_file).await?;
        info!(owner = %self.owner, %repo, path = %new_file.path, "file added");
        Ok(())
    }

    async fn root_entries(&self, repo: &str) -> Result<Vec<RemoteEntry>, GatewayError> {
        self.host.list_root(&self.owner, repo).await.map_err(|e| {
            tracing::warn!(owner = %self.owner, %repo, error = %e, "root listing failed");
            GatewayError::Internal(format!("could not check existing files: {e}"))
        })
    }
}

fn find_by_name<'a>(repos: &'a [RemoteRepository], name: &str) -> Option<&'a RemoteRepository> {
    repos.iter().find(|repo| repo.name == name)
}

fn count_named(entries: &[RemoteEntry], name: &str) -> usize {
    entries.iter().filter(|entry| entry.name == name).count()
}
