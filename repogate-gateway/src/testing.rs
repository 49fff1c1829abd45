//! In-memory remote host used by the gateway's tests.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard};

use async_trait::async_trait;
use repogate_core::{Credentials, NewFile, NewRepository, RemoteEntry, RemoteRepository};
use repogate_github::{HostConnector, HostError, RepoHost};

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Call {
    ListRepositories,
    CreateRepository(String),
    DeleteRepository(u64),
    ListRoot(String),
    CreateFile(String, String),
}

#[derive(Debug, Default)]
struct State {
    repos: Vec<RemoteRepository>,
    roots: HashMap<String, Vec<RemoteEntry>>,
    created: Vec<NewRepository>,
    files: Vec<(String, String, NewFile)>,
    calls: Vec<Call>,
    fail_root_listing: bool,
    reject_credentials: bool,
    connected_as: Vec<String>,
}

/// Shared-state fake; clones observe the same repositories and calls.
#[derive(Debug, Clone, Default)]
pub(crate) struct FakeHost {
    state: Arc<Mutex<State>>,
}

impl FakeHost {
    pub(crate) fn with_repos(repos: Vec<RemoteRepository>) -> Self {
        let host = Self::default();
        host.lock().repos = repos;
        host
    }

    pub(crate) fn with_root(self, repo: &str, entries: Vec<RemoteEntry>) -> Self {
        self.lock().roots.insert(repo.to_owned(), entries);
        self
    }

    pub(crate) fn failing_root_listing(self) -> Self {
        self.lock().fail_root_listing = true;
        self
    }

    pub(crate) fn rejecting_credentials(self) -> Self {
        self.lock().reject_credentials = true;
        self
    }

    pub(crate) fn created(&self) -> Vec<NewRepository> {
        self.lock().created.clone()
    }

    pub(crate) fn files(&self) -> Vec<(String, String, NewFile)> {
        self.lock().files.clone()
    }

    pub(crate) fn calls(&self) -> Vec<Call> {
        self.lock().calls.clone()
    }

    pub(crate) fn connected_as(&self) -> Vec<String> {
        self.lock().connected_as.clone()
    }

    fn lock(&self) -> MutexGuard<'_, State> {
        match self.state.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        }
    }

    fn begin(&self, call: Call) -> Result<MutexGuard<'_, State>, HostError> {
        let mut state = self.lock();
        state.calls.push(call);
        if state.reject_credentials {
            return Err(HostError::Unauthorized {
                endpoint: "fake".to_owned(),
                message: "Bad credentials".to_owned(),
            });
        }
        Ok(state)
    }
}

#[async_trait]
impl RepoHost for FakeHost {
    async fn list_repositories(&self) -> Result<Vec<RemoteRepository>, HostError> {
        let state = self.begin(Call::ListRepositories)?;
        Ok(state.repos.clone())
    }

    async fn create_repository(&self, repo: &NewRepository) -> Result<RemoteRepository, HostError> {
        let mut state = self.begin(Call::CreateRepository(repo.name.clone()))?;
        if state.repos.iter().any(|r| r.name == repo.name) {
            return Err(HostError::Api {
                status: 422,
                endpoint: "fake".to_owned(),
                message: "name already exists on this account".to_owned(),
            });
        }
        let id = state.repos.iter().map(|r| r.id).max().unwrap_or(0) + 1;
        let created = RemoteRepository::new(
            id,
            repo.name.clone(),
            Some(repo.description.clone()),
            repo.is_template,
        );
        state.repos.push(created.clone());
        state.created.push(repo.clone());
        Ok(created)
    }

    async fn delete_repository(&self, id: u64) -> Result<(), HostError> {
        let mut state = self.begin(Call::DeleteRepository(id))?;
        let before = state.repos.len();
        state.repos.retain(|r| r.id != id);
        if state.repos.len() == before {
            return Err(HostError::NotFound { endpoint: format!("fake/repositories/{id}") });
        }
        Ok(())
    }

    async fn list_root(&self, _owner: &str, repo: &str) -> Result<Vec<RemoteEntry>, HostError> {
        let state = self.begin(Call::ListRoot(repo.to_owned()))?;
        if state.fail_root_listing {
            return Err(HostError::Api {
                status: 500,
                endpoint: "fake".to_owned(),
                message: "server error".to_owned(),
            });
        }
        state
            .roots
            .get(repo)
            .cloned()
            .ok_or_else(|| HostError::NotFound { endpoint: format!("fake/{repo}/contents") })
    }

    async fn create_file(&self, owner: &str, repo: &str, file: &NewFile) -> Result<(), HostError> {
        let mut state = self.begin(Call::CreateFile(repo.to_owned(), file.path.clone()))?;
        state.files.push((owner.to_owned(), repo.to_owned(), file.clone()));
        Ok(())
    }
}

impl HostConnector for FakeHost {
    type Host = FakeHost;

    fn connect(&self, credentials: &Credentials) -> Result<FakeHost, HostError> {
        self.lock().connected_as.push(credentials.owner().to_owned());
        Ok(self.clone())
    }
}
