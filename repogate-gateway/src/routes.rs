//! Axum route handlers for the repository gateway API.

use std::sync::Arc;

use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
    Json, Router,
};
use serde::Deserialize;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use repogate_core::{NameKind, SanitizedName};
use repogate_github::HostConnector;

use crate::{config::CredentialSource, error::GatewayError, service::RepoGateway};

// ── Shared state ─────────────────────────────────────────────────────────────

/// Everything a request needs to reach the remote host.
pub struct AppState<C: HostConnector> {
    connector: C,
    credentials: CredentialSource,
}

impl<C: HostConnector> AppState<C> {
    /// Create state that builds hosts with `connector` from `credentials`.
    pub fn new(connector: C, credentials: CredentialSource) -> Self {
        Self { connector, credentials }
    }

    /// Resolve credentials and connect a fresh host for one request.
    ///
    /// # Errors
    /// Returns [`GatewayError::Auth`] if the credentials cannot be
    /// resolved, or [`GatewayError::Remote`] if the client cannot be built.
    fn connect(&self) -> Result<RepoGateway<C::Host>, GatewayError> {
        let credentials = self.credentials.resolve().map_err(|e| {
            tracing::warn!(error = %e, "failed to resolve credentials");
            GatewayError::from(e)
        })?;
        let host = self.connector.connect(&credentials)?;
        Ok(RepoGateway::new(host, credentials.owner()))
    }
}

type Shared<C> = Arc<AppState<C>>;

// ── Request types ─────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct RepoQuery {
    pub repo: String,
}

#[derive(Debug, Deserialize)]
pub struct AddFileQuery {
    pub repo: String,
    pub name: String,
}

// ── Router ────────────────────────────────────────────────────────────────────

/// Build the application router around `state`.
pub fn create_router<C: HostConnector>(state: AppState<C>) -> Router {
    Router::new()
        .route("/CreateRepo", get(create_repo::<C>))
        .route("/DeleteRepo", post(delete_repo::<C>))
        .route("/ListRepo", get(list_repos::<C>))
        .route("/AddFile", post(add_file::<C>))
        .route("/health", get(health))
        .with_state(Arc::new(state))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
}

// ── Handlers ──────────────────────────────────────────────────────────────────

/// `GET /health`: liveness probe.
pub async fn health() -> impl IntoResponse {
    (StatusCode::OK, Json(serde_json::json!({"status": "ok"})))
}

/// `GET /CreateRepo?repo=`: create a template repository.
///
/// The name is sanitized and validated before any credentials are read.
///
/// # Errors
/// Returns [`GatewayError::Validation`] for an empty or over-long name.
pub async fn create_repo<C: HostConnector>(
    State(state): State<Shared<C>>,
    Query(query): Query<RepoQuery>,
) -> Result<impl IntoResponse, GatewayError> {
    let name = SanitizedName::parse(&query.repo, NameKind::Repository)?;
    state.connect()?.create_repository(&name).await?;
    Ok("The repository was created successfully.")
}

/// `POST /DeleteRepo?repo=`: delete a template repository by exact name.
///
/// # Errors
/// Returns [`GatewayError::NotFound`] if no template repository has that
/// name.
pub async fn delete_repo<C: HostConnector>(
    State(state): State<Shared<C>>,
    Query(query): Query<RepoQuery>,
) -> Result<impl IntoResponse, GatewayError> {
    let repo = required(&query.repo)?;
    state.connect()?.delete_repository(repo).await?;
    Ok("The repository was deleted successfully.")
}

/// `GET /ListRepo`: list the account's repositories.
///
/// # Errors
/// Returns [`GatewayError::Auth`] or [`GatewayError::Remote`] if the host
/// cannot be queried.
pub async fn list_repos<C: HostConnector>(
    State(state): State<Shared<C>>,
) -> Result<impl IntoResponse, GatewayError> {
    let repos = state.connect()?.list_repositories().await?;
    Ok(Json(repos))
}

/// `POST /AddFile?repo=&name=`: commit a new file to a repository root.
///
/// # Errors
/// Returns [`GatewayError::Validation`] for a bad file name,
/// [`GatewayError::NotFound`] for an unknown repository and
/// [`GatewayError::Conflict`] if the name is taken.
pub async fn add_file<C: HostConnector>(
    State(state): State<Shared<C>>,
    Query(query): Query<AddFileQuery>,
) -> Result<impl IntoResponse, GatewayError> {
    let file = SanitizedName::parse(&query.name, NameKind::File)?;
    let repo = required(&query.repo)?;
    state.connect()?.add_file(repo, &file).await?;
    Ok("The file was added to repository successfully")
}

fn required(repo: &str) -> Result<&str, GatewayError> {
    if repo.is_empty() {
        return Err(GatewayError::MissingParameter { name: "repo" });
    }
    Ok(repo)
}
