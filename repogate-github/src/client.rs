//! GitHub REST v3 implementation of [`RepoHost`].
//!
//! One client is built per request from the caller's credentials and is
//! dropped with it; nothing is pooled across requests.

use async_trait::async_trait;
use base64::Engine as _;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, AUTHORIZATION, LINK};
use reqwest::{Method, RequestBuilder, Response, StatusCode};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use repogate_core::{Credentials, NewFile, NewRepository, RemoteEntry, RemoteRepository};

use crate::backend::{HostConnector, RepoHost};
use crate::pagination::next_page_url;
use crate::{HostConfig, HostError};

const GITHUB_MEDIA_TYPE: &str = "application/vnd.github+json";
const GITHUB_API_VERSION: &str = "2022-11-28";
const PER_PAGE: u8 = 100;

/// GitHub client scoped to one authenticated account.
#[derive(Debug, Clone)]
pub struct GitHubClient {
    http: reqwest::Client,
    api_url: String,
}

impl GitHubClient {
    /// Build a client that authenticates as `credentials`.
    ///
    /// The owner identifier doubles as the `User-Agent`, which GitHub
    /// requires on every request.
    ///
    /// # Errors
    /// Returns [`HostError::Config`] if the token or owner cannot be used as
    /// a header value, or the underlying HTTP client fails to build.
    pub fn new(config: &HostConfig, credentials: &Credentials) -> Result<Self, HostError> {
        let mut auth = HeaderValue::from_str(&format!("Bearer {}", credentials.token()))
            .map_err(|e| HostError::Config(format!("access token is not a valid header value: {e}")))?;
        auth.set_sensitive(true);

        let mut headers = HeaderMap::new();
        headers.insert(AUTHORIZATION, auth);
        headers.insert(ACCEPT, HeaderValue::from_static(GITHUB_MEDIA_TYPE));
        headers.insert("x-github-api-version", HeaderValue::from_static(GITHUB_API_VERSION));

        let http = reqwest::Client::builder()
            .default_headers(headers)
            .user_agent(credentials.owner())
            .timeout(config.timeout)
            .build()
            .map_err(|e| HostError::Config(format!("build HTTP client: {e}")))?;

        Ok(Self { http, api_url: config.api_url.clone() })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.api_url)
    }

    fn request(&self, method: Method, url: &str) -> RequestBuilder {
        tracing::debug!(%method, %url, "GitHub API request");
        self.http.request(method, url)
    }
}

#[async_trait]
impl RepoHost for GitHubClient {
    async fn list_repositories(&self) -> Result<Vec<RemoteRepository>, HostError> {
        let mut repos = Vec::new();
        let mut next = Some(self.url(&format!("/user/repos?per_page={PER_PAGE}")));

        while let Some(url) = next {
            let resp = check(self.request(Method::GET, &url).send().await?, &url).await?;
            next = resp
                .headers()
                .get(LINK)
                .and_then(|v| v.to_str().ok())
                .and_then(next_page_url);
            let page: Vec<RemoteRepository> = decode(resp, &url).await?;
            repos.extend(page);
        }

        Ok(repos)
    }

    async fn create_repository(&self, repo: &NewRepository) -> Result<RemoteRepository, HostError> {
        let url = self.url("/user/repos");
        let resp = check(self.request(Method::POST, &url).json(repo).send().await?, &url).await?;
        decode(resp, &url).await
    }

    async fn delete_repository(&self, id: u64) -> Result<(), HostError> {
        let url = self.url(&format!("/repositories/{id}"));
        check(self.request(Method::DELETE, &url).send().await?, &url).await?;
        Ok(())
    }

    async fn list_root(&self, owner: &str, repo: &str) -> Result<Vec<RemoteEntry>, HostError> {
        let url = self.url(&format!("/repos/{owner}/{repo}/contents/"));
        let resp = check(self.request(Method::GET, &url).send().await?, &url).await?;
        decode(resp, &url).await
    }

    async fn create_file(&self, owner: &str, repo: &str, file: &NewFile) -> Result<(), HostError> {
        let url = self.url(&format!("/repos/{owner}/{repo}/contents/{}", file.api_path()));
        let body = CreateFileBody {
            message: &file.message,
            content: base64::engine::general_purpose::STANDARD.encode(&file.content),
            branch: &file.branch,
        };
        check(self.request(Method::PUT, &url).json(&body).send().await?, &url).await?;
        Ok(())
    }
}

/// Builds a fresh [`GitHubClient`] for every set of credentials.
#[derive(Debug, Clone, Default)]
pub struct GitHubConnector {
    config: HostConfig,
}

impl GitHubConnector {
    /// Create a connector that targets the API described by `config`.
    #[must_use]
    pub fn new(config: HostConfig) -> Self {
        Self { config }
    }
}

impl HostConnector for GitHubConnector {
    type Host = GitHubClient;

    fn connect(&self, credentials: &Credentials) -> Result<GitHubClient, HostError> {
        GitHubClient::new(&self.config, credentials)
    }
}

// ── Wire types ────────────────────────────────────────────────────────────────

#[derive(Debug, Serialize)]
struct CreateFileBody<'a> {
    message: &'a str,
    content: String,
    branch: &'a str,
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    message: String,
    #[serde(default)]
    errors: Vec<ErrorDetail>,
}

#[derive(Debug, Deserialize)]
struct ErrorDetail {
    #[serde(default)]
    message: Option<String>,
    #[serde(default)]
    code: Option<String>,
}

// ── Response helpers ──────────────────────────────────────────────────────────

/// Map a non-success response to a [`HostError`], passing successes through.
async fn check(resp: Response, endpoint: &str) -> Result<Response, HostError> {
    let status = resp.status();
    if status.is_success() {
        return Ok(resp);
    }

    let body = resp.text().await.unwrap_or_default();
    let message = error_message(status, &body);
    tracing::debug!(%status, %endpoint, %message, "GitHub API returned non-success status");

    Err(match status {
        StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => {
            HostError::Unauthorized { endpoint: endpoint.to_owned(), message }
        }
        StatusCode::NOT_FOUND => HostError::NotFound { endpoint: endpoint.to_owned() },
        _ => HostError::Api { status: status.as_u16(), endpoint: endpoint.to_owned(), message },
    })
}

async fn decode<T: DeserializeOwned>(resp: Response, endpoint: &str) -> Result<T, HostError> {
    let bytes = resp.bytes().await?;
    serde_json::from_slice(&bytes).map_err(|e| HostError::Decode {
        endpoint: endpoint.to_owned(),
        reason: e.to_string(),
    })
}

/// Extract a human-readable message from a GitHub error body.
///
/// GitHub answers with `{"message": "...", "errors": [{"message": "..."}]}`;
/// the detail messages are appended in parentheses. Falls back to the raw
/// body, then to the status reason.
fn error_message(status: StatusCode, body: &str) -> String {
    if let Ok(parsed) = serde_json::from_str::<ErrorBody>(body) {
        let details: Vec<&str> = parsed
            .errors
            .iter()
            .filter_map(|d| d.message.as_deref().or(d.code.as_deref()))
            .collect();
        if details.is_empty() {
            return parsed.message;
        }
        return format!("{} ({})", parsed.message, details.join("; "));
    }

    let trimmed = body.trim();
    if trimmed.is_empty() {
        status.canonical_reason().unwrap_or("unknown error").to_owned()
    } else {
        trimmed.to_owned()
    }
}
