//! Process configuration and per-request credential resolution.

use std::time::Duration;

use repogate_core::{CredentialError, Credentials};
use repogate_github::HostConfig;

/// Environment variable holding the base64-encoded access token.
pub const TOKEN_VAR: &str = "PERSONAL_ACCESS_TOKEN";
/// Environment variable holding the owner / account identifier.
pub const OWNER_VAR: &str = "USER_GITHUB";

const LISTEN_ADDR_VAR: &str = "REPOGATE_LISTEN_ADDR";
const API_URL_VAR: &str = "REPOGATE_API_URL";
const TIMEOUT_VAR: &str = "REPOGATE_TIMEOUT_SECS";

const DEFAULT_LISTEN_ADDR: &str = "127.0.0.1:5000";

/// Errors raised while reading the process configuration.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum ConfigError {
    /// A variable was set to a value that cannot be parsed.
    #[error("invalid value for {var}: {reason}")]
    Invalid { var: &'static str, reason: String },
}

/// Gateway configuration, read once at startup.
#[derive(Debug, Clone)]
#[non_exhaustive]
pub struct GatewayConfig {
    /// Address the HTTP server binds to.
    pub listen_addr: String,
    /// Remote API client settings.
    pub host: HostConfig,
    /// Where per-request credentials come from.
    pub credentials: CredentialSource,
}

impl GatewayConfig {
    /// Read the configuration from the process environment.
    ///
    /// # Errors
    /// Returns [`ConfigError::Invalid`] if a variable is present but
    /// malformed.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Read the configuration through `lookup`, which maps a variable name
    /// to its value.
    ///
    /// # Errors
    /// Returns [`ConfigError::Invalid`] if a variable is present but
    /// malformed.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let listen_addr = lookup(LISTEN_ADDR_VAR).unwrap_or_else(|| DEFAULT_LISTEN_ADDR.to_owned());

        let mut host = match lookup(API_URL_VAR) {
            Some(url) if !url.trim().is_empty() => HostConfig::new(url.trim()),
            _ => HostConfig::default(),
        };

        if let Some(raw) = lookup(TIMEOUT_VAR) {
            let secs: u64 = raw.trim().parse().map_err(|e| ConfigError::Invalid {
                var: TIMEOUT_VAR,
                reason: format!("{e}"),
            })?;
            if secs == 0 {
                return Err(ConfigError::Invalid {
                    var: TIMEOUT_VAR,
                    reason: "must be greater than zero".to_owned(),
                });
            }
            host = host.with_timeout(Duration::from_secs(secs));
        }

        Ok(Self { listen_addr, host, credentials: CredentialSource::environment() })
    }
}

/// Source of the credentials used for each request.
///
/// Resolved afresh on every request and never cached.
#[derive(Debug, Clone)]
#[non_exhaustive]
pub enum CredentialSource {
    /// Read the encoded token and the owner from environment variables.
    Environment {
        token_var: String,
        owner_var: String,
    },
    /// Fixed credentials, for tests and embedding.
    Static(Credentials),
}

impl CredentialSource {
    /// Read from [`TOKEN_VAR`] and [`OWNER_VAR`].
    #[must_use]
    pub fn environment() -> Self {
        CredentialSource::Environment {
            token_var: TOKEN_VAR.to_owned(),
            owner_var: OWNER_VAR.to_owned(),
        }
    }

    /// Produce the credentials for one request.
    ///
    /// # Errors
    /// Returns [`CredentialError::Missing`] if a variable is unset, or a
    /// decoding error if the token is malformed.
    pub fn resolve(&self) -> Result<Credentials, CredentialError> {
        match self {
            CredentialSource::Environment { token_var, owner_var } => {
                resolve_with(token_var, owner_var, |var| std::env::var(var).ok())
            }
            CredentialSource::Static(creds) => Ok(creds.clone()),
        }
    }
}

fn resolve_with<F>(token_var: &str, owner_var: &str, lookup: F) -> Result<Credentials, CredentialError>
where
    F: Fn(&str) -> Option<String>,
{
    let encoded = lookup(token_var).ok_or_else(|| CredentialError::Missing { var: token_var.to_owned() })?;
    let owner = lookup(owner_var).ok_or_else(|| CredentialError::Missing { var: owner_var.to_owned() })?;
    Credentials::from_encoded(&encoded, owner)
}
