//! Remote hosting service access for the repogate gateway.
//!
//! Defines the [`RepoHost`] abstraction the gateway delegates to and a
//! GitHub REST implementation built on reqwest.

#![warn(clippy::pedantic)]
#![deny(clippy::unwrap_used)]

pub mod backend;
pub mod client;
pub mod config;
pub mod error;
pub mod pagination;

pub use backend::{HostConnector, RepoHost};
pub use client::{GitHubClient, GitHubConnector};
pub use config::HostConfig;
pub use error::HostError;
