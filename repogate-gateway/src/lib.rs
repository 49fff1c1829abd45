//! HTTP gateway for repository management on a remote hosting service.
//!
//! Exposes create, delete, list and add-file endpoints that authenticate
//! per request and delegate to a [`repogate_github::RepoHost`].

#![warn(clippy::pedantic)]
#![deny(clippy::unwrap_used)]

pub mod config;
pub mod error;
pub mod routes;
pub mod service;

#[cfg(test)]
mod testing;
