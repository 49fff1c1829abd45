//! Fuzz target: JSON decoding of a repository listing page.
//!
//! Verifies that arbitrary bytes from the remote host never cause panics
//! when decoded and summarized.

#![no_main]

use libfuzzer_sys::fuzz_target;
use repogate_core::{RemoteRepository, RepoSummary};

fuzz_target!(|data: &[u8]| {
    // Errors are expected; panics are not.
    let Ok(repos) = serde_json::from_slice::<Vec<RemoteRepository>>(data) else {
        return;
    };
    for repo in &repos {
        let summary = RepoSummary::from(repo);
        assert_eq!(summary.id, repo.id.to_string());
        assert_ne!(summary.description.as_deref(), Some(""));
    }
});
