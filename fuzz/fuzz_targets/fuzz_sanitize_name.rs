//! Fuzz target: name sanitization and validation.
//!
//! Verifies that arbitrary input never panics, that only `[A-Za-z0-9_.]`
//! survives, and that accepted names respect the length limit.

#![no_main]

use libfuzzer_sys::fuzz_target;
use repogate_core::{sanitize, NameKind, SanitizedName, MAX_NAME_LEN};

fuzz_target!(|data: &[u8]| {
    let Ok(raw) = std::str::from_utf8(data) else {
        return;
    };

    let cleaned = sanitize(raw);
    assert!(
        cleaned.chars().all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '.'),
        "sanitize must only keep allowed characters"
    );
    assert!(cleaned.len() <= raw.len(), "sanitize must never grow the input");

    if let Ok(name) = SanitizedName::parse(raw, NameKind::File) {
        assert_eq!(name.as_str(), cleaned);
        assert!(!name.as_str().is_empty());
        assert!(name.as_str().len() <= MAX_NAME_LEN);
    }
});
