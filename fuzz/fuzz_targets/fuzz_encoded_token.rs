//! Fuzz target: base64 access token decoding.
//!
//! Feeds arbitrary strings through the credential decoder, which must
//! reject malformed tokens with an error rather than a panic.

#![no_main]

use libfuzzer_sys::fuzz_target;
use repogate_core::Credentials;

fuzz_target!(|data: &[u8]| {
    let Ok(encoded) = std::str::from_utf8(data) else {
        return;
    };
    if let Ok(creds) = Credentials::from_encoded(encoded, "fuzz") {
        assert!(!creds.token().trim().is_empty(), "accepted tokens must be non-empty");
    }
});
