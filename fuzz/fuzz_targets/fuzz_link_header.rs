//! Fuzz target: `Link` header pagination parsing.
#![no_main]

use libfuzzer_sys::fuzz_target;
use repogate_github::pagination::next_page_url;

fuzz_target!(|data: &[u8]| {
    let Ok(header) = std::str::from_utf8(data) else {
        return;
    };
    if let Some(url) = next_page_url(header) {
        assert!(header.contains(&url), "next URL must come from the header");
    }
});
