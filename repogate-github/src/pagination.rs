//! `Link` header parsing for paginated list endpoints.

/// Extract the `rel="next"` URL from a GitHub `Link` header.
///
/// GitHub Link headers look like:
/// `<https://api.github.com/user/repos?page=2>; rel="next", <...?page=5>; rel="last"`
#[must_use]
pub fn next_page_url(link_header: &str) -> Option<String> {
    link_header.split(',').find_map(|part| {
        let mut url = None;
        let mut is_next = false;

        for segment in part.split(';') {
            let segment = segment.trim();
            if let Some(inner) = segment.strip_prefix('<').and_then(|s| s.strip_suffix('>')) {
                url = Some(inner);
            } else if let Some(rel) = segment.strip_prefix("rel=") {
                is_next = rel.trim_matches('"').split_whitespace().any(|r| r == "next");
            }
        }

        if is_next {
            url.map(str::to_owned)
        } else {
            None
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn next_page_url_finds_next_among_several_rels() {
        let header = "<https://api.github.com/user/repos?per_page=100&page=2>; rel=\"next\", \
                      <https://api.github.com/user/repos?per_page=100&page=4>; rel=\"last\"";
        assert_eq!(
            next_page_url(header).as_deref(),
            Some("https://api.github.com/user/repos?per_page=100&page=2")
        );
    }

    #[test]
    fn next_page_url_none_on_last_page() {
        let header = "<https://api.github.com/user/repos?page=1>; rel=\"prev\", \
                      <https://api.github.com/user/repos?page=1>; rel=\"first\"";
        assert_eq!(next_page_url(header), None);
    }

    #[test]
    fn next_page_url_none_on_garbage() {
        assert_eq!(next_page_url(""), None);
        assert_eq!(next_page_url("rel=\"next\""), None);
        assert_eq!(next_page_url("not a link header"), None);
    }
}
