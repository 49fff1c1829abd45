use std::fmt;

use crate::error::{CoreError, NameKind};

/// Maximum length of a sanitized repository or file name.
pub const MAX_NAME_LEN: usize = 30;

/// Removes every character outside `[A-Za-z0-9_.]`, keeping the order of
/// the remaining characters.
///
/// # Complexity
/// O(n) in the length of `raw`.
#[must_use]
pub fn sanitize(raw: &str) -> String {
    raw.chars().filter(|&c| is_allowed(c)).collect()
}

fn is_allowed(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_' || c == '.'
}

/// A repository or file name that passed sanitization and length checks.
///
/// Can only be built through [`SanitizedName::parse`], so holding one means
/// the name is non-empty, contains only `[A-Za-z0-9_.]` and is at most
/// [`MAX_NAME_LEN`] characters long.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SanitizedName(String);

impl SanitizedName {
    /// Sanitizes `raw` and validates the result.
    ///
    /// # Errors
    /// Returns [`CoreError::EmptyName`] if nothing is left after
    /// sanitization, or [`CoreError::NameTooLong`] if more than
    /// [`MAX_NAME_LEN`] characters are.
    pub fn parse(raw: &str, kind: NameKind) -> Result<Self, CoreError> {
        let cleaned = sanitize(raw);
        if cleaned.is_empty() {
            return Err(CoreError::EmptyName { kind });
        }
        // Only ASCII survives sanitization, so bytes == chars.
        if cleaned.len() > MAX_NAME_LEN {
            return Err(CoreError::NameTooLong { kind, len: cleaned.len() });
        }
        Ok(Self(cleaned))
    }

    /// Returns the name as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SanitizedName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sanitize_strips_spaces_and_punctuation() {
        assert_eq!(sanitize("My Repo!"), "MyRepo");
        assert_eq!(sanitize("notes.md"), "notes.md");
        assert_eq!(sanitize("a-b/c\\d"), "abcd");
        assert_eq!(sanitize("snake_case.v2"), "snake_case.v2");
    }

    #[test]
    fn sanitize_drops_non_ascii_letters() {
        assert_eq!(sanitize("caf\u{e9}"), "caf");
        assert_eq!(sanitize("\u{1f980}crab"), "crab");
    }

    #[test]
    fn parse_accepts_exactly_max_len() {
        let raw = "a".repeat(MAX_NAME_LEN);
        let name = match SanitizedName::parse(&raw, NameKind::Repository) {
            Ok(n) => n,
            Err(e) => panic!("unexpected error: {e}"),
        };
        assert_eq!(name.as_str().len(), MAX_NAME_LEN);
    }

    #[test]
    fn parse_rejects_one_over_max_len() {
        let raw = "a".repeat(MAX_NAME_LEN + 1);
        match SanitizedName::parse(&raw, NameKind::File) {
            Err(CoreError::NameTooLong { kind, len }) => {
                assert_eq!(kind, NameKind::File);
                assert_eq!(len, MAX_NAME_LEN + 1);
            }
            other => panic!("expected NameTooLong, got {other:?}"),
        }
    }

    #[test]
    fn parse_measures_length_after_sanitizing() {
        // 30 allowed characters padded with spaces stays within the limit.
        let raw = format!("  {}  !!", "b".repeat(MAX_NAME_LEN));
        assert!(SanitizedName::parse(&raw, NameKind::Repository).is_ok());
    }

    #[test]
    fn parse_rejects_names_with_nothing_left() {
        assert!(matches!(
            SanitizedName::parse("!!! ---", NameKind::Repository),
            Err(CoreError::EmptyName { kind: NameKind::Repository })
        ));
        assert!(matches!(
            SanitizedName::parse("", NameKind::File),
            Err(CoreError::EmptyName { .. })
        ));
    }

    #[test]
    fn name_too_long_message_mentions_limit() {
        let err = CoreError::NameTooLong { kind: NameKind::Repository, len: 31 };
        let msg = err.to_string();
        assert!(msg.contains("repository"), "message must name the kind: {msg}");
        assert!(msg.contains("30 characters"), "message must state the limit: {msg}");
    }

    proptest::proptest! {
        #[test]
        fn proptest_sanitize_keeps_only_allowed_chars(raw in ".*") {
            let cleaned = sanitize(&raw);
            proptest::prop_assert!(cleaned.chars().all(is_allowed));
        }

        #[test]
        fn proptest_sanitize_equals_filtered_input(raw in ".*") {
            let expected: String = raw
                .chars()
                .filter(|c| c.is_ascii_alphanumeric() || *c == '_' || *c == '.')
                .collect();
            proptest::prop_assert_eq!(sanitize(&raw), expected);
        }

        #[test]
        fn proptest_sanitize_is_idempotent(raw in ".*") {
            let once = sanitize(&raw);
            proptest::prop_assert_eq!(sanitize(&once), once.clone());
        }

        #[test]
        fn proptest_parse_rejects_every_long_name(raw in "[A-Za-z0-9_.]{31,64}") {
            let is_too_long = matches!(
                SanitizedName::parse(&raw, NameKind::Repository),
                Err(CoreError::NameTooLong { .. })
            );
            proptest::prop_assert!(is_too_long);
        }
    }
}
