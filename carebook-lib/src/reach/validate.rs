//! Syntactic validation of emails and URLs.
//!
//! These run before any reachability check is attempted: an input that
//! fails here gets no cache entry and no network traffic.

use std::sync::LazyLock;

use regex::Regex;
use url::Url;

static EMAIL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is valid")
});

/// Returns `true` if the trimmed input looks like an email address.
///
/// The check is deliberately shallow (local part, `@`, domain with a
/// dot); whether the mailbox actually exists is what the reachability
/// check is for.
pub fn is_valid_email(input: &str) -> bool {
    EMAIL_PATTERN.is_match(input.trim())
}

/// Returns `true` if the input parses as a URL.
///
/// Bare domains are accepted: `https://` is prepended unless the
/// trimmed input already starts with `http`.
pub fn is_valid_url(input: &str) -> bool {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return false;
    }
    let candidate = if trimmed.starts_with("http") {
        trimmed.to_string()
    } else {
        format!("https://{trimmed}")
    };
    Url::parse(&candidate).is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_emails() {
        assert!(is_valid_email("user@example.com"));
        assert!(is_valid_email("  user@example.com  "));
        assert!(is_valid_email("first.last@clinic.example.org"));
    }

    #[test]
    fn test_invalid_emails() {
        assert!(!is_valid_email("not-an-email"));
        assert!(!is_valid_email("user@nodot"));
        assert!(!is_valid_email("user name@example.com"));
        assert!(!is_valid_email("user@@example.com"));
        assert!(!is_valid_email(""));
    }

    #[test]
    fn test_valid_urls() {
        // Bare domains get the protocol prepended.
        assert!(is_valid_url("example.com"));
        assert!(is_valid_url("https://example.com/path"));
        assert!(is_valid_url("http://example.com"));
    }

    #[test]
    fn test_invalid_urls() {
        assert!(!is_valid_url("not a url"));
        assert!(!is_valid_url(""));
        assert!(!is_valid_url("   "));
    }
}
