//! Web link detection
//!
//! A payload counts as a link only when it parses as an absolute `http(s)`
//! URL (after prefixing `http://` to schemeless host names) and also matches a
//! permissive host/path pattern. The pattern keeps things like `hello:world`
//! or single words out even though a URL parser would accept them.

use regex::Regex;
use std::sync::OnceLock;
use url::Url;

const URI_PATTERN: &str = r"(?i)^(http(s)?://.)?(www\.)?[-a-z0-9@:%._\+~#=]{2,256}\.[a-z]{2,6}\b([-a-z0-9@:%_\+.~#?&//=]*)$";

static URI_REGEX: OnceLock<Regex> = OnceLock::new();

fn uri_regex() -> &'static Regex {
    URI_REGEX.get_or_init(|| Regex::new(URI_PATTERN).expect("URI pattern is a valid regex"))
}

/// Check the host/path shape of a candidate link
pub fn matches_uri_pattern(text: &str) -> bool {
    uri_regex().is_match(text)
}

/// Check that the text is an absolute web URL, prefixing `http://` when it
/// carries no `http://` or `https://` scheme
pub fn parses_as_web_url(text: &str) -> bool {
    let parsed = if has_web_scheme(text) {
        Url::parse(text)
    } else {
        Url::parse(&format!("http://{text}"))
    };

    match parsed {
        Ok(url) => {
            matches!(url.scheme(), "http" | "https")
                && url.host_str().is_some_and(|h| !h.is_empty())
        }
        Err(_) => false,
    }
}

/// Full link test used by the classifier
pub fn is_web_uri(text: &str) -> bool {
    let text = text.trim();
    !text.is_empty() && parses_as_web_url(text) && matches_uri_pattern(text)
}

/// True when the text opens with `http://` or `https://` (any case)
pub(crate) fn has_web_scheme(text: &str) -> bool {
    ["http://", "https://"].iter().any(|scheme| {
        text.get(..scheme.len())
            .is_some_and(|prefix| prefix.eq_ignore_ascii_case(scheme))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_hosts_are_links() {
        assert!(is_web_uri("example.com"));
        assert!(is_web_uri("www.example.com/path?q=1&r=2"));
        assert!(is_web_uri("https://www.rust-lang.org/learn"));
        assert!(is_web_uri("HTTP://EXAMPLE.COM"));
    }

    #[test]
    fn test_non_links() {
        assert!(!is_web_uri(""));
        assert!(!is_web_uri("hello"));
        assert!(!is_web_uri("hello world.com"));
        assert!(!is_web_uri("4006381333931"));
        assert!(!is_web_uri("ftp://example.com/file.txt"));
    }

    #[test]
    fn test_scheme_check_is_case_insensitive() {
        assert!(has_web_scheme("HTTPS://x"));
        assert!(has_web_scheme("http://x"));
        assert!(!has_web_scheme("htt"));
        assert!(!has_web_scheme("žluť"));
    }

    #[test]
    fn test_hosts_starting_with_http_are_links() {
        assert!(!has_web_scheme("httpbin.org"));
        assert!(is_web_uri("httpbin.org"));
        assert!(is_web_uri("http.cat/404"));
        assert!(is_web_uri("HTTPBIN.ORG/get"));
    }
}
