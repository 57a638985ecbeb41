use std::sync::OnceLock;

const DEFAULT_SEARCH_URL: &str = "https://www.google.cz/search?q=";
const DEFAULT_LINK_SCHEME: &str = "http://";

fn parse_env_string(name: &str, default: &str) -> String {
    std::env::var(name)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
        .unwrap_or_else(|| default.to_string())
}

static SEARCH_URL: OnceLock<String> = OnceLock::new();

/// Base URL a plain-text payload is appended to when offered as a search
pub fn search_url() -> &'static str {
    SEARCH_URL.get_or_init(|| parse_env_string("QR_SEARCH_URL", DEFAULT_SEARCH_URL))
}

static LINK_SCHEME: OnceLock<String> = OnceLock::new();

/// Scheme prefixed to links without an `http://` or `https://` scheme
pub fn link_scheme() -> &'static str {
    LINK_SCHEME.get_or_init(|| parse_env_string("QR_LINK_SCHEME", DEFAULT_LINK_SCHEME))
}
