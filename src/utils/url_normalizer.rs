//! URL normalization for existence checks and offline cleanup.
//!
//! Both the request path and the `admin urls normalize` command share one
//! prefix rule: only a leading `http://` or `https://` scheme is removed, and
//! a `www.` subdomain is always kept.
//!
//! Normalized values are never used as storage keys by the live service.

use regex::Regex;
use std::sync::LazyLock;

/// Leading scheme removed by every normalization.
static SCHEME_REGEX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^https?://").unwrap());

/// Characters that end the hostname part of a URL: path, port, query, fragment.
static HOST_END_REGEX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[/:?#]").unwrap());

/// Reduces a URL string to its bare hostname.
///
/// # Normalization Rules
///
/// 1. **Scheme**: a leading `http://` or `https://` is removed
/// 2. **Tail**: everything from the first `/`, `:`, `?` or `#` onwards is removed
/// 3. **Subdomain**: `www.` is preserved
///
/// Without a scheme, a delimiter in the very first position is not treated as
/// the end of a hostname, so `/path` passes through unchanged. Malformed
/// input never fails; it simply yields whatever survives the rules above.
///
/// # Examples
///
/// ```
/// use shorturl::utils::url_normalizer::normalize_hostname;
///
/// assert_eq!(normalize_hostname("https://www.example.org/"), "www.example.org");
/// assert_eq!(normalize_hostname("http://example.org:8080/a?b#c"), "example.org");
/// assert_eq!(normalize_hostname("example.org"), "example.org");
/// ```
pub fn normalize_hostname(url: &str) -> String {
    let (rest, search_from) = match SCHEME_REGEX.find(url) {
        Some(scheme) => (&url[scheme.end()..], 0),
        None => (url, url.chars().next().map_or(0, char::len_utf8)),
    };

    let end = HOST_END_REGEX
        .find_at(rest, search_from)
        .map_or(rest.len(), |m| m.start());

    rest[..end].to_string()
}

/// Removes a leading `http://` or `https://` from a stored URL.
///
/// Returns `None` when there is no scheme to remove, or when nothing would be
/// left after removing it.
///
/// # Examples
///
/// ```
/// use shorturl::utils::url_normalizer::strip_scheme;
///
/// assert_eq!(strip_scheme("https://www.example.org/a"), Some("www.example.org/a"));
/// assert_eq!(strip_scheme("www.example.org/a"), None);
/// assert_eq!(strip_scheme("https://"), None);
/// ```
pub fn strip_scheme(url: &str) -> Option<&str> {
    let scheme = SCHEME_REGEX.find(url)?;
    let rest = &url[scheme.end()..];

    (!rest.is_empty()).then_some(rest)
}
