//! Deciding whether address bar input is a URL or a search.
//!
//! These are deliberately coarse heuristics. A single bare token such as
//! `localhost` is neither a URL nor a search query; [`classify`] reports it as
//! [`InputKind::Ambiguous`] and leaves the decision to the caller.

use crate::types::InputKind;

/// Trim spaces, Unicode whitespace and every ASCII control character from
/// both ends. `str::trim` alone would keep `\0` and other C0 controls.
pub(crate) fn trim_input(text: &str) -> &str {
    text.trim_matches(|c: char| c <= ' ' || c.is_whitespace())
}

/// Check if the input should be searched for rather than loaded.
///
/// Any space after trimming signals natural-language input.
///
/// # Examples
///
/// ```
/// use omnibar::is_search_query;
///
/// assert!(is_search_query("hello world"));
/// assert!(!is_search_query("  example.com  "));
/// ```
pub fn is_search_query(text: &str) -> bool {
    trim_input(text).contains(' ')
}

/// Check if the input looks like an address.
///
/// # Examples
///
/// ```
/// use omnibar::is_url;
///
/// assert!(is_url("example.com"));
/// assert!(is_url("localhost:8080"));
/// assert!(!is_url("hello world"));
/// assert!(!is_url("localhost"));
/// ```
pub fn is_url(text: &str) -> bool {
    let trimmed = trim_input(text);
    if trimmed.contains(' ') {
        return false;
    }

    trimmed.contains('.') || trimmed.contains(':')
}

/// Check if a URL starts with the lower-case `http:` or `https:` scheme.
pub fn is_http_or_https(text: &str) -> bool {
    if text.is_empty() {
        return false;
    }

    text.starts_with("http:") || text.starts_with("https:")
}

/// Classify input in one pass.
pub fn classify(text: &str) -> InputKind {
    if trim_input(text).is_empty() {
        InputKind::Empty
    } else if is_search_query(text) {
        InputKind::SearchQuery
    } else if is_url(text) {
        InputKind::Url
    } else {
        InputKind::Ambiguous
    }
}
