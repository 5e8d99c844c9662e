//! Splitting free-form text into URL components.
//!
//! The permissive decomposer follows the generic `scheme:[//authority]path[?query][#fragment]`
//! layout without validating any component, so it accepts anything a user can
//! type and never loses characters: recomposing its output reproduces the
//! input exactly. Strict mode runs the same split but first requires the text
//! to parse as an absolute URL with the `url` crate, and requires both parsers
//! to agree on the host and port.

use url::Url;

use crate::error::OmnibarError;
use crate::types::{DecomposedUri, ParseMode};

/// Split text into URL components. Never fails.
///
/// # Examples
///
/// ```
/// use omnibar::decompose;
///
/// let uri = decompose("https://user@example.com:8080/a?b=c#d");
/// assert_eq!(uri.scheme.as_deref(), Some("https"));
/// assert_eq!(uri.user_info.as_deref(), Some("user"));
/// assert_eq!(uri.host.as_deref(), Some("example.com"));
/// assert_eq!(uri.port, Some(8080));
/// assert_eq!(uri.path, "/a");
///
/// let bare = decompose("example.com");
/// assert_eq!(bare.scheme, None);
/// assert_eq!(bare.path, "example.com");
/// ```
pub fn decompose(text: &str) -> DecomposedUri {
    let (rest, fragment) = match text.split_once('#') {
        Some((rest, fragment)) => (rest, Some(fragment.to_string())),
        None => (text, None),
    };

    let (scheme, rest) = match split_scheme(rest) {
        Some((scheme, rest)) => (Some(scheme.to_string()), rest),
        None => (None, rest),
    };

    let (hier, query) = match rest.split_once('?') {
        Some((hier, query)) => (hier, Some(query.to_string())),
        None => (rest, None),
    };

    let mut uri = DecomposedUri {
        scheme,
        query,
        fragment,
        ..Default::default()
    };

    match hier.strip_prefix("//") {
        Some(after_slashes) => {
            let end = after_slashes.find('/').unwrap_or(after_slashes.len());
            let (authority, path) = after_slashes.split_at(end);
            let (user_info, host, port) = split_authority(authority);
            uri.user_info = user_info.map(str::to_string);
            uri.host = Some(host.to_string());
            uri.port = port;
            uri.path = path.to_string();
        }
        None => uri.path = hier.to_string(),
    }

    uri
}

/// Split text into URL components using the given mode.
///
/// Permissive mode always succeeds. Strict mode fails with
/// [`OmnibarError::MissingScheme`] for relative input and
/// [`OmnibarError::UrlParse`] when the text is otherwise not an absolute URL.
/// Text the `url` crate would rewrite before splitting (backslashes, tabs,
/// line breaks, surrounding control characters or spaces) is rejected, as is
/// text whose split names a different host or port than the parsed URL.
pub fn decompose_with(text: &str, mode: ParseMode) -> Result<DecomposedUri, OmnibarError> {
    let uri = decompose(text);

    if mode == ParseMode::Strict {
        if !uri.has_scheme() {
            return Err(OmnibarError::MissingScheme);
        }
        if has_rewritten_chars(text) {
            return Err(OmnibarError::UrlParse(
                "URL contains characters the parser rewrites".to_string(),
            ));
        }

        let parsed = Url::parse(text)?;
        let split = Url::parse(&uri.without_user_info().recompose())?;
        if host_and_port(&parsed) != host_and_port(&split) {
            return Err(OmnibarError::UrlParse(format!(
                "authority splits differently from parsed host {:?}",
                parsed.host_str().unwrap_or_default()
            )));
        }
    }

    Ok(uri)
}

/// Join decomposed components back into a URL string.
pub fn recompose(uri: &DecomposedUri) -> String {
    uri.recompose()
}

/// The scheme of a URL as the permissive decomposer sees it.
pub fn scheme_of(url: &str) -> Option<String> {
    decompose(url).scheme
}

/// Scheme is everything before the first `:`, unless a `/` or `?` comes first.
fn split_scheme(text: &str) -> Option<(&str, &str)> {
    let colon = text.find(':')?;
    let scheme = &text[..colon];
    if scheme.contains(['/', '?']) {
        return None;
    }
    Some((scheme, &text[colon + 1..]))
}

/// Characters the WHATWG parser drops or treats as `/`, which the split keeps.
fn has_rewritten_chars(text: &str) -> bool {
    text.contains(['\\', '\t', '\n', '\r'])
        || text.starts_with(|c: char| c <= ' ')
        || text.ends_with(|c: char| c <= ' ')
}

fn host_and_port(url: &Url) -> (Option<&str>, Option<u16>) {
    (url.host_str(), url.port_or_known_default())
}

/// Split `user@host:port`. A port only counts when it round-trips through `u16`.
fn split_authority(authority: &str) -> (Option<&str>, &str, Option<u16>) {
    let (user_info, host_port) = match authority.rsplit_once('@') {
        Some((user_info, host_port)) => (Some(user_info), host_port),
        None => (None, authority),
    };

    // Colons inside IPv6 brackets never start a port
    let search_from = host_port.rfind(']').unwrap_or(0);
    if let Some(colon) = host_port[search_from..].rfind(':').map(|i| i + search_from) {
        let digits = &host_port[colon + 1..];
        if let Ok(port) = digits.parse::<u16>() {
            if port.to_string() == digits {
                return (user_info, &host_port[..colon], Some(port));
            }
        }
    }

    (user_info, host_port, None)
}
