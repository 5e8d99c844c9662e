//! Query string helpers used for search term recovery.
//!
//! These work on raw query strings as produced by the permissive decomposer,
//! not on `url::Url`, so that input the `url` crate would rewrite is read as
//! the user sees it.

use percent_encoding::percent_decode_str;

use crate::error::OmnibarError;
use crate::url::decomposer::decompose;

/// Raw (still encoded) value of the first query parameter named `name`.
///
/// Keys are compared both as written and percent-decoded. A key without `=`
/// has an empty value.
///
/// # Examples
///
/// ```
/// use omnibar::query_parameter;
///
/// assert_eq!(query_parameter("q=rust+lang&page=2", "q"), Some("rust+lang"));
/// assert_eq!(query_parameter("flag&page=2", "flag"), Some(""));
/// assert_eq!(query_parameter("page=2", "q"), None);
/// ```
pub fn query_parameter<'a>(query: &'a str, name: &str) -> Option<&'a str> {
    query.split('&').find_map(|pair| {
        let (key, value) = pair.split_once('=').unwrap_or((pair, ""));
        let matches = key == name || decode_query_component(key).is_ok_and(|k| k == name);
        matches.then_some(value)
    })
}

/// Decode a query component: `+` becomes a space, `%XX` escapes become bytes,
/// and the result must be UTF-8.
///
/// # Examples
///
/// ```
/// use omnibar::decode_query_component;
///
/// assert_eq!(decode_query_component("caf%C3%A9+au+lait").unwrap(), "café au lait");
/// assert!(decode_query_component("100%").is_err());
/// assert!(decode_query_component("%FF").is_err());
/// ```
pub fn decode_query_component(raw: &str) -> Result<String, OmnibarError> {
    check_percent_escapes(raw)?;

    let spaced = raw.replace('+', " ");
    percent_decode_str(&spaced)
        .decode_utf8()
        .map(|decoded| decoded.into_owned())
        .map_err(|_| OmnibarError::InvalidUtf8)
}

/// Get a decoded query parameter value from a URL.
///
/// Returns `Ok(None)` when the URL has no query or no such parameter.
pub fn get_query_value(url: &str, key: &str) -> Result<Option<String>, OmnibarError> {
    let uri = decompose(url);
    let Some(query) = uri.query.as_deref() else {
        return Ok(None);
    };

    query_parameter(query, key)
        .map(decode_query_component)
        .transpose()
}

/// Every `%` must start a two hex digit escape.
fn check_percent_escapes(raw: &str) -> Result<(), OmnibarError> {
    let bytes = raw.as_bytes();
    let mut i = 0;
    while i < bytes.len() {
        if bytes[i] == b'%' {
            let escape = bytes.get(i + 1..i + 3).ok_or(OmnibarError::InvalidPercentEncoding)?;
            if !escape.iter().all(u8::is_ascii_hexdigit) {
                return Err(OmnibarError::InvalidPercentEncoding);
            }
            i += 3;
        } else {
            i += 1;
        }
    }

    Ok(())
}
