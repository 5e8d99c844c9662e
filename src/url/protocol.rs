//! Which schemes may be loaded.
//!
//! Matching is by prefix, so `httpfoo` is admitted like `http`. Tightening
//! this would change which resources a session is allowed to load.

/// The body-less data URL the engine uses for its own error pages.
pub const INTERNAL_ERROR_URL: &str = "data:text/html;charset=utf-8;base64,";

const PERMITTED_RESOURCE_PREFIXES: [&str; 4] = ["http", "https", "file", "data"];
const ERROR_PAGE_PREFIX: &str = "error";

/// Check if resources with this scheme may be loaded.
///
/// # Examples
///
/// ```
/// use omnibar::is_permitted_resource_protocol;
///
/// assert!(is_permitted_resource_protocol("https"));
/// assert!(is_permitted_resource_protocol(Some("data")));
/// assert!(!is_permitted_resource_protocol("javascript"));
/// assert!(!is_permitted_resource_protocol(None));
/// ```
pub fn is_permitted_resource_protocol<'a>(scheme: impl Into<Option<&'a str>>) -> bool {
    scheme
        .into()
        .is_some_and(|scheme| PERMITTED_RESOURCE_PREFIXES.iter().any(|p| scheme.starts_with(p)))
}

/// Check if the browser handles this scheme itself, error pages included.
pub fn is_supported_protocol<'a>(scheme: impl Into<Option<&'a str>>) -> bool {
    scheme.into().is_some_and(|scheme| {
        is_permitted_resource_protocol(scheme) || scheme.starts_with(ERROR_PAGE_PREFIX)
    })
}

/// Check if the URL is the engine's internal error page.
pub fn is_internal_error_url(url: &str) -> bool {
    url == INTERNAL_ERROR_URL
}
