//! Recovering search terms from result page URLs, and turning input into
//! something the browsing session can load.
//!
//! Every function takes the registry snapshot explicitly so that one call
//! never sees two different engine lists.

use log::{debug, trace};

use crate::search::engine::SearchEngine;
use crate::search::registry::SearchEngineRegistry;
use crate::types::Interpretation;
use crate::url::classifier::{is_url, trim_input};
use crate::url::decomposer::decompose;
use crate::url::normalizer::{normalize, representative_snippet, strip_user_info};
use crate::url::utils::{decode_query_component, query_parameter};

/// The search terms behind a result page URL, or the URL itself.
///
/// # Examples
///
/// ```
/// use omnibar::{search_terms_or_url, SearchEngine, SearchEngineRegistry};
///
/// let engine = SearchEngine::new("example", "https://www.example.com/search?q={searchTerms}")?;
/// let registry = SearchEngineRegistry::new(vec![engine])?;
///
/// assert_eq!(search_terms_or_url("https://www.example.com/search?q=cats", &registry), "cats");
/// assert_eq!(search_terms_or_url("https://rust-lang.org/", &registry), "https://rust-lang.org/");
/// # Ok::<(), omnibar::OmnibarError>(())
/// ```
pub fn search_terms_or_url(url: &str, registry: &SearchEngineRegistry) -> String {
    is_default_search_url(url, registry)
        .and_then(|engine| search_terms_from_url(url, engine))
        .filter(|terms| !terms.is_empty())
        .unwrap_or_else(|| url.to_string())
}

/// The first engine, in registry order, whose name appears in the URL's
/// representative snippet.
pub fn is_default_search_url<'r>(
    url: &str,
    registry: &'r SearchEngineRegistry,
) -> Option<&'r SearchEngine> {
    if url.is_empty() {
        return None;
    }

    let snippet = representative_snippet(url).to_lowercase();
    let engine = registry
        .iter()
        .find(|engine| snippet.contains(&engine.name().to_lowercase()));

    if let Some(engine) = engine {
        trace!("Snippet {snippet} matches search engine {}", engine.name());
    }

    engine
}

/// Decoded search terms from a result page URL of `engine`.
///
/// Returns `None` when the engine has no search terms parameter, the URL does
/// not carry it, or its value is not valid percent-encoded UTF-8.
pub fn search_terms_from_url(url: &str, engine: &SearchEngine) -> Option<String> {
    let param = engine.search_terms_param()?;
    if !url.contains(param) {
        return None;
    }

    let uri = decompose(url);
    let raw = query_parameter(uri.query.as_deref()?, param)?;

    match decode_query_component(raw) {
        Ok(terms) => Some(terms),
        Err(err) => {
            debug!("Could not decode {} search terms: {err}", engine.name());
            None
        }
    }
}

/// Results page URL for the terms, using the registry's default engine.
pub fn create_search_url(terms: &str, registry: &SearchEngineRegistry) -> Option<String> {
    registry
        .default_engine()
        .map(|engine| engine.build_search_url(terms))
}

/// Decide what to load for a line of address bar input.
///
/// URL-shaped input is normalized and navigated to. Everything else, bare
/// single words included, is searched with the default engine; with no
/// default engine the input is normalized and navigated to instead.
///
/// # Examples
///
/// ```
/// use omnibar::{interpret, Interpretation, SearchEngineRegistry};
///
/// let registry = SearchEngineRegistry::builtin();
///
/// assert_eq!(
///     interpret("example.com", &registry),
///     Interpretation::Navigate { url: "http://example.com".to_string() }
/// );
/// assert_eq!(
///     interpret("cute cats", &registry),
///     Interpretation::Search {
///         url: "https://www.google.com/search?q=cute+cats".to_string(),
///         terms: "cute cats".to_string(),
///     }
/// );
/// ```
pub fn interpret(input: &str, registry: &SearchEngineRegistry) -> Interpretation {
    let trimmed = trim_input(input);
    if trimmed.is_empty() {
        return Interpretation::Empty;
    }

    if is_url(trimmed) {
        return Interpretation::Navigate {
            url: normalize(trimmed),
        };
    }

    match create_search_url(trimmed, registry) {
        Some(url) => Interpretation::Search {
            url,
            terms: trimmed.to_string(),
        },
        None => {
            debug!("No default search engine, navigating to search input");
            Interpretation::Navigate {
                url: normalize(trimmed),
            }
        }
    }
}

/// Text the address bar shows for a URL reported by the browsing session.
///
/// Search result pages show their search terms; anything else is shown
/// without user-info.
pub fn display_text(observed_url: &str, registry: &SearchEngineRegistry) -> String {
    is_default_search_url(observed_url, registry)
        .and_then(|engine| search_terms_from_url(observed_url, engine))
        .filter(|terms| !terms.is_empty())
        .unwrap_or_else(|| strip_user_info(observed_url))
}
