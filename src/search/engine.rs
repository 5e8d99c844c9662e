//! Search engine definitions.

use serde::{Deserialize, Serialize};
use url::form_urlencoded;

use crate::error::OmnibarError;
use crate::url::decomposer::decompose;

/// Placeholder replaced by the encoded search terms in a search URL template.
pub const SEARCH_TERMS_PLACEHOLDER: &str = "{searchTerms}";

/// A search engine the address bar can build result URLs for and recognise
/// result URLs from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchEngine {
    pub(crate) name: String,
    pub(crate) search_template: String,
    pub(crate) search_terms_param: Option<String>,
}

impl SearchEngine {
    /// Create an engine from a name and a search URL template.
    ///
    /// The template must contain [`SEARCH_TERMS_PLACEHOLDER`]. The search terms
    /// parameter is taken from the template's query parameter whose value is
    /// the placeholder, if there is one.
    ///
    /// # Examples
    ///
    /// ```
    /// use omnibar::SearchEngine;
    ///
    /// let engine = SearchEngine::new("Example", "https://www.example.com/search?q={searchTerms}")?;
    /// assert_eq!(engine.search_terms_param(), Some("q"));
    /// assert_eq!(engine.build_search_url("cute cats"), "https://www.example.com/search?q=cute+cats");
    /// # Ok::<(), omnibar::OmnibarError>(())
    /// ```
    pub fn new(name: impl Into<String>, search_template: impl Into<String>) -> Result<Self, OmnibarError> {
        let name = name.into();
        let search_template = search_template.into();

        if name.trim().is_empty() {
            return Err(OmnibarError::InvalidEngine("Engine name is empty".to_string()));
        }

        if !search_template.contains(SEARCH_TERMS_PLACEHOLDER) {
            return Err(OmnibarError::InvalidEngine(format!(
                "Search URL for {name} has no {SEARCH_TERMS_PLACEHOLDER} placeholder"
            )));
        }

        let search_terms_param = derive_search_terms_param(&search_template);

        Ok(Self {
            name,
            search_template,
            search_terms_param,
        })
    }

    /// Override the query parameter that carries search terms on result pages.
    pub fn with_search_terms_param(mut self, param: Option<String>) -> Self {
        self.search_terms_param = param.filter(|p| !p.is_empty());
        self
    }

    /// Display name, also used to recognise the engine's hosts.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Query parameter carrying search terms, if known.
    pub fn search_terms_param(&self) -> Option<&str> {
        self.search_terms_param.as_deref()
    }

    /// The search URL template.
    pub fn search_template(&self) -> &str {
        &self.search_template
    }

    /// Check if this engine has the given name, ignoring case.
    pub fn has_name(&self, name: &str) -> bool {
        self.name.to_lowercase() == name.to_lowercase()
    }

    /// Build the results page URL for the given search terms.
    ///
    /// Terms are form-encoded, so spaces become `+`.
    pub fn build_search_url(&self, terms: &str) -> String {
        let encoded: String = form_urlencoded::byte_serialize(terms.trim().as_bytes()).collect();
        self.search_template.replace(SEARCH_TERMS_PLACEHOLDER, &encoded)
    }
}

/// Serialized form of a [`SearchEngine`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Display name
    pub name: String,
    /// Search URL template containing `{searchTerms}`
    pub search_url: String,
    /// Query parameter carrying search terms; derived from `search_url` when absent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub search_terms_param: Option<String>,
}

impl TryFrom<EngineConfig> for SearchEngine {
    type Error = OmnibarError;

    fn try_from(config: EngineConfig) -> Result<Self, Self::Error> {
        let engine = SearchEngine::new(config.name, config.search_url)?;
        Ok(match config.search_terms_param {
            Some(param) => engine.with_search_terms_param(Some(param)),
            None => engine,
        })
    }
}

impl From<&SearchEngine> for EngineConfig {
    fn from(engine: &SearchEngine) -> Self {
        EngineConfig {
            name: engine.name.clone(),
            search_url: engine.search_template.clone(),
            search_terms_param: engine.search_terms_param.clone(),
        }
    }
}

/// Key of the template query parameter whose value is the placeholder.
fn derive_search_terms_param(template: &str) -> Option<String> {
    let query = decompose(template).query?;
    query.split('&').find_map(|pair| {
        let (key, value) = pair.split_once('=')?;
        (value == SEARCH_TERMS_PLACEHOLDER && !key.is_empty()).then(|| key.to_string())
    })
}
