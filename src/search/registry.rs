//! The ordered set of known search engines and its shared snapshot handle.
//!
//! Resolution functions borrow a `&SearchEngineRegistry` for the whole call.
//! Owners that refresh the engine list at runtime keep it in a
//! [`SharedRegistry`], take one [`SharedRegistry::snapshot`] per resolution and
//! swap in new lists with [`SharedRegistry::replace`].

use std::path::Path;
use std::sync::Arc;

use log::{info, warn};
use parking_lot::RwLock;
use serde::{Deserialize, Serialize};

use crate::error::OmnibarError;
use crate::search::engine::{EngineConfig, SearchEngine};

/// Serialized form of a [`SearchEngineRegistry`].
///
/// ```json
/// {
///   "default": "DuckDuckGo",
///   "engines": [
///     { "name": "DuckDuckGo", "search_url": "https://duckduckgo.com/?q={searchTerms}" }
///   ]
/// }
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegistryConfig {
    /// Name of the default engine; the first engine when absent or unknown
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default: Option<String>,
    /// Engines in priority order
    #[serde(default)]
    pub engines: Vec<EngineConfig>,
}

/// Known search engines in priority order, plus the default engine.
///
/// Order matters: when several engine names match a URL the first one wins.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchEngineRegistry {
    engines: Vec<SearchEngine>,
    default_index: Option<usize>,
}

impl SearchEngineRegistry {
    /// Create a registry whose default is the first engine.
    ///
    /// Fails if two engines share a name (ignoring case).
    pub fn new(engines: Vec<SearchEngine>) -> Result<Self, OmnibarError> {
        for (i, engine) in engines.iter().enumerate() {
            if engines[..i].iter().any(|other| other.has_name(engine.name())) {
                return Err(OmnibarError::InvalidEngine(format!(
                    "Duplicate engine name: {}",
                    engine.name()
                )));
            }
        }

        let default_index = if engines.is_empty() { None } else { Some(0) };
        Ok(Self {
            engines,
            default_index,
        })
    }

    /// Make the named engine the default.
    pub fn with_default(mut self, name: &str) -> Result<Self, OmnibarError> {
        let index = self
            .position(name)
            .ok_or_else(|| OmnibarError::UnknownEngine(name.to_string()))?;
        self.default_index = Some(index);
        Ok(self)
    }

    /// Build a registry from its serialized form.
    ///
    /// An unknown default name falls back to the first engine.
    pub fn from_config(config: RegistryConfig) -> Result<Self, OmnibarError> {
        let engines = config
            .engines
            .into_iter()
            .map(SearchEngine::try_from)
            .collect::<Result<Vec<_>, _>>()?;
        let registry = Self::new(engines)?;

        match config.default {
            Some(name) if registry.position(&name).is_some() => registry.with_default(&name),
            Some(name) => {
                warn!("Default search engine {name} is not registered, using the first engine");
                Ok(registry)
            }
            None => Ok(registry),
        }
    }

    /// Parse a registry from JSON.
    pub fn from_json_str(json: &str) -> Result<Self, OmnibarError> {
        let config: RegistryConfig = serde_json::from_str(json)?;
        Self::from_config(config)
    }

    /// Read a registry from a JSON file.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, OmnibarError> {
        let json = std::fs::read_to_string(path.as_ref())?;
        Self::from_json_str(&json)
    }

    /// The serialized form of this registry.
    pub fn to_config(&self) -> RegistryConfig {
        RegistryConfig {
            default: self.default_engine().map(|e| e.name().to_string()),
            engines: self.engines.iter().map(EngineConfig::from).collect(),
        }
    }

    /// A small set of well-known engines, Google first and default.
    pub fn builtin() -> Self {
        let engines = vec![
            builtin_engine("Google", "https://www.google.com/search?q={searchTerms}", "q"),
            builtin_engine("DuckDuckGo", "https://duckduckgo.com/?q={searchTerms}", "q"),
            builtin_engine("Bing", "https://www.bing.com/search?q={searchTerms}", "q"),
            builtin_engine(
                "Wikipedia",
                "https://en.wikipedia.org/wiki/Special:Search?search={searchTerms}",
                "search",
            ),
        ];

        Self {
            engines,
            default_index: Some(0),
        }
    }

    /// Engines in priority order.
    pub fn engines(&self) -> &[SearchEngine] {
        &self.engines
    }

    /// Iterate over engines in priority order.
    pub fn iter(&self) -> std::slice::Iter<'_, SearchEngine> {
        self.engines.iter()
    }

    pub fn len(&self) -> usize {
        self.engines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.engines.is_empty()
    }

    /// The engine used for new searches.
    pub fn default_engine(&self) -> Option<&SearchEngine> {
        self.default_index.and_then(|i| self.engines.get(i))
    }

    /// Look up an engine by name, ignoring case.
    pub fn get(&self, name: &str) -> Option<&SearchEngine> {
        self.position(name).map(|i| &self.engines[i])
    }

    fn position(&self, name: &str) -> Option<usize> {
        self.engines.iter().position(|e| e.has_name(name))
    }
}

impl<'a> IntoIterator for &'a SearchEngineRegistry {
    type Item = &'a SearchEngine;
    type IntoIter = std::slice::Iter<'a, SearchEngine>;

    fn into_iter(self) -> Self::IntoIter {
        self.engines.iter()
    }
}

fn builtin_engine(name: &str, template: &str, param: &str) -> SearchEngine {
    SearchEngine {
        name: name.to_string(),
        search_template: template.to_string(),
        search_terms_param: Some(param.to_string()),
    }
}

/// A registry that can be replaced while other threads resolve against it.
///
/// Cloning the handle shares the same underlying registry.
#[derive(Debug, Clone, Default)]
pub struct SharedRegistry {
    current: Arc<RwLock<Arc<SearchEngineRegistry>>>,
}

impl SharedRegistry {
    pub fn new(registry: SearchEngineRegistry) -> Self {
        Self {
            current: Arc::new(RwLock::new(Arc::new(registry))),
        }
    }

    /// The current registry. Later replacements do not affect it.
    pub fn snapshot(&self) -> Arc<SearchEngineRegistry> {
        Arc::clone(&self.current.read())
    }

    /// Swap in a new registry, returning the previous one.
    pub fn replace(&self, registry: SearchEngineRegistry) -> Arc<SearchEngineRegistry> {
        let count = registry.len();
        let previous = std::mem::replace(&mut *self.current.write(), Arc::new(registry));
        info!("Replaced search engine registry ({} -> {} engines)", previous.len(), count);
        previous
    }
}

impl From<SearchEngineRegistry> for SharedRegistry {
    fn from(registry: SearchEngineRegistry) -> Self {
        Self::new(registry)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn engine(name: &str) -> SearchEngine {
        SearchEngine::new(name, format!("https://{}.test/?q={{searchTerms}}", name.to_lowercase())).unwrap()
    }

    #[test]
    fn test_registry_default_is_first() {
        let registry = SearchEngineRegistry::new(vec![engine("Alpha"), engine("Beta")]).unwrap();
        assert_eq!(registry.len(), 2);
        assert_eq!(registry.default_engine().map(SearchEngine::name), Some("Alpha"));
    }

    #[test]
    fn test_registry_with_default() {
        let registry = SearchEngineRegistry::new(vec![engine("Alpha"), engine("Beta")])
            .unwrap()
            .with_default("beta")
            .unwrap();
        assert_eq!(registry.default_engine().map(SearchEngine::name), Some("Beta"));

        let unknown = SearchEngineRegistry::new(vec![engine("Alpha")]).unwrap().with_default("Gamma");
        assert_eq!(unknown.unwrap_err(), OmnibarError::UnknownEngine("Gamma".to_string()));
    }

    #[test]
    fn test_registry_rejects_duplicates() {
        let result = SearchEngineRegistry::new(vec![engine("Alpha"), engine("ALPHA")]);
        assert!(matches!(result, Err(OmnibarError::InvalidEngine(_))));
    }

    #[test]
    fn test_empty_registry() {
        let registry = SearchEngineRegistry::default();
        assert!(registry.is_empty());
        assert_eq!(registry.default_engine(), None);
        assert_eq!(registry.get("anything"), None);
    }

    #[test]
    fn test_registry_from_json() {
        let json = r#"{
            "default": "Beta",
            "engines": [
                { "name": "Alpha", "search_url": "https://alpha.test/?q={searchTerms}" },
                { "name": "Beta", "search_url": "https://beta.test/find?text={searchTerms}" },
                { "name": "Gamma", "search_url": "https://gamma.test/{searchTerms}", "search_terms_param": "g" }
            ]
        }"#;

        let registry = SearchEngineRegistry::from_json_str(json).unwrap();
        let names: Vec<&str> = registry.iter().map(SearchEngine::name).collect();
        assert_eq!(names, vec!["Alpha", "Beta", "Gamma"]);
        assert_eq!(registry.default_engine().map(SearchEngine::name), Some("Beta"));
        assert_eq!(registry.get("beta").and_then(SearchEngine::search_terms_param), Some("text"));
        assert_eq!(registry.get("gamma").and_then(SearchEngine::search_terms_param), Some("g"));
    }

    #[test]
    fn test_registry_unknown_default_falls_back() {
        let json = r#"{ "default": "Nope", "engines": [ { "name": "Alpha", "search_url": "https://alpha.test/?q={searchTerms}" } ] }"#;
        let registry = SearchEngineRegistry::from_json_str(json).unwrap();
        assert_eq!(registry.default_engine().map(SearchEngine::name), Some("Alpha"));
    }

    #[test]
    fn test_registry_invalid_json() {
        assert!(matches!(
            SearchEngineRegistry::from_json_str("{ not json"),
            Err(OmnibarError::Config(_))
        ));
        assert!(matches!(
            SearchEngineRegistry::from_json_str(r#"{ "engines": [ { "name": "A", "search_url": "https://a.test/" } ] }"#),
            Err(OmnibarError::InvalidEngine(_))
        ));
    }

    #[test]
    fn test_registry_config_round_trip() {
        let registry = SearchEngineRegistry::builtin();
        let json = serde_json::to_string(&registry.to_config()).unwrap();
        assert_eq!(SearchEngineRegistry::from_json_str(&json).unwrap(), registry);
    }

    #[test]
    fn test_builtin_registry() {
        let registry = SearchEngineRegistry::builtin();
        assert_eq!(registry.default_engine().map(SearchEngine::name), Some("Google"));
        for engine in &registry {
            assert!(engine.search_template().contains("{searchTerms}"));
            assert!(engine.search_terms_param().is_some());
        }
    }

    #[test]
    fn test_shared_registry_snapshot_survives_replace() {
        let shared = SharedRegistry::new(SearchEngineRegistry::new(vec![engine("Alpha")]).unwrap());
        let before = shared.snapshot();

        let previous = shared.replace(SearchEngineRegistry::new(vec![engine("Beta"), engine("Gamma")]).unwrap());

        assert!(Arc::ptr_eq(&before, &previous));
        assert_eq!(before.default_engine().map(SearchEngine::name), Some("Alpha"));
        assert_eq!(shared.snapshot().len(), 2);
    }

    #[test]
    fn test_shared_registry_clones_share_state() {
        let shared = SharedRegistry::default();
        let other = shared.clone();
        other.replace(SearchEngineRegistry::builtin());
        assert_eq!(shared.snapshot().len(), 4);
    }
}
