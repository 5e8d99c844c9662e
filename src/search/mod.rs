//! Search engine awareness.
//!
//! This module contains:
//! - Search engine definitions and their configuration form
//! - The engine registry and its swappable snapshot handle
//! - Search term recovery and input interpretation

pub mod engine;
pub mod registry;
pub mod resolver;

// Re-export main functionality
pub use engine::{EngineConfig, SearchEngine, SEARCH_TERMS_PLACEHOLDER};
pub use registry::{RegistryConfig, SearchEngineRegistry, SharedRegistry};
pub use resolver::{
    create_search_url, display_text, interpret, is_default_search_url, search_terms_from_url,
    search_terms_or_url,
};
