//! URL processing for address bar input.
//!
//! This module contains the URL-related functionality:
//! - Permissive and strict decomposition into components
//! - URL vs. search classification
//! - Normalization and display-safe rewriting
//! - Protocol admission policy
//! - Query string helpers

pub mod classifier;
pub mod decomposer;
pub mod normalizer;
pub mod protocol;
pub mod utils;

// Re-export main functionality
pub use classifier::{classify, is_http_or_https, is_search_query, is_url};
pub use decomposer::{decompose, decompose_with, recompose, scheme_of};
pub use normalizer::{
    normalize, representative_snippet, strip_common_subdomains, strip_user_info,
    urls_match_except_trailing_slash,
};
pub use protocol::{
    is_internal_error_url, is_permitted_resource_protocol, is_supported_protocol,
    INTERNAL_ERROR_URL,
};
pub use utils::{decode_query_component, get_query_value, query_parameter};
