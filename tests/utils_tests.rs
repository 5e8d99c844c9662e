//! Integration tests for query string utilities.

use omnibar::{decode_query_component, get_query_value, query_parameter, OmnibarError};

#[test]
fn test_query_parameter_lookup() {
    let query = "hl=en&q=rust+lang&page=2";

    assert_eq!(query_parameter(query, "q"), Some("rust+lang"));
    assert_eq!(query_parameter(query, "page"), Some("2"));
    assert_eq!(query_parameter(query, "sort"), None);
}

#[test]
fn test_query_value_decoding() {
    let url = "https://search.example.com/results?q=caf%C3%A9+au+lait&page=2";

    let value = get_query_value(url, "q").unwrap();
    assert_eq!(value, Some("café au lait".to_string()));

    let page = get_query_value(url, "page").unwrap();
    assert_eq!(page, Some("2".to_string()));
}

#[test]
fn test_query_value_ignores_fragment() {
    let value = get_query_value("https://example.com/?q=cats#q=dogs", "q").unwrap();
    assert_eq!(value, Some("cats".to_string()));

    let none = get_query_value("https://example.com/#q=dogs", "q").unwrap();
    assert_eq!(none, None);
}

#[test]
fn test_decoding_errors() {
    assert_eq!(decode_query_component("50%"), Err(OmnibarError::InvalidPercentEncoding));
    assert_eq!(decode_query_component("%G0"), Err(OmnibarError::InvalidPercentEncoding));
    assert_eq!(decode_query_component("%C0%AF"), Err(OmnibarError::InvalidUtf8));
}
