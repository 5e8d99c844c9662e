//! Error types for URL interpretation and search engine configuration.
//!
//! None of these errors reach callers of the address bar functions: those
//! absorb failures into their documented fallbacks. They surface from the
//! strict decomposer, from search term decoding, and from registry loading.

use thiserror::Error;

/// Errors that can occur while parsing URLs or loading search engines.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum OmnibarError {
    /// The text does not parse as an absolute URL.
    #[error("URL parsing error: {0}")]
    UrlParse(String),

    /// The text has no scheme where one is required.
    #[error("URL has no scheme")]
    MissingScheme,

    /// A `%` escape is not followed by two hex digits.
    #[error("Malformed percent-encoding")]
    InvalidPercentEncoding,

    /// Percent-decoded bytes are not valid UTF-8.
    #[error("Decoded text is not valid UTF-8")]
    InvalidUtf8,

    /// A search engine definition is unusable.
    #[error("Invalid search engine: {0}")]
    InvalidEngine(String),

    /// No search engine with the given name is registered.
    #[error("Unknown search engine: {0}")]
    UnknownEngine(String),

    /// The search engine configuration could not be deserialized.
    #[error("Invalid search engine configuration: {0}")]
    Config(String),

    /// The search engine configuration could not be read.
    #[error("Failed to read configuration: {0}")]
    Io(String),
}

impl From<url::ParseError> for OmnibarError {
    fn from(err: url::ParseError) -> Self {
        OmnibarError::UrlParse(err.to_string())
    }
}

impl From<serde_json::Error> for OmnibarError {
    fn from(err: serde_json::Error) -> Self {
        OmnibarError::Config(err.to_string())
    }
}

impl From<std::io::Error> for OmnibarError {
    fn from(err: std::io::Error) -> Self {
        OmnibarError::Io(err.to_string())
    }
}
