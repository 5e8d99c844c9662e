//! Core data structures shared by the decomposer, normalizer and resolver.

use std::fmt;

/// How strictly text is checked before it is split into components.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ParseMode {
    /// Never fails. Unrecognised syntax ends up in the path.
    #[default]
    Permissive,
    /// Additionally requires the text to be an absolute URL.
    Strict,
}

/// URL components recognised by the decomposer.
///
/// `host` is `Some` whenever the text carried an authority (`//...`), even an
/// empty one, so that recomposition reproduces the input exactly.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DecomposedUri {
    /// Scheme without the trailing `:` (may be empty for input like `:foo`)
    pub scheme: Option<String>,
    /// Host as written, including IPv6 brackets
    pub host: Option<String>,
    /// Explicit port, only when written in canonical decimal form
    pub port: Option<u16>,
    /// Path, or the whole opaque part for URLs without authority
    pub path: String,
    /// Query string without the leading `?`
    pub query: Option<String>,
    /// Fragment without the leading `#`
    pub fragment: Option<String>,
    /// User-info without the trailing `@`
    pub user_info: Option<String>,
}

impl DecomposedUri {
    /// Check if a non-empty scheme is present.
    pub fn has_scheme(&self) -> bool {
        self.scheme.as_deref().is_some_and(|s| !s.is_empty())
    }

    /// Check if user-info is present (an empty `@` counts).
    pub fn has_user_info(&self) -> bool {
        self.user_info.is_some()
    }

    /// The host if present and non-empty.
    pub fn non_empty_host(&self) -> Option<&str> {
        self.host.as_deref().filter(|h| !h.is_empty())
    }

    /// Copy of these components with the user-info removed.
    pub fn without_user_info(&self) -> Self {
        Self {
            user_info: None,
            ..self.clone()
        }
    }

    /// Join the components back into a URL string.
    pub fn recompose(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for DecomposedUri {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(scheme) = &self.scheme {
            write!(f, "{scheme}:")?;
        }

        if let Some(host) = &self.host {
            f.write_str("//")?;
            if let Some(user_info) = &self.user_info {
                write!(f, "{user_info}@")?;
            }
            f.write_str(host)?;
            if let Some(port) = self.port {
                write!(f, ":{port}")?;
            }
        }

        f.write_str(&self.path)?;

        if let Some(query) = &self.query {
            write!(f, "?{query}")?;
        }

        if let Some(fragment) = &self.fragment {
            write!(f, "#{fragment}")?;
        }

        Ok(())
    }
}

/// Coarse classification of a line typed into the address bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputKind {
    /// Nothing but whitespace
    Empty,
    /// No spaces, and a `.` or `:` somewhere
    Url,
    /// Contains a space
    SearchQuery,
    /// A single bare token such as `localhost`; callers decide
    Ambiguous,
}

/// What the address bar should do with a line of input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Interpretation {
    /// Nothing to do
    Empty,
    /// Load the canonical URL
    Navigate { url: String },
    /// Load a search results page for the given terms
    Search { url: String, terms: String },
}

impl Interpretation {
    /// The URL to hand to the browsing session, if any.
    pub fn url(&self) -> Option<&str> {
        match self {
            Interpretation::Empty => None,
            Interpretation::Navigate { url } | Interpretation::Search { url, .. } => Some(url),
        }
    }

    /// Check if this is a search.
    pub fn is_search(&self) -> bool {
        matches!(self, Interpretation::Search { .. })
    }
}
