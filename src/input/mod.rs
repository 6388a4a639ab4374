//! Input classification
//!
//! Decides whether the raw user input names a page directly or should be
//! handed to the search provider.

/// The kind of input a run was started with
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputKind {
    /// Input is a URL to be fetched on its own
    DirectUrl(String),

    /// Input is a free-text query for the search provider
    SearchQuery(String),
}

impl InputKind {
    /// Returns the trimmed input text carried by either variant
    pub fn as_str(&self) -> &str {
        match self {
            Self::DirectUrl(url) => url,
            Self::SearchQuery(query) => query,
        }
    }

    /// Returns true for direct-URL input
    pub fn is_direct(&self) -> bool {
        matches!(self, Self::DirectUrl(_))
    }
}

/// Classifies raw input after trimming surrounding whitespace
///
/// The prefix check is case-sensitive and performs no further URL validation:
/// anything starting with `http://` or `https://` is a direct URL, everything
/// else is a search query.
///
/// # Example
///
/// ```
/// use scrapion::input::{classify, InputKind};
///
/// assert_eq!(
///     classify("  https://example.com "),
///     InputKind::DirectUrl("https://example.com".to_string())
/// );
/// assert_eq!(
///     classify("rust tutorial"),
///     InputKind::SearchQuery("rust tutorial".to_string())
/// );
/// ```
pub fn classify(raw: &str) -> InputKind {
    let trimmed = raw.trim();

    if trimmed.starts_with("http://") || trimmed.starts_with("https://") {
        InputKind::DirectUrl(trimmed.to_string())
    } else {
        InputKind::SearchQuery(trimmed.to_string())
    }
}
