//! Localizable error messages.
//!
//! A denial's message can be declared either as a plain string or as a map
//! from language code to string. Resolution happens once, at normalization
//! time, against the caller's resolved display language.

use std::collections::HashMap;

/// The language used when the caller's language is absent from a
/// per-language message, and the default for callers that declare none.
pub const FALLBACK_LANGUAGE: &str = "en";

/// Generic text used when neither the caller's language nor the fallback
/// language is present in a per-language message.
pub const UNKNOWN_ERROR_TEXT: &str = "Unknown error.";

/// A message that may exist in one or several languages.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MessageSpec {
    /// A single string, used verbatim for every caller.
    Plain(String),
    /// A map from language code to message text.
    PerLanguage(HashMap<String, String>),
}

impl MessageSpec {
    /// Create a plain, language-independent message.
    pub fn plain(text: impl Into<String>) -> Self {
        Self::Plain(text.into())
    }

    /// Create a per-language message from `(language, text)` pairs.
    pub fn per_language<K, V>(entries: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        Self::PerLanguage(
            entries
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }

    /// Resolve this message for the given language.
    ///
    /// Plain messages are returned verbatim. Per-language messages look up
    /// the given language, then [`FALLBACK_LANGUAGE`], then fall back to
    /// [`UNKNOWN_ERROR_TEXT`].
    pub fn resolve(&self, language: &str) -> String {
        match self {
            Self::Plain(text) => text.clone(),
            Self::PerLanguage(map) => map
                .get(language)
                .or_else(|| map.get(FALLBACK_LANGUAGE))
                .cloned()
                .unwrap_or_else(|| UNKNOWN_ERROR_TEXT.to_string()),
        }
    }
}

impl From<&str> for MessageSpec {
    fn from(text: &str) -> Self {
        Self::Plain(text.to_string())
    }
}

impl From<String> for MessageSpec {
    fn from(text: String) -> Self {
        Self::Plain(text)
    }
}
