//! The raw invocation payload.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// What the hosting platform hands to an endpoint alongside the
/// [`CallContext`].
///
/// `client_version` lets endpoints tell outdated clients to update; `lang`
/// is the caller's declared display language, resolved to the fallback
/// language when absent.
///
/// [`CallContext`]: crate::CallContext
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CallRequest {
    /// The raw, not-yet-validated payload.
    pub data: Value,
    /// The version the client declared.
    #[serde(default)]
    pub client_version: String,
    /// The caller's declared display language, if any.
    #[serde(default)]
    pub lang: Option<String>,
}

impl CallRequest {
    /// Create a request with only a payload.
    pub fn new(data: Value) -> Self {
        Self {
            data,
            client_version: String::new(),
            lang: None,
        }
    }

    /// Set the declared client version.
    #[must_use]
    pub fn with_client_version(mut self, version: impl Into<String>) -> Self {
        self.client_version = version.into();
        self
    }

    /// Set the declared display language.
    #[must_use]
    pub fn with_lang(mut self, lang: impl Into<String>) -> Self {
        self.lang = Some(lang.into());
        self
    }
}
