//! The invoking identity.
//!
//! [`Caller`] is an immutable snapshot built once per invocation from the
//! platform-supplied [`CallContext`]. It is owned by that invocation alone
//! and dropped when the invocation completes.

use crate::message::FALLBACK_LANGUAGE;

/// Identity information resolved by the hosting platform.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthInfo {
    /// Opaque identity reference, safe to log. Never a secret or credential.
    pub token: String,
    /// Whether the platform marked this identity as anonymous.
    pub anonymous: bool,
}

/// The opaque invocation context the hosting platform hands to an endpoint.
#[derive(Debug, Clone, Default)]
pub struct CallContext {
    /// Resolved identity, if the caller is authenticated.
    pub auth: Option<AuthInfo>,
}

impl CallContext {
    /// A context with no resolved identity.
    pub fn unauthenticated() -> Self {
        Self { auth: None }
    }

    /// A context for a fully authenticated identity.
    pub fn authed(token: impl Into<String>) -> Self {
        Self {
            auth: Some(AuthInfo {
                token: token.into(),
                anonymous: false,
            }),
        }
    }

    /// A context for an anonymous identity.
    pub fn anonymous(token: impl Into<String>) -> Self {
        Self {
            auth: Some(AuthInfo {
                token: token.into(),
                anonymous: true,
            }),
        }
    }
}

/// A per-invocation snapshot of the invoking identity and session.
///
/// Construction never fails: an absent identity simply yields an
/// unauthenticated caller.
#[derive(Debug, Clone)]
pub struct Caller {
    authed: bool,
    anonymous: bool,
    token: Option<String>,
    client_version: String,
    language: String,
}

impl Caller {
    /// Build a caller from the invocation context, the client's declared
    /// version, and its declared language (falling back to
    /// [`FALLBACK_LANGUAGE`] when absent).
    pub fn from_context(
        context: &CallContext,
        client_version: impl Into<String>,
        language: Option<&str>,
    ) -> Self {
        let (authed, anonymous, token) = match &context.auth {
            Some(auth) => (true, auth.anonymous, Some(auth.token.clone())),
            None => (false, false, None),
        };
        Self {
            authed,
            anonymous,
            token,
            client_version: client_version.into(),
            language: language.unwrap_or(FALLBACK_LANGUAGE).to_string(),
        }
    }

    /// True iff the invocation context carried a resolved identity.
    pub const fn is_authed(&self) -> bool {
        self.authed
    }

    /// True iff an identity exists and the platform marked it anonymous.
    pub const fn is_anonymous(&self) -> bool {
        self.anonymous
    }

    /// The opaque identity token, if authenticated. Used for logging only.
    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    /// The version the client declared. Useful to tell outdated clients to
    /// update.
    pub fn client_version(&self) -> &str {
        &self.client_version
    }

    /// The resolved display language for this caller.
    pub fn language(&self) -> &str {
        &self.language
    }
}
