//! Error types for Gatecall.
//!
//! This module provides a structured error hierarchy using `thiserror`:
//!
//! - [`ErrorKind`] - Fixed set of RPC error categories
//! - [`Reject`] - An explicit denial carrying a localizable message
//! - [`CallFailure`] - What an invocation can fail with internally
//! - [`CallError`] - The normalized error shape surfaced to clients

use crate::message::MessageSpec;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A boxed error type for dynamic error handling.
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// The fixed set of error categories an endpoint can surface.
///
/// Mirrors the standard RPC error categories of the hosting platform, so a
/// denial raised from a step or handler maps one-to-one onto what the client
/// SDK already knows how to interpret.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ErrorKind {
    /// The invocation was cancelled by the caller.
    Cancelled,
    /// An error of unknown origin.
    Unknown,
    /// The payload failed schema validation.
    InvalidArgument,
    /// The invocation exceeded its deadline.
    DeadlineExceeded,
    /// A referenced entity does not exist.
    NotFound,
    /// An entity the invocation tried to create already exists.
    AlreadyExists,
    /// The caller is authenticated but not allowed to do this.
    PermissionDenied,
    /// A quota or rate limit was exhausted.
    ResourceExhausted,
    /// The system is not in a state required for the operation.
    FailedPrecondition,
    /// The operation was aborted, typically due to a concurrency conflict.
    Aborted,
    /// The operation was attempted past a valid range.
    OutOfRange,
    /// The operation is not implemented.
    Unimplemented,
    /// An internal fault; the generic kind for unexpected errors.
    Internal,
    /// The service is temporarily unavailable.
    Unavailable,
    /// Unrecoverable data loss or corruption.
    DataLoss,
    /// The caller is not authenticated, or fails an authentication policy.
    Unauthenticated,
}

impl ErrorKind {
    /// The kebab-case wire name of this kind.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Cancelled => "cancelled",
            Self::Unknown => "unknown",
            Self::InvalidArgument => "invalid-argument",
            Self::DeadlineExceeded => "deadline-exceeded",
            Self::NotFound => "not-found",
            Self::AlreadyExists => "already-exists",
            Self::PermissionDenied => "permission-denied",
            Self::ResourceExhausted => "resource-exhausted",
            Self::FailedPrecondition => "failed-precondition",
            Self::Aborted => "aborted",
            Self::OutOfRange => "out-of-range",
            Self::Unimplemented => "unimplemented",
            Self::Internal => "internal",
            Self::Unavailable => "unavailable",
            Self::DataLoss => "data-loss",
            Self::Unauthenticated => "unauthenticated",
        }
    }
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An explicit, not-yet-normalized denial.
///
/// Steps and handlers deny an invocation by returning a `Reject` (via
/// [`CallFailure::Rejected`]). The message is still a [`MessageSpec`] at
/// this point; the error normalizer resolves it against the caller's
/// language, logs it, and turns it into the client-visible [`CallError`].
#[derive(Debug, Clone)]
pub struct Reject {
    kind: ErrorKind,
    message: MessageSpec,
    detail: Option<String>,
}

impl Reject {
    /// Create a denial with the given kind and message.
    pub fn new(kind: ErrorKind, message: impl Into<MessageSpec>) -> Self {
        Self {
            kind,
            message: message.into(),
            detail: None,
        }
    }

    /// Attach operator-facing detail to this denial.
    ///
    /// The detail is written to the log record but never sent to the client;
    /// it may therefore carry internals (a validation reason, a record id)
    /// that the client-visible message must not.
    pub fn with_detail(mut self, detail: impl Into<String>) -> Self {
        self.detail = Some(detail.into());
        self
    }

    /// The error kind of this denial.
    pub const fn kind(&self) -> ErrorKind {
        self.kind
    }

    /// The unresolved message of this denial.
    pub const fn message(&self) -> &MessageSpec {
        &self.message
    }

    /// The operator-facing detail, if any.
    pub fn detail(&self) -> Option<&str> {
        self.detail.as_deref()
    }
}

/// What an invocation can fail with before normalization.
///
/// The two variants make "explicitly raised" and "raw fault" a typed
/// distinction, so the boundary can tell a deliberate denial (logged with
/// its own kind and message) from an unexpected fault (logged in full for
/// operators, surfaced to the client as a generic `internal` error).
#[derive(Debug, Error)]
pub enum CallFailure {
    /// A denial raised intentionally by a policy gate, step, or handler.
    #[error("rejected: {}", .0.kind())]
    Rejected(Reject),

    /// An unexpected fault that escaped business logic.
    #[error(transparent)]
    Fault(BoxError),
}

impl CallFailure {
    /// Shorthand for an explicit denial.
    pub fn reject(kind: ErrorKind, message: impl Into<MessageSpec>) -> Self {
        Self::Rejected(Reject::new(kind, message))
    }
}

impl From<Reject> for CallFailure {
    fn from(reject: Reject) -> Self {
        Self::Rejected(reject)
    }
}

impl From<BoxError> for CallFailure {
    fn from(err: BoxError) -> Self {
        Self::Fault(err)
    }
}

/// The normalized error surfaced to the client.
///
/// This is the only error shape that crosses the invocation boundary: a
/// kind from the fixed set plus a message already resolved to the caller's
/// language. Never carries stack traces or internal fault details.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize)]
#[error("{kind}: {message}")]
pub struct CallError {
    /// The error category.
    pub kind: ErrorKind,
    /// The localized, client-displayable message.
    pub message: String,
}

impl CallError {
    /// Create a normalized error.
    pub fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}
