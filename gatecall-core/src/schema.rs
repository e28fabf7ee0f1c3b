//! Input validation.
//!
//! The schema seam: validate the raw payload and produce the typed data
//! that flows through the step chain and the handler. Concrete schemas
//! (serde-backed, closures) live in the `gatecall` crate.

use serde_json::Value;
use thiserror::Error;

/// Why a payload failed validation.
///
/// The reason is operator-facing; clients always receive the standard
/// `invalid-argument` denial regardless of its content.
#[derive(Debug, Clone, Error)]
#[error("schema validation failed: {reason}")]
pub struct SchemaError {
    reason: String,
}

impl SchemaError {
    /// Create a schema error with the given reason.
    pub fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
        }
    }

    /// The validation failure reason.
    pub fn reason(&self) -> &str {
        &self.reason
    }
}

impl From<serde_json::Error> for SchemaError {
    fn from(err: serde_json::Error) -> Self {
        Self::new(err.to_string())
    }
}

/// Validates a raw payload and produces typed data.
///
/// Validation runs after the authentication gates and before any auxiliary
/// step. `Data` is the type every later stage of the invocation sees.
#[diagnostic::on_unimplemented(
    message = "`{Self}` is not a `Schema`",
    label = "missing `Schema` implementation",
    note = "Schemas must implement `parse`, turning a raw payload into typed data."
)]
pub trait Schema: Send + Sync + 'static {
    /// The validated, typed form of the payload.
    type Data: Send + Sync + 'static;

    /// Validate `raw` and produce the typed data, or reject the payload.
    fn parse(&self, raw: &Value) -> Result<Self::Data, SchemaError>;
}
