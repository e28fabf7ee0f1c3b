//! The log sink seam.
//!
//! Every failed invocation produces exactly one [`InvocationRecord`],
//! written to a [`LogSink`] by the error normalizer. The sink must render
//! nested structure legibly: the hosting platform's default rendering
//! flattens log bodies to one line, which makes structured error records
//! unreadable on its console.

use crate::error::{BoxError, ErrorKind};
use serde::Serialize;
use serde_json::Value;

/// The structured record written once per failed invocation.
///
/// Ephemeral and log-only; never persisted beyond the sink.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InvocationRecord {
    /// The error category of the failure.
    pub error_kind: ErrorKind,
    /// The raw input payload of the failed invocation.
    pub data: Value,
    /// The message after language resolution.
    pub error_message: String,
    /// Operator-facing detail attached to the denial, such as the schema
    /// validation reason. Never part of the client-visible error.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
    // Declared last so it lands at the bottom of the rendered record, which
    // keeps the console view scannable.
    /// The caller's opaque identity token, if authenticated.
    pub caller_token: Option<String>,
}

/// Destination for failure records and raw faults.
///
/// Implementations must accept one structured record per error and render
/// it multi-line.
pub trait LogSink: Send + Sync + 'static {
    /// Write one normalized failure record.
    fn error_record(&self, record: &InvocationRecord);

    /// Write an unexpected fault, in full, for operators.
    fn fault(&self, fault: &BoxError);
}
