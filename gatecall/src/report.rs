//! The error normalizer.
//!
//! Every failure leaving an invocation passes through [`Reporter::normalize`]
//! exactly once, at the endpoint boundary. It resolves the denial's message
//! to the caller's language, writes one structured [`InvocationRecord`] to
//! the log sink, and produces the single [`CallError`] the transport layer
//! returns. Unexpected faults are additionally logged in full before being
//! collapsed into the generic `internal` denial, so operators keep the
//! original while clients only ever see the normalized shape.

use crate::messages;
use gatecall_core::{
    BoxError, CallError, CallFailure, Caller, ErrorKind, InvocationRecord, LogSink, Reject,
};
use serde_json::Value;
use std::sync::Arc;

/// Normalizes failures at the invocation boundary.
#[derive(Clone)]
pub struct Reporter {
    sink: Arc<dyn LogSink>,
}

impl Reporter {
    /// Create a reporter writing to the given sink.
    pub fn new(sink: Arc<dyn LogSink>) -> Self {
        Self { sink }
    }

    /// Turn a failure into the client-visible error, logging it once.
    ///
    /// Called exactly once per failed invocation; the type split between
    /// [`CallFailure::Rejected`] and [`CallFailure::Fault`] is what makes
    /// double logging impossible rather than merely avoided.
    pub fn normalize(&self, failure: CallFailure, caller: &Caller, data: &Value) -> CallError {
        let reject = match failure {
            CallFailure::Rejected(reject) => reject,
            CallFailure::Fault(fault) => {
                self.sink.fault(&fault);
                Reject::new(ErrorKind::Internal, messages::unknown())
            }
        };

        let message = reject.message().resolve(caller.language());
        let record = InvocationRecord {
            error_kind: reject.kind(),
            data: data.clone(),
            error_message: message.clone(),
            detail: reject.detail().map(str::to_string),
            caller_token: caller.token().map(str::to_string),
        };
        self.sink.error_record(&record);

        CallError::new(reject.kind(), message)
    }
}

/// The default sink: structured error records through `tracing`.
///
/// Records are rendered as pretty-printed JSON so the body stays multi-line
/// on consoles that would otherwise flatten it.
pub struct TracingSink;

impl LogSink for TracingSink {
    fn error_record(&self, record: &InvocationRecord) {
        let body = serde_json::to_string_pretty(record)
            .unwrap_or_else(|err| format!("unrenderable invocation record: {err}"));
        tracing::error!(target: "gatecall", kind = %record.error_kind, "{body}");
    }

    fn fault(&self, fault: &BoxError) {
        tracing::error!(target: "gatecall", error = %fault, "unexpected fault escaped the handler");
    }
}
