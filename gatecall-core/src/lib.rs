//! # gatecall-core
//!
//! Core traits and data model for the Gatecall endpoint framework.
//!
//! This crate has minimal dependencies and is designed to be imported by
//! auxiliary-step libraries and platform adapters that don't need the full
//! `gatecall` implementation.
//!
//! # Invocation Anatomy
//!
//! A Gatecall endpoint processes each invocation through a fixed-shape
//! pipeline. The pieces defined here are:
//!
//! ## Caller ([`Caller`])
//!
//! An immutable snapshot of the invoking identity: authentication state,
//! anonymity, an opaque identity token for logging, the client version, and
//! the resolved display language. Built once per invocation from the
//! platform's [`CallContext`].
//!
//! ## Validation ([`Schema`])
//!
//! The raw payload is validated and converted into typed data before any
//! business logic runs. A schema that fails produces an `invalid-argument`
//! denial; one that succeeds yields the `Data` type every later stage sees.
//!
//! ## Auxiliary steps ([`AuxStep`])
//!
//! An ordered chain of optional pre-handlers. Each step sees the validated
//! data, the caller, and the [`AuxData`] accumulated so far, and may return
//! an [`AuxUpdate`] whose entries are merged (last-write-wins) before the
//! next step runs. A step denies the whole invocation by returning a
//! [`Reject`] wrapped in [`CallFailure`].
//!
//! ## Terminal handler ([`CallHandler`])
//!
//! The single endpoint of the chain: receives the final merged [`AuxData`]
//! and produces the invocation's success value.
//!
//! # Error Model
//!
//! - [`ErrorKind`] - the fixed set of RPC error categories
//! - [`Reject`] - an explicit, not-yet-normalized denial
//! - [`CallFailure`] - tagged union of explicit denials and raw faults
//! - [`CallError`] - the normalized, client-visible error shape

#![deny(clippy::wildcard_imports)]
#![warn(missing_docs)]

mod auxdata;
mod caller;
mod error;
mod handler;
mod message;
mod request;
mod schema;
mod sink;
mod step;

// Re-exports
pub use auxdata::{AuxData, AuxUpdate};
pub use caller::{AuthInfo, CallContext, Caller};
pub use error::{BoxError, CallError, CallFailure, ErrorKind, Reject};
pub use handler::CallHandler;
pub use message::{FALLBACK_LANGUAGE, MessageSpec, UNKNOWN_ERROR_TEXT};
pub use request::CallRequest;
pub use schema::{Schema, SchemaError};
pub use sink::{InvocationRecord, LogSink};
pub use step::{AuxStep, DynAuxStep, StepContext, StepResult};
