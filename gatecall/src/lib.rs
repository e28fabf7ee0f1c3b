//! # gatecall - Validated RPC Endpoints for Serverless Platforms
//!
//! `gatecall` builds authenticated, schema-validated RPC endpoints on top of
//! a managed function-hosting platform: endpoint registration, payload
//! validation, authentication/anonymity policy gates, an ordered chain of
//! auxiliary pre-handlers that accumulate typed data, and a single
//! error-normalization funnel with localization and structured logging.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use gatecall::{CallDefaults, EndpointBuilder, Typed};
//!
//! let endpoint = EndpointBuilder::new(Typed::<RenameDoc>::new())
//!     .aux(LoadDoc)          // contributes Doc to the aux accumulator
//!     .aux(RequireOwner)     // reads Doc, denies non-owners
//!     .allow_anonymous(false)
//!     .build(RenameHandler, &CallDefaults::default())?;
//!
//! endpoint.register(&mut platform);
//! ```
//!
//! Per invocation the endpoint runs the policy gates, validates the payload,
//! runs the steps strictly in order (each may merge data into [`AuxData`]
//! for the steps after it and the handler), then runs the handler. Every
//! failure - explicit denial or unexpected fault - leaves the boundary as a
//! normalized [`CallError`], logged exactly once.

#![deny(clippy::wildcard_imports)]
#![warn(missing_docs)]

pub use gatecall_core::{
    // Aux accumulator
    AuxData,
    // Steps
    AuxStep,
    AuxUpdate,
    // Caller
    AuthInfo,
    // Errors
    BoxError,
    CallContext,
    CallError,
    CallFailure,
    // Handler
    CallHandler,
    // Invocation payload
    CallRequest,
    Caller,
    DynAuxStep,
    ErrorKind,
    // Localization
    FALLBACK_LANGUAGE,
    // Log sink
    InvocationRecord,
    LogSink,
    MessageSpec,
    Reject,
    // Schema
    Schema,
    SchemaError,
    StepContext,
    StepResult,
    UNKNOWN_ERROR_TEXT,
};

mod adapters;
mod defaults;
mod endpoint;
mod report;
mod schemas;

pub mod messages;
pub mod testing;

pub use adapters::{HandlerFn, StepFn, SyncStepFn};
pub use defaults::{CallDefaults, DEFAULT_REGION, Regions};
pub use endpoint::{
    ConfigError, Endpoint, EndpointBuilder, InvocableEndpoint, MAX_AUX_STEPS, Platform,
};
pub use report::{Reporter, TracingSink};
pub use schemas::{AcceptAll, SchemaFn, Typed};

/// Prelude module - common imports for Gatecall.
///
/// # Usage
///
/// ```rust,ignore
/// use gatecall::prelude::*;
/// ```
pub mod prelude {
    pub use crate::{
        AuxData,
        AuxStep,
        AuxUpdate,
        CallContext,
        CallDefaults,
        CallError,
        CallFailure,
        CallHandler,
        CallRequest,
        Caller,
        Endpoint,
        EndpointBuilder,
        ErrorKind,
        MessageSpec,
        Reject,
        Schema,
        StepContext,
        StepResult,
        Typed,
    };
}
