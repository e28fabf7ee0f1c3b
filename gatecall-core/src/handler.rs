//! The terminal handler.
//!
//! The single endpoint of the invocation pipeline: runs once, after every
//! auxiliary step has completed, with the final merged accumulator. Its
//! output becomes the invocation's success value; its failure goes through
//! the error normalizer like any other.

use crate::{error::CallFailure, step::StepContext};
use serde::Serialize;
use std::future::Future;

/// The business-logic endpoint of an invocation.
///
/// Receives the same [`StepContext`] view the auxiliary steps saw, with
/// `ctx.aux` holding the final merged contributions of the whole chain.
/// The output is serialized for the transport layer by the endpoint.
#[diagnostic::on_unimplemented(
    message = "`{Self}` does not implement `CallHandler<{D}>`",
    label = "missing `CallHandler` implementation",
    note = "Handlers must implement `handle` for the validated data type `{D}`."
)]
pub trait CallHandler<D: Send + Sync + 'static>: Send + Sync + 'static {
    /// The success value of the invocation.
    type Output: Serialize + Send;

    /// Run the endpoint's business logic.
    fn handle(
        &self,
        ctx: StepContext<'_, D>,
    ) -> impl Future<Output = Result<Self::Output, CallFailure>> + Send;
}
