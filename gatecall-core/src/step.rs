//! The auxiliary step chain.
//!
//! Auxiliary steps are optional pre-handlers that run between schema
//! validation and the terminal handler, strictly in declared order. Each
//! step is awaited to completion before the next begins; there is no
//! concurrency between steps of one invocation. A step may contribute data
//! to the shared [`AuxData`] accumulator by returning an [`AuxUpdate`], or
//! deny the whole invocation by returning a [`CallFailure`].
//!
//! # Static vs Dynamic Dispatch
//!
//! [`AuxStep`] uses native `async fn` for static dispatch. The endpoint
//! stores its chain type-erased, so every step also gets an object-safe
//! [`DynAuxStep`] via the blanket implementation.
//!
//! [`AuxData`]: crate::AuxData

use crate::{
    auxdata::{AuxData, AuxUpdate},
    caller::Caller,
    error::CallFailure,
};
use std::{future::Future, pin::Pin};

/// What a step resolves to: optionally an update to merge, or a failure
/// that short-circuits the invocation.
pub type StepResult = Result<Option<AuxUpdate>, CallFailure>;

/// The shared, read-only view passed to each auxiliary step and to the
/// terminal handler.
#[derive(Debug)]
pub struct StepContext<'a, D> {
    /// The schema-validated payload.
    pub data: &'a D,
    /// The invoking identity.
    pub caller: &'a Caller,
    /// Auxiliary data accumulated by the steps that already ran.
    pub aux: &'a AuxData,
}

// Manual impls: derived Clone/Copy would require D: Clone.
impl<D> Clone for StepContext<'_, D> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<D> Copy for StepContext<'_, D> {}

/// An auxiliary pre-handler in an endpoint's step chain.
///
/// Returning `Ok(None)` contributes nothing; `Ok(Some(update))` merges the
/// update into the accumulator before the next step runs; `Err(failure)`
/// denies the invocation and sends the failure straight to the error
/// normalizer, skipping every remaining step and the handler.
#[diagnostic::on_unimplemented(
    message = "`{Self}` does not implement `AuxStep<{D}>`",
    label = "missing `AuxStep` implementation",
    note = "Auxiliary steps must implement `run` for the validated data type `{D}`."
)]
pub trait AuxStep<D: Send + Sync + 'static>: Send + Sync + 'static {
    /// Run this step for one invocation.
    fn run(&self, ctx: StepContext<'_, D>) -> impl Future<Output = StepResult> + Send;
}

/// Dynamic object-safe version of [`AuxStep`].
///
/// Use this trait when steps of different types share one chain.
pub trait DynAuxStep<D: Send + Sync + 'static>: Send + Sync + 'static {
    /// Run this step for one invocation (dynamic dispatch version).
    fn run_dyn<'a>(
        &'a self,
        ctx: StepContext<'a, D>,
    ) -> Pin<Box<dyn Future<Output = StepResult> + Send + 'a>>;
}

// Blanket implementation: any AuxStep implements DynAuxStep automatically.
impl<D: Send + Sync + 'static, T: AuxStep<D>> DynAuxStep<D> for T {
    fn run_dyn<'a>(
        &'a self,
        ctx: StepContext<'a, D>,
    ) -> Pin<Box<dyn Future<Output = StepResult> + Send + 'a>> {
        Box::pin(self.run(ctx))
    }
}
