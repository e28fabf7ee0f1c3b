//! Closure adapters for steps and handlers.
//!
//! Steps and handlers are usually structs implementing [`AuxStep`] /
//! [`CallHandler`] directly. These wrappers let one-off logic live in a
//! closure instead; the boxed-future variants exist because a bare closure
//! can't name the borrowing future type.
//!
//! The constructors carry the higher-ranked `Fn` bound so closure signature
//! inference picks it up at the `new` call. Without it a closure settles on
//! one concrete lifetime and no longer satisfies the step or handler trait.
//! Name the data type when it can't be inferred from context:
//! `StepFn::<MyData, _>::new(...)`.

use futures::future::BoxFuture;
use gatecall_core::{AuxStep, CallFailure, CallHandler, StepContext, StepResult};
use serde::Serialize;
use std::{future::Future, marker::PhantomData};

/// An auxiliary step backed by an async closure returning a boxed future.
///
/// ```rust,ignore
/// let step = StepFn::<MyData, _>::new(|ctx| {
///     Box::pin(async move {
///         let quota = lookup_quota(ctx.caller.token()).await?;
///         Ok(Some(AuxUpdate::new().with(quota)))
///     })
/// });
/// ```
pub struct StepFn<D, F> {
    func: F,
    _marker: PhantomData<fn(D)>,
}

impl<D, F> StepFn<D, F>
where
    D: Send + Sync + 'static,
    F: for<'a> Fn(StepContext<'a, D>) -> BoxFuture<'a, StepResult> + Send + Sync + 'static,
{
    /// Wrap an async closure as a step.
    pub fn new(func: F) -> Self {
        Self {
            func,
            _marker: PhantomData,
        }
    }
}

impl<D, F> AuxStep<D> for StepFn<D, F>
where
    D: Send + Sync + 'static,
    F: for<'a> Fn(StepContext<'a, D>) -> BoxFuture<'a, StepResult> + Send + Sync + 'static,
{
    fn run(&self, ctx: StepContext<'_, D>) -> impl Future<Output = StepResult> + Send {
        (self.func)(ctx)
    }
}

/// An auxiliary step backed by a synchronous closure.
pub struct SyncStepFn<D, F> {
    func: F,
    _marker: PhantomData<fn(D)>,
}

impl<D, F> SyncStepFn<D, F>
where
    D: Send + Sync + 'static,
    F: for<'a> Fn(StepContext<'a, D>) -> StepResult + Send + Sync + 'static,
{
    /// Wrap a synchronous closure as a step.
    pub fn new(func: F) -> Self {
        Self {
            func,
            _marker: PhantomData,
        }
    }
}

impl<D, F> AuxStep<D> for SyncStepFn<D, F>
where
    D: Send + Sync + 'static,
    F: for<'a> Fn(StepContext<'a, D>) -> StepResult + Send + Sync + 'static,
{
    async fn run(&self, ctx: StepContext<'_, D>) -> StepResult {
        (self.func)(ctx)
    }
}

/// A terminal handler backed by an async closure returning a boxed future.
///
/// ```rust,ignore
/// let handler = HandlerFn::<MyData, _, _>::new(|ctx| {
///     Box::pin(async move { Ok(json!({ "value": ctx.data.value })) })
/// });
/// ```
pub struct HandlerFn<D, F, O> {
    func: F,
    _marker: PhantomData<fn(D) -> O>,
}

impl<D, F, O> HandlerFn<D, F, O>
where
    D: Send + Sync + 'static,
    O: Serialize + Send + 'static,
    F: for<'a> Fn(StepContext<'a, D>) -> BoxFuture<'a, Result<O, CallFailure>>
        + Send
        + Sync
        + 'static,
{
    /// Wrap an async closure as a handler.
    pub fn new(func: F) -> Self {
        Self {
            func,
            _marker: PhantomData,
        }
    }
}

impl<D, F, O> CallHandler<D> for HandlerFn<D, F, O>
where
    D: Send + Sync + 'static,
    O: Serialize + Send + 'static,
    F: for<'a> Fn(StepContext<'a, D>) -> BoxFuture<'a, Result<O, CallFailure>>
        + Send
        + Sync
        + 'static,
{
    type Output = O;

    fn handle(
        &self,
        ctx: StepContext<'_, D>,
    ) -> impl Future<Output = Result<Self::Output, CallFailure>> + Send {
        (self.func)(ctx)
    }
}
