#![allow(dead_code)]

use gatecall::{
    AuxStep, AuxUpdate, CallFailure, CallHandler, ErrorKind, MessageSpec, Reject, StepContext,
    StepResult,
};
use serde::Deserialize;
use serde_json::{Value, json};
use std::sync::{
    Arc, Mutex,
    atomic::{AtomicUsize, Ordering},
};

// ============================================================================
// Test Payload
// ============================================================================

#[derive(Debug, Clone, Deserialize)]
pub struct Ping {
    pub value: i64,
}

// ============================================================================
// Aux Contributions
// ============================================================================

#[derive(Debug, Clone, PartialEq)]
pub struct X(pub i64);

#[derive(Debug, Clone, PartialEq)]
pub struct Y(pub i64);

// ============================================================================
// Test Steps
// ============================================================================

pub struct ContributeX(pub i64);

impl AuxStep<Ping> for ContributeX {
    async fn run(&self, _ctx: StepContext<'_, Ping>) -> StepResult {
        Ok(Some(AuxUpdate::new().with(X(self.0))))
    }
}

pub struct ContributeY(pub i64);

impl AuxStep<Ping> for ContributeY {
    async fn run(&self, _ctx: StepContext<'_, Ping>) -> StepResult {
        Ok(Some(AuxUpdate::new().with(Y(self.0))))
    }
}

/// Contributes `Y = X + 1`, denying the call if no earlier step contributed
/// an `X`.
pub struct DeriveYFromX;

impl AuxStep<Ping> for DeriveYFromX {
    async fn run(&self, ctx: StepContext<'_, Ping>) -> StepResult {
        match ctx.aux.get::<X>() {
            Some(x) => Ok(Some(AuxUpdate::new().with(Y(x.0 + 1)))),
            None => Err(Reject::new(ErrorKind::FailedPrecondition, "x was never contributed").into()),
        }
    }
}

pub struct NoopStep;

impl AuxStep<Ping> for NoopStep {
    async fn run(&self, _ctx: StepContext<'_, Ping>) -> StepResult {
        Ok(None)
    }
}

pub struct CountingStep {
    pub calls: Arc<AtomicUsize>,
}

impl AuxStep<Ping> for CountingStep {
    async fn run(&self, _ctx: StepContext<'_, Ping>) -> StepResult {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(None)
    }
}

pub struct OrderStep {
    pub id: usize,
    pub order: Arc<Mutex<Vec<usize>>>,
}

impl AuxStep<Ping> for OrderStep {
    async fn run(&self, _ctx: StepContext<'_, Ping>) -> StepResult {
        self.order.lock().unwrap().push(self.id);
        Ok(None)
    }
}

pub struct DenyStep {
    pub kind: ErrorKind,
    pub message: MessageSpec,
}

impl AuxStep<Ping> for DenyStep {
    async fn run(&self, _ctx: StepContext<'_, Ping>) -> StepResult {
        Err(Reject::new(self.kind, self.message.clone()).into())
    }
}

pub struct FaultStep(pub &'static str);

impl AuxStep<Ping> for FaultStep {
    async fn run(&self, _ctx: StepContext<'_, Ping>) -> StepResult {
        Err(CallFailure::Fault(self.0.into()))
    }
}

// ============================================================================
// Test Handlers
// ============================================================================

/// Echoes the validated payload, the aux contributions, and the caller's
/// client version.
pub struct EchoHandler;

impl CallHandler<Ping> for EchoHandler {
    type Output = Value;

    async fn handle(&self, ctx: StepContext<'_, Ping>) -> Result<Value, CallFailure> {
        Ok(json!({
            "value": ctx.data.value,
            "x": ctx.aux.get::<X>().map(|x| x.0),
            "y": ctx.aux.get::<Y>().map(|y| y.0),
            "clientVersion": ctx.caller.client_version(),
        }))
    }
}

pub struct CountingHandler {
    pub calls: Arc<AtomicUsize>,
}

impl CallHandler<Ping> for CountingHandler {
    type Output = Value;

    async fn handle(&self, _ctx: StepContext<'_, Ping>) -> Result<Value, CallFailure> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(Value::Null)
    }
}

pub struct DenyHandler {
    pub kind: ErrorKind,
    pub message: MessageSpec,
}

impl CallHandler<Ping> for DenyHandler {
    type Output = Value;

    async fn handle(&self, _ctx: StepContext<'_, Ping>) -> Result<Value, CallFailure> {
        Err(Reject::new(self.kind, self.message.clone()).into())
    }
}

pub struct FaultyHandler(pub &'static str);

impl CallHandler<Ping> for FaultyHandler {
    type Output = Value;

    async fn handle(&self, _ctx: StepContext<'_, Ping>) -> Result<Value, CallFailure> {
        Err(CallFailure::Fault(self.0.into()))
    }
}
