//! Endpoint construction, invocation, and registration.
//!
//! [`EndpointBuilder`] composes a schema, an auxiliary step chain, the
//! policy gates, and a terminal handler into one [`Endpoint`]. Per
//! invocation the endpoint executes, strictly in order: caller construction,
//! the authentication gates, schema validation, each auxiliary step (merging
//! its contribution before the next begins), then the handler. Any failure
//! leaving that flow is normalized exactly once by the [`Reporter`], so the
//! hosting platform never sees an unnormalized error.

use crate::{
    defaults::{CallDefaults, Regions},
    messages,
    report::{Reporter, TracingSink},
};
use futures::future::BoxFuture;
use gatecall_core::{
    AuxData, CallContext, CallError, CallFailure, CallHandler, CallRequest, Caller, DynAuxStep,
    ErrorKind, LogSink, Reject, Schema, StepContext,
};
use serde_json::Value;
use std::sync::Arc;
use thiserror::Error;

/// Maximum number of auxiliary steps an endpoint may declare.
pub const MAX_AUX_STEPS: usize = 9;

/// Errors detected while building an endpoint.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The step chain is longer than [`MAX_AUX_STEPS`].
    #[error("too many aux steps: {count} (max {MAX_AUX_STEPS})")]
    TooManySteps {
        /// Number of declared steps.
        count: usize,
    },

    /// An empty region list was configured.
    #[error("no deploy region configured")]
    NoRegions,
}

/// Builder for an [`Endpoint`].
///
/// Options left unset are resolved from the [`CallDefaults`] passed to
/// [`build`](Self::build).
pub struct EndpointBuilder<S: Schema> {
    schema: S,
    steps: Vec<Arc<dyn DynAuxStep<S::Data>>>,
    allow_anonymous: Option<bool>,
    allow_non_authed: Option<bool>,
    regions: Option<Regions>,
    sink: Option<Arc<dyn LogSink>>,
}

impl<S: Schema> EndpointBuilder<S> {
    /// Start building an endpoint validating its payload with `schema`.
    pub fn new(schema: S) -> Self {
        Self {
            schema,
            steps: Vec::new(),
            allow_anonymous: None,
            allow_non_authed: None,
            regions: None,
            sink: None,
        }
    }

    /// Append an auxiliary step to the chain. Steps run in the order they
    /// are appended.
    #[must_use]
    pub fn aux(mut self, step: impl gatecall_core::AuxStep<S::Data>) -> Self {
        self.steps.push(Arc::new(step));
        self
    }

    /// Whether anonymously authenticated callers may invoke this endpoint.
    #[must_use]
    pub fn allow_anonymous(mut self, allow: bool) -> Self {
        self.allow_anonymous = Some(allow);
        self
    }

    /// Whether unauthenticated callers may invoke this endpoint.
    #[must_use]
    pub fn allow_non_authed(mut self, allow: bool) -> Self {
        self.allow_non_authed = Some(allow);
        self
    }

    /// The region(s) this endpoint deploys to.
    #[must_use]
    pub fn region(mut self, regions: impl Into<Regions>) -> Self {
        self.regions = Some(regions.into());
        self
    }

    /// Replace the default `tracing`-backed log sink.
    #[must_use]
    pub fn log_sink(mut self, sink: Arc<dyn LogSink>) -> Self {
        self.sink = Some(sink);
        self
    }

    /// Finish the endpoint with its terminal handler, resolving unset
    /// options from `defaults`.
    pub fn build<H>(self, handler: H, defaults: &CallDefaults) -> Result<Endpoint<S, H>, ConfigError>
    where
        H: CallHandler<S::Data>,
    {
        if self.steps.len() > MAX_AUX_STEPS {
            return Err(ConfigError::TooManySteps {
                count: self.steps.len(),
            });
        }
        let regions = self.regions.unwrap_or_else(|| defaults.regions.clone());
        if regions.is_empty() {
            return Err(ConfigError::NoRegions);
        }
        Ok(Endpoint {
            schema: self.schema,
            steps: self.steps,
            handler,
            allow_anonymous: self.allow_anonymous.unwrap_or(defaults.allow_anonymous),
            allow_non_authed: self.allow_non_authed.unwrap_or(defaults.allow_non_authed),
            regions,
            reporter: Reporter::new(self.sink.unwrap_or_else(|| Arc::new(TracingSink))),
        })
    }
}

/// A fully built, invocable endpoint.
///
/// Immutable after construction; one per declared endpoint. Invocations are
/// independent of each other: the only state shared between them is this
/// read-only configuration.
pub struct Endpoint<S: Schema, H> {
    schema: S,
    steps: Vec<Arc<dyn DynAuxStep<S::Data>>>,
    handler: H,
    allow_anonymous: bool,
    allow_non_authed: bool,
    regions: Regions,
    reporter: Reporter,
}

impl<S, H> Endpoint<S, H>
where
    S: Schema,
    H: CallHandler<S::Data>,
{
    /// The regions this endpoint deploys to.
    pub fn regions(&self) -> &Regions {
        &self.regions
    }

    /// Handle one invocation.
    ///
    /// Success resolves to the handler's serialized output. Every failure
    /// has passed through the error normalizer: it carries a kind from the
    /// fixed set and a message resolved to the caller's language, and has
    /// been logged exactly once.
    pub async fn invoke(
        &self,
        request: CallRequest,
        context: CallContext,
    ) -> Result<Value, CallError> {
        let caller = Caller::from_context(
            &context,
            request.client_version.as_str(),
            request.lang.as_deref(),
        );
        match self.run(&request.data, &caller).await {
            Ok(value) => Ok(value),
            Err(failure) => Err(self.reporter.normalize(failure, &caller, &request.data)),
        }
    }

    async fn run(&self, raw: &Value, caller: &Caller) -> Result<Value, CallFailure> {
        if !self.allow_non_authed && !caller.is_authed() {
            return Err(Reject::new(ErrorKind::Unauthenticated, messages::auth_required()).into());
        }
        if !self.allow_anonymous && caller.is_anonymous() {
            return Err(Reject::new(ErrorKind::Unauthenticated, messages::cant_be_anon()).into());
        }

        let data = match self.schema.parse(raw) {
            Ok(data) => data,
            Err(err) => {
                // Clients get the standard denial; the validation reason
                // goes to operators through the log record.
                return Err(Reject::new(ErrorKind::InvalidArgument, messages::invalid_args())
                    .with_detail(err.to_string())
                    .into());
            }
        };

        let mut aux = AuxData::new();
        for step in &self.steps {
            let contribution = step
                .run_dyn(StepContext {
                    data: &data,
                    caller,
                    aux: &aux,
                })
                .await?;
            if let Some(update) = contribution {
                update.apply(&mut aux);
            }
        }

        let output = self
            .handler
            .handle(StepContext {
                data: &data,
                caller,
                aux: &aux,
            })
            .await?;
        serde_json::to_value(output).map_err(|err| CallFailure::Fault(Box::new(err)))
    }

    /// Deploy this endpoint to every configured region and return the
    /// type-erased handle the platform invokes.
    pub fn register<P>(self, platform: &mut P) -> Arc<dyn InvocableEndpoint>
    where
        P: Platform + ?Sized,
    {
        let regions = self.regions.clone();
        let endpoint: Arc<dyn InvocableEndpoint> = Arc::new(self);
        for region in regions.iter() {
            platform.deploy(region, Arc::clone(&endpoint));
        }
        endpoint
    }
}

/// Object-safe invocation surface, as deployed to a [`Platform`].
pub trait InvocableEndpoint: Send + Sync + 'static {
    /// Handle one invocation (dynamic dispatch version).
    fn invoke_dyn<'a>(
        &'a self,
        request: CallRequest,
        context: CallContext,
    ) -> BoxFuture<'a, Result<Value, CallError>>;
}

impl<S, H> InvocableEndpoint for Endpoint<S, H>
where
    S: Schema,
    H: CallHandler<S::Data>,
{
    fn invoke_dyn<'a>(
        &'a self,
        request: CallRequest,
        context: CallContext,
    ) -> BoxFuture<'a, Result<Value, CallError>> {
        Box::pin(self.invoke(request, context))
    }
}

/// The hosting platform seam: receives one deployment per configured
/// region.
pub trait Platform {
    /// Deploy an endpoint to a region.
    fn deploy(&mut self, region: &str, endpoint: Arc<dyn InvocableEndpoint>);
}
