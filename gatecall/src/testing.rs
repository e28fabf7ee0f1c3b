//! Testing utilities for Gatecall.
//!
//! - [`RecordingSink`]: a log sink that captures records and faults
//! - [`LocalPlatform`]: an in-memory platform that keeps deployed endpoints
//!   invocable from tests

use crate::endpoint::{InvocableEndpoint, Platform};
use gatecall_core::{
    BoxError, CallContext, CallError, CallRequest, InvocationRecord, LogSink,
};
use serde_json::Value;
use std::sync::{Arc, Mutex};

/// A log sink that records everything written to it.
///
/// Share it with an endpoint through an `Arc`, then inspect what the error
/// normalizer emitted:
///
/// ```rust,ignore
/// let sink = Arc::new(RecordingSink::new());
/// let endpoint = EndpointBuilder::new(schema)
///     .log_sink(sink.clone())
///     .build(handler, &defaults)?;
/// // ... invoke ...
/// assert_eq!(sink.records().len(), 1);
/// ```
#[derive(Default)]
pub struct RecordingSink {
    records: Mutex<Vec<InvocationRecord>>,
    faults: Mutex<Vec<String>>,
}

impl RecordingSink {
    /// Create an empty sink.
    pub fn new() -> Self {
        Self::default()
    }

    /// The failure records written so far.
    pub fn records(&self) -> Vec<InvocationRecord> {
        self.records.lock().unwrap().clone()
    }

    /// Number of failure records written so far.
    pub fn record_count(&self) -> usize {
        self.records.lock().unwrap().len()
    }

    /// The rendered raw faults written so far.
    pub fn faults(&self) -> Vec<String> {
        self.faults.lock().unwrap().clone()
    }

    /// Number of raw faults written so far.
    pub fn fault_count(&self) -> usize {
        self.faults.lock().unwrap().len()
    }
}

impl LogSink for RecordingSink {
    fn error_record(&self, record: &InvocationRecord) {
        self.records.lock().unwrap().push(record.clone());
    }

    fn fault(&self, fault: &BoxError) {
        self.faults.lock().unwrap().push(fault.to_string());
    }
}

/// An in-memory platform for exercising registration and invocation.
#[derive(Default)]
pub struct LocalPlatform {
    deployed: Vec<(String, Arc<dyn InvocableEndpoint>)>,
}

impl LocalPlatform {
    /// Create an empty platform.
    pub fn new() -> Self {
        Self::default()
    }

    /// The regions that received a deployment, in deploy order.
    pub fn regions(&self) -> Vec<&str> {
        self.deployed
            .iter()
            .map(|(region, _)| region.as_str())
            .collect()
    }

    /// Number of deployments.
    pub fn deployment_count(&self) -> usize {
        self.deployed.len()
    }

    /// The endpoint deployed to `region`, if any.
    pub fn endpoint(&self, region: &str) -> Option<&Arc<dyn InvocableEndpoint>> {
        self.deployed
            .iter()
            .find(|(deployed, _)| deployed == region)
            .map(|(_, endpoint)| endpoint)
    }

    /// Invoke the endpoint deployed to `region`.
    ///
    /// # Panics
    ///
    /// Panics if nothing is deployed to `region`; this is a test utility.
    pub async fn invoke(
        &self,
        region: &str,
        request: CallRequest,
        context: CallContext,
    ) -> Result<Value, CallError> {
        self.endpoint(region)
            .expect("no endpoint deployed to region")
            .invoke_dyn(request, context)
            .await
    }
}

impl Platform for LocalPlatform {
    fn deploy(&mut self, region: &str, endpoint: Arc<dyn InvocableEndpoint>) {
        self.deployed.push((region.to_string(), endpoint));
    }
}
