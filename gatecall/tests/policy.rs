//! Authentication and anonymity policy gates.

use gatecall::testing::RecordingSink;
use gatecall::{CallContext, CallDefaults, CallRequest, EndpointBuilder, ErrorKind, Typed};
use serde_json::json;
use std::sync::{
    Arc,
    atomic::{AtomicUsize, Ordering},
};

mod common;
use common::{CountingHandler, CountingStep, Ping};

#[tokio::test]
async fn unauthenticated_caller_is_denied_before_pipeline() {
    let sink = Arc::new(RecordingSink::new());
    let step_calls = Arc::new(AtomicUsize::new(0));
    let handler_calls = Arc::new(AtomicUsize::new(0));

    let endpoint = EndpointBuilder::new(Typed::<Ping>::new())
        .aux(CountingStep {
            calls: step_calls.clone(),
        })
        .log_sink(sink.clone())
        .build(
            CountingHandler {
                calls: handler_calls.clone(),
            },
            &CallDefaults::default(),
        )
        .unwrap();

    let err = endpoint
        .invoke(
            CallRequest::new(json!({"value": 1})),
            CallContext::unauthenticated(),
        )
        .await
        .unwrap_err();

    assert_eq!(err.kind, ErrorKind::Unauthenticated);
    assert_eq!(step_calls.load(Ordering::SeqCst), 0);
    assert_eq!(handler_calls.load(Ordering::SeqCst), 0);
    assert_eq!(sink.record_count(), 1);
}

#[tokio::test]
async fn anonymous_caller_is_denied_when_disallowed() {
    let sink = Arc::new(RecordingSink::new());
    let handler_calls = Arc::new(AtomicUsize::new(0));

    let endpoint = EndpointBuilder::new(Typed::<Ping>::new())
        .allow_anonymous(false)
        .log_sink(sink.clone())
        .build(
            CountingHandler {
                calls: handler_calls.clone(),
            },
            &CallDefaults::default(),
        )
        .unwrap();

    let err = endpoint
        .invoke(
            CallRequest::new(json!({"value": 1})),
            CallContext::anonymous("anon-1"),
        )
        .await
        .unwrap_err();

    assert_eq!(err.kind, ErrorKind::Unauthenticated);
    assert_eq!(err.message, "Anonymous users can't do this.");
    assert_eq!(handler_calls.load(Ordering::SeqCst), 0);
    assert_eq!(sink.record_count(), 1);
}

#[tokio::test]
async fn anonymous_caller_is_allowed_by_default() {
    let endpoint = EndpointBuilder::new(Typed::<Ping>::new())
        .log_sink(Arc::new(RecordingSink::new()))
        .build(
            CountingHandler {
                calls: Arc::new(AtomicUsize::new(0)),
            },
            &CallDefaults::default(),
        )
        .unwrap();

    let result = endpoint
        .invoke(
            CallRequest::new(json!({"value": 1})),
            CallContext::anonymous("anon-1"),
        )
        .await;

    assert!(result.is_ok());
}

#[tokio::test]
async fn unauthenticated_caller_is_allowed_when_enabled() {
    let handler_calls = Arc::new(AtomicUsize::new(0));

    let endpoint = EndpointBuilder::new(Typed::<Ping>::new())
        .allow_non_authed(true)
        .log_sink(Arc::new(RecordingSink::new()))
        .build(
            CountingHandler {
                calls: handler_calls.clone(),
            },
            &CallDefaults::default(),
        )
        .unwrap();

    let result = endpoint
        .invoke(
            CallRequest::new(json!({"value": 1})),
            CallContext::unauthenticated(),
        )
        .await;

    assert!(result.is_ok());
    assert_eq!(handler_calls.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn unset_options_resolve_from_defaults() {
    let defaults = CallDefaults {
        allow_non_authed: true,
        ..CallDefaults::default()
    };

    let endpoint = EndpointBuilder::new(Typed::<Ping>::new())
        .log_sink(Arc::new(RecordingSink::new()))
        .build(
            CountingHandler {
                calls: Arc::new(AtomicUsize::new(0)),
            },
            &defaults,
        )
        .unwrap();

    let result = endpoint
        .invoke(
            CallRequest::new(json!({"value": 1})),
            CallContext::unauthenticated(),
        )
        .await;

    assert!(result.is_ok());
}

#[tokio::test]
async fn explicit_option_overrides_defaults() {
    // Defaults say anonymous is fine; this endpoint says otherwise.
    let endpoint = EndpointBuilder::new(Typed::<Ping>::new())
        .allow_anonymous(false)
        .log_sink(Arc::new(RecordingSink::new()))
        .build(
            CountingHandler {
                calls: Arc::new(AtomicUsize::new(0)),
            },
            &CallDefaults::default(),
        )
        .unwrap();

    let err = endpoint
        .invoke(
            CallRequest::new(json!({"value": 1})),
            CallContext::anonymous("anon-2"),
        )
        .await
        .unwrap_err();

    assert_eq!(err.kind, ErrorKind::Unauthenticated);
}
