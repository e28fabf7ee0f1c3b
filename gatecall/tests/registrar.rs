//! Registration: region resolution and platform deployment.

use gatecall::testing::{LocalPlatform, RecordingSink};
use gatecall::{
    CallContext, CallDefaults, CallRequest, ConfigError, DEFAULT_REGION, EndpointBuilder, Platform,
    Typed,
};
use serde_json::json;
use std::sync::Arc;

mod common;
use common::{ContributeX, EchoHandler, Ping};

#[tokio::test]
async fn deploys_to_default_region_when_unset() {
    let mut platform = LocalPlatform::new();

    EndpointBuilder::new(Typed::<Ping>::new())
        .log_sink(Arc::new(RecordingSink::new()))
        .build(EchoHandler, &CallDefaults::default())
        .unwrap()
        .register(&mut platform);

    assert_eq!(platform.regions(), vec![DEFAULT_REGION]);
}

#[tokio::test]
async fn deploys_identical_logic_to_every_region() {
    let mut platform = LocalPlatform::new();

    EndpointBuilder::new(Typed::<Ping>::new())
        .region(vec!["europe-west1", "us-east1"])
        .log_sink(Arc::new(RecordingSink::new()))
        .build(EchoHandler, &CallDefaults::default())
        .unwrap()
        .register(&mut platform);

    assert_eq!(platform.deployment_count(), 2);
    let a = platform.endpoint("europe-west1").unwrap();
    let b = platform.endpoint("us-east1").unwrap();
    assert!(Arc::ptr_eq(a, b));
}

#[tokio::test]
async fn explicit_region_overrides_defaults() {
    let defaults = CallDefaults {
        regions: "europe-west1".into(),
        ..CallDefaults::default()
    };
    let mut platform = LocalPlatform::new();

    EndpointBuilder::new(Typed::<Ping>::new())
        .region("southamerica-east1")
        .log_sink(Arc::new(RecordingSink::new()))
        .build(EchoHandler, &defaults)
        .unwrap()
        .register(&mut platform);

    assert_eq!(platform.regions(), vec!["southamerica-east1"]);
}

#[tokio::test]
async fn empty_region_list_is_rejected_at_build() {
    let result = EndpointBuilder::new(Typed::<Ping>::new())
        .region(Vec::<String>::new())
        .build(EchoHandler, &CallDefaults::default());

    assert!(matches!(result.err(), Some(ConfigError::NoRegions)));
}

#[tokio::test]
async fn deployed_endpoint_is_invocable_through_the_platform() {
    let mut platform = LocalPlatform::new();

    EndpointBuilder::new(Typed::<Ping>::new())
        .aux(ContributeX(5))
        .log_sink(Arc::new(RecordingSink::new()))
        .build(EchoHandler, &CallDefaults::default())
        .unwrap()
        .register(&mut platform);

    let value = platform
        .invoke(
            DEFAULT_REGION,
            CallRequest::new(json!({"value": 2})),
            CallContext::authed("user-1"),
        )
        .await
        .unwrap();

    assert_eq!(value["value"], json!(2));
    assert_eq!(value["x"], json!(5));
}

#[test]
fn custom_platforms_receive_deployments() {
    // A platform seam other than the test one: just counts deployments.
    struct CountingPlatform(usize);

    impl Platform for CountingPlatform {
        fn deploy(
            &mut self,
            _region: &str,
            _endpoint: Arc<dyn gatecall::InvocableEndpoint>,
        ) {
            self.0 += 1;
        }
    }

    let mut platform = CountingPlatform(0);

    EndpointBuilder::new(Typed::<Ping>::new())
        .region(vec!["a", "b", "c"])
        .log_sink(Arc::new(RecordingSink::new()))
        .build(EchoHandler, &CallDefaults::default())
        .unwrap()
        .register(&mut platform);

    assert_eq!(platform.0, 3);
}
