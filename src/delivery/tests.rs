use std::time::Duration;

use serde_json::json;
use wiremock::matchers::{body_partial_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use crate::analytics::{BuildAnalytics, BuildStatus, StepAnalytics};
use crate::model::StepStatus;

use super::{DeliveryClient, DeliveryError, Result, accepts_status};

fn sample_envelope() -> BuildAnalytics {
    BuildAnalytics {
        app_slug: "app-slug".to_string(),
        build_slug: "build-slug".to_string(),
        repository_id: "repo-slug".to_string(),
        stack_id: "osx-xcode-14".to_string(),
        platform: "ios".to_string(),
        cli_version: "1.48.0".to_string(),
        workflow_name: "primary".to_string(),
        status: BuildStatus::Failed,
        runtime: Duration::from_nanos(2_027_588_963),
        start_time: None,
        step_analytics: vec![StepAnalytics {
            step_id: "script".to_string(),
            step_title: "script".to_string(),
            step_version: "1.1.3".to_string(),
            step_source: "https://github.com/bitrise-io/steps-script".to_string(),
            step_inputs: Default::default(),
            status: StepStatus::Failed,
            start_time: None,
            runtime: Duration::from_nanos(2_027_588_963),
        }],
    }
}

async fn send(client: DeliveryClient) -> Result<()> {
    tokio::task::spawn_blocking(move || client.send(&sample_envelope()))
        .await
        .expect("blocking send task")
}

async fn collector_answering(code: u16) -> MockServer {
    let template = if accepts_status(code) {
        ResponseTemplate::new(code)
    } else {
        ResponseTemplate::new(code).set_body_string("collector says hi")
    };
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/metrics"))
        .respond_with(template)
        .expect(1)
        .mount(&server)
        .await;
    server
}

#[test]
fn status_window_is_200_to_210_inclusive() {
    for code in [200, 201, 205, 210] {
        assert!(accepts_status(code), "{code} should be accepted");
    }
    for code in [100, 199, 211, 301, 404, 500] {
        assert!(!accepts_status(code), "{code} should be rejected");
    }
}

#[tokio::test]
async fn posts_json_envelope_to_collector() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/metrics"))
        .and(header("Content-Type", "application/json"))
        .and(body_partial_json(json!({
            "status": "failed",
            "run_time": 2_027_588_963_u64,
            "repo_id": "repo-slug",
            "step_analytics": [{"step_id": "script", "status": "failed"}]
        })))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;

    let client = DeliveryClient::with_endpoint(format!("{}/metrics", server.uri()));
    send(client).await.expect("delivery succeeds");
}

#[tokio::test]
async fn codes_inside_the_window_succeed() {
    for code in [200, 205, 210] {
        let server = collector_answering(code).await;
        let client = DeliveryClient::with_endpoint(format!("{}/metrics", server.uri()));
        assert!(send(client).await.is_ok(), "{code} should be a success");
    }
}

#[tokio::test]
async fn codes_outside_the_window_fail_with_their_code() {
    for code in [211, 302, 404, 500] {
        let server = collector_answering(code).await;
        let client = DeliveryClient::with_endpoint(format!("{}/metrics", server.uri()));
        let err = send(client).await.expect_err("delivery must fail");
        assert_eq!(err.status_code(), Some(code));
        let message = err.to_string();
        assert!(message.contains(&code.to_string()));
        assert!(message.contains("\"step_id\":\"script\""));
    }
}

#[tokio::test]
async fn rejected_delivery_keeps_the_response_body() {
    let server = collector_answering(500).await;
    let client = DeliveryClient::with_endpoint(format!("{}/metrics", server.uri()));
    match send(client).await {
        Err(DeliveryError::Status { response, .. }) => assert_eq!(response, "collector says hi"),
        other => panic!("expected status error, got {other:?}"),
    }
}

#[test]
fn unreachable_collector_is_a_request_error() {
    let client = DeliveryClient::with_endpoint("http://127.0.0.1:1/metrics");
    let err = client
        .send(&sample_envelope())
        .expect_err("delivery must fail");
    assert!(matches!(err, DeliveryError::Request { .. }));
    assert_eq!(err.status_code(), None);
    assert!(err.to_string().contains("\"app_slug\":\"app-slug\""));
}

#[test]
fn default_client_targets_the_collector() {
    assert_eq!(
        DeliveryClient::new().endpoint(),
        "https://bitrise-step-analytics.herokuapp.com/metrics"
    );
}
