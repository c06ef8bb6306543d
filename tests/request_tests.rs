use http::Method;
use pretty_assertions::assert_eq;
use serde_json::json;
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

mod common;

use common::{setup_test_client, TEST_TOKEN};
use graph_models::GraphError;

#[tokio::test]
async fn test_invalid_endpoint_rejected() {
    // What it tests: Endpoints carrying a query string or fragment are rejected with
    // GraphError::InvalidEndpoint before anything is sent.
    let mock_server = MockServer::start().await;
    let client = setup_test_client(&mock_server.uri());

    for endpoint in ["/deviceManagement?$top=1", "/deviceManagement#x"] {
        match client.raw_request("GET", endpoint, None::<()>).await {
            Err(GraphError::InvalidEndpoint(e)) => assert_eq!(e, endpoint),
            other => panic!("expected InvalidEndpoint for {endpoint}, got {other:?}"),
        }
    }

    let requests = mock_server.received_requests().await.expect("failed to read recorded requests");
    assert!(requests.is_empty());
}

#[tokio::test]
async fn test_requests_carry_bearer_token_and_accept_header() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/beta/deviceManagement/depOnboardingSettings"))
        .and(header("authorization", format!("Bearer {TEST_TOKEN}").as_str()))
        .and(header("accept", "application/json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "value": [] })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = setup_test_client(&mock_server.uri());
    let value = client
        .raw_request("GET", "/deviceManagement/depOnboardingSettings", None::<()>)
        .await
        .unwrap();

    assert_eq!(value, json!({ "value": [] }));

    let requests = mock_server.received_requests().await.expect("failed to read recorded requests");
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].method, Method::GET);
    assert!(requests[0].url.query().is_none());
}

#[tokio::test]
async fn test_raw_request_sends_json_body_and_handles_no_content() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/beta/deviceManagement/deviceConfigurations/cfg-1/assign"))
        .and(header("content-type", "application/json"))
        .and(body_json(json!({ "assignments": [] })))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = setup_test_client(&mock_server.uri());
    let value = client
        .raw_request(
            "POST",
            "/deviceManagement/deviceConfigurations/cfg-1/assign",
            Some(json!({ "assignments": [] })),
        )
        .await
        .unwrap();

    assert!(value.is_null());
}

#[tokio::test]
async fn test_raw_request_rejects_invalid_method() {
    let mock_server = MockServer::start().await;
    let client = setup_test_client(&mock_server.uri());

    let err = client.raw_request("NOT A METHOD", "/deviceManagement", None::<()>).await.unwrap_err();
    assert!(matches!(err, GraphError::ConfigurationError(_)));
}

#[tokio::test]
async fn test_odata_error_envelope_is_mapped() {
    // What it tests: 4XX/5XX responses surface the service's code and message through
    // GraphError::ApiError, together with the HTTP status.
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/beta/deviceManagement/deviceConfigurations/missing"))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({
            "error": {
                "code": "ResourceNotFound",
                "message": "DeviceConfiguration with id 'missing' was not found"
            }
        })))
        .mount(&mock_server)
        .await;

    let client = setup_test_client(&mock_server.uri());
    let err = client
        .raw_request("GET", "/deviceManagement/deviceConfigurations/missing", None::<()>)
        .await
        .unwrap_err();

    match err {
        GraphError::ApiError { status, code, message } => {
            assert_eq!(status, 404);
            assert_eq!(code, "ResourceNotFound");
            assert!(message.contains("'missing'"));
        }
        other => panic!("expected ApiError, got {other:?}"),
    }
}

#[tokio::test]
async fn test_error_without_envelope_uses_status_text() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/beta/deviceManagement"))
        .respond_with(ResponseTemplate::new(503).set_body_string("upstream unavailable"))
        .mount(&mock_server)
        .await;

    let client = setup_test_client(&mock_server.uri());
    match client.raw_request("GET", "/deviceManagement", None::<()>).await {
        Err(GraphError::ApiError { status, code, message }) => {
            assert_eq!(status, 503);
            assert_eq!(code, "Service Unavailable");
            assert_eq!(message, "upstream unavailable");
        }
        other => panic!("expected ApiError, got {other:?}"),
    }
}
