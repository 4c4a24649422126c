//! Generation-endpoint client tests against a wiremock server.

use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, ResponseTemplate};

use dossier::client::{GenerateError, GenerateRequest, ReportClient};

use crate::common::{
    endpoint, mount_generate_error, mount_generate_garbage, mount_generate_success,
    sample_result_json, start_report_mock,
};

#[test]
fn request_body_trims_instructions() {
    assert_eq!(
        GenerateRequest::new("  analyze sales  ").user_instructions(),
        "analyze sales"
    );
}

#[test]
fn blank_instructions_serialize_as_empty_string() {
    // The server treats an empty string as "use the default template" and
    // a missing field as a validation error.
    for raw in ["", "   "] {
        let body = serde_json::to_value(GenerateRequest::new(raw)).unwrap();
        assert_eq!(body, serde_json::json!({ "userInstructions": "" }));
    }
}

#[tokio::test]
async fn generate_decodes_successful_response() {
    let server = start_report_mock().await;
    mount_generate_success(&server, sample_result_json()).await;

    let client = ReportClient::new(endpoint(&server));
    let result = client
        .generate(&GenerateRequest::new("analyze sales"))
        .await
        .unwrap();

    assert_eq!(result.quantitative_steps.len(), 2);
    assert!(result.synthesis.is_some());
}

#[tokio::test]
async fn generate_sends_trimmed_instructions_field() {
    let server = start_report_mock().await;
    Mock::given(method("POST"))
        .and(path("/generate-report"))
        .and(body_json(serde_json::json!({ "userInstructions": "" })))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({})))
        .expect(1)
        .mount(&server)
        .await;

    let client = ReportClient::new(endpoint(&server));
    client.generate(&GenerateRequest::new("   ")).await.unwrap();
}

#[tokio::test]
async fn error_body_is_a_domain_failure() {
    let server = start_report_mock().await;
    mount_generate_error(&server, "Ingestion Failed: file not found").await;

    let client = ReportClient::new(endpoint(&server));
    let err = client
        .generate(&GenerateRequest::new(""))
        .await
        .unwrap_err();

    match err {
        GenerateError::Service(message) => {
            assert_eq!(message, "Ingestion Failed: file not found");
        }
        other => panic!("expected Service error, got {other:?}"),
    }
}

#[tokio::test]
async fn non_json_body_is_a_transport_failure() {
    let server = start_report_mock().await;
    mount_generate_garbage(&server).await;

    let client = ReportClient::new(endpoint(&server));
    let err = client
        .generate(&GenerateRequest::new(""))
        .await
        .unwrap_err();

    assert!(matches!(err, GenerateError::InvalidBody(_)));
}

#[tokio::test]
async fn http_error_status_is_a_transport_failure() {
    let server = start_report_mock().await;
    Mock::given(method("POST"))
        .and(path("/generate-report"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let client = ReportClient::new(endpoint(&server));
    let err = client
        .generate(&GenerateRequest::new(""))
        .await
        .unwrap_err();

    assert!(matches!(err, GenerateError::Transport(_)));
}

#[tokio::test]
async fn unreachable_server_is_a_transport_failure() {
    // Nothing listens here.
    let client = ReportClient::new("http://127.0.0.1:1/generate-report");
    let err = client
        .generate(&GenerateRequest::new(""))
        .await
        .unwrap_err();

    assert!(matches!(err, GenerateError::Transport(_)));
}
