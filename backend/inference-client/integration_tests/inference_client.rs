use inference_client::error::InferenceClientError;
use inference_client::{
    Credential, InferenceClient, SMOKE_TEST_INPUT, SmokeTestOutcome, SummarizationRequest,
};

use common::HttpStatusCode;

use serde_json::json;
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

// ============================================================================
// Public API tests for InferenceClient against a mocked inference endpoint
// ============================================================================

const MODEL_PATH: &str = "/models/facebook/bart-large-cnn";

fn endpoint(server: &MockServer) -> String {
    format!("{}{MODEL_PATH}", server.uri())
}

/// **VALUE**: The request carries the bearer header and the fixed JSON body.
///
/// **WHY THIS MATTERS**: These two things are the entire contract with the inference API.
/// The mock only answers when both match exactly, and `expect(1)` fails the test on drop
/// if the request never arrived in that shape.
#[tokio::test]
async fn given_credential_when_post_inputs_then_sends_bearer_header_and_fixed_body() {
    // GIVEN: A mock that only accepts the exact request
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(MODEL_PATH))
        .and(header("authorization", "Bearer abc123"))
        .and(header("content-type", "application/json"))
        .and(body_json(json!({ "inputs": SMOKE_TEST_INPUT })))
        .respond_with(ResponseTemplate::new(200).set_body_string(r#"[{"summary_text": "A fox test."}]"#))
        .expect(1)
        .mount(&server)
        .await;

    let credential = Credential::from_env_value(Some(String::from("abc123")));
    let client = InferenceClient::new(&endpoint(&server), credential).unwrap();

    // WHEN: Posting the fixed payload
    let response = client
        .post_inputs(&SummarizationRequest::default())
        .await
        .unwrap();

    // THEN: The response comes back untouched
    assert_eq!(response.status, HttpStatusCode(200));
    assert_eq!(response.body, r#"[{"summary_text": "A fox test."}]"#);
}

/// **VALUE**: The placeholder credential is sent as-is.
#[tokio::test]
async fn given_placeholder_credential_when_post_inputs_then_sends_placeholder_bearer() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(header("authorization", "Bearer your_api_key_here"))
        .respond_with(ResponseTemplate::new(401).set_body_string(r#"{"error": "Invalid credentials"}"#))
        .expect(1)
        .mount(&server)
        .await;

    let client = InferenceClient::new(&endpoint(&server), Credential::placeholder()).unwrap();

    let response = client
        .post_inputs(&SummarizationRequest::default())
        .await
        .unwrap();

    assert_eq!(response.status, HttpStatusCode(401));
    assert_eq!(response.body, r#"{"error": "Invalid credentials"}"#);
}

/// **VALUE**: Error statuses are responses, not errors.
///
/// **BUG THIS CATCHES**: Would catch someone adding `error_for_status()` to the request chain,
/// which would turn a 503 "model loading" into a transport fault and skip the failure report.
#[tokio::test]
async fn given_server_error_when_post_inputs_then_returns_ok_with_status() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(
            ResponseTemplate::new(503)
                .set_body_string(r#"{"error": "Model facebook/bart-large-cnn is currently loading"}"#),
        )
        .mount(&server)
        .await;

    let client = InferenceClient::new(&endpoint(&server), Credential::placeholder()).unwrap();

    let response = client
        .post_inputs(&SummarizationRequest::default())
        .await
        .unwrap();
    let outcome = SmokeTestOutcome::classify(response).unwrap();

    assert_eq!(outcome.status(), HttpStatusCode(503));
    assert!(outcome.to_string().contains("currently loading"));
}

/// **VALUE**: An unreachable endpoint is a transport fault flagged as a connection error.
#[tokio::test]
async fn given_unreachable_endpoint_when_post_inputs_then_returns_connection_error() {
    // GIVEN: A port with nothing listening
    let client = InferenceClient::new(
        "http://127.0.0.1:65534/models/facebook/bart-large-cnn",
        Credential::placeholder(),
    )
    .unwrap();

    // WHEN: Posting
    let result = client.post_inputs(&SummarizationRequest::default()).await;

    // THEN: No response, connection flag set
    let err = result.expect_err("nothing is listening on the port");
    assert!(err.is_connection(), "expected connection error, got {err}");
    assert!(!err.is_timeout());
}

#[test]
fn given_malformed_endpoint_when_client_built_then_returns_url_parse_error() {
    let result = InferenceClient::new("not a url", Credential::placeholder());

    assert!(matches!(result, Err(InferenceClientError::UrlParse { .. })));
}

/// **VALUE**: A credential that cannot be a header value is rejected before anything is sent,
/// and the error message does not echo the credential.
#[tokio::test]
async fn given_credential_with_newline_when_post_inputs_then_header_error_without_value() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let credential = Credential::from_env_value(Some(String::from("hf_secret\nInjected: yes")));
    let client = InferenceClient::new(&endpoint(&server), credential).unwrap();

    let result = client.post_inputs(&SummarizationRequest::default()).await;

    let err = result.expect_err("newline must not reach the wire");
    assert!(matches!(err, InferenceClientError::Header { .. }));
    assert!(!err.to_string().contains("hf_secret"));
}
