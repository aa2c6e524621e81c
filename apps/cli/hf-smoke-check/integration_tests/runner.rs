use hf_smoke_check::error::SmokeCheckError;
use hf_smoke_check::runner::run;

use inference_client::{HUGGINGFACE_API_KEY_ENV, SMOKE_TEST_INPUT, SmokeTestConfig};

use serde_json::json;
use serial_test::serial;
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

// ============================================================================
// End-to-end runs of the request runner against a mocked inference endpoint.
// All tests are #[serial]: reqwest reads proxy variables from the environment.
// ============================================================================

const MODEL_PATH: &str = "/models/facebook/bart-large-cnn";
const SUCCESS_MARKER: &str = "API is working! Here's the response:";
const FAILURE_MARKER: &str = "API is not working. Status Code:";

fn config_for(server: &MockServer) -> SmokeTestConfig {
    SmokeTestConfig::default().with_endpoint(format!("{}{MODEL_PATH}", server.uri()))
}

fn set_api_key(value: Option<&str>) {
    // SAFETY: every caller is #[serial], so no other test reads the environment concurrently
    unsafe {
        match value {
            Some(value) => std::env::set_var(HUGGINGFACE_API_KEY_ENV, value),
            None => std::env::remove_var(HUGGINGFACE_API_KEY_ENV),
        }
    }
}

async fn run_to_string(config: &SmokeTestConfig) -> Result<String, SmokeCheckError> {
    let mut out = Vec::new();
    run(config, &mut out).await?;
    Ok(String::from_utf8(out).unwrap())
}

/// **VALUE**: The working-endpoint scenario end to end.
///
/// **WHY THIS MATTERS**: This is the answer the smoke check exists to give. The key from
/// the environment must reach the header, and the body must be printed as received.
#[tokio::test]
#[serial]
async fn given_key_set_and_200_response_when_run_then_prints_success_and_body() {
    // GIVEN: HUGGINGFACE_API_KEY=abc123 and a mock that only accepts that key
    set_api_key(Some("abc123"));
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(MODEL_PATH))
        .and(header("authorization", "Bearer abc123"))
        .and(body_json(json!({ "inputs": SMOKE_TEST_INPUT })))
        .respond_with(ResponseTemplate::new(200).set_body_string(r#"{"summary_text": "A fox test."}"#))
        .expect(1)
        .mount(&server)
        .await;

    // WHEN: Running the smoke check
    let output = run_to_string(&config_for(&server)).await;
    set_api_key(None);

    // THEN: Success marker followed by the JSON body
    let output = output.unwrap();
    assert!(output.contains(SUCCESS_MARKER));
    assert!(output.contains(r#"{"summary_text": "A fox test."}"#));
    assert!(!output.contains(FAILURE_MARKER));
}

/// **VALUE**: The missing-key scenario end to end.
///
/// **WHY THIS MATTERS**: Without a key the run still goes out with the placeholder and
/// the operator sees the server's own rejection.
#[tokio::test]
#[serial]
async fn given_key_unset_and_401_response_when_run_then_prints_failure_with_code_and_error() {
    // GIVEN: No key, and a mock that only answers the placeholder bearer
    set_api_key(None);
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(MODEL_PATH))
        .and(header("authorization", "Bearer your_api_key_here"))
        .and(body_json(json!({ "inputs": SMOKE_TEST_INPUT })))
        .respond_with(ResponseTemplate::new(401).set_body_string(r#"{"error": "Invalid credentials"}"#))
        .expect(1)
        .mount(&server)
        .await;

    // WHEN
    let output = run_to_string(&config_for(&server)).await.unwrap();

    // THEN
    assert!(output.contains(&format!("{FAILURE_MARKER} 401")));
    assert!(output.contains("Invalid credentials"));
    assert!(!output.contains(SUCCESS_MARKER));
}

/// **VALUE**: Every non-200 status is reported with its exact code and body.
#[tokio::test]
#[serial]
async fn given_various_error_statuses_when_run_then_each_reports_its_code() {
    set_api_key(Some("abc123"));

    for status in [201u16, 400, 403, 429, 500, 503] {
        let server = MockServer::start().await;
        let body = format!(r#"{{"error": "status {status} body"}}"#);
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(status).set_body_string(body.clone()))
            .expect(1)
            .mount(&server)
            .await;

        let output = run_to_string(&config_for(&server)).await.unwrap();

        assert_eq!(
            output,
            format!("{FAILURE_MARKER} {status}\nError Message: {body}\n"),
            "status {status}"
        );
    }

    set_api_key(None);
}

/// **VALUE**: A transport fault propagates and nothing is printed.
///
/// **BUG THIS CATCHES**: Would catch a runner that swallows connection errors and prints
/// a failure report with a made-up status code.
#[tokio::test]
#[serial]
async fn given_unreachable_endpoint_when_run_then_returns_error_and_prints_nothing() {
    set_api_key(Some("abc123"));
    let config = SmokeTestConfig::default().with_endpoint("http://127.0.0.1:65534/models/x");

    let mut out = Vec::new();
    let result = run(&config, &mut out).await;
    set_api_key(None);

    assert!(matches!(result, Err(SmokeCheckError::Client(_))));
    assert!(out.is_empty());
}

/// **VALUE**: A 200 with a body that is not JSON is a fault, not a success.
#[tokio::test]
#[serial]
async fn given_200_non_json_body_when_run_then_returns_error_and_prints_nothing() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>ok</html>"))
        .mount(&server)
        .await;
    let config = config_for(&server).with_api_key_env("HF_SMOKE_CHECK_TEST_UNUSED_KEY");

    let mut out = Vec::new();
    let result = run(&config, &mut out).await;

    assert!(matches!(result, Err(SmokeCheckError::Client(_))));
    assert!(out.is_empty());
}
