use crate::payload::SummarizationRequest;

use serde_json::json;

/// **VALUE**: The payload serializes to exactly `{"inputs": <fixed text>}`.
///
/// **WHY THIS MATTERS**: The inference API keys off the `inputs` field. A renamed field
/// or an extra key would produce a 400 that looks like an outage.
#[test]
fn given_default_payload_when_serialized_then_matches_fixed_body() {
    let payload = SummarizationRequest::default();

    let value = serde_json::to_value(&payload).unwrap();

    assert_eq!(
        value,
        json!({"inputs": "The quick brown fox jumps over the lazy dog. This is a simple test to see if summarization is working properly."})
    );
}
