//! The request runner: one authenticated POST, one report.

use crate::error::SmokeCheckError;

use inference_client::credential::load_credential;
use inference_client::{InferenceClient, SmokeTestConfig, SmokeTestOutcome, SummarizationRequest};

use common::ErrorLocation;

use std::io::Write;

use log::{info, warn};

/// Send the smoke-test request described by `config` and write the report to `out`.
///
/// Exactly one report is written when a response is received, whatever its
/// status. Nothing is written when the request never gets a response.
///
/// # Errors
/// - [`SmokeCheckError::Credential`] if the credential variable is not unicode
/// - [`SmokeCheckError::Client`] on a transport fault or a non-JSON 200 body
/// - [`SmokeCheckError::Output`] if `out` cannot be written
pub async fn run<W: Write>(
    config: &SmokeTestConfig,
    out: &mut W,
) -> Result<SmokeTestOutcome, SmokeCheckError> {
    let credential = load_credential(&config.api_key_env)?;
    let client = InferenceClient::new(&config.endpoint, credential)?;
    let payload = SummarizationRequest::new(config.inputs.as_str());

    info!("Sending summarization smoke test to {}", client.endpoint());

    let response = client.post_inputs(&payload).await?;
    let outcome = SmokeTestOutcome::classify(response)?;

    if let Some(summary) = outcome.summary_text() {
        info!("Summary: {summary}");
    }

    match outcome.hint() {
        None => info!("Inference endpoint answered HTTP {}", outcome.status()),
        Some(hint) => warn!("Inference endpoint answered HTTP {}: {hint}", outcome.status()),
    }

    writeln!(out, "{outcome}").map_err(|e| SmokeCheckError::Output {
        message: format!("Failed to write report: {e}"),
        location: ErrorLocation::caller(),
    })?;

    Ok(outcome)
}
