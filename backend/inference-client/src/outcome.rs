//! Classification of a response into the two reports the smoke check prints.

use crate::error::InferenceClientError;
use crate::inference_client::InferenceResponse;

use common::HttpStatusCode;

use std::fmt;

use serde_json::Value;

pub const SUCCESS_MARKER: &str = "API is working! Here's the response:";
pub const FAILURE_MARKER: &str = "API is not working. Status Code:";
pub const ERROR_MESSAGE_LABEL: &str = "Error Message:";

#[derive(Debug, Clone, PartialEq)]
pub enum SmokeTestOutcome {
    /// Status 200 with a JSON body. `body` is the text as received.
    Success { content: Value, body: String },
    /// Any other status. `body` is kept verbatim, JSON or not.
    Failure { status: HttpStatusCode, body: String },
}

impl SmokeTestOutcome {
    /// Success iff the status is exactly 200.
    ///
    /// # Errors
    /// A 200 whose body is not JSON is a [`InferenceClientError::Json`] fault.
    pub fn classify(response: InferenceResponse) -> Result<Self, InferenceClientError> {
        let InferenceResponse { status, body } = response;

        if !status.is_ok() {
            return Ok(SmokeTestOutcome::Failure { status, body });
        }

        let content: Value = serde_json::from_str(&body)?;
        Ok(SmokeTestOutcome::Success { content, body })
    }

    pub fn is_success(&self) -> bool {
        matches!(self, SmokeTestOutcome::Success { .. })
    }

    /// First `summary_text` in a successful response, for the log.
    ///
    /// Accepts both the list form the inference API returns and a bare object.
    pub fn summary_text(&self) -> Option<&str> {
        let SmokeTestOutcome::Success { content, .. } = self else {
            return None;
        };

        let summary = match content {
            Value::Array(items) => items.first()?,
            other => other,
        };

        summary.get("summary_text")?.as_str()
    }

    pub fn status(&self) -> HttpStatusCode {
        match self {
            SmokeTestOutcome::Success { .. } => HttpStatusCode(200),
            SmokeTestOutcome::Failure { status, .. } => *status,
        }
    }

    /// Likely cause of a failure, for the log. `None` on success.
    pub fn hint(&self) -> Option<&'static str> {
        let SmokeTestOutcome::Failure { status, .. } = self else {
            return None;
        };

        let hint = if status.is_auth_error() {
            "credential rejected, check HUGGINGFACE_API_KEY"
        } else if status.is_unavailable() {
            "model unavailable, it may still be loading"
        } else if status.is_client_error() {
            "request rejected by the inference API"
        } else if status.is_server_error() {
            "inference API server error"
        } else {
            "unexpected status from the inference API"
        };

        Some(hint)
    }
}

impl fmt::Display for SmokeTestOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SmokeTestOutcome::Success { body, .. } => {
                write!(f, "{SUCCESS_MARKER}\n{}", body.trim_end())
            }
            SmokeTestOutcome::Failure { status, body } => write!(
                f,
                "{FAILURE_MARKER} {status}\n{ERROR_MESSAGE_LABEL} {}",
                body.trim_end()
            ),
        }
    }
}
