use inference_client::error::{CredentialError, InferenceClientError};

use common::ErrorLocation;

use thiserror::Error;

/// Everything that can stop the smoke check before it prints a report.
///
/// A non-200 response is not in here: it is a normal outcome.
#[derive(Debug, Error)]
pub enum SmokeCheckError {
    /// Logger setup failed
    #[error("Logger Error: {message} {location}")]
    Logger {
        message: String,
        location: ErrorLocation,
    },

    #[error(transparent)]
    Credential(#[from] CredentialError),

    /// Transport fault or unreadable response
    #[error(transparent)]
    Client(#[from] InferenceClientError),

    /// The report could not be written to stdout
    #[error("Output Error: {message} {location}")]
    Output {
        message: String,
        location: ErrorLocation,
    },
}
