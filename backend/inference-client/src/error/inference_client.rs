//! Errors raised while talking to the inference endpoint.
//!
//! A received response is never an error here, whatever its status code.
//! These variants cover everything that stops a response from arriving or
//! being read.

use common::ErrorLocation;

use thiserror::Error as ThisError;

#[derive(Debug, ThisError)]
pub enum InferenceClientError {
    #[error("HTTP Error: {message} {location}")]
    Http {
        message: String,
        is_timeout: bool,
        is_connection: bool,
        location: ErrorLocation,
    },

    #[error("JSON Error: {message} {location}")]
    Json {
        message: String,
        location: ErrorLocation,
    },

    #[error("Header Error: {message} {location}")]
    Header {
        message: String,
        location: ErrorLocation,
    },

    #[error("URL Parse Error: {message} {location}")]
    UrlParse {
        message: String,
        location: ErrorLocation,
    },
}

impl InferenceClientError {
    /// Connection refused, DNS, TLS handshake.
    pub fn is_connection(&self) -> bool {
        matches!(self, InferenceClientError::Http { is_connection: true, .. })
    }

    pub fn is_timeout(&self) -> bool {
        matches!(self, InferenceClientError::Http { is_timeout: true, .. })
    }
}

impl From<url::ParseError> for InferenceClientError {
    #[track_caller]
    fn from(error: url::ParseError) -> Self {
        InferenceClientError::UrlParse {
            message: error.to_string(),
            location: ErrorLocation::caller(),
        }
    }
}

impl From<reqwest::header::InvalidHeaderValue> for InferenceClientError {
    #[track_caller]
    fn from(_error: reqwest::header::InvalidHeaderValue) -> Self {
        // The rejected value is the credential itself, keep it out of the message
        InferenceClientError::Header {
            message: String::from("credential contains characters not allowed in a header"),
            location: ErrorLocation::caller(),
        }
    }
}

impl From<reqwest::Error> for InferenceClientError {
    #[track_caller]
    fn from(error: reqwest::Error) -> Self {
        // Categorise before the error is flattened into a string
        InferenceClientError::Http {
            is_timeout: error.is_timeout(),
            is_connection: error.is_connect(),
            message: error.to_string(),
            location: ErrorLocation::caller(),
        }
    }
}

impl From<serde_json::Error> for InferenceClientError {
    #[track_caller]
    fn from(error: serde_json::Error) -> Self {
        InferenceClientError::Json {
            message: error.to_string(),
            location: ErrorLocation::caller(),
        }
    }
}
