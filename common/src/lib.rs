//! Shared value types for the summarization smoke check.
//!
//! Nothing in here talks to the network. These are the small pieces every
//! other crate leans on:
//!
//! - [`ErrorLocation`]: where an error was built, appended to every error message
//! - [`RedactedApiKey`]: the bearer credential, kept out of logs
//! - [`HttpStatusCode`]: the status code the outcome is classified on

pub mod error;
pub mod http_status;
pub mod redacted_key;

pub use error::error_location::ErrorLocation;
pub use error::redact_error::RedactError;
pub use http_status::HttpStatusCode;
pub use redacted_key::RedactedApiKey;

#[cfg(test)]
mod tests;
