pub mod config;
pub mod credential;
pub mod error;
pub mod inference_client;
pub mod outcome;
pub mod payload;

pub use config::SmokeTestConfig;
pub use credential::{Credential, CredentialSource};
pub use inference_client::{InferenceClient, InferenceResponse};
pub use outcome::SmokeTestOutcome;
pub use payload::SummarizationRequest;

#[cfg(test)]
mod tests;

pub const HUGGINGFACE_API_KEY_ENV: &str = "HUGGINGFACE_API_KEY";
/// Substituted when `HUGGINGFACE_API_KEY` is unset. Not a real credential.
pub const PLACEHOLDER_API_KEY: &str = "your_api_key_here";

pub const INFERENCE_API_BASE_URL: &str = "https://api-inference.huggingface.co";
pub const SUMMARIZATION_MODEL: &str = "facebook/bart-large-cnn";
pub const SUMMARIZATION_ENDPOINT: &str =
    const_format::concatcp!(INFERENCE_API_BASE_URL, "/models/", SUMMARIZATION_MODEL);

pub const SMOKE_TEST_INPUT: &str = "The quick brown fox jumps over the lazy dog. This is a simple test to see if summarization is working properly.";
