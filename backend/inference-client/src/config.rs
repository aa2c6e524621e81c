use crate::{HUGGINGFACE_API_KEY_ENV, SMOKE_TEST_INPUT, SUMMARIZATION_ENDPOINT};

/// Everything the smoke check needs to know before it sends its one request.
///
/// `Default` is the production configuration. Tests swap the endpoint for a
/// mock server and the variable name for one nothing else reads.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SmokeTestConfig {
    pub endpoint: String,
    pub inputs: String,
    pub api_key_env: String,
}

impl Default for SmokeTestConfig {
    fn default() -> Self {
        Self {
            endpoint: SUMMARIZATION_ENDPOINT.to_string(),
            inputs: SMOKE_TEST_INPUT.to_string(),
            api_key_env: HUGGINGFACE_API_KEY_ENV.to_string(),
        }
    }
}

impl SmokeTestConfig {
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    pub fn with_api_key_env(mut self, api_key_env: impl Into<String>) -> Self {
        self.api_key_env = api_key_env.into();
        self
    }
}
