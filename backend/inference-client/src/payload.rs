use crate::SMOKE_TEST_INPUT;

use serde::Serialize;

/// Request body for the hosted inference API: `{"inputs": "..."}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SummarizationRequest {
    pub inputs: String,
}

impl SummarizationRequest {
    pub fn new(inputs: impl Into<String>) -> Self {
        Self {
            inputs: inputs.into(),
        }
    }
}

impl Default for SummarizationRequest {
    fn default() -> Self {
        Self::new(SMOKE_TEST_INPUT)
    }
}
