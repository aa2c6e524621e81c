use crate::credential::Credential;
use crate::error::InferenceClientError;
use crate::payload::SummarizationRequest;

use common::HttpStatusCode;

use log::debug;
use reqwest::Client;
use reqwest::header::{AUTHORIZATION, HeaderValue};
use url::Url;

/// Status and raw body of a response that made it back from the server.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InferenceResponse {
    pub status: HttpStatusCode,
    pub body: String,
}

/// Single-endpoint client for the hosted inference API.
///
/// The underlying `reqwest::Client` is built without a timeout so the
/// transport default applies. Nothing is retried.
pub struct InferenceClient {
    endpoint: Url,
    client: Client,
    credential: Credential,
}

impl InferenceClient {
    pub fn new(endpoint: &str, credential: Credential) -> Result<Self, InferenceClientError> {
        let endpoint = Url::parse(endpoint)?;
        let client = Client::builder().build()?;

        Ok(Self {
            endpoint,
            client,
            credential,
        })
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    /// POST `payload` with the bearer credential and hand back whatever the
    /// server answered.
    ///
    /// # Errors
    /// Returns [`InferenceClientError::Header`] when the credential cannot be
    /// used as a header value, and [`InferenceClientError::Http`] only when no response could be
    /// received or its body could not be read. Non-200 statuses are returned
    /// as `Ok`.
    pub async fn post_inputs(
        &self,
        payload: &SummarizationRequest,
    ) -> Result<InferenceResponse, InferenceClientError> {
        debug!(
            "POST {} ({:?} credential)",
            self.endpoint,
            self.credential.source()
        );

        let mut authorization = HeaderValue::from_str(&self.credential.bearer_header_value())?;
        authorization.set_sensitive(true);

        let response = self
            .client
            .post(self.endpoint.clone())
            .header(AUTHORIZATION, authorization)
            .json(payload)
            .send()
            .await?;

        let status = HttpStatusCode(response.status().as_u16());
        let body = response.text().await?;

        debug!("Received HTTP {status} with {} byte body", body.len());

        Ok(InferenceResponse { status, body })
    }
}
