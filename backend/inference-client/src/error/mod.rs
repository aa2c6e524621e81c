pub mod credential;
pub mod inference_client;

pub use credential::CredentialError;
pub use inference_client::InferenceClientError;
