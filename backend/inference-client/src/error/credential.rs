use common::ErrorLocation;

use thiserror::Error as ThisError;

#[derive(Debug, ThisError)]
pub enum CredentialError {
    #[error("Credential Error: {var} is set but is not valid unicode {location}")]
    NotUnicode {
        var: String,
        location: ErrorLocation,
    },
}

impl CredentialError {
    #[track_caller]
    pub fn not_unicode(var: impl Into<String>) -> Self {
        CredentialError::NotUnicode {
            var: var.into(),
            location: ErrorLocation::caller(),
        }
    }
}
