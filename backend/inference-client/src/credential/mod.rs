//! Bearer credential for the inference API.
//!
//! # Behavior
//! - Read once from the environment (`HUGGINGFACE_API_KEY` by default)
//! - Unset variable falls back to [`PLACEHOLDER_API_KEY`], which the server will reject
//! - Placeholder-looking values are logged but still sent unchanged
//!
//! # Security
//! - The value lives in a [`RedactedApiKey`] and is only exposed to build the header
//! - Logs record presence and length, never the value

pub mod env_file;
pub mod placeholder;

pub use env_file::{EnvLoadResult, load_env_files};
pub use placeholder::detect_placeholder;

use crate::PLACEHOLDER_API_KEY;
use crate::error::CredentialError;

use common::RedactedApiKey;

use std::env;

use log::{info, warn};

/// Where the credential came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CredentialSource {
    Environment,
    Placeholder,
}

#[derive(Debug, Clone)]
pub struct Credential {
    key: RedactedApiKey,
    source: CredentialSource,
}

impl Credential {
    /// Build from the result of an environment lookup.
    ///
    /// A set-but-empty variable still counts as set.
    pub fn from_env_value(value: Option<String>) -> Self {
        match value {
            Some(value) => Self {
                key: RedactedApiKey::new(value),
                source: CredentialSource::Environment,
            },
            None => Self::placeholder(),
        }
    }

    pub fn placeholder() -> Self {
        Self {
            key: RedactedApiKey::new(PLACEHOLDER_API_KEY),
            source: CredentialSource::Placeholder,
        }
    }

    pub fn key(&self) -> &RedactedApiKey {
        &self.key
    }

    pub fn source(&self) -> CredentialSource {
        self.source
    }

    /// Value for the `Authorization` header.
    pub fn bearer_header_value(&self) -> String {
        format!("Bearer {}", self.key.expose())
    }

    /// Name of the placeholder pattern the value matches, if any.
    pub fn placeholder_pattern(&self) -> Option<&'static str> {
        detect_placeholder(self.key.expose())
    }
}

/// Read the credential from `var_name`.
///
/// # Errors
/// Returns [`CredentialError::NotUnicode`] when the variable is set to bytes
/// that are not valid unicode, since they cannot go into a header.
#[track_caller]
pub fn load_credential(var_name: &str) -> Result<Credential, CredentialError> {
    let credential = match env::var(var_name) {
        Ok(value) => Credential::from_env_value(Some(value)),
        Err(env::VarError::NotPresent) => Credential::from_env_value(None),
        Err(env::VarError::NotUnicode(_)) => {
            warn!("{var_name} contains invalid unicode");
            return Err(CredentialError::not_unicode(var_name));
        }
    };

    match credential.source() {
        CredentialSource::Environment => {
            info!(
                "{var_name}: Present ({} chars)",
                credential.key().char_count()
            );
            if let Some(pattern) = credential.placeholder_pattern() {
                warn!("{var_name} looks like a placeholder (matched '{pattern}'), expect a 401");
            }
        }
        CredentialSource::Placeholder => {
            warn!("{var_name}: Missing, sending placeholder credential");
        }
    }

    Ok(credential)
}
