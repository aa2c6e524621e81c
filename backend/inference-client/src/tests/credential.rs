use crate::PLACEHOLDER_API_KEY;
use crate::credential::{Credential, CredentialSource, load_credential};

use serial_test::serial;

const TEST_VAR: &str = "INFERENCE_CLIENT_UNIT_TEST_API_KEY";

/// **VALUE**: A missing variable falls back to the documented placeholder.
///
/// **WHY THIS MATTERS**: The smoke check still sends a request without a key so the
/// operator sees the server's 401 instead of a local error.
#[test]
fn given_no_env_value_when_credential_built_then_uses_placeholder() {
    let credential = Credential::from_env_value(None);

    assert_eq!(credential.source(), CredentialSource::Placeholder);
    assert_eq!(credential.key().expose(), PLACEHOLDER_API_KEY);
    assert_eq!(credential.placeholder_pattern(), Some("your_api_key"));
}

/// **BUG THIS CATCHES**: Would catch treating an empty variable like an unset one. The
/// plain lookup only falls back when the variable is absent.
#[test]
fn given_empty_env_value_when_credential_built_then_keeps_empty_value() {
    let credential = Credential::from_env_value(Some(String::new()));

    assert_eq!(credential.source(), CredentialSource::Environment);
    assert!(credential.key().is_empty());
}

#[test]
fn given_credential_when_debug_formatted_then_value_is_redacted() {
    let credential = Credential::from_env_value(Some(String::from("hf_secretvalue")));

    let debug = format!("{credential:?}");

    assert!(!debug.contains("secretvalue"));
    assert!(debug.contains("Environment"));
}

#[test]
#[serial]
fn given_env_var_set_when_load_credential_then_reads_value() {
    // SAFETY: serialized with every other test that touches the environment
    unsafe { std::env::set_var(TEST_VAR, "abc123") };

    let credential = load_credential(TEST_VAR).unwrap();

    assert_eq!(credential.source(), CredentialSource::Environment);
    assert_eq!(credential.key().expose(), "abc123");

    unsafe { std::env::remove_var(TEST_VAR) };
}

#[test]
#[serial]
fn given_env_var_unset_when_load_credential_then_falls_back_to_placeholder() {
    unsafe { std::env::remove_var(TEST_VAR) };

    let credential = load_credential(TEST_VAR).unwrap();

    assert_eq!(credential.source(), CredentialSource::Placeholder);
    assert_eq!(credential.key().expose(), PLACEHOLDER_API_KEY);
}

#[cfg(unix)]
#[test]
#[serial]
fn given_non_unicode_env_var_when_load_credential_then_returns_error() {
    use std::ffi::OsStr;
    use std::os::unix::ffi::OsStrExt;

    unsafe { std::env::set_var(TEST_VAR, OsStr::from_bytes(&[0x66, 0x6f, 0x80])) };

    let result = load_credential(TEST_VAR);

    unsafe { std::env::remove_var(TEST_VAR) };

    let err = result.expect_err("non-unicode credential must be rejected");
    assert!(err.to_string().contains(TEST_VAR));
}

/// **VALUE**: The header value is `Bearer <key>` for both environment and placeholder keys.
///
/// **WHY THIS MATTERS**: This string is the only thing the inference API authenticates on.
/// A missing space or a redacted value here fails every run with a 401.
#[test]
fn given_credentials_when_bearer_header_value_built_then_prefixes_bearer() {
    let from_env = Credential::from_env_value(Some(String::from("abc123")));
    let placeholder = Credential::from_env_value(None);

    assert_eq!(from_env.bearer_header_value(), "Bearer abc123");
    assert_eq!(placeholder.bearer_header_value(), "Bearer your_api_key_here");
}
