use crate::PLACEHOLDER_API_KEY;
use crate::credential::detect_placeholder;

#[test]
fn given_documented_placeholder_when_checked_then_detected() {
    assert_eq!(detect_placeholder(PLACEHOLDER_API_KEY), Some("your_api_key"));
}

#[test]
fn given_placeholder_variants_when_checked_then_detected() {
    assert_eq!(detect_placeholder("YOUR-API-KEY"), Some("your-api-key"));
    assert_eq!(detect_placeholder("<your token>"), Some("<your...>"));
    assert_eq!(detect_placeholder("hf_xxxxxxxx"), Some("xxx"));
    assert_eq!(detect_placeholder("<token>"), Some("<...>"));
}

/// **BUG THIS CATCHES**: Would catch an over-eager pattern that flags real Hugging Face
/// tokens and fills the log with bogus warnings.
#[test]
fn given_realistic_token_when_checked_then_not_detected() {
    assert_eq!(detect_placeholder("hf_aBcDeFgHiJkLmNoPqRsTuVwYz0123456"), None);
    assert_eq!(detect_placeholder("abc123"), None);
}
