use crate::HttpStatusCode;

/// **VALUE**: Only a literal 200 counts as a working endpoint.
///
/// **BUG THIS CATCHES**: Would catch a switch to a "any 2xx" success check, which would
/// report 201/204 responses as a working summarization endpoint.
#[test]
fn given_status_codes_when_is_ok_checked_then_only_200_passes() {
    assert!(HttpStatusCode(200).is_ok());
    assert!(!HttpStatusCode(201).is_ok());
    assert!(!HttpStatusCode(204).is_ok());
    assert!(!HttpStatusCode(401).is_ok());
    assert!(!HttpStatusCode(503).is_ok());
}

#[test]
fn given_status_codes_when_categorized_then_ranges_match() {
    assert!(HttpStatusCode(401).is_client_error());
    assert!(HttpStatusCode(401).is_auth_error());
    assert!(HttpStatusCode(403).is_auth_error());
    assert!(!HttpStatusCode(404).is_auth_error());

    assert!(HttpStatusCode(503).is_server_error());
    assert!(HttpStatusCode(503).is_unavailable());
    assert!(!HttpStatusCode(500).is_unavailable());

    assert!(!HttpStatusCode(200).is_client_error());
    assert!(!HttpStatusCode(200).is_server_error());
}

#[test]
fn given_status_code_when_displayed_then_shows_bare_number() {
    assert_eq!(HttpStatusCode(401).to_string(), "401");
}
