// Unit tests for logger initialization
// Tests focus on repeated initialization

use crate::logger::initialize;

/// **VALUE**: Verifies that calling initialize() multiple times doesn't panic or fail.
///
/// **WHY THIS MATTERS**: `main` and tests can both reach the initializer. If the second
/// call errors, fern would refuse to install a second global logger and the run dies
/// before the request is sent.
///
/// **BUG THIS CATCHES**: Would catch if the Once or AtomicBool guards are removed.
#[test]
fn given_logger_initialized_when_called_again_then_returns_ok() {
    // WHEN: Calling initialize twice
    let result1 = initialize();
    let result2 = initialize();

    // THEN: Both return Ok
    assert!(result1.is_ok(), "First initialization should succeed");
    assert!(
        result2.is_ok(),
        "Second initialization should succeed (idempotent)"
    );
}
