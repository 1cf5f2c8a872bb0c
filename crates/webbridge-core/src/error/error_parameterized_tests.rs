#![allow(non_snake_case)]

use super::*;
use test_case::test_case;

// ============================================================================
// Parameterized wire code mapping tests
// ============================================================================

#[test_case(BridgeError::MalformedEnvelope("x".into()), "MalformedEnvelope")]
#[test_case(BridgeError::MethodNotFound("x".into()), "MethodNotFound")]
#[test_case(BridgeError::handler_failure("x"), "HandlerFailure")]
#[test_case(BridgeError::Timeout, "Timeout")]
#[test_case(BridgeError::BridgeClosed, "BridgeClosed")]
#[test_case(BridgeError::TooManyOutstandingCalls, "TooManyOutstandingCalls")]
#[test_case(BridgeError::ReservedMethod("getCapabilities".into()), "HandlerFailure")]
#[test_case(BridgeError::InvalidMethodName(String::new()), "HandlerFailure")]
#[test_case(BridgeError::Serialization("x".into()), "HandlerFailure")]
#[test_case(BridgeError::Transport("x".into()), "HandlerFailure")]
fn BridgeError___variant___maps_to_expected_wire_code(error: BridgeError, expected: &str) {
    assert_eq!(error.wire_code(), expected);
}

// ============================================================================
// Parameterized wire round-trip tests
// ============================================================================

// Every reply-bearing code must survive encode -> decode with the same code.
#[test_case("MethodNotFound")]
#[test_case("HandlerFailure")]
#[test_case("Timeout")]
#[test_case("BridgeClosed")]
#[test_case("TooManyOutstandingCalls")]
#[test_case("MalformedEnvelope")]
fn BridgeError___from_wire___roundtrips_reply_bearing_codes(code: &str) {
    let error = BridgeError::from_wire(code, "message");

    assert_eq!(error.wire_code(), code);
}
