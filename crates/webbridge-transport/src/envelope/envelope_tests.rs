#![allow(non_snake_case)]

use super::*;
use serde_json::json;

// Constructor and accessor tests

#[test]
fn Envelope___call___carries_id_name_and_payload() {
    let env = Envelope::call(1, "h5.getInfo", json!({"detail": true}));

    assert_eq!(env.correlation_id(), Some(1));
    assert_eq!(env.name(), Some("h5.getInfo"));
}

#[test]
fn Envelope___event___has_no_correlation_id() {
    let env = Envelope::event("page.ready", json!({"ts": 1_700_000_000_000u64}));

    assert_eq!(env.correlation_id(), None);
    assert_eq!(env.name(), Some("page.ready"));
}

#[test]
fn Envelope___result___has_no_name() {
    let env = Envelope::result(7, json!(null));

    assert_eq!(env.correlation_id(), Some(7));
    assert_eq!(env.name(), None);
}

// Wire round-trip tests, one per kind

#[test]
fn Envelope___to_wire_from_wire___call_roundtrips() {
    let original = Envelope::call(42, "page.echo", json!({"message": "hi"}));

    let frame = original.to_wire().unwrap();
    let decoded = Envelope::from_wire(&frame).unwrap();

    assert_eq!(decoded, original);
}

#[test]
fn Envelope___to_wire_from_wire___result_roundtrips() {
    let original = Envelope::result(42, json!(["a", "b"]));

    let decoded = Envelope::from_wire(&original.to_wire().unwrap()).unwrap();

    assert_eq!(decoded, original);
}

#[test]
fn Envelope___to_wire_from_wire___error_roundtrips() {
    let original = Envelope::error(9, ErrorBody::new("MethodNotFound", "no such method"));

    let decoded = Envelope::from_wire(&original.to_wire().unwrap()).unwrap();

    assert_eq!(decoded, original);
}

#[test]
fn Envelope___to_wire_from_wire___event_roundtrips() {
    let original = Envelope::event("h5.pushMessage", json!({"from": "app1"}));

    let decoded = Envelope::from_wire(&original.to_wire().unwrap()).unwrap();

    assert_eq!(decoded, original);
}

// Wire shape tests

#[test]
fn Envelope___to_wire___uses_lowercase_kind_tag() {
    let frame = Envelope::call(1, "a.b", json!(null)).to_wire().unwrap();
    let value: serde_json::Value = serde_json::from_str(&frame).unwrap();

    assert_eq!(value["kind"], "call");
    assert_eq!(value["id"], 1);
    assert_eq!(value["name"], "a.b");
}

#[test]
fn Envelope___from_wire___missing_payload_defaults_to_null() {
    let env = Envelope::from_wire(r#"{"kind":"call","id":3,"name":"a.b"}"#).unwrap();

    assert_eq!(env, Envelope::call(3, "a.b", serde_json::Value::Null));
}

// Malformed frame tests

#[test]
fn Envelope___from_wire___unknown_kind_fails() {
    let result = Envelope::from_wire(r#"{"kind":"subscribe","id":1,"name":"a.b"}"#);

    assert!(matches!(result, Err(CodecError::Deserialization(_))));
}

#[test]
fn Envelope___from_wire___missing_id_fails() {
    let result = Envelope::from_wire(r#"{"kind":"result","payload":null}"#);

    assert!(result.is_err());
}

#[test]
fn Envelope___from_wire___empty_name_fails() {
    let result = Envelope::from_wire(r#"{"kind":"event","name":"","payload":null}"#);

    assert!(matches!(result, Err(CodecError::InvalidFormat(_))));
}

#[test]
fn Envelope___from_wire___not_json_fails() {
    let result = Envelope::from_wire("not an envelope");

    assert!(result.is_err());
}

// ErrorBody tests

#[test]
fn ErrorBody___from_error___uses_wire_code() {
    let body = ErrorBody::from_error(&BridgeError::MethodNotFound("app.getInfo".into()));

    assert_eq!(body.code, "MethodNotFound");
    assert!(body.message.contains("app.getInfo"));
}

#[test]
fn ErrorBody___to_error___roundtrips_through_wire_codes() {
    let body = ErrorBody::new("Timeout", "anything");

    assert_eq!(body.to_error(), BridgeError::Timeout);
}

#[test]
fn ErrorBody___from_error___preserves_custom_handler_code() {
    let err = BridgeError::HandlerFailure {
        code: "QuotaExceeded".into(),
        message: "too many widgets".into(),
    };

    let body = ErrorBody::from_error(&err);

    assert_eq!(body.code, "QuotaExceeded");
    assert_eq!(body.to_error(), err);
}
