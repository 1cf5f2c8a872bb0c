#![allow(non_snake_case)]

use super::*;
use serde_json::{Value, json};

fn constant_handler(value: Value) -> impl MethodHandler {
    move |_: Value| {
        let value = value.clone();
        async move { Ok(value) }
    }
}

#[test]
fn MethodRegistry___register___installs_handler() {
    let registry = MethodRegistry::new();

    registry
        .register("page.getState", constant_handler(json!(1)))
        .unwrap();

    assert!(registry.contains("page.getState"));
}

#[tokio::test]
async fn MethodRegistry___register___same_name_twice_keeps_latest() {
    let registry = MethodRegistry::new();

    registry
        .register("page.echo", constant_handler(json!("first")))
        .unwrap();
    registry
        .register("page.echo", constant_handler(json!("second")))
        .unwrap();

    let handler = registry.get("page.echo").unwrap();
    let result = handler.call(Value::Null).await.unwrap();

    assert_eq!(result, json!("second"));
    assert_eq!(
        registry
            .method_names()
            .iter()
            .filter(|n| *n == "page.echo")
            .count(),
        1
    );
}

#[test]
fn MethodRegistry___register___rejects_reserved_name() {
    let registry = MethodRegistry::new();

    let result = registry.register(CAPABILITIES_METHOD, constant_handler(json!(null)));

    assert!(matches!(result, Err(BridgeError::ReservedMethod(_))));
    assert!(!registry.contains(CAPABILITIES_METHOD));
}

#[test]
fn MethodRegistry___register___rejects_empty_name() {
    let registry = MethodRegistry::new();

    let result = registry.register("", constant_handler(json!(null)));

    assert!(matches!(result, Err(BridgeError::InvalidMethodName(_))));
}

#[test]
fn MethodRegistry___unregister___removes_handler() {
    let registry = MethodRegistry::new();
    registry
        .register("h5.getInfo", constant_handler(json!(null)))
        .unwrap();

    assert!(registry.unregister("h5.getInfo"));
    assert!(!registry.contains("h5.getInfo"));
    assert!(!registry.unregister("h5.getInfo"));
}

#[test]
fn MethodRegistry___method_names___always_includes_builtin() {
    let registry = MethodRegistry::new();

    assert_eq!(registry.method_names(), vec![CAPABILITIES_METHOD]);
}

#[test]
fn MethodRegistry___method_names___sorted_snapshot() {
    let registry = MethodRegistry::new();
    registry
        .register("page.echo", constant_handler(json!(null)))
        .unwrap();
    registry
        .register("h5.getInfo", constant_handler(json!(null)))
        .unwrap();

    let names = registry.method_names();

    assert_eq!(names, vec!["getCapabilities", "h5.getInfo", "page.echo"]);
}

#[test]
fn MethodRegistry___method_names___recomputed_per_call() {
    let registry = MethodRegistry::new();
    registry
        .register("page.echo", constant_handler(json!(null)))
        .unwrap();
    let before = registry.method_names();

    registry.unregister("page.echo");
    let after = registry.method_names();

    assert!(before.contains(&"page.echo".to_string()));
    assert!(!after.contains(&"page.echo".to_string()));
}

#[test]
fn MethodRegistry___clear___drops_everything_but_snapshot_keeps_builtin() {
    let registry = MethodRegistry::new();
    registry
        .register("page.echo", constant_handler(json!(null)))
        .unwrap();

    registry.clear();

    assert_eq!(registry.method_names(), vec![CAPABILITIES_METHOD]);
}
