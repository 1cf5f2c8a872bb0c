//! Method handler abstraction
//!
//! A registered method is an asynchronous function from a JSON payload to a
//! JSON payload or a [`BridgeError`]. Handlers are installed late-bound by
//! name and resolved at call time, so the table holds trait objects rather
//! than anything known at compile time.

use crate::{BridgeError, BridgeResult};
use serde_json::Value;
use std::future::Future;
use std::pin::Pin;

/// Boxed future returned by a method handler
pub type HandlerFuture = Pin<Box<dyn Future<Output = BridgeResult<Value>> + Send>>;

/// An asynchronous method handler
///
/// Implemented automatically for any `Fn(Value) -> impl Future` closure, so
/// consumers normally register plain async closures:
///
/// ```ignore
/// bridge.register("page.echo", |payload: Value| async move {
///     Ok(serde_json::json!({ "reply": payload }))
/// })?;
/// ```
pub trait MethodHandler: Send + Sync + 'static {
    /// Invoke the handler with the call payload
    fn call(&self, payload: Value) -> HandlerFuture;
}

impl<F, Fut> MethodHandler for F
where
    F: Fn(Value) -> Fut + Send + Sync + 'static,
    Fut: Future<Output = BridgeResult<Value>> + Send + 'static,
{
    fn call(&self, payload: Value) -> HandlerFuture {
        Box::pin(self(payload))
    }
}

/// Convert a handler failure into the `{code, message}` pair carried by an
/// `error` reply envelope
pub fn failure_parts(err: &BridgeError) -> (String, String) {
    match err {
        BridgeError::HandlerFailure { code, message } => (code.clone(), message.clone()),
        other => (other.wire_code().to_string(), other.to_string()),
    }
}
