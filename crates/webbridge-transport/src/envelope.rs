//! Wire envelope for bridge messages
//!
//! Every frame crossing the bridge is exactly one envelope: a `call` that
//! expects a reply, a terminal `result` or `error` reply correlated by id, or
//! a fire-and-forget `event`. Calls and events are deliberately separate
//! kinds; unifying them would force reply bookkeeping onto every listener
//! path.

use crate::codec::{CodecError, JsonCodec};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use webbridge_core::BridgeError;

/// Structured error carried by an `error` reply
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorBody {
    /// Stable error code (e.g. "MethodNotFound")
    pub code: String,
    /// Human-readable message
    pub message: String,
}

impl ErrorBody {
    /// Create an error body
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
        }
    }

    /// Build the error body for a [`BridgeError`]
    pub fn from_error(err: &BridgeError) -> Self {
        let (code, message) = webbridge_core::failure_parts(err);
        Self { code, message }
    }

    /// Decode back into a [`BridgeError`]
    pub fn to_error(&self) -> BridgeError {
        BridgeError::from_wire(&self.code, &self.message)
    }
}

/// One bridge message
///
/// Serialized as JSON with a `kind` tag:
///
/// ```json
/// {"kind":"call","id":7,"name":"h5.getInfo","payload":null}
/// {"kind":"result","id":7,"payload":{"page":"app1"}}
/// {"kind":"error","id":7,"error":{"code":"MethodNotFound","message":"..."}}
/// {"kind":"event","name":"page.ready","payload":{"ts":1700000000000}}
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Envelope {
    /// Request expecting exactly one terminal reply with the same id
    Call {
        id: u64,
        name: String,
        #[serde(default)]
        payload: Value,
    },
    /// Successful reply to a call
    Result {
        id: u64,
        #[serde(default)]
        payload: Value,
    },
    /// Failure reply to a call
    Error { id: u64, error: ErrorBody },
    /// Fire-and-forget notification; never correlated, never replied to
    Event {
        name: String,
        #[serde(default)]
        payload: Value,
    },
}

impl Envelope {
    /// Create a call envelope
    pub fn call(id: u64, name: impl Into<String>, payload: Value) -> Self {
        Envelope::Call {
            id,
            name: name.into(),
            payload,
        }
    }

    /// Create a result envelope
    pub fn result(id: u64, payload: Value) -> Self {
        Envelope::Result { id, payload }
    }

    /// Create an error envelope
    pub fn error(id: u64, error: ErrorBody) -> Self {
        Envelope::Error { id, error }
    }

    /// Create an event envelope
    pub fn event(name: impl Into<String>, payload: Value) -> Self {
        Envelope::Event {
            name: name.into(),
            payload,
        }
    }

    /// Correlation id, if this kind carries one
    pub fn correlation_id(&self) -> Option<u64> {
        match self {
            Envelope::Call { id, .. }
            | Envelope::Result { id, .. }
            | Envelope::Error { id, .. } => Some(*id),
            Envelope::Event { .. } => None,
        }
    }

    /// Method or event name, if this kind carries one
    pub fn name(&self) -> Option<&str> {
        match self {
            Envelope::Call { name, .. } | Envelope::Event { name, .. } => Some(name),
            Envelope::Result { .. } | Envelope::Error { .. } => None,
        }
    }

    /// Check structural validity beyond what serde enforces
    ///
    /// Names follow a `namespace.verb` convention, but only non-emptiness is
    /// enforced (the reserved `getCapabilities` carries no dot).
    pub fn validate(&self) -> Result<(), CodecError> {
        if let Some(name) = self.name()
            && name.is_empty()
        {
            return Err(CodecError::InvalidFormat("empty name".to_string()));
        }
        Ok(())
    }

    /// Serialize to a wire frame
    pub fn to_wire(&self) -> Result<String, CodecError> {
        JsonCodec::new().encode_string(self)
    }

    /// Deserialize and validate a wire frame
    ///
    /// Fails with [`CodecError`] on unknown `kind`, missing required fields,
    /// or an empty name. Callers log and drop the frame; a malformed frame
    /// must never disturb other pending calls.
    pub fn from_wire(frame: &str) -> Result<Self, CodecError> {
        let envelope: Envelope = JsonCodec::new().decode_str(frame)?;
        envelope.validate()?;
        Ok(envelope)
    }
}

#[cfg(test)]
#[path = "envelope/envelope_tests.rs"]
mod envelope_tests;
