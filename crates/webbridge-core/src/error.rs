//! Error types for the bridge

use thiserror::Error;

/// Result type alias for bridge operations
pub type BridgeResult<T> = Result<T, BridgeError>;

/// Error type for bridge operations
///
/// Variants that can travel across the bridge as an `error` reply carry a
/// stable wire code (see [`BridgeError::wire_code`]). The remaining variants
/// are caller-side only and never appear on the wire.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum BridgeError {
    /// Incoming frame could not be decoded as an envelope
    ///
    /// Logged and dropped at the receiving side; never delivered to a caller.
    #[error("malformed envelope: {0}")]
    MalformedEnvelope(String),

    /// Peer has no handler registered for the requested method
    #[error("method not found: {0}")]
    MethodNotFound(String),

    /// Remote handler failed; carries the structured code and message
    #[error("handler failure ({code}): {message}")]
    HandlerFailure { code: String, message: String },

    /// Caller-side deadline elapsed before a reply arrived
    #[error("call timed out")]
    Timeout,

    /// Session was torn down while the call was outstanding,
    /// or the bridge was already closed when the call was issued
    #[error("bridge closed")]
    BridgeClosed,

    /// Pending-call ceiling reached; caller should back off
    #[error("too many outstanding calls")]
    TooManyOutstandingCalls,

    /// Attempted to register a handler under a reserved built-in name
    #[error("reserved method name: {0}")]
    ReservedMethod(String),

    /// Method or event name is empty or otherwise unusable
    #[error("invalid method name: {0:?}")]
    InvalidMethodName(String),

    /// Serialization/deserialization failure on the sending side
    #[error("serialization error: {0}")]
    Serialization(String),

    /// Transport refused or failed to carry the frame
    #[error("transport error: {0}")]
    Transport(String),
}

/// Wire codes for reply-bearing errors
pub mod wire_codes {
    pub const METHOD_NOT_FOUND: &str = "MethodNotFound";
    pub const HANDLER_FAILURE: &str = "HandlerFailure";
    pub const TIMEOUT: &str = "Timeout";
    pub const BRIDGE_CLOSED: &str = "BridgeClosed";
    pub const TOO_MANY_OUTSTANDING_CALLS: &str = "TooManyOutstandingCalls";
    pub const MALFORMED_ENVELOPE: &str = "MalformedEnvelope";
}

impl BridgeError {
    /// Returns the stable code used when this error is carried in an
    /// `error` reply envelope
    pub fn wire_code(&self) -> &str {
        match self {
            BridgeError::MalformedEnvelope(_) => wire_codes::MALFORMED_ENVELOPE,
            BridgeError::MethodNotFound(_) => wire_codes::METHOD_NOT_FOUND,
            BridgeError::HandlerFailure { code, .. } => code,
            BridgeError::Timeout => wire_codes::TIMEOUT,
            BridgeError::BridgeClosed => wire_codes::BRIDGE_CLOSED,
            BridgeError::TooManyOutstandingCalls => wire_codes::TOO_MANY_OUTSTANDING_CALLS,
            // Local-only variants; a handler returning one of these still
            // needs a structured reply, so they travel as handler failures.
            BridgeError::ReservedMethod(_)
            | BridgeError::InvalidMethodName(_)
            | BridgeError::Serialization(_)
            | BridgeError::Transport(_) => wire_codes::HANDLER_FAILURE,
        }
    }

    /// Reconstruct an error from a wire `{code, message}` pair
    ///
    /// Unrecognized codes decode as [`BridgeError::HandlerFailure`] so that
    /// peers speaking a newer taxonomy still produce a structured error.
    pub fn from_wire(code: &str, message: &str) -> Self {
        match code {
            wire_codes::METHOD_NOT_FOUND => BridgeError::MethodNotFound(message.to_string()),
            wire_codes::TIMEOUT => BridgeError::Timeout,
            wire_codes::BRIDGE_CLOSED => BridgeError::BridgeClosed,
            wire_codes::TOO_MANY_OUTSTANDING_CALLS => BridgeError::TooManyOutstandingCalls,
            wire_codes::MALFORMED_ENVELOPE => {
                BridgeError::MalformedEnvelope(message.to_string())
            }
            other => BridgeError::HandlerFailure {
                code: other.to_string(),
                message: message.to_string(),
            },
        }
    }

    /// Create a handler failure with the default code
    pub fn handler_failure(message: impl Into<String>) -> Self {
        BridgeError::HandlerFailure {
            code: wire_codes::HANDLER_FAILURE.to_string(),
            message: message.into(),
        }
    }
}

impl From<serde_json::Error> for BridgeError {
    fn from(err: serde_json::Error) -> Self {
        BridgeError::Serialization(err.to_string())
    }
}


#[cfg(test)]
#[path = "error/error_parameterized_tests.rs"]
mod error_parameterized_tests;
