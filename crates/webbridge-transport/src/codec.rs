//! JSON text codec for wire frames

use serde::{Serialize, de::DeserializeOwned};
use thiserror::Error;
use webbridge_core::BridgeError;

/// Errors that can occur during encoding/decoding
#[derive(Error, Debug)]
pub enum CodecError {
    #[error("serialization error: {0}")]
    Serialization(String),

    #[error("deserialization error: {0}")]
    Deserialization(String),

    #[error("invalid format: {0}")]
    InvalidFormat(String),
}

impl From<serde_json::Error> for CodecError {
    fn from(err: serde_json::Error) -> Self {
        if err.is_data() || err.is_syntax() || err.is_eof() {
            CodecError::Deserialization(err.to_string())
        } else {
            CodecError::Serialization(err.to_string())
        }
    }
}

impl From<CodecError> for BridgeError {
    fn from(err: CodecError) -> Self {
        match err {
            CodecError::Serialization(msg) => BridgeError::Serialization(msg),
            CodecError::Deserialization(msg) | CodecError::InvalidFormat(msg) => {
                BridgeError::MalformedEnvelope(msg)
            }
        }
    }
}

/// JSON codec for the text frames the transport carries
///
/// The wire representation is always text; both sides of the bridge share
/// only the JSON structured-data subset (no cycles, no functions).
#[derive(Debug, Clone, Default)]
pub struct JsonCodec {
    /// Whether to pretty-print output (default: false for efficiency)
    pretty: bool,
}

impl JsonCodec {
    /// Create a new JSON codec
    pub fn new() -> Self {
        Self { pretty: false }
    }

    /// Create a JSON codec that pretty-prints output
    pub fn pretty() -> Self {
        Self { pretty: true }
    }

    /// Encode a value to a JSON string
    pub fn encode_string<T: Serialize>(&self, value: &T) -> Result<String, CodecError> {
        if self.pretty {
            serde_json::to_string_pretty(value).map_err(Into::into)
        } else {
            serde_json::to_string(value).map_err(Into::into)
        }
    }

    /// Decode a JSON string to a value
    pub fn decode_str<T: DeserializeOwned>(&self, data: &str) -> Result<T, CodecError> {
        serde_json::from_str(data).map_err(Into::into)
    }
}
