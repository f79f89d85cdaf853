//! JSON codec for the string wire format

use serde::{Serialize, de::DeserializeOwned};
use shellbridge_core::BridgeError;
use thiserror::Error;

/// Errors that can occur during encoding/decoding
#[derive(Error, Debug)]
pub enum CodecError {
    #[error("serialization error: {0}")]
    Serialization(String),

    #[error("deserialization error: {0}")]
    Deserialization(String),
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
        BridgeError::Serialization(err.to_string())
    }
}

/// JSON codec for values crossing the host boundary
///
/// The boundary carries strings, never bytes, so this codec works at
/// the string level. The compact form is the wire contract; the pretty
/// form exists only for development-mode diagnostics.
#[derive(Debug, Clone, Default)]
pub struct JsonCodec {
    /// Whether to pretty-print output (default: false for the wire)
    pretty: bool,
}

impl JsonCodec {
    /// Create a new wire codec (compact output)
    pub fn new() -> Self {
        Self { pretty: false }
    }

    /// Create a codec that pretty-prints output
    pub fn pretty() -> Self {
        Self { pretty: true }
    }

    /// Encode a value to a JSON string
    pub fn encode<T: Serialize>(&self, value: &T) -> Result<String, CodecError> {
        if self.pretty {
            serde_json::to_string_pretty(value).map_err(Into::into)
        } else {
            serde_json::to_string(value).map_err(Into::into)
        }
    }

    /// Decode a JSON string to a value
    pub fn decode<T: DeserializeOwned>(&self, data: &str) -> Result<T, CodecError> {
        serde_json::from_str(data).map_err(Into::into)
    }
}
