//! Error types for the bridge crates

use thiserror::Error;

/// Result type alias for bridge operations
pub type BridgeResult<T> = Result<T, BridgeError>;

/// Error type for bridge operations
///
/// The bridge is deliberately permissive: a missing host transport and
/// a missing receive handler are tolerated silently, so the only
/// errors that exist are local ones.
#[derive(Error, Debug)]
pub enum BridgeError {
    /// Message could not be serialized or deserialized
    #[error("serialization error: {0}")]
    Serialization(String),

    /// Configuration could not be parsed
    #[error("configuration error: {0}")]
    Config(String),
}

impl From<serde_json::Error> for BridgeError {
    fn from(err: serde_json::Error) -> Self {
        BridgeError::Serialization(err.to_string())
    }
}
