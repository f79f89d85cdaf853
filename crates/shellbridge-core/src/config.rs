//! Bridge configuration types

use crate::error::{BridgeError, BridgeResult};
use serde::{Deserialize, Serialize};

/// Configuration for one bridge instance
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BridgeConfig {
    /// Development-mode flag
    ///
    /// Gates the pretty-printed directional diagnostics only; it never
    /// changes message behavior.
    #[serde(default)]
    pub debug: bool,

    /// Global slot name the generated receive script calls
    #[serde(default = "default_receive_slot")]
    pub receive_slot: String,
}

fn default_receive_slot() -> String {
    crate::DEFAULT_RECEIVE_SLOT.to_string()
}

impl Default for BridgeConfig {
    fn default() -> Self {
        Self {
            debug: false,
            receive_slot: default_receive_slot(),
        }
    }
}

impl BridgeConfig {
    /// Create a new default configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a configuration with the development flag set
    pub fn development() -> Self {
        Self {
            debug: true,
            ..Self::default()
        }
    }

    /// Create configuration from JSON bytes
    ///
    /// Empty input yields the default configuration.
    pub fn from_json(bytes: &[u8]) -> BridgeResult<Self> {
        if bytes.is_empty() {
            return Ok(Self::default());
        }
        serde_json::from_slice(bytes).map_err(|err| BridgeError::Config(err.to_string()))
    }
}
