//! Host-injectable receive-script generation
//!
//! The host shell cannot call into the rendering context directly;
//! only the reverse direction has a native hook. To push a message in,
//! the host executes script text inside the rendering context via its
//! own injection facility. This module builds that text.

use crate::codec::{CodecError, JsonCodec};
use shellbridge_core::{DEFAULT_RECEIVE_SLOT, Message};

/// Build script text that hands `message` to the receive entry point
/// registered under [`DEFAULT_RECEIVE_SLOT`].
pub fn receive_script(message: &Message) -> Result<String, CodecError> {
    receive_script_for_slot(message, DEFAULT_RECEIVE_SLOT)
}

/// Build script text targeting a custom global slot name.
///
/// The message is re-embedded as a compact JSON literal. The try/catch
/// guards the race where the host executes the script before the
/// bridge has registered its handler: the failure is reported to the
/// console and never raised to the host's injection facility.
pub fn receive_script_for_slot(message: &Message, slot: &str) -> Result<String, CodecError> {
    let serialized = JsonCodec::new().encode(message)?;
    Ok(format!(
        "try {{\n    window.{slot}({serialized})\n}} catch {{\n    console.error(\"{slot} not initiated\")\n}}\n"
    ))
}

#[cfg(test)]
#[path = "script/script_tests.rs"]
mod script_tests;
