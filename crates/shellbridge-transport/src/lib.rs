//! shellbridge-transport - JSON codec and host-script generation
//!
//! This crate provides:
//! - [`JsonCodec`] for the string wire format (compact) and diagnostics (pretty)
//! - [`CodecError`] for encode/decode failures
//! - [`receive_script`] for pushing a message into the rendering context

mod codec;
mod script;

pub use codec::{CodecError, JsonCodec};
pub use script::{receive_script, receive_script_for_slot};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::{CodecError, JsonCodec, receive_script, receive_script_for_slot};
}
