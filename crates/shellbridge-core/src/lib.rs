//! shellbridge-core - Protocol definitions for the host/rendering bridge
//!
//! This crate provides the foundational types for the message bridge:
//! - [`Message`] closed set of variants crossing the host boundary
//! - [`Platform`] host platform enumeration
//! - [`is_platform_message`] / [`is_share_icon_message`] narrowing predicates
//! - [`BridgeError`] for error handling
//! - [`BridgeConfig`] for bridge configuration

mod config;
mod error;
mod message;

pub use config::BridgeConfig;
pub use error::{BridgeError, BridgeResult};
pub use message::{Message, MessageKind, Platform, is_platform_message, is_share_icon_message};

/// Name of the local event the inbound path republishes messages under.
///
/// Part of the contract with rendering-context listeners; the host
/// never sees it.
pub const PING_EVENT: &str = "editionsPing";

/// Default global slot the host-injected receive script calls.
///
/// The host shell and the rendering context must agree on this name
/// out of band; override it via [`BridgeConfig::receive_slot`].
pub const DEFAULT_RECEIVE_SLOT: &str = "__shellbridgeReceive";

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::{
        BridgeConfig, BridgeError, BridgeResult, Message, MessageKind, Platform,
        is_platform_message, is_share_icon_message,
    };
}
