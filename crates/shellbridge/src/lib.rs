//! # shellbridge
//!
//! A bidirectional message bridge between a native host shell and an
//! embedded rendering surface (a WebView-style content view). Only
//! string-serializable payloads cross the boundary, so the bridge is a
//! typed protocol plus a JSON wire codec plus two directional entry
//! points:
//! - outbound, rendering context to host shell, via [`HostTransport`]
//! - inbound, host shell to rendering context, via [`ReceiveRegistry`]
//!   and local fan-out on the [`EventBus`]
//!
//! ## Quick Start
//!
//! ```ignore
//! use shellbridge::prelude::*;
//! use std::sync::Arc;
//!
//! // Startup: one registry, one bridge, handler installed once.
//! let registry = Arc::new(ReceiveRegistry::new());
//! let bridge = Arc::new(
//!     Bridge::new(BridgeConfig::development()).with_transport(my_transport),
//! );
//! bridge.install_receive_handler(&registry);
//!
//! // Anyone in the rendering context can observe inbound messages.
//! bridge.bus().subscribe(PING_EVENT, |message| {
//!     if let Message::Lightbox { index, .. } = message {
//!         open_lightbox(*index);
//!     }
//! });
//!
//! // Outbound: ask the host for its platform.
//! bridge.send_to_host(&Message::PlatformQuery)?;
//!
//! // Host side: obtain injectable script text for an inbound push.
//! let script = receive_script(&Message::Share)?;
//! host_webview.inject(script);
//! ```
//!
//! ## Crate Structure
//!
//! This is a facade crate that re-exports from:
//! - [`shellbridge_core`] - Protocol types, predicates, config, errors
//! - [`shellbridge_transport`] - JSON codec and receive-script builder

mod bridge;
mod events;
mod registry;

pub use bridge::{Bridge, HostTransport};
pub use events::{EventBus, SubscriptionId};
pub use registry::{ReceiveHandler, ReceiveRegistry};

// Re-export protocol and transport types
pub use shellbridge_core::{
    BridgeConfig, BridgeError, BridgeResult, DEFAULT_RECEIVE_SLOT, Message, MessageKind,
    PING_EVENT, Platform, is_platform_message, is_share_icon_message,
};
pub use shellbridge_transport::{CodecError, JsonCodec, receive_script, receive_script_for_slot};

// Re-export common dependencies that embedding applications need
pub use serde;
pub use serde_json;
pub use tracing;

/// Prelude module for convenient imports.
///
/// Use `use shellbridge::prelude::*;` to import commonly used types.
pub mod prelude {
    pub use crate::{
        Bridge, BridgeConfig, BridgeError, BridgeResult, EventBus, HostTransport, Message,
        MessageKind, PING_EVENT, Platform, ReceiveRegistry, is_platform_message,
        is_share_icon_message, receive_script, receive_script_for_slot,
    };

    // Serde derives (commonly needed around the bridge)
    pub use serde::{Deserialize, Serialize};
}
