//! Directional entry points between the rendering context and the host

use crate::events::EventBus;
use crate::registry::ReceiveRegistry;
use shellbridge_core::{BridgeConfig, BridgeResult, Message, PING_EVENT};
use shellbridge_transport::JsonCodec;
use std::sync::Arc;

/// Opaque deliver-string channel into the host shell
///
/// The host's native postMessage facility. Presence is optional: a
/// bridge without one is valid and drops outbound messages, so the
/// same build runs in a plain browser during local development.
pub trait HostTransport: Send + Sync {
    /// Deliver one serialized message to the host shell
    fn deliver(&self, payload: &str);
}

/// Two-way message bridge for one rendering context
///
/// Messages are transient values: serialized and handed off on the way
/// out, republished on the local bus on the way in. The bridge holds
/// no queue and tracks no acknowledgements.
pub struct Bridge {
    transport: Option<Arc<dyn HostTransport>>,
    bus: Arc<EventBus>,
    config: BridgeConfig,
    codec: JsonCodec,
}

impl Bridge {
    /// Create a bridge with no host transport
    pub fn new(config: BridgeConfig) -> Self {
        Self {
            transport: None,
            bus: Arc::new(EventBus::new()),
            config,
            codec: JsonCodec::new(),
        }
    }

    /// Attach the host's deliver-string channel
    pub fn with_transport(mut self, transport: Arc<dyn HostTransport>) -> Self {
        self.transport = Some(transport);
        self
    }

    /// Local event bus carrying inbound messages under [`PING_EVENT`]
    pub fn bus(&self) -> &Arc<EventBus> {
        &self.bus
    }

    /// Bridge configuration
    pub fn config(&self) -> &BridgeConfig {
        &self.config
    }

    /// Send a message out to the host shell
    ///
    /// With no transport attached this is a silent no-op; nothing is
    /// queued and no failure is raised. Errs only if the message
    /// cannot be serialized.
    pub fn send_to_host(&self, message: &Message) -> BridgeResult<()> {
        let serialized = self.codec.encode(message)?;

        if self.config.debug {
            self.log_outbound(&serialized);
        }

        if let Some(transport) = &self.transport {
            transport.deliver(&serialized);
        }
        Ok(())
    }

    /// Accept a message pushed in by the host shell
    ///
    /// The caller is expected to have constructed the message from
    /// trusted host-originated data; no re-validation happens here.
    /// The message is republished on the bus under [`PING_EVENT`] so
    /// any number of local listeners can observe it.
    pub fn receive_from_host(&self, message: Message) {
        if self.config.debug {
            self.log_inbound(&message);
        }

        self.bus.dispatch(PING_EVENT, &message);
    }

    /// Install [`Bridge::receive_from_host`] as the registry's handler
    ///
    /// Must run once during startup, before the host pushes its first
    /// message. Installing again replaces the previous handler;
    /// registrations never accumulate.
    pub fn install_receive_handler(self: &Arc<Self>, registry: &ReceiveRegistry) {
        let bridge = Arc::clone(self);
        registry.install(move |message| bridge.receive_from_host(message));
    }

    // Outbound diagnostics re-parse the wire string, so what is logged
    // is exactly what crossed the boundary. The inbound path logs the
    // structured value it already holds.
    fn log_outbound(&self, serialized: &str) {
        let pretty = self
            .codec
            .decode::<serde_json::Value>(serialized)
            .and_then(|value| JsonCodec::pretty().encode(&value));
        if let Ok(pretty) = pretty {
            tracing::debug!(target: "shellbridge", "rendering -> host:\n{pretty}");
        }
    }

    fn log_inbound(&self, message: &Message) {
        if let Ok(pretty) = JsonCodec::pretty().encode(message) {
            tracing::debug!(target: "shellbridge", "host -> rendering:\n{pretty}");
        }
    }
}
