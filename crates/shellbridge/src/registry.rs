//! Registration slot for the receive-from-host entry point

use parking_lot::RwLock;
use shellbridge_core::Message;

/// Handler installed by the bridge and invoked on behalf of the host
pub type ReceiveHandler = Box<dyn Fn(Message) + Send + Sync>;

/// Singly-owned slot through which the host hands messages to the
/// rendering context
///
/// Whoever owns the rendering context's startup sequence creates one
/// registry and passes it to both sides; there is no ambient global.
/// The slot lives as long as the rendering context and is never torn
/// down, only replaced.
pub struct ReceiveRegistry {
    handler: RwLock<Option<ReceiveHandler>>,
}

impl ReceiveRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self {
            handler: RwLock::new(None),
        }
    }

    /// Install the receive handler, replacing any previous one
    pub fn install(&self, handler: impl Fn(Message) + Send + Sync + 'static) {
        let mut guard = self.handler.write();
        *guard = Some(Box::new(handler));
    }

    /// True once a handler has been installed
    pub fn is_installed(&self) -> bool {
        self.handler.read().is_some()
    }

    /// Hand one host-originated message to the installed handler
    ///
    /// A missing handler means the host raced ahead of bridge startup.
    /// The message is dropped with a diagnostic, mirroring the guarded
    /// block in the injected script; the host's call path never fails.
    pub fn dispatch(&self, message: Message) {
        let guard = self.handler.read();
        match guard.as_ref() {
            Some(handler) => handler(message),
            None => {
                tracing::warn!(
                    target: "shellbridge",
                    kind = %message.kind(),
                    "receive handler not initiated; dropping inbound message"
                );
            }
        }
    }
}

impl Default for ReceiveRegistry {
    fn default() -> Self {
        Self::new()
    }
}
