//! Local event fan-out for inbound messages

use parking_lot::RwLock;
use shellbridge_core::Message;
use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};

/// Listener invoked for each message dispatched under its event name
pub type Listener = Box<dyn Fn(&Message) + Send + Sync>;

/// Handle identifying one subscription
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

/// One-to-many fan-out bus, the document-level custom-event surface
/// of the rendering context
///
/// Dispatch is synchronous: every listener subscribed under the event
/// name runs before `dispatch` returns. Listeners must not subscribe
/// or unsubscribe from inside a dispatch.
pub struct EventBus {
    listeners: RwLock<HashMap<String, Vec<(SubscriptionId, Listener)>>>,
    next_id: AtomicU64,
}

impl EventBus {
    /// Create an empty bus
    pub fn new() -> Self {
        Self {
            listeners: RwLock::new(HashMap::new()),
            next_id: AtomicU64::new(0),
        }
    }

    /// Subscribe a listener under an event name
    pub fn subscribe(
        &self,
        event: impl Into<String>,
        listener: impl Fn(&Message) + Send + Sync + 'static,
    ) -> SubscriptionId {
        let id = SubscriptionId(self.next_id.fetch_add(1, Ordering::SeqCst));
        self.listeners
            .write()
            .entry(event.into())
            .or_default()
            .push((id, Box::new(listener)));
        id
    }

    /// Remove a subscription; unknown ids are ignored
    pub fn unsubscribe(&self, id: SubscriptionId) {
        let mut listeners = self.listeners.write();
        for entries in listeners.values_mut() {
            entries.retain(|(entry_id, _)| *entry_id != id);
        }
    }

    /// Invoke every listener subscribed under `event`
    ///
    /// Returns the number of listeners that ran.
    pub fn dispatch(&self, event: &str, message: &Message) -> usize {
        let listeners = self.listeners.read();
        match listeners.get(event) {
            Some(entries) => {
                for (_, listener) in entries {
                    listener(message);
                }
                entries.len()
            }
            None => 0,
        }
    }

    /// Number of live subscriptions under `event`
    pub fn subscriber_count(&self, event: &str) -> usize {
        self.listeners
            .read()
            .get(event)
            .map_or(0, |entries| entries.len())
    }
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new()
    }
}
