//! Fire-and-forget event delivery
//!
//! Events share the transport with calls but bypass correlation entirely:
//! there is no pending entry, no reply, and no error channel back to the
//! emitter. Listener failures are only locally observable.

use parking_lot::RwLock;
use serde_json::Value;
use std::collections::HashMap;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use webbridge_core::BridgeResult;

/// Handle identifying one registered listener
///
/// Rust closures are not comparable, so removal goes through the token
/// returned at registration rather than the callback value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ListenerToken(u64);

/// Callback invoked with the payload of an incoming event
pub type EventCallback = Arc<dyn Fn(&Value) -> BridgeResult<()> + Send + Sync>;

struct Listener {
    token: ListenerToken,
    callback: EventCallback,
}

/// Per-side pub/sub table for incoming events
#[derive(Default)]
pub struct EventBus {
    listeners: RwLock<HashMap<String, Vec<Listener>>>,
    next_token: AtomicU64,
}

impl EventBus {
    /// Create an empty event bus
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a listener; listeners for one name fire in registration order
    ///
    /// Additive: multiple listeners per name coexist, no replacement.
    pub fn on<F>(&self, name: impl Into<String>, callback: F) -> ListenerToken
    where
        F: Fn(&Value) -> BridgeResult<()> + Send + Sync + 'static,
    {
        let token = ListenerToken(self.next_token.fetch_add(1, Ordering::SeqCst));
        self.listeners
            .write()
            .entry(name.into())
            .or_default()
            .push(Listener {
                token,
                callback: Arc::new(callback),
            });
        token
    }

    /// Remove the listener registered under `token`; returns whether it existed
    pub fn off(&self, name: &str, token: ListenerToken) -> bool {
        let mut listeners = self.listeners.write();
        let Some(entries) = listeners.get_mut(name) else {
            return false;
        };
        let before = entries.len();
        entries.retain(|l| l.token != token);
        let removed = entries.len() < before;
        if entries.is_empty() {
            listeners.remove(name);
        }
        removed
    }

    /// Deliver an incoming event to every listener for `name`
    ///
    /// Listeners run in registration order; a failing listener is logged and
    /// does not stop the rest. Zero listeners is a no-op, not an error.
    pub fn deliver(&self, name: &str, payload: &Value) {
        let snapshot: Vec<(ListenerToken, EventCallback)> = {
            let listeners = self.listeners.read();
            match listeners.get(name) {
                Some(entries) => entries
                    .iter()
                    .map(|l| (l.token, l.callback.clone()))
                    .collect(),
                None => Vec::new(),
            }
        };

        if snapshot.is_empty() {
            tracing::trace!(event = %name, "no listeners for event");
            return;
        }

        for (token, callback) in snapshot {
            if let Err(err) = callback(payload) {
                tracing::warn!(event = %name, ?token, error = %err, "event listener failed");
            }
        }
    }

    /// Number of listeners currently registered for `name`
    pub fn listener_count(&self, name: &str) -> usize {
        self.listeners.read().get(name).map_or(0, Vec::len)
    }

    /// Drop all listeners (session teardown)
    pub fn clear(&self) {
        self.listeners.write().clear();
    }
}
