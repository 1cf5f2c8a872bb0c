//! Bridge facade
//!
//! One [`Bridge`] instance represents one side of one content-view session.
//! It owns the method registry, the pending-call table, and the event
//! listener table, and wires them to a [`Transport`]. The embedder feeds
//! every frame received from the peer into [`Bridge::handle_incoming`].

use crate::dispatcher::CallDispatcher;
use crate::events::{EventBus, ListenerToken};
use crate::registry::MethodRegistry;
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::sync::Arc;
use std::time::Duration;
use webbridge_core::{
    BridgeConfig, BridgeError, BridgeResult, CAPABILITIES_METHOD, MethodHandler,
};
use webbridge_transport::{Envelope, ErrorBody, Transport, TransportError};

/// One side of a host ↔ web-content messaging session
///
/// Cheap to clone; clones share the same session state. All methods are safe
/// to call from multiple threads. `handle_incoming` must run inside a tokio
/// runtime context because incoming calls are dispatched on spawned tasks.
#[derive(Clone)]
pub struct Bridge {
    inner: Arc<BridgeInner>,
}

struct BridgeInner {
    config: BridgeConfig,
    transport: Arc<dyn Transport>,
    registry: MethodRegistry,
    dispatcher: CallDispatcher,
    events: EventBus,
}

impl Bridge {
    /// Create a bridge with the default configuration
    pub fn new(transport: Arc<dyn Transport>) -> Self {
        Self::with_config(transport, BridgeConfig::default())
    }

    /// Create a bridge with an explicit configuration
    pub fn with_config(transport: Arc<dyn Transport>, config: BridgeConfig) -> Self {
        let dispatcher = CallDispatcher::new(config.max_pending_calls, config.retired_id_window);
        Self {
            inner: Arc::new(BridgeInner {
                config,
                transport,
                registry: MethodRegistry::new(),
                dispatcher,
                events: EventBus::new(),
            }),
        }
    }

    // ------------------------------------------------------------------
    // Method registry
    // ------------------------------------------------------------------

    /// Install a method handler (last-write-wins per name)
    ///
    /// Registering the reserved `getCapabilities` name is rejected with
    /// [`BridgeError::ReservedMethod`].
    pub fn register<H: MethodHandler>(
        &self,
        name: impl Into<String>,
        handler: H,
    ) -> BridgeResult<()> {
        self.inner.registry.register(name, handler)
    }

    /// Remove a method handler; returns whether one was present
    pub fn unregister(&self, name: &str) -> bool {
        self.inner.registry.unregister(name)
    }

    /// Snapshot of this side's registered method names
    pub fn local_capabilities(&self) -> Vec<String> {
        self.inner.registry.method_names()
    }

    // ------------------------------------------------------------------
    // Calls
    // ------------------------------------------------------------------

    /// Invoke a method on the peer with the configured default timeout
    pub async fn invoke(&self, name: &str, payload: Value) -> BridgeResult<Value> {
        let timeout = Duration::from_millis(self.inner.config.default_timeout_ms);
        self.invoke_with_timeout(name, payload, timeout).await
    }

    /// Invoke a method on the peer, suspending until a terminal outcome
    ///
    /// Resolves exactly once: with the peer's result payload, with the
    /// decoded taxonomy error from an `error` reply, with `Timeout` when the
    /// deadline elapses (the peer's handler still runs to completion; its
    /// late reply is discarded), or with `BridgeClosed` on teardown.
    pub async fn invoke_with_timeout(
        &self,
        name: &str,
        payload: Value,
        timeout: Duration,
    ) -> BridgeResult<Value> {
        if name.is_empty() {
            return Err(BridgeError::InvalidMethodName(name.to_string()));
        }

        let (id, rx) = self.inner.dispatcher.begin_call()?;

        let frame = match Envelope::call(id, name, payload).to_wire() {
            Ok(frame) => frame,
            Err(err) => {
                self.inner.dispatcher.discard(id);
                return Err(err.into());
            }
        };
        if let Err(err) = self.inner.transport.send(frame).await {
            self.inner.dispatcher.discard(id);
            return Err(Self::map_transport_error(err));
        }

        match tokio::time::timeout(timeout, rx).await {
            Ok(Ok(outcome)) => outcome,
            // Sender dropped without a terminal outcome: session state is gone.
            Ok(Err(_)) => Err(BridgeError::BridgeClosed),
            Err(_) => {
                self.inner.dispatcher.retire(id);
                Err(BridgeError::Timeout)
            }
        }
    }

    /// Invoke with typed request and response payloads
    pub async fn invoke_typed<T, R>(&self, name: &str, request: &T) -> BridgeResult<R>
    where
        T: Serialize,
        R: DeserializeOwned,
    {
        let payload = serde_json::to_value(request)?;
        let result = self.invoke(name, payload).await?;
        serde_json::from_value(result).map_err(Into::into)
    }

    /// Query the peer's capability descriptor
    ///
    /// This is an ordinary call to the reserved `getCapabilities` method,
    /// answered from the peer's registry snapshot.
    pub async fn get_capabilities(&self) -> BridgeResult<Vec<String>> {
        let result = self.invoke(CAPABILITIES_METHOD, Value::Null).await?;
        serde_json::from_value(result).map_err(Into::into)
    }

    // ------------------------------------------------------------------
    // Events
    // ------------------------------------------------------------------

    /// Emit a fire-and-forget event to the peer
    ///
    /// Only awaits the transport handoff; there is no record of delivery and
    /// never a reply.
    pub async fn emit(&self, name: &str, payload: Value) -> BridgeResult<()> {
        if name.is_empty() {
            return Err(BridgeError::InvalidMethodName(name.to_string()));
        }
        if self.inner.dispatcher.is_closed() {
            return Err(BridgeError::BridgeClosed);
        }

        let frame = Envelope::event(name, payload).to_wire()?;
        self.inner
            .transport
            .send(frame)
            .await
            .map_err(Self::map_transport_error)
    }

    /// Add a listener for incoming events under `name`
    pub fn on<F>(&self, name: impl Into<String>, callback: F) -> ListenerToken
    where
        F: Fn(&Value) -> BridgeResult<()> + Send + Sync + 'static,
    {
        self.inner.events.on(name, callback)
    }

    /// Remove a listener previously added with [`Bridge::on`]
    pub fn off(&self, name: &str, token: ListenerToken) -> bool {
        self.inner.events.off(name, token)
    }

    // ------------------------------------------------------------------
    // Frame delivery and lifecycle
    // ------------------------------------------------------------------

    /// Deliver one frame received from the peer
    ///
    /// This is the transport's receive callback. Malformed frames are logged
    /// and dropped without touching any pending call. Incoming calls are
    /// dispatched on a spawned task so a slow handler never blocks delivery
    /// of other frames.
    pub fn handle_incoming(&self, frame: &str) {
        if self.inner.dispatcher.is_closed() {
            tracing::debug!("dropping frame received after close");
            return;
        }

        let envelope = match Envelope::from_wire(frame) {
            Ok(envelope) => envelope,
            Err(err) => {
                tracing::warn!(error = %err, "dropping malformed frame");
                return;
            }
        };

        match envelope {
            Envelope::Call { id, name, payload } => {
                let bridge = self.clone();
                tokio::spawn(async move {
                    bridge.dispatch_call(id, name, payload).await;
                });
            }
            Envelope::Result { id, payload } => {
                self.inner.dispatcher.complete(id, Ok(payload));
            }
            Envelope::Error { id, error } => {
                self.inner.dispatcher.complete(id, Err(error.to_error()));
            }
            Envelope::Event { name, payload } => {
                self.inner.events.deliver(&name, &payload);
            }
        }
    }

    /// Tear the session down
    ///
    /// Every outstanding call resolves with `BridgeClosed`; the registry and
    /// listener tables are discarded. Idempotent. Callers must not retry on
    /// the same session afterwards.
    pub fn close(&self) {
        if self.inner.dispatcher.is_closed() {
            return;
        }
        tracing::info!("closing bridge session");
        self.inner.dispatcher.close();
        self.inner.registry.clear();
        self.inner.events.clear();
    }

    /// Whether the session has been torn down
    pub fn is_closed(&self) -> bool {
        self.inner.dispatcher.is_closed()
    }

    /// Number of calls currently awaiting a reply
    pub fn pending_calls(&self) -> usize {
        self.inner.dispatcher.pending_count()
    }

    // ------------------------------------------------------------------
    // Internals
    // ------------------------------------------------------------------

    /// Run an incoming call to its terminal reply
    async fn dispatch_call(&self, id: u64, name: String, payload: Value) {
        let outcome = if name == CAPABILITIES_METHOD {
            serde_json::to_value(self.local_capabilities()).map_err(Into::into)
        } else {
            match self.inner.registry.get(&name) {
                None => Err(BridgeError::MethodNotFound(name.clone())),
                // Run the handler on its own task so a panic is contained
                // and reported as a structured failure, never a lost reply.
                Some(handler) => match tokio::spawn(handler.call(payload)).await {
                    Ok(result) => result,
                    Err(join_err) => Err(BridgeError::handler_failure(format!(
                        "handler for {name} panicked: {join_err}"
                    ))),
                },
            }
        };

        let reply = match outcome {
            Ok(value) => Envelope::result(id, value),
            Err(err) => Envelope::error(id, ErrorBody::from_error(&err)),
        };
        self.send_reply(id, reply).await;
    }

    async fn send_reply(&self, id: u64, reply: Envelope) {
        let frame = match reply.to_wire() {
            Ok(frame) => frame,
            Err(err) => {
                // Result payload failed to encode; still owe the caller a
                // terminal reply with this id.
                tracing::warn!(id, error = %err, "reply payload failed to encode");
                let fallback = Envelope::error(
                    id,
                    ErrorBody::from_error(&BridgeError::Serialization(err.to_string())),
                );
                match fallback.to_wire() {
                    Ok(frame) => frame,
                    Err(err) => {
                        tracing::error!(id, error = %err, "failed to encode error reply");
                        return;
                    }
                }
            }
        };
        if let Err(err) = self.inner.transport.send(frame).await {
            tracing::warn!(id, error = %err, "failed to send reply");
        }
    }

    fn map_transport_error(err: TransportError) -> BridgeError {
        match err {
            // A torn-down channel means the session is over.
            TransportError::Closed => BridgeError::BridgeClosed,
            TransportError::Send(msg) => BridgeError::Transport(msg),
        }
    }
}
