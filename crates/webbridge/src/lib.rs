//! # webbridge
//!
//! A messaging bridge between a native host application and web content
//! rendered in an embedded browser view. The two contexts share no address
//! space; everything crosses as one serialized envelope per message over a
//! single logical channel.
//!
//! webbridge provides:
//! - Request/response calls with correlation ids, timeouts, and a pending
//!   ceiling, resolving exactly once even with many calls in flight
//! - A per-side method registry with late-bound registration and the
//!   built-in `getCapabilities` introspection
//! - Fire-and-forget events with ordered, failure-isolated listeners
//! - A typed error taxonomy that survives the wire
//!
//! ## Wiring a bridge
//!
//! The embedder supplies the frame channel: a [`Transport`] for sending and
//! a callback feeding received frames into [`Bridge::handle_incoming`].
//!
//! ```ignore
//! use webbridge::prelude::*;
//! use std::sync::Arc;
//!
//! let (transport, mut outgoing) = ChannelTransport::new();
//! let bridge = Bridge::new(Arc::new(transport));
//!
//! // Handlers the peer can invoke
//! bridge.register("h5.getInfo", |_payload: serde_json::Value| async {
//!     Ok(serde_json::json!({ "page": "app1", "version": "1.0.0" }))
//! })?;
//!
//! // Listen for the peer's events
//! bridge.on("page.ready", |payload| {
//!     tracing::info!(?payload, "page is ready");
//!     Ok(())
//! });
//!
//! // Call the peer and await the correlated reply
//! let info = bridge.invoke("app.getInfo", serde_json::Value::Null).await?;
//!
//! // Session teardown: all outstanding calls reject with BridgeClosed
//! bridge.close();
//! # Ok::<(), webbridge::BridgeError>(())
//! ```
//!
//! ## Crate Structure
//!
//! This is a facade crate that re-exports from:
//! - [`webbridge_core`] - error taxonomy, configuration, handler types
//! - [`webbridge_transport`] - wire envelope, JSON codec, transport seam
//! - [`webbridge_runtime`] - registry, dispatcher, event bus, [`Bridge`]

// Re-export core types
pub use webbridge_core::{
    BridgeConfig, BridgeError, BridgeResult, CAPABILITIES_METHOD, HandlerFuture, MethodHandler,
    wire_codes,
};

// Re-export transport types
pub use webbridge_transport::{
    ChannelTransport, CodecError, Envelope, ErrorBody, JsonCodec, Transport, TransportError,
};

// Re-export runtime types
pub use webbridge_runtime::{Bridge, EventBus, ListenerToken, MethodRegistry};

// Re-export common dependencies that embedders need
pub use serde;
pub use serde_json;
pub use tokio;
pub use tracing;

/// Prelude module for convenient imports.
///
/// Use `use webbridge::prelude::*;` to import commonly used types.
pub mod prelude {
    pub use crate::{
        Bridge, BridgeConfig, BridgeError, BridgeResult, CAPABILITIES_METHOD, ChannelTransport,
        Envelope, ListenerToken, Transport,
    };
}
