//! Transport boundary
//!
//! The bridge needs exactly one primitive from its embedder: deliver one
//! opaque text frame to the peer. The concrete mechanism (a WebView
//! `postMessage` callback, an injected script handle, a pipe) lives outside
//! this workspace; embedders implement [`Transport`] for sending and feed
//! received frames into `Bridge::handle_incoming`.

use async_trait::async_trait;
use thiserror::Error;
use tokio::sync::mpsc;

/// Errors raised by a transport when a frame cannot be carried
#[derive(Error, Debug)]
pub enum TransportError {
    /// The underlying channel is gone; no further frames can be delivered
    #[error("transport channel closed")]
    Closed,

    /// The transport failed for a mechanism-specific reason
    #[error("transport send failed: {0}")]
    Send(String),
}

/// One-way frame delivery to the peer context
#[async_trait]
pub trait Transport: Send + Sync + 'static {
    /// Deliver one serialized envelope to the peer
    ///
    /// Must not block on the peer processing the frame; completion means the
    /// frame was handed to the underlying channel, nothing more.
    async fn send(&self, frame: String) -> Result<(), TransportError>;
}

/// In-process transport over an unbounded tokio channel
///
/// Useful for tests and for hosts that funnel frames through their own pump
/// task. The receiving half is returned at construction; the embedder drains
/// it into the peer bridge's `handle_incoming`.
pub struct ChannelTransport {
    tx: mpsc::UnboundedSender<String>,
}

impl ChannelTransport {
    /// Create a transport and the receiver its frames arrive on
    pub fn new() -> (Self, mpsc::UnboundedReceiver<String>) {
        let (tx, rx) = mpsc::unbounded_channel();
        (Self { tx }, rx)
    }
}

#[async_trait]
impl Transport for ChannelTransport {
    async fn send(&self, frame: String) -> Result<(), TransportError> {
        self.tx.send(frame).map_err(|_| TransportError::Closed)
    }
}
