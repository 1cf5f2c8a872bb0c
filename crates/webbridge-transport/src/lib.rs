//! webbridge-transport - Wire envelope, JSON codec, and transport boundary
//!
//! Provides:
//! - [`Envelope`] - the tagged call/result/error/event wire model
//! - [`JsonCodec`] - text-frame encoding shared by both sides
//! - [`Transport`] - the one-way frame-delivery seam embedders implement

mod codec;
mod envelope;
mod transport;

pub use codec::{CodecError, JsonCodec};
pub use envelope::{Envelope, ErrorBody};
pub use transport::{ChannelTransport, Transport, TransportError};
