//! webbridge-core - Error taxonomy, configuration, and handler types
//!
//! This crate provides the foundational types for the webbridge messaging
//! bridge:
//! - [`BridgeError`] for the bridge's error taxonomy, with stable wire codes
//! - [`BridgeConfig`] for per-session tuning (timeouts, pending ceiling)
//! - [`MethodHandler`] for asynchronous named method handlers

mod config;
mod error;
mod handler;

pub use config::BridgeConfig;
pub use error::{BridgeError, BridgeResult, wire_codes};
pub use handler::{HandlerFuture, MethodHandler, failure_parts};

/// Reserved name of the built-in capability introspection method
///
/// Always registered; consumer registrations under this name are rejected
/// with [`BridgeError::ReservedMethod`].
pub const CAPABILITIES_METHOD: &str = "getCapabilities";

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::{
        BridgeConfig, BridgeError, BridgeResult, CAPABILITIES_METHOD, MethodHandler,
    };
}
