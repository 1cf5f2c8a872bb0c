//! webbridge-runtime - Method registry, call dispatcher, event bus, and the
//! bridge facade
//!
//! The [`Bridge`] ties the pieces together for one content-view session:
//! - [`MethodRegistry`] - late-bound named async handlers
//! - [`CallDispatcher`] - correlation ids, pending calls, timeouts, teardown
//! - [`EventBus`] - ordered fire-and-forget listener delivery

mod bridge;
mod dispatcher;
mod events;
mod registry;

pub use bridge::Bridge;
pub use dispatcher::CallDispatcher;
pub use events::{EventBus, EventCallback, ListenerToken};
pub use registry::MethodRegistry;
