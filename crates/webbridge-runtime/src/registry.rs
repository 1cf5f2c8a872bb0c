//! Per-context method registry
//!
//! Maps method names to asynchronous handlers. Registration is late-bound:
//! content or host installs handlers at arbitrary times, including after the
//! bridge is live, so dispatch resolves the name at call time.

use parking_lot::RwLock;
use std::collections::HashMap;
use std::sync::Arc;
use webbridge_core::{BridgeError, BridgeResult, CAPABILITIES_METHOD, MethodHandler};

/// Table of invocable named handlers for one side of the bridge
#[derive(Default)]
pub struct MethodRegistry {
    handlers: RwLock<HashMap<String, Arc<dyn MethodHandler>>>,
}

impl MethodRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Install a handler under a name
    ///
    /// Replaces any existing handler for the same name without error
    /// (last-write-wins; a hot-reloaded page re-registers its handlers).
    /// The reserved [`CAPABILITIES_METHOD`] name is rejected so consumer code
    /// cannot shadow introspection.
    pub fn register<H: MethodHandler>(
        &self,
        name: impl Into<String>,
        handler: H,
    ) -> BridgeResult<()> {
        let name = name.into();
        if name.is_empty() {
            return Err(BridgeError::InvalidMethodName(name));
        }
        if name == CAPABILITIES_METHOD {
            tracing::warn!(method = %name, "rejecting registration under reserved name");
            return Err(BridgeError::ReservedMethod(name));
        }

        let replaced = self
            .handlers
            .write()
            .insert(name.clone(), Arc::new(handler));
        if replaced.is_some() {
            tracing::debug!(method = %name, "replaced existing handler");
        }
        Ok(())
    }

    /// Remove a handler; returns whether one was present
    ///
    /// Subsequent calls for the name are answered with `MethodNotFound`.
    pub fn unregister(&self, name: &str) -> bool {
        self.handlers.write().remove(name).is_some()
    }

    /// Look up a handler by name
    pub fn get(&self, name: &str) -> Option<Arc<dyn MethodHandler>> {
        self.handlers.read().get(name).cloned()
    }

    /// Check whether a handler is registered under the name
    pub fn contains(&self, name: &str) -> bool {
        self.handlers.read().contains_key(name)
    }

    /// Snapshot of currently registered method names
    ///
    /// Recomputed per call (registrations change over the session's life).
    /// Always includes the built-in [`CAPABILITIES_METHOD`]; sorted for a
    /// stable descriptor.
    pub fn method_names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.handlers.read().keys().cloned().collect();
        names.push(CAPABILITIES_METHOD.to_string());
        names.sort();
        names
    }

    /// Drop all handlers (session teardown)
    pub fn clear(&self) {
        self.handlers.write().clear();
    }
}

#[cfg(test)]
#[path = "registry/registry_tests.rs"]
mod registry_tests;
