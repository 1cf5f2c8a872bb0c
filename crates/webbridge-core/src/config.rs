//! Bridge configuration types

use serde::{Deserialize, Serialize};

/// Configuration for one bridge session
///
/// All fields have serde defaults so hosts can supply a partial JSON object
/// (or none at all) when constructing a bridge.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BridgeConfig {
    /// Default per-call timeout in milliseconds, applied when `invoke` is
    /// used without an explicit timeout
    #[serde(default = "default_timeout_ms")]
    pub default_timeout_ms: u64,

    /// Hard ceiling on simultaneously outstanding calls
    ///
    /// `invoke` past this ceiling fails with `TooManyOutstandingCalls`.
    #[serde(default = "default_max_pending")]
    pub max_pending_calls: usize,

    /// Number of retired correlation ids remembered after timeout
    ///
    /// Used only to label late replies in logs; replies for unknown ids are
    /// dropped either way.
    #[serde(default = "default_retired_window")]
    pub retired_id_window: usize,
}

fn default_timeout_ms() -> u64 {
    10_000
}

fn default_max_pending() -> usize {
    256
}

fn default_retired_window() -> usize {
    128
}

impl Default for BridgeConfig {
    fn default() -> Self {
        Self {
            default_timeout_ms: default_timeout_ms(),
            max_pending_calls: default_max_pending(),
            retired_id_window: default_retired_window(),
        }
    }
}

impl BridgeConfig {
    /// Create a configuration with all defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Create configuration from JSON bytes
    ///
    /// Empty input yields the default configuration.
    pub fn from_json(bytes: &[u8]) -> Result<Self, serde_json::Error> {
        if bytes.is_empty() {
            return Ok(Self::default());
        }
        serde_json::from_slice(bytes)
    }

    /// Set the default timeout
    pub fn with_default_timeout_ms(mut self, ms: u64) -> Self {
        self.default_timeout_ms = ms;
        self
    }

    /// Set the pending-call ceiling
    pub fn with_max_pending_calls(mut self, max: usize) -> Self {
        self.max_pending_calls = max;
        self
    }
}
