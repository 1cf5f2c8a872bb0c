//! Outstanding-call tracking and reply correlation
//!
//! Calls complete out of order (a slow handler and a fast handler can be in
//! flight at once), so replies are matched by correlation id rather than
//! arrival order. The pending table is the dispatcher's only state and every
//! terminal transition removes its entry, so the table never grows unbounded.

use dashmap::DashMap;
use parking_lot::Mutex;
use serde_json::Value;
use std::collections::VecDeque;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use tokio::sync::oneshot;
use webbridge_core::{BridgeError, BridgeResult};

/// A call awaiting its terminal reply
struct PendingCall {
    tx: oneshot::Sender<BridgeResult<Value>>,
}

/// Allocates correlation ids and routes replies to waiting callers
pub struct CallDispatcher {
    next_id: AtomicU64,
    pending: DashMap<u64, PendingCall>,
    // Ids that timed out locally; a reply arriving for one of these is
    // expected and logged as "late", not as an unknown id.
    retired: Mutex<VecDeque<u64>>,
    max_pending: usize,
    retired_window: usize,
    closed: AtomicBool,
}

impl CallDispatcher {
    /// Create a dispatcher with the given pending ceiling and retired window
    pub fn new(max_pending: usize, retired_window: usize) -> Self {
        Self {
            next_id: AtomicU64::new(1),
            pending: DashMap::new(),
            retired: Mutex::new(VecDeque::with_capacity(retired_window)),
            max_pending,
            retired_window,
            closed: AtomicBool::new(false),
        }
    }

    /// Allocate an id and record a pending entry for a new outgoing call
    ///
    /// Fails fast with `BridgeClosed` after teardown and with
    /// `TooManyOutstandingCalls` at the ceiling. The returned receiver
    /// resolves when the entry reaches a terminal state.
    pub fn begin_call(&self) -> BridgeResult<(u64, oneshot::Receiver<BridgeResult<Value>>)> {
        if self.is_closed() {
            return Err(BridgeError::BridgeClosed);
        }
        if self.pending.len() >= self.max_pending {
            return Err(BridgeError::TooManyOutstandingCalls);
        }

        let id = self.next_id.fetch_add(1, Ordering::SeqCst);
        let (tx, rx) = oneshot::channel();
        self.pending.insert(id, PendingCall { tx });
        Ok((id, rx))
    }

    /// Deliver a terminal reply to the caller waiting on `id`
    ///
    /// Returns whether a pending entry was found. A reply with no entry
    /// (duplicate, late after timeout, foreign session) is discarded
    /// silently; that is not an error condition for the receiving side.
    pub fn complete(&self, id: u64, outcome: BridgeResult<Value>) -> bool {
        match self.pending.remove(&id) {
            Some((_, call)) => {
                // Receiver dropped means the caller gave up between reply
                // arrival and delivery; nothing left to do.
                let _ = call.tx.send(outcome);
                true
            }
            None => {
                if self.retired.lock().contains(&id) {
                    tracing::debug!(id, "discarding late reply for timed-out call");
                } else {
                    tracing::debug!(id, "discarding reply with no pending entry");
                }
                false
            }
        }
    }

    /// Retire an id whose caller timed out
    ///
    /// The entry is removed; the id is remembered in a bounded window so a
    /// late reply is logged as late rather than unknown. No cancellation
    /// propagates to the peer; its handler runs to completion regardless.
    pub fn retire(&self, id: u64) {
        self.pending.remove(&id);
        let mut retired = self.retired.lock();
        if retired.len() >= self.retired_window {
            retired.pop_front();
        }
        retired.push_back(id);
    }

    /// Remove an entry whose call never reached the transport
    pub fn discard(&self, id: u64) {
        self.pending.remove(&id);
    }

    /// Tear the session down
    ///
    /// Every remaining pending call resolves with `BridgeClosed`; the table
    /// is left empty and later `begin_call`s fail fast. Idempotent.
    pub fn close(&self) {
        if self.closed.swap(true, Ordering::SeqCst) {
            return;
        }
        let ids: Vec<u64> = self.pending.iter().map(|entry| *entry.key()).collect();
        for id in ids {
            if let Some((_, call)) = self.pending.remove(&id) {
                let _ = call.tx.send(Err(BridgeError::BridgeClosed));
            }
        }
    }

    /// Whether teardown has happened
    pub fn is_closed(&self) -> bool {
        self.closed.load(Ordering::SeqCst)
    }

    /// Number of calls currently outstanding
    pub fn pending_count(&self) -> usize {
        self.pending.len()
    }
}
