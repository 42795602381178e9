//! Pending JSON-RPC requests keyed by id

use serde_json::Value;
use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use tokio::sync::{oneshot, Mutex};

/// Single-fire completion handles for requests written to the MCP server.
///
/// Whichever of [`complete`](Self::complete) and [`cancel`](Self::cancel)
/// runs first removes the entry; the other is then a no-op.
pub struct PendingRequests {
    next_id: AtomicU64,
    waiters: Mutex<HashMap<u64, oneshot::Sender<Value>>>,
}

impl PendingRequests {
    pub fn new() -> Self {
        Self {
            next_id: AtomicU64::new(1),
            waiters: Mutex::new(HashMap::new()),
        }
    }

    /// Allocate the next id and register a waiter for it
    pub async fn register(&self) -> (u64, oneshot::Receiver<Value>) {
        let id = self.next_id.fetch_add(1, Ordering::Relaxed);
        let (tx, rx) = oneshot::channel();
        self.waiters.lock().await.insert(id, tx);
        (id, rx)
    }

    /// Deliver a response. Returns `false` if nothing was waiting on `id`.
    pub async fn complete(&self, id: u64, response: Value) -> bool {
        match self.waiters.lock().await.remove(&id) {
            Some(tx) => tx.send(response).is_ok(),
            None => false,
        }
    }

    pub async fn cancel(&self, id: u64) -> bool {
        self.waiters.lock().await.remove(&id).is_some()
    }

    pub async fn len(&self) -> usize {
        self.waiters.lock().await.len()
    }
}

impl Default for PendingRequests {
    fn default() -> Self {
        Self::new()
    }
}
