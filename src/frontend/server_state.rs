use std::sync::Arc;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

/// Manages server-wide state: shutdown flag and open connection count
#[derive(Clone, Default)]
pub struct ServerState {
    shutdown: Arc<AtomicBool>,
    open_connections: Arc<AtomicUsize>,
}

impl ServerState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns true if the server is shutting down
    pub fn is_shutting_down(&self) -> bool {
        self.shutdown.load(Ordering::Acquire)
    }

    /// Signals that the server should start shutting down
    pub fn signal_shutdown(&self) {
        self.shutdown.store(true, Ordering::Release);
    }

    /// Call when a connection task starts
    pub fn connection_opened(&self) {
        self.open_connections.fetch_add(1, Ordering::Relaxed);
    }

    /// Call when a connection task finishes
    pub fn connection_closed(&self) {
        // Saturating: an unmatched close must not wrap the counter.
        let _ = self
            .open_connections
            .fetch_update(Ordering::Relaxed, Ordering::Relaxed, |n| n.checked_sub(1));
    }

    pub fn open_connections(&self) -> usize {
        self.open_connections.load(Ordering::Relaxed)
    }
}
