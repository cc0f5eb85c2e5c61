//! Request Guard
//!
//! Ties async completions to the view that issued them. A view takes a
//! ticket before each request and only applies the result if the ticket
//! is still current; invalidating the guard (navigation, unmount) turns
//! every in-flight response into a no-op.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

/// Epoch a request was issued under
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ticket(u64);

#[derive(Debug, Clone, Default)]
pub struct RequestGuard {
    epoch: Arc<AtomicU64>,
}

impl RequestGuard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn ticket(&self) -> Ticket {
        Ticket(self.epoch.load(Ordering::Acquire))
    }

    /// Mark all outstanding tickets stale
    pub fn invalidate(&self) {
        self.epoch.fetch_add(1, Ordering::AcqRel);
    }

    pub fn is_current(&self, ticket: Ticket) -> bool {
        self.epoch.load(Ordering::Acquire) == ticket.0
    }
}
