//! Input debouncing and stale-result discard.
//!
//! Sits at the boundary between text input and the search engine: a
//! query fires only after the keystrokes settle, and a result that
//! finished after a newer query was issued is thrown away
//! (last-writer-wins). The search engine itself knows nothing about any
//! of this.

use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

/// Delay applied to search input before a query fires.
pub const DEFAULT_SEARCH_DEBOUNCE: Duration = Duration::from_millis(300);

/// Identifies one trigger generation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ticket(u64);

/// Coalesces rapid triggers: of all callers within one delay window,
/// only the most recent proceeds.
#[derive(Debug)]
pub struct Debouncer {
    delay: Duration,
    generation: AtomicU64,
}

impl Debouncer {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            generation: AtomicU64::new(0),
        }
    }

    /// Register a trigger and wait out the delay.
    ///
    /// Returns `None` when a newer trigger arrived during the wait; the
    /// caller should drop its request. On `Some`, keep the ticket and
    /// check [`is_current`](Self::is_current) after any further await to
    /// discard a result that went stale in flight.
    pub async fn acquire(&self) -> Option<Ticket> {
        let ticket = self.generation.fetch_add(1, Ordering::SeqCst) + 1;
        tokio::time::sleep(self.delay).await;
        if self.generation.load(Ordering::SeqCst) == ticket {
            Some(Ticket(ticket))
        } else {
            None
        }
    }

    /// True while no newer trigger has been registered.
    pub fn is_current(&self, ticket: Ticket) -> bool {
        self.generation.load(Ordering::SeqCst) == ticket.0
    }
}

impl Default for Debouncer {
    fn default() -> Self {
        Self::new(DEFAULT_SEARCH_DEBOUNCE)
    }
}
