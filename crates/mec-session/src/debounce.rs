//! Single-slot debounce for query-change events.
//!
//! The scheduler holds at most one pending query. A new event supersedes
//! the previous one and restarts the quiescence window, so a stale query
//! can never fire. The event-loop drives it by polling `fire` (there are no
//! detached timers, which makes teardown cancellation trivial).

use std::time::{Duration, Instant};

/// Default quiescence window between the last keystroke and the filter run.
pub const DEBOUNCE_WINDOW: Duration = Duration::from_millis(300);

#[derive(Debug, Clone)]
struct PendingQuery {
    query: String,
    noted_at: Instant,
}

/// Cancellable, single-slot deferred query.
#[derive(Debug, Clone)]
pub struct QueryDebouncer {
    window: Duration,
    pending: Option<PendingQuery>,
}

impl Default for QueryDebouncer {
    fn default() -> Self {
        Self::new(DEBOUNCE_WINDOW)
    }
}

impl QueryDebouncer {
    pub fn new(window: Duration) -> Self {
        Self {
            window,
            pending: None,
        }
    }

    /// Record a query-change event now.
    pub fn note(&mut self, query: impl Into<String>) {
        self.note_at(query, Instant::now());
    }

    /// Record a query-change event at `now`, superseding any pending one
    /// and restarting the window.
    pub fn note_at(&mut self, query: impl Into<String>, now: Instant) {
        self.pending = Some(PendingQuery {
            query: query.into(),
            noted_at: now,
        });
    }

    /// Poll for a settled query now.
    pub fn fire(&mut self) -> Option<String> {
        self.fire_at(Instant::now())
    }

    /// Poll for a settled query at `now`. Yields the pending query exactly
    /// once when the window has elapsed since the last event; the slot is
    /// consumed so a settling period fires at most once.
    pub fn fire_at(&mut self, now: Instant) -> Option<String> {
        let quiesced = self
            .pending
            .as_ref()
            .is_some_and(|pending| now.duration_since(pending.noted_at) >= self.window);
        if !quiesced {
            return None;
        }
        self.pending.take().map(|pending| pending.query)
    }

    /// Drop any pending event so it can never fire.
    pub fn cancel(&mut self) {
        self.pending = None;
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    pub fn window(&self) -> Duration {
        self.window
    }
}
