//! Search input debouncing.
//!
//! Keystrokes arrive faster than the list should be recomputed. Each new input
//! cancels the pending one and restarts the idle window; the query is released
//! only once the window passes without further input.

use std::time::{Duration, Instant};

#[derive(Debug, Clone)]
pub struct SearchDebouncer {
    window: Duration,
    pending: Option<Pending>,
}

#[derive(Debug, Clone)]
struct Pending {
    text: String,
    deadline: Instant,
}

impl SearchDebouncer {
    pub fn new(window: Duration) -> Self {
        Self {
            window,
            pending: None,
        }
    }

    /// Record new input at `now`, replacing anything pending.
    pub fn input(&mut self, text: impl Into<String>, now: Instant) {
        self.pending = Some(Pending {
            text: text.into(),
            deadline: now + self.window,
        });
    }

    /// Release the pending text if its idle window has elapsed by `now`.
    pub fn poll(&mut self, now: Instant) -> Option<String> {
        let due = self.pending.as_ref().is_some_and(|p| now >= p.deadline);
        if !due {
            return None;
        }
        self.pending.take().map(|p| p.text)
    }

    /// Release the pending text immediately.
    pub fn flush(&mut self) -> Option<String> {
        self.pending.take().map(|p| p.text)
    }

    /// Drop the pending text.
    pub fn cancel(&mut self) {
        self.pending = None;
    }

    /// When the pending text becomes due
    pub fn deadline(&self) -> Option<Instant> {
        self.pending.as_ref().map(|p| p.deadline)
    }
}

impl Default for SearchDebouncer {
    fn default() -> Self {
        Self::new(Duration::from_millis(300))
    }
}
