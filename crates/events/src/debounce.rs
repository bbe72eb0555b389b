//! Reset-on-trigger debounce timer.
//!
//! Every [`Debouncer::trigger`] pushes the deadline out by the full window,
//! so a burst of triggers fires once, `window` after the last one.

use std::time::Duration;

use tokio::time::Instant;

#[derive(Debug)]
pub struct Debouncer {
    window: Duration,
    deadline: Option<Instant>,
    pending: usize,
}

impl Debouncer {
    pub fn new(window: Duration) -> Self {
        Self {
            window,
            deadline: None,
            pending: 0,
        }
    }

    pub fn window(&self) -> Duration {
        self.window
    }

    /// Record a trigger and restart the quiet period.
    pub fn trigger(&mut self) {
        self.deadline = Some(Instant::now() + self.window);
        self.pending += 1;
    }

    pub fn is_pending(&self) -> bool {
        self.deadline.is_some()
    }

    pub fn deadline(&self) -> Option<Instant> {
        self.deadline
    }

    /// Whether the quiet period has elapsed at `now`.
    pub fn is_due(&self, now: Instant) -> bool {
        self.deadline.is_some_and(|d| now >= d)
    }

    /// Clear the timer, returning how many triggers were collapsed.
    pub fn take(&mut self) -> Option<usize> {
        self.deadline.take()?;
        Some(std::mem::take(&mut self.pending))
    }
}

/// Sleep until `deadline`, or forever when there is none.
///
/// Takes the deadline by value so it can sit in a `select!` next to
/// branches that mutate the debouncer.
pub async fn sleep_until_deadline(deadline: Option<Instant>) {
    match deadline {
        Some(deadline) => tokio::time::sleep_until(deadline).await,
        None => std::future::pending::<()>().await,
    }
}
