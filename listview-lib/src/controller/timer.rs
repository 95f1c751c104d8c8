//! Debounce timer handle.

use std::time::Duration;

use tokio::time::Instant;

/// Debounce interval used when none is configured.
pub const DEFAULT_DEBOUNCE: Duration = Duration::from_millis(250);

/// A single-deadline timer with cancel-then-rearm semantics.
///
/// The timer does not sleep by itself; its owner waits for [`deadline`] and
/// then calls [`take_due`].
///
/// [`deadline`]: DebounceTimer::deadline
/// [`take_due`]: DebounceTimer::take_due
#[derive(Debug, Clone)]
pub struct DebounceTimer {
    interval: Duration,
    deadline: Option<Instant>,
}

impl DebounceTimer {
    /// Creates a disarmed timer.
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            deadline: None,
        }
    }

    /// Returns the debounce interval.
    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Returns the instant the timer fires at, if armed.
    pub fn deadline(&self) -> Option<Instant> {
        self.deadline
    }

    /// Returns `true` if a deadline is pending.
    pub fn is_armed(&self) -> bool {
        self.deadline.is_some()
    }

    /// Cancels any pending deadline and arms a new one `interval` after `now`.
    pub fn rearm(&mut self, now: Instant) -> Instant {
        let deadline = now + self.interval;
        self.deadline = Some(deadline);
        deadline
    }

    /// Cancels the pending deadline. Returns `true` if one was armed.
    pub fn cancel(&mut self) -> bool {
        self.deadline.take().is_some()
    }

    /// Disarms the timer and returns `true` if its deadline has passed.
    pub fn take_due(&mut self, now: Instant) -> bool {
        match self.deadline {
            Some(deadline) if deadline <= now => {
                self.deadline = None;
                true
            }
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rearm_restarts_wait() {
        let start = Instant::now();
        let mut timer = DebounceTimer::new(DEFAULT_DEBOUNCE);

        timer.rearm(start);
        let deadline = timer.rearm(start + Duration::from_millis(100));
        assert_eq!(deadline, start + Duration::from_millis(350));

        assert!(!timer.take_due(start + Duration::from_millis(300)));
        assert!(timer.is_armed());
        assert!(timer.take_due(start + Duration::from_millis(350)));
        assert!(!timer.is_armed());
        assert!(!timer.take_due(start + Duration::from_secs(1)));
    }

    #[test]
    fn test_cancel() {
        let mut timer = DebounceTimer::new(Duration::from_millis(10));
        assert!(!timer.cancel());
        timer.rearm(Instant::now());
        assert!(timer.cancel());
        assert_eq!(timer.deadline(), None);
    }
}
