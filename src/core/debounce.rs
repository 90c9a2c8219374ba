//! Trailing-edge debounce driven by a caller-supplied clock.

use std::time::{Duration, Instant};

/// Trailing-edge debounce for search-as-you-type filters.
///
/// Each [`call`](Self::call) replaces the pending value and restarts the
/// wait; [`poll`](Self::poll) hands the latest value out once `wait` has
/// passed without another call. The clock is supplied by the caller, so
/// the struct owns no timer and is trivially testable.
#[derive(Debug, Clone)]
pub struct Debouncer<T> {
    wait: Duration,
    pending: Option<(T, Instant)>,
}

impl<T> Debouncer<T> {
    pub fn new(wait: Duration) -> Self {
        Self {
            wait,
            pending: None,
        }
    }

    /// Record a new value at `now`, discarding any value still pending.
    pub fn call(&mut self, value: T, now: Instant) {
        self.pending = Some((value, now));
    }

    /// Take the pending value if the quiet period has elapsed.
    pub fn poll(&mut self, now: Instant) -> Option<T> {
        if self.deadline().is_some_and(|due| now >= due) {
            self.pending.take().map(|(value, _)| value)
        } else {
            None
        }
    }

    /// When the pending value becomes due. `None` when nothing is pending
    /// or the due time is past what [`Instant`] can represent.
    pub fn deadline(&self) -> Option<Instant> {
        self.pending
            .as_ref()
            .and_then(|(_, at)| at.checked_add(self.wait))
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Drop the pending value without firing.
    pub fn cancel(&mut self) -> Option<T> {
        self.pending.take().map(|(value, _)| value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const WAIT: Duration = Duration::from_millis(500);

    #[test]
    fn fires_after_quiet_period() {
        let t0 = Instant::now();
        let mut d = Debouncer::new(WAIT);
        d.call("a", t0);
        assert_eq!(d.poll(t0 + Duration::from_millis(499)), None);
        assert_eq!(d.poll(t0 + WAIT), Some("a"));
        assert!(!d.is_pending());
        assert_eq!(d.poll(t0 + WAIT * 2), None);
    }

    #[test]
    fn later_call_restarts_wait() {
        let t0 = Instant::now();
        let mut d = Debouncer::new(WAIT);
        d.call("1", t0);
        d.call("12", t0 + Duration::from_millis(300));
        assert_eq!(d.poll(t0 + WAIT), None);
        assert_eq!(d.deadline(), Some(t0 + Duration::from_millis(800)));
        assert_eq!(d.poll(t0 + Duration::from_millis(800)), Some("12"));
    }

    #[test]
    fn cancel_drops_value() {
        let t0 = Instant::now();
        let mut d = Debouncer::new(WAIT);
        d.call(42, t0);
        assert_eq!(d.cancel(), Some(42));
        assert_eq!(d.poll(t0 + WAIT), None);
        assert_eq!(d.deadline(), None);
    }

    #[test]
    fn unrepresentable_deadline_never_fires() {
        let t0 = Instant::now();
        let mut d = Debouncer::new(Duration::MAX);
        d.call(1, t0);
        assert_eq!(d.deadline(), None);
        assert_eq!(d.poll(t0), None);
        assert!(d.is_pending());
        assert_eq!(d.cancel(), Some(1));
    }

    #[test]
    fn clock_going_backwards_does_not_fire() {
        let t0 = Instant::now() + WAIT;
        let mut d = Debouncer::new(WAIT);
        d.call((), t0);
        assert_eq!(d.poll(t0 - WAIT), None);
        assert!(d.is_pending());
    }
}
