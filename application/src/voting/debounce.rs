//! Trailing-edge debounce.

use std::time::Duration;
use tokio::time::Instant;

/// Holds the latest value until `wait` passes without a newer one.
///
/// The owner polls [`deadline`](Self::deadline) in its event loop and calls
/// [`take_due`](Self::take_due) once the deadline is reached.
#[derive(Debug)]
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

    /// Replace any pending value and restart the timer
    pub fn call(&mut self, value: T, now: Instant) {
        self.pending = Some((value, now + self.wait));
    }

    pub fn deadline(&self) -> Option<Instant> {
        self.pending.as_ref().map(|(_, at)| *at)
    }

    /// Pending value, if its deadline has passed
    pub fn take_due(&mut self, now: Instant) -> Option<T> {
        match &self.pending {
            Some((_, at)) if *at <= now => self.pending.take().map(|(value, _)| value),
            _ => None,
        }
    }

    pub fn cancel(&mut self) {
        self.pending = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_collapses_rapid_calls() {
        let wait = Duration::from_millis(300);
        let mut debouncer = Debouncer::new(wait);
        let t0 = Instant::now();

        debouncer.call(1, t0);
        debouncer.call(2, t0 + Duration::from_millis(100));
        debouncer.call(3, t0 + Duration::from_millis(200));
        assert_eq!(
            debouncer.deadline(),
            Some(t0 + Duration::from_millis(500))
        );

        assert_eq!(debouncer.take_due(t0 + Duration::from_millis(400)), None);
        assert_eq!(debouncer.take_due(t0 + Duration::from_millis(500)), Some(3));
        assert_eq!(debouncer.deadline(), None);
        assert_eq!(debouncer.take_due(t0 + Duration::from_secs(9)), None);
    }

    #[test]
    fn test_cancel() {
        let mut debouncer = Debouncer::new(Duration::from_millis(300));
        debouncer.call("vote", Instant::now());
        debouncer.cancel();
        assert_eq!(debouncer.deadline(), None);
    }
}
