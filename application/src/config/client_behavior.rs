//! Client timing behavior.
//!
//! [`ClientBehavior`] groups the timers that drive the interactive client:
//! vote cooldown and debounce, the results refresh period, and how long a
//! toast stays on screen. These are application-layer concerns, not domain
//! policy.

use serde::{Deserialize, Serialize};
use std::time::Duration;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientBehavior {
    /// Minimum gap between two admitted vote submissions
    pub vote_cooldown: Duration,
    /// Quiet period collapsing rapid vote requests into one
    pub vote_debounce: Duration,
    /// Results refresh period while a voting view is open
    pub results_poll_interval: Duration,
    /// Lifetime of a toast notice
    pub toast_duration: Duration,
}

impl Default for ClientBehavior {
    fn default() -> Self {
        Self {
            vote_cooldown: Duration::from_millis(1000),
            vote_debounce: Duration::from_millis(300),
            results_poll_interval: Duration::from_secs(10),
            toast_duration: Duration::from_secs(2),
        }
    }
}

impl ClientBehavior {
    // ==================== Builder Methods ====================

    pub fn with_vote_cooldown(mut self, cooldown: Duration) -> Self {
        self.vote_cooldown = cooldown;
        self
    }

    pub fn with_vote_debounce(mut self, debounce: Duration) -> Self {
        self.vote_debounce = debounce;
        self
    }

    pub fn with_results_poll_interval(mut self, interval: Duration) -> Self {
        self.results_poll_interval = interval;
        self
    }

    pub fn with_toast_duration(mut self, duration: Duration) -> Self {
        self.toast_duration = duration;
        self
    }
}
