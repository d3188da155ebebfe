//! Interactive client timers from TOML (`[client]` section)

use serde::{Deserialize, Serialize};
use std::time::Duration;
use votestream_application::ClientBehavior;

/// Raw client configuration from TOML
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileClientConfig {
    pub vote_cooldown_ms: u64,
    pub vote_debounce_ms: u64,
    pub results_poll_seconds: u64,
    pub toast_seconds: u64,
}

impl Default for FileClientConfig {
    fn default() -> Self {
        Self {
            vote_cooldown_ms: 1000,
            vote_debounce_ms: 300,
            results_poll_seconds: 10,
            toast_seconds: 2,
        }
    }
}

impl FileClientConfig {
    pub fn to_behavior(&self) -> ClientBehavior {
        ClientBehavior::default()
            .with_vote_cooldown(Duration::from_millis(self.vote_cooldown_ms))
            .with_vote_debounce(Duration::from_millis(self.vote_debounce_ms))
            .with_results_poll_interval(Duration::from_secs(self.results_poll_seconds))
            .with_toast_duration(Duration::from_secs(self.toast_seconds))
    }
}
