//! Port for raw load-test samples.
//!
//! Separate from `tracing`: logs carry human-readable diagnostics while a
//! [`SampleSink`] receives one machine-readable record per vote request.

use serde::Serialize;
use votestream_domain::{PollId, VoteProbe};

/// One vote request made by a virtual user.
#[derive(Debug, Clone, Serialize)]
pub struct VoteSample {
    /// RFC 3339 UTC timestamp
    pub timestamp: String,
    pub scenario: String,
    pub poll_id: PollId,
    pub choice: usize,
    pub status: Option<u16>,
    pub duration_ms: f64,
    pub success: bool,
}

impl VoteSample {
    pub fn new(scenario: &str, poll_id: PollId, choice: usize, probe: &VoteProbe) -> Self {
        Self {
            timestamp: chrono::Utc::now().to_rfc3339(),
            scenario: scenario.to_string(),
            poll_id,
            choice,
            status: probe.status,
            duration_ms: probe.elapsed.as_secs_f64() * 1000.0,
            success: probe.passed_checks(),
        }
    }
}

/// Receives vote samples.
///
/// `record` is synchronous and infallible; write failures are the sink's
/// problem and never abort a run.
pub trait SampleSink: Send + Sync {
    fn record(&self, sample: VoteSample);
}

/// No-op implementation for tests and when `--samples` is not given.
pub struct NoSampleSink;

impl SampleSink for NoSampleSink {
    fn record(&self, _sample: VoteSample) {}
}
