//! Load-test samples and aggregated metrics

use super::threshold::ThresholdOutcome;
use std::time::Duration;

/// Outcome of a single vote request made by a virtual user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VoteProbe {
    /// HTTP status, `None` when the request never got a response
    pub status: Option<u16>,
    pub body: String,
    pub elapsed: Duration,
}

impl VoteProbe {
    /// A 200 response whose body reports success
    pub fn ok(elapsed: Duration) -> Self {
        Self {
            status: Some(200),
            body: r#"{"status":"success"}"#.to_string(),
            elapsed,
        }
    }

    /// Any HTTP response; checks are applied later
    pub fn response(status: u16, body: impl Into<String>, elapsed: Duration) -> Self {
        Self {
            status: Some(status),
            body: body.into(),
            elapsed,
        }
    }

    pub fn failed(status: Option<u16>, body: impl Into<String>, elapsed: Duration) -> Self {
        Self {
            status,
            body: body.into(),
            elapsed,
        }
    }

    /// Both response checks: status is 200 and the body contains "success"
    pub fn passed_checks(&self) -> bool {
        self.status == Some(200) && self.body.contains("success")
    }
}

/// Counters and latency samples for one or more scenarios.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LoadMetrics {
    durations: Vec<Duration>,
    /// `successful_votes` counter
    pub successful: u64,
    /// `failed_votes` counter
    pub failed: u64,
}

impl LoadMetrics {
    pub fn record(&mut self, probe: &VoteProbe) {
        // transport failures never produced a request duration
        if probe.status.is_some() {
            self.durations.push(probe.elapsed);
        }
        if probe.passed_checks() {
            self.successful += 1;
        } else {
            self.failed += 1;
        }
    }

    pub fn merge(&mut self, other: &LoadMetrics) {
        self.durations.extend_from_slice(&other.durations);
        self.successful += other.successful;
        self.failed += other.failed;
    }

    /// Total vote iterations recorded
    pub fn total(&self) -> u64 {
        self.successful + self.failed
    }

    /// `vote_rate`: share of votes that passed both checks
    pub fn success_rate(&self) -> f64 {
        match self.total() {
            0 => 0.0,
            total => self.successful as f64 / total as f64,
        }
    }

    pub fn request_count(&self) -> usize {
        self.durations.len()
    }

    /// Nearest-rank percentile of request durations, `pct` in 0..=100
    pub fn duration_percentile(&self, pct: f64) -> Option<Duration> {
        if self.durations.is_empty() {
            return None;
        }
        let mut sorted = self.durations.clone();
        sorted.sort_unstable();
        let rank = ((pct / 100.0) * sorted.len() as f64).ceil() as usize;
        let index = rank.clamp(1, sorted.len()) - 1;
        Some(sorted[index])
    }

    pub fn average_duration(&self) -> Option<Duration> {
        if self.durations.is_empty() {
            return None;
        }
        let sum: Duration = self.durations.iter().sum();
        Some(sum / self.durations.len() as u32)
    }

    pub fn max_duration(&self) -> Option<Duration> {
        self.durations.iter().max().copied()
    }
}

/// Per-scenario summary.
#[derive(Debug, Clone, PartialEq)]
pub struct ScenarioReport {
    pub name: String,
    pub metrics: LoadMetrics,
    pub peak_vus: usize,
    pub elapsed: Duration,
}

/// Final report of a load-test run.
#[derive(Debug, Clone, PartialEq)]
pub struct LoadReport {
    pub scenarios: Vec<ScenarioReport>,
    /// All scenarios combined
    pub metrics: LoadMetrics,
    pub thresholds: Vec<ThresholdOutcome>,
}

impl LoadReport {
    pub fn passed(&self) -> bool {
        self.thresholds.iter().all(|t| t.passed)
    }

    pub fn failed_thresholds(&self) -> impl Iterator<Item = &ThresholdOutcome> {
        self.thresholds.iter().filter(|t| !t.passed)
    }
}
