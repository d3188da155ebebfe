//! Pass/fail thresholds over load-test metrics
//!
//! Thresholds use the familiar expression syntax:
//!
//! - `p(95)<500`: 95th percentile request duration below 500 ms
//! - `rate>0.9`: vote success rate above 90%

use super::metrics::LoadMetrics;
use crate::core::error::DomainError;
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Threshold {
    /// Request duration percentile must stay below `limit_ms`
    DurationPercentile { percentile: f64, limit_ms: f64 },
    /// Vote success rate must stay above `min`
    SuccessRate { min: f64 },
}

impl Threshold {
    /// Observed value for this threshold's metric
    pub fn observe(&self, metrics: &LoadMetrics) -> f64 {
        match self {
            Threshold::DurationPercentile { percentile, .. } => metrics
                .duration_percentile(*percentile)
                .map(|d| d.as_secs_f64() * 1000.0)
                .unwrap_or(0.0),
            Threshold::SuccessRate { .. } => metrics.success_rate(),
        }
    }

    pub fn evaluate(&self, metrics: &LoadMetrics) -> ThresholdOutcome {
        let observed = self.observe(metrics);
        let passed = match self {
            Threshold::DurationPercentile { limit_ms, .. } => observed < *limit_ms,
            // no samples at all cannot satisfy a rate floor
            Threshold::SuccessRate { min } => metrics.total() > 0 && observed > *min,
        };
        ThresholdOutcome {
            threshold: *self,
            observed,
            passed,
        }
    }

    /// Metric the threshold applies to, for reports
    pub fn metric_name(&self) -> &'static str {
        match self {
            Threshold::DurationPercentile { .. } => "http_req_duration",
            Threshold::SuccessRate { .. } => "vote_rate",
        }
    }
}

impl fmt::Display for Threshold {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Threshold::DurationPercentile {
                percentile,
                limit_ms,
            } => write!(f, "p({})<{}", percentile, limit_ms),
            Threshold::SuccessRate { min } => write!(f, "rate>{}", min),
        }
    }
}

impl FromStr for Threshold {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let compact: String = s.chars().filter(|c| !c.is_whitespace()).collect();
        let invalid = || DomainError::InvalidThreshold(s.to_string());

        if let Some(rest) = compact.strip_prefix("p(") {
            let (pct, limit) = rest.split_once(")<").ok_or_else(invalid)?;
            let percentile: f64 = pct.parse().map_err(|_| invalid())?;
            let limit_ms: f64 = limit.parse().map_err(|_| invalid())?;
            if !(0.0..=100.0).contains(&percentile) || limit_ms <= 0.0 {
                return Err(invalid());
            }
            return Ok(Threshold::DurationPercentile {
                percentile,
                limit_ms,
            });
        }

        if let Some(rest) = compact.strip_prefix("rate>") {
            let min: f64 = rest.parse().map_err(|_| invalid())?;
            if !(0.0..=1.0).contains(&min) {
                return Err(invalid());
            }
            return Ok(Threshold::SuccessRate { min });
        }

        Err(invalid())
    }
}

/// Result of checking one threshold after a run.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ThresholdOutcome {
    pub threshold: Threshold,
    pub observed: f64,
    pub passed: bool,
}
