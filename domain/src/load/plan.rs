//! What a load-test run does on every iteration.

use super::scenario::LoadScenario;
use super::threshold::Threshold;
use crate::core::error::DomainError;
use crate::poll::PollId;
use std::ops::RangeInclusive;
use std::time::Duration;

/// Full description of a load-test run.
///
/// Each VU iteration picks a random poll from `poll_ids` and a random choice
/// in `0..=max_choice`, votes, then sleeps a random think time.
#[derive(Debug, Clone, PartialEq)]
pub struct LoadPlan {
    pub poll_ids: Vec<PollId>,
    pub max_choice: usize,
    pub think_time: RangeInclusive<Duration>,
    pub scenarios: Vec<LoadScenario>,
    pub thresholds: Vec<Threshold>,
}

impl Default for LoadPlan {
    fn default() -> Self {
        Self {
            poll_ids: (1..=5).map(PollId).collect(),
            max_choice: 4,
            think_time: Duration::from_millis(100)..=Duration::from_millis(500),
            scenarios: vec![LoadScenario::constant_load(), LoadScenario::ramp_up()],
            thresholds: vec![
                Threshold::DurationPercentile {
                    percentile: 95.0,
                    limit_ms: 500.0,
                },
                Threshold::SuccessRate { min: 0.9 },
            ],
        }
    }
}

impl LoadPlan {
    /// Keep only the scenarios whose names are listed
    pub fn with_scenarios(mut self, names: &[String]) -> Result<Self, DomainError> {
        if names.is_empty() {
            return Ok(self);
        }
        for name in names {
            if !self.scenarios.iter().any(|s| &s.name == name) {
                return Err(DomainError::InvalidScenario(format!(
                    "unknown scenario '{}'",
                    name
                )));
            }
        }
        self.scenarios.retain(|s| names.contains(&s.name));
        Ok(self)
    }

    pub fn validate(&self) -> Result<(), DomainError> {
        if self.poll_ids.is_empty() {
            return Err(DomainError::InvalidScenario(
                "at least one poll id is required".into(),
            ));
        }
        if self.think_time.start() > self.think_time.end() {
            return Err(DomainError::InvalidScenario(
                "think time minimum exceeds maximum".into(),
            ));
        }
        if self.scenarios.is_empty() {
            return Err(DomainError::InvalidScenario(
                "no scenarios selected".into(),
            ));
        }
        for scenario in &self.scenarios {
            scenario.validate()?;
        }
        Ok(())
    }

    /// Longest scenario run time plus its grace period
    pub fn expected_duration(&self) -> Duration {
        self.scenarios
            .iter()
            .map(|s| s.duration() + s.graceful_stop())
            .max()
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_plan_matches_script() {
        let plan = LoadPlan::default();
        assert_eq!(plan.poll_ids.len(), 5);
        assert_eq!(plan.max_choice, 4);
        assert_eq!(plan.scenarios.len(), 2);
        assert_eq!(plan.expected_duration(), Duration::from_secs(55));
        assert!(plan.validate().is_ok());
    }

    #[test]
    fn test_select_scenarios() {
        let plan = LoadPlan::default()
            .with_scenarios(&["ramp_up".to_string()])
            .unwrap();
        assert_eq!(plan.scenarios.len(), 1);
        assert_eq!(plan.scenarios[0].name, "ramp_up");

        assert!(
            LoadPlan::default()
                .with_scenarios(&["soak".to_string()])
                .is_err()
        );
    }

    #[test]
    fn test_validate_think_time() {
        let plan = LoadPlan {
            think_time: Duration::from_millis(500)..=Duration::from_millis(100),
            ..LoadPlan::default()
        };
        assert!(plan.validate().is_err());
    }
}
