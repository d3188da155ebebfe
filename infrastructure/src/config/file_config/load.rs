//! Load-test settings from TOML (`[load]` section)

use super::ConfigValidationError;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use votestream_domain::{LoadPlan, LoadScenario, PollId, Threshold};

/// `[load.constant_load]`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConstantLoadConfig {
    pub vus: usize,
    pub duration_seconds: u64,
    /// Time in-flight iterations get to finish after the duration
    pub graceful_stop_seconds: u64,
}

impl Default for FileConstantLoadConfig {
    fn default() -> Self {
        Self {
            vus: 50,
            duration_seconds: 20,
            graceful_stop_seconds: LoadScenario::DEFAULT_GRACEFUL_STOP.as_secs(),
        }
    }
}

/// `[load.ramp_up]`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileRampUpConfig {
    pub peak_vus: usize,
    /// Length of both the ramp up and the ramp down
    pub ramp_seconds: u64,
    pub hold_seconds: u64,
    pub graceful_ramp_down_seconds: u64,
}

impl Default for FileRampUpConfig {
    fn default() -> Self {
        Self {
            peak_vus: 100,
            ramp_seconds: 10,
            hold_seconds: 30,
            graceful_ramp_down_seconds: 5,
        }
    }
}

/// Raw load-test configuration from TOML
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileLoadConfig {
    /// Base URL the virtual users vote against
    pub target: String,
    /// Per-request timeout in seconds
    pub timeout_seconds: u64,
    pub poll_ids: Vec<u64>,
    /// Highest option index a VU picks
    pub max_choice: usize,
    /// `[min, max]` think time between iterations
    pub think_time_ms: [u64; 2],
    /// Scenarios to run, by name
    pub scenarios: Vec<String>,
    /// Threshold expressions such as `p(95)<500`
    pub thresholds: Vec<String>,
    pub constant_load: FileConstantLoadConfig,
    pub ramp_up: FileRampUpConfig,
}

impl Default for FileLoadConfig {
    fn default() -> Self {
        Self {
            target: "http://localhost".to_string(),
            timeout_seconds: 10,
            poll_ids: (1..=5).collect(),
            max_choice: 4,
            think_time_ms: [100, 500],
            scenarios: vec![
                LoadScenario::CONSTANT_LOAD.to_string(),
                LoadScenario::RAMP_UP.to_string(),
            ],
            thresholds: vec!["p(95)<500".to_string(), "rate>0.9".to_string()],
            constant_load: FileConstantLoadConfig::default(),
            ramp_up: FileRampUpConfig::default(),
        }
    }
}

impl FileLoadConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_seconds)
    }

    /// Both built-in scenarios with this file's numbers
    pub fn known_scenarios(&self) -> Vec<LoadScenario> {
        vec![
            LoadScenario::constant(
                LoadScenario::CONSTANT_LOAD,
                self.constant_load.vus,
                Duration::from_secs(self.constant_load.duration_seconds),
            )
            .with_graceful_stop(Duration::from_secs(
                self.constant_load.graceful_stop_seconds,
            )),
            LoadScenario::ramp_up_with(
                self.ramp_up.peak_vus,
                Duration::from_secs(self.ramp_up.ramp_seconds),
                Duration::from_secs(self.ramp_up.hold_seconds),
                Duration::from_secs(self.ramp_up.graceful_ramp_down_seconds),
            ),
        ]
    }

    /// Build the run plan, selecting `self.scenarios` in the order given
    pub fn to_plan(&self) -> Result<LoadPlan, ConfigValidationError> {
        if self.poll_ids.is_empty() {
            return Err(ConfigValidationError::EmptyPollIds);
        }
        let [min, max] = self.think_time_ms;
        if min > max {
            return Err(ConfigValidationError::InvertedThinkTime { min, max });
        }

        let known = self.known_scenarios();
        let mut scenarios = Vec::with_capacity(self.scenarios.len());
        for name in &self.scenarios {
            let scenario = known
                .iter()
                .find(|s| &s.name == name)
                .ok_or_else(|| ConfigValidationError::UnknownScenario(name.clone()))?;
            scenarios.push(scenario.clone());
        }

        let thresholds = self
            .thresholds
            .iter()
            .map(|expr| {
                expr.parse::<Threshold>()
                    .map_err(|_| ConfigValidationError::InvalidThreshold(expr.clone()))
            })
            .collect::<Result<Vec<_>, _>>()?;

        let plan = LoadPlan {
            poll_ids: self.poll_ids.iter().copied().map(PollId).collect(),
            max_choice: self.max_choice,
            think_time: Duration::from_millis(min)..=Duration::from_millis(max),
            scenarios,
            thresholds,
        };
        plan.validate()
            .map_err(|e| ConfigValidationError::InvalidLoad(e.to_string()))?;
        Ok(plan)
    }
}
