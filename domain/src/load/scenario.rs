//! Virtual-user scenarios
//!
//! A scenario decides how many virtual users (VUs) should be looping at any
//! instant. Two executors exist:
//!
//! - **Constant VUs**: a fixed number of VUs for a fixed duration.
//! - **Ramping VUs**: the VU target moves linearly between stage targets.

use crate::core::error::DomainError;
use std::time::Duration;

/// One leg of a ramping scenario: reach `target` VUs over `duration`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Stage {
    pub duration: Duration,
    pub target: usize,
}

impl Stage {
    pub fn new(duration: Duration, target: usize) -> Self {
        Self { duration, target }
    }
}

/// How VUs are scheduled over time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Executor {
    ConstantVus {
        vus: usize,
        duration: Duration,
        /// Time VUs get to finish their iteration once the duration is up
        graceful_stop: Duration,
    },
    RampingVus {
        start_vus: usize,
        stages: Vec<Stage>,
        /// Time VUs get to finish their iteration when ramped down
        graceful_ramp_down: Duration,
    },
}

/// A named load scenario.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadScenario {
    pub name: String,
    pub executor: Executor,
}

impl LoadScenario {
    /// Name of the built-in constant scenario
    pub const CONSTANT_LOAD: &'static str = "constant_load";
    /// Name of the built-in ramping scenario
    pub const RAMP_UP: &'static str = "ramp_up";
    /// Grace period of constant scenarios unless configured otherwise
    pub const DEFAULT_GRACEFUL_STOP: Duration = Duration::from_secs(30);

    pub fn constant(name: impl Into<String>, vus: usize, duration: Duration) -> Self {
        Self {
            name: name.into(),
            executor: Executor::ConstantVus {
                vus,
                duration,
                graceful_stop: Self::DEFAULT_GRACEFUL_STOP,
            },
        }
    }

    /// Replace the grace period (the ramp-down grace for ramping scenarios)
    pub fn with_graceful_stop(mut self, grace: Duration) -> Self {
        match &mut self.executor {
            Executor::ConstantVus { graceful_stop, .. } => *graceful_stop = grace,
            Executor::RampingVus {
                graceful_ramp_down, ..
            } => *graceful_ramp_down = grace,
        }
        self
    }

    pub fn ramping(
        name: impl Into<String>,
        start_vus: usize,
        stages: Vec<Stage>,
        graceful_ramp_down: Duration,
    ) -> Self {
        Self {
            name: name.into(),
            executor: Executor::RampingVus {
                start_vus,
                stages,
                graceful_ramp_down,
            },
        }
    }

    /// 50 VUs for 20 seconds, 30s grace
    pub fn constant_load() -> Self {
        Self::constant(Self::CONSTANT_LOAD, 50, Duration::from_secs(20))
    }

    /// 0 → 100 VUs over 10s, hold 30s, 100 → 0 over 10s, 5s grace
    pub fn ramp_up() -> Self {
        Self::ramp_up_with(
            100,
            Duration::from_secs(10),
            Duration::from_secs(30),
            Duration::from_secs(5),
        )
    }

    /// Ramp-up/hold/ramp-down shape with custom numbers
    pub fn ramp_up_with(
        peak_vus: usize,
        ramp: Duration,
        hold: Duration,
        graceful_ramp_down: Duration,
    ) -> Self {
        Self::ramping(
            Self::RAMP_UP,
            0,
            vec![
                Stage::new(ramp, peak_vus),
                Stage::new(hold, peak_vus),
                Stage::new(ramp, 0),
            ],
            graceful_ramp_down,
        )
    }

    /// Scheduled run time (excluding any graceful ramp-down)
    pub fn duration(&self) -> Duration {
        match &self.executor {
            Executor::ConstantVus { duration, .. } => *duration,
            Executor::RampingVus { stages, .. } => stages.iter().map(|s| s.duration).sum(),
        }
    }

    /// Grace period granted to VUs still iterating when they are stopped
    pub fn graceful_stop(&self) -> Duration {
        match &self.executor {
            Executor::ConstantVus { graceful_stop, .. } => *graceful_stop,
            Executor::RampingVus {
                graceful_ramp_down, ..
            } => *graceful_ramp_down,
        }
    }

    /// Highest VU count the scenario will ever ask for
    pub fn max_vus(&self) -> usize {
        match &self.executor {
            Executor::ConstantVus { vus, .. } => *vus,
            Executor::RampingVus {
                start_vus, stages, ..
            } => stages
                .iter()
                .map(|s| s.target)
                .fold(*start_vus, usize::max),
        }
    }

    /// Number of VUs that should be active `elapsed` into the scenario.
    ///
    /// Ramping targets are linearly interpolated within a stage and rounded
    /// down; past the last stage the target is zero.
    pub fn target_vus_at(&self, elapsed: Duration) -> usize {
        match &self.executor {
            Executor::ConstantVus { vus, duration, .. } => {
                if elapsed < *duration {
                    *vus
                } else {
                    0
                }
            }
            Executor::RampingVus {
                start_vus, stages, ..
            } => {
                let mut from = *start_vus;
                let mut stage_start = Duration::ZERO;
                for stage in stages {
                    let stage_end = stage_start + stage.duration;
                    if elapsed < stage_end {
                        let into = (elapsed - stage_start).as_secs_f64();
                        let span = stage.duration.as_secs_f64();
                        let progress = if span > 0.0 { into / span } else { 1.0 };
                        let delta = stage.target as f64 - from as f64;
                        return (from as f64 + delta * progress).floor().max(0.0) as usize;
                    }
                    from = stage.target;
                    stage_start = stage_end;
                }
                0
            }
        }
    }

    pub fn validate(&self) -> Result<(), DomainError> {
        if self.name.trim().is_empty() {
            return Err(DomainError::InvalidScenario("scenario name is empty".into()));
        }
        match &self.executor {
            Executor::ConstantVus { vus, duration, .. } => {
                if *vus == 0 {
                    return Err(DomainError::InvalidScenario(format!(
                        "{}: vus must be greater than 0",
                        self.name
                    )));
                }
                if duration.is_zero() {
                    return Err(DomainError::InvalidScenario(format!(
                        "{}: duration must be greater than 0",
                        self.name
                    )));
                }
            }
            Executor::RampingVus { stages, .. } => {
                if stages.is_empty() {
                    return Err(DomainError::InvalidScenario(format!(
                        "{}: at least one stage is required",
                        self.name
                    )));
                }
                if self.max_vus() == 0 {
                    return Err(DomainError::InvalidScenario(format!(
                        "{}: stages never go above 0 VUs",
                        self.name
                    )));
                }
            }
        }
        Ok(())
    }
}
