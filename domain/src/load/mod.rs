//! Load-test domain
//!
//! Models the synthetic vote traffic run against the polling API:
//! scenarios schedule virtual users, every iteration produces a
//! [`VoteProbe`], probes aggregate into [`LoadMetrics`], and
//! [`Threshold`]s decide whether the run passed.

pub mod metrics;
pub mod plan;
pub mod scenario;
pub mod threshold;

pub use metrics::{LoadMetrics, LoadReport, ScenarioReport, VoteProbe};
pub use plan::LoadPlan;
pub use scenario::{Executor, LoadScenario, Stage};
pub use threshold::{Threshold, ThresholdOutcome};
