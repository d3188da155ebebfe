//! Progress notification port for load-test runs

use votestream_domain::{LoadScenario, ScenarioReport, VoteProbe};

/// Callback for progress updates while a load test runs.
///
/// Implementations live in the presentation layer (progress bars, plain
/// text). Called concurrently from every virtual user.
pub trait LoadProgressNotifier: Send + Sync {
    /// Called once per scenario before its first VU starts
    fn on_scenario_start(&self, scenario: &LoadScenario);

    /// Called when a ramping scenario changes its active VU count
    fn on_vus_changed(&self, _scenario: &str, _active: usize) {}

    /// Called after every vote iteration
    fn on_vote(&self, scenario: &str, probe: &VoteProbe);

    /// Called when a scenario has stopped all of its VUs
    fn on_scenario_complete(&self, report: &ScenarioReport);
}

/// No-op notifier for when progress reporting is not needed
pub struct NoLoadProgress;

impl LoadProgressNotifier for NoLoadProgress {
    fn on_scenario_start(&self, _scenario: &LoadScenario) {}
    fn on_vote(&self, _scenario: &str, _probe: &VoteProbe) {}
    fn on_scenario_complete(&self, _report: &ScenarioReport) {}
}
