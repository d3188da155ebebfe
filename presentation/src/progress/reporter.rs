//! Progress reporting for load-test runs

use colored::Colorize;
use indicatif::{MultiProgress, ProgressBar, ProgressStyle};
use std::collections::HashMap;
use std::sync::Mutex;
use std::time::Instant;
use votestream_application::LoadProgressNotifier;
use votestream_domain::{LoadScenario, ScenarioReport, VoteProbe};

/// Live state of one scenario's bar
struct ScenarioBar {
    bar: ProgressBar,
    started: Instant,
    successful: u64,
    failed: u64,
    active_vus: usize,
}

impl ScenarioBar {
    fn refresh(&self) {
        self.bar.set_position(self.started.elapsed().as_secs());
        self.bar.set_message(format!(
            "{} {}  {} {}  vus {}",
            "✓".green(),
            self.successful,
            "✗".red(),
            self.failed,
            self.active_vus
        ));
    }
}

/// Reports load-test progress with one bar per scenario.
///
/// Bars track elapsed seconds against the scenario's planned duration.
pub struct LoadProgressReporter {
    multi: MultiProgress,
    bars: Mutex<HashMap<String, ScenarioBar>>,
}

impl LoadProgressReporter {
    pub fn new() -> Self {
        Self {
            multi: MultiProgress::new(),
            bars: Mutex::new(HashMap::new()),
        }
    }

    fn scenario_style() -> ProgressStyle {
        ProgressStyle::default_bar()
            .template("{spinner:.green} {prefix:.bold.cyan} [{bar:40.cyan/blue}] {pos}/{len}s {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("=>-")
    }

    fn with_bar(&self, scenario: &str, f: impl FnOnce(&mut ScenarioBar)) {
        if let Ok(mut bars) = self.bars.lock()
            && let Some(bar) = bars.get_mut(scenario)
        {
            f(bar);
        }
    }
}

impl Default for LoadProgressReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl LoadProgressNotifier for LoadProgressReporter {
    fn on_scenario_start(&self, scenario: &LoadScenario) {
        let pb = self
            .multi
            .add(ProgressBar::new(scenario.duration().as_secs()));
        pb.set_style(Self::scenario_style());
        pb.set_prefix(scenario.name.clone());
        pb.set_message("Starting...");

        if let Ok(mut bars) = self.bars.lock() {
            bars.insert(
                scenario.name.clone(),
                ScenarioBar {
                    bar: pb,
                    started: Instant::now(),
                    successful: 0,
                    failed: 0,
                    active_vus: 0,
                },
            );
        }
    }

    fn on_vus_changed(&self, scenario: &str, active: usize) {
        self.with_bar(scenario, |bar| {
            bar.active_vus = active;
            bar.refresh();
        });
    }

    fn on_vote(&self, scenario: &str, probe: &VoteProbe) {
        self.with_bar(scenario, |bar| {
            if probe.passed_checks() {
                bar.successful += 1;
            } else {
                bar.failed += 1;
            }
            bar.refresh();
        });
    }

    fn on_scenario_complete(&self, report: &ScenarioReport) {
        self.with_bar(&report.name, |bar| {
            let length = bar.bar.length().unwrap_or(0);
            bar.bar.set_position(length);
            bar.bar.finish_with_message(format!(
                "{} {} votes, {:.1}% ok",
                "Done".green(),
                report.metrics.total(),
                report.metrics.success_rate() * 100.0
            ));
        });
    }
}

/// Plain-text progress for non-interactive output
pub struct SimpleLoadProgress;

impl LoadProgressNotifier for SimpleLoadProgress {
    fn on_scenario_start(&self, scenario: &LoadScenario) {
        println!(
            "{} Starting scenario {} ({} VUs max, {}s)",
            "->".cyan(),
            scenario.name.bold(),
            scenario.max_vus(),
            scenario.duration().as_secs()
        );
    }

    fn on_vote(&self, _scenario: &str, _probe: &VoteProbe) {}

    fn on_scenario_complete(&self, report: &ScenarioReport) {
        println!(
            "{} Scenario {} finished: {} successful, {} failed",
            "->".cyan(),
            report.name.bold(),
            report.metrics.successful,
            report.metrics.failed
        );
    }
}
