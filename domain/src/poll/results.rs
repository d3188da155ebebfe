//! Aggregated vote counts and their percentage breakdown.

use super::entities::Poll;
use crate::core::error::DomainError;
use serde::{Deserialize, Serialize};

/// Mapping from option label to vote count, in wire order.
///
/// # Example
///
/// ```
/// use votestream_domain::PollResults;
///
/// let results: PollResults = serde_json::from_str(r#"{"React": 25, "Vue.js": 18}"#).unwrap();
/// assert_eq!(results.count("React"), 25);
/// assert_eq!(results.total(), 43);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PollResults {
    #[serde(with = "super::ordered_map")]
    tallies: Vec<(String, u64)>,
}

impl PollResults {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from `(label, count)` pairs
    pub fn from_pairs<S: Into<String>>(pairs: impl IntoIterator<Item = (S, u64)>) -> Self {
        let mut results = Self::new();
        for (label, count) in pairs {
            results.set(label, count);
        }
        results
    }

    pub fn count(&self, label: &str) -> u64 {
        self.tallies
            .iter()
            .find(|(l, _)| l == label)
            .map(|(_, c)| *c)
            .unwrap_or(0)
    }

    /// Set a label's count, appending the label if it is new
    pub fn set(&mut self, label: impl Into<String>, count: u64) {
        let label = label.into();
        match self.tallies.iter_mut().find(|(l, _)| *l == label) {
            Some(entry) => entry.1 = count,
            None => self.tallies.push((label, count)),
        }
    }

    /// Add one vote to a label, creating it at 1 if absent
    pub fn increment(&mut self, label: &str) -> u64 {
        let next = self.count(label).saturating_add(1);
        self.set(label, next);
        next
    }

    /// Record a vote for the option at `choice` of `poll`
    pub fn record_choice(&mut self, poll: &Poll, choice: usize) -> Result<u64, DomainError> {
        let option = poll.option(choice)?;
        Ok(self.increment(&option.text))
    }

    /// Sum of all counts, saturating at `u64::MAX`
    pub fn total(&self) -> u64 {
        self.tallies
            .iter()
            .fold(0u64, |total, (_, c)| total.saturating_add(*c))
    }

    pub fn is_empty(&self) -> bool {
        self.tallies.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, u64)> {
        self.tallies.iter().map(|(l, c)| (l.as_str(), *c))
    }

    /// Percentage breakdown for display
    pub fn breakdown(&self) -> ResultsBreakdown {
        ResultsBreakdown::from_results(self)
    }
}

/// One row of a rendered results chart.
#[derive(Debug, Clone, PartialEq)]
pub struct ResultRow {
    pub label: String,
    pub count: u64,
    /// Share of the total vote, 0.0 to 100.0
    pub percent: f64,
}

impl ResultRow {
    /// Percentage with one decimal, e.g. `"75.0%"`
    pub fn percent_label(&self) -> String {
        format!("{:.1}%", self.percent)
    }
}

/// What the results panel shows.
#[derive(Debug, Clone, PartialEq)]
pub enum ResultsBreakdown {
    /// No votes recorded yet ("be the first to vote")
    NoVotes,
    Tally { total: u64, rows: Vec<ResultRow> },
}

impl ResultsBreakdown {
    pub fn from_results(results: &PollResults) -> Self {
        let total = results.total();
        if total == 0 {
            return Self::NoVotes;
        }
        let rows = results
            .iter()
            .map(|(label, count)| ResultRow {
                label: label.to_string(),
                count,
                percent: count as f64 / total as f64 * 100.0,
            })
            .collect();
        Self::Tally { total, rows }
    }

    pub fn total(&self) -> u64 {
        match self {
            Self::NoVotes => 0,
            Self::Tally { total, .. } => *total,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_results_have_no_votes() {
        assert_eq!(PollResults::new().breakdown(), ResultsBreakdown::NoVotes);
    }

    #[test]
    fn test_zero_counts_are_still_no_votes() {
        let results = PollResults::from_pairs([("A", 0), ("B", 0)]);
        assert_eq!(results.breakdown(), ResultsBreakdown::NoVotes);
    }

    #[test]
    fn test_percentages_sum_to_hundred() {
        let results = PollResults::from_pairs([("A", 3), ("B", 1)]);
        let ResultsBreakdown::Tally { total, rows } = results.breakdown() else {
            panic!("expected a tally");
        };
        assert_eq!(total, 4);
        assert_eq!(rows[0].percent_label(), "75.0%");
        assert_eq!(rows[1].percent_label(), "25.0%");
        let sum: f64 = rows.iter().map(|r| r.percent).sum();
        assert!((sum - 100.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_total_saturates_on_huge_counts() {
        let results = PollResults::from_pairs([("A", u64::MAX), ("B", 5)]);
        assert_eq!(results.total(), u64::MAX);
        assert!(matches!(
            results.breakdown(),
            ResultsBreakdown::Tally { total: u64::MAX, .. }
        ));
    }

    #[test]
    fn test_increment_initializes_missing_label() {
        let mut results = PollResults::new();
        assert_eq!(results.increment("Vue.js"), 1);
        assert_eq!(results.increment("Vue.js"), 2);
        assert_eq!(results.count("Angular"), 0);
    }

    #[test]
    fn test_record_choice_uses_option_text() {
        let poll = Poll::new(7, "Pick", &["Red", "Blue"]);
        let mut results = PollResults::new();
        results.record_choice(&poll, 1).unwrap();
        assert_eq!(results, PollResults::from_pairs([("Blue", 1)]));
        assert!(results.record_choice(&poll, 5).is_err());
    }

    #[test]
    fn test_set_keeps_first_seen_order() {
        let mut results = PollResults::from_pairs([("b", 1), ("a", 1)]);
        results.set("b", 5);
        let labels: Vec<_> = results.iter().map(|(l, _)| l).collect();
        assert_eq!(labels, vec!["b", "a"]);
    }
}
