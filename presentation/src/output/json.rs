//! JSON output for one-shot commands

use serde::Serialize;
use serde_json::json;
use votestream_application::DataOrigin;
use votestream_domain::{LoadReport, Poll, PollResults, Theme, ThemeCatalog};

/// Formats client data as pretty-printed JSON
pub struct JsonFormatter;

impl JsonFormatter {
    /// Themes keyed by theme key, in catalog order
    pub fn themes(themes: &[Theme], origin: DataOrigin) -> String {
        let catalog = ThemeCatalog::new(themes.to_vec());
        Self::envelope(&catalog, origin)
    }

    pub fn polls(polls: &[Poll], origin: DataOrigin) -> String {
        Self::envelope(polls, origin)
    }

    pub fn poll(poll: &Poll, origin: DataOrigin) -> String {
        Self::envelope(poll, origin)
    }

    pub fn results(results: &PollResults, origin: DataOrigin) -> String {
        Self::envelope(results, origin)
    }

    pub fn load_report(report: &LoadReport) -> String {
        let scenarios: Vec<_> = report
            .scenarios
            .iter()
            .map(|s| {
                json!({
                    "name": s.name,
                    "peak_vus": s.peak_vus,
                    "elapsed_ms": s.elapsed.as_millis() as u64,
                    "successful_votes": s.metrics.successful,
                    "failed_votes": s.metrics.failed,
                    "vote_rate": s.metrics.success_rate(),
                })
            })
            .collect();
        let thresholds: Vec<_> = report
            .thresholds
            .iter()
            .map(|t| {
                json!({
                    "metric": t.threshold.metric_name(),
                    "expression": t.threshold.to_string(),
                    "observed": t.observed,
                    "passed": t.passed,
                })
            })
            .collect();
        let ms = |d: Option<std::time::Duration>| d.map(|d| d.as_secs_f64() * 1000.0);
        let value = json!({
            "scenarios": scenarios,
            "successful_votes": report.metrics.successful,
            "failed_votes": report.metrics.failed,
            "vote_rate": report.metrics.success_rate(),
            "http_req_duration": {
                "p95_ms": ms(report.metrics.duration_percentile(95.0)),
                "avg_ms": ms(report.metrics.average_duration()),
                "max_ms": ms(report.metrics.max_duration()),
            },
            "thresholds": thresholds,
            "passed": report.passed(),
        });
        serde_json::to_string_pretty(&value).unwrap_or_else(|_| "{}".to_string())
    }

    fn envelope<T: Serialize + ?Sized>(data: &T, origin: DataOrigin) -> String {
        // serialized straight from the struct so map order survives
        serde_json::to_string_pretty(&Envelope { origin, data })
            .unwrap_or_else(|_| "{}".to_string())
    }
}

#[derive(Serialize)]
struct Envelope<'a, T: ?Sized> {
    origin: DataOrigin,
    data: &'a T,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_themes_keyed_in_order() {
        let themes = vec![Theme::new("tech", "Technology"), Theme::new("food", "Food")];
        let text = JsonFormatter::themes(&themes, DataOrigin::Demo);
        let value: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert_eq!(value["origin"], "demo");
        assert_eq!(value["data"]["tech"]["name"], "Technology");
        assert!(text.find("\"tech\"").unwrap() < text.find("\"food\"").unwrap());
    }

    #[test]
    fn test_results_keep_wire_order() {
        let results = PollResults::from_pairs([("Spaces", 3), ("Tabs", 1)]);
        let text = JsonFormatter::results(&results, DataOrigin::Remote);
        let value: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert_eq!(value["origin"], "remote");
        assert_eq!(value["data"]["Spaces"], 3);
        assert!(text.find("Spaces").unwrap() < text.find("Tabs").unwrap());
    }
}
