//! Console output formatter for one-shot commands and load reports

use colored::Colorize;
use std::time::Duration;
use votestream_application::DataOrigin;
use votestream_domain::{
    LoadMetrics, LoadReport, Notice, NoticeLevel, Poll, PollResults, ResultsBreakdown, Theme,
    Threshold, ThresholdOutcome, option_letter, sanitize,
};

/// Formats client data and load reports for console display
pub struct ConsoleFormatter;

impl ConsoleFormatter {
    // ==================== Polls ====================

    pub fn format_themes(themes: &[Theme], origin: DataOrigin) -> String {
        let mut output = Self::header("Themes");
        output.push_str(&Self::origin_line(origin));

        if themes.is_empty() {
            output.push_str("No themes available\n");
        }
        for theme in themes {
            output.push_str(&format!(
                "\n{} {} {}\n",
                sanitize(&theme.icon),
                sanitize(&theme.name).bold(),
                format!("({})", theme.key).dimmed()
            ));
            if !theme.description.is_empty() {
                output.push_str(&Self::indent(&sanitize(&theme.description), 2));
                output.push('\n');
            }
            output.push_str(&format!(
                "  {}\n",
                format!("{} active polls", theme.active_poll_count()).dimmed()
            ));
        }

        output.push_str(&Self::footer());
        output
    }

    pub fn format_polls(title: &str, polls: &[Poll], origin: DataOrigin) -> String {
        let mut output = Self::header(title);
        output.push_str(&Self::origin_line(origin));

        if polls.is_empty() {
            output.push_str("No polls found\n");
        }
        for poll in polls {
            let options: Vec<String> = poll.options.iter().map(|o| sanitize(&o.text)).collect();
            output.push_str(&format!(
                "\n{} {}\n  {}\n",
                format!("#{}", poll.id).cyan().bold(),
                sanitize(&poll.question),
                options.join(" | ").dimmed()
            ));
        }

        output.push_str(&Self::footer());
        output
    }

    pub fn format_poll(poll: &Poll, theme: Option<&Theme>, origin: DataOrigin) -> String {
        let mut output = Self::header(&format!("Poll #{}", poll.id));
        output.push_str(&Self::origin_line(origin));
        if let Some(theme) = theme {
            output.push_str(&format!(
                "{} {} {}\n",
                "Theme:".cyan().bold(),
                sanitize(&theme.icon),
                sanitize(&theme.name)
            ));
        }
        output.push_str(&format!(
            "{} {}\n\n",
            "Question:".cyan().bold(),
            sanitize(&poll.question)
        ));
        for (index, option) in poll.options.iter().enumerate() {
            output.push_str(&format!(
                "  {} {}\n",
                format!("{}.", option_letter(index)).yellow().bold(),
                sanitize(&option.text)
            ));
        }
        output.push_str(&Self::footer());
        output
    }

    pub fn format_results(poll_id: u64, results: &PollResults, origin: DataOrigin) -> String {
        let mut output = Self::header(&format!("Results for poll #{}", poll_id));
        output.push_str(&Self::origin_line(origin));

        match results.breakdown() {
            ResultsBreakdown::NoVotes => {
                output.push_str(&format!("{}\n", "Be the first to vote!".italic()));
            }
            ResultsBreakdown::Tally { total, rows } => {
                for row in rows {
                    let filled = ((row.percent / 100.0) * 30.0).round() as usize;
                    output.push_str(&format!(
                        "{}  {}\n  {}{}\n",
                        sanitize(&row.label).bold(),
                        format!("{} votes ({})", row.count, row.percent_label()).dimmed(),
                        "█".repeat(filled).cyan(),
                        "░".repeat(30usize.saturating_sub(filled)).dimmed()
                    ));
                }
                output.push_str(&format!("\n{} {}\n", "Total votes:".cyan().bold(), total));
            }
        }

        output.push_str(&Self::footer());
        output
    }

    pub fn format_notice(notice: &Notice) -> String {
        let message = sanitize(&notice.message);
        match notice.level {
            NoticeLevel::Success => format!("{} {}", "✓".green().bold(), message.green()),
            NoticeLevel::Warning => format!("{} {}", "!".yellow().bold(), message.yellow()),
            NoticeLevel::Error => format!("{} {}", "✗".red().bold(), message.red()),
        }
    }

    // ==================== Load test ====================

    pub fn format_load_report(report: &LoadReport) -> String {
        let mut output = Self::header("Load Test Results");

        for scenario in &report.scenarios {
            output.push_str(&Self::section_header(&format!("Scenario: {}", scenario.name)));
            output.push_str(&format!(
                "  {} {}   {} {}\n",
                "peak VUs:".dimmed(),
                scenario.peak_vus,
                "elapsed:".dimmed(),
                Self::format_duration(scenario.elapsed)
            ));
            output.push_str(&Self::format_metrics(&scenario.metrics));
        }

        output.push_str(&Self::section_header("Total"));
        output.push_str(&Self::format_metrics(&report.metrics));

        if !report.thresholds.is_empty() {
            output.push_str(&Self::section_header("Thresholds"));
            for outcome in &report.thresholds {
                output.push_str(&Self::format_threshold(outcome));
            }
        }

        output.push('\n');
        if report.passed() {
            output.push_str(&format!("{}\n", "All thresholds passed".green().bold()));
        } else {
            let failed = report.failed_thresholds().count();
            output.push_str(&format!(
                "{}\n",
                format!("{} threshold(s) failed", failed).red().bold()
            ));
        }

        output.push_str(&Self::footer());
        output
    }

    fn format_metrics(metrics: &LoadMetrics) -> String {
        let ms = |d: Option<Duration>| {
            d.map(Self::format_duration)
                .unwrap_or_else(|| "-".to_string())
        };
        format!(
            "  {:<18} {}\n  {:<18} {}\n  {:<18} {:.2}%\n  {:<18} {}\n  {:<18} p(95)={} avg={} max={}\n",
            "successful_votes",
            metrics.successful.to_string().green(),
            "failed_votes",
            if metrics.failed > 0 {
                metrics.failed.to_string().red()
            } else {
                metrics.failed.to_string().normal()
            },
            "vote_rate",
            metrics.success_rate() * 100.0,
            "http_reqs",
            metrics.request_count(),
            "http_req_duration",
            ms(metrics.duration_percentile(95.0)),
            ms(metrics.average_duration()),
            ms(metrics.max_duration()),
        )
    }

    fn format_threshold(outcome: &ThresholdOutcome) -> String {
        let observed = match outcome.threshold {
            Threshold::DurationPercentile { .. } => format!("{:.2}ms", outcome.observed),
            Threshold::SuccessRate { .. } => format!("{:.4}", outcome.observed),
        };
        let mark = if outcome.passed {
            "✓".green().bold()
        } else {
            "✗".red().bold()
        };
        format!(
            "  {} {}: {} {}\n",
            mark,
            outcome.threshold.metric_name(),
            outcome.threshold,
            format!("(observed {})", observed).dimmed()
        )
    }

    fn format_duration(duration: Duration) -> String {
        let ms = duration.as_secs_f64() * 1000.0;
        if ms >= 1000.0 {
            format!("{:.2}s", ms / 1000.0)
        } else {
            format!("{:.2}ms", ms)
        }
    }

    // ==================== Layout helpers ====================

    fn origin_line(origin: DataOrigin) -> String {
        if origin.is_demo() {
            format!("{}\n\n", "Backend not available, showing demo data".yellow())
        } else {
            String::new()
        }
    }

    fn header(title: &str) -> String {
        let line = "=".repeat(60);
        format!(
            "\n{}\n{:^60}\n{}\n\n",
            line.cyan(),
            title.bold(),
            line.cyan()
        )
    }

    fn section_header(title: &str) -> String {
        format!("\n{}\n", format!("── {} ──", title).yellow().bold())
    }

    fn footer() -> String {
        format!("\n{}\n", "=".repeat(60).cyan())
    }

    fn indent(text: &str, spaces: usize) -> String {
        let prefix = " ".repeat(spaces);
        text.lines()
            .map(|line| format!("{}{}", prefix, line))
            .collect::<Vec<_>>()
            .join("\n")
    }
}
