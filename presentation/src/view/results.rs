//! Results panel: percentage bars per option

use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use votestream_domain::{PollResults, ResultsBreakdown, sanitize};

const BAR_WIDTH: usize = 30;

/// Filled cells of a bar for a 0-100 percentage
fn bar_cells(percent: f64) -> usize {
    ((percent / 100.0) * BAR_WIDTH as f64).round().clamp(0.0, BAR_WIDTH as f64) as usize
}

pub fn render_results(results: &PollResults) -> Vec<Line<'static>> {
    let mut lines = vec![Line::from(Span::styled(
        "Real-time results:",
        Style::default().add_modifier(Modifier::BOLD),
    ))];

    match results.breakdown() {
        ResultsBreakdown::NoVotes => {
            lines.push(Line::from(Span::styled(
                "Be the first to vote!",
                Style::default()
                    .fg(Color::Gray)
                    .add_modifier(Modifier::ITALIC),
            )));
        }
        ResultsBreakdown::Tally { total, rows } => {
            for row in rows {
                lines.push(Line::from(vec![
                    Span::raw(sanitize(&row.label)),
                    Span::styled(
                        format!("  {} votes ({})", row.count, row.percent_label()),
                        Style::default().fg(Color::Gray),
                    ),
                ]));
                let filled = bar_cells(row.percent);
                lines.push(Line::from(vec![
                    Span::styled("█".repeat(filled), Style::default().fg(Color::Cyan)),
                    Span::styled(
                        "░".repeat(BAR_WIDTH - filled),
                        Style::default().fg(Color::DarkGray),
                    ),
                ]));
            }
            lines.push(Line::from(Span::styled(
                format!("Total: {} votes", total),
                Style::default().fg(Color::DarkGray),
            )));
        }
    }

    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::view::test_support::flatten;

    #[test]
    fn test_no_votes_prompt() {
        let text = flatten(&render_results(&PollResults::new()));
        assert_eq!(text, vec!["Real-time results:", "Be the first to vote!"]);

        let zeroes = PollResults::from_pairs([("Tabs", 0), ("Spaces", 0)]);
        assert!(flatten(&render_results(&zeroes)).contains(&"Be the first to vote!".to_string()));
    }

    #[test]
    fn test_rows_in_wire_order_with_percentages() {
        let results = PollResults::from_pairs([("Spaces", 3), ("Tabs", 1)]);
        let text = flatten(&render_results(&results));
        assert_eq!(text[1], "Spaces  3 votes (75.0%)");
        assert_eq!(text[3], "Tabs  1 votes (25.0%)");
        assert_eq!(text.last().map(String::as_str), Some("Total: 4 votes"));
    }

    #[test]
    fn test_bar_widths() {
        let results = PollResults::from_pairs([("A", 1), ("B", 1)]);
        let text = flatten(&render_results(&results));
        assert_eq!(text[2].chars().filter(|&c| c == '█').count(), 15);
        assert_eq!(text[2].chars().count(), BAR_WIDTH);
        assert_eq!(bar_cells(100.0), BAR_WIDTH);
        assert_eq!(bar_cells(0.0), 0);
    }
}
