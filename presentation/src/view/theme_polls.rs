//! Theme polls view: numbered poll cards with option chips

use super::{cursor, theme_color};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use votestream_domain::{Poll, Theme, core::string::truncate, sanitize};

/// Longest option text shown in a chip
const CHIP_MAX: usize = 24;

pub fn render_theme_polls(theme: &Theme, polls: &[Poll], selected: usize) -> Vec<Line<'static>> {
    let accent = theme_color(&theme.color);
    let mut lines = vec![
        Line::from(Span::styled(
            "← Back to themes",
            Style::default().fg(Color::DarkGray),
        )),
        Line::from(""),
        Line::from(vec![
            Span::raw(format!("{} ", sanitize(&theme.icon))),
            Span::styled(
                sanitize(&theme.name),
                Style::default().fg(accent).add_modifier(Modifier::BOLD),
            ),
        ]),
    ];
    let description = sanitize(&theme.description);
    if !description.is_empty() {
        lines.push(Line::from(Span::styled(
            description,
            Style::default().fg(Color::Gray),
        )));
    }
    lines.push(Line::from(""));

    if polls.is_empty() {
        lines.push(Line::from(Span::styled(
            "No polls in this theme yet",
            Style::default().fg(Color::DarkGray),
        )));
        return lines;
    }

    for (index, poll) in polls.iter().enumerate() {
        let is_selected = index == selected;
        let mut question_style = Style::default().add_modifier(Modifier::BOLD);
        if is_selected {
            question_style = question_style.fg(accent);
        }
        lines.push(Line::from(vec![
            cursor(is_selected),
            Span::styled(format!("#{} ", index + 1), Style::default().fg(accent)),
            Span::styled(sanitize(&poll.question), question_style),
        ]));

        let mut chips = vec![Span::raw("    ")];
        for option in &poll.options {
            chips.push(Span::styled(
                format!("[{}]", truncate(&sanitize(&option.text), CHIP_MAX)),
                Style::default().fg(Color::Gray),
            ));
            chips.push(Span::raw(" "));
        }
        lines.push(Line::from(chips));
        lines.push(Line::from(""));
    }

    lines
}
