//! Voting view: the question and its lettered options

use super::{cursor, selected_style, theme_color};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use votestream_domain::{Poll, Theme, option_letter, sanitize};

/// Render a poll's options.
///
/// Once `voted_choice` is set the chosen option carries a `✓` and the
/// others are dimmed.
pub fn render_voting(
    poll: &Poll,
    theme: Option<&Theme>,
    voted_choice: Option<usize>,
    selected: usize,
) -> Vec<Line<'static>> {
    let accent = theme.map(|t| theme_color(&t.color)).unwrap_or(Color::Cyan);
    let back_to = theme
        .map(|t| sanitize(&t.name))
        .unwrap_or_else(|| "polls".to_string());

    let mut lines = vec![
        Line::from(Span::styled(
            format!("← Back to {}", back_to),
            Style::default().fg(Color::DarkGray),
        )),
        Line::from(""),
        Line::from(Span::styled(
            sanitize(&poll.question),
            Style::default().fg(accent).add_modifier(Modifier::BOLD),
        )),
    ];

    let instruction = match voted_choice {
        Some(choice) => format!("You voted {}", option_letter(choice)),
        None => "Select your answer:".to_string(),
    };
    lines.push(Line::from(Span::styled(
        instruction,
        Style::default().fg(Color::Gray),
    )));
    lines.push(Line::from(""));

    for (index, option) in poll.options.iter().enumerate() {
        let is_selected = index == selected;
        let letter_style = if is_selected {
            selected_style()
        } else {
            Style::default().fg(accent).add_modifier(Modifier::BOLD)
        };
        let text_style = match voted_choice {
            Some(choice) if choice == index => Style::default().fg(Color::Green),
            Some(_) => Style::default().fg(Color::DarkGray),
            None => Style::default(),
        };

        let mut spans = vec![
            cursor(is_selected),
            Span::styled(format!(" {} ", option_letter(index)), letter_style),
            Span::raw(" "),
            Span::styled(sanitize(&option.text), text_style),
        ];
        if voted_choice == Some(index) {
            spans.push(Span::styled(
                " ✓",
                Style::default()
                    .fg(Color::Green)
                    .add_modifier(Modifier::BOLD),
            ));
        }
        lines.push(Line::from(spans));
    }

    lines
}
