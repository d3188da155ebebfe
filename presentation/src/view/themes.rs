//! Themes view: one card per theme

use super::{cursor, theme_color};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use votestream_domain::{Theme, sanitize};

pub const TAGLINE: &str = "An honest corner to share opinions and discover perspectives";

/// Render the theme cards, highlighting `selected`.
pub fn render_themes(themes: &[Theme], selected: usize) -> Vec<Line<'static>> {
    let mut lines = vec![
        Line::from(Span::styled(
            TAGLINE,
            Style::default()
                .fg(Color::Gray)
                .add_modifier(Modifier::ITALIC),
        )),
        Line::from(""),
    ];

    if themes.is_empty() {
        lines.push(Line::from(Span::styled(
            "No themes available",
            Style::default().fg(Color::DarkGray),
        )));
        return lines;
    }

    for (index, theme) in themes.iter().enumerate() {
        let is_selected = index == selected;
        let accent = theme_color(&theme.color);
        let mut name_style = Style::default().fg(accent).add_modifier(Modifier::BOLD);
        if is_selected {
            name_style = name_style.add_modifier(Modifier::REVERSED);
        }

        let mut title = vec![cursor(is_selected)];
        let icon = sanitize(&theme.icon);
        if !icon.is_empty() {
            title.push(Span::raw(format!("{} ", icon)));
        }
        title.push(Span::styled(sanitize(&theme.name), name_style));
        lines.push(Line::from(title));

        let description = sanitize(&theme.description);
        if !description.is_empty() {
            lines.push(Line::from(Span::styled(
                format!("    {}", description),
                Style::default().fg(Color::Gray),
            )));
        }
        lines.push(Line::from(Span::styled(
            format!("    {} active polls", theme.active_poll_count()),
            Style::default().fg(Color::DarkGray),
        )));
        lines.push(Line::from(""));
    }

    lines
}
