//! Pure view renderers
//!
//! Each function maps domain data to ratatui [`Line`]s for one of the three
//! views. Renderers never touch the network or mutable client state; every
//! piece of poll or theme text goes through [`sanitize`](votestream_domain::sanitize)
//! before it reaches the terminal.
//!
//! [`Line`]: ratatui::text::Line

pub mod color;
pub mod results;
pub mod theme_polls;
pub mod themes;
pub mod voting;

pub use color::{parse_hex_color, theme_color};
pub use results::render_results;
pub use theme_polls::render_theme_polls;
pub use themes::render_themes;
pub use voting::render_voting;

use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Span;

/// Style of the highlighted row
pub(crate) fn selected_style() -> Style {
    Style::default()
        .fg(Color::Black)
        .bg(Color::Cyan)
        .add_modifier(Modifier::BOLD)
}

/// Leading cursor span for a list row
pub(crate) fn cursor(selected: bool) -> Span<'static> {
    if selected {
        Span::styled("▶ ", Style::default().fg(Color::Cyan))
    } else {
        Span::raw("  ")
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    use ratatui::text::Line;

    /// Flatten rendered lines into plain strings
    pub fn flatten(lines: &[Line<'_>]) -> Vec<String> {
        lines
            .iter()
            .map(|line| line.spans.iter().map(|s| s.content.as_ref()).collect())
            .collect()
    }

    pub fn joined(lines: &[Line<'_>]) -> String {
        flatten(lines).join("\n")
    }
}
