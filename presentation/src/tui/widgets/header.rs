//! Header widget: app name, breadcrumb and demo badge

use crate::tui::state::TuiState;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};
use votestream_application::ViewModel;
use votestream_domain::sanitize;

pub struct HeaderWidget<'a> {
    state: &'a TuiState,
}

impl<'a> HeaderWidget<'a> {
    pub fn new(state: &'a TuiState) -> Self {
        Self { state }
    }

    fn breadcrumb(&self) -> String {
        match &self.state.view {
            None => "Loading...".to_string(),
            Some(ViewModel::Themes { .. }) => "Themes".to_string(),
            Some(ViewModel::ThemePolls { theme, .. }) => {
                format!("Themes › {}", sanitize(&theme.name))
            }
            Some(ViewModel::Voting { poll, theme, .. }) => match theme {
                Some(theme) => format!("Themes › {} › Poll #{}", sanitize(&theme.name), poll.id),
                None => format!("Themes › Poll #{}", poll.id),
            },
        }
    }
}

impl<'a> Widget for HeaderWidget<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let mut spans = vec![
            Span::styled("◉ ", Style::default().fg(Color::Green)),
            Span::styled(
                "Vote",
                Style::default()
                    .fg(Color::Magenta)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                "Stream",
                Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
            ),
            Span::styled("  │  ", Style::default().fg(Color::DarkGray)),
            Span::raw(self.breadcrumb()),
        ];

        if self.state.origin().is_some_and(|o| o.is_demo()) {
            spans.push(Span::raw("  "));
            spans.push(Span::styled(
                " DEMO ",
                Style::default()
                    .fg(Color::Black)
                    .bg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            ));
        }

        Paragraph::new(Line::from(spans))
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(Color::DarkGray)),
            )
            .render(area, buf);
    }
}
