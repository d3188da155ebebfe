//! Body widget: the current view, rendered by the pure view functions

use crate::tui::state::TuiState;
use crate::view::{render_results, render_theme_polls, render_themes, render_voting};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget, Wrap},
};
use votestream_application::ViewModel;

pub struct BodyWidget<'a> {
    state: &'a TuiState,
}

impl<'a> BodyWidget<'a> {
    pub fn new(state: &'a TuiState) -> Self {
        Self { state }
    }

    fn lines(&self) -> Vec<Line<'static>> {
        let selected = self.state.selected;
        match &self.state.view {
            None => vec![Line::from(Span::styled(
                "Loading...",
                Style::default().fg(Color::DarkGray),
            ))],
            Some(ViewModel::Themes { themes, .. }) => render_themes(themes, selected),
            Some(ViewModel::ThemePolls { theme, polls, .. }) => {
                render_theme_polls(theme, polls, selected)
            }
            Some(ViewModel::Voting {
                poll,
                theme,
                results,
                voted_choice,
                ..
            }) => {
                let mut lines = render_voting(poll, theme.as_ref(), *voted_choice, selected);
                lines.push(Line::from(""));
                lines.extend(render_results(results));
                lines
            }
        }
    }
}

/// Scroll offset keeping the cursor row inside a viewport of `height` rows
fn scroll_offset(lines: &[Line<'_>], height: u16) -> u16 {
    let cursor_row = lines
        .iter()
        .position(|line| line.spans.first().is_some_and(|s| s.content == "▶ "))
        .unwrap_or(0);
    let height = usize::from(height.max(1));
    // keep a little context below the cursor
    let wanted = (cursor_row + 3).saturating_sub(height);
    u16::try_from(wanted).unwrap_or(u16::MAX)
}

impl<'a> Widget for BodyWidget<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let lines = self.lines();
        let inner_height = area.height.saturating_sub(2);
        let offset = scroll_offset(&lines, inner_height);

        Paragraph::new(lines)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(Color::DarkGray)),
            )
            .wrap(Wrap { trim: false })
            .scroll((offset, 0))
            .render(area, buf);
    }
}
