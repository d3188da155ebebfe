//! Status bar widget: toast or key hints

use crate::tui::state::TuiState;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Widget,
};
use votestream_application::ViewModel;
use votestream_domain::{NoticeLevel, sanitize};

pub struct StatusBarWidget<'a> {
    state: &'a TuiState,
}

impl<'a> StatusBarWidget<'a> {
    pub fn new(state: &'a TuiState) -> Self {
        Self { state }
    }

    fn hints(&self) -> &'static str {
        if self.state.form.is_some() {
            return "Tab:next field  Enter:next/create  Esc:cancel";
        }
        match self.state.view {
            Some(ViewModel::Voting { .. }) => {
                "j/k:move  Enter:vote  1-9:vote  Esc:back  r:refresh  q:quit"
            }
            Some(ViewModel::Themes { .. }) => "j/k:move  Enter:open  n:new poll  r:refresh  q:quit",
            _ => "j/k:move  Enter:open  n:new poll  Esc:back  r:refresh  q:quit",
        }
    }
}

fn level_color(level: NoticeLevel) -> Color {
    match level {
        NoticeLevel::Success => Color::Green,
        NoticeLevel::Warning => Color::Yellow,
        NoticeLevel::Error => Color::Red,
    }
}

impl<'a> Widget for StatusBarWidget<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let bg_style = Style::default().bg(Color::DarkGray).fg(Color::White);
        for x in area.left()..area.right() {
            buf[(x, area.y)].set_style(bg_style).set_char(' ');
        }

        let line = match &self.state.toast {
            Some((notice, _)) => Line::from(Span::styled(
                format!(" {} ", sanitize(&notice.message)),
                Style::default()
                    .fg(Color::Black)
                    .bg(level_color(notice.level))
                    .add_modifier(Modifier::BOLD),
            )),
            None => Line::from(Span::styled(format!(" {}", self.hints()), bg_style)),
        };

        buf.set_line(area.x, area.y, &line, area.width);
    }
}
