//! Create-poll overlay

use crate::tui::form::{CreateForm, FormField};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Widget, Wrap},
};
use votestream_domain::sanitize;

pub struct CreateFormWidget<'a> {
    form: &'a CreateForm,
}

impl<'a> CreateFormWidget<'a> {
    pub fn new(form: &'a CreateForm) -> Self {
        Self { form }
    }

    fn lines(&self) -> Vec<Line<'static>> {
        let mut lines = Vec::new();
        for field in FormField::ALL {
            let focused = self.form.focus == field;
            let label_style = if focused {
                Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::DarkGray)
            };
            lines.push(Line::from(Span::styled(field.label(), label_style)));

            let mut value = vec![
                Span::raw("  "),
                Span::raw(sanitize(self.form.value(field))),
            ];
            if focused {
                value.push(Span::styled("▌", Style::default().fg(Color::Cyan)));
            }
            lines.push(Line::from(value));
            lines.push(Line::from(""));
        }
        lines
    }
}

impl<'a> Widget for CreateFormWidget<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        Clear.render(area, buf);
        Paragraph::new(self.lines())
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(" New poll ")
                    .border_style(Style::default().fg(Color::Cyan)),
            )
            .wrap(Wrap { trim: false })
            .render(area, buf);
    }
}
