use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use crate::presentation::view_models::HeaderViewModel;

pub struct HeaderView<'a> {
    model: &'a HeaderViewModel,
}

impl<'a> HeaderView<'a> {
    pub fn new(model: &'a HeaderViewModel) -> Self {
        Self { model }
    }
}

impl Widget for HeaderView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let lines = vec![
            Line::from(Span::styled(
                self.model.title.as_str(),
                Style::default().add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(
                self.model.subtitle.as_str(),
                Style::default().add_modifier(Modifier::DIM),
            )),
        ];

        Paragraph::new(lines).render(area, buf);
    }
}
