//! Status Bar View Component
//!
//! Renders the bottom status bar with post count, active tab, focus and the
//! last action message.

use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

use crate::presentation::view_models::StatusBarViewModel;

use super::status_level_to_color;

/// Status bar view wrapper
pub struct StatusBarView<'a> {
    model: &'a StatusBarViewModel,
}

impl<'a> StatusBarView<'a> {
    pub fn new(model: &'a StatusBarViewModel) -> Self {
        Self { model }
    }
}

impl Widget for StatusBarView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let color = status_level_to_color(self.model.level);

        let block = Block::default().borders(Borders::ALL);
        let inner = block.inner(area);
        block.render(area, buf);

        // Split into left (status) and right (help) sections
        let chunks = Layout::horizontal([Constraint::Percentage(55), Constraint::Percentage(45)])
            .split(inner);

        let mut status = vec![
            Span::raw(format!("Posts: {} ", self.model.post_count)),
            Span::raw("| "),
            Span::raw(format!("Tab: {} ", self.model.active_tab_label)),
            Span::raw("| "),
            Span::raw(format!("Focus: {} ", self.model.focus_label)),
        ];
        if let Some(message) = &self.model.message {
            status.push(Span::raw("| "));
            status.push(Span::styled(message.as_str(), Style::default().fg(color)));
        }
        Paragraph::new(Line::from(status)).render(chunks[0], buf);

        let key = Style::default().fg(Color::Yellow);
        let help_line = Line::from(vec![
            Span::styled("[Tab]", key),
            Span::raw("focus "),
            Span::styled("[j/k]", key),
            Span::raw("move "),
            Span::styled("[l]", key),
            Span::raw("like "),
            Span::styled("[Enter]", key),
            Span::raw("post "),
            Span::styled("[q]", key),
            Span::raw("uit"),
        ]);
        Paragraph::new(help_line).render(chunks[1], buf);
    }
}
