use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget, Wrap},
};

use super::{ACCENT, border_style};
use crate::presentation::view_models::ComposerViewModel;

pub const PUBLISH_LABEL: &str = "Опубликовать";
const CURSOR: &str = "▏";

pub struct ComposerView<'a> {
    model: &'a ComposerViewModel,
    focused: bool,
}

impl<'a> ComposerView<'a> {
    pub fn new(model: &'a ComposerViewModel, focused: bool) -> Self {
        Self { model, focused }
    }

    fn text_lines(&self) -> Vec<Line<'a>> {
        let avatar = Span::styled(
            format!("({}) ", self.model.avatar),
            Style::default().fg(ACCENT).add_modifier(Modifier::BOLD),
        );

        if self.model.draft.is_empty() {
            let mut spans = vec![avatar];
            if self.focused {
                spans.push(Span::raw(CURSOR));
            }
            spans.push(Span::styled(
                self.model.placeholder.as_str(),
                Style::default().add_modifier(Modifier::DIM),
            ));
            return vec![Line::from(spans)];
        }

        let mut lines: Vec<Line<'a>> = Vec::new();
        let draft_lines: Vec<&str> = self.model.draft.split('\n').collect();
        let last = draft_lines.len() - 1;

        for (i, text) in draft_lines.into_iter().enumerate() {
            let lead = if i == 0 {
                avatar.clone()
            } else {
                Span::raw(" ".repeat(self.model.avatar.chars().count() + 3))
            };
            let mut spans = vec![lead, Span::raw(text)];
            if self.focused && i == last {
                spans.push(Span::styled(CURSOR, Style::default().fg(Color::Yellow)));
            }
            lines.push(Line::from(spans));
        }

        lines
    }

    fn toolbar(&self) -> Line<'static> {
        let button = if self.model.can_submit {
            Style::default()
                .fg(Color::Black)
                .bg(ACCENT)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::DarkGray)
        };

        Line::from(vec![
            Span::styled("🖼  🎬  📍", Style::default().add_modifier(Modifier::DIM)),
            Span::raw("   "),
            Span::styled(format!(" {} ", PUBLISH_LABEL), button),
            Span::styled(
                format!("  {} симв.", self.model.char_count),
                Style::default().add_modifier(Modifier::DIM),
            ),
        ])
    }
}

impl Widget for ComposerView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .title(" Новый пост ")
            .borders(Borders::ALL)
            .border_style(border_style(self.focused));
        let inner = block.inner(area);
        block.render(area, buf);

        let chunks = Layout::vertical([Constraint::Min(1), Constraint::Length(1)]).split(inner);

        Paragraph::new(self.text_lines())
            .wrap(Wrap { trim: false })
            .render(chunks[0], buf);
        Paragraph::new(self.toolbar()).render(chunks[1], buf);
    }
}
