use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

use super::ACCENT;
use crate::presentation::formatters::format_compact;
use crate::presentation::view_models::DiscoveryViewModel;

/// Right column: recommendations and trends
pub struct DiscoveryView<'a> {
    model: &'a DiscoveryViewModel,
}

impl<'a> DiscoveryView<'a> {
    pub fn new(model: &'a DiscoveryViewModel) -> Self {
        Self { model }
    }

    fn recommendation_lines(&self) -> Vec<Line<'static>> {
        let dim = Style::default().add_modifier(Modifier::DIM);
        let mut lines = Vec::new();

        for rec in &self.model.recommendations {
            lines.push(Line::from(vec![
                Span::styled(
                    format!("({}) ", rec.initials),
                    Style::default().fg(Color::Gray).bg(Color::DarkGray),
                ),
                Span::raw(" "),
                Span::styled(rec.name.clone(), Style::default().add_modifier(Modifier::BOLD)),
            ]));
            lines.push(Line::from(vec![
                Span::styled(
                    format!("      {} подписчиков  ", format_compact(rec.followers)),
                    dim,
                ),
                Span::styled("[Подписаться]", Style::default().fg(ACCENT)),
            ]));
        }

        lines
    }

    fn trend_lines(&self) -> Vec<Line<'static>> {
        let mut lines = Vec::new();

        for trend in &self.model.trends {
            lines.push(Line::from(Span::styled(
                trend.tag.clone(),
                Style::default().add_modifier(Modifier::BOLD),
            )));
            lines.push(Line::from(Span::styled(
                format!("{} постов", format_compact(trend.post_count)),
                Style::default().add_modifier(Modifier::DIM),
            )));
        }

        lines
    }
}

impl Widget for DiscoveryView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let rec_height = self.model.recommendations.len() as u16 * 2 + 2;
        let chunks =
            Layout::vertical([Constraint::Length(rec_height), Constraint::Min(3)]).split(area);

        Paragraph::new(self.recommendation_lines())
            .block(Block::default().title(" Рекомендации ").borders(Borders::ALL))
            .render(chunks[0], buf);

        Paragraph::new(self.trend_lines())
            .block(Block::default().title(" Тренды ").borders(Borders::ALL))
            .render(chunks[1], buf);
    }
}
