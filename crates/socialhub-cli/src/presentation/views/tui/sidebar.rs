use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

use super::{ACCENT, border_style};
use crate::presentation::view_models::SidebarViewModel;

pub struct SidebarView<'a> {
    model: &'a SidebarViewModel,
    app_name: &'a str,
    focused: bool,
}

impl<'a> SidebarView<'a> {
    pub fn new(model: &'a SidebarViewModel, app_name: &'a str, focused: bool) -> Self {
        Self {
            model,
            app_name,
            focused,
        }
    }
}

impl Widget for SidebarView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .title(Span::styled(
                format!(" {} ", self.app_name),
                Style::default().add_modifier(Modifier::BOLD),
            ))
            .borders(Borders::ALL)
            .border_style(border_style(self.focused));

        let mut lines = vec![Line::raw("")];
        for (i, item) in self.model.items.iter().enumerate() {
            let style = if item.active {
                Style::default()
                    .fg(Color::Black)
                    .bg(ACCENT)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default()
            };

            lines.push(Line::from(vec![
                Span::styled(
                    format!("{} ", i + 1),
                    Style::default().add_modifier(Modifier::DIM),
                ),
                Span::styled(format!(" {}  {} ", item.icon, item.label), style),
            ]));
        }

        Paragraph::new(lines).block(block).render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::presentation::presenters::present_page;
    use crate::presentation::views::tui::test_support::{contains, rows};
    use socialhub_engine::FeedPage;
    use socialhub_types::NavTab;

    #[test]
    fn test_lists_every_tab() {
        let mut page = FeedPage::default();
        page.select_tab(NavTab::Settings);
        let vm = present_page(&page);

        let area = Rect::new(0, 0, 26, 10);
        let mut buf = Buffer::empty(area);
        SidebarView::new(&vm.sidebar, &vm.app_name, false).render(area, &mut buf);

        assert!(contains(&buf, "SocialHub"));
        for tab in NavTab::ALL {
            assert!(contains(&buf, tab.label()), "missing {}", tab.label());
        }

        // Active entry is painted with the accent background
        let row = rows(&buf)
            .iter()
            .position(|r| r.contains("Настройки"))
            .unwrap();
        let x = rows(&buf)[row].chars().position(|c| c == 'Н').unwrap() as u16;
        assert_eq!(buf[(x, row as u16)].bg, ACCENT);
    }
}
