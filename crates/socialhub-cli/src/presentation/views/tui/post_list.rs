use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem},
};

use super::{ACCENT, border_style};
use crate::presentation::formatters::wrap;
use crate::presentation::view_models::{FeedViewModel, PostViewModel};

/// Columns taken by borders, highlight symbol and indentation
const CHROME_WIDTH: u16 = 8;

pub const HIGHLIGHT_SYMBOL: &str = "▌ ";

/// Feed column: one multi-line list item per post
pub struct PostListView<'a> {
    model: &'a FeedViewModel,
    width: u16,
    focused: bool,
}

impl<'a> PostListView<'a> {
    pub fn new(model: &'a FeedViewModel, width: u16, focused: bool) -> Self {
        Self {
            model,
            width,
            focused,
        }
    }

    /// Build a List widget for stateful rendering
    ///
    /// This method is used by FeedComponent to render with ListState.
    pub fn build_list(self) -> List<'static> {
        let title = format!(" Лента ({}) ", self.model.total_count);
        let block = Block::default()
            .title(title)
            .borders(Borders::ALL)
            .border_style(border_style(self.focused));

        let content_width = usize::from(self.width.saturating_sub(CHROME_WIDTH)).max(10);

        let items: Vec<ListItem<'static>> = self
            .model
            .posts
            .iter()
            .map(|post| ListItem::new(post_lines(post, content_width)))
            .collect();

        List::new(items)
            .block(block)
            .highlight_symbol(HIGHLIGHT_SYMBOL)
            .highlight_style(Style::default().add_modifier(Modifier::BOLD))
    }
}

fn post_lines(post: &PostViewModel, content_width: usize) -> Vec<Line<'static>> {
    let dim = Style::default().add_modifier(Modifier::DIM);
    let mut lines = vec![Line::from(vec![
        Span::styled(
            format!("({}) ", post.avatar),
            Style::default().fg(ACCENT).add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            post.author_name.clone(),
            Style::default().add_modifier(Modifier::BOLD),
        ),
        Span::styled(format!(" {} · {}", post.author_handle, post.timestamp), dim),
    ])];

    for line in wrap(&post.content, content_width) {
        lines.push(Line::raw(format!("  {}", line)));
    }

    if let Some(image) = &post.image {
        lines.push(Line::from(Span::styled(format!("  🖼  {}", image), dim)));
    }

    let (heart, heart_style) = if post.liked {
        ("♥", Style::default().fg(Color::Red).add_modifier(Modifier::BOLD))
    } else {
        ("♡", dim)
    };
    lines.push(Line::from(vec![
        Span::raw("  "),
        Span::styled(format!("{} {}", heart, post.likes), heart_style),
        Span::styled(format!("    💬 {}    ↗ {}    🔖", post.comments, post.shares), dim),
    ]));
    lines.push(Line::raw(""));

    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::presentation::presenters::present_page;
    use socialhub_engine::FeedPage;
    use socialhub_types::PostId;

    fn text_of(lines: &[Line<'_>]) -> Vec<String> {
        lines
            .iter()
            .map(|l| l.spans.iter().map(|s| s.content.as_ref()).collect())
            .collect()
    }

    #[test]
    fn test_post_lines_layout() {
        let vm = present_page(&FeedPage::default());
        let lines = text_of(&post_lines(&vm.feed.posts[1], 40));

        assert_eq!(lines[0], "(ДК) Дмитрий Козлов @dimkoz · 4ч");
        assert!(lines.iter().any(|l| l.starts_with("  🖼  https://")));
        assert!(lines.iter().any(|l| l.starts_with("  ♡ 156")));
        assert_eq!(lines.last().map(String::as_str), Some(""));
        assert!(lines.iter().all(|l| l.chars().count() <= 42 || l.contains("https://")));
    }

    #[test]
    fn test_liked_heart_is_red() {
        let mut page = FeedPage::default();
        page.toggle_like(PostId(1));
        let vm = present_page(&page);

        let lines = post_lines(&vm.feed.posts[0], 40);
        let actions = &lines[lines.len() - 2];
        assert_eq!(actions.spans[1].content, "♥ 25");
        assert_eq!(actions.spans[1].style.fg, Some(Color::Red));
    }
}
