use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{Frame, layout::Rect, widgets::ListState};
use socialhub_engine::FeedAction;
use socialhub_types::PostId;

use crate::presentation::view_models::FeedViewModel;
use crate::presentation::views::tui::PostListView;

/// Scrollable post list with a selection cursor
#[derive(Debug)]
pub struct FeedComponent {
    state: ListState,
}

impl FeedComponent {
    pub fn new() -> Self {
        Self {
            state: ListState::default().with_selected(Some(0)),
        }
    }

    pub fn selected(&self) -> Option<usize> {
        self.state.selected()
    }

    /// Jump to the newest post
    pub fn select_first(&mut self) {
        self.state.select(Some(0));
        *self.state.offset_mut() = 0;
    }

    pub fn handle_input(&mut self, key: KeyEvent, feed: &FeedViewModel) -> Option<FeedAction> {
        let len = feed.posts.len();
        if len == 0 {
            return None;
        }
        let current = self.clamped(len);

        match key.code {
            KeyCode::Down | KeyCode::Char('j') => {
                self.state.select(Some((current + 1).min(len - 1)));
                None
            }
            KeyCode::Up | KeyCode::Char('k') => {
                self.state.select(Some(current.saturating_sub(1)));
                None
            }
            KeyCode::Home | KeyCode::Char('g') => {
                self.state.select(Some(0));
                None
            }
            KeyCode::End | KeyCode::Char('G') => {
                self.state.select(Some(len - 1));
                None
            }
            KeyCode::Char('l') | KeyCode::Char(' ') => feed
                .posts
                .get(current)
                .map(|post| FeedAction::ToggleLike(PostId(post.id))),
            _ => None,
        }
    }

    pub fn render(&mut self, f: &mut Frame, area: Rect, feed: &FeedViewModel, focused: bool) {
        // Index safety: the feed may have changed since the last key press
        let len = feed.posts.len();
        if len == 0 {
            self.state.select(None);
        } else {
            self.state.select(Some(self.clamped(len)));
        }

        let list = PostListView::new(feed, area.width, focused).build_list();
        f.render_stateful_widget(list, area, &mut self.state);
    }

    fn clamped(&self, len: usize) -> usize {
        self.state.selected().unwrap_or(0).min(len.saturating_sub(1))
    }
}

impl Default for FeedComponent {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::presentation::presenters::present_page;
    use crossterm::event::KeyModifiers;
    use socialhub_engine::FeedPage;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_navigation_is_clamped() {
        let vm = present_page(&FeedPage::default()).feed;
        let mut feed = FeedComponent::new();

        feed.handle_input(key(KeyCode::Up), &vm);
        assert_eq!(feed.selected(), Some(0));

        for _ in 0..5 {
            feed.handle_input(key(KeyCode::Char('j')), &vm);
        }
        assert_eq!(feed.selected(), Some(2));

        feed.handle_input(key(KeyCode::Home), &vm);
        assert_eq!(feed.selected(), Some(0));
        feed.handle_input(key(KeyCode::End), &vm);
        assert_eq!(feed.selected(), Some(2));
    }

    #[test]
    fn test_like_targets_selected_post() {
        let vm = present_page(&FeedPage::default()).feed;
        let mut feed = FeedComponent::new();

        feed.handle_input(key(KeyCode::Down), &vm);
        assert_eq!(
            feed.handle_input(key(KeyCode::Char('l')), &vm),
            Some(FeedAction::ToggleLike(PostId(2)))
        );
        assert_eq!(
            feed.handle_input(key(KeyCode::Char(' ')), &vm),
            Some(FeedAction::ToggleLike(PostId(2)))
        );
    }

    #[test]
    fn test_empty_feed_ignores_input() {
        let vm = FeedViewModel {
            posts: Vec::new(),
            total_count: 0,
        };
        let mut feed = FeedComponent::new();
        assert_eq!(feed.handle_input(key(KeyCode::Char('l')), &vm), None);
    }
}
