use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{Frame, layout::Rect};
use socialhub_engine::FeedAction;
use socialhub_types::NavTab;

use crate::presentation::view_models::SidebarViewModel;
use crate::presentation::views::tui::SidebarView;

/// Navigation column. Moving the cursor selects the tab right away, so the
/// only state is the page's active tab.
#[derive(Debug, Default)]
pub struct SidebarComponent;

impl SidebarComponent {
    pub fn new() -> Self {
        Self
    }

    pub fn handle_input(&mut self, key: KeyEvent, active: NavTab) -> Option<FeedAction> {
        let last = NavTab::ALL.len() - 1;
        let target = match key.code {
            KeyCode::Up | KeyCode::Char('k') => active.index().saturating_sub(1),
            KeyCode::Down | KeyCode::Char('j') => (active.index() + 1).min(last),
            KeyCode::Home => 0,
            KeyCode::End => last,
            KeyCode::Char(c) => return Self::tab_for_digit(c).map(FeedAction::SelectTab),
            _ => return None,
        };

        NavTab::from_index(target)
            .filter(|tab| *tab != active)
            .map(FeedAction::SelectTab)
    }

    /// `1`..`6` jump straight to a tab
    pub fn tab_for_digit(c: char) -> Option<NavTab> {
        let digit = c.to_digit(10)? as usize;
        digit.checked_sub(1).and_then(NavTab::from_index)
    }

    pub fn render(
        &mut self,
        f: &mut Frame,
        area: Rect,
        model: &SidebarViewModel,
        app_name: &str,
        focused: bool,
    ) {
        f.render_widget(SidebarView::new(model, app_name, focused), area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_arrow_keys_move_selection() {
        let mut sidebar = SidebarComponent::new();
        assert_eq!(
            sidebar.handle_input(key(KeyCode::Down), NavTab::Home),
            Some(FeedAction::SelectTab(NavTab::Explore))
        );
        assert_eq!(
            sidebar.handle_input(key(KeyCode::Char('k')), NavTab::Messages),
            Some(FeedAction::SelectTab(NavTab::Explore))
        );
    }

    #[test]
    fn test_edges_do_not_wrap() {
        let mut sidebar = SidebarComponent::new();
        assert_eq!(sidebar.handle_input(key(KeyCode::Up), NavTab::Home), None);
        assert_eq!(
            sidebar.handle_input(key(KeyCode::Down), NavTab::Settings),
            None
        );
        assert_eq!(
            sidebar.handle_input(key(KeyCode::End), NavTab::Home),
            Some(FeedAction::SelectTab(NavTab::Settings))
        );
    }

    #[test]
    fn test_digits_jump_to_tab() {
        assert_eq!(SidebarComponent::tab_for_digit('1'), Some(NavTab::Home));
        assert_eq!(SidebarComponent::tab_for_digit('6'), Some(NavTab::Settings));
        assert_eq!(SidebarComponent::tab_for_digit('0'), None);
        assert_eq!(SidebarComponent::tab_for_digit('7'), None);
        assert_eq!(SidebarComponent::tab_for_digit('x'), None);
    }
}
