use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{Frame, layout::Rect};
use socialhub_engine::{DraftEdit, FeedAction};

use crate::presentation::view_models::ComposerViewModel;
use crate::presentation::views::tui::ComposerView;

/// Actions the composer hands back to the renderer
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ComposerAction {
    Dispatch(FeedAction),
    /// Give focus back to the feed
    Leave,
}

/// Text input bound to the page draft.
///
/// The draft itself lives in the page; the component only maps keys.
#[derive(Debug, Default)]
pub struct ComposerComponent;

impl ComposerComponent {
    pub fn new() -> Self {
        Self
    }

    pub fn handle_input(&mut self, key: KeyEvent) -> Option<ComposerAction> {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        let alt = key.modifiers.contains(KeyModifiers::ALT);
        // AltGr arrives as Ctrl+Alt and produces printable characters
        let alt_gr = ctrl && alt;

        let edit = match key.code {
            KeyCode::Esc => return Some(ComposerAction::Leave),
            KeyCode::Enter if alt => DraftEdit::Newline,
            KeyCode::Enter => return Some(ComposerAction::Dispatch(FeedAction::SubmitDraft)),
            KeyCode::Backspace => DraftEdit::Backspace,
            KeyCode::Char('u') if ctrl && !alt_gr => DraftEdit::Clear,
            KeyCode::Char(_) if (ctrl || alt) && !alt_gr => return None,
            KeyCode::Char(c) => DraftEdit::Insert(c),
            _ => return None,
        };

        Some(ComposerAction::Dispatch(FeedAction::EditDraft(edit)))
    }

    pub fn render(
        &mut self,
        f: &mut Frame,
        area: Rect,
        model: &ComposerViewModel,
        focused: bool,
    ) {
        f.render_widget(ComposerView::new(model, focused), area);
    }
}
