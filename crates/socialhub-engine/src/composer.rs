/// The composer's in-progress post text.
///
/// The draft is kept exactly as typed; trimming only decides whether it may
/// be published.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Composer {
    draft: String,
}

/// Editing operations the composer accepts
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DraftEdit {
    Insert(char),
    Newline,
    Backspace,
    Clear,
    Replace(String),
}

impl Composer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn draft(&self) -> &str {
        &self.draft
    }

    /// Publish control is enabled only for a non-blank draft
    pub fn can_submit(&self) -> bool {
        !self.draft.trim().is_empty()
    }

    pub fn char_count(&self) -> usize {
        self.draft.chars().count()
    }

    pub fn edit(&mut self, edit: DraftEdit) {
        match edit {
            DraftEdit::Insert(c) => self.draft.push(c),
            DraftEdit::Newline => self.draft.push('\n'),
            DraftEdit::Backspace => {
                self.draft.pop();
            }
            DraftEdit::Clear => self.draft.clear(),
            DraftEdit::Replace(text) => self.draft = text,
        }
    }

    /// Hand out the draft for publishing and reset the composer.
    /// Blank drafts are left in place and `None` is returned.
    pub fn take(&mut self) -> Option<String> {
        if !self.can_submit() {
            return None;
        }
        Some(std::mem::take(&mut self.draft))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_edits() {
        let mut composer = Composer::new();
        composer.edit(DraftEdit::Insert('П'));
        composer.edit(DraftEdit::Insert('р'));
        composer.edit(DraftEdit::Newline);
        composer.edit(DraftEdit::Insert('x'));
        assert_eq!(composer.draft(), "Пр\nx");
        assert_eq!(composer.char_count(), 4);

        composer.edit(DraftEdit::Backspace);
        composer.edit(DraftEdit::Backspace);
        assert_eq!(composer.draft(), "Пр");

        composer.edit(DraftEdit::Clear);
        assert_eq!(composer.draft(), "");

        // Backspace on an empty draft stays empty
        composer.edit(DraftEdit::Backspace);
        assert_eq!(composer.draft(), "");
    }

    #[test]
    fn test_can_submit_ignores_whitespace() {
        let mut composer = Composer::new();
        assert!(!composer.can_submit());

        composer.edit(DraftEdit::Replace(" \n\t ".to_string()));
        assert!(!composer.can_submit());

        composer.edit(DraftEdit::Insert('a'));
        assert!(composer.can_submit());
    }

    #[test]
    fn test_take_clears_draft() {
        let mut composer = Composer::new();
        composer.edit(DraftEdit::Replace("  Hello ".to_string()));
        assert_eq!(composer.take(), Some("  Hello ".to_string()));
        assert_eq!(composer.draft(), "");
    }

    #[test]
    fn test_take_keeps_blank_draft() {
        let mut composer = Composer::new();
        composer.edit(DraftEdit::Replace("   ".to_string()));
        assert_eq!(composer.take(), None);
        assert_eq!(composer.draft(), "   ");
    }
}
