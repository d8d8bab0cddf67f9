use chrono::Utc;
use socialhub_types::{Author, NavTab, PostId, Recommendation, Trend};

use crate::composer::{Composer, DraftEdit};
use crate::feed::Feed;
use crate::seed;

/// User interactions the page reacts to
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FeedAction {
    ToggleLike(PostId),
    SubmitDraft,
    SelectTab(NavTab),
    EditDraft(DraftEdit),
}

/// What an applied action changed
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ActionOutcome {
    LikeToggled { id: PostId, liked: bool, likes: u32 },
    /// The post id was not in the feed; nothing changed
    LikeIgnored(PostId),
    Published(PostId),
    /// Blank draft; nothing changed
    DraftRejected,
    TabSelected(NavTab),
    DraftEdited,
}

/// Page-level state: the feed, the composer draft and the active tab.
///
/// Every mutation goes through [`FeedPage::apply`] (or the thin wrappers
/// below) and completes before the next interaction is processed.
#[derive(Debug, Clone)]
pub struct FeedPage {
    feed: Feed,
    composer: Composer,
    active_tab: NavTab,
    viewer: Author,
    recommendations: Vec<Recommendation>,
    trends: Vec<Trend>,
}

impl Default for FeedPage {
    fn default() -> Self {
        Self::seeded(seed::default_viewer())
    }
}

impl FeedPage {
    /// Page seeded with the mock dataset, publishing as `viewer`
    pub fn seeded(viewer: Author) -> Self {
        Self {
            feed: Feed::new(seed::mock_posts()),
            composer: Composer::new(),
            active_tab: NavTab::default(),
            viewer,
            recommendations: seed::recommendations(),
            trends: seed::trends(),
        }
    }

    pub fn feed(&self) -> &Feed {
        &self.feed
    }

    pub fn draft(&self) -> &str {
        self.composer.draft()
    }

    pub fn can_submit(&self) -> bool {
        self.composer.can_submit()
    }

    pub fn active_tab(&self) -> NavTab {
        self.active_tab
    }

    pub fn viewer(&self) -> &Author {
        &self.viewer
    }

    pub fn recommendations(&self) -> &[Recommendation] {
        &self.recommendations
    }

    pub fn trends(&self) -> &[Trend] {
        &self.trends
    }

    pub fn apply(&mut self, action: FeedAction) -> ActionOutcome {
        self.apply_at(action, now_millis())
    }

    /// Apply `action`, using `now_millis` for any post id that gets issued
    pub fn apply_at(&mut self, action: FeedAction, now_millis: u64) -> ActionOutcome {
        let outcome = match action {
            FeedAction::ToggleLike(id) => {
                if self.feed.toggle_like(id) {
                    match self.feed.get(id) {
                        Some(post) => ActionOutcome::LikeToggled {
                            id,
                            liked: post.liked,
                            likes: post.likes,
                        },
                        None => ActionOutcome::LikeIgnored(id),
                    }
                } else {
                    ActionOutcome::LikeIgnored(id)
                }
            }
            FeedAction::SubmitDraft => match self.composer.take() {
                Some(content) => {
                    let id = self.feed.publish(self.viewer.clone(), content, now_millis);
                    ActionOutcome::Published(id)
                }
                None => ActionOutcome::DraftRejected,
            },
            FeedAction::SelectTab(tab) => {
                self.active_tab = tab;
                ActionOutcome::TabSelected(tab)
            }
            FeedAction::EditDraft(edit) => {
                self.composer.edit(edit);
                ActionOutcome::DraftEdited
            }
        };

        match &outcome {
            ActionOutcome::LikeIgnored(id) => log::warn!("like ignored: no post with id {}", id),
            ActionOutcome::DraftRejected => log::debug!("draft rejected: blank"),
            ActionOutcome::DraftEdited => {
                log::trace!("draft edited ({} chars)", self.composer.char_count())
            }
            other => log::debug!("applied: {:?}", other),
        }

        outcome
    }

    pub fn toggle_like(&mut self, id: PostId) -> ActionOutcome {
        self.apply(FeedAction::ToggleLike(id))
    }

    /// Publish the current draft. Returns the new post id, or `None` when the
    /// draft is blank (in which case nothing changes).
    pub fn submit_post(&mut self) -> Option<PostId> {
        match self.apply(FeedAction::SubmitDraft) {
            ActionOutcome::Published(id) => Some(id),
            _ => None,
        }
    }

    pub fn select_tab(&mut self, tab: NavTab) -> ActionOutcome {
        self.apply(FeedAction::SelectTab(tab))
    }

    pub fn edit_draft(&mut self, edit: DraftEdit) -> ActionOutcome {
        self.apply(FeedAction::EditDraft(edit))
    }
}

fn now_millis() -> u64 {
    u64::try_from(Utc::now().timestamp_millis()).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_like_reports_new_state() {
        let mut page = FeedPage::default();
        let outcome = page.toggle_like(PostId(1));
        assert_eq!(
            outcome,
            ActionOutcome::LikeToggled {
                id: PostId(1),
                liked: true,
                likes: 25
            }
        );
    }

    #[test]
    fn test_toggle_like_unknown_id() {
        let mut page = FeedPage::default();
        assert_eq!(
            page.toggle_like(PostId(42)),
            ActionOutcome::LikeIgnored(PostId(42))
        );
    }

    #[test]
    fn test_submit_uses_viewer_identity() {
        let viewer = Author::new("Олег", "@oleg", "О");
        let mut page = FeedPage::seeded(viewer.clone());
        page.edit_draft(DraftEdit::Replace("Привет".to_string()));

        let id = page.submit_post().unwrap();
        let post = page.feed().get(id).unwrap();
        assert_eq!(post.author, viewer);
        assert_eq!(post.content, "Привет");
    }

    #[test]
    fn test_apply_at_uses_given_clock() {
        let mut page = FeedPage::default();
        page.edit_draft(DraftEdit::Replace("Hello".to_string()));
        let outcome = page.apply_at(FeedAction::SubmitDraft, 1_234_567);
        assert_eq!(outcome, ActionOutcome::Published(PostId(1_234_567)));
    }

    #[test]
    fn test_select_tab() {
        let mut page = FeedPage::default();
        assert_eq!(page.active_tab(), NavTab::Home);
        assert_eq!(
            page.select_tab(NavTab::Messages),
            ActionOutcome::TabSelected(NavTab::Messages)
        );
        assert_eq!(page.active_tab(), NavTab::Messages);
    }
}
