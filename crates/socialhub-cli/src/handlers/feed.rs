use anyhow::Result;
use socialhub_engine::{DraftEdit, FeedAction, FeedPage};
use socialhub_types::{NavTab, PostId};

use crate::config::Config;
use crate::presentation::presenters::present_page;
use crate::presentation::{CommandResultViewModel, ConsoleRenderer, Guidance, Renderer};
use crate::types::OutputFormat;

/// Actions requested on the command line.
///
/// They are applied to a freshly seeded page in a fixed order (posts, likes,
/// tab); the three kinds of mutation commute, so the order only matters
/// among posts.
#[derive(Debug, Default)]
pub struct FeedRequest {
    pub likes: Vec<u64>,
    pub posts: Vec<String>,
    pub tab: Option<NavTab>,
}

pub fn build_page(config: &Config, request: &FeedRequest) -> FeedPage {
    let mut page = FeedPage::seeded(config.viewer.to_author());

    for text in &request.posts {
        page.apply(FeedAction::EditDraft(DraftEdit::Replace(text.clone())));
        if page.submit_post().is_none() {
            log::debug!("skipped blank --post value");
        }
    }

    for &id in &request.likes {
        page.toggle_like(PostId(id));
    }

    if let Some(tab) = request.tab {
        page.select_tab(tab);
    }

    page
}

pub fn handle(config: &Config, request: FeedRequest, format: OutputFormat) -> Result<()> {
    let page = build_page(config, &request);
    let vm = present_page(&page);

    let result = CommandResultViewModel::new(vm).with_suggestion(
        Guidance::new("Open the interactive page").with_command("socialhub tui"),
    );

    ConsoleRenderer::new(format == OutputFormat::Json).render(result)
}
