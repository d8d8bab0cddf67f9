use serde::Serialize;
use socialhub_types::NavTab;

/// Everything the feed page draws, as raw data.
#[derive(Debug, Clone, Serialize)]
pub struct PageViewModel {
    pub app_name: String,
    pub header: HeaderViewModel,
    pub sidebar: SidebarViewModel,
    pub composer: ComposerViewModel,
    pub feed: FeedViewModel,
    pub discovery: DiscoveryViewModel,
}

#[derive(Debug, Clone, Serialize)]
pub struct HeaderViewModel {
    pub title: String,
    pub subtitle: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct SidebarViewModel {
    pub active: NavTab,
    pub items: Vec<NavItemViewModel>,
}

#[derive(Debug, Clone, Serialize)]
pub struct NavItemViewModel {
    pub tab: NavTab,
    pub label: String,
    pub icon: String,
    pub active: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct ComposerViewModel {
    pub avatar: String,
    pub draft: String,
    pub placeholder: String,
    pub can_submit: bool,
    pub char_count: usize,
}

#[derive(Debug, Clone, Serialize)]
pub struct FeedViewModel {
    pub posts: Vec<PostViewModel>,
    pub total_count: usize,
}

#[derive(Debug, Clone, Serialize)]
pub struct PostViewModel {
    pub id: u64,
    pub author_name: String,
    pub author_handle: String,
    pub avatar: String,
    pub content: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    pub likes: u32,
    pub comments: u32,
    pub shares: u32,
    pub timestamp: String,
    pub liked: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct DiscoveryViewModel {
    pub recommendations: Vec<RecommendationViewModel>,
    pub trends: Vec<TrendViewModel>,
}

#[derive(Debug, Clone, Serialize)]
pub struct RecommendationViewModel {
    pub name: String,
    pub handle: String,
    pub initials: String,
    pub followers: u64,
}

#[derive(Debug, Clone, Serialize)]
pub struct TrendViewModel {
    pub tag: String,
    pub post_count: u64,
}
