use socialhub_engine::FeedPage;
use socialhub_types::{NavTab, Post};

use crate::presentation::view_models::{
    ComposerViewModel, DiscoveryViewModel, FeedViewModel, HeaderViewModel, NavItemViewModel,
    PageViewModel, PostViewModel, RecommendationViewModel, SidebarViewModel, TrendViewModel,
};

pub const APP_NAME: &str = "SocialHub";
pub const FEED_TITLE: &str = "Лента";
pub const FEED_SUBTITLE: &str = "Следите за обновлениями ваших друзей";
pub const COMPOSER_PLACEHOLDER: &str = "О чём думаете?";

pub fn present_page(page: &FeedPage) -> PageViewModel {
    let posts: Vec<PostViewModel> = page.feed().posts().iter().map(present_post).collect();

    PageViewModel {
        app_name: APP_NAME.to_string(),
        header: HeaderViewModel {
            title: FEED_TITLE.to_string(),
            subtitle: FEED_SUBTITLE.to_string(),
        },
        sidebar: present_sidebar(page.active_tab()),
        composer: ComposerViewModel {
            avatar: page.viewer().avatar.clone(),
            draft: page.draft().to_string(),
            placeholder: COMPOSER_PLACEHOLDER.to_string(),
            can_submit: page.can_submit(),
            char_count: page.draft().chars().count(),
        },
        feed: FeedViewModel {
            total_count: posts.len(),
            posts,
        },
        discovery: DiscoveryViewModel {
            recommendations: page
                .recommendations()
                .iter()
                .map(|r| RecommendationViewModel {
                    name: r.name.clone(),
                    handle: r.handle.clone(),
                    initials: r.initials(),
                    followers: r.followers,
                })
                .collect(),
            trends: page
                .trends()
                .iter()
                .map(|t| TrendViewModel {
                    tag: t.tag.clone(),
                    post_count: t.post_count,
                })
                .collect(),
        },
    }
}

fn present_sidebar(active: NavTab) -> SidebarViewModel {
    SidebarViewModel {
        active,
        items: NavTab::ALL
            .iter()
            .map(|&tab| NavItemViewModel {
                tab,
                label: tab.label().to_string(),
                icon: tab.icon().to_string(),
                active: tab == active,
            })
            .collect(),
    }
}

fn present_post(post: &Post) -> PostViewModel {
    PostViewModel {
        id: post.id.as_u64(),
        author_name: post.author.name.clone(),
        author_handle: post.author.handle.clone(),
        avatar: post.author.avatar.clone(),
        content: post.content.clone(),
        image: post.image.clone(),
        likes: post.likes,
        comments: post.comments,
        shares: post.shares,
        timestamp: post.timestamp.clone(),
        liked: post.liked,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use socialhub_engine::DraftEdit;
    use socialhub_types::PostId;

    #[test]
    fn test_seeded_page() {
        let vm = present_page(&FeedPage::default());

        assert_eq!(vm.feed.total_count, 3);
        assert_eq!(vm.feed.posts[0].author_handle, "@anna_dev");
        assert_eq!(vm.sidebar.items.len(), 6);
        assert_eq!(vm.sidebar.active, NavTab::Home);
        assert!(vm.sidebar.items[0].active);
        assert!(!vm.composer.can_submit);
        assert_eq!(vm.discovery.recommendations[0].initials, "ИИ");
        assert_eq!(vm.discovery.trends.len(), 4);
    }

    #[test]
    fn test_reflects_page_state() {
        let mut page = FeedPage::default();
        page.toggle_like(PostId(3));
        page.select_tab(NavTab::Profile);
        page.edit_draft(DraftEdit::Replace("черновик".to_string()));

        let vm = present_page(&page);

        assert!(vm.feed.posts[2].liked);
        assert_eq!(vm.feed.posts[2].likes, 90);
        assert_eq!(vm.sidebar.active, NavTab::Profile);
        let active: Vec<_> = vm.sidebar.items.iter().filter(|i| i.active).collect();
        assert_eq!(active.len(), 1);
        assert_eq!(active[0].tab, NavTab::Profile);
        assert!(vm.composer.can_submit);
        assert_eq!(vm.composer.char_count, 8);
    }
}
