pub mod common;
pub mod config;
pub mod page;
pub mod result;
pub mod status;

pub use common::{Guidance, StatusBadge, StatusLevel};
pub use config::ConfigViewModel;
pub use page::{
    ComposerViewModel, DiscoveryViewModel, FeedViewModel, HeaderViewModel, NavItemViewModel,
    PageViewModel, PostViewModel, RecommendationViewModel, SidebarViewModel, TrendViewModel,
};
pub use result::CommandResultViewModel;
pub use status::StatusBarViewModel;
