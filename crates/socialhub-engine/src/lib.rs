//! State behind the feed page.
//!
//! [`FeedPage`] owns the three pieces of page state (posts, composer draft,
//! active tab) and exposes them read-only; every change is a [`FeedAction`].

pub mod composer;
pub mod feed;
pub mod page;
pub mod seed;

pub use composer::{Composer, DraftEdit};
pub use feed::{Feed, JUST_NOW};
pub use page::{ActionOutcome, FeedAction, FeedPage};
