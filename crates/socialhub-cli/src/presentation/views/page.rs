//! Plain-text rendering of the feed page for the console.

use std::fmt;

use crate::presentation::formatters::{format_compact, wrap};
use crate::presentation::view_models::{PageViewModel, PostViewModel};

const CONTENT_WIDTH: usize = 72;
const INDENT: &str = "    ";

pub struct PageTextView<'a> {
    data: &'a PageViewModel,
}

impl<'a> PageTextView<'a> {
    pub fn new(data: &'a PageViewModel) -> Self {
        Self { data }
    }

    fn write_post(f: &mut fmt::Formatter<'_>, post: &PostViewModel) -> fmt::Result {
        writeln!(
            f,
            "[{}] {} {} · {}",
            post.id, post.author_name, post.author_handle, post.timestamp
        )?;

        for line in wrap(&post.content, CONTENT_WIDTH) {
            writeln!(f, "{}{}", INDENT, line)?;
        }

        if let Some(image) = &post.image {
            writeln!(f, "{}🖼  {}", INDENT, image)?;
        }

        let heart = if post.liked { "♥" } else { "♡" };
        writeln!(
            f,
            "{}{} {}   💬 {}   ↗ {}",
            INDENT, heart, post.likes, post.comments, post.shares
        )
    }
}

impl fmt::Display for PageTextView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let data = self.data;

        writeln!(
            f,
            "{} · {} ({} posts)",
            data.app_name, data.header.title, data.feed.total_count
        )?;
        writeln!(f, "{}", data.header.subtitle)?;
        writeln!(f)?;

        let tab = data
            .sidebar
            .items
            .iter()
            .find(|item| item.active)
            .map(|item| format!("{} ({})", item.label, item.tab))
            .unwrap_or_default();
        writeln!(f, "Tab: {}", tab)?;

        if data.composer.draft.is_empty() {
            writeln!(f, "Draft: —")?;
        } else {
            writeln!(f, "Draft: {:?}", data.composer.draft)?;
        }
        writeln!(f)?;

        if data.feed.posts.is_empty() {
            writeln!(f, "No posts yet.")?;
        }
        for post in &data.feed.posts {
            Self::write_post(f, post)?;
            writeln!(f)?;
        }

        writeln!(f, "Рекомендации")?;
        for rec in &data.discovery.recommendations {
            writeln!(
                f,
                "  {:<3} {} {} · {} подписчиков",
                rec.initials,
                rec.name,
                rec.handle,
                format_compact(rec.followers)
            )?;
        }
        writeln!(f)?;

        writeln!(f, "Тренды")?;
        for trend in &data.discovery.trends {
            writeln!(f, "  {} · {} постов", trend.tag, format_compact(trend.post_count))?;
        }

        Ok(())
    }
}

impl fmt::Display for PageViewModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", PageTextView::new(self))
    }
}
