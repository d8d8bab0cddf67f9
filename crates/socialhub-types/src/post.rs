use serde::{Deserialize, Serialize};
use std::fmt;

use crate::{Error, Result};

/// Post identifier.
///
/// Seeded posts use small ids; posts published in a session take the
/// creation time in milliseconds, bumped past the previous id when needed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PostId(pub u64);

impl PostId {
    pub fn as_u64(self) -> u64 {
        self.0
    }
}

impl fmt::Display for PostId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for PostId {
    fn from(id: u64) -> Self {
        PostId(id)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Author {
    pub name: String,
    /// Display handle including the leading `@`
    pub handle: String,
    /// Short label drawn inside the avatar bubble
    pub avatar: String,
}

impl Author {
    pub fn new(
        name: impl Into<String>,
        handle: impl Into<String>,
        avatar: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            handle: handle.into(),
            avatar: avatar.into(),
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.name.trim().is_empty() {
            return Err(Error::InvalidAuthor("name must not be empty".to_string()));
        }

        if !self.handle.starts_with('@') || self.handle.len() < 2 {
            return Err(Error::InvalidAuthor(format!(
                "handle '{}' must start with '@' followed by a name",
                self.handle
            )));
        }

        if self.avatar.trim().is_empty() {
            return Err(Error::InvalidAuthor(
                "avatar label must not be empty".to_string(),
            ));
        }

        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Post {
    pub id: PostId,
    pub author: Author,
    pub content: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    pub likes: u32,
    pub comments: u32,
    pub shares: u32,
    /// Free-text display marker ("2ч", "сейчас"), not a parsed datetime
    pub timestamp: String,
    /// Whether the viewer has liked this post
    pub liked: bool,
}

impl Post {
    /// Flip the viewer's like, keeping `likes` in step with `liked`.
    ///
    /// When the count cannot move (`u32::MAX`, or a liked post at zero) the
    /// post is left untouched, so two toggles always restore it exactly.
    pub fn toggle_like(&mut self) {
        let likes = if self.liked {
            self.likes.checked_sub(1)
        } else {
            self.likes.checked_add(1)
        };

        if let Some(likes) = likes {
            self.likes = likes;
            self.liked = !self.liked;
        }
    }

    pub fn has_image(&self) -> bool {
        self.image.is_some()
    }
}
