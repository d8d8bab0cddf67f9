use socialhub_types::{Author, Post, PostId};

/// Timestamp marker shown on posts published during the session
pub const JUST_NOW: &str = "сейчас";

/// Ordered list of posts, newest first.
///
/// New posts are only ever prepended; existing posts are never re-sorted,
/// removed or edited apart from the like toggle.
#[derive(Debug, Clone, Default)]
pub struct Feed {
    posts: Vec<Post>,
    last_id: u64,
}

impl Feed {
    pub fn new(posts: Vec<Post>) -> Self {
        let last_id = posts.iter().map(|p| p.id.as_u64()).max().unwrap_or(0);
        Self { posts, last_id }
    }

    pub fn posts(&self) -> &[Post] {
        &self.posts
    }

    pub fn len(&self) -> usize {
        self.posts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.posts.is_empty()
    }

    pub fn get(&self, id: PostId) -> Option<&Post> {
        self.posts.iter().find(|p| p.id == id)
    }

    /// Flip the like on `id`. Returns `false` (and changes nothing) when the
    /// post does not exist.
    pub fn toggle_like(&mut self, id: PostId) -> bool {
        match self.posts.iter_mut().find(|p| p.id == id) {
            Some(post) => {
                post.toggle_like();
                true
            }
            None => false,
        }
    }

    /// Prepend a fresh post by `author` and return its id.
    ///
    /// `now_millis` seeds the id; it is bumped past the last issued id so ids
    /// stay unique when the clock stalls or goes backwards.
    pub fn publish(&mut self, author: Author, content: String, now_millis: u64) -> PostId {
        let id = PostId(now_millis.max(self.last_id + 1));
        self.last_id = id.as_u64();

        let post = Post {
            id,
            author,
            content,
            image: None,
            likes: 0,
            comments: 0,
            shares: 0,
            timestamp: JUST_NOW.to_string(),
            liked: false,
        };
        self.posts.insert(0, post);

        id
    }
}
