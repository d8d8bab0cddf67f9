use serde::{Deserialize, Serialize};

/// Suggested account shown in the recommendations panel
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recommendation {
    pub name: String,
    pub handle: String,
    pub followers: u64,
}

impl Recommendation {
    pub fn new(name: impl Into<String>, handle: impl Into<String>, followers: u64) -> Self {
        Self {
            name: name.into(),
            handle: handle.into(),
            followers,
        }
    }

    /// First character of every word in the name ("Иван Иванов" -> "ИИ")
    pub fn initials(&self) -> String {
        self.name
            .split_whitespace()
            .filter_map(|word| word.chars().next())
            .collect()
    }
}

/// Hashtag shown in the trends panel
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Trend {
    pub tag: String,
    pub post_count: u64,
}

impl Trend {
    pub fn new(tag: impl Into<String>, post_count: u64) -> Self {
        Self {
            tag: tag.into(),
            post_count,
        }
    }
}
