use std::fmt;

/// Result type for socialhub-types operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur in the types layer
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Navigation tab identifier outside the fixed set
    UnknownTab(String),

    /// Author identity failed validation (empty name, malformed handle)
    InvalidAuthor(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::UnknownTab(id) => write!(
                f,
                "Unknown tab '{}' (expected one of: home, explore, messages, notifications, profile, settings)",
                id
            ),
            Error::InvalidAuthor(msg) => write!(f, "Invalid author: {}", msg),
        }
    }
}

impl std::error::Error for Error {}
