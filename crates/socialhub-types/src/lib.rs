pub mod discovery;
pub mod error;
pub mod nav;
pub mod post;

pub use discovery::{Recommendation, Trend};
pub use error::{Error, Result};
pub use nav::NavTab;
pub use post::{Author, Post, PostId};
