pub mod page;
pub mod tui;

pub use page::PageTextView;
