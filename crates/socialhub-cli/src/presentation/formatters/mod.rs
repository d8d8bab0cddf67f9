pub mod number;
pub mod text;

pub use number::format_compact;
pub use text::wrap;
