pub mod page;
pub mod status;

pub use page::present_page;
pub use status::present_status_bar;
