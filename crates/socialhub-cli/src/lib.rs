// NOTE: socialhub Architecture Rationale
//
// Why a seeded, in-memory page (no storage)?
// - Every session starts from the same mock dataset
// - State lives in one `FeedPage` and is only changed through `FeedAction`s
// - Nothing outlives the process except the optional config and log file
//
// Why two renderers over one presenter?
// - The TUI and the `feed` command show the same `PageViewModel`
// - `feed --format json` doubles as a scriptable view of the page state
// - Tests can drive actions without a terminal

mod args;
mod commands;
pub mod config;
mod handlers;
pub mod logging;
pub mod presentation;
pub mod types;

pub use args::{Cli, Commands, ConfigCommand};
pub use commands::run;
