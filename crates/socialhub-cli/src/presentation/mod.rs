//! # Presentation Layer
//!
//! Adaptation of **MVVM (Model-View-ViewModel)** with component-based UI
//! state for the interactive page.
//!
//! ## 🏗️ Data Flow
//!
//! ### Console (`feed`, `config`):
//! ```text
//! [ Handler ] --> [ Presenter ] --> [ ViewModel ] --> [ ConsoleRenderer ] ==(JSON)==> serde_json
//!                                                                        ==(Text)==> fmt::Display
//! ```
//!
//! ### Interactive TUI:
//! ```text
//! [ FeedPage ] --> [ Presenter ] --> [ PageViewModel ] --> [ TuiRenderer (Router) ]
//!      ^                                                            |
//!      |                                                            v
//!      +------------------- FeedAction <-------------- [ Component ] <-- key press
//! ```
//!
//! ## 🌟 Rules
//!
//! 1. **ViewModels hold raw data.** Counts stay numbers (`followers: 1200`);
//!    `formatters` turn them into "1.2K" inside views.
//! 2. **Data vs UI state.** The list cursor and focus live in components and
//!    the renderer, never in a ViewModel or in `FeedPage`.
//! 3. **Index safety.** Clamp the cursor against the current feed length
//!    before rendering.
//! 4. **Actions go up.** Components return `FeedAction`s; only the renderer
//!    applies them to the page.
//!
//! ## 📂 Where does code go?
//!
//! | If you need to... | Go to... |
//! |-------------------|----------|
//! | Add a field to the JSON output | `view_models/` |
//! | Derive data from the page (initials, active label) | `presenters/` |
//! | Change colors or layout | `views/` |
//! | Handle a key | `views/tui/components/` |
//! | Format a number or wrap text | `formatters/` |

pub mod formatters;
pub mod presenters;
pub mod renderers;
pub mod view_models;
pub mod views;

pub use renderers::{ConsoleRenderer, Renderer, TuiRenderer};
pub use view_models::{CommandResultViewModel, Guidance, StatusBadge, StatusLevel};
