//! TUI Components
//!
//! Components encapsulate UI State + Input Logic + Render Logic.
//! Domain changes never happen here: a component turns a key press into a
//! `FeedAction` and the renderer applies it to the page.
//!
//! ## Pattern:
//! ```rust,ignore
//! pub struct FooComponent {
//!     state: SomeState, // Private UI state
//! }
//!
//! impl FooComponent {
//!     pub fn handle_input(&mut self, key: KeyEvent) -> Option<FeedAction> {
//!         // Handle input, return action if the page should change
//!     }
//!
//!     pub fn render(&mut self, f: &mut Frame, area: Rect, data: &FooViewModel) {
//!         // Index safety checks here
//!     }
//! }
//! ```

pub mod composer;
pub mod feed;
pub mod sidebar;

pub use composer::{ComposerAction, ComposerComponent};
pub use feed::FeedComponent;
pub use sidebar::SidebarComponent;
