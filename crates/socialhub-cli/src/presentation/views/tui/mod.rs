//! TUI View Components
//!
//! Ratatui Widget implementations for the feed page. Each view is a thin
//! wrapper around a ViewModel reference.
//!
//! ## Design Principles:
//! - Views take a reference to ViewModel (no ownership)
//! - NO state changes; only map ViewModel data to Ratatui widgets
//! - Color mapping from StatusLevel to Ratatui colors happens here

pub mod components;
pub mod composer;
pub mod discovery;
pub mod header;
pub mod post_list;
pub mod sidebar;
pub mod status_bar;

pub use composer::ComposerView;
pub use discovery::DiscoveryView;
pub use header::HeaderView;
pub use post_list::PostListView;
pub use sidebar::SidebarView;
pub use status_bar::StatusBarView;

use crate::presentation::view_models::StatusLevel;
use ratatui::style::{Color, Modifier, Style};

/// Accent used for the active tab, avatars and the publish button
pub(crate) const ACCENT: Color = Color::Cyan;

/// Convert StatusLevel to Ratatui Color
pub(crate) fn status_level_to_color(level: StatusLevel) -> Color {
    match level {
        StatusLevel::Success => Color::Green,
        StatusLevel::Info => Color::Cyan,
    }
}

/// Border style of a focusable panel
pub(crate) fn border_style(focused: bool) -> Style {
    if focused {
        Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::DarkGray)
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    use ratatui::buffer::Buffer;

    /// Buffer rows as strings, for substring assertions
    pub fn rows(buf: &Buffer) -> Vec<String> {
        let area = buf.area;
        (area.top()..area.bottom())
            .map(|y| {
                (area.left()..area.right())
                    .map(|x| buf[(x, y)].symbol())
                    .collect::<String>()
            })
            .collect()
    }

    pub fn contains(buf: &Buffer, needle: &str) -> bool {
        rows(buf).iter().any(|row| row.contains(needle))
    }
}
