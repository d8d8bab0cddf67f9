use serde::Serialize;

use super::common::StatusLevel;

/// Bottom bar of the TUI
#[derive(Debug, Clone, Serialize)]
pub struct StatusBarViewModel {
    pub post_count: usize,
    pub active_tab_label: String,
    pub focus_label: String,
    pub message: Option<String>,
    pub level: StatusLevel,
}
