use crate::presentation::view_models::{PageViewModel, StatusBarViewModel, StatusLevel};

pub fn present_status_bar(
    page: &PageViewModel,
    focus_label: &str,
    message: Option<(String, StatusLevel)>,
) -> StatusBarViewModel {
    let active_tab_label = page
        .sidebar
        .items
        .iter()
        .find(|item| item.active)
        .map(|item| item.label.clone())
        .unwrap_or_default();

    let (message, level) = match message {
        Some((text, level)) => (Some(text), level),
        None => (None, StatusLevel::Info),
    };

    StatusBarViewModel {
        post_count: page.feed.total_count,
        active_tab_label,
        focus_label: focus_label.to_string(),
        message,
        level,
    }
}
