use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::Error;

/// Sidebar navigation entries.
///
/// Selecting a tab only changes which entry is highlighted; the feed column
/// always shows the same posts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NavTab {
    #[default]
    Home,
    Explore,
    Messages,
    Notifications,
    Profile,
    Settings,
}

impl NavTab {
    /// Sidebar order
    pub const ALL: [NavTab; 6] = [
        NavTab::Home,
        NavTab::Explore,
        NavTab::Messages,
        NavTab::Notifications,
        NavTab::Profile,
        NavTab::Settings,
    ];

    pub fn id(self) -> &'static str {
        match self {
            NavTab::Home => "home",
            NavTab::Explore => "explore",
            NavTab::Messages => "messages",
            NavTab::Notifications => "notifications",
            NavTab::Profile => "profile",
            NavTab::Settings => "settings",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            NavTab::Home => "Лента",
            NavTab::Explore => "Поиск",
            NavTab::Messages => "Сообщения",
            NavTab::Notifications => "Уведомления",
            NavTab::Profile => "Профиль",
            NavTab::Settings => "Настройки",
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            NavTab::Home => "⌂",
            NavTab::Explore => "⌕",
            NavTab::Messages => "✉",
            NavTab::Notifications => "♪",
            NavTab::Profile => "☺",
            NavTab::Settings => "⚙",
        }
    }

    /// Position in the sidebar
    pub fn index(self) -> usize {
        Self::ALL
            .iter()
            .position(|tab| *tab == self)
            .unwrap_or_default()
    }

    /// Tab at a sidebar position, `None` when out of range
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }
}

impl fmt::Display for NavTab {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.id())
    }
}

impl FromStr for NavTab {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim().to_ascii_lowercase();
        Self::ALL
            .iter()
            .copied()
            .find(|tab| tab.id() == needle)
            .ok_or_else(|| Error::UnknownTab(s.to_string()))
    }
}
