//! Derived views over a list snapshot.
//!
//! Everything here is a pure function of its inputs. The display layer
//! calls these after every store notification.

use crate::types::TodoItem;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use thiserror::Error;

/// Filter selection shown as a tab
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tab {
    /// Every todo
    #[default]
    All,
    /// Todos not completed yet
    Active,
    /// Completed todos
    Completed,
}

impl Tab {
    /// Tabs in display order
    pub const ALL: [Self; 3] = [Self::All, Self::Active, Self::Completed];

    /// Position of this tab in the tab bar
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Self::All => 0,
            Self::Active => 1,
            Self::Completed => 2,
        }
    }

    /// Tab at a tab bar position
    #[must_use]
    pub const fn from_index(index: usize) -> Option<Self> {
        match index {
            0 => Some(Self::All),
            1 => Some(Self::Active),
            2 => Some(Self::Completed),
            _ => None,
        }
    }

    /// Label shown on the tab
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::All => "All",
            Self::Active => "Active",
            Self::Completed => "Completed",
        }
    }

    /// Returns true if the item is visible under this tab
    #[must_use]
    pub const fn matches(self, item: &TodoItem) -> bool {
        match self {
            Self::All => true,
            Self::Active => !item.checked,
            Self::Completed => item.checked,
        }
    }
}

impl std::fmt::Display for Tab {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Error returned when parsing an unknown tab name
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Unknown tab: {0:?} (expected all, active or completed)")]
pub struct ParseTabError(pub String);

impl FromStr for Tab {
    type Err = ParseTabError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|tab| tab.label().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ParseTabError(s.to_string()))
    }
}

/// Items visible under `tab`, in list order
#[must_use]
pub fn filter_by_tab(list: &[TodoItem], tab: Tab) -> Vec<TodoItem> {
    list.iter().filter(|item| tab.matches(item)).cloned().collect()
}

/// Number of todos not completed yet
#[must_use]
pub fn count_active(list: &[TodoItem]) -> usize {
    list.iter().filter(|item| item.is_active()).count()
}

/// Footer label for the active count, e.g. "2 items left"
#[must_use]
pub fn items_left_label(count: usize) -> String {
    if count == 1 {
        "1 item left".to_string()
    } else {
        format!("{count} items left")
    }
}

/// Whether the add control should be enabled for this input
#[must_use]
pub fn can_submit(input: &str) -> bool {
    !input.trim().is_empty()
}

/// Everything the display layer renders for one tab
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct TodoView {
    /// Selected tab
    pub tab: Tab,
    /// Items visible under the tab
    pub visible: Vec<TodoItem>,
    /// Todos not completed yet, across all tabs
    pub active_count: usize,
    /// Footer label for `active_count`
    pub items_left: String,
    /// Whether "Clear completed" would remove anything
    pub has_completed: bool,
}

impl TodoView {
    /// Derives the view for `tab` from a list snapshot
    #[must_use]
    pub fn derive(list: &[TodoItem], tab: Tab) -> Self {
        let active_count = count_active(list);

        Self {
            tab,
            visible: filter_by_tab(list, tab),
            active_count,
            items_left: items_left_label(active_count),
            has_completed: active_count < list.len(),
        }
    }
}
