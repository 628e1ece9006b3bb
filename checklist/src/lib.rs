//! A single-list todo store with tab filtering.
//!
//! The list lives in a [`TodoRuntime`] store. The display layer talks to it
//! through the [`TodoStore`] trait, subscribes to snapshots, and renders a
//! [`TodoView`] derived from each snapshot and the selected [`Tab`].
//!
//! - Append todos, toggle them, and clear completed ones
//! - Blank or oversized names are rejected without touching the list
//! - Ids are assigned in order and never reused
//! - Testing with `ReducerTest` and [`mocks::MockTodoStore`]
//!
//! # Quick Start
//!
//! ```
//! use checklist::{ChecklistConfig, Tab, TodoId, TodoPage, TodoStore, todo_store};
//!
//! let store = todo_store(&ChecklistConfig::default());
//! let mut page = TodoPage::new(&store);
//!
//! page.set_input("Buy milk");
//! page.submit();
//! page.toggle(TodoId::new(0));
//!
//! page.select_tab(Tab::Completed);
//! let view = page.view();
//! assert_eq!(view.visible.len(), 1);
//! assert_eq!(view.items_left, "0 items left");
//! assert_eq!(store.todo_list().len(), 1);
//! ```

pub mod config;
pub mod error;
pub mod mocks;
pub mod page;
pub mod reducer;
pub mod store;
pub mod types;
pub mod view;

// Re-export commonly used types
pub use config::{ChecklistConfig, ConfigError};
pub use error::TodoError;
pub use page::TodoPage;
pub use reducer::{TodoEnvironment, TodoReducer};
pub use store::{TodoRuntime, TodoStore, todo_store};
pub use types::{TodoAction, TodoId, TodoItem, TodoState};
pub use view::{
    ParseTabError, Tab, TodoView, can_submit, count_active, filter_by_tab, items_left_label,
};
