//! The store facade handed to the display layer.
//!
//! [`TodoStore`] is the seam between the display layer and the runtime:
//! the live [`TodoRuntime`] implements it by dispatching actions, and
//! [`crate::mocks::MockTodoStore`] implements it for tests.

use crate::config::ChecklistConfig;
use crate::reducer::{TodoEnvironment, TodoReducer};
use crate::types::{TodoAction, TodoId, TodoItem, TodoState};
use checklist_runtime::Store;
use std::sync::Arc;

/// The runtime store specialised to the checklist
pub type TodoRuntime = Store<TodoState, TodoAction, TodoEnvironment, TodoReducer>;

/// Operations the display layer may perform on the checklist
///
/// None of these fail from the caller's point of view. Rejected input and
/// unknown ids leave the list unchanged.
pub trait TodoStore {
    /// Snapshot of the current list, in insertion order
    fn todo_list(&self) -> Vec<TodoItem>;

    /// Append a new unchecked todo
    fn add_todo(&self, name: &str);

    /// Flip the completion flag of a todo
    fn check_todo(&self, id: TodoId);

    /// Remove every completed todo
    fn clear_completed_todos(&self);
}

/// Build an empty live store from configuration
#[must_use]
pub fn todo_store(config: &ChecklistConfig) -> TodoRuntime {
    Store::with_config(
        TodoState::new(),
        TodoReducer::new(),
        config.environment(),
        config.store,
    )
}

fn dispatch(store: &TodoRuntime, action: TodoAction) {
    if let Err(error) = store.send(action) {
        tracing::error!(%error, "Todo action failed");
    }
}

impl TodoStore for TodoRuntime {
    fn todo_list(&self) -> Vec<TodoItem> {
        self.state(|s| s.todos.clone())
    }

    fn add_todo(&self, name: &str) {
        dispatch(
            self,
            TodoAction::AddTodo {
                name: name.to_string(),
            },
        );
    }

    fn check_todo(&self, id: TodoId) {
        dispatch(self, TodoAction::CheckTodo { id });
    }

    fn clear_completed_todos(&self) {
        dispatch(self, TodoAction::ClearCompletedTodos);
    }
}

impl<T: TodoStore + ?Sized> TodoStore for &T {
    fn todo_list(&self) -> Vec<TodoItem> {
        (**self).todo_list()
    }

    fn add_todo(&self, name: &str) {
        (**self).add_todo(name);
    }

    fn check_todo(&self, id: TodoId) {
        (**self).check_todo(id);
    }

    fn clear_completed_todos(&self) {
        (**self).clear_completed_todos();
    }
}

impl<T: TodoStore + ?Sized> TodoStore for Arc<T> {
    fn todo_list(&self) -> Vec<TodoItem> {
        (**self).todo_list()
    }

    fn add_todo(&self, name: &str) {
        (**self).add_todo(name);
    }

    fn check_todo(&self, id: TodoId) {
        (**self).check_todo(id);
    }

    fn clear_completed_todos(&self) {
        (**self).clear_completed_todos();
    }
}
