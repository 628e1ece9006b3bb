//! Mock todo store for testing.

use crate::reducer::{TodoEnvironment, TodoReducer};
use crate::store::TodoStore;
use crate::types::{TodoAction, TodoId, TodoItem, TodoState};
use checklist_core::reducer::Reducer;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

/// A call made on [`MockTodoStore`]
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TodoCall {
    /// `add_todo` with the name passed
    AddTodo(String),
    /// `check_todo` with the id passed
    CheckTodo(TodoId),
    /// `clear_completed_todos`
    ClearCompletedTodos,
}

#[derive(Debug, Default)]
struct Inner {
    state: TodoState,
    calls: Vec<TodoCall>,
}

/// Mock todo store.
///
/// In-memory implementation for testing. Records every call and applies the
/// same list rules as the live store, without a runtime or subscribers.
/// Actions fed back by effects are applied before the call returns.
///
/// **WARNING**: Do NOT use in production. This is for testing only!
#[derive(Clone, Debug, Default)]
pub struct MockTodoStore {
    inner: Arc<Mutex<Inner>>,
    env: TodoEnvironment,
}

impl MockTodoStore {
    /// Create an empty mock store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a mock store pre-populated with `todos`.
    #[must_use]
    pub fn with_todos(todos: Vec<TodoItem>) -> Self {
        Self {
            inner: Arc::new(Mutex::new(Inner {
                state: TodoState::from_items(todos),
                calls: Vec::new(),
            })),
            env: TodoEnvironment::default(),
        }
    }

    /// Every call made so far, in order.
    #[must_use]
    #[allow(clippy::unwrap_used)] // Test mock: mutex poisoning is a test failure
    pub fn calls(&self) -> Vec<TodoCall> {
        self.inner.lock().unwrap().calls.clone()
    }

    #[allow(clippy::unwrap_used)] // Test mock: mutex poisoning is a test failure
    fn apply(&self, call: TodoCall, action: TodoAction) {
        let mut inner = self.inner.lock().unwrap();
        inner.calls.push(call);

        let reducer = TodoReducer::new();
        let mut queue = VecDeque::from([action]);
        while let Some(action) = queue.pop_front() {
            for effect in reducer.reduce(&mut inner.state, action, &self.env) {
                queue.extend(effect.into_actions());
            }
        }
    }
}

impl TodoStore for MockTodoStore {
    #[allow(clippy::unwrap_used)] // Test mock: mutex poisoning is a test failure
    fn todo_list(&self) -> Vec<TodoItem> {
        self.inner.lock().unwrap().state.todos.clone()
    }

    fn add_todo(&self, name: &str) {
        self.apply(
            TodoCall::AddTodo(name.to_string()),
            TodoAction::AddTodo {
                name: name.to_string(),
            },
        );
    }

    fn check_todo(&self, id: TodoId) {
        self.apply(TodoCall::CheckTodo(id), TodoAction::CheckTodo { id });
    }

    fn clear_completed_todos(&self) {
        self.apply(TodoCall::ClearCompletedTodos, TodoAction::ClearCompletedTodos);
    }
}
