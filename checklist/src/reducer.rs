//! Reducer logic for the checklist.
//!
//! Every action is validated first. Rejected actions leave the list alone and
//! record why in `last_error`; accepted actions update the list in place and
//! clear it.

use crate::error::TodoError;
use crate::types::{TodoAction, TodoId, TodoItem, TodoState};
use checklist_core::{SmallVec, effect::Effect, reducer::Reducer};

/// Environment dependencies for the checklist reducer
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TodoEnvironment {
    /// Longest accepted todo name, in characters
    pub max_name_len: usize,
}

impl TodoEnvironment {
    /// Default limit on todo name length
    pub const DEFAULT_MAX_NAME_LEN: usize = 500;

    /// Creates a new `TodoEnvironment`
    #[must_use]
    pub const fn new(max_name_len: usize) -> Self {
        Self { max_name_len }
    }
}

impl Default for TodoEnvironment {
    fn default() -> Self {
        Self::new(Self::DEFAULT_MAX_NAME_LEN)
    }
}

/// Reducer for the checklist
#[derive(Clone, Copy, Debug, Default)]
pub struct TodoReducer;

impl TodoReducer {
    /// Creates a new `TodoReducer`
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Validates an `AddTodo` action, returning the id after the one to assign
    fn validate_add_todo(
        state: &TodoState,
        name: &str,
        env: &TodoEnvironment,
    ) -> Result<TodoId, TodoError> {
        if name.trim().is_empty() {
            return Err(TodoError::EmptyName);
        }

        let len = name.chars().count();
        if len > env.max_name_len {
            return Err(TodoError::NameTooLong {
                len,
                max: env.max_name_len,
            });
        }

        state.next_id.next().ok_or(TodoError::IdsExhausted)
    }

    /// Validates a `CheckTodo` action
    fn validate_check_todo(state: &TodoState, id: TodoId) -> Result<(), TodoError> {
        if !state.exists(id) {
            return Err(TodoError::NotFound(id));
        }

        Ok(())
    }

    fn reject(state: &mut TodoState, error: TodoError) {
        tracing::warn!(%error, "Todo action rejected");
        state.last_error = Some(error);
    }

    fn add_todo(state: &mut TodoState, name: String, following: TodoId) {
        let id = state.next_id;
        state.next_id = following;
        tracing::debug!(%id, "Todo added");
        state.todos.push(TodoItem::new(id, name));
        state.last_error = None;
    }

    fn check_todo(state: &mut TodoState, id: TodoId) {
        if let Some(todo) = state.todos.iter_mut().find(|t| t.id == id) {
            todo.toggle();
            tracing::debug!(%id, checked = todo.checked, "Todo toggled");
        }
        state.last_error = None;
    }

    fn clear_completed_todos(state: &mut TodoState) {
        let before = state.todos.len();
        state.todos.retain(TodoItem::is_active);
        tracing::debug!(removed = before - state.todos.len(), "Completed todos cleared");
        state.last_error = None;
    }
}

impl Reducer for TodoReducer {
    type State = TodoState;
    type Action = TodoAction;
    type Environment = TodoEnvironment;

    fn reduce(
        &self,
        state: &mut Self::State,
        action: Self::Action,
        env: &Self::Environment,
    ) -> SmallVec<[Effect<Self::Action>; 4]> {
        match action {
            TodoAction::AddTodo { name } => match Self::validate_add_todo(state, &name, env) {
                Ok(following) => Self::add_todo(state, name, following),
                Err(error) => Self::reject(state, error),
            },

            TodoAction::CheckTodo { id } => match Self::validate_check_todo(state, id) {
                Ok(()) => Self::check_todo(state, id),
                Err(error) => Self::reject(state, error),
            },

            TodoAction::ClearCompletedTodos => Self::clear_completed_todos(state),
        }

        SmallVec::new()
    }
}
