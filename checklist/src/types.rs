//! Domain types for the checklist.
//!
//! A checklist is a single ordered list of todo items. Items are appended,
//! toggled in place, and removed only when completed items are cleared.

use crate::error::TodoError;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Unique identifier for a todo item
///
/// Serializes as a bare number.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct TodoId(u64);

impl TodoId {
    /// Highest representable id. Never handed out by the store.
    pub const MAX: Self = Self(u64::MAX);

    /// Creates a `TodoId` from a raw number
    #[must_use]
    pub const fn new(id: u64) -> Self {
        Self(id)
    }

    /// Returns the raw number
    #[must_use]
    pub const fn get(self) -> u64 {
        self.0
    }

    /// The id assigned after this one, or `None` once ids run out
    #[must_use]
    pub const fn next(self) -> Option<Self> {
        match self.0.checked_add(1) {
            Some(next) => Some(Self(next)),
            None => None,
        }
    }
}

impl From<u64> for TodoId {
    fn from(id: u64) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for TodoId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A single todo item
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TodoItem {
    /// Unique identifier
    pub id: TodoId,
    /// Label shown to the user
    pub name: String,
    /// Whether the todo is completed
    pub checked: bool,
}

impl TodoItem {
    /// Creates a new, unchecked todo item
    #[must_use]
    pub fn new(id: TodoId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            checked: false,
        }
    }

    /// Flips the completion flag
    pub const fn toggle(&mut self) {
        self.checked = !self.checked;
    }

    /// Returns true if the todo is not completed yet
    #[must_use]
    pub const fn is_active(&self) -> bool {
        !self.checked
    }
}

/// State of the checklist
///
/// The store owns the only mutable copy. Everything else works on snapshots.
///
/// Deserializing goes through [`TodoState::from_items`], so a loaded state
/// never holds duplicate ids and `next_id` is always past every id present.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "StateSnapshot")]
pub struct TodoState {
    /// All todos in insertion order
    pub todos: Vec<TodoItem>,
    /// Id handed to the next added todo
    pub next_id: TodoId,
    /// Last rejected or ignored action (if any)
    #[serde(skip)]
    pub last_error: Option<TodoError>,
}

impl TodoState {
    /// Creates a new empty state
    #[must_use]
    pub const fn new() -> Self {
        Self {
            todos: Vec::new(),
            next_id: TodoId::new(0),
            last_error: None,
        }
    }

    /// Creates a state holding the given items
    ///
    /// Only the first item with a given id is kept. `next_id` continues
    /// after the highest id present; if that is [`TodoId::MAX`] the state
    /// accepts no further adds.
    #[must_use]
    pub fn from_items(mut todos: Vec<TodoItem>) -> Self {
        let before = todos.len();
        let mut seen = HashSet::with_capacity(before);
        todos.retain(|todo| seen.insert(todo.id));
        if todos.len() < before {
            tracing::warn!(dropped = before - todos.len(), "Dropped todos with duplicate ids");
        }

        let next_id = todos
            .iter()
            .map(|todo| todo.id)
            .max()
            .map_or(TodoId::new(0), |max| max.next().unwrap_or(TodoId::MAX));

        Self {
            todos,
            next_id,
            last_error: None,
        }
    }

    /// Returns the list snapshot
    #[must_use]
    pub fn todo_list(&self) -> &[TodoItem] {
        &self.todos
    }

    /// Returns the number of todos
    #[must_use]
    pub fn count(&self) -> usize {
        self.todos.len()
    }

    /// Returns the number of completed todos
    #[must_use]
    pub fn completed_count(&self) -> usize {
        self.todos.iter().filter(|t| t.checked).count()
    }

    /// Returns the number of todos not completed yet
    #[must_use]
    pub fn active_count(&self) -> usize {
        self.count() - self.completed_count()
    }

    /// Returns a todo by ID
    #[must_use]
    pub fn get(&self, id: TodoId) -> Option<&TodoItem> {
        self.todos.iter().find(|t| t.id == id)
    }

    /// Checks if a todo exists
    #[must_use]
    pub fn exists(&self, id: TodoId) -> bool {
        self.get(id).is_some()
    }
}

/// Serialized form of [`TodoState`] before validation
#[derive(Deserialize)]
struct StateSnapshot {
    todos: Vec<TodoItem>,
    #[serde(default)]
    next_id: TodoId,
}

impl From<StateSnapshot> for TodoState {
    fn from(snapshot: StateSnapshot) -> Self {
        let mut state = Self::from_items(snapshot.todos);
        state.next_id = state.next_id.max(snapshot.next_id);
        state
    }
}

/// Actions the checklist store accepts
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum TodoAction {
    /// Append a new unchecked todo
    AddTodo {
        /// Label of the todo
        name: String,
    },

    /// Flip the completion flag of a todo
    CheckTodo {
        /// Todo to toggle
        id: TodoId,
    },

    /// Remove every completed todo
    ClearCompletedTodos,
}
