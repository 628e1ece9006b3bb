//! Error types for the checklist domain.

use crate::types::TodoId;
use thiserror::Error;

/// Why the store rejected or ignored an action
///
/// Never returned to the display layer. The reducer records the most recent
/// one in `TodoState::last_error`.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TodoError {
    /// The todo name is empty or only whitespace
    #[error("Todo name cannot be empty")]
    EmptyName,

    /// The todo name exceeds the configured maximum
    #[error("Todo name too long ({len} characters, max {max})")]
    NameTooLong {
        /// Length of the rejected name in characters
        len: usize,
        /// Configured maximum
        max: usize,
    },

    /// No todo with this id is in the list
    #[error("Todo with ID {0} not found")]
    NotFound(TodoId),

    /// Every todo id has been handed out
    #[error("No todo IDs left")]
    IdsExhausted,
}
