//! # Checklist Testing
//!
//! Testing utilities and helpers for the Checklist reducer architecture.
//!
//! This crate provides:
//! - [`ReducerTest`]: Given-When-Then testing for reducers
//! - Assertion helpers for effects
//! - Helpers for draining store channels and installing test tracing
//!
//! ## Example
//!
//! ```ignore
//! use checklist_testing::{helpers, ReducerTest};
//! use checklist_runtime::Store;
//!
//! #[test]
//! fn test_add_flow() {
//!     let store = Store::new(TodoState::default(), TodoReducer::new(), env);
//!     let mut actions = store.subscribe_actions();
//!
//!     store.send(TodoAction::AddTodo { name: "Buy milk".into() })?;
//!
//!     assert_eq!(helpers::drain_actions(&mut actions).len(), 1);
//! }
//! ```


pub use reducer_test::{ReducerTest, assertions};

/// Test helpers and utilities
pub mod helpers {
    use tokio::sync::broadcast::{self, error::TryRecvError};
    use tracing_subscriber::EnvFilter;

    /// Collect every action currently buffered in an action observer
    ///
    /// Does not wait. Actions skipped because the receiver lagged are lost;
    /// draining continues with the oldest action still buffered.
    pub fn drain_actions<A: Clone>(rx: &mut broadcast::Receiver<A>) -> Vec<A> {
        let mut actions = Vec::new();
        loop {
            match rx.try_recv() {
                Ok(action) => actions.push(action),
                Err(TryRecvError::Lagged(_)) => {},
                Err(TryRecvError::Empty | TryRecvError::Closed) => return actions,
            }
        }
    }

    /// Install a `tracing` subscriber that writes through the test harness
    ///
    /// Honors `RUST_LOG`, defaulting to `warn`. Safe to call from every test;
    /// only the first call installs a subscriber.
    pub fn init_test_tracing() {
        let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
        // Another test may already have installed the global subscriber
        let _ = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_test_writer()
            .try_init();
    }
}

pub use helpers::{drain_actions, init_test_tracing};

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::sync::broadcast;

    #[test]
    fn test_drain_actions_empty() {
        let (_tx, mut rx) = broadcast::channel::<u32>(4);
        assert!(drain_actions(&mut rx).is_empty());
    }

    #[test]
    fn test_drain_actions_in_order() {
        let (tx, mut rx) = broadcast::channel(4);
        for n in 1..=3 {
            assert!(tx.send(n).is_ok());
        }

        assert_eq!(drain_actions(&mut rx), vec![1, 2, 3]);
        assert!(drain_actions(&mut rx).is_empty());
    }

    #[test]
    fn test_drain_actions_after_lag() {
        let (tx, mut rx) = broadcast::channel(2);
        for n in 1..=5 {
            assert!(tx.send(n).is_ok());
        }

        assert_eq!(drain_actions(&mut rx), vec![4, 5]);
    }

    #[test]
    fn test_init_test_tracing_is_idempotent() {
        init_test_tracing();
        init_test_tracing();
    }
}
