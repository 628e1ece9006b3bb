//! # Checklist Runtime
//!
//! Runtime implementation for the Checklist reducer architecture.
//!
//! This crate provides the Store runtime that coordinates reducer execution
//! and effect handling.
//!
//! ## Core Components
//!
//! - **Store**: Owns the state, runs the reducer, executes effects
//! - **Snapshot subscriptions**: Every subscriber sees the new state before `send` returns
//! - **Action observation**: Every reduced action is broadcast to observers
//!
//! ## Execution Model
//!
//! The store is synchronous. `send` runs the reducer, publishes the new
//! snapshot, then feeds any `Effect::Send` actions back through the reducer
//! before returning. No async runtime is needed to drive it; the `tokio`
//! channel types it hands out can still be awaited by async consumers.
//!
//! ## Example
//!
//! ```ignore
//! use checklist_runtime::Store;
//!
//! let store = Store::new(initial_state, my_reducer, environment);
//!
//! // Send an action
//! store.send(Action::DoSomething)?;
//!
//! // Read state
//! let value = store.state(|s| s.some_field);
//! ```

use checklist_core::{effect::Effect, reducer::Reducer};

/// Metric names and descriptions for the Store
pub mod metrics;

/// Error types for the Store runtime
pub mod error {
    use thiserror::Error;

    /// Errors that can occur during Store operations
    #[derive(Error, Debug, Clone, PartialEq, Eq)]
    pub enum StoreError {
        /// A single `send` produced more feedback actions than allowed
        ///
        /// Actions reduced before the limit was hit keep their state changes.
        /// The remaining queued actions are dropped.
        #[error("Effect feedback exceeded {limit} actions for a single send")]
        FeedbackLimitExceeded {
            /// Configured maximum number of feedback actions
            limit: usize,
        },
    }
}

pub use error::StoreError;
pub use store::Store;

/// Configuration for Store instances
///
/// # Example
///
/// ```
/// use checklist_runtime::StoreConfig;
///
/// let config = StoreConfig::default()
///     .with_broadcast_capacity(64)
///     .with_max_feedback_actions(8);
///
/// assert_eq!(config.broadcast_capacity, 64);
/// assert_eq!(config.max_feedback_actions, 8);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StoreConfig {
    /// Number of actions buffered for each action observer before it lags
    pub broadcast_capacity: usize,
    /// Maximum number of feedback actions a single `send` may produce
    pub max_feedback_actions: usize,
}

impl StoreConfig {
    /// Default action broadcast capacity
    pub const DEFAULT_BROADCAST_CAPACITY: usize = 16;

    /// Default feedback action limit
    pub const DEFAULT_MAX_FEEDBACK_ACTIONS: usize = 64;

    /// Create a new configuration with custom values
    #[must_use]
    pub const fn new(broadcast_capacity: usize, max_feedback_actions: usize) -> Self {
        Self {
            broadcast_capacity,
            max_feedback_actions,
        }
    }

    /// Set the action broadcast capacity
    #[must_use]
    pub const fn with_broadcast_capacity(mut self, capacity: usize) -> Self {
        self.broadcast_capacity = capacity;
        self
    }

    /// Set the feedback action limit
    #[must_use]
    pub const fn with_max_feedback_actions(mut self, limit: usize) -> Self {
        self.max_feedback_actions = limit;
        self
    }
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self::new(
            Self::DEFAULT_BROADCAST_CAPACITY,
            Self::DEFAULT_MAX_FEEDBACK_ACTIONS,
        )
    }
}

/// Store module - The runtime for reducers
pub mod store {
    use super::{Effect, Reducer, StoreConfig, StoreError, metrics};
    use checklist_core::SmallVec;
    use std::collections::VecDeque;
    use std::time::Instant;
    use tokio::sync::{broadcast, watch};

    /// The Store - runtime coordinator for a reducer
    ///
    /// The Store manages:
    /// 1. State (inside a `watch` channel, so publishing is part of mutating)
    /// 2. Reducer (business logic)
    /// 3. Environment (injected dependencies)
    /// 4. Effect execution (with synchronous feedback loop)
    ///
    /// # Type Parameters
    ///
    /// - `S`: State type
    /// - `A`: Action type
    /// - `E`: Environment type
    /// - `R`: Reducer implementation
    ///
    /// # Borrowing
    ///
    /// Snapshot borrows (`state`, `Receiver::borrow`) hold a read guard on
    /// the state. Drop them before calling `send` on the same thread.
    pub struct Store<S, A, E, R>
    where
        R: Reducer<State = S, Action = A, Environment = E>,
    {
        state: watch::Sender<S>,
        reducer: R,
        environment: E,
        config: StoreConfig,
        /// Every action that reaches the reducer, in processing order.
        action_broadcast: broadcast::Sender<A>,
    }

    impl<S, A, E, R> Store<S, A, E, R>
    where
        R: Reducer<State = S, Action = A, Environment = E>,
        A: Clone,
    {
        /// Create a new store with initial state, reducer, and environment
        ///
        /// Uses [`StoreConfig::default`].
        #[must_use]
        pub fn new(initial_state: S, reducer: R, environment: E) -> Self {
            Self::with_config(initial_state, reducer, environment, StoreConfig::default())
        }

        /// Create a new Store with custom configuration
        ///
        /// A zero broadcast capacity is raised to one.
        #[must_use]
        pub fn with_config(
            initial_state: S,
            reducer: R,
            environment: E,
            config: StoreConfig,
        ) -> Self {
            let (state, _) = watch::channel(initial_state);
            let (action_broadcast, _) = broadcast::channel(config.broadcast_capacity.max(1));

            Self {
                state,
                reducer,
                environment,
                config,
                action_broadcast,
            }
        }

        /// The configuration this store was built with
        #[must_use]
        pub const fn config(&self) -> &StoreConfig {
            &self.config
        }

        /// Send an action to the store
        ///
        /// This is the only way to change state:
        /// 1. Calls reducer with (state, action, environment)
        /// 2. Publishes the new state to every snapshot subscriber
        /// 3. Broadcasts the action to action observers
        /// 4. Feeds actions from returned effects back through steps 1-3
        ///
        /// Everything happens before `send` returns. Feedback actions are
        /// processed breadth-first in the order their effects were returned.
        ///
        /// # Errors
        ///
        /// Returns [`StoreError::FeedbackLimitExceeded`] if the effects of this
        /// action produce more than `max_feedback_actions` follow-up actions.
        ///
        /// # Panics
        ///
        /// If the reducer panics, the panic propagates to the caller.
        /// Reducers should be pure functions that do not panic.
        #[tracing::instrument(skip(self, action), name = "store_send")]
        pub fn send(&self, action: A) -> Result<(), StoreError> {
            tracing::debug!("Processing action");

            let limit = self.config.max_feedback_actions;
            let mut queue = VecDeque::from([action]);
            let mut feedback = 0_usize;

            while let Some(action) = queue.pop_front() {
                for effect in self.reduce(action) {
                    for next in effect.into_actions() {
                        feedback += 1;
                        if feedback > limit {
                            tracing::error!(limit, "Effect feedback limit exceeded, dropping queued actions");
                            metrics::counter!(metrics::FEEDBACK_LIMIT_EXCEEDED).increment(1);
                            return Err(StoreError::FeedbackLimitExceeded { limit });
                        }
                        queue.push_back(next);
                    }
                }
            }

            tracing::debug!(feedback, "Action processing completed");
            Ok(())
        }

        /// Run the reducer for one action and publish the result
        fn reduce(&self, action: A) -> SmallVec<[Effect<A>; 4]> {
            metrics::counter!(metrics::ACTIONS_TOTAL).increment(1);

            let observed = (self.action_broadcast.receiver_count() > 0).then(|| action.clone());

            let start = Instant::now();
            let mut effects = SmallVec::new();
            self.state.send_modify(|state| {
                let span = tracing::trace_span!("reducer_execution");
                let _enter = span.enter();
                effects = self.reducer.reduce(state, action, &self.environment);
            });
            metrics::histogram!(metrics::REDUCER_DURATION_SECONDS)
                .record(start.elapsed().as_secs_f64());

            tracing::trace!("Reducer completed, returned {} effects", effects.len());

            // Note: Precision loss acceptable for metrics (effect counts < 2^52)
            #[allow(clippy::cast_precision_loss)]
            metrics::histogram!(metrics::EFFECTS_COUNT).record(effects.len() as f64);

            if let Some(action) = observed {
                if self.action_broadcast.send(action).is_err() {
                    tracing::trace!("Action observers went away before broadcast");
                }
            }

            effects
        }

        /// Read current state via a closure
        ///
        /// ```ignore
        /// let item_count = store.state(|s| s.todos.len());
        /// ```
        ///
        /// # Deadlocks
        ///
        /// The closure runs under a read guard on the state. Calling `send`
        /// from inside it, or while a `Receiver::borrow()` guard from
        /// [`Store::subscribe`] is alive on the same thread, blocks forever.
        /// Return owned data from the closure and drop guards before sending.
        pub fn state<F, T>(&self, f: F) -> T
        where
            F: FnOnce(&S) -> T,
        {
            let state = self.state.borrow();
            f(&state)
        }

        /// Clone the current state
        #[must_use]
        pub fn snapshot(&self) -> S
        where
            S: Clone,
        {
            self.state.borrow().clone()
        }

        /// Subscribe to state snapshots
        ///
        /// The receiver always holds the latest state. The current value is
        /// marked as seen, so `has_changed` / `changed` only fire for states
        /// published after subscribing.
        #[must_use]
        pub fn subscribe(&self) -> watch::Receiver<S> {
            self.state.subscribe()
        }

        /// Subscribe to all actions from this store
        ///
        /// Receives a clone of every action the reducer processes, including
        /// actions fed back by effects.
        ///
        /// # Notes
        ///
        /// - If the receiver lags, it skips old actions and receives `RecvError::Lagged`
        /// - Actions sent while no observer is subscribed are not buffered
        #[must_use]
        pub fn subscribe_actions(&self) -> broadcast::Receiver<A> {
            self.action_broadcast.subscribe()
        }

        /// Number of live snapshot subscribers
        #[must_use]
        pub fn subscriber_count(&self) -> usize {
            self.state.receiver_count()
        }
    }
}
