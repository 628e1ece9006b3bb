//! Integration tests for Store snapshot and action broadcasting
//!
//! Tests the observation features the display layer relies on: snapshot
//! subscriptions that are current before `send` returns, and action streams
//! that include actions fed back by effects.

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)] // Test code can use unwrap/expect/panic

use checklist_core::{SmallVec, effect::Effect, reducer::Reducer, smallvec};
use checklist_runtime::{Store, StoreConfig, StoreError};
use checklist_testing::{drain_actions, init_test_tracing};
use std::time::Duration;

// ============================================================================
// Test Fixtures
// ============================================================================

#[derive(Debug, Clone, PartialEq)]
enum TestAction {
    /// Start a three step workflow
    StartWorkflow { id: u64 },
    /// Workflow step completed
    StepCompleted { id: u64, step: u32 },
    /// Workflow finished (terminal action)
    WorkflowCompleted { id: u64 },
    /// Simple increment command
    Increment,
    /// Incremented event
    Incremented { value: u32 },
}

#[derive(Debug, Clone, Default, PartialEq)]
struct TestState {
    counter: u32,
    steps: Vec<u32>,
}

#[derive(Clone)]
struct TestEnvironment;

#[derive(Clone)]
struct TestReducer;

impl Reducer for TestReducer {
    type State = TestState;
    type Action = TestAction;
    type Environment = TestEnvironment;

    fn reduce(
        &self,
        state: &mut Self::State,
        action: Self::Action,
        _env: &Self::Environment,
    ) -> SmallVec<[Effect<Self::Action>; 4]> {
        match action {
            TestAction::StartWorkflow { id } => {
                state.steps.clear();
                smallvec![Effect::Send(TestAction::StepCompleted { id, step: 1 })]
            },

            TestAction::StepCompleted { id, step } => {
                state.steps.push(step);

                if step < 3 {
                    smallvec![Effect::Send(TestAction::StepCompleted { id, step: step + 1 })]
                } else {
                    smallvec![Effect::Send(TestAction::WorkflowCompleted { id })]
                }
            },

            TestAction::WorkflowCompleted { .. } | TestAction::Incremented { .. } => {
                smallvec![Effect::None]
            },

            TestAction::Increment => {
                state.counter += 1;
                let value = state.counter;
                smallvec![Effect::Send(TestAction::Incremented { value })]
            },
        }
    }
}

fn test_store() -> Store<TestState, TestAction, TestEnvironment, TestReducer> {
    init_test_tracing();
    Store::new(TestState::default(), TestReducer, TestEnvironment)
}

// ============================================================================
// Tests
// ============================================================================

/// Every reduced action reaches action observers, in processing order.
#[test]
fn test_subscribe_actions_includes_feedback() {
    let store = test_store();
    let mut rx = store.subscribe_actions();

    store.send(TestAction::StartWorkflow { id: 100 }).unwrap();

    assert_eq!(
        drain_actions(&mut rx),
        vec![
            TestAction::StartWorkflow { id: 100 },
            TestAction::StepCompleted { id: 100, step: 1 },
            TestAction::StepCompleted { id: 100, step: 2 },
            TestAction::StepCompleted { id: 100, step: 3 },
            TestAction::WorkflowCompleted { id: 100 },
        ]
    );
    assert_eq!(store.state(|s| s.steps.clone()), vec![1, 2, 3]);
}

/// Multiple observers each get their own copy of the stream.
#[test]
fn test_multiple_action_observers() {
    let store = test_store();
    let mut rx1 = store.subscribe_actions();
    let mut rx2 = store.subscribe_actions();

    store.send(TestAction::Increment).unwrap();

    let expected = vec![TestAction::Increment, TestAction::Incremented { value: 1 }];
    assert_eq!(drain_actions(&mut rx1), expected);
    assert_eq!(drain_actions(&mut rx2), expected);
}

/// Observers only see actions sent after they subscribed.
#[test]
fn test_late_observer_misses_earlier_actions() {
    let store = test_store();
    store.send(TestAction::Increment).unwrap();

    let mut rx = store.subscribe_actions();
    store.send(TestAction::Increment).unwrap();

    assert_eq!(
        drain_actions(&mut rx),
        vec![TestAction::Increment, TestAction::Incremented { value: 2 }]
    );
}

/// A slow observer lags instead of blocking the store.
#[test]
fn test_lagging_observer_does_not_block_store() {
    init_test_tracing();
    let config = StoreConfig::default().with_broadcast_capacity(2);
    let store = Store::with_config(TestState::default(), TestReducer, TestEnvironment, config);
    let mut rx = store.subscribe_actions();

    for _ in 0..5 {
        store.send(TestAction::Increment).unwrap();
    }

    assert_eq!(store.state(|s| s.counter), 5);
    assert_eq!(
        drain_actions(&mut rx),
        vec![TestAction::Increment, TestAction::Incremented { value: 5 }]
    );
}

/// Every snapshot subscriber sees the final state as soon as `send` returns.
#[test]
fn test_snapshot_subscribers_are_current() {
    let store = test_store();
    let rx1 = store.subscribe();
    let rx2 = store.subscribe();

    store.send(TestAction::StartWorkflow { id: 7 }).unwrap();

    assert_eq!(rx1.borrow().steps, vec![1, 2, 3]);
    assert_eq!(*rx2.borrow(), store.snapshot());
}

/// Async consumers are woken by `changed()`.
#[tokio::test]
async fn test_async_subscriber_wakes_on_change() {
    let store = test_store();
    let mut rx = store.subscribe();

    let waiter = tokio::spawn(async move {
        rx.changed().await.unwrap();
        let counter = rx.borrow_and_update().counter;
        counter
    });

    tokio::task::yield_now().await;
    store.send(TestAction::Increment).unwrap();

    let counter = tokio::time::timeout(Duration::from_secs(1), waiter)
        .await
        .expect("subscriber was not woken")
        .expect("subscriber task panicked");
    assert_eq!(counter, 1);
}

/// Runaway feedback stops at the configured limit.
#[test]
fn test_feedback_limit_applies_per_send() {
    init_test_tracing();
    let config = StoreConfig::default().with_max_feedback_actions(2);
    let store = Store::with_config(TestState::default(), TestReducer, TestEnvironment, config);

    // Workflow needs four feedback actions
    let result = store.send(TestAction::StartWorkflow { id: 1 });
    assert_eq!(result, Err(StoreError::FeedbackLimitExceeded { limit: 2 }));
    assert_eq!(store.state(|s| s.steps.clone()), vec![1, 2]);

    // Increment needs one, and the count starts over
    assert_eq!(store.send(TestAction::Increment), Ok(()));
    assert_eq!(store.state(|s| s.counter), 1);
}

/// A pending `changed()` future is ready as soon as `send` returns, without
/// an executor driving the store.
#[test]
fn test_changed_future_ready_after_send() {
    let store = test_store();
    let mut rx = store.subscribe();
    let mut changed = tokio_test::task::spawn(rx.changed());

    tokio_test::assert_pending!(changed.poll());

    store.send(TestAction::Increment).unwrap();

    assert!(changed.is_woken());
    tokio_test::assert_ready_ok!(changed.poll());
}
