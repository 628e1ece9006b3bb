//! Metric names recorded by the Store.
//!
//! The store records through the [`metrics`] facade only. No exporter is
//! installed here; recording is a no-op until the host application installs
//! a recorder.

use metrics::{describe_counter, describe_histogram};

// Re-export metrics macros for use in other modules
pub use metrics::{counter, histogram};

/// Total number of actions reduced (including feedback actions)
pub const ACTIONS_TOTAL: &str = "store.actions.total";

/// Time taken by a single reducer call
pub const REDUCER_DURATION_SECONDS: &str = "store.reducer.duration_seconds";

/// Number of effects returned by a single reducer call
pub const EFFECTS_COUNT: &str = "store.effects.count";

/// Number of `send` calls aborted because of a runaway feedback loop
pub const FEEDBACK_LIMIT_EXCEEDED: &str = "store.feedback.limit_exceeded";

/// Register all metric descriptions.
///
/// Call once after installing a recorder so exporters can render help text.
pub fn describe_metrics() {
    describe_counter!(ACTIONS_TOTAL, "Total number of actions processed by the store");
    describe_histogram!(
        REDUCER_DURATION_SECONDS,
        "Time taken to execute the reducer for one action"
    );
    describe_histogram!(EFFECTS_COUNT, "Number of effects returned per reducer call");
    describe_counter!(
        FEEDBACK_LIMIT_EXCEEDED,
        "Total number of sends aborted by the feedback action limit"
    );
}
