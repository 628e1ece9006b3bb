//! Configuration for the checklist.
//!
//! Loads configuration from environment variables with sensible defaults.

use crate::reducer::TodoEnvironment;
use checklist_runtime::StoreConfig;
use std::env;
use thiserror::Error;

/// Environment variable for the todo name length limit
pub const MAX_NAME_LEN_VAR: &str = "CHECKLIST_MAX_NAME_LEN";
/// Environment variable for the action broadcast capacity
pub const BROADCAST_CAPACITY_VAR: &str = "CHECKLIST_BROADCAST_CAPACITY";
/// Environment variable for the feedback action limit
pub const MAX_FEEDBACK_ACTIONS_VAR: &str = "CHECKLIST_MAX_FEEDBACK_ACTIONS";
/// Environment variable for the log filter
pub const LOG_FILTER_VAR: &str = "RUST_LOG";

/// Default log filter when `RUST_LOG` is unset
pub const DEFAULT_LOG_FILTER: &str = "checklist=debug,checklist_runtime=debug";

/// Errors from loading configuration
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// A variable is set but is not a positive integer
    #[error("Invalid value for {key}: {value:?} (expected a positive integer)")]
    Invalid {
        /// Variable name
        key: &'static str,
        /// Raw value found
        value: String,
    },
}

/// Checklist configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChecklistConfig {
    /// Store runtime settings
    pub store: StoreConfig,
    /// Longest accepted todo name, in characters
    pub max_name_len: usize,
    /// `tracing` filter directives
    pub log_filter: String,
}

impl ChecklistConfig {
    /// Load configuration from environment variables.
    ///
    /// Unset variables fall back to defaults.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Invalid`] if a numeric variable is set but is
    /// not a positive integer.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration through an arbitrary key lookup.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Invalid`] if a numeric key is present but is
    /// not a positive integer.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let store = StoreConfig::new(
            positive(&lookup, BROADCAST_CAPACITY_VAR, defaults.store.broadcast_capacity)?,
            positive(
                &lookup,
                MAX_FEEDBACK_ACTIONS_VAR,
                defaults.store.max_feedback_actions,
            )?,
        );

        Ok(Self {
            store,
            max_name_len: positive(&lookup, MAX_NAME_LEN_VAR, defaults.max_name_len)?,
            log_filter: lookup(LOG_FILTER_VAR).unwrap_or(defaults.log_filter),
        })
    }

    /// Reducer environment for this configuration
    #[must_use]
    pub const fn environment(&self) -> TodoEnvironment {
        TodoEnvironment::new(self.max_name_len)
    }
}

impl Default for ChecklistConfig {
    fn default() -> Self {
        Self {
            store: StoreConfig::default(),
            max_name_len: TodoEnvironment::DEFAULT_MAX_NAME_LEN,
            log_filter: DEFAULT_LOG_FILTER.to_string(),
        }
    }
}

fn positive<F>(lookup: &F, key: &'static str, default: usize) -> Result<usize, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    let Some(value) = lookup(key) else {
        return Ok(default);
    };

    match value.trim().parse::<usize>() {
        Ok(parsed) if parsed > 0 => Ok(parsed),
        _ => Err(ConfigError::Invalid { key, value }),
    }
}
