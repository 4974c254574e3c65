//! Error types for the stress harness.
//!
//! The lock itself has no failure path; these cover configuration and the
//! runtime checks performed by [`crate::harness`].

use std::time::Duration;

use thiserror::Error;

/// Errors produced by a stress run.
#[derive(Debug, Error)]
pub enum StressError {
    /// Configuration failed validation.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
    /// A mutual-exclusion or lost-update check failed.
    #[error("invariant violated: {0}")]
    InvariantViolated(String),
    /// Workers stopped making progress.
    #[error("stalled: {remaining} workers did not finish within {timeout:?}")]
    Stalled {
        /// Workers that never reported completion.
        remaining: usize,
        /// How long the harness waited for the next completion.
        timeout: Duration,
    },
    /// A worker thread panicked.
    #[error("worker thread panicked: {0}")]
    WorkerPanicked(String),
    /// A worker thread could not be spawned.
    #[error("failed to spawn worker thread: {0}")]
    Spawn(#[from] std::io::Error),
}

/// Application-facing result using anyhow for higher-level contexts.
pub type AppResult<T> = Result<T, anyhow::Error>;
