//! # Priority RwLock
//!
//! A readers-writer lock that gives writers priority over readers, built from
//! one `parking_lot::Mutex` and one `parking_lot::Condvar` rather than from an
//! existing readers-writer primitive.
//!
//! ## Core Problem Solved
//!
//! A plain readers-writer lock lets a continuous stream of readers keep the
//! lock in shared mode forever, starving every writer. Here a writer announces
//! intent as soon as it asks for the lock, and any reader arriving after that
//! waits until the writer has been served:
//!
//! - **Mutual exclusion**: a writer never overlaps readers or other writers
//! - **Shared concurrency**: any number of readers run together while no writer is pending
//! - **Writer priority**: announced writers block newly arriving readers
//! - **Drain and grant**: readers already inside finish normally, then one writer proceeds
//!
//! There is no FIFO ordering inside a class and no timeout or cancellation of
//! a pending acquisition. The lock is not reentrant.
//!
//! ## Raw protocol
//!
//! ```
//! use priority_rwlock::RawPriorityRwLock;
//!
//! let lock = RawPriorityRwLock::new();
//! lock.acquire_exclusive();
//! assert!(lock.snapshot().writer);
//! lock.release_exclusive();
//! ```
//!
//! ## Data-carrying lock with guards
//!
//! ```
//! use priority_rwlock::PriorityRwLock;
//!
//! let config = PriorityRwLock::new(vec![1, 2, 3]);
//! config.write().push(4);
//! assert_eq!(config.read().len(), 4);
//! ```
//!
//! ## Stress harness
//!
//! [`harness::run_stress`] drives a configurable mix of reader and writer
//! threads against one lock and checks exclusion, lost updates and stalls.
//! See `tests/priority_rwlock_test.rs` for scenario tests of every guarantee.

#![deny(missing_docs)]
#![deny(unsafe_code)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Lock state model, raw writer-priority protocol, and error types.
pub mod core;
/// Configuration models for the stress harness.
pub mod config;
/// Multi-threaded stress harness.
#[cfg(not(target_arch = "wasm32"))]
pub mod harness;
/// Data-carrying lock and RAII guards.
pub mod rwlock;
/// Shared utilities.
pub mod util;

pub use crate::core::{LockPhase, LockState, RawPriorityRwLock};
pub use crate::rwlock::{
    const_priority_rwlock, MappedPriorityRwLockReadGuard, MappedPriorityRwLockWriteGuard,
    PriorityRwLock, PriorityRwLockReadGuard, PriorityRwLockWriteGuard,
};
