//! Lock state model.
//!
//! `LockState` is the whole of the mutable state behind a [`RawPriorityRwLock`]:
//! a reader count, a writer flag and the number of writers that have announced
//! intent. The guard predicates used by the acquire paths live here so that the
//! protocol in [`crate::core::raw`] reads as plain wait loops.
//!
//! [`RawPriorityRwLock`]: crate::core::RawPriorityRwLock

use serde::{Deserialize, Serialize};

/// State guarded by the internal mutex of a priority lock.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LockState {
    /// Threads currently holding shared access.
    pub readers: u32,
    /// Whether a thread currently holds exclusive access.
    pub writer: bool,
    /// Writers that have announced intent and are waiting (or about to wait).
    pub write_waiters: u32,
}

/// Conceptual phase of the lock, derived from [`LockState`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LockPhase {
    /// Nobody holds the lock.
    Idle,
    /// The given number of readers hold shared access.
    Shared(u32),
    /// One writer holds exclusive access.
    Exclusive,
}

impl LockState {
    /// Unlocked state with no pending writers.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            readers: 0,
            writer: false,
            write_waiters: 0,
        }
    }

    /// Guard condition for exclusive acquisition.
    ///
    /// A writer must keep waiting while this returns `true`. Pending writers do
    /// not block each other here; only an actual holder does.
    #[inline]
    #[must_use]
    pub const fn blocks_exclusive(&self) -> bool {
        self.readers > 0 || self.writer
    }

    /// Guard condition for shared acquisition.
    ///
    /// A reader must keep waiting while this returns `true`. Announced writer
    /// intent blocks new readers even before that writer is granted the lock.
    #[inline]
    #[must_use]
    pub const fn blocks_shared(&self) -> bool {
        self.writer || self.write_waiters > 0
    }

    /// Phase of the lock as seen by holders.
    ///
    /// An inconsistent state reports `Exclusive`.
    #[must_use]
    pub const fn phase(&self) -> LockPhase {
        if self.writer {
            LockPhase::Exclusive
        } else if self.readers > 0 {
            LockPhase::Shared(self.readers)
        } else {
            LockPhase::Idle
        }
    }

    /// Whether the shared/exclusive invariants hold.
    #[must_use]
    pub const fn is_consistent(&self) -> bool {
        !(self.writer && self.readers > 0)
    }
}
