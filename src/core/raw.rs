//! Writer-priority raw readers-writer lock.
//!
//! The lock is a monitor: one `parking_lot::Mutex` guards a [`LockState`] and
//! one `parking_lot::Condvar` parks threads whose guard condition does not yet
//! allow them in. Every release that may unblock someone broadcasts, and every
//! waiter re-checks its own guard in a loop.
//!
//! A writer increments `write_waiters` before it starts waiting. Readers treat
//! any announced writer as blocking, so a steady stream of new readers can not
//! starve a writer. Readers already inside are not preempted; the writer waits
//! for them to drain.
//!
//! The inverse is not prevented: a continuous stream of writers keeps readers
//! out indefinitely.
//!
//! # Examples
//!
//! ```
//! use priority_rwlock::RawPriorityRwLock;
//!
//! let lock = RawPriorityRwLock::new();
//!
//! lock.acquire_shared();
//! lock.acquire_shared();
//! assert_eq!(lock.snapshot().readers, 2);
//! lock.release_shared();
//! lock.release_shared();
//!
//! lock.acquire_exclusive();
//! assert!(lock.is_locked_exclusive());
//! lock.release_exclusive();
//! assert!(!lock.is_locked());
//! ```

use parking_lot::{Condvar, Mutex};

use crate::core::state::LockState;

/// Readers-writer lock giving announced writers priority over new readers.
///
/// The four operations mirror a classic monitor: `acquire_exclusive`,
/// `release_exclusive`, `acquire_shared`, `release_shared`. Acquire and release
/// must be paired by the caller and the lock is not reentrant; acquiring it
/// again on a thread that already holds it deadlocks.
///
/// Prefer [`PriorityRwLock`](crate::PriorityRwLock), which pairs the calls
/// through RAII guards.
#[derive(Debug, Default)]
pub struct RawPriorityRwLock {
    state: Mutex<LockState>,
    cond: Condvar,
}

impl RawPriorityRwLock {
    /// Creates an unlocked lock.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            state: Mutex::new(LockState::new()),
            cond: Condvar::new(),
        }
    }

    /// Blocks until exclusive access is granted.
    ///
    /// Intent is registered before waiting, which immediately blocks any
    /// reader arriving afterwards.
    pub fn acquire_exclusive(&self) {
        let mut state = self.state.lock();
        state.write_waiters += 1;

        while state.blocks_exclusive() {
            tracing::trace!(
                readers = state.readers,
                write_waiters = state.write_waiters,
                "exclusive acquisition parked"
            );
            self.cond.wait(&mut state);
        }

        state.write_waiters -= 1;
        state.writer = true;
    }

    /// Grants exclusive access only if nobody holds the lock right now.
    ///
    /// Never waits and never registers intent.
    #[must_use]
    pub fn try_acquire_exclusive(&self) -> bool {
        let mut state = self.state.lock();
        if state.blocks_exclusive() {
            return false;
        }
        state.writer = true;
        true
    }

    /// Gives up exclusive access and wakes every waiter.
    pub fn release_exclusive(&self) {
        let mut state = self.state.lock();
        debug_assert!(
            state.writer,
            "release_exclusive without a matching acquire_exclusive"
        );
        state.writer = false;
        self.cond.notify_all();
    }

    /// Blocks until shared access is granted.
    ///
    /// Waits while a writer holds the lock or any writer has announced intent.
    pub fn acquire_shared(&self) {
        let mut state = self.state.lock();

        while state.blocks_shared() {
            tracing::trace!(
                writer = state.writer,
                write_waiters = state.write_waiters,
                "shared acquisition parked"
            );
            self.cond.wait(&mut state);
        }

        state.readers += 1;
    }

    /// Grants shared access only if no writer holds or waits for the lock.
    #[must_use]
    pub fn try_acquire_shared(&self) -> bool {
        let mut state = self.state.lock();
        if state.blocks_shared() {
            return false;
        }
        state.readers += 1;
        true
    }

    /// Gives up shared access; the last reader out wakes every waiter.
    pub fn release_shared(&self) {
        let mut state = self.state.lock();
        debug_assert!(
            state.readers > 0,
            "release_shared without a matching acquire_shared"
        );
        state.readers -= 1;
        if state.readers == 0 {
            self.cond.notify_all();
        }
    }

    /// Turns held exclusive access into shared access without unlocking.
    ///
    /// Waiting readers are woken but still defer to any pending writer.
    pub fn downgrade(&self) {
        let mut state = self.state.lock();
        debug_assert!(state.writer, "downgrade without holding exclusive access");
        state.writer = false;
        state.readers = 1;
        self.cond.notify_all();
    }

    /// Copy of the current state, taken under the internal mutex.
    #[must_use]
    pub fn snapshot(&self) -> LockState {
        *self.state.lock()
    }

    /// Whether any thread holds the lock, shared or exclusive.
    #[must_use]
    pub fn is_locked(&self) -> bool {
        let state = self.state.lock();
        state.writer || state.readers > 0
    }

    /// Whether a thread holds exclusive access.
    #[must_use]
    pub fn is_locked_exclusive(&self) -> bool {
        self.state.lock().writer
    }
}

// SAFETY: shared and exclusive access are mutually exclusive under the state
// mutex. The unlock methods require the caller to hold the matching access.
#[allow(unsafe_code)]
unsafe impl lock_api::RawRwLock for RawPriorityRwLock {
    #[allow(clippy::declare_interior_mutable_const)]
    const INIT: Self = Self::new();

    type GuardMarker = lock_api::GuardSend;

    #[inline]
    fn lock_shared(&self) {
        self.acquire_shared();
    }

    #[inline]
    fn try_lock_shared(&self) -> bool {
        self.try_acquire_shared()
    }

    #[inline]
    unsafe fn unlock_shared(&self) {
        self.release_shared();
    }

    #[inline]
    fn lock_exclusive(&self) {
        self.acquire_exclusive();
    }

    #[inline]
    fn try_lock_exclusive(&self) -> bool {
        self.try_acquire_exclusive()
    }

    #[inline]
    unsafe fn unlock_exclusive(&self) {
        self.release_exclusive();
    }

    #[inline]
    fn is_locked(&self) -> bool {
        Self::is_locked(self)
    }

    #[inline]
    fn is_locked_exclusive(&self) -> bool {
        Self::is_locked_exclusive(self)
    }
}

#[allow(unsafe_code)]
unsafe impl lock_api::RawRwLockDowngrade for RawPriorityRwLock {
    #[inline]
    unsafe fn downgrade(&self) {
        Self::downgrade(self);
    }
}
