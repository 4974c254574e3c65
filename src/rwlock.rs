//! Data-carrying writer-priority reader-writer lock.
//!
//! [`PriorityRwLock`] owns the protected value and hands out RAII guards, so
//! every acquisition is released on every exit path, unwinding included. It is
//! a `lock_api::RwLock` over [`RawPriorityRwLock`].
//!
//! # Features
//!
//! - Multiple concurrent readers
//! - Exclusive writer access
//! - Pending writers block newly arriving readers
//! - Write guards can be downgraded to read guards
//! - No poisoning on panic
//!
//! # Examples
//!
//! Basic usage:
//!
//! ```
//! use priority_rwlock::PriorityRwLock;
//!
//! let lock = PriorityRwLock::new(5);
//!
//! {
//!     let r1 = lock.read();
//!     let r2 = lock.read();
//!     assert_eq!(*r1, 5);
//!     assert_eq!(*r2, 5);
//! }
//!
//! {
//!     let mut w = lock.write();
//!     *w += 1;
//!     assert_eq!(*w, 6);
//! }
//! ```
//!
//! Concurrent access pattern:
//!
//! ```
//! use priority_rwlock::PriorityRwLock;
//! use std::sync::Arc;
//! use std::thread;
//!
//! let lock = Arc::new(PriorityRwLock::new(0));
//! let mut handles = vec![];
//!
//! for _ in 0..10 {
//!     let lock = Arc::clone(&lock);
//!     handles.push(thread::spawn(move || {
//!         let value = lock.read();
//!         assert!(*value <= 1);
//!     }));
//! }
//!
//! let lock_clone = Arc::clone(&lock);
//! handles.push(thread::spawn(move || {
//!     let mut value = lock_clone.write();
//!     *value += 1;
//! }));
//!
//! for handle in handles {
//!     handle.join().unwrap();
//! }
//! assert_eq!(*lock.read(), 1);
//! ```

use crate::core::RawPriorityRwLock;

/// Reader-writer lock protecting a `T` with writer priority.
pub type PriorityRwLock<T> = lock_api::RwLock<RawPriorityRwLock, T>;

/// Shared access guard returned by [`PriorityRwLock::read`].
pub type PriorityRwLockReadGuard<'a, T> = lock_api::RwLockReadGuard<'a, RawPriorityRwLock, T>;

/// Exclusive access guard returned by [`PriorityRwLock::write`].
pub type PriorityRwLockWriteGuard<'a, T> = lock_api::RwLockWriteGuard<'a, RawPriorityRwLock, T>;

/// Read guard narrowed to a component of the protected value.
pub type MappedPriorityRwLockReadGuard<'a, T> =
    lock_api::MappedRwLockReadGuard<'a, RawPriorityRwLock, T>;

/// Write guard narrowed to a component of the protected value.
pub type MappedPriorityRwLockWriteGuard<'a, T> =
    lock_api::MappedRwLockWriteGuard<'a, RawPriorityRwLock, T>;

/// Creates a [`PriorityRwLock`] usable in `static` and `const` items.
///
/// ```
/// use priority_rwlock::{const_priority_rwlock, PriorityRwLock};
///
/// static ROUTES: PriorityRwLock<Vec<&str>> = const_priority_rwlock(Vec::new());
///
/// ROUTES.write().push("/health");
/// assert_eq!(ROUTES.read().len(), 1);
/// ```
#[must_use]
pub const fn const_priority_rwlock<T>(value: T) -> PriorityRwLock<T> {
    PriorityRwLock::const_new(RawPriorityRwLock::new(), value)
}
