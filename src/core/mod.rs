//! Lock state, the raw writer-priority protocol, and error types.

pub mod error;
pub mod raw;
pub mod state;

pub use error::{AppResult, StressError};
pub use raw::RawPriorityRwLock;
pub use state::{LockPhase, LockState};
