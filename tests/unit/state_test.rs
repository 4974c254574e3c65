//! Tests for the lock state model

use priority_rwlock::{LockPhase, LockState, RawPriorityRwLock};

#[test]
fn test_state_machine_cycle() {
    let lock = RawPriorityRwLock::new();
    assert_eq!(lock.snapshot().phase(), LockPhase::Idle);

    lock.acquire_shared();
    assert_eq!(lock.snapshot().phase(), LockPhase::Shared(1));
    lock.acquire_shared();
    assert_eq!(lock.snapshot().phase(), LockPhase::Shared(2));
    lock.release_shared();
    lock.release_shared();
    assert_eq!(lock.snapshot().phase(), LockPhase::Idle);

    lock.acquire_exclusive();
    assert_eq!(lock.snapshot().phase(), LockPhase::Exclusive);
    lock.release_exclusive();
    assert_eq!(lock.snapshot().phase(), LockPhase::Idle);
}

#[test]
fn test_default_matches_new() {
    assert_eq!(RawPriorityRwLock::default().snapshot(), LockState::new());
}

#[test]
fn test_snapshot_stays_consistent() {
    let lock = RawPriorityRwLock::new();
    lock.acquire_exclusive();
    assert!(lock.snapshot().is_consistent());
    lock.downgrade();
    let state = lock.snapshot();
    assert!(state.is_consistent());
    assert_eq!(state.phase(), LockPhase::Shared(1));
    lock.release_shared();
}

#[test]
fn test_state_from_json() {
    let state: LockState =
        serde_json::from_str(r#"{"readers":0,"writer":true,"write_waiters":2}"#).unwrap();
    assert_eq!(state.phase(), LockPhase::Exclusive);
    assert!(state.blocks_shared());
    assert!(state.blocks_exclusive());
}
