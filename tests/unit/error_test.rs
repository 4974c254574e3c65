//! Tests for error types

use priority_rwlock::core::StressError;
use std::time::Duration;

#[test]
fn test_invalid_config_error() {
    let err = StressError::InvalidConfig("iterations must be greater than 0".to_string());
    assert_eq!(err.to_string(), "invalid configuration: iterations must be greater than 0");
}

#[test]
fn test_stalled_error() {
    let err = StressError::Stalled {
        remaining: 3,
        timeout: Duration::from_secs(2),
    };
    assert_eq!(err.to_string(), "stalled: 3 workers did not finish within 2s");
}

#[test]
fn test_spawn_error_from_io() {
    let io = std::io::Error::other("no threads left");
    let err: StressError = io.into();
    assert!(matches!(err, StressError::Spawn(_)));
    assert_eq!(err.to_string(), "failed to spawn worker thread: no threads left");
}

#[test]
fn test_worker_panicked_error() {
    let err = StressError::WorkerPanicked("stress-writer-1".to_string());
    assert_eq!(err.to_string(), "worker thread panicked: stress-writer-1");
}
