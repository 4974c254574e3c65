//! Tests for configuration validation

use priority_rwlock::config::StressConfig;
use std::time::Duration;

#[test]
fn test_stress_config_validation() {
    let valid = StressConfig {
        readers: 4,
        writers: 2,
        iterations: 100,
        read_hold_micros: 0,
        write_hold_micros: 10,
        stall_timeout_secs: 5,
    };
    assert!(valid.validate().is_ok());
}

#[test]
fn test_stress_config_invalid_iterations() {
    let invalid = StressConfig::new().with_iterations(0);
    assert!(invalid.validate().is_err());
}

#[test]
fn test_stress_config_invalid_timeout() {
    let invalid = StressConfig::new().with_stall_timeout_secs(0);
    assert!(invalid.validate().is_err());
}

#[test]
fn test_stress_config_from_json() {
    let json = r#"{
        "readers": 6,
        "writers": 1,
        "iterations": 50,
        "read_hold_micros": 0,
        "write_hold_micros": 0,
        "stall_timeout_secs": 10
    }"#;

    let config = StressConfig::from_json_str(json).unwrap();
    assert_eq!(config.readers, 6);
    assert_eq!(config.writers, 1);
    assert_eq!(config.stall_timeout(), Duration::from_secs(10));
}

#[test]
fn test_stress_config_from_partial_json_uses_defaults() {
    let config = StressConfig::from_json_str(r#"{"writers": 5}"#).unwrap();
    assert_eq!(config.writers, 5);
    assert_eq!(config.iterations, StressConfig::default().iterations);
}

#[test]
fn test_stress_config_from_json_rejects_invalid() {
    assert!(StressConfig::from_json_str(r#"{"iterations": 0}"#).is_err());
    assert!(StressConfig::from_json_str("not json").is_err());
}

#[test]
fn test_stress_config_from_env() {
    std::env::set_var("PRIORITY_RWLOCK_STRESS_READERS", "7");
    std::env::set_var("PRIORITY_RWLOCK_STRESS_ITERATIONS", " 42 ");
    let config = StressConfig::from_env().unwrap();
    assert_eq!(config.readers, 7);
    assert_eq!(config.iterations, 42);

    std::env::set_var("PRIORITY_RWLOCK_STRESS_ITERATIONS", "many");
    let err = StressConfig::from_env().unwrap_err();
    assert!(format!("{err:#}").contains("PRIORITY_RWLOCK_STRESS_ITERATIONS"));

    std::env::remove_var("PRIORITY_RWLOCK_STRESS_READERS");
    std::env::remove_var("PRIORITY_RWLOCK_STRESS_ITERATIONS");
}
