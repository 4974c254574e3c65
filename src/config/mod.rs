//! Configuration models for the stress harness.

pub mod stress;

pub use stress::StressConfig;
