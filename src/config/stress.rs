//! Stress run configuration.

use std::env::{self, VarError};
use std::str::FromStr;
use std::time::Duration;

use anyhow::Context;
use serde::{Deserialize, Serialize};

use crate::core::AppResult;

/// Prefix of the environment variables read by [`StressConfig::from_env`].
pub const ENV_PREFIX: &str = "PRIORITY_RWLOCK_STRESS_";

/// Shape of a mixed reader/writer stress run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StressConfig {
    /// Reader threads.
    pub readers: usize,
    /// Writer threads.
    pub writers: usize,
    /// Acquisitions performed by every thread.
    pub iterations: usize,
    /// Microseconds a reader holds shared access; 0 yields instead of sleeping.
    pub read_hold_micros: u64,
    /// Microseconds a writer holds exclusive access; 0 yields instead of sleeping.
    pub write_hold_micros: u64,
    /// Seconds to wait for the next worker to finish before declaring a stall.
    pub stall_timeout_secs: u64,
}

impl Default for StressConfig {
    fn default() -> Self {
        Self {
            readers: num_cpus::get().max(2),
            writers: 2,
            iterations: 1_000,
            read_hold_micros: 10,
            write_hold_micros: 10,
            stall_timeout_secs: 30,
        }
    }
}

impl StressConfig {
    /// Default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the number of reader threads.
    #[must_use]
    pub const fn with_readers(mut self, readers: usize) -> Self {
        self.readers = readers;
        self
    }

    /// Set the number of writer threads.
    #[must_use]
    pub const fn with_writers(mut self, writers: usize) -> Self {
        self.writers = writers;
        self
    }

    /// Set the acquisitions per thread.
    #[must_use]
    pub const fn with_iterations(mut self, iterations: usize) -> Self {
        self.iterations = iterations;
        self
    }

    /// Set how long readers and writers hold the lock.
    #[must_use]
    pub const fn with_hold_micros(mut self, read: u64, write: u64) -> Self {
        self.read_hold_micros = read;
        self.write_hold_micros = write;
        self
    }

    /// Set the stall timeout.
    #[must_use]
    pub const fn with_stall_timeout_secs(mut self, secs: u64) -> Self {
        self.stall_timeout_secs = secs;
        self
    }

    /// Reader hold time.
    #[must_use]
    pub const fn read_hold(&self) -> Duration {
        Duration::from_micros(self.read_hold_micros)
    }

    /// Writer hold time.
    #[must_use]
    pub const fn write_hold(&self) -> Duration {
        Duration::from_micros(self.write_hold_micros)
    }

    /// Stall timeout.
    #[must_use]
    pub const fn stall_timeout(&self) -> Duration {
        Duration::from_secs(self.stall_timeout_secs)
    }

    /// Total worker threads.
    #[must_use]
    pub const fn threads(&self) -> usize {
        self.readers + self.writers
    }

    /// Validate configuration values.
    ///
    /// # Errors
    ///
    /// Returns a description of the first invalid field.
    pub fn validate(&self) -> Result<(), String> {
        if self.threads() == 0 {
            return Err("at least one reader or writer is required".into());
        }
        if self.iterations == 0 {
            return Err("iterations must be greater than 0".into());
        }
        if self.stall_timeout_secs == 0 {
            return Err("stall_timeout_secs must be greater than 0".into());
        }
        Ok(())
    }

    /// Parse configuration from a JSON string and validate.
    ///
    /// Missing fields take their defaults.
    ///
    /// # Errors
    ///
    /// Returns a description of the parse or validation failure.
    pub fn from_json_str(input: &str) -> Result<Self, String> {
        let cfg: Self = serde_json::from_str(input).map_err(|e| format!("parse error: {e}"))?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Build configuration from the environment.
    ///
    /// A `.env` file is loaded first if present. Each field can be overridden by
    /// `PRIORITY_RWLOCK_STRESS_<FIELD>` in upper case, e.g.
    /// `PRIORITY_RWLOCK_STRESS_READERS=8`.
    ///
    /// # Errors
    ///
    /// Fails if a variable is not a valid number or the result does not validate.
    pub fn from_env() -> AppResult<Self> {
        dotenvy::dotenv().ok();

        let mut cfg = Self::default();
        env_override("READERS", &mut cfg.readers)?;
        env_override("WRITERS", &mut cfg.writers)?;
        env_override("ITERATIONS", &mut cfg.iterations)?;
        env_override("READ_HOLD_MICROS", &mut cfg.read_hold_micros)?;
        env_override("WRITE_HOLD_MICROS", &mut cfg.write_hold_micros)?;
        env_override("STALL_TIMEOUT_SECS", &mut cfg.stall_timeout_secs)?;

        cfg.validate().map_err(anyhow::Error::msg)?;
        tracing::debug!(?cfg, "stress configuration loaded from environment");
        Ok(cfg)
    }
}

fn env_override<T>(field: &str, slot: &mut T) -> AppResult<()>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    let key = format!("{ENV_PREFIX}{field}");
    match env::var(&key) {
        Ok(raw) => {
            *slot = raw
                .trim()
                .parse()
                .with_context(|| format!("{key} must be a non-negative integer, got `{raw}`"))?;
            Ok(())
        }
        Err(VarError::NotPresent) => Ok(()),
        Err(e) => Err(e).with_context(|| format!("failed to read {key}")),
    }
}
