//! Stress harness for [`PriorityRwLock`].
//!
//! Spawns dedicated reader and writer threads that hammer one lock while a
//! probe tracks who is inside. A run fails if a writer ever overlaps another
//! holder, if a write is lost, or if workers stop finishing within the stall
//! timeout (a lost wakeup leaves threads parked forever).
//!
//! Ordering between classes, such as readers draining before a pending writer
//! is granted, is not observed here; only exclusion and progress are.
//!
//! ```
//! use priority_rwlock::config::StressConfig;
//! use priority_rwlock::harness::run_stress;
//!
//! let cfg = StressConfig::new()
//!     .with_readers(4)
//!     .with_writers(2)
//!     .with_iterations(50)
//!     .with_hold_micros(0, 0);
//!
//! let report = run_stress(&cfg).unwrap();
//! assert_eq!(report.writes, 100);
//! assert_eq!(report.final_value, 100);
//! ```

use std::sync::atomic::{AtomicU32, AtomicU64, Ordering};
use std::sync::Arc;
use std::thread::{self, JoinHandle};
use std::time::{Duration, Instant};

use crossbeam_channel::{unbounded, RecvTimeoutError, Sender};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::config::StressConfig;
use crate::core::StressError;
use crate::rwlock::PriorityRwLock;

/// Outcome of a successful stress run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StressReport {
    /// Shared acquisitions completed.
    pub reads: u64,
    /// Exclusive acquisitions completed.
    pub writes: u64,
    /// Highest number of readers observed inside at once.
    pub max_concurrent_readers: u32,
    /// Value of the protected counter at the end; equals `writes`.
    pub final_value: u64,
    /// Wall-clock duration of the run.
    pub elapsed_ms: u128,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Role {
    Reader,
    Writer,
}

#[derive(Debug)]
struct WorkerOutcome {
    role: Role,
    completed: u64,
}

/// Occupancy counters updated by workers while they hold the lock.
#[derive(Debug, Default)]
struct Probe {
    active_readers: AtomicU32,
    active_writers: AtomicU32,
    max_concurrent_readers: AtomicU32,
    violations: AtomicU64,
}

impl Probe {
    fn enter_shared(&self) {
        if self.active_writers.load(Ordering::SeqCst) != 0 {
            self.violations.fetch_add(1, Ordering::SeqCst);
        }
        let inside = self.active_readers.fetch_add(1, Ordering::SeqCst) + 1;
        self.max_concurrent_readers.fetch_max(inside, Ordering::SeqCst);
    }

    fn exit_shared(&self) {
        self.active_readers.fetch_sub(1, Ordering::SeqCst);
    }

    fn enter_exclusive(&self) {
        let writers = self.active_writers.fetch_add(1, Ordering::SeqCst);
        if writers != 0 || self.active_readers.load(Ordering::SeqCst) != 0 {
            self.violations.fetch_add(1, Ordering::SeqCst);
        }
    }

    fn exit_exclusive(&self) {
        self.active_writers.fetch_sub(1, Ordering::SeqCst);
    }
}

/// Run a mixed reader/writer workload and verify the lock's guarantees.
///
/// # Errors
///
/// - `StressError::InvalidConfig` if `config` does not validate
/// - `StressError::InvariantViolated` on overlapping holders or lost writes
/// - `StressError::Stalled` if no worker finishes within the stall timeout
/// - `StressError::WorkerPanicked` / `StressError::Spawn` for thread failures
pub fn run_stress(config: &StressConfig) -> Result<StressReport, StressError> {
    config.validate().map_err(StressError::InvalidConfig)?;

    let lock = Arc::new(PriorityRwLock::new(0_u64));
    let probe = Arc::new(Probe::default());
    let (done_tx, done_rx) = unbounded::<WorkerOutcome>();
    let started = Instant::now();

    info!(
        readers = config.readers,
        writers = config.writers,
        iterations = config.iterations,
        "starting stress run"
    );

    let mut workers = Vec::with_capacity(config.threads());
    for worker_id in 0..config.writers {
        workers.push(spawn_worker(
            Role::Writer,
            worker_id,
            config,
            Arc::clone(&lock),
            Arc::clone(&probe),
            done_tx.clone(),
        )?);
    }
    for worker_id in 0..config.readers {
        workers.push(spawn_worker(
            Role::Reader,
            worker_id,
            config,
            Arc::clone(&lock),
            Arc::clone(&probe),
            done_tx.clone(),
        )?);
    }
    drop(done_tx);

    let mut reads = 0_u64;
    let mut writes = 0_u64;
    for finished in 0..workers.len() {
        match done_rx.recv_timeout(config.stall_timeout()) {
            Ok(outcome) => match outcome.role {
                Role::Reader => reads += outcome.completed,
                Role::Writer => writes += outcome.completed,
            },
            Err(RecvTimeoutError::Timeout) => {
                let remaining = workers.len() - finished;
                warn!(
                    remaining,
                    active_readers = probe.active_readers.load(Ordering::SeqCst),
                    active_writers = probe.active_writers.load(Ordering::SeqCst),
                    "stress run stalled"
                );
                return Err(StressError::Stalled {
                    remaining,
                    timeout: config.stall_timeout(),
                });
            }
            // Every sender is gone early only if a worker panicked; join reports it.
            Err(RecvTimeoutError::Disconnected) => break,
        }
    }

    for worker in workers {
        let name = worker.thread().name().unwrap_or("stress-worker").to_owned();
        worker.join().map_err(|_| StressError::WorkerPanicked(name))?;
    }

    let violations = probe.violations.load(Ordering::SeqCst);
    if violations > 0 {
        warn!(violations, "mutual exclusion violated");
        return Err(StressError::InvariantViolated(format!(
            "{violations} overlapping acquisitions observed"
        )));
    }

    let final_value = *lock.read();
    if final_value != writes {
        warn!(final_value, writes, "lost update");
        return Err(StressError::InvariantViolated(format!(
            "counter is {final_value} after {writes} writes"
        )));
    }

    let report = StressReport {
        reads,
        writes,
        max_concurrent_readers: probe.max_concurrent_readers.load(Ordering::SeqCst),
        final_value,
        elapsed_ms: started.elapsed().as_millis(),
    };
    info!(
        reads = report.reads,
        writes = report.writes,
        max_concurrent_readers = report.max_concurrent_readers,
        elapsed_ms = report.elapsed_ms,
        "stress run finished"
    );
    Ok(report)
}

fn spawn_worker(
    role: Role,
    worker_id: usize,
    config: &StressConfig,
    lock: Arc<PriorityRwLock<u64>>,
    probe: Arc<Probe>,
    done_tx: Sender<WorkerOutcome>,
) -> Result<JoinHandle<()>, StressError> {
    let (name, hold) = match role {
        Role::Reader => (format!("stress-reader-{worker_id}"), config.read_hold()),
        Role::Writer => (format!("stress-writer-{worker_id}"), config.write_hold()),
    };
    let iterations = config.iterations;

    let builder = thread::Builder::new().name(name);
    let handle = builder.spawn(move || {
        let mut completed = 0_u64;
        for _ in 0..iterations {
            match role {
                Role::Reader => {
                    let guard = lock.read();
                    probe.enter_shared();
                    std::hint::black_box(*guard);
                    hold_for(hold);
                    probe.exit_shared();
                }
                Role::Writer => {
                    let mut guard = lock.write();
                    probe.enter_exclusive();
                    *guard += 1;
                    hold_for(hold);
                    probe.exit_exclusive();
                }
            }
            completed += 1;
        }

        debug!(worker_id, ?role, completed, "stress worker finished");
        // Receiver gone means the harness already gave up on this run.
        let _ = done_tx.send(WorkerOutcome { role, completed });
    })?;

    Ok(handle)
}

fn hold_for(hold: Duration) {
    if hold.is_zero() {
        thread::yield_now();
    } else {
        thread::sleep(hold);
    }
}
