//! Run lifecycle and the dedicated tick thread
//!
//! The tick thread owns [`SimulationCore`] exclusively (moved in via
//! `thread::spawn`). No lock guards simulation state - callers interact
//! through a bounded command channel and per-tick published value
//! snapshots:
//!
//! ```text
//! Caller Thread(s)                Tick Thread
//!     |                               |
//!     |--start(config)--------------->| (spawned, owns the core)
//!     |                               | cmd_rx.recv_timeout(interval)
//!     |                               |   timeout  -> core.tick()
//!     |                               |              publish status
//!     |--stop()---------------------->|   Stop     -> build report
//!     |<--report via reply channel----|              publish, exit
//!     |  store.append(report)         |
//!     |                               |
//!     |--status()---> clone of the latest published snapshot
//! ```
//!
//! The channel timeout doubles as tick pacing: one tick fires per
//! `1000 / speed` milliseconds of wall-clock time (floored at 1 ms), and a
//! `Stop` command wakes the thread immediately, bounding stop latency by a
//! single tick interval.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};
use std::thread::{self, JoinHandle};
use std::time::{Duration, SystemTime, UNIX_EPOCH};

use crossbeam_channel::{bounded, Receiver, RecvTimeoutError, Sender};
use log::{debug, info, warn};

use crate::engine::core::SimulationCore;
use crate::models::config::SimulationConfig;
use crate::models::report::SimulationReport;
use crate::models::status::SimulationStatus;
use crate::store::{ReportStore, StoreError};

/// Commands accepted by the tick thread
enum Command {
    /// Finish the run: build the report, publish it, reply, exit
    Stop {
        reply: Sender<SimulationReport>,
    },
}

/// Acknowledgement returned by [`SimulationEngine::start`]
#[derive(Debug, Clone, PartialEq)]
pub enum StartAck {
    /// A new run began with this (accepted) configuration
    Started(SimulationConfig),

    /// A run is already active; the call was a no-op
    AlreadyRunning,
}

/// Snapshots published by the tick thread for concurrent readers
struct Published {
    status: Mutex<SimulationStatus>,
    last_report: Mutex<Option<SimulationReport>>,
    running: AtomicBool,
}

/// Live tick thread plus its command channel
struct Worker {
    cmd_tx: Sender<Command>,
    handle: JoinHandle<()>,
}

/// Simulation engine - exclusive run lifecycle owner
///
/// Constructed once at process start with the report store collaborator
/// and passed by reference to whatever exposes the operation surface.
/// Exactly one run is active at a time: `start` while running and `stop`
/// while stopped are defined no-ops.
///
/// # Example
///
/// ```
/// use std::sync::Arc;
/// use checkout_simulator_core_rs::{MemoryStore, SimulationConfig, SimulationEngine};
///
/// let engine = SimulationEngine::new(Arc::new(MemoryStore::new()));
/// let config = SimulationConfig {
///     open_checkouts: 2,
///     customer_intensity: 600.0,
///     simulation_speed: 1000.0,
/// };
///
/// engine.start(config);
/// assert!(engine.status().is_running);
///
/// let report = engine.stop();
/// assert!(report.is_some());
/// ```
pub struct SimulationEngine {
    store: Arc<dyn ReportStore>,
    published: Arc<Published>,
    worker: Mutex<Option<Worker>>,
}

impl SimulationEngine {
    /// Create an engine that hands finished-run reports to `store`
    pub fn new(store: Arc<dyn ReportStore>) -> Self {
        Self {
            store,
            published: Arc::new(Published {
                status: Mutex::new(SimulationStatus::default()),
                last_report: Mutex::new(None),
                running: AtomicBool::new(false),
            }),
            worker: Mutex::new(None),
        }
    }

    /// Start a run with an entropy-derived RNG seed
    ///
    /// No-op if a run is already active.
    pub fn start(&self, config: SimulationConfig) -> StartAck {
        self.start_seeded(config, entropy_seed())
    }

    /// Start a run with an explicit RNG seed (deterministic replay)
    ///
    /// No-op if a run is already active.
    pub fn start_seeded(&self, config: SimulationConfig, seed: u64) -> StartAck {
        let mut slot = self.worker.lock().unwrap();

        if self.published.running.load(Ordering::SeqCst) {
            return StartAck::AlreadyRunning;
        }

        // Reap a thread left over from the previous run
        if let Some(worker) = slot.take() {
            drop(worker.cmd_tx);
            let _ = worker.handle.join();
        }

        let core = SimulationCore::new(config.clone(), seed);
        let interval = config.tick_interval();

        self.published.running.store(true, Ordering::SeqCst);
        *self.published.status.lock().unwrap() = core.status(true);

        let (cmd_tx, cmd_rx) = bounded(1);
        let published = Arc::clone(&self.published);
        let handle = thread::spawn(move || tick_loop(core, cmd_rx, published, interval));
        *slot = Some(Worker { cmd_tx, handle });

        info!(
            "simulation started: {} checkout(s), intensity {}/h, speed x{}",
            config.open_checkouts,
            config.customer_intensity,
            config.effective_speed()
        );
        StartAck::Started(config)
    }

    /// Stop the active run and return its finalized report
    ///
    /// Returns `None` if no run was active. The report is handed to the
    /// report store after the tick thread has exited; a persistence failure
    /// is logged and swallowed, leaving the in-memory report available.
    pub fn stop(&self) -> Option<SimulationReport> {
        let worker = {
            let mut slot = self.worker.lock().unwrap();
            if !self.published.running.load(Ordering::SeqCst) {
                return None;
            }
            slot.take()
        }?;

        let (reply_tx, reply_rx) = bounded(1);
        let report = if worker.cmd_tx.send(Command::Stop { reply: reply_tx }).is_ok() {
            reply_rx.recv().ok()
        } else {
            None
        };
        let _ = worker.handle.join();

        if let Some(report) = &report {
            info!(
                "simulation stopped: avg wait {:.2} min, utilization {:.1}%, {} lost",
                report.average_wait_minutes,
                report.checkout_utilization_percent,
                report.lost_customers
            );
            if let Err(err) = self.store.append(report) {
                warn!("failed to persist simulation report: {err}");
            }
        }
        report
    }

    /// Latest published status snapshot
    ///
    /// Valid regardless of run state; while stopped it reflects the
    /// last-known values of the previous run.
    pub fn status(&self) -> SimulationStatus {
        self.published.status.lock().unwrap().clone()
    }

    /// Whether a run is currently active
    pub fn is_running(&self) -> bool {
        self.published.running.load(Ordering::SeqCst)
    }

    /// Report of the most recently completed run, if any
    pub fn last_report(&self) -> Option<SimulationReport> {
        self.published.last_report.lock().unwrap().clone()
    }

    /// Previously persisted reports, newest first
    pub fn reports(&self) -> Result<Vec<SimulationReport>, StoreError> {
        self.store.list()
    }
}

impl Drop for SimulationEngine {
    fn drop(&mut self) {
        // Disconnect the command channel so a still-running tick thread
        // winds down, then join it.
        if let Ok(mut slot) = self.worker.lock() {
            if let Some(worker) = slot.take() {
                drop(worker.cmd_tx);
                let _ = worker.handle.join();
            }
        }
    }
}

/// Body of the dedicated tick thread
fn tick_loop(
    mut core: SimulationCore,
    cmd_rx: Receiver<Command>,
    published: Arc<Published>,
    interval: Duration,
) {
    loop {
        match cmd_rx.recv_timeout(interval) {
            Ok(Command::Stop { reply }) => {
                let report = core.build_report();
                *published.status.lock().unwrap() = core.status(false);
                *published.last_report.lock().unwrap() = Some(report.clone());
                published.running.store(false, Ordering::SeqCst);
                let _ = reply.send(report);
                break;
            }
            Err(RecvTimeoutError::Timeout) => {
                let outcome = core.tick();
                if outcome.arrival_attempted {
                    debug!(
                        "tick {}: arrival ({}), queue {}",
                        core.clock().elapsed_seconds(),
                        if outcome.customer_lost { "lost" } else { "queued" },
                        core.queue().len()
                    );
                }
                *published.status.lock().unwrap() = core.status(true);
            }
            Err(RecvTimeoutError::Disconnected) => {
                // Engine handle dropped without a stop; end the run quietly
                *published.status.lock().unwrap() = core.status(false);
                published.running.store(false, Ordering::SeqCst);
                break;
            }
        }
    }
}

/// Seed for non-deterministic runs, drawn from the wall clock
fn entropy_seed() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or(1)
}
