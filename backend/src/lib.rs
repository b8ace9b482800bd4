//! Checkout Simulator Core - Rust Engine
//!
//! Discrete-time retail checkout simulator with deterministic execution.
//! Customers arrive stochastically following an hour-of-day demand curve,
//! wait in a bounded FIFO queue, and are served by a pool of checkout
//! stations with randomized service duration.
//!
//! # Architecture
//!
//! - **core**: Simulated clock (one second per tick, opens at 08:00)
//! - **models**: Domain types (Config, Checkout, Queue, Metrics, Status, Report)
//! - **arrivals**: Hour-of-day arrival generation
//! - **engine**: Owned tick state and background engine lifecycle
//! - **rng**: Deterministic random number generation
//! - **store**: Report persistence collaborator
//!
//! # Critical Invariants
//!
//! 1. All randomness is deterministic (seeded RNG)
//! 2. The tick thread exclusively owns run state; callers see value snapshots
//! 3. Queue length never exceeds capacity; rejected arrivals are counted lost
//! 4. Exactly one simulation run is active at a time

// Module declarations
pub mod arrivals;
pub mod core;
pub mod engine;
pub mod models;
pub mod rng;
pub mod store;

// Re-exports for convenience
pub use arrivals::ArrivalGenerator;
pub use crate::core::clock::SimClock;
pub use engine::{SimulationCore, SimulationEngine, StartAck, TickOutcome};
pub use models::{
    checkout::{service_seconds_for_items, Checkout, CheckoutPool},
    config::SimulationConfig,
    metrics::MetricsAccumulator,
    queue::{CustomerQueue, EnqueueOutcome, QUEUE_CAPACITY},
    report::SimulationReport,
    status::{CheckoutInfo, SimulationStatus},
};
pub use rng::SimRng;
pub use store::{JsonFileStore, MemoryStore, ReportStore, StoreError};
