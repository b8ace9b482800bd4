//! Simulation engine - owned tick state and run lifecycle
//!
//! `SimulationCore` holds all mutable run state and implements the
//! arrival/service/clock tick as a synchronous, lock-free method.
//! `SimulationEngine` owns the run lifecycle: it moves a fresh core onto a
//! dedicated tick thread on `start` and talks to it over a command channel.
//!
//! See `core.rs` and `service.rs` for full implementation.

pub mod core;
pub mod report;
pub mod service;

// Re-export main types for convenience
pub use self::core::{SimulationCore, TickOutcome};
pub use report::build_report;
pub use service::{SimulationEngine, StartAck};
