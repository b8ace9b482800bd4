//! Live status snapshot
//!
//! A deep, independent copy of the observable run state. The tick thread
//! publishes a fresh snapshot once per tick; callers never see a live
//! reference into mutable simulation state.

use serde::{Deserialize, Serialize};

/// Observable state of one checkout station
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckoutInfo {
    /// Station id (1-based)
    pub id: u32,

    /// Whether a customer is currently being served
    pub busy: bool,

    /// Customers fully served by this station
    pub customers_processed: u64,
}

/// Value snapshot of the current simulation state
///
/// Valid regardless of run state: while stopped it reflects the last-known
/// values of the previous run (or the empty defaults if none ran yet).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SimulationStatus {
    /// Per-station state, ordered by id
    pub checkouts: Vec<CheckoutInfo>,

    /// Customers currently waiting in the queue
    pub queue_count: usize,

    /// Whether a run is active
    pub is_running: bool,

    /// Simulated time of day, formatted `HH:MM:SS`
    pub current_time: String,
}

impl Default for SimulationStatus {
    /// Status of an engine that has never run: empty pool, opening time
    fn default() -> Self {
        Self {
            checkouts: Vec::new(),
            queue_count: 0,
            is_running: false,
            current_time: "08:00:00".to_string(),
        }
    }
}
