//! Finished-run report
//!
//! Built once per completed run, held in memory as the "last report" until
//! the next stop overwrites it, and handed to the report store for
//! persistence.

use std::time::SystemTime;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Summary of one completed simulation run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SimulationReport {
    /// Persisted record id
    pub id: Uuid,

    /// Wall-clock time the report was built
    pub date: SystemTime,

    /// Mean queue wait of served customers, in simulated minutes
    /// (0 when nobody was served)
    pub average_wait_minutes: f64,

    /// Share of available checkout-seconds actually spent serving, 0-100
    pub checkout_utilization_percent: f64,

    /// Arrivals rejected because the queue was at capacity
    pub lost_customers: u64,
}
