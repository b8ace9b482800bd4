//! Run-level metric accumulation
//!
//! Running totals gathered during the tick loop and consumed by the report
//! builder at stop time. Reset on every start by constructing a fresh
//! accumulator alongside the rest of the run state.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Running totals for one simulation run
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MetricsAccumulator {
    /// Sum of queue wait times of served customers, in simulated minutes
    total_wait_minutes: f64,

    /// Customers handed to a checkout
    customers_served: u64,

    /// Arrivals rejected because the queue was at capacity
    customers_lost: u64,

    /// Per-station busy seconds, mirroring each checkout's cumulative total
    checkout_busy_seconds: HashMap<u32, f64>,
}

impl MetricsAccumulator {
    /// Create a zeroed accumulator with one busy-time slot per station id
    pub fn new(checkout_ids: impl IntoIterator<Item = u32>) -> Self {
        Self {
            checkout_busy_seconds: checkout_ids.into_iter().map(|id| (id, 0.0)).collect(),
            ..Self::default()
        }
    }

    /// Record a served customer and the minutes they waited in the queue
    pub fn record_wait(&mut self, wait_minutes: f64) {
        self.total_wait_minutes += wait_minutes;
        self.customers_served += 1;
    }

    /// Record an arrival lost to a full queue
    pub fn record_lost(&mut self) {
        self.customers_lost += 1;
    }

    /// Record `dt` seconds of busy time for one station
    pub fn record_busy(&mut self, checkout_id: u32, dt: f64) {
        *self.checkout_busy_seconds.entry(checkout_id).or_insert(0.0) += dt;
    }

    /// Sum of queue wait times, in simulated minutes
    pub fn total_wait_minutes(&self) -> f64 {
        self.total_wait_minutes
    }

    /// Customers handed to a checkout
    pub fn customers_served(&self) -> u64 {
        self.customers_served
    }

    /// Arrivals rejected because the queue was at capacity
    pub fn customers_lost(&self) -> u64 {
        self.customers_lost
    }

    /// Total busy seconds across all stations
    pub fn total_busy_seconds(&self) -> f64 {
        self.checkout_busy_seconds.values().sum()
    }

    /// Busy seconds recorded for one station
    pub fn busy_seconds(&self, checkout_id: u32) -> f64 {
        self.checkout_busy_seconds
            .get(&checkout_id)
            .copied()
            .unwrap_or(0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accumulation() {
        let mut metrics = MetricsAccumulator::new([1, 2]);

        metrics.record_wait(1.5);
        metrics.record_wait(0.5);
        metrics.record_lost();
        metrics.record_busy(1, 10.0);
        metrics.record_busy(2, 5.0);
        metrics.record_busy(1, 2.0);

        assert_eq!(metrics.total_wait_minutes(), 2.0);
        assert_eq!(metrics.customers_served(), 2);
        assert_eq!(metrics.customers_lost(), 1);
        assert_eq!(metrics.busy_seconds(1), 12.0);
        assert_eq!(metrics.total_busy_seconds(), 17.0);
    }
}
