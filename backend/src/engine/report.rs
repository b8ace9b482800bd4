//! Report derivation at stop time
//!
//! Turns the accumulated metrics of a finished run into an immutable
//! [`SimulationReport`], stamped with the wall-clock build time and a fresh
//! record id.

use std::time::SystemTime;

use uuid::Uuid;

use crate::core::clock::SimClock;
use crate::models::config::SimulationConfig;
use crate::models::metrics::MetricsAccumulator;
use crate::models::report::SimulationReport;

/// Build the finished-run report
///
/// Utilization is the share of available checkout-seconds
/// (`open_checkouts × elapsed`) actually spent serving. Elapsed simulated
/// time is clamped to at least one second so a run stopped before its
/// first tick still yields a well-defined (all-zero) report.
pub fn build_report(
    config: &SimulationConfig,
    clock: &SimClock,
    metrics: &MetricsAccumulator,
) -> SimulationReport {
    let elapsed_seconds = clock.elapsed_seconds().max(1) as f64;
    let available_seconds = config.open_checkouts as f64 * elapsed_seconds;

    let checkout_utilization_percent = if available_seconds == 0.0 {
        0.0
    } else {
        100.0 * metrics.total_busy_seconds() / available_seconds
    };

    let average_wait_minutes = if metrics.customers_served() == 0 {
        0.0
    } else {
        metrics.total_wait_minutes() / metrics.customers_served() as f64
    };

    SimulationReport {
        id: Uuid::new_v4(),
        date: SystemTime::now(),
        average_wait_minutes,
        checkout_utilization_percent,
        lost_customers: metrics.customers_lost(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_tick_run_reports_zeros() {
        let config = SimulationConfig {
            open_checkouts: 3,
            customer_intensity: 100.0,
            simulation_speed: 1.0,
        };
        let report = build_report(&config, &SimClock::new(), &MetricsAccumulator::new([1, 2, 3]));

        assert_eq!(report.average_wait_minutes, 0.0);
        assert_eq!(report.checkout_utilization_percent, 0.0);
        assert_eq!(report.lost_customers, 0);
    }

    #[test]
    fn test_empty_pool_reports_zero_utilization() {
        let config = SimulationConfig {
            open_checkouts: 0,
            customer_intensity: 100.0,
            simulation_speed: 1.0,
        };
        let mut clock = SimClock::new();
        for _ in 0..100 {
            clock.advance();
        }
        let report = build_report(&config, &clock, &MetricsAccumulator::new([]));
        assert_eq!(report.checkout_utilization_percent, 0.0);
    }

    #[test]
    fn test_utilization_and_average_wait() {
        let config = SimulationConfig {
            open_checkouts: 2,
            customer_intensity: 100.0,
            simulation_speed: 1.0,
        };
        let mut clock = SimClock::new();
        for _ in 0..100 {
            clock.advance();
        }

        let mut metrics = MetricsAccumulator::new([1, 2]);
        metrics.record_busy(1, 100.0);
        metrics.record_busy(2, 50.0);
        metrics.record_wait(3.0);
        metrics.record_wait(1.0);

        let report = build_report(&config, &clock, &metrics);
        // 150 busy seconds out of 2 × 100 available
        assert_eq!(report.checkout_utilization_percent, 75.0);
        assert_eq!(report.average_wait_minutes, 2.0);
    }
}
