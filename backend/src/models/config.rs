//! Simulation run configuration
//!
//! Supplied once at `start` and immutable for the duration of the run.
//! Degenerate values are normalized rather than rejected: a non-positive
//! playback speed falls back to real time, and a zero-checkout pool is
//! accepted (the run simply serves nobody and loses arrivals once the
//! queue fills).

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Configuration for one simulation run
///
/// # Example
/// ```
/// use checkout_simulator_core_rs::SimulationConfig;
///
/// let config = SimulationConfig {
///     open_checkouts: 3,
///     customer_intensity: 120.0,
///     simulation_speed: 60.0,
/// };
/// assert_eq!(config.effective_speed(), 60.0);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SimulationConfig {
    /// Number of checkout stations open for the run
    pub open_checkouts: u32,

    /// Base arrival intensity in customers per hour
    pub customer_intensity: f64,

    /// Wall-clock playback speed multiplier (simulated seconds per
    /// wall-clock second)
    pub simulation_speed: f64,
}

impl SimulationConfig {
    /// Playback speed with non-positive values normalized to real time
    pub fn effective_speed(&self) -> f64 {
        if self.simulation_speed > 0.0 {
            self.simulation_speed
        } else {
            1.0
        }
    }

    /// Wall-clock pause between ticks, floored at one millisecond
    pub fn tick_interval(&self) -> Duration {
        let millis = (1000.0 / self.effective_speed()) as u64;
        Duration::from_millis(millis.max(1))
    }
}
