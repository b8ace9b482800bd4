//! Simulated time for the checkout floor
//!
//! The simulation operates in discrete one-second ticks. Every run opens at
//! 08:00:00 simulated time and the clock advances exactly one simulated
//! second per tick, regardless of how fast ticks play back in wall-clock
//! time.

use serde::{Deserialize, Serialize};

/// Seconds past midnight at which every run opens (08:00:00).
pub const OPENING_SECOND_OF_DAY: u64 = 8 * 3600;

const SECONDS_PER_DAY: u64 = 24 * 3600;

/// Simulated clock advancing one second per tick
///
/// # Example
/// ```
/// use checkout_simulator_core_rs::SimClock;
///
/// let mut clock = SimClock::new();
/// assert_eq!(clock.formatted(), "08:00:00");
///
/// clock.advance();
/// assert_eq!(clock.elapsed_seconds(), 1);
/// assert_eq!(clock.formatted(), "08:00:01");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimClock {
    /// Simulated seconds elapsed since the run opened
    elapsed_seconds: u64,
}

impl SimClock {
    /// Create a clock positioned at opening time (08:00:00)
    pub fn new() -> Self {
        Self { elapsed_seconds: 0 }
    }

    /// Advance time by one simulated second
    pub fn advance(&mut self) {
        self.elapsed_seconds += 1;
    }

    /// Simulated seconds elapsed since the run opened
    pub fn elapsed_seconds(&self) -> u64 {
        self.elapsed_seconds
    }

    /// Seconds past midnight of the current simulated day
    ///
    /// Wraps past midnight so runs longer than 16 simulated hours keep a
    /// meaningful time-of-day.
    pub fn second_of_day(&self) -> u64 {
        (OPENING_SECOND_OF_DAY + self.elapsed_seconds) % SECONDS_PER_DAY
    }

    /// Current simulated hour of day (0-23)
    pub fn hour_of_day(&self) -> u32 {
        (self.second_of_day() / 3600) as u32
    }

    /// Current simulated time formatted as `HH:MM:SS`
    pub fn formatted(&self) -> String {
        let s = self.second_of_day();
        format!("{:02}:{:02}:{:02}", s / 3600, (s % 3600) / 60, s % 60)
    }
}

impl Default for SimClock {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wraps_past_midnight() {
        let mut clock = SimClock::new();
        // 16 hours takes the clock to midnight
        for _ in 0..16 * 3600 {
            clock.advance();
        }
        assert_eq!(clock.hour_of_day(), 0);
        assert_eq!(clock.formatted(), "00:00:00");
        assert_eq!(clock.elapsed_seconds(), 16 * 3600);
    }
}
