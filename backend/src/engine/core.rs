//! Owned tick state - the simulation core
//!
//! All mutable run state (clock, RNG, queue, checkout pool, metric totals)
//! lives in one struct owned by whoever drives the tick loop. The tick is a
//! plain synchronous method with no threads, locks, or sleeps, so the whole
//! service model is unit-testable without real delays.
//!
//! # Tick anatomy
//!
//! ```text
//! For each tick:
//! 1. Arrival    - one Bernoulli draw from the hour-of-day demand curve;
//!                 enqueue the arrival timestamp, or count it lost when the
//!                 queue is at capacity
//! 2. Service    - advance every busy checkout by one second; a station
//!                 reaching zero frees up and counts the customer processed
//! 3. Assignment - idle stations (including ones freed in step 2) take the
//!                 oldest waiting customer: record the wait, draw a basket
//!                 size, begin service
//! 4. Clock      - advance simulated time by one second
//! ```
//!
//! Step 2 runs before step 3 so a station freed this tick can start its
//! next customer without an artificial one-tick idle gap. Assignment walks
//! the pool in id order, giving deterministic tie-breaks.

use crate::arrivals::ArrivalGenerator;
use crate::core::clock::SimClock;
use crate::engine::report::build_report;
use crate::models::checkout::{
    service_seconds_for_items, Checkout, CheckoutPool, MAX_BASKET_ITEMS, MIN_BASKET_ITEMS,
};
use crate::models::config::SimulationConfig;
use crate::models::metrics::MetricsAccumulator;
use crate::models::queue::{CustomerQueue, EnqueueOutcome};
use crate::models::report::SimulationReport;
use crate::models::status::{CheckoutInfo, SimulationStatus};
use crate::rng::SimRng;

/// Simulated seconds per tick
const TICK_SECONDS: f64 = 1.0;

/// What happened during a single tick
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickOutcome {
    /// An arrival was generated this tick (whether or not it fit the queue)
    pub arrival_attempted: bool,

    /// The arrival was rejected because the queue was at capacity
    pub customer_lost: bool,

    /// Customers handed to a checkout this tick
    pub customers_started: u32,

    /// Customers whose service completed this tick
    pub customers_finished: u32,
}

/// Complete mutable state of one simulation run
///
/// # Determinism
///
/// All randomness flows through the seeded [`SimRng`], so the same seed,
/// config, and tick count reproduce an identical run.
///
/// # Example
///
/// ```
/// use checkout_simulator_core_rs::{SimulationConfig, SimulationCore};
///
/// let config = SimulationConfig {
///     open_checkouts: 2,
///     customer_intensity: 300.0,
///     simulation_speed: 1.0,
/// };
/// let mut core = SimulationCore::new(config, 42);
///
/// for _ in 0..60 {
///     core.tick();
/// }
/// assert_eq!(core.clock().elapsed_seconds(), 60);
/// ```
#[derive(Debug, Clone)]
pub struct SimulationCore {
    /// Immutable run configuration
    config: SimulationConfig,

    /// Simulated time, opens at 08:00:00
    clock: SimClock,

    /// Run-scoped deterministic RNG
    rng: SimRng,

    /// Per-tick arrival decisions
    arrivals: ArrivalGenerator,

    /// Bounded FIFO of waiting customers
    queue: CustomerQueue,

    /// Checkout stations, ids 1..=N
    pool: CheckoutPool,

    /// Running totals for the final report
    metrics: MetricsAccumulator,
}

impl SimulationCore {
    /// Create a fresh run from configuration and RNG seed
    ///
    /// All accumulators start at zero and the clock at opening time; there
    /// is no carry-over from previous runs.
    pub fn new(config: SimulationConfig, seed: u64) -> Self {
        let pool = CheckoutPool::new(config.open_checkouts);
        let metrics = MetricsAccumulator::new(pool.iter().map(Checkout::id));
        let arrivals = ArrivalGenerator::new(config.customer_intensity);

        Self {
            config,
            clock: SimClock::new(),
            rng: SimRng::new(seed),
            arrivals,
            queue: CustomerQueue::new(),
            pool,
            metrics,
        }
    }

    /// Execute one simulation tick
    pub fn tick(&mut self) -> TickOutcome {
        let mut outcome = TickOutcome::default();
        let now = self.clock.elapsed_seconds();

        // STEP 1: ARRIVAL
        if self.arrivals.sample(self.clock.hour_of_day(), &mut self.rng) {
            outcome.arrival_attempted = true;
            match self.queue.push(now) {
                EnqueueOutcome::Accepted => {}
                EnqueueOutcome::Rejected => {
                    self.metrics.record_lost();
                    outcome.customer_lost = true;
                }
            }
        }

        // STEP 2: SERVICE
        // Advance before assignment so a station freed this second can take
        // the next customer below.
        for checkout in self.pool.iter_mut() {
            if checkout.is_busy() {
                self.metrics.record_busy(checkout.id(), TICK_SECONDS);
                if checkout.advance(TICK_SECONDS) {
                    outcome.customers_finished += 1;
                }
            }
        }

        // STEP 3: ASSIGNMENT
        for checkout in self.pool.iter_mut() {
            if !checkout.is_busy() {
                let Some(arrival_second) = self.queue.pop() else {
                    break;
                };
                let wait_minutes = (now - arrival_second) as f64 / 60.0;
                self.metrics.record_wait(wait_minutes);

                let items = self.rng.range(MIN_BASKET_ITEMS, MAX_BASKET_ITEMS + 1);
                checkout.begin_service(service_seconds_for_items(items));
                outcome.customers_started += 1;
            }
        }

        // STEP 4: CLOCK
        self.clock.advance();

        outcome
    }

    /// Value snapshot of the observable state
    pub fn status(&self, is_running: bool) -> SimulationStatus {
        SimulationStatus {
            checkouts: self
                .pool
                .iter()
                .map(|c| CheckoutInfo {
                    id: c.id(),
                    busy: c.is_busy(),
                    customers_processed: c.customers_processed(),
                })
                .collect(),
            queue_count: self.queue.len(),
            is_running,
            current_time: self.clock.formatted(),
        }
    }

    /// Derive the finished-run report from the accumulated metrics
    pub fn build_report(&self) -> SimulationReport {
        build_report(&self.config, &self.clock, &self.metrics)
    }

    /// Run configuration
    pub fn config(&self) -> &SimulationConfig {
        &self.config
    }

    /// Simulated clock
    pub fn clock(&self) -> &SimClock {
        &self.clock
    }

    /// Waiting customers
    pub fn queue(&self) -> &CustomerQueue {
        &self.queue
    }

    /// Checkout stations
    pub fn pool(&self) -> &CheckoutPool {
        &self.pool
    }

    /// Accumulated metrics
    pub fn metrics(&self) -> &MetricsAccumulator {
        &self.metrics
    }
}
