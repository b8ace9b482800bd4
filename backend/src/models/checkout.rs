//! Checkout stations and the service-time model
//!
//! Each checkout serves one customer at a time. Service duration is a
//! linear function of basket size: a fixed per-item scan time plus a fixed
//! payment time. Stations are owned by the [`CheckoutPool`] and mutated
//! only inside the engine's tick.

use serde::{Deserialize, Serialize};

/// Seconds spent scanning one item
pub const SCAN_SECONDS_PER_ITEM: f64 = 2.0;

/// Fixed payment-handling time per customer, in seconds
pub const PAYMENT_SECONDS: f64 = 30.0;

/// Smallest basket drawn for a customer (inclusive)
pub const MIN_BASKET_ITEMS: u64 = 1;

/// Largest basket drawn for a customer (inclusive)
pub const MAX_BASKET_ITEMS: u64 = 49;

/// Total service time for a basket of `items` items
pub fn service_seconds_for_items(items: u64) -> f64 {
    items as f64 * SCAN_SECONDS_PER_ITEM + PAYMENT_SECONDS
}

/// A single checkout station
///
/// Invariant: an idle checkout never holds positive remaining service time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Checkout {
    /// Station id, 1..=N, stable for the run
    id: u32,

    /// Whether a customer is currently being served
    busy: bool,

    /// Seconds of service left for the current customer
    remaining_service_seconds: f64,

    /// Total seconds this station has spent serving, over the whole run
    cumulative_busy_seconds: f64,

    /// Customers fully served by this station
    customers_processed: u64,
}

impl Checkout {
    fn new(id: u32) -> Self {
        Self {
            id,
            busy: false,
            remaining_service_seconds: 0.0,
            cumulative_busy_seconds: 0.0,
            customers_processed: 0,
        }
    }

    /// Station id (1-based)
    pub fn id(&self) -> u32 {
        self.id
    }

    /// Whether a customer is currently being served
    pub fn is_busy(&self) -> bool {
        self.busy
    }

    /// Seconds of service left for the current customer
    pub fn remaining_service_seconds(&self) -> f64 {
        self.remaining_service_seconds
    }

    /// Total seconds spent serving over the run
    pub fn cumulative_busy_seconds(&self) -> f64 {
        self.cumulative_busy_seconds
    }

    /// Customers fully served by this station
    pub fn customers_processed(&self) -> u64 {
        self.customers_processed
    }

    /// Start serving a customer with the given service duration
    pub fn begin_service(&mut self, service_seconds: f64) {
        debug_assert!(!self.busy, "begin_service on a busy checkout");
        self.busy = true;
        self.remaining_service_seconds = service_seconds;
    }

    /// Advance an in-progress service by `dt` seconds
    ///
    /// Accrues busy time and, when the service completes, frees the station
    /// and counts the customer as processed. Returns `true` exactly when
    /// the service completed on this call. No-op on an idle station.
    pub fn advance(&mut self, dt: f64) -> bool {
        if !self.busy {
            return false;
        }

        self.remaining_service_seconds -= dt;
        self.cumulative_busy_seconds += dt;

        if self.remaining_service_seconds <= 0.0 {
            self.busy = false;
            self.remaining_service_seconds = 0.0;
            self.customers_processed += 1;
            return true;
        }
        false
    }
}

/// Fixed-size pool of checkout stations, iterated in id order
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CheckoutPool {
    checkouts: Vec<Checkout>,
}

impl CheckoutPool {
    /// Create a pool of `open_checkouts` stations with ids 1..=N
    pub fn new(open_checkouts: u32) -> Self {
        let checkouts = (1..=open_checkouts).map(Checkout::new).collect();
        Self { checkouts }
    }

    /// Number of stations in the pool
    pub fn len(&self) -> usize {
        self.checkouts.len()
    }

    /// Whether the pool has no stations at all
    pub fn is_empty(&self) -> bool {
        self.checkouts.is_empty()
    }

    /// Stations in id order
    pub fn iter(&self) -> impl Iterator<Item = &Checkout> {
        self.checkouts.iter()
    }

    /// Mutable stations in id order; assignment order is iteration order
    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut Checkout> {
        self.checkouts.iter_mut()
    }

    /// Sum of cumulative busy seconds across all stations
    pub fn total_busy_seconds(&self) -> f64 {
        self.checkouts
            .iter()
            .map(Checkout::cumulative_busy_seconds)
            .sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_service_time_formula() {
        assert_eq!(service_seconds_for_items(1), 32.0);
        assert_eq!(service_seconds_for_items(49), 128.0);
    }

    #[test]
    fn test_advance_frees_station_at_zero() {
        let mut checkout = Checkout::new(1);
        checkout.begin_service(2.0);
        assert!(checkout.is_busy());

        assert!(!checkout.advance(1.0));
        assert!(checkout.is_busy());
        assert_eq!(checkout.remaining_service_seconds(), 1.0);

        assert!(checkout.advance(1.0));
        assert!(!checkout.is_busy());
        assert_eq!(checkout.remaining_service_seconds(), 0.0);
        assert_eq!(checkout.customers_processed(), 1);
        assert_eq!(checkout.cumulative_busy_seconds(), 2.0);
    }

    #[test]
    fn test_advance_noop_when_idle() {
        let mut checkout = Checkout::new(1);
        assert!(!checkout.advance(1.0));
        assert_eq!(checkout.cumulative_busy_seconds(), 0.0);
        assert_eq!(checkout.customers_processed(), 0);
    }

    #[test]
    fn test_pool_ids_are_one_based_and_stable() {
        let pool = CheckoutPool::new(3);
        let ids: Vec<u32> = pool.iter().map(Checkout::id).collect();
        assert_eq!(ids, vec![1, 2, 3]);

        let empty = CheckoutPool::new(0);
        assert!(empty.is_empty());
    }
}
