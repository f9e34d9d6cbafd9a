//! Test-only utilities for `loadsmith-solver-exhaustive`.
//!
//! The helpers in this module are available to unit tests, behavioural
//! tests and benchmarks. They are gated behind the `test-support` feature
//! (and `cfg(test)`).

use loadsmith_core::test_support::{day, order};
use loadsmith_core::{OptimizeRequest, Order, Vehicle};

/// Second lane used when a test needs orders that must not be combined with
/// the default lane.
pub const ALTERNATE_LANE: (&str, &str) = ("New York, NY", "Miami, FL");

/// An order on the given `(origin, destination)` lane with the default window.
///
/// # Examples
/// ```rust
/// use loadsmith_solver_exhaustive::test_support::{ALTERNATE_LANE, order_on};
///
/// let order = order_on(ALTERNATE_LANE, "ORD-101", 10_000, 1_000, 100);
/// assert_eq!(order.origin, "New York, NY");
/// ```
#[must_use]
pub fn order_on(
    lane: (&str, &str),
    id: &str,
    payout_cents: u64,
    weight_lbs: u64,
    volume_cuft: u64,
) -> Order {
    let (origin, destination) = lane;
    order(id, payout_cents, weight_lbs, volume_cuft).with_lane(origin, destination)
}

/// An order on the default lane available between two day offsets.
///
/// Offsets are counted from the base date used by
/// [`loadsmith_core::test_support::day`].
#[must_use]
pub fn order_between(
    id: &str,
    payout_cents: u64,
    weight_lbs: u64,
    volume_cuft: u64,
    pickup_day: u64,
    delivery_day: u64,
) -> Order {
    order(id, payout_cents, weight_lbs, volume_cuft).with_window(day(pickup_day), day(delivery_day))
}

/// Wrap a vehicle and orders into a request.
#[must_use]
pub const fn request(vehicle: Vehicle, orders: Vec<Order>) -> OptimizeRequest {
    OptimizeRequest::new(vehicle, orders)
}
