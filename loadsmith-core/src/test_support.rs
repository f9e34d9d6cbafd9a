//! Test-only builders for orders and vehicles.
//!
//! The helpers produce valid fixtures on a shared default lane so tests only
//! spell out the attributes they exercise.

use chrono::{Days, NaiveDate};

use crate::{Order, Vehicle};

/// Origin used by [`order`].
pub const DEFAULT_ORIGIN: &str = "Chicago, IL";
/// Destination used by [`order`].
pub const DEFAULT_DESTINATION: &str = "Dallas, TX";

/// The date `offset` days after Monday 6 January 2025.
///
/// # Examples
/// ```rust
/// use loadsmith_core::test_support::day;
///
/// assert!(day(0) < day(1));
/// ```
#[must_use]
pub fn day(offset: u64) -> NaiveDate {
    let base = NaiveDate::from_ymd_opt(2025, 1, 6).unwrap_or(NaiveDate::MIN);
    base.checked_add_days(Days::new(offset))
        .unwrap_or(NaiveDate::MAX)
}

/// A vehicle named `truck-001` with the given capacities.
#[must_use]
pub fn vehicle(max_weight_lbs: u64, max_volume_cuft: u64) -> Vehicle {
    Vehicle::new("truck-001", max_weight_lbs, max_volume_cuft)
}

/// A non-hazardous order on the default lane, available from `day(0)` to
/// `day(3)`.
///
/// # Examples
/// ```rust
/// use loadsmith_core::test_support::{DEFAULT_ORIGIN, order};
///
/// let order = order("ORD-001", 125_000, 12_000, 600);
/// assert_eq!(order.origin, DEFAULT_ORIGIN);
/// ```
#[must_use]
pub fn order(id: &str, payout_cents: u64, weight_lbs: u64, volume_cuft: u64) -> Order {
    Order::new(id, payout_cents, weight_lbs, volume_cuft)
        .with_lane(DEFAULT_ORIGIN, DEFAULT_DESTINATION)
        .with_window(day(0), day(3))
}
