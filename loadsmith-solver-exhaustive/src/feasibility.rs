//! Discard orders that could never be part of a load.

use loadsmith_core::{Order, Vehicle};
use log::trace;

use crate::grouping::CompatibilityGroup;

/// Whether `order` fits `vehicle` when carried alone.
pub(crate) const fn fits_individually(order: &Order, vehicle: &Vehicle) -> bool {
    vehicle.fits(order)
}

/// Drop members that exceed the vehicle's capacity on their own.
///
/// Returns `None` when nothing survives, so callers can skip the group
/// entirely. Surviving members keep their relative order.
///
/// # Examples
/// ```rust
/// use loadsmith_core::{Order, Vehicle};
/// use loadsmith_solver_exhaustive::{group_orders, retain_feasible};
///
/// let vehicle = Vehicle::new("truck-001", 1_000, 100);
/// let orders = vec![
///     Order::new("A", 10, 500, 50),
///     Order::new("B", 10, 1_500, 50),
/// ];
/// let mut groups = group_orders(&orders);
/// let group = retain_feasible(groups.remove(0), &vehicle).expect("A fits");
/// assert_eq!(group.len(), 1);
/// ```
#[must_use]
pub fn retain_feasible<'a>(
    mut group: CompatibilityGroup<'a>,
    vehicle: &Vehicle,
) -> Option<CompatibilityGroup<'a>> {
    group.retain(|order| {
        let fits = fits_individually(order, vehicle);
        if !fits {
            trace!(
                "discarding order {} ({} lbs, {} cuft) exceeding vehicle {}",
                order.id, order.weight_lbs, order.volume_cuft, vehicle.id
            );
        }
        fits
    });
    if group.is_empty() { None } else { Some(group) }
}
