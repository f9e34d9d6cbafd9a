//! Exhaustive subset search within one compatibility group.
//!
//! Every non-empty subset of the group is encoded as a bitmask over the
//! members' positions and checked for capacity and a shared loading window.
//! The best subset is replaced only by a strictly higher payout, so among
//! equally paying subsets the one with the numerically smallest mask wins and
//! subsets paying nothing are never selected.

use chrono::NaiveDate;
use loadsmith_core::{LoadPlan, OptimizeError, Order, Vehicle};

use crate::grouping::CompatibilityGroup;

/// Largest group [`search_group`] will enumerate.
///
/// Subsets are indexed by a `u64` mask, which leaves room for 63 members
/// before the shift that bounds the enumeration would overflow.
pub const MAX_GROUP_SIZE: usize = 63;

/// Running totals of a candidate subset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Totals {
    payout_cents: u64,
    weight_lbs: u64,
    volume_cuft: u64,
    latest_pickup: NaiveDate,
    earliest_delivery: NaiveDate,
}

impl Totals {
    const EMPTY: Self = Self {
        payout_cents: 0,
        weight_lbs: 0,
        volume_cuft: 0,
        latest_pickup: NaiveDate::MIN,
        earliest_delivery: NaiveDate::MAX,
    };

    fn with_order(self, order: &Order) -> Self {
        Self {
            payout_cents: self.payout_cents.saturating_add(order.payout_cents),
            weight_lbs: self.weight_lbs.saturating_add(order.weight_lbs),
            volume_cuft: self.volume_cuft.saturating_add(order.volume_cuft),
            latest_pickup: self.latest_pickup.max(order.pickup_date),
            earliest_delivery: self.earliest_delivery.min(order.delivery_date),
        }
    }

    fn shares_window(&self) -> bool {
        self.latest_pickup <= self.earliest_delivery
    }

    const fn fits(&self, vehicle: &Vehicle) -> bool {
        vehicle.can_carry(self.weight_lbs, self.volume_cuft)
    }
}

/// Members of `members` whose position bit is set in `mask`, in input order.
fn selected<'a>(members: &[&'a Order], mask: u64) -> impl Iterator<Item = &'a Order> {
    debug_assert!(
        members.len() >= 64 || mask >> members.len() == 0,
        "mask {mask:#b} addresses positions beyond {} members",
        members.len()
    );
    let mut rest = mask;
    std::iter::from_fn(move || {
        while rest != 0 {
            let position = rest.trailing_zeros();
            rest &= rest - 1;
            if let Some(order) = usize::try_from(position)
                .ok()
                .and_then(|index| members.get(index))
            {
                return Some(*order);
            }
        }
        None
    })
}

fn totals_of(members: &[&Order], mask: u64) -> Totals {
    selected(members, mask).fold(Totals::EMPTY, Totals::with_order)
}

/// The best subset found in one group.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GroupSelection<'a> {
    orders: Vec<&'a Order>,
    payout_cents: u64,
    weight_lbs: u64,
    volume_cuft: u64,
    subsets_evaluated: u64,
}

impl<'a> GroupSelection<'a> {
    /// Selected orders in input order. Empty when no subset paid anything.
    #[must_use]
    pub fn orders(&self) -> &[&'a Order] {
        &self.orders
    }

    /// Combined payout of the selection.
    #[must_use]
    pub const fn payout_cents(&self) -> u64 {
        self.payout_cents
    }

    /// Combined weight of the selection.
    #[must_use]
    pub const fn weight_lbs(&self) -> u64 {
        self.weight_lbs
    }

    /// Combined volume of the selection.
    #[must_use]
    pub const fn volume_cuft(&self) -> u64 {
        self.volume_cuft
    }

    /// Number of non-empty subsets enumerated for the group.
    #[must_use]
    pub const fn subsets_evaluated(&self) -> u64 {
        self.subsets_evaluated
    }

    /// Whether nothing was selected.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.orders.is_empty()
    }

    /// Convert the selection into a plan for `vehicle`.
    #[must_use]
    pub fn into_plan(self, vehicle: &Vehicle) -> LoadPlan {
        let ids = self.orders.iter().map(|order| order.id.clone()).collect();
        LoadPlan::new(
            vehicle,
            ids,
            self.payout_cents,
            self.weight_lbs,
            self.volume_cuft,
        )
    }
}

/// Find the highest-paying subset of `group` that `vehicle` can carry.
///
/// A subset qualifies when its combined weight and volume stay within the
/// vehicle's limits and its latest pickup date is no later than its earliest
/// delivery date. The group is expected to contain only orders that fit the
/// vehicle individually, though oversized members merely cost enumeration
/// time.
///
/// # Errors
///
/// Returns [`OptimizeError::GroupTooLarge`] when the group has more than
/// [`MAX_GROUP_SIZE`] members.
///
/// # Examples
/// ```rust
/// use loadsmith_core::{Order, Vehicle};
/// use loadsmith_solver_exhaustive::{group_orders, search_group};
///
/// let vehicle = Vehicle::new("truck-001", 1_000, 100);
/// let orders = vec![
///     Order::new("A", 300, 600, 50),
///     Order::new("B", 200, 500, 50),
///     Order::new("C", 200, 400, 50),
/// ];
/// let groups = group_orders(&orders);
/// let selection = search_group(&groups[0], &vehicle).expect("small group");
///
/// assert_eq!(selection.payout_cents(), 500);
/// assert_eq!(selection.subsets_evaluated(), 7);
/// ```
pub fn search_group<'a>(
    group: &CompatibilityGroup<'a>,
    vehicle: &Vehicle,
) -> Result<GroupSelection<'a>, OptimizeError> {
    let members = group.orders();
    let size = members.len();
    let too_large = OptimizeError::GroupTooLarge {
        size,
        limit: MAX_GROUP_SIZE,
    };
    if size > MAX_GROUP_SIZE {
        return Err(too_large);
    }
    let end = u32::try_from(size)
        .ok()
        .and_then(|bits| 1_u64.checked_shl(bits))
        .ok_or(too_large)?;

    let mut best_mask = 0_u64;
    let mut best = Totals::EMPTY;
    for mask in 1..end {
        let candidate = totals_of(members, mask);
        if candidate.fits(vehicle)
            && candidate.shares_window()
            && candidate.payout_cents > best.payout_cents
        {
            best_mask = mask;
            best = candidate;
        }
    }

    Ok(GroupSelection {
        orders: selected(members, best_mask).collect(),
        payout_cents: best.payout_cents,
        weight_lbs: best.weight_lbs,
        volume_cuft: best.volume_cuft,
        subsets_evaluated: end.saturating_sub(1),
    })
}
