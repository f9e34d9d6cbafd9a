//! Partition orders into groups that may share a vehicle.

use std::collections::HashMap;
use std::collections::hash_map::Entry;
use std::fmt;

use loadsmith_core::Order;

/// The attributes two orders must share to ride together.
///
/// Strings are compared byte for byte, so `"Dallas, TX"` and `"dallas, tx"`
/// form different lanes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CompatibilityKey<'a> {
    /// Shared origin.
    pub origin: &'a str,
    /// Shared destination.
    pub destination: &'a str,
    /// Shared hazmat flag.
    pub hazmat: bool,
}

impl<'a> CompatibilityKey<'a> {
    /// The key an order is grouped under.
    #[must_use]
    pub fn of(order: &'a Order) -> Self {
        Self {
            origin: &order.origin,
            destination: &order.destination,
            hazmat: order.is_hazmat,
        }
    }
}

impl fmt::Display for CompatibilityKey<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {}", self.origin, self.destination)?;
        if self.hazmat {
            f.write_str(" (hazmat)")?;
        }
        Ok(())
    }
}

/// Orders sharing one [`CompatibilityKey`], in input order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompatibilityGroup<'a> {
    key: CompatibilityKey<'a>,
    orders: Vec<&'a Order>,
}

impl<'a> CompatibilityGroup<'a> {
    /// Build a group from a key and its members.
    ///
    /// Members are not checked against the key; [`group_orders`] is the usual
    /// way to obtain groups.
    #[must_use]
    pub const fn new(key: CompatibilityKey<'a>, orders: Vec<&'a Order>) -> Self {
        Self { key, orders }
    }

    /// The key shared by every member.
    #[must_use]
    pub const fn key(&self) -> CompatibilityKey<'a> {
        self.key
    }

    /// Members in input order.
    #[must_use]
    pub fn orders(&self) -> &[&'a Order] {
        &self.orders
    }

    /// Number of members.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.orders.len()
    }

    /// Whether the group has no members.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.orders.is_empty()
    }

    pub(crate) fn retain(&mut self, keep: impl FnMut(&&'a Order) -> bool) {
        self.orders.retain(keep);
    }
}

/// Partition `orders` by [`CompatibilityKey`].
///
/// Groups appear in the order their key first occurs in the input, which is
/// the order the optimizer evaluates them and therefore the order used to
/// break payout ties between groups.
///
/// # Examples
/// ```rust
/// use loadsmith_core::Order;
/// use loadsmith_solver_exhaustive::group_orders;
///
/// let orders = vec![
///     Order::new("A", 1, 1, 1).with_lane("Chicago, IL", "Dallas, TX"),
///     Order::new("B", 1, 1, 1).with_lane("New York, NY", "Miami, FL"),
///     Order::new("C", 1, 1, 1).with_lane("Chicago, IL", "Dallas, TX"),
/// ];
/// let groups = group_orders(&orders);
///
/// assert_eq!(groups.len(), 2);
/// assert_eq!(groups[0].len(), 2);
/// assert_eq!(groups[1].key().origin, "New York, NY");
/// ```
#[must_use]
pub fn group_orders(orders: &[Order]) -> Vec<CompatibilityGroup<'_>> {
    let mut positions: HashMap<CompatibilityKey<'_>, usize> = HashMap::new();
    let mut groups: Vec<CompatibilityGroup<'_>> = Vec::new();
    for order in orders {
        let key = CompatibilityKey::of(order);
        match positions.entry(key) {
            Entry::Occupied(slot) => {
                if let Some(group) = groups.get_mut(*slot.get()) {
                    group.orders.push(order);
                }
            }
            Entry::Vacant(slot) => {
                slot.insert(groups.len());
                groups.push(CompatibilityGroup::new(key, vec![order]));
            }
        }
    }
    groups
}

#[cfg(test)]
mod tests {
    use super::*;
    use loadsmith_core::test_support::order;
    use rstest::rstest;

    fn ids<'a>(group: &'a CompatibilityGroup<'a>) -> Vec<&'a str> {
        group.orders().iter().map(|o| o.id.as_str()).collect()
    }

    #[rstest]
    fn empty_input_yields_no_groups() {
        assert!(group_orders(&[]).is_empty());
    }

    #[rstest]
    fn same_lane_orders_share_a_group() {
        let orders = vec![order("A", 1, 1, 1), order("B", 1, 1, 1), order("C", 1, 1, 1)];
        let groups = group_orders(&orders);
        assert_eq!(groups.len(), 1);
        let group = groups.first().expect("one group");
        assert_eq!(ids(group), vec!["A", "B", "C"]);
    }

    #[rstest]
    fn hazmat_splits_a_lane() {
        let orders = vec![
            order("A", 1, 1, 1),
            order("H", 1, 1, 1).with_hazmat(true),
            order("B", 1, 1, 1),
        ];
        let groups = group_orders(&orders);
        assert_eq!(groups.len(), 2);
        let plain = groups.first().expect("plain group");
        let hazmat = groups.get(1).expect("hazmat group");
        assert_eq!(ids(plain), vec!["A", "B"]);
        assert_eq!(ids(hazmat), vec!["H"]);
        assert!(hazmat.key().hazmat);
    }

    #[rstest]
    #[case("Chicago, IL", "dallas, tx")]
    #[case("Chicago, IL ", "Dallas, TX")]
    #[case("Dallas, TX", "Chicago, IL")]
    fn lanes_are_not_normalised(#[case] origin: &str, #[case] destination: &str) {
        let orders = vec![
            order("A", 1, 1, 1),
            order("B", 1, 1, 1).with_lane(origin, destination),
        ];
        assert_eq!(group_orders(&orders).len(), 2);
    }

    #[rstest]
    fn groups_follow_first_appearance() {
        let orders = vec![
            order("X", 1, 1, 1).with_lane("New York, NY", "Miami, FL"),
            order("A", 1, 1, 1),
            order("Y", 1, 1, 1).with_lane("New York, NY", "Miami, FL"),
        ];
        let groups = group_orders(&orders);
        let origins: Vec<&str> = groups.iter().map(|g| g.key().origin).collect();
        assert_eq!(origins, vec!["New York, NY", "Chicago, IL"]);
        let first = groups.first().expect("first group");
        assert_eq!(ids(first), vec!["X", "Y"]);
    }

    #[rstest]
    fn key_display_marks_hazmat() {
        let hazmat = order("H", 1, 1, 1).with_hazmat(true);
        assert_eq!(
            CompatibilityKey::of(&hazmat).to_string(),
            "Chicago, IL -> Dallas, TX (hazmat)"
        );
        let plain = order("A", 1, 1, 1);
        assert_eq!(
            CompatibilityKey::of(&plain).to_string(),
            "Chicago, IL -> Dallas, TX"
        );
    }
}
