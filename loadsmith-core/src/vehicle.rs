/// The truck being loaded and its capacity limits.
///
/// # Examples
/// ```
/// use loadsmith_core::{Order, Vehicle};
///
/// let truck = Vehicle::new("truck-001", 45_000, 2_500);
/// assert!(truck.fits(&Order::new("A", 0, 12_000, 600)));
/// assert!(!truck.fits(&Order::new("B", 0, 50_000, 600)));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Vehicle {
    /// Vehicle identifier, echoed back in the plan.
    pub id: String,
    /// Maximum payload weight in pounds.
    pub max_weight_lbs: u64,
    /// Maximum cargo volume in cubic feet.
    pub max_volume_cuft: u64,
}

impl Vehicle {
    /// Construct a vehicle with the given capacities.
    #[must_use]
    pub fn new(id: impl Into<String>, max_weight_lbs: u64, max_volume_cuft: u64) -> Self {
        Self {
            id: id.into(),
            max_weight_lbs,
            max_volume_cuft,
        }
    }

    /// Whether a load of the given weight and volume stays within capacity.
    #[must_use]
    pub const fn can_carry(&self, weight_lbs: u64, volume_cuft: u64) -> bool {
        weight_lbs <= self.max_weight_lbs && volume_cuft <= self.max_volume_cuft
    }

    /// Whether a single order fits on its own.
    #[must_use]
    pub const fn fits(&self, order: &crate::Order) -> bool {
        self.can_carry(order.weight_lbs, order.volume_cuft)
    }
}
