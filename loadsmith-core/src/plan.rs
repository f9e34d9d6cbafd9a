//! The load selected for a vehicle.
//!
//! A [`LoadPlan`] records which orders were chosen, their totals, and how much
//! of each capacity dimension they consume.

use crate::Vehicle;

/// Orders selected for a vehicle together with their totals.
///
/// An empty selection with zero totals is a valid plan meaning no feasible
/// combination of orders exists.
///
/// # Examples
/// ```
/// use loadsmith_core::{LoadPlan, Vehicle};
///
/// let truck = Vehicle::new("truck-001", 45_000, 2_500);
/// let plan = LoadPlan::new(&truck, vec!["A".into()], 125_000, 12_000, 600);
///
/// assert_eq!(plan.weight_utilization_percent, 26.67);
/// assert_eq!(plan.volume_utilization_percent, 24.0);
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LoadPlan {
    /// Identifier of the vehicle the plan was computed for.
    #[cfg_attr(feature = "serde", serde(rename = "truck_id"))]
    pub vehicle_id: String,
    /// Identifiers of the selected orders.
    pub selected_order_ids: Vec<String>,
    /// Combined payout in cents.
    pub total_payout_cents: u64,
    /// Combined weight in pounds.
    pub total_weight_lbs: u64,
    /// Combined volume in cubic feet.
    pub total_volume_cuft: u64,
    /// Share of the weight limit used, in percent with two decimals.
    #[cfg_attr(feature = "serde", serde(rename = "utilization_weight_percent"))]
    pub weight_utilization_percent: f64,
    /// Share of the volume limit used, in percent with two decimals.
    #[cfg_attr(feature = "serde", serde(rename = "utilization_volume_percent"))]
    pub volume_utilization_percent: f64,
}

impl LoadPlan {
    /// Build a plan from a selection and its totals, deriving utilization.
    #[must_use]
    pub fn new(
        vehicle: &Vehicle,
        selected_order_ids: Vec<String>,
        total_payout_cents: u64,
        total_weight_lbs: u64,
        total_volume_cuft: u64,
    ) -> Self {
        Self {
            vehicle_id: vehicle.id.clone(),
            selected_order_ids,
            total_payout_cents,
            total_weight_lbs,
            total_volume_cuft,
            weight_utilization_percent: utilization_percent(
                total_weight_lbs,
                vehicle.max_weight_lbs,
            ),
            volume_utilization_percent: utilization_percent(
                total_volume_cuft,
                vehicle.max_volume_cuft,
            ),
        }
    }

    /// A plan carrying nothing.
    ///
    /// # Examples
    /// ```
    /// use loadsmith_core::{LoadPlan, Vehicle};
    ///
    /// let plan = LoadPlan::empty(&Vehicle::new("truck-001", 10, 10));
    /// assert!(plan.is_empty());
    /// assert_eq!(plan.total_payout_cents, 0);
    /// ```
    #[must_use]
    pub fn empty(vehicle: &Vehicle) -> Self {
        Self::new(vehicle, Vec::new(), 0, 0, 0)
    }

    /// Whether no order was selected.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.selected_order_ids.is_empty()
    }
}

/// Percentage of `capacity` consumed by `total`, rounded to two decimals.
///
/// Returns `0.0` when `total` is zero, and also when `capacity` is zero since
/// no meaningful ratio exists. The ratio is rounded from its exact binary
/// value, with exact halves going to the even digit, so `1 / 800` reports
/// `0.12`.
///
/// # Examples
/// ```
/// use loadsmith_core::utilization_percent;
///
/// assert_eq!(utilization_percent(20_500, 45_000), 45.56);
/// assert_eq!(utilization_percent(0, 45_000), 0.0);
/// ```
#[must_use]
#[expect(
    clippy::float_arithmetic,
    clippy::cast_precision_loss,
    reason = "utilization is reported as a rounded floating-point percentage"
)]
pub fn utilization_percent(total: u64, capacity: u64) -> f64 {
    if total == 0 || capacity == 0 {
        return 0.0;
    }
    let percent = total as f64 / capacity as f64 * 100.0;
    // Round the exact ratio; scaling by 100 first can land it on a half.
    format!("{percent:.2}").parse().unwrap_or(percent)
}
