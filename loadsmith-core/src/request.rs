//! Optimization requests and their preconditions.

use std::collections::HashSet;

use chrono::NaiveDate;
use thiserror::Error;

use crate::{OptimizeError, Order, Vehicle};

/// A vehicle and the orders competing for space on it.
///
/// Optimizers assume the request satisfies [`OptimizeRequest::validate`];
/// boundaries must check it before handing the request over.
///
/// # Examples
/// ```rust
/// use loadsmith_core::{OptimizeRequest, Vehicle};
///
/// let request = OptimizeRequest::new(Vehicle::new("truck-001", 45_000, 2_500), Vec::new());
/// assert!(request.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct OptimizeRequest {
    /// The vehicle being loaded.
    #[cfg_attr(feature = "serde", serde(rename = "truck"))]
    pub vehicle: Vehicle,
    /// Orders available for selection.
    #[cfg_attr(feature = "serde", serde(default))]
    pub orders: Vec<Order>,
}

/// Reasons a request fails [`OptimizeRequest::validate_detailed`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum OptimizeRequestValidationError {
    /// The vehicle cannot carry any weight.
    #[error("vehicle max_weight_lbs must be positive")]
    ZeroMaxWeight,
    /// The vehicle cannot carry any volume.
    #[error("vehicle max_volume_cuft must be positive")]
    ZeroMaxVolume,
    /// An order weighs nothing.
    #[error("order {order_id} weight_lbs must be positive")]
    ZeroWeight {
        /// Offending order.
        order_id: String,
    },
    /// An order occupies no space.
    #[error("order {order_id} volume_cuft must be positive")]
    ZeroVolume {
        /// Offending order.
        order_id: String,
    },
    /// An order has no origin.
    #[error("order {order_id} origin must not be empty")]
    EmptyOrigin {
        /// Offending order.
        order_id: String,
    },
    /// An order has no destination.
    #[error("order {order_id} destination must not be empty")]
    EmptyDestination {
        /// Offending order.
        order_id: String,
    },
    /// An order is delivered before it is picked up.
    #[error("order {order_id} delivery_date {delivery} precedes pickup_date {pickup}")]
    DeliveryBeforePickup {
        /// Offending order.
        order_id: String,
        /// Requested pickup date.
        pickup: NaiveDate,
        /// Requested delivery date.
        delivery: NaiveDate,
    },
    /// Two orders share an identifier.
    #[error("order id {order_id} appears more than once")]
    DuplicateOrderId {
        /// The repeated identifier.
        order_id: String,
    },
}

impl OptimizeRequest {
    /// Bundle a vehicle with candidate orders.
    #[must_use]
    pub const fn new(vehicle: Vehicle, orders: Vec<Order>) -> Self {
        Self { vehicle, orders }
    }

    /// Validate the request, collapsing failures to
    /// [`OptimizeError::InvalidRequest`].
    ///
    /// # Errors
    ///
    /// Returns [`OptimizeError::InvalidRequest`] when any precondition in
    /// [`OptimizeRequest::validate_detailed`] fails.
    pub fn validate(&self) -> Result<(), OptimizeError> {
        self.validate_detailed()
            .map_err(|_| OptimizeError::InvalidRequest)
    }

    /// Validate the request and report the first violated precondition.
    ///
    /// The vehicle is checked first, then each order in input order, field by
    /// field, and finally identifier uniqueness.
    ///
    /// # Errors
    ///
    /// Returns the first [`OptimizeRequestValidationError`] encountered.
    ///
    /// # Examples
    /// ```rust
    /// use loadsmith_core::{Order, OptimizeRequest, OptimizeRequestValidationError, Vehicle};
    ///
    /// let order = Order::new("A", 100, 0, 10).with_lane("Chicago, IL", "Dallas, TX");
    /// let request = OptimizeRequest::new(Vehicle::new("truck-001", 10, 10), vec![order]);
    /// assert_eq!(
    ///     request.validate_detailed(),
    ///     Err(OptimizeRequestValidationError::ZeroWeight { order_id: "A".into() })
    /// );
    /// ```
    pub fn validate_detailed(&self) -> Result<(), OptimizeRequestValidationError> {
        validate_vehicle(&self.vehicle)?;
        for order in &self.orders {
            validate_order(order)?;
        }
        let mut seen = HashSet::with_capacity(self.orders.len());
        for order in &self.orders {
            if !seen.insert(order.id.as_str()) {
                return Err(OptimizeRequestValidationError::DuplicateOrderId {
                    order_id: order.id.clone(),
                });
            }
        }
        Ok(())
    }
}

fn validate_vehicle(vehicle: &Vehicle) -> Result<(), OptimizeRequestValidationError> {
    if vehicle.max_weight_lbs == 0 {
        return Err(OptimizeRequestValidationError::ZeroMaxWeight);
    }
    if vehicle.max_volume_cuft == 0 {
        return Err(OptimizeRequestValidationError::ZeroMaxVolume);
    }
    Ok(())
}

fn validate_order(order: &Order) -> Result<(), OptimizeRequestValidationError> {
    let order_id = || order.id.clone();
    if order.weight_lbs == 0 {
        return Err(OptimizeRequestValidationError::ZeroWeight {
            order_id: order_id(),
        });
    }
    if order.volume_cuft == 0 {
        return Err(OptimizeRequestValidationError::ZeroVolume {
            order_id: order_id(),
        });
    }
    if order.origin.is_empty() {
        return Err(OptimizeRequestValidationError::EmptyOrigin {
            order_id: order_id(),
        });
    }
    if order.destination.is_empty() {
        return Err(OptimizeRequestValidationError::EmptyDestination {
            order_id: order_id(),
        });
    }
    if order.delivery_date < order.pickup_date {
        return Err(OptimizeRequestValidationError::DeliveryBeforePickup {
            order_id: order_id(),
            pickup: order.pickup_date,
            delivery: order.delivery_date,
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{day, order, vehicle};
    use rstest::{fixture, rstest};

    #[fixture]
    fn truck() -> Vehicle {
        vehicle(45_000, 2_500)
    }

    #[rstest]
    fn accepts_well_formed_request(truck: Vehicle) {
        let request = OptimizeRequest::new(
            truck,
            vec![order("A", 125_000, 12_000, 600), order("B", 98_000, 8_500, 450)],
        );
        assert_eq!(request.validate_detailed(), Ok(()));
    }

    #[rstest]
    fn accepts_empty_order_list(truck: Vehicle) {
        let request = OptimizeRequest::new(truck, Vec::new());
        assert!(request.validate().is_ok());
    }

    #[rstest]
    #[case(Vehicle::new("t", 0, 1), OptimizeRequestValidationError::ZeroMaxWeight)]
    #[case(Vehicle::new("t", 1, 0), OptimizeRequestValidationError::ZeroMaxVolume)]
    fn rejects_degenerate_vehicle(
        #[case] truck: Vehicle,
        #[case] expected: OptimizeRequestValidationError,
    ) {
        let request = OptimizeRequest::new(truck, Vec::new());
        assert_eq!(request.validate_detailed(), Err(expected));
        assert_eq!(request.validate(), Err(OptimizeError::InvalidRequest));
    }

    #[rstest]
    fn accepts_empty_identifiers() {
        let request = OptimizeRequest::new(Vehicle::new("", 100, 100), vec![order("", 1, 1, 1)]);
        assert_eq!(request.validate_detailed(), Ok(()));
    }

    #[rstest]
    fn empty_identifiers_still_count_as_duplicates(truck: Vehicle) {
        let request = OptimizeRequest::new(truck, vec![order("", 1, 1, 1), order("", 2, 2, 2)]);
        assert_eq!(
            request.validate_detailed(),
            Err(OptimizeRequestValidationError::DuplicateOrderId {
                order_id: String::new()
            })
        );
    }

    #[rstest]
    fn rejects_zero_volume(truck: Vehicle) {
        let request = OptimizeRequest::new(truck, vec![order("A", 1, 1, 0)]);
        assert_eq!(
            request.validate_detailed(),
            Err(OptimizeRequestValidationError::ZeroVolume {
                order_id: "A".into()
            })
        );
    }

    #[rstest]
    fn accepts_zero_payout(truck: Vehicle) {
        let request = OptimizeRequest::new(truck, vec![order("A", 0, 1, 1)]);
        assert!(request.validate().is_ok());
    }

    #[rstest]
    fn rejects_missing_lane_endpoints(truck: Vehicle) {
        let no_origin = order("A", 1, 1, 1).with_lane("", "Dallas, TX");
        let request = OptimizeRequest::new(truck.clone(), vec![no_origin]);
        assert!(matches!(
            request.validate_detailed(),
            Err(OptimizeRequestValidationError::EmptyOrigin { .. })
        ));

        let no_destination = order("B", 1, 1, 1).with_lane("Chicago, IL", "");
        let request = OptimizeRequest::new(truck, vec![no_destination]);
        assert!(matches!(
            request.validate_detailed(),
            Err(OptimizeRequestValidationError::EmptyDestination { .. })
        ));
    }

    #[rstest]
    fn rejects_delivery_before_pickup(truck: Vehicle) {
        let late = order("A", 1, 1, 1).with_window(day(3), day(1));
        let request = OptimizeRequest::new(truck, vec![late]);
        assert_eq!(
            request.validate_detailed(),
            Err(OptimizeRequestValidationError::DeliveryBeforePickup {
                order_id: "A".into(),
                pickup: day(3),
                delivery: day(1),
            })
        );
    }

    #[rstest]
    fn accepts_same_day_delivery(truck: Vehicle) {
        let same_day = order("A", 1, 1, 1).with_window(day(2), day(2));
        let request = OptimizeRequest::new(truck, vec![same_day]);
        assert!(request.validate().is_ok());
    }

    #[rstest]
    fn rejects_duplicate_ids(truck: Vehicle) {
        let request = OptimizeRequest::new(
            truck,
            vec![order("A", 1, 1, 1), order("B", 1, 1, 1), order("A", 2, 2, 2)],
        );
        assert_eq!(
            request.validate_detailed(),
            Err(OptimizeRequestValidationError::DuplicateOrderId {
                order_id: "A".into()
            })
        );
    }

    #[rstest]
    fn field_errors_take_precedence_over_duplicates(truck: Vehicle) {
        let request = OptimizeRequest::new(
            truck,
            vec![order("A", 1, 1, 1), order("A", 1, 0, 1)],
        );
        assert!(matches!(
            request.validate_detailed(),
            Err(OptimizeRequestValidationError::ZeroWeight { .. })
        ));
    }
}
