use chrono::NaiveDate;

/// A shipment offered to the carrier.
///
/// Monetary values are in cents, weights in pounds and volumes in cubic
/// feet. The pickup and delivery dates bound the window during which the
/// order is on the vehicle.
///
/// # Examples
/// ```
/// use chrono::NaiveDate;
/// use loadsmith_core::Order;
///
/// let pickup = NaiveDate::from_ymd_opt(2025, 1, 6).expect("valid date");
/// let delivery = NaiveDate::from_ymd_opt(2025, 1, 9).expect("valid date");
/// let order = Order::new("ORD-001", 125_000, 12_000, 600)
///     .with_lane("Chicago, IL", "Dallas, TX")
///     .with_window(pickup, delivery);
///
/// assert_eq!(order.id, "ORD-001");
/// assert!(!order.is_hazmat);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Order {
    /// Identifier, unique within a request.
    pub id: String,
    /// Payout to the carrier in cents.
    pub payout_cents: u64,
    /// Weight in pounds.
    pub weight_lbs: u64,
    /// Volume in cubic feet.
    pub volume_cuft: u64,
    /// Origin city, compared verbatim.
    pub origin: String,
    /// Destination city, compared verbatim.
    pub destination: String,
    /// Earliest day the order can be loaded.
    pub pickup_date: NaiveDate,
    /// Day the order must be delivered by.
    pub delivery_date: NaiveDate,
    /// Whether the order carries hazardous materials.
    #[cfg_attr(feature = "serde", serde(default))]
    pub is_hazmat: bool,
}

impl Order {
    /// Construct an order with an empty lane and a single-day window.
    ///
    /// Use [`Order::with_lane`], [`Order::with_window`] and
    /// [`Order::with_hazmat`] to fill in the remaining attributes.
    #[must_use]
    pub fn new(id: impl Into<String>, payout_cents: u64, weight_lbs: u64, volume_cuft: u64) -> Self {
        Self {
            id: id.into(),
            payout_cents,
            weight_lbs,
            volume_cuft,
            origin: String::new(),
            destination: String::new(),
            pickup_date: NaiveDate::default(),
            delivery_date: NaiveDate::default(),
            is_hazmat: false,
        }
    }

    /// Set the origin and destination.
    #[must_use]
    pub fn with_lane(mut self, origin: impl Into<String>, destination: impl Into<String>) -> Self {
        self.origin = origin.into();
        self.destination = destination.into();
        self
    }

    /// Set the pickup and delivery dates.
    #[must_use]
    pub const fn with_window(mut self, pickup_date: NaiveDate, delivery_date: NaiveDate) -> Self {
        self.pickup_date = pickup_date;
        self.delivery_date = delivery_date;
        self
    }

    /// Mark the order as hazardous (or not).
    #[must_use]
    pub const fn with_hazmat(mut self, is_hazmat: bool) -> Self {
        self.is_hazmat = is_hazmat;
        self
    }

    /// Whether `other` may share a vehicle with this order.
    ///
    /// Lanes match on exact string equality; no case folding or trimming is
    /// applied.
    #[must_use]
    pub fn is_compatible_with(&self, other: &Self) -> bool {
        self.origin == other.origin
            && self.destination == other.destination
            && self.is_hazmat == other.is_hazmat
    }
}
