//! Facade crate for the Loadsmith load planner.
//!
//! This crate re-exports the core domain types and exposes the optimizer
//! implementation behind a feature flag.
//!
//! ```rust
//! # #[cfg(feature = "solver-exhaustive")]
//! # {
//! use loadsmith::{ExhaustiveOptimizer, OptimizeRequest, Optimizer, Order, Vehicle};
//!
//! let request = OptimizeRequest::new(
//!     Vehicle::new("truck-001", 45_000, 2_500),
//!     vec![
//!         Order::new("ORD-001", 125_000, 12_000, 600).with_lane("Chicago, IL", "Dallas, TX"),
//!         Order::new("ORD-002", 98_000, 8_500, 450).with_lane("Chicago, IL", "Dallas, TX"),
//!     ],
//! );
//! request.validate().expect("valid request");
//! let response = ExhaustiveOptimizer::new().optimize(&request).expect("small request");
//! assert_eq!(response.plan.total_payout_cents, 223_000);
//! # }
//! ```

#![forbid(unsafe_code)]

pub use loadsmith_core::{
    Diagnostics, LoadPlan, OptimizeError, OptimizeRequest, OptimizeRequestValidationError,
    OptimizeResponse, Optimizer, Order, Vehicle, utilization_percent,
};

#[cfg(feature = "solver-exhaustive")]
pub use loadsmith_solver_exhaustive::{ExhaustiveOptimizer, MAX_GROUP_SIZE, optimize_load};
