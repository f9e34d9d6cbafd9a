//! Core domain types for the Loadsmith load planner.
//!
//! The crate defines the entities exchanged with an [`Optimizer`]: the
//! [`Vehicle`] being loaded, the [`Order`]s on offer, and the resulting
//! [`LoadPlan`]. Request validation lives here too so that every boundary
//! (CLI, service wrappers, tests) applies the same preconditions before the
//! optimizer runs.

#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]

mod optimizer;
mod order;
mod plan;
mod request;
mod vehicle;

#[cfg(any(test, feature = "test-support"))]
#[cfg_attr(docsrs, doc(cfg(feature = "test-support")))]
pub mod test_support;

pub use optimizer::{Diagnostics, OptimizeError, OptimizeResponse, Optimizer};
pub use order::Order;
pub use plan::{LoadPlan, utilization_percent};
pub use request::{OptimizeRequest, OptimizeRequestValidationError};
pub use vehicle::Vehicle;
