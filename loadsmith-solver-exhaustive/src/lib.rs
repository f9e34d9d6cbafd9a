//! Exact load selection by exhaustive subset search.
//!
//! This crate provides [`ExhaustiveOptimizer`], the default implementation of
//! the [`Optimizer`](loadsmith_core::Optimizer) trait. Orders are partitioned
//! into compatibility groups (same origin, destination and hazmat flag),
//! orders that cannot fit the vehicle on their own are discarded, and every
//! remaining subset of each group is enumerated as a bitmask to find the
//! highest-paying load that respects capacity and shares a common loading
//! window.
//!
//! Enumeration is exponential in group size. Callers are expected to cap the
//! number of orders per request before invoking the optimizer; groups larger
//! than [`MAX_GROUP_SIZE`] are rejected with
//! [`OptimizeError::GroupTooLarge`](loadsmith_core::OptimizeError::GroupTooLarge).

#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]

mod feasibility;
mod grouping;
mod optimizer;
mod search;

#[cfg(any(test, feature = "test-support"))]
pub mod test_support;

pub use feasibility::retain_feasible;
pub use grouping::{CompatibilityGroup, CompatibilityKey, group_orders};
pub use optimizer::{ExhaustiveOptimizer, optimize_load};
pub use search::{GroupSelection, MAX_GROUP_SIZE, search_group};
