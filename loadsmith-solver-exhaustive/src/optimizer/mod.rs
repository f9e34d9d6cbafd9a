//! `ExhaustiveOptimizer` implementation.
//!
//! Groups are searched independently and the highest-paying group selection
//! becomes the plan. Orders from different groups are never combined.

use log::{debug, info};

use loadsmith_core::{
    Diagnostics, LoadPlan, OptimizeError, OptimizeRequest, OptimizeResponse, Optimizer,
};

use crate::feasibility::retain_feasible;
use crate::grouping::group_orders;
use crate::search::{GroupSelection, search_group};

/// Optimizer that enumerates every subset of every compatibility group.
///
/// The result is exact and deterministic: the same request always yields the
/// same plan and diagnostics. The optimizer holds no state and does not
/// validate requests; callers validate at their boundary.
///
/// # Examples
/// ```rust
/// use loadsmith_core::{Optimizer, OptimizeRequest, Order, Vehicle};
/// use loadsmith_solver_exhaustive::ExhaustiveOptimizer;
///
/// let request = OptimizeRequest::new(
///     Vehicle::new("truck-001", 45_000, 2_500),
///     vec![Order::new("ORD-001", 125_000, 12_000, 600)],
/// );
/// let response = ExhaustiveOptimizer::new()
///     .optimize(&request)
///     .expect("small request");
/// assert_eq!(response.plan.total_payout_cents, 125_000);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ExhaustiveOptimizer;

impl ExhaustiveOptimizer {
    /// Construct the optimizer.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl Optimizer for ExhaustiveOptimizer {
    fn optimize(&self, request: &OptimizeRequest) -> Result<OptimizeResponse, OptimizeError> {
        let vehicle = &request.vehicle;
        if request.orders.is_empty() {
            debug!("no orders offered for vehicle {}", vehicle.id);
            return Ok(OptimizeResponse {
                plan: LoadPlan::empty(vehicle),
                diagnostics: Diagnostics::default(),
            });
        }

        let groups = group_orders(&request.orders);
        let mut diagnostics = Diagnostics {
            groups_considered: groups.len(),
            ..Diagnostics::default()
        };
        let mut best: Option<GroupSelection<'_>> = None;

        for group in groups {
            let key = group.key();
            let Some(feasible) = retain_feasible(group, vehicle) else {
                debug!("group {key}: no order fits vehicle {}", vehicle.id);
                continue;
            };
            diagnostics.orders_considered = diagnostics
                .orders_considered
                .saturating_add(feasible.len());

            let selection = search_group(&feasible, vehicle)?;
            diagnostics.subsets_evaluated = diagnostics
                .subsets_evaluated
                .saturating_add(selection.subsets_evaluated());
            debug!(
                "group {key}: {} feasible orders, {} subsets, best payout {} cents",
                feasible.len(),
                selection.subsets_evaluated(),
                selection.payout_cents()
            );

            let improves = best
                .as_ref()
                .is_none_or(|current| selection.payout_cents() > current.payout_cents());
            if improves && !selection.is_empty() {
                best = Some(selection);
            }
        }

        let plan = best.map_or_else(
            || LoadPlan::empty(vehicle),
            |selection| selection.into_plan(vehicle),
        );
        info!(
            "vehicle {}: selected {} of {} orders for {} cents across {} groups",
            vehicle.id,
            plan.selected_order_ids.len(),
            request.orders.len(),
            plan.total_payout_cents,
            diagnostics.groups_considered
        );
        Ok(OptimizeResponse { plan, diagnostics })
    }
}

/// Optimize `request` with a default [`ExhaustiveOptimizer`].
///
/// # Errors
///
/// Propagates [`OptimizeError`] from [`ExhaustiveOptimizer::optimize`].
pub fn optimize_load(request: &OptimizeRequest) -> Result<OptimizeResponse, OptimizeError> {
    ExhaustiveOptimizer::new().optimize(request)
}
