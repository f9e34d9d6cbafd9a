//! Behavioural tests for `ExhaustiveOptimizer` using rstest-bdd.

use std::cell::RefCell;

use loadsmith_core::test_support::{day, order, vehicle};
use loadsmith_core::{OptimizeError, OptimizeRequest, OptimizeResponse, Optimizer, Order, Vehicle};
use loadsmith_solver_exhaustive::ExhaustiveOptimizer;
use rstest::fixture;
use rstest_bdd_macros::{given, scenario, then, when};

#[derive(Debug)]
struct OptimizerWorld {
    vehicle: RefCell<Vehicle>,
    orders: RefCell<Vec<Order>>,
    outcome: RefCell<Option<Result<OptimizeResponse, OptimizeError>>>,
}

impl OptimizerWorld {
    fn new() -> Self {
        Self {
            vehicle: RefCell::new(vehicle(1, 1)),
            orders: RefCell::new(Vec::new()),
            outcome: RefCell::new(None),
        }
    }

    #[expect(
        clippy::expect_used,
        reason = "behaviour tests use expect for readable failures"
    )]
    fn expect_response(&self) -> OptimizeResponse {
        self.outcome
            .borrow()
            .as_ref()
            .cloned()
            .expect("outcome should be recorded before assertions")
            .expect("optimization should succeed")
    }

    fn selected_ids(&self) -> Vec<String> {
        self.expect_response().plan.selected_order_ids
    }
}

fn order_between(
    id: &str,
    payout: u64,
    weight: u64,
    volume: u64,
    pickup: u64,
    delivery: u64,
) -> Order {
    order(id, payout, weight, volume).with_window(day(pickup), day(delivery))
}

#[fixture]
fn world() -> OptimizerWorld {
    OptimizerWorld::new()
}

#[given("a truck with 45000 lbs and 2500 cuft of capacity")]
fn given_standard_truck(world: &OptimizerWorld) {
    world.vehicle.replace(vehicle(45_000, 2_500));
}

#[given("a truck with 45000 lbs and ample volume")]
fn given_weight_bound_truck(world: &OptimizerWorld) {
    world.vehicle.replace(vehicle(45_000, u64::MAX));
}

#[given("two light orders on the same lane with overlapping windows")]
fn given_light_orders(world: &OptimizerWorld) {
    world.orders.replace(vec![
        order_between("ORD-001", 125_000, 12_000, 600, 0, 3),
        order_between("ORD-002", 98_000, 8_500, 450, 0, 2),
    ]);
}

#[given("two 30000 lb orders on the same lane paying 100000 and 150000 cents")]
fn given_heavy_orders(world: &OptimizerWorld) {
    world.orders.replace(vec![
        order("ORD-100K", 100_000, 30_000, 100),
        order("ORD-150K", 150_000, 30_000, 100),
    ]);
}

#[given("an order heavier than the truck alongside a light order")]
fn given_oversized_order(world: &OptimizerWorld) {
    world.orders.replace(vec![
        order("ORD-HEAVY", 9_000_000, 60_000, 100),
        order("ORD-LIGHT", 50_000, 5_000, 100),
    ]);
}

#[given("two orders whose windows do not overlap")]
fn given_disjoint_windows(world: &OptimizerWorld) {
    world.orders.replace(vec![
        order_between("ORD-EARLY", 60_000, 5_000, 100, 0, 1),
        order_between("ORD-LATE", 50_000, 5_000, 100, 3, 5),
    ]);
}

#[given("a hazmat order and an ordinary order on the same lane")]
fn given_mixed_hazmat(world: &OptimizerWorld) {
    world.orders.replace(vec![
        order("ORD-PLAIN", 60_000, 5_000, 100),
        order("ORD-HAZMAT", 70_000, 5_000, 100).with_hazmat(true),
    ]);
}

#[when("the optimizer runs")]
fn when_optimizer_runs(world: &OptimizerWorld) {
    let request = OptimizeRequest::new(
        world.vehicle.borrow().clone(),
        world.orders.borrow().clone(),
    );
    world
        .outcome
        .replace(Some(ExhaustiveOptimizer::new().optimize(&request)));
}

#[then("both orders are selected")]
fn then_both_selected(world: &OptimizerWorld) {
    assert_eq!(world.selected_ids(), vec!["ORD-001", "ORD-002"]);
}

#[then("the total payout is 223000 cents")]
fn then_total_payout(world: &OptimizerWorld) {
    assert_eq!(world.expect_response().plan.total_payout_cents, 223_000);
}

#[then("only the order paying 150000 cents is selected")]
fn then_best_heavy(world: &OptimizerWorld) {
    assert_eq!(world.selected_ids(), vec!["ORD-150K"]);
}

#[then("only the light order is selected")]
fn then_light_only(world: &OptimizerWorld) {
    assert_eq!(world.selected_ids(), vec!["ORD-LIGHT"]);
}

#[then("a single order is selected")]
fn then_single(world: &OptimizerWorld) {
    assert_eq!(world.selected_ids().len(), 1);
}

#[scenario(path = "tests/features/exhaustive_optimizer.feature", index = 0)]
fn loads_compatible_orders(world: OptimizerWorld) {
    let _ = world;
}

#[scenario(path = "tests/features/exhaustive_optimizer.feature", index = 1)]
fn respects_weight_capacity(world: OptimizerWorld) {
    let _ = world;
}

#[scenario(path = "tests/features/exhaustive_optimizer.feature", index = 2)]
fn ignores_oversized_orders(world: OptimizerWorld) {
    let _ = world;
}

#[scenario(path = "tests/features/exhaustive_optimizer.feature", index = 3)]
fn separates_disjoint_windows(world: OptimizerWorld) {
    let _ = world;
}

#[scenario(path = "tests/features/exhaustive_optimizer.feature", index = 4)]
fn separates_hazmat_freight(world: OptimizerWorld) {
    let _ = world;
}
