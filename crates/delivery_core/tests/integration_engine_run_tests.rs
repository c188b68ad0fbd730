mod support;

use delivery_core::engine::{run_simulation, RunParams, SimulationError};
use delivery_core::ontime::{CoinFlipPolicy, DeadlinePolicy};
use delivery_core::policy::PolicyConfig;
use delivery_core::test_helpers::{seed_catalog, single_order_catalog};

use support::{mixed_catalog, time, FixedOutcome};

#[test]
fn report_aggregates_are_internally_consistent() {
    let catalog = seed_catalog();
    let params = RunParams::default().with_available_drivers(4);
    let report = run_simulation(
        &catalog,
        &params,
        &PolicyConfig::default(),
        &mut DeadlinePolicy,
    )
    .expect("report");

    // Every seed order resolves to a route, so all 15 are evaluated.
    assert_eq!(report.delivery_stats.len(), 15);
    assert_eq!(report.evaluated_deliveries(), 15);

    let profit_sum: f64 = report.delivery_stats.iter().map(|o| o.profit).sum();
    assert!((report.total_profit - profit_sum).abs() < 1e-9);

    let breakdown = report.fuel_cost_breakdown;
    assert!((breakdown.total_cost - (breakdown.base_cost + breakdown.traffic_surcharge)).abs() < 1e-9);

    assert!((0.0..=100.0).contains(&report.efficiency_score));
    let on_time = report.delivery_stats.iter().filter(|o| o.is_on_time).count();
    assert_eq!(report.on_time_deliveries, on_time);
    assert_eq!(report.late_deliveries, 15 - on_time);
}

#[test]
fn penalty_iff_late_and_bonus_iff_high_value_on_time() {
    let policy = PolicyConfig::default();
    let catalog = seed_catalog();
    let params = RunParams::default().with_available_drivers(10);
    let report = run_simulation(
        &catalog,
        &params,
        &policy,
        &mut CoinFlipPolicy::new(Some(42)),
    )
    .expect("report");

    let orders = catalog.pending_orders();
    for outcome in &report.delivery_stats {
        let order = orders
            .iter()
            .find(|o| o.order_id == outcome.order_id)
            .expect("outcome maps to an order");

        if outcome.is_on_time {
            assert_eq!(outcome.penalty, 0.0);
            if order.value_rs > policy.high_value_threshold {
                assert_eq!(outcome.bonus, order.value_rs * policy.high_value_bonus);
            } else {
                assert_eq!(outcome.bonus, 0.0);
            }
        } else {
            assert_eq!(outcome.penalty, policy.late_penalty);
            assert_eq!(outcome.bonus, 0.0);
        }
    }
}

#[test]
fn worked_example_on_time_and_late() {
    let catalog = single_order_catalog();
    let params = RunParams::default()
        .with_available_drivers(1)
        .with_start_time(time("09:00"));
    let policy = PolicyConfig::default();

    // Fuel 10 * 5 = 50, no surcharge.
    let on_time = run_simulation(&catalog, &params, &policy, &mut FixedOutcome(true))
        .expect("report");
    assert_eq!(on_time.delivery_stats[0].profit, 1500.0 + 150.0 - 50.0);
    assert_eq!(on_time.efficiency_score, 100.0);

    let late = run_simulation(&catalog, &params, &policy, &mut FixedOutcome(false))
        .expect("report");
    assert_eq!(late.delivery_stats[0].profit, 1500.0 - 50.0 - 50.0);
    assert_eq!(late.delivery_stats[0].bonus, 0.0);
    assert_eq!(late.efficiency_score, 0.0);
}

#[test]
fn dangling_route_order_contributes_to_nothing() {
    let catalog = mixed_catalog();
    let report = run_simulation(
        &catalog,
        &RunParams::default(),
        &PolicyConfig::default(),
        &mut FixedOutcome(true),
    )
    .expect("report");

    assert_eq!(report.delivery_stats.len(), 3);
    assert!(report.delivery_stats.iter().all(|o| o.order_id != 4));

    // Fuel: route 1 = 50, route 2 = 100 + 40, route 3 = 75.
    assert_eq!(report.fuel_cost_breakdown.base_cost, 225.0);
    assert_eq!(report.fuel_cost_breakdown.traffic_surcharge, 40.0);
    assert_eq!(report.fuel_cost_breakdown.total_cost, 265.0);
    assert_eq!(report.evaluated_deliveries(), 3);
}

#[test]
fn same_seed_reproduces_the_same_report() {
    let catalog = seed_catalog();
    let params = RunParams::default().with_available_drivers(5);
    let policy = PolicyConfig::default();

    let a = run_simulation(&catalog, &params, &policy, &mut CoinFlipPolicy::new(Some(7)))
        .expect("report");
    let b = run_simulation(&catalog, &params, &policy, &mut CoinFlipPolicy::new(Some(7)))
        .expect("report");
    assert_eq!(a, b);

    let c = run_simulation(&catalog, &params, &policy, &mut CoinFlipPolicy::new(Some(8)))
        .expect("report");
    assert_eq!(c.delivery_stats.len(), a.delivery_stats.len());
}

#[test]
fn deadline_runs_are_deterministic_without_a_seed() {
    let catalog = seed_catalog();
    let params = RunParams::default().with_available_drivers(3);
    let policy = PolicyConfig::default();

    let a = run_simulation(&catalog, &params, &policy, &mut DeadlinePolicy).expect("report");
    let b = run_simulation(&catalog, &params, &policy, &mut DeadlinePolicy).expect("report");
    assert_eq!(a, b);
}

#[test]
fn requesting_more_drivers_than_exist_still_runs() {
    let catalog = single_order_catalog();
    let params = RunParams::default().with_available_drivers(50);
    let report = run_simulation(
        &catalog,
        &params,
        &PolicyConfig::default(),
        &mut DeadlinePolicy,
    )
    .expect("report");
    assert_eq!(report.delivery_stats.len(), 1);
}

#[test]
fn no_drivers_produces_no_result() {
    let catalog = delivery_core::catalog::Catalog::new(
        vec![],
        vec![],
        vec![],
    )
    .expect("catalog");

    let err = run_simulation(
        &catalog,
        &RunParams::default(),
        &PolicyConfig::default(),
        &mut DeadlinePolicy,
    )
    .expect_err("no drivers");
    assert_eq!(err, SimulationError::NoDriversAvailable);
}

#[test]
fn policy_overrides_change_the_economics() {
    let catalog = single_order_catalog();
    let params = RunParams::default().with_available_drivers(1);

    let expensive_fuel = PolicyConfig::default().with_base_fuel_cost_per_km(10.0);
    let report = run_simulation(&catalog, &params, &expensive_fuel, &mut FixedOutcome(true))
        .expect("report");
    assert_eq!(report.fuel_cost_breakdown.total_cost, 100.0);
    assert_eq!(report.delivery_stats[0].profit, 1500.0 + 150.0 - 100.0);

    let harsh_penalty = PolicyConfig::default().with_late_penalty(500.0);
    let report = run_simulation(&catalog, &params, &harsh_penalty, &mut FixedOutcome(false))
        .expect("report");
    assert_eq!(report.delivery_stats[0].penalty, 500.0);
}
