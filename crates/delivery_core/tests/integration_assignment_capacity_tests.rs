mod support;

use delivery_core::assignment::RoundRobinAssigner;
use delivery_core::catalog::{Catalog, Order, Route, TrafficLevel};
use delivery_core::engine::{run_simulation, RunParams};
use delivery_core::ontime::DeadlinePolicy;
use delivery_core::policy::PolicyConfig;

use support::{fatigued_driver, rested_driver, time};

#[test]
fn within_budget_minutes_never_exceed_the_daily_cap() {
    let a = rested_driver("A");
    let b = fatigued_driver("B");
    let pool = vec![&a, &b];
    let policy = PolicyConfig::default();
    let mut assigner = RoundRobinAssigner::new(&pool, &policy, 6.0);

    let mut in_budget = vec![0u32; pool.len()];
    for _ in 0..40 {
        let assignment = assigner.assign(55.0);
        if !assignment.overtime {
            in_budget[assignment.driver_index] += assignment.adjusted_minutes;
        }
    }
    for &minutes in &in_budget {
        assert!(minutes <= assigner.budget_minutes());
    }
}

#[test]
fn overflow_orders_are_late_but_still_reported() {
    // One driver, 1-hour budget, three 45-minute orders with roomy windows:
    // the first fits, the rest overflow and are late by construction.
    let catalog = Catalog::new(
        vec![rested_driver("Solo")],
        vec![Route::new(1, 5.0, TrafficLevel::Low, 45.0)],
        vec![
            Order::new(1, 500.0, 1, time("20:00")),
            Order::new(2, 500.0, 1, time("20:00")),
            Order::new(3, 500.0, 1, time("20:00")),
        ],
    )
    .expect("catalog");

    let params = RunParams::default()
        .with_available_drivers(1)
        .with_start_time(time("09:00"))
        .with_max_hours_per_day(1.0);
    let report = run_simulation(
        &catalog,
        &params,
        &PolicyConfig::default(),
        &mut DeadlinePolicy,
    )
    .expect("report");

    assert_eq!(report.delivery_stats.len(), 3, "overflow orders still produce outcomes");
    assert_eq!(report.on_time_deliveries, 1);
    assert_eq!(report.late_deliveries, 2);
}

#[test]
fn orders_spread_across_the_pool_round_robin() {
    let catalog = Catalog::new(
        vec![rested_driver("A"), rested_driver("B")],
        vec![Route::new(1, 5.0, TrafficLevel::Low, 30.0)],
        vec![
            Order::new(1, 500.0, 1, time("20:00")),
            Order::new(2, 500.0, 1, time("20:00")),
            Order::new(3, 500.0, 1, time("20:00")),
            Order::new(4, 500.0, 1, time("20:00")),
        ],
    )
    .expect("catalog");

    let report = run_simulation(
        &catalog,
        &RunParams::default().with_available_drivers(2),
        &PolicyConfig::default(),
        &mut DeadlinePolicy,
    )
    .expect("report");

    let drivers: Vec<&str> = report
        .delivery_stats
        .iter()
        .map(|o| o.driver.as_str())
        .collect();
    assert_eq!(drivers, vec!["A", "B", "A", "B"]);
}

#[test]
fn fatigue_of_the_bound_driver_decides_the_outcome() {
    // 79-minute window, 75-minute route: only a fatigued driver misses it.
    let catalog = Catalog::new(
        vec![fatigued_driver("Tired"), rested_driver("Fresh")],
        vec![Route::new(6, 15.0, TrafficLevel::Low, 75.0)],
        vec![
            Order::new(1, 1835.0, 6, time("10:19")),
            Order::new(2, 1835.0, 6, time("10:19")),
        ],
    )
    .expect("catalog");

    let params = RunParams::default()
        .with_available_drivers(2)
        .with_start_time(time("09:00"));
    let report = run_simulation(
        &catalog,
        &params,
        &PolicyConfig::default(),
        &mut DeadlinePolicy,
    )
    .expect("report");

    let tired = report
        .delivery_stats
        .iter()
        .find(|o| o.driver == "Tired")
        .expect("tired driver took an order");
    let fresh = report
        .delivery_stats
        .iter()
        .find(|o| o.driver == "Fresh")
        .expect("fresh driver took an order");

    assert!(!tired.is_on_time);
    assert!(fresh.is_on_time);
}
