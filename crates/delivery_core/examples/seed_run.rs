//! Example: run one simulation over the seed catalogue and print the report.

use delivery_core::engine::{run_simulation, RunParams};
use delivery_core::history::SimulationHistory;
use delivery_core::ontime::DeadlinePolicy;
use delivery_core::policy::PolicyConfig;
use delivery_core::test_helpers::seed_catalog;
use std::time::{SystemTime, UNIX_EPOCH};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let catalog = seed_catalog();
    let params = RunParams::default()
        .with_available_drivers(5)
        .with_start_time("09:00".parse()?)
        .with_max_hours_per_day(8.0);
    let policy = PolicyConfig::default();

    let report = run_simulation(&catalog, &params, &policy, &mut DeadlinePolicy)?;

    println!("Evaluated deliveries: {}", report.evaluated_deliveries());
    println!("On time: {}", report.on_time_deliveries);
    println!("Late: {}", report.late_deliveries);
    println!("Efficiency: {:.1}%", report.efficiency_score);
    println!("Total profit: {:.2}", report.total_profit);
    println!(
        "Fuel: base {:.2} + surcharge {:.2} = {:.2}",
        report.fuel_cost_breakdown.base_cost,
        report.fuel_cost_breakdown.traffic_surcharge,
        report.fuel_cost_breakdown.total_cost
    );

    for outcome in &report.delivery_stats {
        println!(
            "  order {:>2} -> {:<8} {} profit {:>8.2}",
            outcome.order_id,
            outcome.driver,
            if outcome.is_on_time { "on-time" } else { "late   " },
            outcome.profit
        );
    }

    // Persist the run the way the surrounding service would.
    let timestamp_ms = SystemTime::now().duration_since(UNIX_EPOCH)?.as_millis() as u64;
    let mut history = SimulationHistory::new();
    let id = history.append(params, report, "manager", timestamp_ms);
    history.save_json("simulation_history.json")?;
    println!("Saved run {id} to simulation_history.json");

    Ok(())
}
