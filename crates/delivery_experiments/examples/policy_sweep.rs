//! Example: sweep the delivery policy knobs and report the best combination.
//!
//! 1. Define a grid over late penalty, fuel cost, and fleet size
//! 2. Run the grid in parallel
//! 3. Rank results by weighted score
//! 4. Export the paired parameters/results to CSV and JSON

use delivery_core::test_helpers::seed_catalog;
use delivery_experiments::{
    export_to_csv, export_to_json, find_best_sweep, run_parallel_sweeps, OnTimeRule,
    ScoreWeights, SweepSpace,
};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("Generating sweep sets...");
    let space = SweepSpace::grid()
        .late_penalties(vec![25.0, 50.0, 100.0])
        .base_fuel_costs(vec![4.0, 5.0, 6.0])
        .available_drivers(vec![3, 5, 10])
        .runs_per_combination(3);
    let sets = space.generate();
    println!("Generated {} runs", sets.len());

    let catalog = seed_catalog();
    let rule = OnTimeRule::CoinFlip { on_time_probability: 0.7 };

    println!("Running sweeps in parallel...");
    let reports = run_parallel_sweeps(&catalog, &sets, rule, None)?;

    let weights = ScoreWeights::default();
    let best = find_best_sweep(&sets, &reports, &weights).expect("non-empty sweep");
    println!("\n=== Best Configuration ===");
    println!("Experiment: {} (run {})", best.experiment_id, best.run_id);
    println!("Late penalty: {:.2}", best.policy.late_penalty);
    println!("Fuel cost per km: {:.2}", best.policy.base_fuel_cost_per_km);
    println!("Available drivers: {}", best.params.available_drivers);

    export_to_csv(&sets, &reports, "sweep_results.csv")?;
    export_to_json(&sets, &reports, "sweep_results.json")?;
    println!("\nExported sweep_results.csv and sweep_results.json");

    Ok(())
}
