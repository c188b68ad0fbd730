//! Sweep result export: CSV and JSON, pairing each [SweepSet] with its
//! report by index.

use std::error::Error;
use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

use serde::Serialize;

use delivery_core::report::SimulationReport;

use crate::parameters::SweepSet;
use crate::score::{calculate_scores, ScoreWeights};

fn ensure_paired(sets: &[SweepSet], reports: &[SimulationReport]) -> Result<(), Box<dyn Error>> {
    if sets.len() != reports.len() {
        return Err(format!(
            "Sweep sets length ({}) doesn't match reports length ({})",
            sets.len(),
            reports.len()
        )
        .into());
    }
    Ok(())
}

/// Export one CSV row per run: parameters first, then result KPIs.
pub fn export_to_csv(
    sets: &[SweepSet],
    reports: &[SimulationReport],
    path: impl AsRef<Path>,
) -> Result<(), Box<dyn Error>> {
    ensure_paired(sets, reports)?;
    let file = File::create(path)?;
    let mut wtr = csv::Writer::from_writer(file);

    wtr.write_record([
        "experiment_id",
        "run_id",
        "seed",
        "late_penalty",
        "base_fuel_cost_per_km",
        "high_traffic_surcharge",
        "high_value_bonus",
        "high_value_threshold",
        "available_drivers",
        "start_time",
        "max_hours_per_day",
        "evaluated_deliveries",
        "on_time_deliveries",
        "late_deliveries",
        "total_profit",
        "efficiency_score",
        "fuel_base_cost",
        "fuel_traffic_surcharge",
        "fuel_total_cost",
    ])?;

    for (set, report) in sets.iter().zip(reports.iter()) {
        wtr.write_record([
            set.experiment_id.clone(),
            set.run_id.to_string(),
            set.seed.to_string(),
            set.policy.late_penalty.to_string(),
            set.policy.base_fuel_cost_per_km.to_string(),
            set.policy.high_traffic_surcharge.to_string(),
            set.policy.high_value_bonus.to_string(),
            set.policy.high_value_threshold.to_string(),
            set.params.available_drivers.to_string(),
            set.params.start_time.to_string(),
            set.params.max_hours_per_day.to_string(),
            report.evaluated_deliveries().to_string(),
            report.on_time_deliveries.to_string(),
            report.late_deliveries.to_string(),
            report.total_profit.to_string(),
            report.efficiency_score.to_string(),
            report.fuel_cost_breakdown.base_cost.to_string(),
            report.fuel_cost_breakdown.traffic_surcharge.to_string(),
            report.fuel_cost_breakdown.total_cost.to_string(),
        ])?;
    }

    wtr.flush()?;
    Ok(())
}

#[derive(Serialize)]
struct SweepRow<'a> {
    #[serde(flatten)]
    set: &'a SweepSet,
    results: &'a SimulationReport,
}

/// Export a JSON array of `{parameters, results}` objects.
pub fn export_to_json(
    sets: &[SweepSet],
    reports: &[SimulationReport],
    path: impl AsRef<Path>,
) -> Result<(), Box<dyn Error>> {
    ensure_paired(sets, reports)?;
    let rows: Vec<SweepRow<'_>> = sets
        .iter()
        .zip(reports.iter())
        .map(|(set, results)| SweepRow { set, results })
        .collect();

    let file = File::create(path)?;
    serde_json::to_writer_pretty(BufWriter::new(file), &rows)?;
    Ok(())
}

/// The sweep set whose report scores highest, or `None` for empty or
/// mismatched inputs.
pub fn find_best_sweep<'a>(
    sets: &'a [SweepSet],
    reports: &[SimulationReport],
    weights: &ScoreWeights,
) -> Option<&'a SweepSet> {
    if sets.len() != reports.len() {
        return None;
    }
    let scores = calculate_scores(reports, weights);
    scores
        .iter()
        .enumerate()
        .max_by(|(_, a), (_, b)| a.partial_cmp(b).expect("scores are finite"))
        .map(|(i, _)| &sets[i])
}
