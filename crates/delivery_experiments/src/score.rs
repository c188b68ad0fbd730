//! Weighted scoring of sweep results.
//!
//! Normalizes profit, efficiency, and lateness across all reports in a sweep
//! and combines them into a single comparable score per run.

use delivery_core::report::SimulationReport;

/// Weights for the per-run score. Lateness carries a negative weight: a
/// higher late fraction lowers the score.
#[derive(Debug, Clone, Copy)]
pub struct ScoreWeights {
    /// Weight for total profit (higher is better).
    pub profit_weight: f64,
    /// Weight for the efficiency score (higher is better).
    pub efficiency_weight: f64,
    /// Penalty weight for the fraction of late deliveries.
    pub late_penalty_weight: f64,
}

impl Default for ScoreWeights {
    fn default() -> Self {
        Self {
            profit_weight: 0.5,
            efficiency_weight: 0.35,
            late_penalty_weight: -0.15,
        }
    }
}

/// Normalize a metric value to [0, 1] via min-max; 0.5 when the range is
/// degenerate.
fn normalize_metric(value: f64, min: f64, max: f64) -> f64 {
    if max == min {
        0.5
    } else {
        ((value - min) / (max - min)).clamp(0.0, 1.0)
    }
}

fn min_max(values: impl Iterator<Item = f64>) -> (f64, f64) {
    values.fold((f64::INFINITY, f64::NEG_INFINITY), |(min, max), v| {
        (min.min(v), max.max(v))
    })
}

fn late_fraction(report: &SimulationReport) -> f64 {
    let evaluated = report.evaluated_deliveries();
    if evaluated == 0 {
        0.0
    } else {
        report.late_deliveries as f64 / evaluated as f64
    }
}

/// Score every report; the result vector parallels the input.
pub fn calculate_scores(reports: &[SimulationReport], weights: &ScoreWeights) -> Vec<f64> {
    if reports.is_empty() {
        return vec![];
    }

    let (profit_min, profit_max) = min_max(reports.iter().map(|r| r.total_profit));
    let (eff_min, eff_max) = min_max(reports.iter().map(|r| r.efficiency_score));
    let (late_min, late_max) = min_max(reports.iter().map(late_fraction));

    reports
        .iter()
        .map(|report| {
            weights.profit_weight * normalize_metric(report.total_profit, profit_min, profit_max)
                + weights.efficiency_weight
                    * normalize_metric(report.efficiency_score, eff_min, eff_max)
                + weights.late_penalty_weight
                    * normalize_metric(late_fraction(report), late_min, late_max)
        })
        .collect()
}

/// Index of the highest-scoring report, or `None` for an empty sweep.
pub fn find_best_result_index(reports: &[SimulationReport], weights: &ScoreWeights) -> Option<usize> {
    let scores = calculate_scores(reports, weights);
    scores
        .iter()
        .enumerate()
        .max_by(|(_, a), (_, b)| a.partial_cmp(b).expect("scores are finite"))
        .map(|(i, _)| i)
}
