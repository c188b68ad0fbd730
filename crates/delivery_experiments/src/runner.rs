//! Sweep execution: one run per [SweepSet], in parallel via rayon.

use indicatif::{ProgressBar, ProgressStyle};
use rayon::prelude::*;

use delivery_core::catalog::Catalog;
use delivery_core::engine::{run_simulation, SimulationError};
use delivery_core::ontime::{CoinFlipPolicy, DeadlinePolicy};
use delivery_core::report::SimulationReport;

use crate::parameters::SweepSet;

/// Which on-time decision to apply across a sweep.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum OnTimeRule {
    /// Deterministic deadline comparison; seeds are ignored.
    Deadline,
    /// Legacy-parity stochastic draw, seeded per [SweepSet].
    CoinFlip { on_time_probability: f64 },
}

impl Default for OnTimeRule {
    fn default() -> Self {
        OnTimeRule::Deadline
    }
}

/// Run one sweep set against the catalogue.
pub fn run_single_sweep(
    catalog: &Catalog,
    set: &SweepSet,
    rule: OnTimeRule,
) -> Result<SimulationReport, SimulationError> {
    match rule {
        OnTimeRule::Deadline => {
            run_simulation(catalog, &set.params, &set.policy, &mut DeadlinePolicy)
        }
        OnTimeRule::CoinFlip { on_time_probability } => {
            let mut policy = CoinFlipPolicy::with_probability(Some(set.seed), on_time_probability);
            run_simulation(catalog, &set.params, &set.policy, &mut policy)
        }
    }
}

/// Run every sweep set in parallel. Reports come back in input order; the
/// first engine failure aborts the sweep.
pub fn run_parallel_sweeps(
    catalog: &Catalog,
    sets: &[SweepSet],
    rule: OnTimeRule,
    num_threads: Option<usize>,
) -> Result<Vec<SimulationReport>, SimulationError> {
    run_parallel_sweeps_with_progress(catalog, sets, rule, num_threads, true)
}

/// [run_parallel_sweeps] with an optional progress bar.
pub fn run_parallel_sweeps_with_progress(
    catalog: &Catalog,
    sets: &[SweepSet],
    rule: OnTimeRule,
    num_threads: Option<usize>,
    show_progress: bool,
) -> Result<Vec<SimulationReport>, SimulationError> {
    let pb = if show_progress && !sets.is_empty() {
        let bar = ProgressBar::new(sets.len() as u64);
        bar.set_style(
            ProgressStyle::default_bar()
                .template(
                    "{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} ({eta})",
                )
                .expect("progress template is valid")
                .progress_chars("#>-"),
        );
        Some(bar)
    } else {
        None
    };

    let pool = match num_threads {
        Some(threads) => rayon::ThreadPoolBuilder::new().num_threads(threads).build(),
        None => rayon::ThreadPoolBuilder::new().build(),
    }
    .expect("thread pool construction");

    let pb_ref = pb.as_ref();
    let results = pool.install(|| {
        sets.par_iter()
            .map(|set| {
                let result = run_single_sweep(catalog, set, rule);
                if let Some(bar) = pb_ref {
                    bar.inc(1);
                }
                result
            })
            .collect::<Result<Vec<_>, _>>()
    });

    if let Some(bar) = pb {
        bar.finish_with_message("Completed");
    }

    results
}
