//! Parallel parameter sweeps over the delivery simulation engine.
//!
//! This crate runs many simulations with varying policy knobs and run
//! parameters, ranks the outcomes with a weighted score, and exports the
//! paired parameters/results to CSV or JSON.
//!
//! # Quick Start
//!
//! ```no_run
//! use delivery_core::test_helpers::seed_catalog;
//! use delivery_experiments::{
//!     find_best_result_index, run_parallel_sweeps, OnTimeRule, ScoreWeights, SweepSpace,
//! };
//!
//! let catalog = seed_catalog();
//!
//! // Grid over the late penalty and fleet size.
//! let space = SweepSpace::grid()
//!     .late_penalties(vec![25.0, 50.0, 100.0])
//!     .available_drivers(vec![3, 5, 10]);
//! let sets = space.generate();
//!
//! let reports = run_parallel_sweeps(&catalog, &sets, OnTimeRule::Deadline, None)
//!     .expect("sweeps run");
//! let best = find_best_result_index(&reports, &ScoreWeights::default());
//! ```
//!
//! The modules:
//!
//! - [`parameters`]: sweep space definition and grid generation
//! - [`runner`]: single-run and rayon-parallel execution
//! - [`score`]: weighted scoring and best-result lookup
//! - [`export`]: CSV/JSON export of paired sets and reports

pub mod export;
pub mod parameters;
pub mod runner;
pub mod score;

pub use export::{export_to_csv, export_to_json, find_best_sweep};
pub use parameters::{SweepSet, SweepSpace};
pub use runner::{run_parallel_sweeps, run_parallel_sweeps_with_progress, run_single_sweep, OnTimeRule};
pub use score::{calculate_scores, find_best_result_index, ScoreWeights};
