//! Sweep space definition: which policy knobs and run parameters to vary.
//!
//! A [SweepSpace] is a grid; [SweepSpace::generate] expands the Cartesian
//! product of every populated dimension into [SweepSet]s, repeating each
//! combination `runs_per_combination` times with distinct derived seeds.

use serde::Serialize;

use delivery_core::engine::RunParams;
use delivery_core::policy::PolicyConfig;

/// One fully resolved configuration for a single simulation run.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SweepSet {
    pub policy: PolicyConfig,
    pub params: RunParams,
    /// Identifies the knob combination this run belongs to.
    pub experiment_id: String,
    /// Run index within the combination.
    pub run_id: usize,
    /// Seed for stochastic on-time rules, derived so every run differs.
    pub seed: u64,
}

/// Grid of parameter variations to explore. Empty dimensions fall back to
/// the base value.
#[derive(Debug, Clone)]
pub struct SweepSpace {
    base_policy: PolicyConfig,
    base_params: RunParams,
    late_penalties: Vec<f64>,
    base_fuel_costs: Vec<f64>,
    high_traffic_surcharges: Vec<f64>,
    high_value_bonuses: Vec<f64>,
    available_drivers: Vec<usize>,
    max_hours_per_day: Vec<f64>,
    runs_per_combination: usize,
    base_seed: u64,
}

impl SweepSpace {
    /// Start an empty grid around the default policy and run parameters.
    pub fn grid() -> Self {
        Self {
            base_policy: PolicyConfig::default(),
            base_params: RunParams::default(),
            late_penalties: vec![],
            base_fuel_costs: vec![],
            high_traffic_surcharges: vec![],
            high_value_bonuses: vec![],
            available_drivers: vec![],
            max_hours_per_day: vec![],
            runs_per_combination: 1,
            base_seed: 42,
        }
    }

    pub fn base_policy(mut self, policy: PolicyConfig) -> Self {
        self.base_policy = policy;
        self
    }

    pub fn base_params(mut self, params: RunParams) -> Self {
        self.base_params = params;
        self
    }

    pub fn late_penalties(mut self, values: Vec<f64>) -> Self {
        self.late_penalties = values;
        self
    }

    pub fn base_fuel_costs(mut self, values: Vec<f64>) -> Self {
        self.base_fuel_costs = values;
        self
    }

    pub fn high_traffic_surcharges(mut self, values: Vec<f64>) -> Self {
        self.high_traffic_surcharges = values;
        self
    }

    pub fn high_value_bonuses(mut self, values: Vec<f64>) -> Self {
        self.high_value_bonuses = values;
        self
    }

    pub fn available_drivers(mut self, values: Vec<usize>) -> Self {
        self.available_drivers = values;
        self
    }

    pub fn max_hours_per_day(mut self, values: Vec<f64>) -> Self {
        self.max_hours_per_day = values;
        self
    }

    /// Repeat every combination this many times with distinct seeds.
    pub fn runs_per_combination(mut self, runs: usize) -> Self {
        self.runs_per_combination = runs.max(1);
        self
    }

    pub fn base_seed(mut self, seed: u64) -> Self {
        self.base_seed = seed;
        self
    }

    /// Expand the grid. The result length is the product of all populated
    /// dimension lengths times `runs_per_combination`.
    pub fn generate(&self) -> Vec<SweepSet> {
        let late_penalties = or_default(&self.late_penalties, self.base_policy.late_penalty);
        let fuel_costs = or_default(&self.base_fuel_costs, self.base_policy.base_fuel_cost_per_km);
        let surcharges = or_default(
            &self.high_traffic_surcharges,
            self.base_policy.high_traffic_surcharge,
        );
        let bonuses = or_default(&self.high_value_bonuses, self.base_policy.high_value_bonus);
        let drivers = or_default(&self.available_drivers, self.base_params.available_drivers);
        let hours = or_default(&self.max_hours_per_day, self.base_params.max_hours_per_day);

        let mut sets = Vec::new();
        let mut combination = 0u64;
        for &late_penalty in &late_penalties {
            for &fuel_cost in &fuel_costs {
                for &surcharge in &surcharges {
                    for &bonus in &bonuses {
                        for &available in &drivers {
                            for &max_hours in &hours {
                                let policy = self
                                    .base_policy
                                    .with_late_penalty(late_penalty)
                                    .with_base_fuel_cost_per_km(fuel_cost)
                                    .with_high_traffic_surcharge(surcharge)
                                    .with_high_value_bonus(bonus);
                                let params = self
                                    .base_params
                                    .with_available_drivers(available)
                                    .with_max_hours_per_day(max_hours);
                                for run_id in 0..self.runs_per_combination {
                                    sets.push(SweepSet {
                                        policy,
                                        params,
                                        experiment_id: format!("exp-{combination:04}"),
                                        run_id,
                                        seed: self
                                            .base_seed
                                            .wrapping_add(combination << 16)
                                            .wrapping_add(run_id as u64),
                                    });
                                }
                                combination += 1;
                            }
                        }
                    }
                }
            }
        }
        sets
    }
}

fn or_default<T: Copy>(values: &[T], default: T) -> Vec<T> {
    if values.is_empty() {
        vec![default]
    } else {
        values.to_vec()
    }
}
