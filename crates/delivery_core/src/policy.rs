//! Policy knobs for a simulation run.
//!
//! The original engine held these as mutable fields; here they are an
//! immutable config passed into the computation, so per-run or per-deployment
//! overrides never touch shared state.

use serde::{Deserialize, Serialize};

/// Flat deduction per late order, in currency units.
pub const DEFAULT_LATE_PENALTY: f64 = 50.0;
/// Fractional time inflation applied to a fatigued driver.
pub const DEFAULT_FATIGUE_SPEED_REDUCTION: f64 = 0.30;
/// Order value above which an on-time bonus is eligible.
pub const DEFAULT_HIGH_VALUE_THRESHOLD: f64 = 1000.0;
/// Fractional bonus of order value for high-value on-time deliveries.
pub const DEFAULT_HIGH_VALUE_BONUS: f64 = 0.10;
/// Fuel cost per km baseline.
pub const DEFAULT_BASE_FUEL_COST_PER_KM: f64 = 5.0;
/// Extra fuel cost per km on high-traffic routes.
pub const DEFAULT_HIGH_TRAFFIC_SURCHARGE: f64 = 2.0;
/// Trailing 7-day average workload above which a driver counts as fatigued.
pub const DEFAULT_FATIGUE_AVG_HOURS_THRESHOLD: f64 = 8.0;

/// Immutable policy constants for one simulation run.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PolicyConfig {
    pub late_penalty: f64,
    pub fatigue_speed_reduction: f64,
    pub high_value_threshold: f64,
    pub high_value_bonus: f64,
    pub base_fuel_cost_per_km: f64,
    pub high_traffic_surcharge: f64,
    pub fatigue_avg_hours_threshold: f64,
}

impl Default for PolicyConfig {
    fn default() -> Self {
        Self {
            late_penalty: DEFAULT_LATE_PENALTY,
            fatigue_speed_reduction: DEFAULT_FATIGUE_SPEED_REDUCTION,
            high_value_threshold: DEFAULT_HIGH_VALUE_THRESHOLD,
            high_value_bonus: DEFAULT_HIGH_VALUE_BONUS,
            base_fuel_cost_per_km: DEFAULT_BASE_FUEL_COST_PER_KM,
            high_traffic_surcharge: DEFAULT_HIGH_TRAFFIC_SURCHARGE,
            fatigue_avg_hours_threshold: DEFAULT_FATIGUE_AVG_HOURS_THRESHOLD,
        }
    }
}

impl PolicyConfig {
    pub fn with_late_penalty(mut self, late_penalty: f64) -> Self {
        self.late_penalty = late_penalty;
        self
    }

    pub fn with_fatigue_speed_reduction(mut self, reduction: f64) -> Self {
        self.fatigue_speed_reduction = reduction;
        self
    }

    pub fn with_high_value_bonus(mut self, bonus: f64) -> Self {
        self.high_value_bonus = bonus;
        self
    }

    pub fn with_high_value_threshold(mut self, threshold: f64) -> Self {
        self.high_value_threshold = threshold;
        self
    }

    pub fn with_base_fuel_cost_per_km(mut self, rate: f64) -> Self {
        self.base_fuel_cost_per_km = rate;
        self
    }

    pub fn with_high_traffic_surcharge(mut self, surcharge: f64) -> Self {
        self.high_traffic_surcharge = surcharge;
        self
    }
}
