//! Driver fatigue and its effect on delivery time.

use crate::catalog::Driver;
use crate::policy::PolicyConfig;

/// Fractional time inflation for this driver.
///
/// A driver whose trailing 7-day average workload exceeds the policy
/// threshold delivers slower by `fatigue_speed_reduction`; otherwise 0.
pub fn fatigue_reduction(driver: &Driver, policy: &PolicyConfig) -> f64 {
    let total: f64 = driver.past_week_hours.iter().sum();
    let avg_hours_per_day = total / driver.past_week_hours.len() as f64;
    if avg_hours_per_day > policy.fatigue_avg_hours_threshold {
        policy.fatigue_speed_reduction
    } else {
        0.0
    }
}

/// Delivery time in whole minutes after applying fatigue.
///
/// Formula: `ceil(base_time_min * (1 + fatigue_reduction))`.
pub fn adjusted_delivery_minutes(base_time_min: f64, fatigue_reduction: f64) -> u32 {
    (base_time_min * (1.0 + fatigue_reduction)).ceil() as u32
}
