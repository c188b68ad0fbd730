//! The delivery simulation engine: one synchronous pass over a catalogue
//! snapshot producing per-order outcomes and aggregate KPIs.
//!
//! The engine is pure: no I/O, no shared state. Concurrent runs over separate
//! snapshots never interfere. Persisting the report is the caller's job.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::assignment::{OrderPhase, RoundRobinAssigner};
use crate::catalog::Catalog;
use crate::clock::HhMm;
use crate::fuel::fuel_cost;
use crate::ontime::{DeliveryContext, OnTimePolicy};
use crate::policy::PolicyConfig;
use crate::report::{DeliveryOutcome, FuelCostBreakdown, SimulationReport};

/// Caller-supplied parameters for one run.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RunParams {
    /// Number of active drivers to draw from the pool.
    pub available_drivers: usize,
    /// Dispatch time; promised delivery windows are measured from here.
    pub start_time: HhMm,
    /// Per-driver daily hour budget for assignment.
    pub max_hours_per_day: f64,
}

impl Default for RunParams {
    fn default() -> Self {
        Self {
            available_drivers: 3,
            start_time: HhMm::new(9, 0).expect("09:00 is a valid time"),
            max_hours_per_day: 8.0,
        }
    }
}

impl RunParams {
    pub fn with_available_drivers(mut self, available_drivers: usize) -> Self {
        self.available_drivers = available_drivers;
        self
    }

    pub fn with_start_time(mut self, start_time: HhMm) -> Self {
        self.start_time = start_time;
        self
    }

    pub fn with_max_hours_per_day(mut self, max_hours_per_day: f64) -> Self {
        self.max_hours_per_day = max_hours_per_day;
        self
    }

    pub fn validate(&self) -> Result<(), ParamError> {
        if self.available_drivers == 0 {
            return Err(ParamError::NoDriversRequested);
        }
        if !(self.max_hours_per_day > 0.0 && self.max_hours_per_day <= 24.0) {
            return Err(ParamError::MaxHoursOutOfRange(self.max_hours_per_day));
        }
        Ok(())
    }
}

/// Rejected run parameter.
#[derive(Debug, Clone, PartialEq)]
pub enum ParamError {
    NoDriversRequested,
    MaxHoursOutOfRange(f64),
}

impl fmt::Display for ParamError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParamError::NoDriversRequested => write!(f, "available drivers must be at least 1"),
            ParamError::MaxHoursOutOfRange(h) => {
                write!(f, "max hours per day {h} out of range (0, 24]")
            }
        }
    }
}

impl std::error::Error for ParamError {}

/// Failure of a simulation run. The only runtime precondition is a non-empty
/// driver pool; dangling route references are tolerated, not errors.
#[derive(Debug, Clone, PartialEq)]
pub enum SimulationError {
    NoDriversAvailable,
    InvalidParams(ParamError),
}

impl fmt::Display for SimulationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SimulationError::NoDriversAvailable => write!(f, "no available drivers found"),
            SimulationError::InvalidParams(err) => write!(f, "invalid run parameters: {err}"),
        }
    }
}

impl std::error::Error for SimulationError {}

impl From<ParamError> for SimulationError {
    fn from(err: ParamError) -> Self {
        SimulationError::InvalidParams(err)
    }
}

/// Run one simulation over the snapshot.
///
/// Evaluates every pending order in ascending `order_id` order. Orders whose
/// `route_id` has no route in the catalogue are skipped silently: no outcome,
/// no contribution to any aggregate. Everything else yields exactly one
/// [DeliveryOutcome].
pub fn run_simulation(
    catalog: &Catalog,
    params: &RunParams,
    policy: &PolicyConfig,
    on_time_policy: &mut dyn OnTimePolicy,
) -> Result<SimulationReport, SimulationError> {
    params.validate()?;

    let pool = catalog.active_drivers(params.available_drivers);
    if pool.is_empty() {
        return Err(SimulationError::NoDriversAvailable);
    }

    let mut assigner = RoundRobinAssigner::new(&pool, policy, params.max_hours_per_day);

    let mut delivery_stats = Vec::new();
    let mut fuel_totals = FuelCostBreakdown::default();
    let mut on_time_deliveries = 0usize;
    let mut late_deliveries = 0usize;
    let mut total_profit = 0.0f64;

    for order in catalog.pending_orders() {
        let Some(route) = catalog.route(order.route_id) else {
            // Reference data may lag; a dangling route excludes the order.
            continue;
        };

        let cost = fuel_cost(route, policy);

        let assignment = assigner.assign(route.base_time_min);
        let phase = OrderPhase::Unassigned.advance();

        let window_minutes = params.start_time.minutes_until(order.delivery_time);
        let is_on_time = on_time_policy.decide(&DeliveryContext {
            order,
            route,
            fatigue_reduction: assignment.fatigue_reduction,
            adjusted_minutes: assignment.adjusted_minutes,
            window_minutes,
            overtime: assignment.overtime,
        });

        let penalty = if is_on_time { 0.0 } else { policy.late_penalty };
        let bonus = if is_on_time && order.value_rs > policy.high_value_threshold {
            order.value_rs * policy.high_value_bonus
        } else {
            0.0
        };
        let profit = order.value_rs + bonus - penalty - cost.total;

        delivery_stats.push(DeliveryOutcome {
            order_id: order.order_id,
            driver: pool[assignment.driver_index].name.clone(),
            is_on_time,
            profit,
            penalty,
            bonus,
        });
        debug_assert_eq!(phase.advance(), OrderPhase::Completed);

        fuel_totals.base_cost += cost.base_cost;
        fuel_totals.traffic_surcharge += cost.surcharge;
        fuel_totals.total_cost += cost.total;

        if is_on_time {
            on_time_deliveries += 1;
        } else {
            late_deliveries += 1;
        }
        total_profit += profit;
    }

    let evaluated = on_time_deliveries + late_deliveries;
    let efficiency_score = if evaluated > 0 {
        on_time_deliveries as f64 / evaluated as f64 * 100.0
    } else {
        0.0
    };

    Ok(SimulationReport {
        delivery_stats,
        fuel_cost_breakdown: fuel_totals,
        on_time_deliveries,
        late_deliveries,
        total_profit,
        efficiency_score,
    })
}
