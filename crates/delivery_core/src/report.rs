//! Result types produced by a simulation run.

use serde::{Deserialize, Serialize};

/// Financial outcome of one evaluated order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeliveryOutcome {
    pub order_id: u32,
    /// Name of the driver the order was bound to.
    pub driver: String,
    pub is_on_time: bool,
    pub profit: f64,
    pub penalty: f64,
    pub bonus: f64,
}

/// Fuel cost totals across all evaluated orders.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct FuelCostBreakdown {
    pub base_cost: f64,
    pub traffic_surcharge: f64,
    pub total_cost: f64,
}

/// Aggregate KPIs plus one [DeliveryOutcome] per evaluated order.
///
/// Orders whose route is missing from the catalogue contribute nothing here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationReport {
    pub delivery_stats: Vec<DeliveryOutcome>,
    pub fuel_cost_breakdown: FuelCostBreakdown,
    pub on_time_deliveries: usize,
    pub late_deliveries: usize,
    pub total_profit: f64,
    /// Percentage of evaluated orders delivered on time; 0 when nothing was
    /// evaluated.
    pub efficiency_score: f64,
}

impl SimulationReport {
    /// Number of orders that produced an outcome.
    pub fn evaluated_deliveries(&self) -> usize {
        self.on_time_deliveries + self.late_deliveries
    }
}
