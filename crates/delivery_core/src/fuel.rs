//! Fuel cost model: distance-proportional base plus a traffic surcharge.

use crate::catalog::{Route, TrafficLevel};
use crate::policy::PolicyConfig;

/// Fuel cost for one delivery, split into its components.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FuelCost {
    pub base_cost: f64,
    pub surcharge: f64,
    pub total: f64,
}

/// Compute the fuel cost of driving `route` once.
///
/// `base = distance_km * base_fuel_cost_per_km`; the surcharge applies only
/// when the route's traffic level is High.
pub fn fuel_cost(route: &Route, policy: &PolicyConfig) -> FuelCost {
    let base_cost = route.distance_km * policy.base_fuel_cost_per_km;
    let surcharge = if route.traffic_level == TrafficLevel::High {
        route.distance_km * policy.high_traffic_surcharge
    } else {
        0.0
    };
    FuelCost {
        base_cost,
        surcharge,
        total: base_cost + surcharge,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn low_traffic_route_has_no_surcharge() {
        let route = Route::new(1, 10.0, TrafficLevel::Low, 30.0);
        let cost = fuel_cost(&route, &PolicyConfig::default());
        assert_eq!(cost.base_cost, 50.0);
        assert_eq!(cost.surcharge, 0.0);
        assert_eq!(cost.total, 50.0);
    }

    #[test]
    fn medium_traffic_route_has_no_surcharge() {
        let route = Route::new(4, 15.0, TrafficLevel::Medium, 60.0);
        let cost = fuel_cost(&route, &PolicyConfig::default());
        assert_eq!(cost.surcharge, 0.0);
        assert_eq!(cost.total, 75.0);
    }

    #[test]
    fn high_traffic_route_pays_per_km_surcharge() {
        let route = Route::new(10, 20.0, TrafficLevel::High, 88.0);
        let cost = fuel_cost(&route, &PolicyConfig::default());
        assert_eq!(cost.base_cost, 100.0);
        assert_eq!(cost.surcharge, 40.0);
        assert_eq!(cost.total, 140.0);
    }

    #[test]
    fn total_is_sum_of_components() {
        let route = Route::new(2, 12.0, TrafficLevel::High, 48.0);
        let cost = fuel_cost(&route, &PolicyConfig::default());
        assert_eq!(cost.total, cost.base_cost + cost.surcharge);
    }
}
