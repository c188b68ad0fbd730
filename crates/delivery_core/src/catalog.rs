//! Reference data consumed by a simulation run: drivers, routes, and orders.
//!
//! The engine never queries a data store. Callers hand it a [Catalog], an
//! already-fetched immutable snapshot, validated once at construction so the
//! per-order loop can assume well-formed inputs.

use std::collections::HashMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::clock::HhMm;

/// Traffic condition on a route; High adds a per-km fuel surcharge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TrafficLevel {
    Low,
    Medium,
    High,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderStatus {
    Pending,
    Assigned,
    Delivered,
    Cancelled,
}

/// One delivery driver. `past_week_hours` holds exactly seven daily totals,
/// oldest first; only the weekly sum feeds the fatigue model.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Driver {
    pub name: String,
    pub shift_hours: f64,
    pub past_week_hours: [f64; 7],
    pub is_active: bool,
}

impl Driver {
    /// Build a driver from a slice of daily hours, rejecting histories that
    /// are not exactly seven in-range entries.
    pub fn new(
        name: impl Into<String>,
        shift_hours: f64,
        past_week_hours: &[f64],
    ) -> Result<Self, CatalogError> {
        let name = name.into();
        let week: [f64; 7] = past_week_hours
            .try_into()
            .map_err(|_| CatalogError::BadWeekHistory {
                driver: name.clone(),
                len: past_week_hours.len(),
            })?;
        let driver = Self {
            name,
            shift_hours,
            past_week_hours: week,
            is_active: true,
        };
        driver.validate()?;
        Ok(driver)
    }

    pub fn inactive(mut self) -> Self {
        self.is_active = false;
        self
    }

    fn validate(&self) -> Result<(), CatalogError> {
        if !(0.0..=24.0).contains(&self.shift_hours) {
            return Err(CatalogError::HoursOutOfRange {
                driver: self.name.clone(),
                hours: self.shift_hours,
            });
        }
        for &hours in &self.past_week_hours {
            if !(0.0..=24.0).contains(&hours) {
                return Err(CatalogError::HoursOutOfRange {
                    driver: self.name.clone(),
                    hours,
                });
            }
        }
        Ok(())
    }
}

/// A delivery route with pre-supplied distance and nominal transit time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Route {
    pub route_id: u32,
    pub distance_km: f64,
    pub traffic_level: TrafficLevel,
    pub base_time_min: f64,
}

impl Route {
    pub fn new(route_id: u32, distance_km: f64, traffic_level: TrafficLevel, base_time_min: f64) -> Self {
        Self {
            route_id,
            distance_km,
            traffic_level,
            base_time_min,
        }
    }

    fn validate(&self) -> Result<(), CatalogError> {
        if self.distance_km <= 0.0 {
            return Err(CatalogError::NonPositiveDistance {
                route_id: self.route_id,
                distance_km: self.distance_km,
            });
        }
        if self.base_time_min <= 0.0 {
            return Err(CatalogError::NonPositiveBaseTime {
                route_id: self.route_id,
                base_time_min: self.base_time_min,
            });
        }
        Ok(())
    }
}

/// A customer order. `route_id` may reference a route missing from the
/// catalogue; the engine skips such orders rather than failing the run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    pub order_id: u32,
    pub value_rs: f64,
    pub route_id: u32,
    /// Promised delivery time of day.
    pub delivery_time: HhMm,
    pub status: OrderStatus,
}

impl Order {
    pub fn new(order_id: u32, value_rs: f64, route_id: u32, delivery_time: HhMm) -> Self {
        Self {
            order_id,
            value_rs,
            route_id,
            delivery_time,
            status: OrderStatus::Pending,
        }
    }

    pub fn with_status(mut self, status: OrderStatus) -> Self {
        self.status = status;
        self
    }

    fn validate(&self) -> Result<(), CatalogError> {
        if self.value_rs < 0.0 {
            return Err(CatalogError::NegativeOrderValue {
                order_id: self.order_id,
                value_rs: self.value_rs,
            });
        }
        Ok(())
    }
}

/// Immutable snapshot of the reference data for one simulation run.
///
/// Routes are indexed by `route_id` at construction for O(1) lookup during
/// the per-order loop.
#[derive(Debug, Clone)]
pub struct Catalog {
    drivers: Vec<Driver>,
    routes: Vec<Route>,
    orders: Vec<Order>,
    route_index: HashMap<u32, usize>,
}

impl Catalog {
    pub fn new(
        drivers: Vec<Driver>,
        routes: Vec<Route>,
        orders: Vec<Order>,
    ) -> Result<Self, CatalogError> {
        for driver in &drivers {
            driver.validate()?;
        }

        let mut route_index = HashMap::with_capacity(routes.len());
        for (i, route) in routes.iter().enumerate() {
            route.validate()?;
            if route_index.insert(route.route_id, i).is_some() {
                return Err(CatalogError::DuplicateRoute(route.route_id));
            }
        }

        let mut seen_orders = HashMap::with_capacity(orders.len());
        for order in &orders {
            order.validate()?;
            if seen_orders.insert(order.order_id, ()).is_some() {
                return Err(CatalogError::DuplicateOrder(order.order_id));
            }
        }

        Ok(Self {
            drivers,
            routes,
            orders,
            route_index,
        })
    }

    pub fn drivers(&self) -> &[Driver] {
        &self.drivers
    }

    pub fn routes(&self) -> &[Route] {
        &self.routes
    }

    pub fn orders(&self) -> &[Order] {
        &self.orders
    }

    /// Active drivers in catalogue order, capped to `cap`.
    pub fn active_drivers(&self, cap: usize) -> Vec<&Driver> {
        self.drivers
            .iter()
            .filter(|d| d.is_active)
            .take(cap)
            .collect()
    }

    /// Pending orders sorted ascending by `order_id` so runs are reproducible
    /// regardless of snapshot retrieval order.
    pub fn pending_orders(&self) -> Vec<&Order> {
        let mut pending: Vec<&Order> = self
            .orders
            .iter()
            .filter(|o| o.status == OrderStatus::Pending)
            .collect();
        pending.sort_by_key(|o| o.order_id);
        pending
    }

    pub fn route(&self, route_id: u32) -> Option<&Route> {
        self.route_index.get(&route_id).map(|&i| &self.routes[i])
    }
}

/// Rejected catalogue input; raised at snapshot construction, before the
/// engine ever sees the data.
#[derive(Debug, Clone, PartialEq)]
pub enum CatalogError {
    BadWeekHistory { driver: String, len: usize },
    HoursOutOfRange { driver: String, hours: f64 },
    DuplicateRoute(u32),
    DuplicateOrder(u32),
    NonPositiveDistance { route_id: u32, distance_km: f64 },
    NonPositiveBaseTime { route_id: u32, base_time_min: f64 },
    NegativeOrderValue { order_id: u32, value_rs: f64 },
}

impl fmt::Display for CatalogError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CatalogError::BadWeekHistory { driver, len } => {
                write!(f, "driver {driver}: past week hours must contain exactly 7 days, got {len}")
            }
            CatalogError::HoursOutOfRange { driver, hours } => {
                write!(f, "driver {driver}: hours {hours} out of range 0-24")
            }
            CatalogError::DuplicateRoute(id) => write!(f, "duplicate route id {id}"),
            CatalogError::DuplicateOrder(id) => write!(f, "duplicate order id {id}"),
            CatalogError::NonPositiveDistance { route_id, distance_km } => {
                write!(f, "route {route_id}: distance {distance_km} km must be positive")
            }
            CatalogError::NonPositiveBaseTime { route_id, base_time_min } => {
                write!(f, "route {route_id}: base time {base_time_min} min must be positive")
            }
            CatalogError::NegativeOrderValue { order_id, value_rs } => {
                write!(f, "order {order_id}: value {value_rs} must not be negative")
            }
        }
    }
}

impl std::error::Error for CatalogError {}
