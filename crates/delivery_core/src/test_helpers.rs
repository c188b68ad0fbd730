//! Fixture catalogues shared by tests, benches, and examples.
//!
//! `seed_*` reproduce the demo fleet, route set, and order book the
//! application ships with; `single_order_catalog` is the minimal one-driver
//! one-route one-order setup used for worked examples.

use crate::catalog::{Catalog, Driver, Order, Route, TrafficLevel};
use crate::clock::HhMm;

fn time(s: &str) -> HhMm {
    s.parse().expect("fixture times are valid HH:MM")
}

fn driver(name: &str, shift_hours: f64, week: [f64; 7]) -> Driver {
    Driver::new(name, shift_hours, &week).expect("fixture drivers are valid")
}

/// The ten-driver demo fleet.
pub fn seed_drivers() -> Vec<Driver> {
    vec![
        driver("Amit", 6.0, [8.0, 7.0, 7.0, 6.0, 10.0, 8.0, 7.0]),
        driver("Priya", 6.0, [10.0, 9.0, 6.0, 6.0, 7.0, 7.0, 8.0]),
        driver("Rohit", 10.0, [10.0, 6.0, 10.0, 7.0, 10.0, 9.0, 7.0]),
        driver("Neha", 9.0, [10.0, 8.0, 6.0, 7.0, 9.0, 8.0, 8.0]),
        driver("Karan", 7.0, [7.0, 8.0, 6.0, 9.0, 6.0, 8.0, 7.0]),
        driver("Sneha", 8.0, [10.0, 8.0, 6.0, 9.0, 10.0, 6.0, 9.0]),
        driver("Vikram", 6.0, [10.0, 8.0, 10.0, 8.0, 10.0, 7.0, 6.0]),
        driver("Anjali", 6.0, [7.0, 8.0, 6.0, 7.0, 6.0, 9.0, 8.0]),
        driver("Manoj", 9.0, [8.0, 7.0, 8.0, 8.0, 7.0, 8.0, 6.0]),
        driver("Pooja", 10.0, [7.0, 10.0, 7.0, 7.0, 9.0, 9.0, 8.0]),
    ]
}

/// The ten-route demo catalogue.
pub fn seed_routes() -> Vec<Route> {
    vec![
        Route::new(1, 25.0, TrafficLevel::High, 125.0),
        Route::new(2, 12.0, TrafficLevel::High, 48.0),
        Route::new(3, 6.0, TrafficLevel::Low, 18.0),
        Route::new(4, 15.0, TrafficLevel::Medium, 60.0),
        Route::new(5, 7.0, TrafficLevel::Low, 35.0),
        Route::new(6, 15.0, TrafficLevel::Low, 75.0),
        Route::new(7, 20.0, TrafficLevel::Medium, 100.0),
        Route::new(8, 19.0, TrafficLevel::Low, 76.0),
        Route::new(9, 9.0, TrafficLevel::Low, 45.0),
        Route::new(10, 22.0, TrafficLevel::High, 88.0),
    ]
}

/// The fifteen pending demo orders.
pub fn seed_orders() -> Vec<Order> {
    vec![
        Order::new(1, 2594.0, 7, time("02:07")),
        Order::new(2, 1835.0, 6, time("01:19")),
        Order::new(3, 766.0, 9, time("01:06")),
        Order::new(4, 572.0, 1, time("02:02")),
        Order::new(5, 826.0, 3, time("00:35")),
        Order::new(6, 2642.0, 2, time("01:02")),
        Order::new(7, 1763.0, 10, time("01:47")),
        Order::new(8, 2367.0, 5, time("01:00")),
        Order::new(9, 247.0, 2, time("01:12")),
        Order::new(10, 1292.0, 6, time("01:12")),
        Order::new(11, 1402.0, 7, time("01:40")),
        Order::new(12, 2058.0, 1, time("02:11")),
        Order::new(13, 2250.0, 3, time("00:40")),
        Order::new(14, 635.0, 5, time("01:05")),
        Order::new(15, 2279.0, 10, time("01:30")),
    ]
}

/// Full demo snapshot: ten drivers, ten routes, fifteen pending orders.
pub fn seed_catalog() -> Catalog {
    Catalog::new(seed_drivers(), seed_routes(), seed_orders()).expect("seed data is valid")
}

/// One rested driver, one low-traffic 10 km route, one high-value order.
pub fn single_order_catalog() -> Catalog {
    Catalog::new(
        vec![driver("Test Driver", 8.0, [8.0, 8.0, 8.0, 8.0, 8.0, 0.0, 0.0])],
        vec![Route::new(1, 10.0, TrafficLevel::Low, 30.0)],
        vec![Order::new(1, 1500.0, 1, time("10:00"))],
    )
    .expect("fixture catalog is valid")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seed_catalog_is_well_formed() {
        let catalog = seed_catalog();
        assert_eq!(catalog.drivers().len(), 10);
        assert_eq!(catalog.routes().len(), 10);
        assert_eq!(catalog.pending_orders().len(), 15);
        // Every seed order resolves to a seeded route.
        for order in catalog.pending_orders() {
            assert!(catalog.route(order.route_id).is_some());
        }
    }
}
