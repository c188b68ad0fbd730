#![allow(dead_code)]

use delivery_core::catalog::{Catalog, Driver, Order, Route, TrafficLevel};
use delivery_core::clock::HhMm;
use delivery_core::ontime::{DeliveryContext, OnTimePolicy};

pub fn time(s: &str) -> HhMm {
    s.parse().expect("test times are valid HH:MM")
}

pub fn rested_driver(name: &str) -> Driver {
    Driver::new(name, 8.0, &[6.0; 7]).expect("test driver")
}

pub fn fatigued_driver(name: &str) -> Driver {
    Driver::new(name, 10.0, &[10.0; 7]).expect("test driver")
}

/// A policy that pins every delivery to the given outcome, for tests that
/// exercise the aggregation independent of the deadline math.
pub struct FixedOutcome(pub bool);

impl OnTimePolicy for FixedOutcome {
    fn decide(&mut self, _ctx: &DeliveryContext<'_>) -> bool {
        self.0
    }
}

/// Three rested drivers, a mixed-traffic route set, and a small order book
/// including one order whose route does not exist.
pub fn mixed_catalog() -> Catalog {
    Catalog::new(
        vec![
            rested_driver("Amit"),
            rested_driver("Priya"),
            rested_driver("Rohit"),
        ],
        vec![
            Route::new(1, 10.0, TrafficLevel::Low, 30.0),
            Route::new(2, 20.0, TrafficLevel::High, 88.0),
            Route::new(3, 15.0, TrafficLevel::Medium, 60.0),
        ],
        vec![
            Order::new(1, 1500.0, 1, time("11:00")),
            Order::new(2, 800.0, 2, time("12:00")),
            Order::new(3, 2200.0, 3, time("12:30")),
            Order::new(4, 950.0, 42, time("10:00")), // dangling route
        ],
    )
    .expect("test catalog")
}
