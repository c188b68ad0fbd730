//! On-time decision policies.
//!
//! The decision is injectable so tests can pin outcomes: the default
//! [DeadlinePolicy] compares the fatigue-adjusted delivery time against the
//! promised window, while [CoinFlipPolicy] reproduces the legacy stochastic
//! behavior under an explicit seed. An overtime assignment is late under
//! every policy.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::catalog::{Order, Route};

/// Everything a policy may consult when deciding one delivery.
#[derive(Debug, Clone, Copy)]
pub struct DeliveryContext<'a> {
    pub order: &'a Order,
    pub route: &'a Route,
    /// Fatigue reduction of the bound driver.
    pub fatigue_reduction: f64,
    /// Fatigue-adjusted delivery time in whole minutes.
    pub adjusted_minutes: u32,
    /// Minutes from the run start until the order's promised time of day.
    pub window_minutes: u32,
    /// True when the assignment overflowed every driver's daily budget.
    pub overtime: bool,
}

/// Decides whether one delivery arrives on time.
pub trait OnTimePolicy {
    fn decide(&mut self, ctx: &DeliveryContext<'_>) -> bool;
}

/// Deterministic policy: on time iff the adjusted delivery time fits inside
/// the promised window and the assignment stayed within budget.
#[derive(Debug, Clone, Copy, Default)]
pub struct DeadlinePolicy;

impl OnTimePolicy for DeadlinePolicy {
    fn decide(&mut self, ctx: &DeliveryContext<'_>) -> bool {
        !ctx.overtime && ctx.adjusted_minutes <= ctx.window_minutes
    }
}

/// Seeded stochastic policy matching the legacy draw (on-time probability
/// 0.7 by default). Kept for parity experiments; reproducible under a fixed
/// seed.
#[derive(Debug)]
pub struct CoinFlipPolicy {
    rng: StdRng,
    on_time_probability: f64,
}

impl CoinFlipPolicy {
    pub fn new(seed: Option<u64>) -> Self {
        Self::with_probability(seed, 0.7)
    }

    pub fn with_probability(seed: Option<u64>, on_time_probability: f64) -> Self {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self {
            rng,
            on_time_probability,
        }
    }
}

impl OnTimePolicy for CoinFlipPolicy {
    fn decide(&mut self, ctx: &DeliveryContext<'_>) -> bool {
        !ctx.overtime && self.rng.gen::<f64>() < self.on_time_probability
    }
}
