//! Driver-to-order binding.
//!
//! Each order moves through `Unassigned -> Assigned -> Completed`. Assignment
//! is a rotating round-robin over the capped active pool with a per-driver
//! daily minute budget derived from `max_hours_per_day`. Within-budget
//! assignments never push a driver past the budget; an order no driver can
//! take in budget is still delivered, as overtime, by the least-loaded driver.

use crate::catalog::Driver;
use crate::fatigue::{adjusted_delivery_minutes, fatigue_reduction};
use crate::policy::PolicyConfig;

/// Lifecycle of one order inside a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OrderPhase {
    Unassigned,
    Assigned,
    Completed,
}

impl OrderPhase {
    /// Next phase in the lifecycle; `Completed` is terminal.
    pub fn advance(self) -> OrderPhase {
        match self {
            OrderPhase::Unassigned => OrderPhase::Assigned,
            OrderPhase::Assigned | OrderPhase::Completed => OrderPhase::Completed,
        }
    }
}

/// The driver binding chosen for one order.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Assignment {
    /// Index into the capped active pool.
    pub driver_index: usize,
    /// Fatigue reduction of the bound driver.
    pub fatigue_reduction: f64,
    /// Fatigue-adjusted delivery time in whole minutes.
    pub adjusted_minutes: u32,
    /// True when no driver had budget left and the order overflowed.
    pub overtime: bool,
}

/// Rotating assigner over a fixed driver pool.
#[derive(Debug, Clone)]
pub struct RoundRobinAssigner {
    fatigues: Vec<f64>,
    assigned_minutes: Vec<u32>,
    budget_minutes: u32,
    cursor: usize,
}

impl RoundRobinAssigner {
    /// Build an assigner for the given pool. Fatigue is computed once per
    /// driver; the pool must not be empty.
    pub fn new(drivers: &[&Driver], policy: &PolicyConfig, max_hours_per_day: f64) -> Self {
        debug_assert!(!drivers.is_empty(), "assigner requires a non-empty pool");
        Self {
            fatigues: drivers.iter().map(|d| fatigue_reduction(d, policy)).collect(),
            assigned_minutes: vec![0; drivers.len()],
            budget_minutes: (max_hours_per_day * 60.0).round() as u32,
            cursor: 0,
        }
    }

    /// Bind the next order (with the given nominal transit time) to a driver.
    ///
    /// Scans one full rotation from the cursor for a driver whose budget
    /// accommodates the order's fatigue-adjusted minutes. Falls back to the
    /// least-loaded driver, flagged as overtime.
    pub fn assign(&mut self, base_time_min: f64) -> Assignment {
        let n = self.fatigues.len();
        for offset in 0..n {
            let i = (self.cursor + offset) % n;
            let adjusted = adjusted_delivery_minutes(base_time_min, self.fatigues[i]);
            if self.assigned_minutes[i] + adjusted <= self.budget_minutes {
                self.assigned_minutes[i] += adjusted;
                self.cursor = (i + 1) % n;
                return Assignment {
                    driver_index: i,
                    fatigue_reduction: self.fatigues[i],
                    adjusted_minutes: adjusted,
                    overtime: false,
                };
            }
        }

        // Budget exhausted everywhere: overflow to the least-loaded driver.
        let i = self
            .assigned_minutes
            .iter()
            .enumerate()
            .min_by_key(|(_, &minutes)| minutes)
            .map(|(i, _)| i)
            .unwrap_or(0);
        let adjusted = adjusted_delivery_minutes(base_time_min, self.fatigues[i]);
        self.assigned_minutes[i] += adjusted;
        self.cursor = (i + 1) % n;
        Assignment {
            driver_index: i,
            fatigue_reduction: self.fatigues[i],
            adjusted_minutes: adjusted,
            overtime: true,
        }
    }

    /// Minutes assigned so far to the driver at `index`.
    pub fn assigned_minutes(&self, index: usize) -> u32 {
        self.assigned_minutes[index]
    }

    pub fn budget_minutes(&self) -> u32 {
        self.budget_minutes
    }

    pub fn driver_count(&self) -> usize {
        self.fatigues.len()
    }
}
