//! Simulation run history: append-only records with paginated reads.
//!
//! The engine itself persists nothing; after a run the caller appends
//! `{inputs, results, created_by, timestamp}` here. Records are immutable
//! once appended and read back newest-first. The whole store round-trips
//! through JSON for durable history files.

use std::error::Error;
use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::engine::RunParams;
use crate::report::SimulationReport;

/// One immutable historical run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationRecord {
    pub id: u64,
    pub inputs: RunParams,
    pub results: SimulationReport,
    pub created_by: String,
    /// Wall-clock capture time, milliseconds since the Unix epoch.
    pub timestamp_ms: u64,
}

/// Page metadata returned alongside a history page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pagination {
    /// 1-based page number.
    pub current: usize,
    /// Total number of pages at this limit.
    pub pages: usize,
    /// Total number of records in the store.
    pub total: usize,
}

/// Append-only in-memory history store.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SimulationHistory {
    records: Vec<SimulationRecord>,
    next_id: u64,
}

impl SimulationHistory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a run and return its assigned id.
    pub fn append(
        &mut self,
        inputs: RunParams,
        results: SimulationReport,
        created_by: impl Into<String>,
        timestamp_ms: u64,
    ) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        self.records.push(SimulationRecord {
            id,
            inputs,
            results,
            created_by: created_by.into(),
            timestamp_ms,
        });
        id
    }

    pub fn get(&self, id: u64) -> Option<&SimulationRecord> {
        self.records.iter().find(|r| r.id == id)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Newest-first page of records. `page` is 1-based; a `limit` of 0 is
    /// treated as 1.
    pub fn page(&self, page: usize, limit: usize) -> (Vec<&SimulationRecord>, Pagination) {
        let limit = limit.max(1);
        let page = page.max(1);
        let total = self.records.len();
        let pages = total.div_ceil(limit);

        let entries = self
            .records
            .iter()
            .rev()
            .skip((page - 1) * limit)
            .take(limit)
            .collect();

        (
            entries,
            Pagination {
                current: page,
                pages,
                total,
            },
        )
    }

    /// Write the full store to a JSON file.
    pub fn save_json(&self, path: impl AsRef<Path>) -> Result<(), Box<dyn Error>> {
        let file = File::create(path)?;
        serde_json::to_writer_pretty(BufWriter::new(file), self)?;
        Ok(())
    }

    /// Load a store previously written by [SimulationHistory::save_json].
    pub fn load_json(path: impl AsRef<Path>) -> Result<Self, Box<dyn Error>> {
        let file = File::open(path)?;
        let history: SimulationHistory = serde_json::from_reader(BufReader::new(file))?;
        Ok(history)
    }
}
