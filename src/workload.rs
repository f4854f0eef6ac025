//! Synthetic workload generation.
//!
//! Produces random, valid process sets: identifiers `P1..Pn`, positive
//! bursts and non-negative arrivals drawn uniformly from inclusive
//! ranges, sorted by arrival.

use rand::Rng;

use crate::models::{sort_by_arrival, Process};

/// Random process set generator.
#[derive(Debug, Clone)]
pub struct WorkloadGenerator {
    min_burst: i64,
    max_burst: i64,
    min_arrival: i64,
    max_arrival: i64,
    id_prefix: String,
}

impl WorkloadGenerator {
    /// Creates a generator with bursts in `1..=10` and arrivals in `0..=20`.
    pub fn new() -> Self {
        Self {
            min_burst: 1,
            max_burst: 10,
            min_arrival: 0,
            max_arrival: 20,
            id_prefix: "P".to_string(),
        }
    }

    /// Sets the inclusive burst range. Bounds are clamped to at least 1.
    pub fn with_burst_range(mut self, min: i64, max: i64) -> Self {
        self.min_burst = min.max(1);
        self.max_burst = max.max(self.min_burst);
        self
    }

    /// Sets the inclusive arrival range. Bounds are clamped to at least 0.
    pub fn with_arrival_range(mut self, min: i64, max: i64) -> Self {
        self.min_arrival = min.max(0);
        self.max_arrival = max.max(self.min_arrival);
        self
    }

    /// Sets the identifier prefix (default `"P"`).
    pub fn with_id_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.id_prefix = prefix.into();
        self
    }

    /// Generates `count` processes, sorted by arrival.
    ///
    /// Identifiers are numbered in generation order, so after sorting they
    /// need not be in arrival order.
    pub fn generate<R: Rng>(&self, count: usize, rng: &mut R) -> Vec<Process> {
        let mut processes: Vec<Process> = (1..=count)
            .map(|i| {
                Process::new(
                    format!("{}{}", self.id_prefix, i),
                    rng.random_range(self.min_burst..=self.max_burst),
                    rng.random_range(self.min_arrival..=self.max_arrival),
                )
            })
            .collect();
        sort_by_arrival(&mut processes);
        processes
    }
}

impl Default for WorkloadGenerator {
    fn default() -> Self {
        Self::new()
    }
}
