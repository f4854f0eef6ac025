//! Simulation run (solution) model.
//!
//! A run is the complete outcome of one scheduling algorithm over one
//! process set: the completed processes, the Gantt slices, and any idle
//! periods where the CPU had nothing to do.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::CompletedProcess;

/// Scheduling discipline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Algorithm {
    /// First-Come-First-Served.
    Fcfs,
    /// Shortest-Job-First, non-preemptive.
    Sjf,
    /// Round-Robin with a fixed time quantum.
    RoundRobin {
        /// Maximum contiguous slice per turn (ticks).
        quantum: i64,
    },
}

impl Algorithm {
    /// Round-Robin with the given quantum.
    pub fn round_robin(quantum: i64) -> Self {
        Self::RoundRobin { quantum }
    }

    /// Human-readable report name.
    pub fn display_name(&self) -> String {
        match self {
            Self::Fcfs => "First Come First Serve (FCFS)".to_string(),
            Self::Sjf => "Shortest Job First (SJF) Non-Preemptive".to_string(),
            Self::RoundRobin { quantum } => format!("Round Robin (Quantum = {quantum})"),
        }
    }

    /// Whether the discipline can interrupt a running process.
    pub fn is_preemptive(&self) -> bool {
        matches!(self, Self::RoundRobin { .. })
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.display_name())
    }
}

/// One Gantt entry: a process held the CPU during `[start, end)`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExecutionSlice {
    /// Process that ran.
    pub process_id: String,
    /// Slice start (ticks).
    pub start: i64,
    /// Slice end (ticks).
    pub end: i64,
}

impl ExecutionSlice {
    /// Creates a new slice.
    pub fn new(process_id: impl Into<String>, start: i64, end: i64) -> Self {
        Self {
            process_id: process_id.into(),
            start,
            end,
        }
    }

    /// Slice length (ticks).
    #[inline]
    pub fn duration(&self) -> i64 {
        self.end - self.start
    }
}

/// A period during which no arrived process was waiting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct IdlePeriod {
    /// Idle start (ticks).
    pub start: i64,
    /// Idle end (ticks), the arrival that woke the CPU.
    pub end: i64,
}

impl IdlePeriod {
    /// Idle length (ticks).
    #[inline]
    pub fn duration(&self) -> i64 {
        self.end - self.start
    }
}

/// The outcome of one algorithm over one process set.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimulationRun {
    /// Discipline that produced this run.
    pub algorithm: Algorithm,
    /// Completed processes, in completion order.
    pub completed: Vec<CompletedProcess>,
    /// Gantt slices, in execution order.
    pub slices: Vec<ExecutionSlice>,
    /// Idle periods, in time order.
    pub idle: Vec<IdlePeriod>,
}

impl SimulationRun {
    /// Creates an empty run for `algorithm`.
    pub fn new(algorithm: Algorithm) -> Self {
        Self {
            algorithm,
            completed: Vec::new(),
            slices: Vec::new(),
            idle: Vec::new(),
        }
    }

    /// Process identifiers in the order they held the CPU.
    pub fn execution_sequence(&self) -> Vec<&str> {
        self.slices.iter().map(|s| s.process_id.as_str()).collect()
    }

    /// Completion order as identifiers.
    pub fn completion_order(&self) -> Vec<&str> {
        self.completed.iter().map(|c| c.id.as_str()).collect()
    }

    /// Completed processes sorted by identifier (reporting order).
    pub fn completed_by_id(&self) -> Vec<&CompletedProcess> {
        let mut sorted: Vec<&CompletedProcess> = self.completed.iter().collect();
        sorted.sort_by(|a, b| a.id.cmp(&b.id));
        sorted
    }

    /// Finds the completion record of a process.
    pub fn find(&self, process_id: &str) -> Option<&CompletedProcess> {
        self.completed.iter().find(|c| c.id == process_id)
    }

    /// Latest completion time (ticks). Zero for an empty run.
    pub fn makespan(&self) -> i64 {
        self.completed.iter().map(|c| c.completion).max().unwrap_or(0)
    }

    /// Total time the CPU was executing (ticks).
    pub fn busy_time(&self) -> i64 {
        self.slices.iter().map(|s| s.duration()).sum()
    }

    /// Total time the CPU spent idle (ticks).
    pub fn idle_time(&self) -> i64 {
        self.idle.iter().map(|i| i.duration()).sum()
    }

    /// Sum of all slice lengths for one process (ticks).
    pub fn executed_time_of(&self, process_id: &str) -> i64 {
        self.slices
            .iter()
            .filter(|s| s.process_id == process_id)
            .map(|s| s.duration())
            .sum()
    }

    /// Number of Gantt slices.
    pub fn slice_count(&self) -> usize {
        self.slices.len()
    }
}
