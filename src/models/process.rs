//! Process model.
//!
//! A process is the unit of CPU work to be scheduled: an identifier,
//! a burst (total execution time) and an arrival time.
//!
//! # Time Representation
//! All times are integer ticks relative to the simulation epoch (t=0).
//! Fields are signed so that malformed input (negative arrival) can be
//! represented and rejected by [`crate::validation`].

use serde::{Deserialize, Serialize};

/// A process to be scheduled.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Process {
    /// Unique process identifier (opaque, preserved verbatim).
    pub id: String,
    /// Total CPU time required (ticks, > 0).
    pub burst: i64,
    /// Time at which the process becomes eligible to run (ticks, >= 0).
    pub arrival: i64,
}

impl Process {
    /// Creates a new process.
    pub fn new(id: impl Into<String>, burst: i64, arrival: i64) -> Self {
        Self {
            id: id.into(),
            burst,
            arrival,
        }
    }

    /// Whether the process has arrived by `time`.
    #[inline]
    pub fn is_ready_at(&self, time: i64) -> bool {
        self.arrival <= time
    }
}

/// Sorts processes by arrival time, keeping input order for equal arrivals.
pub fn sort_by_arrival(processes: &mut [Process]) {
    // slice::sort_by_key is stable
    processes.sort_by_key(|p| p.arrival);
}

/// A process that has run to completion.
///
/// Only constructed through [`CompletedProcess::finish`], so the
/// waiting/turnaround relations always hold.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompletedProcess {
    /// Process identifier.
    pub id: String,
    /// Arrival time (ticks).
    pub arrival: i64,
    /// Original burst (ticks).
    pub burst: i64,
    /// Time at which the last unit of work finished (ticks).
    pub completion: i64,
    /// Time spent ready but not running: `turnaround - burst`.
    pub waiting: i64,
    /// Time from arrival to completion: `completion - arrival`.
    pub turnaround: i64,
}

impl CompletedProcess {
    /// Records the completion of `process` at `completion`.
    ///
    /// # Panics
    /// If the derived waiting time is negative, which means the scheduler
    /// ran the process before it arrived or for longer than its burst.
    pub fn finish(process: &Process, completion: i64) -> Self {
        let turnaround = completion - process.arrival;
        let waiting = turnaround - process.burst;
        assert!(
            waiting >= 0,
            "process '{}' completed at {} with negative waiting time {}",
            process.id,
            completion,
            waiting
        );
        Self {
            id: process.id.clone(),
            arrival: process.arrival,
            burst: process.burst,
            completion,
            waiting,
            turnaround,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_process_new() {
        let p = Process::new("P1", 5, 2);
        assert_eq!(p.id, "P1");
        assert_eq!(p.burst, 5);
        assert_eq!(p.arrival, 2);
        assert!(!p.is_ready_at(1));
        assert!(p.is_ready_at(2));
    }

    #[test]
    fn test_sort_by_arrival_is_stable() {
        let mut ps = vec![
            Process::new("C", 1, 3),
            Process::new("A", 1, 0),
            Process::new("B", 1, 3),
            Process::new("D", 1, 1),
        ];
        sort_by_arrival(&mut ps);
        let ids: Vec<&str> = ps.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, vec!["A", "D", "C", "B"]);
    }

    #[test]
    fn test_finish_derives_times() {
        let p = Process::new("P2", 3, 1);
        let c = CompletedProcess::finish(&p, 8);
        assert_eq!(c.turnaround, 7);
        assert_eq!(c.waiting, 4);
        assert_eq!(c.turnaround, c.waiting + c.burst);
    }

    #[test]
    #[should_panic(expected = "negative waiting time")]
    fn test_finish_rejects_early_completion() {
        let p = Process::new("P1", 5, 0);
        CompletedProcess::finish(&p, 4);
    }
}
