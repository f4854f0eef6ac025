//! First-Come-First-Served scheduler.
//!
//! # Algorithm
//!
//! 1. Walk processes in arrival order (ties keep input order).
//! 2. If the CPU is ahead of the next arrival, idle until it arrives.
//! 3. Run the process to completion.
//!
//! # Complexity
//! O(n).

use log::debug;

use super::{CpuScheduler, Timeline};
use crate::models::{Algorithm, CompletedProcess, Process, SimulationRun};

/// Non-preemptive FCFS scheduler.
#[derive(Debug, Clone, Copy, Default)]
pub struct FcfsScheduler;

impl FcfsScheduler {
    /// Creates a new scheduler.
    pub fn new() -> Self {
        Self
    }
}

impl CpuScheduler for FcfsScheduler {
    fn algorithm(&self) -> Algorithm {
        Algorithm::Fcfs
    }

    fn schedule(&self, processes: &[Process]) -> SimulationRun {
        let mut timeline = Timeline::new();
        let mut completed = Vec::with_capacity(processes.len());

        for process in processes {
            timeline.idle_until(process.arrival);
            let end = timeline.execute(process, process.burst);
            let done = CompletedProcess::finish(process, end);
            debug!(
                "FCFS: {} done at {} (waiting {}, turnaround {})",
                done.id, end, done.waiting, done.turnaround
            );
            completed.push(done);
        }

        let (slices, idle) = timeline.into_parts();
        SimulationRun {
            algorithm: self.algorithm(),
            completed,
            slices,
            idle,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Vec<Process> {
        vec![
            Process::new("P1", 5, 0),
            Process::new("P2", 3, 1),
            Process::new("P3", 1, 2),
        ]
    }

    #[test]
    fn test_fcfs_sample() {
        let run = FcfsScheduler::new().schedule(&sample());
        assert_eq!(run.execution_sequence(), vec!["P1", "P2", "P3"]);

        let waiting: Vec<i64> = run.completed.iter().map(|c| c.waiting).collect();
        let turnaround: Vec<i64> = run.completed.iter().map(|c| c.turnaround).collect();
        assert_eq!(waiting, vec![0, 4, 6]);
        assert_eq!(turnaround, vec![5, 7, 7]);
        assert!(run.idle.is_empty());
    }

    #[test]
    fn test_fcfs_idle_gap() {
        let ps = vec![Process::new("A", 2, 0), Process::new("B", 3, 6)];
        let run = FcfsScheduler::new().schedule(&ps);

        let b = run.find("B").unwrap();
        assert_eq!(b.waiting, 0);
        assert_eq!(b.completion, 9);
        assert_eq!(run.idle.len(), 1);
        assert_eq!(run.idle[0].start, 2);
        assert_eq!(run.idle[0].end, 6);
    }

    #[test]
    fn test_fcfs_late_first_arrival() {
        let ps = vec![Process::new("A", 2, 3)];
        let run = FcfsScheduler::new().schedule(&ps);
        assert_eq!(run.slices[0].start, 3);
        assert_eq!(run.find("A").unwrap().waiting, 0);
    }

    #[test]
    fn test_fcfs_equal_arrivals_keep_input_order() {
        let ps = vec![
            Process::new("Z", 4, 0),
            Process::new("A", 1, 0),
            Process::new("M", 2, 0),
        ];
        let run = FcfsScheduler::new().schedule(&ps);
        assert_eq!(run.execution_sequence(), vec!["Z", "A", "M"]);
    }

    #[test]
    fn test_fcfs_is_idempotent() {
        let ps = sample();
        let a = FcfsScheduler::new().schedule(&ps);
        let b = FcfsScheduler::new().schedule(&ps);
        assert_eq!(a.completed, b.completed);
        assert_eq!(a.slices, b.slices);
        assert_eq!(ps, sample());
    }
}
