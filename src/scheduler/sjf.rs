//! Shortest-Job-First scheduler (non-preemptive).
//!
//! # Algorithm
//!
//! Repeat until every process has run:
//! 1. Collect the processes that have arrived by the current clock.
//! 2. If none has, idle until the earliest remaining arrival.
//! 3. Otherwise run the ready process with the smallest burst to completion.
//!
//! # Tie-breaking
//! Among equal bursts the first ready process in the pool wins. The pool
//! keeps input order, so ties resolve by arrival and then by input position,
//! never by identifier.
//!
//! # Complexity
//! O(n²).

use log::debug;

use super::{CpuScheduler, Timeline};
use crate::models::{Algorithm, CompletedProcess, Process, SimulationRun};

/// Non-preemptive SJF scheduler.
#[derive(Debug, Clone, Copy, Default)]
pub struct SjfScheduler;

impl SjfScheduler {
    /// Creates a new scheduler.
    pub fn new() -> Self {
        Self
    }

    /// Index into `pool` of the next process to run at `now`, if any is ready.
    fn select(pool: &[&Process], now: i64) -> Option<usize> {
        // min_by_key returns the first of several equal minima
        pool.iter()
            .enumerate()
            .filter(|(_, p)| p.is_ready_at(now))
            .min_by_key(|(_, p)| p.burst)
            .map(|(idx, _)| idx)
    }
}

impl CpuScheduler for SjfScheduler {
    fn algorithm(&self) -> Algorithm {
        Algorithm::Sjf
    }

    fn schedule(&self, processes: &[Process]) -> SimulationRun {
        let mut timeline = Timeline::new();
        let mut completed = Vec::with_capacity(processes.len());
        let mut pool: Vec<&Process> = processes.iter().collect();

        while !pool.is_empty() {
            let Some(idx) = Self::select(&pool, timeline.now()) else {
                // pool is non-empty, so a minimum always exists
                if let Some(next) = pool.iter().map(|p| p.arrival).min() {
                    timeline.idle_until(next);
                }
                continue;
            };

            let process = pool.remove(idx);
            let end = timeline.execute(process, process.burst);
            let done = CompletedProcess::finish(process, end);
            debug!(
                "SJF: {} done at {} (waiting {}, turnaround {})",
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

    #[test]
    fn test_sjf_sample() {
        let ps = vec![
            Process::new("P1", 5, 0),
            Process::new("P2", 3, 1),
            Process::new("P3", 1, 2),
        ];
        let run = SjfScheduler::new().schedule(&ps);
        assert_eq!(run.execution_sequence(), vec!["P1", "P3", "P2"]);
        assert_eq!(run.find("P1").unwrap().waiting, 0);
        assert_eq!(run.find("P3").unwrap().waiting, 3);
        assert_eq!(run.find("P2").unwrap().waiting, 5);
    }

    #[test]
    fn test_sjf_is_non_preemptive() {
        // B arrives mid-run and is shorter, but A keeps the CPU
        let ps = vec![Process::new("A", 10, 0), Process::new("B", 1, 1)];
        let run = SjfScheduler::new().schedule(&ps);
        assert_eq!(run.execution_sequence(), vec!["A", "B"]);
        assert_eq!(run.find("A").unwrap().completion, 10);
    }

    #[test]
    fn test_sjf_idle_jump() {
        let ps = vec![
            Process::new("A", 2, 0),
            Process::new("B", 4, 5),
            Process::new("C", 1, 5),
        ];
        let run = SjfScheduler::new().schedule(&ps);
        assert_eq!(run.execution_sequence(), vec!["A", "C", "B"]);
        assert_eq!(run.idle.len(), 1);
        assert_eq!((run.idle[0].start, run.idle[0].end), (2, 5));
        assert_eq!(run.find("C").unwrap().waiting, 0);
        assert_eq!(run.find("B").unwrap().waiting, 1);
    }

    #[test]
    fn test_sjf_tie_breaks_by_pool_order_not_id() {
        let ps = vec![
            Process::new("A", 4, 0),
            Process::new("Z", 2, 1),
            Process::new("B", 2, 2),
        ];
        let run = SjfScheduler::new().schedule(&ps);
        assert_eq!(run.execution_sequence(), vec!["A", "Z", "B"]);
    }

    #[test]
    fn test_sjf_tie_breaks_by_input_order_on_equal_arrival() {
        let ps = vec![
            Process::new("X", 3, 0),
            Process::new("Y", 3, 0),
            Process::new("W", 3, 0),
        ];
        let run = SjfScheduler::new().schedule(&ps);
        assert_eq!(run.execution_sequence(), vec!["X", "Y", "W"]);
    }

    #[test]
    fn test_sjf_only_considers_arrived() {
        // C is the shortest overall but has not arrived when A finishes
        let ps = vec![
            Process::new("A", 3, 0),
            Process::new("B", 5, 1),
            Process::new("C", 1, 4),
        ];
        let run = SjfScheduler::new().schedule(&ps);
        assert_eq!(run.execution_sequence(), vec!["A", "B", "C"]);
    }
}
