//! Round-Robin scheduler with a fixed time quantum.
//!
//! # Algorithm
//!
//! Loop until every process has completed:
//! 1. Admit every not-yet-admitted process with `arrival <= clock` to the
//!    back of the ready queue, in arrival order.
//! 2. If the ready queue is empty, idle until the next arrival (or stop).
//! 3. Dequeue the front process and run it for `min(quantum, remaining)`.
//! 4. Admit again, so processes that arrived during the slice queue up
//!    ahead of the process that was just preempted.
//! 5. Record completion if nothing remains, otherwise requeue at the back.
//!
//! With `quantum >= max(burst)` every process finishes in one slice and
//! the completion order matches FCFS.

use std::collections::VecDeque;

use log::debug;

use super::{CpuScheduler, Timeline};
use crate::models::{Algorithm, CompletedProcess, Process, SimulationRun};

/// Working copy of a process while it sits in the ready queue.
#[derive(Debug)]
struct Runnable<'a> {
    process: &'a Process,
    remaining_burst: i64,
}

impl<'a> Runnable<'a> {
    fn new(process: &'a Process) -> Self {
        Self {
            process,
            remaining_burst: process.burst,
        }
    }

    /// Consumes up to `quantum` ticks of remaining work; returns the slice length.
    fn take_slice(&mut self, quantum: i64) -> i64 {
        let slice = quantum.min(self.remaining_burst);
        self.remaining_burst -= slice;
        assert!(
            self.remaining_burst >= 0,
            "process '{}' remaining burst underflow",
            self.process.id
        );
        slice
    }
}

/// Arrival-ordered admission cursor over the input process set.
struct Admission<'a> {
    processes: &'a [Process],
    next: usize,
}

impl<'a> Admission<'a> {
    fn new(processes: &'a [Process]) -> Self {
        Self { processes, next: 0 }
    }

    /// Moves every process that has arrived by `now` into `queue`.
    fn admit(&mut self, now: i64, queue: &mut VecDeque<Runnable<'a>>) {
        while let Some(p) = self.processes.get(self.next) {
            if !p.is_ready_at(now) {
                break;
            }
            queue.push_back(Runnable::new(p));
            self.next += 1;
        }
    }

    /// Arrival time of the next process not yet admitted.
    fn next_arrival(&self) -> Option<i64> {
        self.processes.get(self.next).map(|p| p.arrival)
    }
}

/// Preemptive Round-Robin scheduler.
#[derive(Debug, Clone, Copy)]
pub struct RoundRobinScheduler {
    quantum: i64,
}

impl RoundRobinScheduler {
    /// Creates a scheduler with the given quantum.
    ///
    /// # Panics
    /// If `quantum` is not positive. Use
    /// [`crate::validation::validate_algorithm`] to reject it gracefully.
    pub fn new(quantum: i64) -> Self {
        assert!(quantum > 0, "Round Robin quantum must be positive, got {quantum}");
        Self { quantum }
    }

    /// Time quantum (ticks).
    pub fn quantum(&self) -> i64 {
        self.quantum
    }
}

impl CpuScheduler for RoundRobinScheduler {
    fn algorithm(&self) -> Algorithm {
        Algorithm::round_robin(self.quantum)
    }

    fn schedule(&self, processes: &[Process]) -> SimulationRun {
        let mut timeline = Timeline::new();
        let mut completed = Vec::with_capacity(processes.len());
        let mut ready: VecDeque<Runnable<'_>> = VecDeque::new();
        let mut admission = Admission::new(processes);

        loop {
            admission.admit(timeline.now(), &mut ready);

            let Some(mut current) = ready.pop_front() else {
                match admission.next_arrival() {
                    Some(arrival) => {
                        timeline.idle_until(arrival);
                        continue;
                    }
                    None => break,
                }
            };

            let slice = current.take_slice(self.quantum);
            let end = timeline.execute(current.process, slice);

            admission.admit(end, &mut ready);

            if current.remaining_burst == 0 {
                let done = CompletedProcess::finish(current.process, end);
                debug!(
                    "RR(q={}): {} done at {} (waiting {}, turnaround {})",
                    self.quantum, done.id, end, done.waiting, done.turnaround
                );
                completed.push(done);
            } else {
                ready.push_back(current);
            }
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
