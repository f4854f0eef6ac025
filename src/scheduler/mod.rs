//! CPU schedulers and run metrics.
//!
//! Provides the three classical single-CPU disciplines on top of a shared
//! [`Timeline`], plus the [`RunKpi`] aggregator.
//!
//! # Algorithms
//!
//! - [`FcfsScheduler`]: arrival order, run to completion.
//! - [`SjfScheduler`]: smallest ready burst first, run to completion.
//! - [`RoundRobinScheduler`]: FIFO ready queue, at most one quantum per turn.
//!
//! Every scheduler borrows the caller's process slice and keeps its working
//! state private, so runs never observe each other.
//!
//! # References
//!
//! - Silberschatz, Galvin & Gagne (2018), "Operating System Concepts", Ch. 5
//! - Tanenbaum & Bos (2014), "Modern Operating Systems", Ch. 2.4

mod fcfs;
mod kpi;
mod round_robin;
mod sjf;
mod timeline;

pub use fcfs::FcfsScheduler;
pub use kpi::RunKpi;
pub use round_robin::RoundRobinScheduler;
pub use sjf::SjfScheduler;
pub use timeline::Timeline;

use log::debug;

use crate::models::{Algorithm, Process, SimulationRun};
use crate::validation::{validate_input, ValidationError};

/// A single-CPU scheduling discipline.
///
/// # Contract
/// `processes` is sorted by arrival (ties in input order), non-empty, with
/// unique IDs, positive bursts and non-negative arrivals. Implementations
/// must not mutate it, and must complete every process exactly once.
pub trait CpuScheduler {
    /// Discipline implemented by this scheduler.
    fn algorithm(&self) -> Algorithm;

    /// Simulates the process set to completion.
    fn schedule(&self, processes: &[Process]) -> SimulationRun;
}

/// Builds the scheduler for `algorithm`.
///
/// # Panics
/// For a Round-Robin quantum that is not positive.
pub fn scheduler_for(algorithm: Algorithm) -> Box<dyn CpuScheduler> {
    match algorithm {
        Algorithm::Fcfs => Box::new(FcfsScheduler::new()),
        Algorithm::Sjf => Box::new(SjfScheduler::new()),
        Algorithm::RoundRobin { quantum } => Box::new(RoundRobinScheduler::new(quantum)),
    }
}

/// Validates `processes` and simulates them under `algorithm`.
///
/// # Errors
/// Every validation problem found in the input or the algorithm parameters.
///
/// # Example
///
/// ```
/// use u_cpusched::models::{Algorithm, Process};
/// use u_cpusched::scheduler::run;
///
/// let processes = vec![
///     Process::new("P1", 5, 0),
///     Process::new("P2", 3, 1),
///     Process::new("P3", 1, 2),
/// ];
/// let result = run(&processes, Algorithm::Sjf).unwrap();
/// assert_eq!(result.execution_sequence(), vec!["P1", "P3", "P2"]);
/// ```
pub fn run(
    processes: &[Process],
    algorithm: Algorithm,
) -> Result<SimulationRun, Vec<ValidationError>> {
    validate_input(processes, &algorithm)?;

    debug!("{algorithm}: simulating {} processes", processes.len());
    let result = scheduler_for(algorithm).schedule(processes);
    debug!(
        "{algorithm}: finished at {} after {} slices",
        result.makespan(),
        result.slice_count()
    );
    Ok(result)
}
