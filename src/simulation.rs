//! Multi-algorithm simulation runs.
//!
//! Runs every configured discipline over the same process set and
//! collects one [`SimulationRun`] plus its [`RunKpi`] per discipline.
//!
//! # Configuration
//!
//! [`SimulationConfig`] is deserializable, with defaults matching the
//! classic comparison: FCFS, SJF, and Round-Robin with quanta 2, 4 and 8.
//!
//! ```
//! use u_cpusched::models::Process;
//! use u_cpusched::simulation::{Simulation, SimulationConfig};
//!
//! let processes = vec![Process::new("P1", 5, 0), Process::new("P2", 3, 1)];
//! let report = Simulation::new(SimulationConfig::default())
//!     .run_all(&processes)
//!     .unwrap();
//! assert_eq!(report.runs.len(), 5);
//! ```

use log::debug;
use serde::{Deserialize, Serialize};

use crate::models::{Algorithm, Process, SimulationRun};
use crate::scheduler::{scheduler_for, RunKpi};
use crate::validation::{validate_algorithm, validate_processes, ValidationError};

fn default_true() -> bool {
    true
}

fn default_quanta() -> Vec<i64> {
    vec![2, 4, 8]
}

/// Which disciplines a simulation runs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimulationConfig {
    /// Run First-Come-First-Served.
    #[serde(default = "default_true")]
    pub run_fcfs: bool,
    /// Run non-preemptive Shortest-Job-First.
    #[serde(default = "default_true")]
    pub run_sjf: bool,
    /// Round-Robin quanta, one run each, in order.
    #[serde(default = "default_quanta")]
    pub quanta: Vec<i64>,
}

impl SimulationConfig {
    /// Sets the Round-Robin quanta.
    pub fn with_quanta(mut self, quanta: Vec<i64>) -> Self {
        self.quanta = quanta;
        self
    }

    /// Skips the FCFS run.
    pub fn without_fcfs(mut self) -> Self {
        self.run_fcfs = false;
        self
    }

    /// Skips the SJF run.
    pub fn without_sjf(mut self) -> Self {
        self.run_sjf = false;
        self
    }

    /// Configured disciplines in run order: FCFS, SJF, then each quantum.
    pub fn algorithms(&self) -> Vec<Algorithm> {
        let mut algorithms = Vec::new();
        if self.run_fcfs {
            algorithms.push(Algorithm::Fcfs);
        }
        if self.run_sjf {
            algorithms.push(Algorithm::Sjf);
        }
        algorithms.extend(self.quanta.iter().map(|&q| Algorithm::round_robin(q)));
        algorithms
    }
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            run_fcfs: true,
            run_sjf: true,
            quanta: default_quanta(),
        }
    }
}

/// One discipline's outcome together with its metrics.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunResult {
    /// Simulated run.
    pub run: SimulationRun,
    /// Metrics over the run.
    pub kpi: RunKpi,
}

/// Results of every configured run over one process set.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimulationReport {
    /// Input process set, as simulated.
    pub initial: Vec<Process>,
    /// Per-discipline results, in configuration order.
    pub runs: Vec<RunResult>,
}

impl SimulationReport {
    /// Finds the result for a discipline.
    pub fn result_for(&self, algorithm: Algorithm) -> Option<&RunResult> {
        self.runs.iter().find(|r| r.run.algorithm == algorithm)
    }

    /// Discipline with the lowest average waiting time (first on ties).
    pub fn best_by_waiting(&self) -> Option<&RunResult> {
        self.runs.iter().reduce(|best, r| {
            if r.kpi.avg_waiting < best.kpi.avg_waiting {
                r
            } else {
                best
            }
        })
    }
}

/// Runs several disciplines over the same process set.
#[derive(Debug, Clone, Default)]
pub struct Simulation {
    config: SimulationConfig,
}

impl Simulation {
    /// Creates a simulation.
    pub fn new(config: SimulationConfig) -> Self {
        Self { config }
    }

    /// Active configuration.
    pub fn config(&self) -> &SimulationConfig {
        &self.config
    }

    /// Validates once, then runs every configured discipline.
    ///
    /// Each scheduler borrows `processes` immutably and keeps private
    /// working state, so the runs are independent.
    ///
    /// # Errors
    /// Every invalid quantum and every process-set problem.
    pub fn run_all(&self, processes: &[Process]) -> Result<SimulationReport, Vec<ValidationError>> {
        let algorithms = self.config.algorithms();

        let mut errors = Vec::new();
        for algorithm in &algorithms {
            if let Err(mut e) = validate_algorithm(algorithm) {
                errors.append(&mut e);
            }
        }
        if let Err(mut e) = validate_processes(processes) {
            errors.append(&mut e);
        }
        if !errors.is_empty() {
            return Err(errors);
        }

        let mut runs = Vec::with_capacity(algorithms.len());
        for algorithm in algorithms {
            let run = scheduler_for(algorithm).schedule(processes);
            let kpi = RunKpi::for_run(&run).map_err(|e| vec![e])?;
            debug!(
                "{algorithm}: avg waiting {:.2}, avg turnaround {:.2}",
                kpi.avg_waiting, kpi.avg_turnaround
            );
            runs.push(RunResult { run, kpi });
        }

        Ok(SimulationReport {
            initial: processes.to_vec(),
            runs,
        })
    }
}
