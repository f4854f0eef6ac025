//! CPU scheduling simulation for the U-Engine ecosystem.
//!
//! Simulates single-CPU process scheduling over a fixed process set and
//! reports per-process waiting/turnaround times, the execution (Gantt)
//! sequence, and aggregate averages.
//!
//! # Modules
//!
//! - **`models`**: Domain types — `Process`, `CompletedProcess`, `Algorithm`,
//!   `ExecutionSlice`, `IdlePeriod`, `SimulationRun`
//! - **`scheduler`**: FCFS, non-preemptive SJF and Round-Robin on a shared
//!   `Timeline`, plus the `RunKpi` metrics aggregator
//! - **`validation`**: Input integrity checks (empty sets, duplicate IDs,
//!   non-positive bursts/quanta, negative or unsorted arrivals)
//! - **`simulation`**: Runs several disciplines over one process set
//! - **`input`** / **`report`**: Text loading and plain-text reporting
//! - **`workload`**: Random process set generation
//!
//! # Determinism
//!
//! Simulation is pure, single-threaded integer arithmetic: the same input
//! always yields the same run. Schedulers borrow the input immutably.
//!
//! # References
//!
//! - Silberschatz, Galvin & Gagne (2018), "Operating System Concepts", Ch. 5
//! - Tanenbaum & Bos (2014), "Modern Operating Systems", Ch. 2.4

pub mod input;
pub mod models;
pub mod report;
pub mod scheduler;
pub mod simulation;
pub mod validation;
pub mod workload;
