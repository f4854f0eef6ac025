//! CPU scheduling domain models.
//!
//! Provides the core data types for a scheduling simulation: the input
//! [`Process`], the per-process [`CompletedProcess`] result, and the
//! [`SimulationRun`] that records one algorithm's full outcome.
//!
//! # Domain Mappings
//!
//! | u-cpusched | Operating system | Batch queue |
//! |------------|------------------|-------------|
//! | Process | Task/Thread | Job |
//! | ExecutionSlice | Time slice on the CPU | Job run window |
//! | SimulationRun | Dispatcher trace | Queue log |

mod process;
mod run;

pub use process::{sort_by_arrival, CompletedProcess, Process};
pub use run::{Algorithm, ExecutionSlice, IdlePeriod, SimulationRun};
