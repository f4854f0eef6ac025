//! Simulation run metrics (KPIs).
//!
//! Computes per-run performance indicators from completed processes.
//!
//! # Metrics
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Avg Waiting | mean(turnaround - burst) |
//! | Avg Turnaround | mean(completion - arrival) |
//! | Max Waiting | Largest single waiting time |
//! | Makespan | Latest completion time |
//! | CPU Utilization | Total burst / makespan |
//! | Throughput | Processes completed per tick of makespan |

use serde::{Deserialize, Serialize};

use crate::models::{CompletedProcess, SimulationRun};
use crate::validation::{ValidationError, ValidationErrorKind};

/// Run performance indicators.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunKpi {
    /// Number of completed processes.
    pub process_count: usize,
    /// Arithmetic mean of waiting times (ticks).
    pub avg_waiting: f64,
    /// Arithmetic mean of turnaround times (ticks).
    pub avg_turnaround: f64,
    /// Largest waiting time of any process (ticks).
    pub max_waiting: i64,
    /// Latest completion time (ticks).
    pub makespan: i64,
    /// Sum of all bursts (ticks).
    pub total_burst: i64,
    /// Fraction of `[0, makespan)` the CPU was busy (0.0..=1.0).
    pub cpu_utilization: f64,
    /// Completed processes per tick.
    pub throughput: f64,
}

impl RunKpi {
    /// Computes KPIs from completed processes, in any order.
    ///
    /// # Errors
    /// `EmptyInput` if `completed` is empty; averages are undefined.
    pub fn calculate(completed: &[CompletedProcess]) -> Result<Self, ValidationError> {
        if completed.is_empty() {
            return Err(ValidationError::new(
                ValidationErrorKind::EmptyInput,
                "Cannot compute metrics for an empty result set",
            ));
        }

        let n = completed.len() as f64;
        // per-process times fit in i64, their sums over many processes may not
        let total_waiting: i128 = completed.iter().map(|c| i128::from(c.waiting)).sum();
        let total_turnaround: i128 = completed.iter().map(|c| i128::from(c.turnaround)).sum();
        let total_burst: i64 = completed.iter().map(|c| c.burst).sum();
        let max_waiting = completed.iter().map(|c| c.waiting).max().unwrap_or(0);
        let makespan = completed.iter().map(|c| c.completion).max().unwrap_or(0);

        let (cpu_utilization, throughput) = if makespan > 0 {
            (
                total_burst as f64 / makespan as f64,
                n / makespan as f64,
            )
        } else {
            (0.0, 0.0)
        };

        Ok(Self {
            process_count: completed.len(),
            avg_waiting: total_waiting as f64 / n,
            avg_turnaround: total_turnaround as f64 / n,
            max_waiting,
            makespan,
            total_burst,
            cpu_utilization,
            throughput,
        })
    }

    /// Computes KPIs for a whole run.
    pub fn for_run(run: &SimulationRun) -> Result<Self, ValidationError> {
        Self::calculate(&run.completed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Process;

    fn done(id: &str, burst: i64, arrival: i64, completion: i64) -> CompletedProcess {
        CompletedProcess::finish(&Process::new(id, burst, arrival), completion)
    }

    #[test]
    fn test_kpi_basic() {
        // SJF over P1(5,0) P2(3,1) P3(1,2)
        let completed = vec![done("P1", 5, 0, 5), done("P3", 1, 2, 6), done("P2", 3, 1, 9)];
        let kpi = RunKpi::calculate(&completed).unwrap();

        assert_eq!(kpi.process_count, 3);
        assert!((kpi.avg_waiting - 8.0 / 3.0).abs() < 1e-10);
        assert!((kpi.avg_turnaround - 17.0 / 3.0).abs() < 1e-10);
        assert_eq!(kpi.max_waiting, 5);
        assert_eq!(kpi.makespan, 9);
        assert_eq!(kpi.total_burst, 9);
        assert!((kpi.cpu_utilization - 1.0).abs() < 1e-10);
        assert!((kpi.throughput - 3.0 / 9.0).abs() < 1e-10);
        assert_eq!(format!("{:.2}", kpi.avg_waiting), "2.67");
    }

    #[test]
    fn test_kpi_with_idle() {
        let completed = vec![done("A", 2, 0, 2), done("B", 2, 6, 8)];
        let kpi = RunKpi::calculate(&completed).unwrap();
        assert!((kpi.avg_waiting - 0.0).abs() < 1e-10);
        assert!((kpi.cpu_utilization - 0.5).abs() < 1e-10);
    }

    #[test]
    fn test_kpi_order_independent() {
        let a = vec![done("A", 2, 0, 2), done("B", 3, 1, 5)];
        let b = vec![done("B", 3, 1, 5), done("A", 2, 0, 2)];
        assert_eq!(RunKpi::calculate(&a).unwrap(), RunKpi::calculate(&b).unwrap());
    }

    #[test]
    fn test_kpi_large_totals_do_not_overflow() {
        let half = i64::MAX / 2;
        let completed = vec![
            done("A", half, 0, half),
            done("B", half, 0, 2 * half),
            done("C", 1, 0, 2 * half + 1),
        ];
        let kpi = RunKpi::calculate(&completed).unwrap();
        assert_eq!(kpi.makespan, 2 * half + 1);
        assert!(kpi.avg_turnaround > half as f64);
    }

    #[test]
    fn test_kpi_empty_rejected() {
        let err = RunKpi::calculate(&[]).unwrap_err();
        assert_eq!(err.kind, ValidationErrorKind::EmptyInput);
    }
}
