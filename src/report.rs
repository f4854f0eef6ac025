//! Plain-text reporting.
//!
//! Renders simulation results as the fixed-width report:
//!
//! ```text
//! --- First Come First Serve (FCFS) ---
//! Process | Arrival | Burst | Waiting | Turnaround
//! -------------------------------------------------
//! P1      | 0       | 5     | 0       | 5
//! ...
//! Average Waiting Time: 3.33
//! Average Turnaround Time: 6.33
//! Gantt Chart: P1 -> P2 -> P3
//! ==================================================
//! ```
//!
//! Processes are listed by identifier, averages use two decimals.

use std::io;

use crate::models::{Process, SimulationRun};
use crate::scheduler::RunKpi;
use crate::simulation::SimulationReport;

const TABLE_RULE: &str = "-------------------------------------------------";

fn section_rule() -> String {
    "=".repeat(50)
}

/// Renders the input process set.
pub fn render_initial(processes: &[Process]) -> String {
    let mut out = String::from("Initial Process Data:\n");
    for p in processes {
        out.push_str(&format!(
            "PID: {}, Burst: {}, Arrival: {}\n",
            p.id, p.burst, p.arrival
        ));
    }
    out.push_str(&section_rule());
    out.push('\n');
    out
}

/// Renders one run: table, averages and Gantt chart.
pub fn render_run(run: &SimulationRun, kpi: &RunKpi) -> String {
    let mut out = String::new();
    out.push_str(&format!("\n--- {} ---\n", run.algorithm));
    out.push_str("Process | Arrival | Burst | Waiting | Turnaround\n");
    out.push_str(TABLE_RULE);
    out.push('\n');

    for c in run.completed_by_id() {
        out.push_str(&format!(
            "{:<8}| {:<8}| {:<6}| {:<8}| {:<10}\n",
            c.id, c.arrival, c.burst, c.waiting, c.turnaround
        ));
    }

    out.push('\n');
    out.push_str(TABLE_RULE);
    out.push('\n');
    out.push_str(&format!("Average Waiting Time: {:.2}\n", kpi.avg_waiting));
    out.push_str(&format!("Average Turnaround Time: {:.2}\n", kpi.avg_turnaround));
    out.push_str(&format!(
        "Gantt Chart: {}\n",
        run.execution_sequence().join(" -> ")
    ));
    out.push_str(&section_rule());
    out.push('\n');
    out
}

/// Renders the full report: initial data followed by every run.
pub fn render_report(report: &SimulationReport) -> String {
    let mut out = render_initial(&report.initial);
    for result in &report.runs {
        out.push_str(&render_run(&result.run, &result.kpi));
    }
    out
}

/// Writes the full report to `writer`.
pub fn write_report<W: io::Write>(mut writer: W, report: &SimulationReport) -> io::Result<()> {
    writer.write_all(render_report(report).as_bytes())?;
    writer.flush()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Algorithm;
    use crate::scheduler::run;
    use crate::simulation::Simulation;

    fn sample() -> Vec<Process> {
        vec![
            Process::new("P1", 5, 0),
            Process::new("P2", 3, 1),
            Process::new("P3", 1, 2),
        ]
    }

    #[test]
    fn test_render_initial() {
        let text = render_initial(&sample());
        assert!(text.starts_with("Initial Process Data:\nPID: P1, Burst: 5, Arrival: 0\n"));
        assert!(text.ends_with(&format!("{}\n", "=".repeat(50))));
    }

    #[test]
    fn test_render_run_sjf() {
        let result = run(&sample(), Algorithm::Sjf).unwrap();
        let kpi = RunKpi::for_run(&result).unwrap();
        let text = render_run(&result, &kpi);

        assert!(text.contains("--- Shortest Job First (SJF) Non-Preemptive ---"));
        assert!(text.contains("P1      | 0       | 5     | 0       | 5         \n"));
        assert!(text.contains("P3      | 2       | 1     | 3       | 4         \n"));
        assert!(text.contains("Average Waiting Time: 2.67\n"));
        assert!(text.contains("Average Turnaround Time: 5.67\n"));
        assert!(text.contains("Gantt Chart: P1 -> P3 -> P2\n"));

        // table rows are listed by id even though P3 completed before P2
        let p2 = text.find("P2      |").unwrap();
        let p3 = text.find("P3      |").unwrap();
        assert!(p2 < p3);
    }

    #[test]
    fn test_render_run_exact_layout() {
        let result = run(&[Process::new("A", 2, 0)], Algorithm::Fcfs).unwrap();
        let kpi = RunKpi::for_run(&result).unwrap();
        let expected = format!(
            "\n--- First Come First Serve (FCFS) ---\n\
             Process | Arrival | Burst | Waiting | Turnaround\n\
             {TABLE_RULE}\n\
             A       | 0       | 2     | 0       | 2         \n\
             \n\
             {TABLE_RULE}\n\
             Average Waiting Time: 0.00\n\
             Average Turnaround Time: 2.00\n\
             Gantt Chart: A\n\
             {}\n",
            "=".repeat(50)
        );
        assert_eq!(render_run(&result, &kpi), expected);
    }

    #[test]
    fn test_write_report() {
        let report = Simulation::default().run_all(&sample()).unwrap();
        let mut buf = Vec::new();
        write_report(&mut buf, &report).unwrap();
        let text = String::from_utf8(buf).unwrap();

        assert!(text.contains("Round Robin (Quantum = 2)"));
        assert!(text.contains("Gantt Chart: P1 -> P2 -> P3 -> P1 -> P2 -> P1\n"));
        assert_eq!(text.matches("Average Waiting Time:").count(), 5);
    }
}
