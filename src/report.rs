//! Plain-text rendering of simulation results.
//!
//! Produces a one-line Gantt chart, the per-process metrics table and
//! the aggregate averages.

use std::fmt;

use crate::models::Timeline;
use crate::scheduler::SimulationResult;

const RULE_WIDTH: usize = 70;

/// One-line Gantt chart of a timeline.
struct Gantt<'a>(&'a Timeline);

impl fmt::Display for Gantt<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for interval in self.0.intervals() {
            write!(f, "| P{} {}-{} ", interval.pid, interval.start, interval.end)?;
        }
        f.write_str("|")
    }
}

/// Renders a timeline as `| P1 0-5 | P2 5-8 |`.
pub fn gantt_line(timeline: &Timeline) -> String {
    Gantt(timeline).to_string()
}

/// Renders the full report for one simulation.
pub fn render(result: &SimulationResult) -> String {
    result.to_string()
}

impl fmt::Display for SimulationResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rule = "-".repeat(RULE_WIDTH);

        writeln!(f, "{}", self.algorithm)?;
        writeln!(f, "\nGantt Chart:")?;
        writeln!(f, "{}", Gantt(&self.timeline))?;

        writeln!(f, "{rule}")?;
        writeln!(
            f,
            "{:<6}{:<10}{:<10}{:<12}{:<12}{:<12}",
            "PID", "AT", "BT", "CT", "WT", "TAT"
        )?;
        writeln!(f, "{rule}")?;
        for m in &self.processes {
            writeln!(
                f,
                "{:<6}{:<10}{:<10}{:<12}{:<12}{:<12}",
                m.pid, m.arrival, m.burst, m.completion, m.waiting, m.turnaround
            )?;
        }
        writeln!(f, "{rule}")?;

        writeln!(f, "Average Waiting Time   : {:.2}", self.kpi.average_waiting)?;
        writeln!(f, "Average Turnaround Time: {:.2}", self.kpi.average_turnaround)?;
        write!(f, "CPU Utilization        : {:.2}%", self.kpi.cpu_utilization)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Process;
    use crate::scheduler::{simulate, Algorithm};

    #[test]
    fn test_gantt_line() {
        let mut t = Timeline::new();
        t.push(1, 0, 5);
        t.push(2, 5, 8);
        assert_eq!(gantt_line(&t), "| P1 0-5 | P2 5-8 |");
    }

    #[test]
    fn test_gantt_line_empty() {
        assert_eq!(gantt_line(&Timeline::new()), "|");
    }

    #[test]
    fn test_report_embeds_gantt_line() {
        let result = simulate(&[Process::new(1, 2, 5)], Algorithm::RoundRobin { quantum: 2 }).unwrap();
        let report = render(&result);
        assert_eq!(gantt_line(&result.timeline), "| P1 2-4 | P1 4-6 | P1 6-7 |");
        assert!(report.contains("Gantt Chart:\n| P1 2-4 | P1 4-6 | P1 6-7 |\n"));
    }

    #[test]
    fn test_render_report() {
        let result = simulate(
            &[Process::new(1, 0, 5), Process::new(2, 1, 3)],
            Algorithm::Fcfs,
        )
        .unwrap();
        let report = render(&result);

        assert!(report.starts_with("FCFS\n"));
        assert!(report.contains("| P1 0-5 | P2 5-8 |"));
        assert!(report.contains("PID   AT        BT        CT          WT          TAT"));
        assert!(report.contains("2     1         3         8           4           7"));
        assert!(report.contains("Average Waiting Time   : 2.00"));
        assert!(report.contains("Average Turnaround Time: 6.00"));
        assert!(report.ends_with("CPU Utilization        : 100.00%"));
    }
}
