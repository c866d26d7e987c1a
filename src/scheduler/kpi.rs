//! Schedule quality metrics (KPIs).
//!
//! Computes summary statistics from a finished timeline and the
//! per-process metrics rows.
//!
//! # Metrics
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Avg Waiting | mean(turnaround - burst) |
//! | Avg Turnaround | mean(completion - arrival) |
//! | Avg Response | mean(first start - arrival) |
//! | CPU Utilization | busy / makespan × 100 (0 for an empty timeline) |
//! | Throughput | processes / makespan |
//! | Context Switches | adjacent intervals with different processes |

use serde::{Deserialize, Serialize};

use crate::models::{ProcessMetrics, Time, Timeline};

/// Simulation performance indicators.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScheduleKpi {
    /// Mean waiting time.
    pub average_waiting: f64,
    /// Mean turnaround time.
    pub average_turnaround: f64,
    /// Mean response time.
    pub average_response: f64,
    /// Largest single waiting time.
    pub max_waiting: Time,
    /// Percentage of `[0, makespan)` the CPU was busy (0.0..=100.0).
    pub cpu_utilization: f64,
    /// End of the last interval.
    pub makespan: Time,
    /// Total time spent executing.
    pub busy_time: Time,
    /// Total idle time before the makespan.
    pub idle_time: Time,
    /// Completed processes per time unit.
    pub throughput: f64,
    /// Number of switches between different processes.
    pub context_switches: usize,
}

impl ScheduleKpi {
    /// Computes KPIs from a timeline and its finalized metrics rows.
    pub fn calculate(timeline: &Timeline, metrics: &[ProcessMetrics]) -> Self {
        let makespan = timeline.makespan();
        let busy_time = timeline.busy_time();

        let cpu_utilization = if makespan <= 0 {
            0.0
        } else {
            busy_time as f64 / makespan as f64 * 100.0
        };

        let throughput = if makespan <= 0 {
            0.0
        } else {
            metrics.len() as f64 / makespan as f64
        };

        Self {
            average_waiting: mean(metrics.iter().map(|m| m.waiting)),
            average_turnaround: mean(metrics.iter().map(|m| m.turnaround)),
            average_response: mean(metrics.iter().map(|m| m.response)),
            max_waiting: metrics.iter().map(|m| m.waiting).max().unwrap_or(0),
            cpu_utilization,
            makespan,
            busy_time,
            idle_time: timeline.idle_time(),
            throughput,
            context_switches: timeline.context_switches(),
        }
    }
}

fn mean(values: impl ExactSizeIterator<Item = Time>) -> f64 {
    let n = values.len();
    if n == 0 {
        return 0.0;
    }
    values.map(|v| v as f64).sum::<f64>() / n as f64
}
