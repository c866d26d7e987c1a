//! Simulation facade.
//!
//! Validates input, runs one discipline on a private snapshot of the
//! processes, and assembles the timeline, metrics rows and KPIs into a
//! [`SimulationResult`].

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::{Algorithm, ScheduleKpi};
use crate::error::SimulationError;
use crate::models::{Pid, Process, ProcessMetrics, Timeline};
use crate::validation::validate_input;

/// Input container for a simulation.
///
/// Deserializable, so a scenario can be loaded from JSON:
///
/// ```
/// use u_cpu_schedule::scheduler::SimulationRequest;
///
/// let json = r#"{
///     "algorithm": { "round_robin": { "quantum": 2 } },
///     "processes": [
///         { "pid": 1, "arrival": 0, "burst": 5 },
///         { "pid": 2, "arrival": 1, "burst": 3, "priority": 1 }
///     ]
/// }"#;
/// let request: SimulationRequest = serde_json::from_str(json).unwrap();
/// let result = request.run().unwrap();
/// assert_eq!(result.timeline.intervals()[1].pid, 2);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimulationRequest {
    /// Processes to schedule.
    pub processes: Vec<Process>,
    /// Discipline and its parameters.
    pub algorithm: Algorithm,
}

impl SimulationRequest {
    /// Creates a new simulation request.
    pub fn new(processes: Vec<Process>, algorithm: Algorithm) -> Self {
        Self {
            processes,
            algorithm,
        }
    }

    /// Replaces the algorithm, keeping the process set.
    pub fn with_algorithm(mut self, algorithm: Algorithm) -> Self {
        self.algorithm = algorithm;
        self
    }

    /// Validates and runs the request.
    pub fn run(&self) -> Result<SimulationResult, SimulationError> {
        simulate(&self.processes, self.algorithm)
    }
}

/// Output of one simulation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationResult {
    /// Discipline that produced this result.
    pub algorithm: Algorithm,
    /// Execution intervals in start order.
    pub timeline: Timeline,
    /// Per-process metrics, ordered by pid.
    pub processes: Vec<ProcessMetrics>,
    /// Aggregate statistics.
    pub kpi: ScheduleKpi,
}

impl SimulationResult {
    /// Metrics row for a given process.
    pub fn metrics_for(&self, pid: Pid) -> Option<&ProcessMetrics> {
        self.processes.iter().find(|m| m.pid == pid)
    }
}

/// Validates `processes` and `algorithm`, then runs the simulation.
///
/// # Example
///
/// ```
/// use u_cpu_schedule::models::Process;
/// use u_cpu_schedule::scheduler::{simulate, Algorithm};
///
/// let processes = vec![Process::new(1, 0, 5), Process::new(2, 1, 3)];
/// let result = simulate(&processes, Algorithm::Fcfs).unwrap();
/// assert_eq!(result.metrics_for(2).unwrap().waiting, 4);
/// assert!((result.kpi.average_waiting - 2.0).abs() < 1e-10);
/// ```
pub fn simulate(
    processes: &[Process],
    algorithm: Algorithm,
) -> Result<SimulationResult, SimulationError> {
    validate_input(processes, &algorithm)?;

    debug!(%algorithm, processes = processes.len(), "starting simulation");
    let output = algorithm.run(processes);

    // Every discipline runs until no process has work left
    let mut metrics: Vec<ProcessMetrics> = output
        .states
        .iter()
        .map(|state| {
            ProcessMetrics::from_state(state)
                .unwrap_or_else(|| panic!("P{} unfinished after {algorithm}", state.pid()))
        })
        .collect();
    metrics.sort_by_key(|m| m.pid);

    let kpi = ScheduleKpi::calculate(&output.timeline, &metrics);
    debug!(
        %algorithm,
        intervals = output.timeline.len(),
        makespan = kpi.makespan,
        average_waiting = kpi.average_waiting,
        average_turnaround = kpi.average_turnaround,
        cpu_utilization = kpi.cpu_utilization,
        "simulation finished"
    );

    Ok(SimulationResult {
        algorithm,
        timeline: output.timeline,
        processes: metrics,
        kpi,
    })
}

/// Runs several disciplines back to back on the same process set.
///
/// Each run gets its own snapshot; results are in `algorithms` order.
pub fn compare(
    processes: &[Process],
    algorithms: &[Algorithm],
) -> Result<Vec<SimulationResult>, SimulationError> {
    algorithms
        .iter()
        .map(|&algorithm| simulate(processes, algorithm))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::ValidationErrorKind;

    fn sample() -> Vec<Process> {
        vec![
            Process::new(1, 0, 8).with_priority(3),
            Process::new(2, 1, 4).with_priority(1),
            Process::new(3, 2, 9).with_priority(4),
            Process::new(4, 3, 5).with_priority(2),
        ]
    }

    #[test]
    fn test_simulate_fcfs() {
        let result = simulate(&sample(), Algorithm::Fcfs).unwrap();
        assert_eq!(result.algorithm, Algorithm::Fcfs);
        assert_eq!(result.timeline.len(), 4);
        let pids: Vec<u32> = result.processes.iter().map(|m| m.pid).collect();
        assert_eq!(pids, vec![1, 2, 3, 4]);
        // Waits: 0, 7, 10, 18
        assert!((result.kpi.average_waiting - 8.75).abs() < 1e-10);
        assert!((result.kpi.cpu_utilization - 100.0).abs() < 1e-10);
    }

    #[test]
    fn test_simulate_rejects_invalid_input() {
        let err = simulate(&[], Algorithm::Sjf).unwrap_err();
        assert_eq!(
            err.validation_errors()[0].kind,
            ValidationErrorKind::EmptyProcessSet
        );

        let err = simulate(&sample(), Algorithm::RoundRobin { quantum: 0 }).unwrap_err();
        assert_eq!(
            err.validation_errors()[0].kind,
            ValidationErrorKind::NonPositiveQuantum
        );
    }

    #[test]
    fn test_simulate_rejects_clock_overflow() {
        let processes = [Process::new(1, i64::MAX - 2, 5)];
        for algorithm in Algorithm::all(2) {
            let err = simulate(&processes, algorithm).unwrap_err();
            assert_eq!(
                err.validation_errors()[0].kind,
                ValidationErrorKind::TimeOverflow
            );
        }
    }

    #[test]
    fn test_metrics_for() {
        let result = simulate(&sample(), Algorithm::Srtf).unwrap();
        let p2 = result.metrics_for(2).unwrap();
        assert_eq!(p2.completion, 5);
        assert_eq!(p2.waiting, 0);
        assert!(result.metrics_for(99).is_none());
    }

    #[test]
    fn test_compare_runs_independent_snapshots() {
        let processes = sample();
        let results = compare(&processes, &Algorithm::all(2)).unwrap();
        assert_eq!(results.len(), 6);
        for result in &results {
            assert_eq!(result.processes.len(), 4);
            assert_eq!(result.kpi.busy_time, 26);
        }
        // The caller's descriptors are untouched
        assert_eq!(processes, sample());
        // Rerunning any discipline gives the same answer
        assert_eq!(results[2], simulate(&processes, Algorithm::Srtf).unwrap());
    }

    #[test]
    fn test_every_process_gets_a_metrics_row() {
        // Idle gaps before, between and after bursts
        let processes = vec![
            Process::new(4, 20, 1),
            Process::new(2, 3, 2).with_priority(1),
            Process::new(9, 3, 1),
            Process::new(1, 10, 4).with_priority(-2),
        ];
        for result in compare(&processes, &Algorithm::all(1)).unwrap() {
            let pids: Vec<u32> = result.processes.iter().map(|m| m.pid).collect();
            assert_eq!(pids, vec![1, 2, 4, 9], "{}", result.algorithm);
        }
    }

    #[test]
    fn test_compare_propagates_errors() {
        let algorithms = [Algorithm::Fcfs, Algorithm::RoundRobin { quantum: -3 }];
        assert!(compare(&sample(), &algorithms).is_err());
    }

    #[test]
    fn test_request_with_algorithm() {
        let request = SimulationRequest::new(sample(), Algorithm::Fcfs)
            .with_algorithm(Algorithm::Priority { preemptive: false });
        let result = request.run().unwrap();
        let order: Vec<u32> = result.timeline.intervals().iter().map(|i| i.pid).collect();
        assert_eq!(order, vec![1, 2, 4, 3]);
    }

    #[test]
    fn test_result_serializes() {
        let result = simulate(&sample(), Algorithm::Sjf).unwrap();
        let json = serde_json::to_string(&result).unwrap();
        assert!(json.contains("\"algorithm\":\"sjf\""));
        let back: SimulationResult = serde_json::from_str(&json).unwrap();
        assert_eq!(back.timeline, result.timeline);
        assert_eq!(back.processes, result.processes);
    }

    #[test]
    fn test_request_roundtrip_from_json() {
        let json = r#"{"processes":[{"pid":1,"arrival":0,"burst":3,"priority":2}],"algorithm":{"priority":{"preemptive":true}}}"#;
        let request: SimulationRequest = serde_json::from_str(json).unwrap();
        assert_eq!(request.algorithm, Algorithm::Priority { preemptive: true });
        assert_eq!(request.processes[0].priority, 2);
    }
}
