//! Scheduling disciplines, KPI evaluation and the simulation facade.
//!
//! # Algorithms
//!
//! | Discipline | Preemptive | Selection key |
//! |------------|-----------|---------------|
//! | FCFS | no | arrival |
//! | SJF | no | burst |
//! | SRTF | yes (at arrivals) | remaining |
//! | Round Robin | yes (quantum) | FIFO queue |
//! | Priority | no | priority |
//! | Priority (P) | yes (at arrivals) | priority |
//!
//! Every selection key is tie-broken by earliest arrival, then process id.
//! Each algorithm takes a borrowed descriptor slice and owns every state
//! it mutates, so repeated or concurrent runs never interfere.
//!
//! # References
//!
//! - Silberschatz, Galvin & Gagne (2018), "Operating System Concepts", Ch. 5
//! - Tanenbaum & Bos (2014), "Modern Operating Systems", Ch. 2.4

mod fcfs;
mod kpi;
mod non_preemptive;
mod preemptive;
mod round_robin;
mod simulator;

pub use fcfs::fcfs;
pub use kpi::ScheduleKpi;
pub use non_preemptive::{priority_non_preemptive, run_to_completion, sjf};
pub use preemptive::{priority_preemptive, run_preemptive, srtf};
pub use round_robin::round_robin;
pub use simulator::{compare, simulate, SimulationRequest, SimulationResult};

use serde::{Deserialize, Serialize};

use crate::models::{Process, ProcessState, Time, Timeline};

/// Raw output of one algorithm invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunOutput {
    /// Execution intervals in start order.
    pub timeline: Timeline,
    /// Final state of every process (order unspecified).
    pub states: Vec<ProcessState>,
}

/// A scheduling discipline and its parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Algorithm {
    /// First-come-first-served.
    Fcfs,
    /// Shortest-job-first, non-preemptive.
    Sjf,
    /// Shortest-remaining-time-first.
    Srtf,
    /// Round robin with a fixed quantum (> 0).
    RoundRobin { quantum: Time },
    /// Priority scheduling, lower value first.
    Priority { preemptive: bool },
}

impl Algorithm {
    /// Short display name.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Fcfs => "FCFS",
            Self::Sjf => "SJF",
            Self::Srtf => "SRTF",
            Self::RoundRobin { .. } => "Round Robin",
            Self::Priority { preemptive: false } => "Priority",
            Self::Priority { preemptive: true } => "Priority (preemptive)",
        }
    }

    /// Whether the discipline can take the CPU away from a running process.
    pub fn is_preemptive(&self) -> bool {
        match self {
            Self::Fcfs | Self::Sjf => false,
            Self::Srtf | Self::RoundRobin { .. } => true,
            Self::Priority { preemptive } => *preemptive,
        }
    }

    /// Runs the discipline on a private snapshot of `processes`.
    ///
    /// Assumes validated input; see [`crate::validation::validate_input`].
    pub fn run(&self, processes: &[Process]) -> RunOutput {
        match *self {
            Self::Fcfs => fcfs(processes),
            Self::Sjf => sjf(processes),
            Self::Srtf => srtf(processes),
            Self::RoundRobin { quantum } => round_robin(processes, quantum),
            Self::Priority { preemptive: false } => priority_non_preemptive(processes),
            Self::Priority { preemptive: true } => priority_preemptive(processes),
        }
    }

    /// All six disciplines, using `quantum` for round robin.
    pub fn all(quantum: Time) -> [Algorithm; 6] {
        [
            Self::Fcfs,
            Self::Sjf,
            Self::Srtf,
            Self::RoundRobin { quantum },
            Self::Priority { preemptive: false },
            Self::Priority { preemptive: true },
        ]
    }
}

impl std::fmt::Display for Algorithm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::RoundRobin { quantum } => write!(f, "{} (q={quantum})", self.name()),
            _ => f.write_str(self.name()),
        }
    }
}

/// Earliest arrival strictly after `now` among unfinished processes.
fn next_arrival_after(states: &[ProcessState], now: Time) -> Option<Time> {
    states
        .iter()
        .filter(|s| !s.is_finished() && s.arrival() > now)
        .map(ProcessState::arrival)
        .min()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_algorithm_names() {
        assert_eq!(Algorithm::Fcfs.name(), "FCFS");
        assert_eq!(Algorithm::RoundRobin { quantum: 3 }.to_string(), "Round Robin (q=3)");
        assert_eq!(
            Algorithm::Priority { preemptive: true }.to_string(),
            "Priority (preemptive)"
        );
    }

    #[test]
    fn test_is_preemptive() {
        assert!(!Algorithm::Fcfs.is_preemptive());
        assert!(!Algorithm::Sjf.is_preemptive());
        assert!(Algorithm::Srtf.is_preemptive());
        assert!(Algorithm::RoundRobin { quantum: 1 }.is_preemptive());
        assert!(!Algorithm::Priority { preemptive: false }.is_preemptive());
        assert!(Algorithm::Priority { preemptive: true }.is_preemptive());
    }

    #[test]
    fn test_all_has_six_distinct() {
        let all = Algorithm::all(2);
        for (i, a) in all.iter().enumerate() {
            assert!(all[i + 1..].iter().all(|b| b != a));
        }
    }

    #[test]
    fn test_algorithm_serde() {
        let json = serde_json::to_string(&Algorithm::RoundRobin { quantum: 2 }).unwrap();
        assert_eq!(json, r#"{"round_robin":{"quantum":2}}"#);
        let a: Algorithm = serde_json::from_str(r#""srtf""#).unwrap();
        assert_eq!(a, Algorithm::Srtf);
        let p: Algorithm = serde_json::from_str(r#"{"priority":{"preemptive":true}}"#).unwrap();
        assert_eq!(p, Algorithm::Priority { preemptive: true });
    }

    #[test]
    fn test_next_arrival_after() {
        let mut states = ProcessState::snapshot(&[
            Process::new(1, 0, 2),
            Process::new(2, 4, 1),
            Process::new(3, 7, 1),
        ]);
        assert_eq!(next_arrival_after(&states, 0), Some(4));
        states[1].run(4, 1);
        assert_eq!(next_arrival_after(&states, 0), Some(7));
        assert_eq!(next_arrival_after(&states, 7), None);
    }
}
