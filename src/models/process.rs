//! Process (job) model.
//!
//! A process is a CPU-bound job with a fixed burst. `Process` is the
//! immutable descriptor supplied by the caller; `ProcessState` is the
//! mutable bookkeeping one simulation run keeps for it.
//!
//! # Time Representation
//! All times are integer ticks relative to the simulation epoch (t=0).

use serde::{Deserialize, Serialize};

/// Process identifier.
pub type Pid = u32;

/// Simulation time in ticks.
pub type Time = i64;

/// A process descriptor.
///
/// Never mutated once a simulation starts. Every algorithm builds its own
/// [`ProcessState`] from a borrowed descriptor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Process {
    /// Unique process identifier.
    pub pid: Pid,
    /// Instant the process becomes eligible to run (>= 0).
    pub arrival: Time,
    /// Total CPU time required (> 0).
    pub burst: Time,
    /// Scheduling priority (lower = more important).
    #[serde(default)]
    pub priority: i32,
}

impl Process {
    /// Creates a process with priority 0.
    pub fn new(pid: Pid, arrival: Time, burst: Time) -> Self {
        Self {
            pid,
            arrival,
            burst,
            priority: 0,
        }
    }

    /// Sets the scheduling priority.
    pub fn with_priority(mut self, priority: i32) -> Self {
        self.priority = priority;
        self
    }
}

/// Per-run state of a process.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProcessState {
    /// The descriptor this state tracks.
    pub process: Process,
    /// CPU time still owed. Reaches 0 exactly once.
    pub remaining: Time,
    /// Instant the process first got the CPU.
    pub first_start: Option<Time>,
    /// Instant `remaining` reached 0.
    pub completion: Option<Time>,
}

impl ProcessState {
    /// Fresh state for a process that has not run yet.
    pub fn new(process: Process) -> Self {
        Self {
            process,
            remaining: process.burst,
            first_start: None,
            completion: None,
        }
    }

    /// Builds fresh states for every descriptor in `processes`.
    pub fn snapshot(processes: &[Process]) -> Vec<Self> {
        processes.iter().copied().map(Self::new).collect()
    }

    #[inline]
    pub fn pid(&self) -> Pid {
        self.process.pid
    }

    #[inline]
    pub fn arrival(&self) -> Time {
        self.process.arrival
    }

    /// Whether the process has arrived and still needs CPU at `now`.
    #[inline]
    pub fn is_ready(&self, now: Time) -> bool {
        self.process.arrival <= now && self.remaining > 0
    }

    #[inline]
    pub fn is_finished(&self) -> bool {
        self.remaining == 0
    }

    /// Runs the process for `amount` ticks starting at `start`.
    ///
    /// Returns `true` if this slice completed the process.
    ///
    /// # Panics
    /// If `amount` is not in `1..=remaining`.
    pub fn run(&mut self, start: Time, amount: Time) -> bool {
        assert!(
            amount > 0 && amount <= self.remaining,
            "P{} cannot run {amount} of {} remaining ticks",
            self.process.pid,
            self.remaining
        );
        self.first_start.get_or_insert(start);
        self.remaining -= amount;
        if self.remaining == 0 {
            self.completion = Some(start + amount);
            true
        } else {
            false
        }
    }

    /// Completion minus arrival.
    pub fn turnaround(&self) -> Option<Time> {
        self.completion.map(|c| c - self.process.arrival)
    }

    /// Turnaround minus burst.
    pub fn waiting(&self) -> Option<Time> {
        self.turnaround().map(|t| t - self.process.burst)
    }

    /// First start minus arrival.
    pub fn response(&self) -> Option<Time> {
        self.first_start.map(|s| s - self.process.arrival)
    }
}

/// Finalized metrics row for one process.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProcessMetrics {
    pub pid: Pid,
    pub arrival: Time,
    pub burst: Time,
    pub priority: i32,
    pub completion: Time,
    pub waiting: Time,
    pub turnaround: Time,
    pub response: Time,
}

impl ProcessMetrics {
    /// Extracts the metrics row from a completed state.
    ///
    /// Returns `None` if the process never finished.
    pub fn from_state(state: &ProcessState) -> Option<Self> {
        let p = state.process;
        Some(Self {
            pid: p.pid,
            arrival: p.arrival,
            burst: p.burst,
            priority: p.priority,
            completion: state.completion?,
            waiting: state.waiting()?,
            turnaround: state.turnaround()?,
            response: state.response()?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_process_builder() {
        let p = Process::new(3, 2, 7).with_priority(4);
        assert_eq!(p.pid, 3);
        assert_eq!(p.arrival, 2);
        assert_eq!(p.burst, 7);
        assert_eq!(p.priority, 4);
    }

    #[test]
    fn test_state_starts_unrun() {
        let s = ProcessState::new(Process::new(1, 0, 5));
        assert_eq!(s.remaining, 5);
        assert!(s.first_start.is_none());
        assert!(s.completion.is_none());
        assert!(s.waiting().is_none());
        assert!(!s.is_finished());
    }

    #[test]
    fn test_run_to_completion() {
        let mut s = ProcessState::new(Process::new(1, 2, 5));
        assert!(!s.run(4, 3));
        assert_eq!(s.remaining, 2);
        assert_eq!(s.first_start, Some(4));
        assert!(s.run(9, 2));
        assert_eq!(s.completion, Some(11));
        assert_eq!(s.turnaround(), Some(9));
        assert_eq!(s.waiting(), Some(4));
        assert_eq!(s.response(), Some(2));
        // First start is not overwritten by later slices
        assert_eq!(s.first_start, Some(4));
    }

    #[test]
    #[should_panic(expected = "cannot run")]
    fn test_run_rejects_empty_slice() {
        ProcessState::new(Process::new(1, 0, 0)).run(0, 0);
    }

    #[test]
    #[should_panic(expected = "cannot run 4 of 3")]
    fn test_run_rejects_overrun() {
        ProcessState::new(Process::new(1, 0, 3)).run(0, 4);
    }

    #[test]
    fn test_is_ready() {
        let mut s = ProcessState::new(Process::new(1, 3, 1));
        assert!(!s.is_ready(2));
        assert!(s.is_ready(3));
        s.run(3, 1);
        assert!(!s.is_ready(10));
    }

    #[test]
    fn test_snapshot_is_independent() {
        let processes = vec![Process::new(1, 0, 2), Process::new(2, 1, 3)];
        let mut a = ProcessState::snapshot(&processes);
        let b = ProcessState::snapshot(&processes);
        a[0].run(0, 2);
        assert_eq!(b[0].remaining, 2);
        assert_eq!(processes[0].burst, 2);
    }

    #[test]
    fn test_metrics_from_state() {
        let mut s = ProcessState::new(Process::new(7, 1, 3).with_priority(2));
        assert!(ProcessMetrics::from_state(&s).is_none());
        s.run(5, 3);
        let m = ProcessMetrics::from_state(&s).unwrap();
        assert_eq!(m.pid, 7);
        assert_eq!(m.priority, 2);
        assert_eq!(m.completion, 8);
        assert_eq!(m.turnaround, 7);
        assert_eq!(m.waiting, 4);
        assert_eq!(m.response, 4);
    }

    #[test]
    fn test_priority_defaults_when_missing() {
        let p: Process = serde_json::from_str(r#"{"pid":1,"arrival":0,"burst":4}"#).unwrap();
        assert_eq!(p.priority, 0);
    }
}
