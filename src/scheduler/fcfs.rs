//! First-come-first-served.
//!
//! # Algorithm
//!
//! 1. Order processes by (arrival, pid).
//! 2. Walk the order with a clock starting at 0; if the clock is behind a
//!    process's arrival, jump to it (the CPU idles).
//! 3. Run each process for its full burst as one interval.
//!
//! # Complexity
//! O(n log n) for the sort, then exactly n steps.

use tracing::trace;

use super::RunOutput;
use crate::models::{Process, ProcessState, Time, Timeline};

/// Runs first-come-first-served on a private snapshot of `processes`.
///
/// # Example
///
/// ```
/// use u_cpu_schedule::models::Process;
/// use u_cpu_schedule::scheduler::fcfs;
///
/// let out = fcfs(&[Process::new(1, 0, 5), Process::new(2, 1, 3)]);
/// let spans: Vec<_> = out.timeline.intervals().iter().map(|i| (i.pid, i.start, i.end)).collect();
/// assert_eq!(spans, vec![(1, 0, 5), (2, 5, 8)]);
/// ```
pub fn fcfs(processes: &[Process]) -> RunOutput {
    let mut states = ProcessState::snapshot(processes);
    states.sort_by_key(|s| (s.arrival(), s.pid()));

    let mut timeline = Timeline::new();
    let mut clock: Time = 0;

    for state in &mut states {
        if clock < state.arrival() {
            trace!(from = clock, to = state.arrival(), "cpu idle");
            clock = state.arrival();
        }
        let (start, burst) = (clock, state.remaining);
        clock += burst;
        trace!(pid = state.pid(), start, end = clock, "dispatch");
        state.run(start, burst);
        timeline.push(state.pid(), start, clock);
    }

    RunOutput { timeline, states }
}
