//! Preemptive selection schedulers (SRTF, preemptive priority).
//!
//! # Algorithm
//!
//! Event-driven: a decision is only needed when a process arrives or the
//! running process completes. Between those events the chosen process
//! stays the best candidate (its key only improves, everyone else's is
//! fixed), so the result matches unit-time stepping exactly.
//!
//! 1. Rank the ready processes with the rule engine.
//! 2. Run the winner until it completes or the next arrival, whichever is
//!    first.
//! 3. Extend the previous interval when the same process keeps the CPU.
//! 4. If nothing is ready, jump the clock to the next arrival.
//!
//! # Complexity
//! O(n²): at most 2n events, each scanning all processes.

use tracing::trace;

use super::{next_arrival_after, RunOutput};
use crate::dispatching::{rules, RuleEngine, SchedulingContext};
use crate::models::{Process, ProcessState, Time, Timeline};

/// Runs a preemptive schedule, re-selecting with `engine` at every
/// arrival and completion.
pub fn run_preemptive(processes: &[Process], engine: &RuleEngine) -> RunOutput {
    let mut states = ProcessState::snapshot(processes);
    let mut timeline = Timeline::new();
    let mut clock: Time = 0;

    loop {
        let ctx = SchedulingContext::at_time(clock);
        let next_arrival = next_arrival_after(&states, clock);
        match engine.select_ready(&states, &ctx) {
            Some(idx) => {
                let state = &mut states[idx];
                let slice = match next_arrival {
                    Some(arrival) => state.remaining.min(arrival - clock),
                    None => state.remaining,
                };
                let start = clock;
                clock += slice;
                trace!(pid = state.pid(), start, end = clock, "dispatch");
                if state.run(start, slice) {
                    trace!(pid = state.pid(), at = clock, "completed");
                }
                timeline.record(state.pid(), start, clock);
            }
            None => match next_arrival {
                Some(arrival) => {
                    trace!(from = clock, to = arrival, "cpu idle");
                    clock = arrival;
                }
                None => break,
            },
        }
    }

    RunOutput { timeline, states }
}

/// Shortest-remaining-time-first: least remaining, then earliest arrival,
/// then pid.
///
/// # Example
///
/// ```
/// use u_cpu_schedule::models::Process;
/// use u_cpu_schedule::scheduler::srtf;
///
/// let out = srtf(&[Process::new(1, 0, 8), Process::new(2, 1, 4)]);
/// let first = out.timeline.intervals()[0];
/// assert_eq!((first.pid, first.start, first.end), (1, 0, 1));
/// assert_eq!(out.timeline.intervals()[1].pid, 2);
/// ```
pub fn srtf(processes: &[Process]) -> RunOutput {
    let engine = RuleEngine::new()
        .with_rule(rules::ShortestRemaining)
        .with_rule(rules::EarliestArrival);
    run_preemptive(processes, &engine)
}

/// Preemptive priority: lowest priority value among ready processes, then
/// earliest arrival, then pid.
pub fn priority_preemptive(processes: &[Process]) -> RunOutput {
    let engine = RuleEngine::new()
        .with_rule(rules::HighestPriority)
        .with_rule(rules::EarliestArrival);
    run_preemptive(processes, &engine)
}
