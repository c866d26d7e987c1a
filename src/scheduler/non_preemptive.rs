//! Non-preemptive selection schedulers (SJF, priority).
//!
//! # Algorithm
//!
//! 1. Whenever the CPU is free, rank the processes that have arrived and
//!    are unfinished with the rule engine.
//! 2. Run the winner to completion as one interval.
//! 3. If nothing has arrived, jump the clock to the earliest pending
//!    arrival.
//!
//! # Complexity
//! O(n²): n decisions, each scanning all processes.

use tracing::trace;

use super::{next_arrival_after, RunOutput};
use crate::dispatching::{rules, RuleEngine, SchedulingContext};
use crate::models::{Process, ProcessState, Time, Timeline};

/// Runs each selected process to completion, choosing with `engine`.
pub fn run_to_completion(processes: &[Process], engine: &RuleEngine) -> RunOutput {
    let mut states = ProcessState::snapshot(processes);
    let mut timeline = Timeline::new();
    let mut clock: Time = 0;

    loop {
        let ctx = SchedulingContext::at_time(clock);
        match engine.select_ready(&states, &ctx) {
            Some(idx) => {
                let state = &mut states[idx];
                let (start, burst) = (clock, state.remaining);
                clock += burst;
                trace!(pid = state.pid(), start, end = clock, "dispatch");
                state.run(start, burst);
                timeline.push(state.pid(), start, clock);
            }
            None => match next_arrival_after(&states, clock) {
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

/// Shortest-job-first: smallest burst, then earliest arrival, then pid.
///
/// # Example
///
/// ```
/// use u_cpu_schedule::models::Process;
/// use u_cpu_schedule::scheduler::sjf;
///
/// let out = sjf(&[
///     Process::new(1, 0, 8),
///     Process::new(2, 1, 4),
///     Process::new(3, 2, 9),
///     Process::new(4, 3, 5),
/// ]);
/// let order: Vec<u32> = out.timeline.intervals().iter().map(|i| i.pid).collect();
/// assert_eq!(order, vec![1, 2, 4, 3]);
/// ```
pub fn sjf(processes: &[Process]) -> RunOutput {
    let engine = RuleEngine::new()
        .with_rule(rules::ShortestBurst)
        .with_rule(rules::EarliestArrival);
    run_to_completion(processes, &engine)
}

/// Non-preemptive priority: lowest priority value, then earliest arrival,
/// then pid.
pub fn priority_non_preemptive(processes: &[Process]) -> RunOutput {
    let engine = RuleEngine::new()
        .with_rule(rules::HighestPriority)
        .with_rule(rules::EarliestArrival);
    run_to_completion(processes, &engine)
}
