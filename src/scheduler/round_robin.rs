//! Round robin.
//!
//! # Algorithm
//!
//! 1. Order processes by (arrival, pid); admit arrivals into a FIFO ready
//!    queue in that order as the clock reaches them.
//! 2. Dequeue the head and run it for `min(quantum, remaining)`, one
//!    interval per slice.
//! 3. Admit everything that arrived by the end of the slice, *then*
//!    re-enqueue the preempted process if it still has work left.
//! 4. If the queue is empty with work left, jump to the next arrival.
//!
//! # Complexity
//! O(n + Σ⌈burst/quantum⌉) slices.

use std::collections::VecDeque;

use tracing::trace;

use super::RunOutput;
use crate::models::{Process, ProcessState, Time, Timeline};

/// Runs round robin with the given `quantum` on a private snapshot of
/// `processes`.
///
/// # Panics
/// If `quantum` is not positive.
///
/// # Example
///
/// ```
/// use u_cpu_schedule::models::Process;
/// use u_cpu_schedule::scheduler::round_robin;
///
/// let out = round_robin(&[Process::new(1, 0, 5), Process::new(2, 1, 3)], 2);
/// let order: Vec<u32> = out.timeline.intervals().iter().map(|i| i.pid).collect();
/// assert_eq!(order, vec![1, 2, 1, 2, 1]);
/// ```
pub fn round_robin(processes: &[Process], quantum: Time) -> RunOutput {
    assert!(quantum > 0, "round robin quantum must be positive, got {quantum}");

    let mut states = ProcessState::snapshot(processes);
    states.sort_by_key(|s| (s.arrival(), s.pid()));

    let mut timeline = Timeline::new();
    let mut queue: VecDeque<usize> = VecDeque::with_capacity(states.len());
    let mut admitted = 0;
    let mut clock: Time = 0;

    loop {
        admit(&states, &mut admitted, clock, &mut queue);

        let Some(idx) = queue.pop_front() else {
            match states.get(admitted) {
                Some(next) => {
                    trace!(from = clock, to = next.arrival(), "cpu idle");
                    clock = next.arrival();
                    continue;
                }
                None => break,
            }
        };

        let state = &mut states[idx];
        let slice = quantum.min(state.remaining);
        let start = clock;
        clock += slice;
        trace!(pid = state.pid(), start, end = clock, "dispatch");
        let finished = state.run(start, slice);
        timeline.push(state.pid(), start, clock);

        // Arrivals during the slice queue ahead of the preempted process
        admit(&states, &mut admitted, clock, &mut queue);
        if !finished {
            queue.push_back(idx);
        }
    }

    RunOutput { timeline, states }
}

/// Enqueues every not-yet-admitted process with arrival <= `now`.
///
/// `states` must be sorted by (arrival, pid).
fn admit(states: &[ProcessState], admitted: &mut usize, now: Time, queue: &mut VecDeque<usize>) {
    while let Some(state) = states.get(*admitted) {
        if state.arrival() > now {
            break;
        }
        queue.push_back(*admitted);
        *admitted += 1;
    }
}
