//! Built-in selection rules.
//!
//! # Score Convention
//! All rules return lower scores for processes that should run first.

use super::{RuleScore, SchedulingContext, SelectionRule};
use crate::models::ProcessState;

/// Shortest total burst.
///
/// Primary key of non-preemptive shortest-job-first.
#[derive(Debug, Clone, Copy)]
pub struct ShortestBurst;

impl SelectionRule for ShortestBurst {
    fn name(&self) -> &'static str {
        "SJF"
    }

    fn evaluate(&self, state: &ProcessState, _context: &SchedulingContext) -> RuleScore {
        state.process.burst
    }
}

/// Shortest remaining time.
///
/// Primary key of shortest-remaining-time-first.
#[derive(Debug, Clone, Copy)]
pub struct ShortestRemaining;

impl SelectionRule for ShortestRemaining {
    fn name(&self) -> &'static str {
        "SRTF"
    }

    fn evaluate(&self, state: &ProcessState, _context: &SchedulingContext) -> RuleScore {
        state.remaining
    }
}

/// Numeric priority, lower value wins.
#[derive(Debug, Clone, Copy)]
pub struct HighestPriority;

impl SelectionRule for HighestPriority {
    fn name(&self) -> &'static str {
        "PRIORITY"
    }

    fn evaluate(&self, state: &ProcessState, _context: &SchedulingContext) -> RuleScore {
        RuleScore::from(state.process.priority)
    }
}

/// Earliest arrival.
///
/// The standard tie-breaker; on its own it orders like FCFS.
#[derive(Debug, Clone, Copy)]
pub struct EarliestArrival;

impl SelectionRule for EarliestArrival {
    fn name(&self) -> &'static str {
        "ARRIVAL"
    }

    fn evaluate(&self, state: &ProcessState, _context: &SchedulingContext) -> RuleScore {
        state.process.arrival
    }
}
