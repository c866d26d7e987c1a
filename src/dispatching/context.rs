//! Scheduling context for selection rule evaluation.

use crate::models::Time;

/// Runtime state passed to selection rules.
///
/// Carries the simulation clock used to decide which processes are ready.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SchedulingContext {
    /// Current simulation time.
    pub current_time: Time,
}

impl SchedulingContext {
    /// Creates a context at the given time.
    pub fn at_time(current_time: Time) -> Self {
        Self { current_time }
    }
}
