//! Timeline (Gantt chart) model.
//!
//! A timeline is the ordered sequence of execution intervals produced by
//! one simulation run. The processor is idle in any range no interval
//! covers.

use serde::{Deserialize, Serialize};

use super::{Pid, Time};

/// One contiguous stretch of CPU time given to a process.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExecutionInterval {
    /// Process that held the CPU.
    pub pid: Pid,
    /// Start instant (inclusive).
    pub start: Time,
    /// End instant (exclusive). Always greater than `start`.
    pub end: Time,
}

impl ExecutionInterval {
    /// Creates a new interval.
    pub fn new(pid: Pid, start: Time, end: Time) -> Self {
        debug_assert!(end > start, "empty interval for P{pid}: {start}-{end}");
        Self { pid, start, end }
    }

    /// Length of the interval.
    #[inline]
    pub fn duration(&self) -> Time {
        self.end - self.start
    }

    /// Whether two intervals share any instant.
    #[inline]
    pub fn overlaps(&self, other: &ExecutionInterval) -> bool {
        self.start < other.end && other.start < self.end
    }
}

/// Ordered, non-overlapping execution intervals.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Timeline {
    intervals: Vec<ExecutionInterval>,
}

impl Timeline {
    /// Creates an empty timeline.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends `[start, end)` for `pid` as a separate interval.
    pub fn push(&mut self, pid: Pid, start: Time, end: Time) {
        debug_assert!(self.intervals.last().map_or(true, |last| last.end <= start));
        self.intervals.push(ExecutionInterval::new(pid, start, end));
    }

    /// Records `[start, end)` for `pid`, extending the last interval when it
    /// belongs to the same process and ends exactly at `start`.
    pub fn record(&mut self, pid: Pid, start: Time, end: Time) {
        match self.intervals.last_mut() {
            Some(last) if last.pid == pid && last.end == start => last.end = end,
            _ => self.push(pid, start, end),
        }
    }

    /// All intervals in start order.
    pub fn intervals(&self) -> &[ExecutionInterval] {
        &self.intervals
    }

    pub fn len(&self) -> usize {
        self.intervals.len()
    }

    pub fn is_empty(&self) -> bool {
        self.intervals.is_empty()
    }

    /// End of the last interval, 0 when empty.
    pub fn makespan(&self) -> Time {
        self.intervals.last().map_or(0, |i| i.end)
    }

    /// Total time the CPU was executing some process.
    pub fn busy_time(&self) -> Time {
        self.intervals.iter().map(ExecutionInterval::duration).sum()
    }

    /// Time inside `[0, makespan)` with no process on the CPU.
    pub fn idle_time(&self) -> Time {
        self.makespan() - self.busy_time()
    }

    /// Number of boundaries between adjacent intervals of different processes.
    pub fn context_switches(&self) -> usize {
        self.intervals
            .windows(2)
            .filter(|w| w[0].pid != w[1].pid)
            .count()
    }

    /// Returns all intervals for a given process.
    pub fn intervals_for(&self, pid: Pid) -> Vec<&ExecutionInterval> {
        self.intervals.iter().filter(|i| i.pid == pid).collect()
    }

    /// Whether starts are non-decreasing and no two intervals overlap.
    pub fn is_well_formed(&self) -> bool {
        self.intervals.iter().all(|i| i.end > i.start)
            && self.intervals.windows(2).all(|w| w[0].end <= w[1].start)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_timeline() -> Timeline {
        let mut t = Timeline::new();
        t.push(1, 0, 3);
        t.push(2, 5, 7);
        t.push(1, 7, 9);
        t
    }

    #[test]
    fn test_record_extends_contiguous_same_pid() {
        let mut t = Timeline::new();
        t.record(1, 0, 1);
        t.record(1, 1, 2);
        t.record(1, 2, 4);
        assert_eq!(t.intervals(), &[ExecutionInterval::new(1, 0, 4)]);
    }

    #[test]
    fn test_record_opens_new_interval_on_switch() {
        let mut t = Timeline::new();
        t.record(1, 0, 1);
        t.record(2, 1, 3);
        t.record(1, 3, 4);
        assert_eq!(t.len(), 3);
        assert_eq!(t.context_switches(), 2);
    }

    #[test]
    fn test_record_does_not_bridge_idle_gap() {
        let mut t = Timeline::new();
        t.record(1, 0, 2);
        t.record(1, 5, 6);
        assert_eq!(t.len(), 2);
    }

    #[test]
    fn test_push_never_coalesces() {
        let mut t = Timeline::new();
        t.push(1, 0, 2);
        t.push(1, 2, 4);
        assert_eq!(t.len(), 2);
        assert_eq!(t.context_switches(), 0);
    }

    #[test]
    fn test_busy_and_idle_time() {
        let t = sample_timeline();
        assert_eq!(t.makespan(), 9);
        assert_eq!(t.busy_time(), 7);
        assert_eq!(t.idle_time(), 2);
    }

    #[test]
    fn test_intervals_for() {
        let t = sample_timeline();
        assert_eq!(t.intervals_for(1).len(), 2);
        assert_eq!(t.intervals_for(2).len(), 1);
        assert!(t.intervals_for(9).is_empty());
    }

    #[test]
    fn test_well_formed() {
        assert!(sample_timeline().is_well_formed());
        assert!(Timeline::new().is_well_formed());
    }

    #[test]
    fn test_overlaps() {
        let a = ExecutionInterval::new(1, 0, 3);
        assert!(a.overlaps(&ExecutionInterval::new(2, 2, 4)));
        assert!(!a.overlaps(&ExecutionInterval::new(2, 3, 4)));
    }

    #[test]
    fn test_empty_timeline() {
        let t = Timeline::new();
        assert_eq!(t.makespan(), 0);
        assert_eq!(t.busy_time(), 0);
        assert!(t.is_empty());
    }
}
