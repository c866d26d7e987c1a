//! Workload sources.
//!
//! A fixed demonstration set and a seeded random generator that always
//! produces valid input (pids 1..=n, arrival >= 0, burst >= 1).

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use crate::models::{Pid, Process, Time};

/// Four-process demonstration workload with distinct priorities.
pub fn sample() -> Vec<Process> {
    vec![
        Process::new(1, 0, 8).with_priority(3),
        Process::new(2, 1, 4).with_priority(1),
        Process::new(3, 2, 9).with_priority(4),
        Process::new(4, 3, 5).with_priority(2),
    ]
}

/// Reproducible random workload generator.
///
/// # Example
///
/// ```
/// use u_cpu_schedule::workload::WorkloadGenerator;
///
/// let generator = WorkloadGenerator::new(5).with_seed(7).with_burst_range(1, 4);
/// let processes = generator.generate();
/// assert_eq!(processes.len(), 5);
/// assert_eq!(processes, generator.generate());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkloadGenerator {
    count: usize,
    max_arrival: Time,
    min_burst: Time,
    max_burst: Time,
    min_priority: i32,
    max_priority: i32,
    seed: u64,
}

impl WorkloadGenerator {
    /// Creates a generator for `count` processes.
    ///
    /// Defaults: arrivals in `0..=10`, bursts in `1..=10`, priorities in
    /// `0..=5`, seed 0.
    pub fn new(count: usize) -> Self {
        Self {
            count,
            max_arrival: 10,
            min_burst: 1,
            max_burst: 10,
            min_priority: 0,
            max_priority: 5,
            seed: 0,
        }
    }

    /// Sets the latest possible arrival time (clamped to >= 0).
    pub fn with_max_arrival(mut self, max_arrival: Time) -> Self {
        self.max_arrival = max_arrival.max(0);
        self
    }

    /// Sets the inclusive burst range (clamped to >= 1).
    pub fn with_burst_range(mut self, min: Time, max: Time) -> Self {
        self.min_burst = min.max(1);
        self.max_burst = max.max(self.min_burst);
        self
    }

    /// Sets the inclusive priority range.
    pub fn with_priority_range(mut self, min: i32, max: i32) -> Self {
        self.min_priority = min;
        self.max_priority = max.max(min);
        self
    }

    /// Sets the RNG seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Generates the workload. The same configuration always yields the
    /// same processes.
    pub fn generate(&self) -> Vec<Process> {
        let mut rng = SmallRng::seed_from_u64(self.seed);
        (1..=self.count)
            .map(|i| {
                Process::new(
                    i as Pid,
                    rng.random_range(0..=self.max_arrival),
                    rng.random_range(self.min_burst..=self.max_burst),
                )
                .with_priority(rng.random_range(self.min_priority..=self.max_priority))
            })
            .collect()
    }
}
