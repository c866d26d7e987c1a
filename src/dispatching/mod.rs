//! Selection rules and rule engine.
//!
//! Each scheduling discipline that picks "the best ready process" is a
//! primary rule (shortest burst, shortest remaining, highest priority)
//! composed with the same tie-break chain: earliest arrival, then
//! process id.
//!
//! # Usage
//!
//! ```
//! use u_cpu_schedule::dispatching::{RuleEngine, SchedulingContext};
//! use u_cpu_schedule::dispatching::rules;
//! use u_cpu_schedule::models::{Process, ProcessState};
//!
//! let engine = RuleEngine::new()
//!     .with_rule(rules::ShortestBurst)
//!     .with_rule(rules::EarliestArrival);
//!
//! let states = ProcessState::snapshot(&[
//!     Process::new(1, 0, 8),
//!     Process::new(2, 0, 3),
//! ]);
//! let ctx = SchedulingContext::at_time(0);
//! assert_eq!(engine.select_ready(&states, &ctx), Some(1));
//! ```

mod context;
mod engine;
pub mod rules;

pub use context::SchedulingContext;
pub use engine::RuleEngine;

use crate::models::ProcessState;
use std::fmt::Debug;

/// Score returned by a selection rule.
///
/// Lower scores = selected first.
pub type RuleScore = i64;

/// A rule that ranks ready processes.
///
/// # Score Convention
/// **Lower score = higher priority.** Rules return smaller values for
/// processes that should get the CPU first.
pub trait SelectionRule: Send + Sync + Debug {
    /// Rule name (e.g., "SJF", "PRIORITY").
    fn name(&self) -> &'static str;

    /// Scores a process at the current scheduling context.
    fn evaluate(&self, state: &ProcessState, context: &SchedulingContext) -> RuleScore;
}
