//! Simulation domain models.
//!
//! Provides the data types shared by every scheduling discipline:
//! the immutable process descriptor, its per-run state, and the
//! execution timeline.
//!
//! | Type | Lifetime |
//! |------|----------|
//! | `Process` | Created once from input, never mutated |
//! | `ProcessState` | Fresh per algorithm invocation |
//! | `Timeline` | Built by one invocation, returned by value |
//! | `ProcessMetrics` | Finalized row derived from a completed state |

mod process;
mod timeline;

pub use process::{Pid, Process, ProcessMetrics, ProcessState, Time};
pub use timeline::{ExecutionInterval, Timeline};
