//! Single-processor CPU scheduling simulator.
//!
//! Computes execution timelines and waiting/turnaround metrics for a
//! fixed set of CPU-bound processes under six classical disciplines:
//! FCFS, SJF, SRTF, round robin, and priority (preemptive and
//! non-preemptive). The simulation is offline, synchronous and
//! deterministic.
//!
//! # Modules
//!
//! - **`models`**: `Process`, `ProcessState`, `ProcessMetrics`, `Timeline`
//! - **`dispatching`**: Selection rules and the tie-breaking rule engine
//! - **`scheduler`**: The six disciplines, `ScheduleKpi`, and `simulate`
//! - **`validation`**: Input checks (empty set, duplicate pids, bad times)
//! - **`report`**: Gantt line and metrics table rendering
//! - **`workload`**: Sample data and a seeded random generator
//!
//! # Example
//!
//! ```
//! use u_cpu_schedule::models::Process;
//! use u_cpu_schedule::scheduler::{simulate, Algorithm};
//!
//! let processes = vec![Process::new(1, 0, 5), Process::new(2, 1, 3)];
//! let result = simulate(&processes, Algorithm::RoundRobin { quantum: 2 }).unwrap();
//! assert_eq!(result.kpi.makespan, 8);
//! println!("{result}");
//! ```
//!
//! # References
//!
//! - Silberschatz, Galvin & Gagne (2018), "Operating System Concepts", Ch. 5
//! - Tanenbaum & Bos (2014), "Modern Operating Systems", Ch. 2.4

pub mod dispatching;
pub mod error;
pub mod models;
pub mod report;
pub mod scheduler;
pub mod validation;
pub mod workload;

pub use error::SimulationError;
pub use models::{ExecutionInterval, Pid, Process, ProcessMetrics, ProcessState, Time, Timeline};
pub use scheduler::{compare, simulate, Algorithm, ScheduleKpi, SimulationRequest, SimulationResult};
