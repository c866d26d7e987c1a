//! Input validation for simulation requests.
//!
//! The algorithms assume well-formed input. This module checks it up
//! front and reports every problem at once:
//! - Empty process set
//! - Duplicate process ids
//! - Negative arrival times
//! - Non-positive burst times
//! - Non-positive round robin quantum
//! - Workloads whose schedule horizon does not fit in [`Time`]

use std::collections::HashSet;

use thiserror::Error;

use crate::models::{Process, Time};
use crate::scheduler::Algorithm;

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// No processes were supplied.
    EmptyProcessSet,
    /// Two processes share the same pid.
    DuplicatePid,
    /// A process arrives before t=0.
    NegativeArrival,
    /// A process needs no CPU time (or negative).
    NonPositiveBurst,
    /// Round robin quantum is zero or negative.
    NonPositiveQuantum,
    /// Latest arrival plus total burst overflows [`Time`].
    TimeOverflow,
}

impl ValidationError {
    fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// Validates the process set.
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_processes(processes: &[Process]) -> ValidationResult {
    let mut errors = Vec::new();

    if processes.is_empty() {
        errors.push(ValidationError::new(
            ValidationErrorKind::EmptyProcessSet,
            "At least one process is required",
        ));
    }

    let mut pids = HashSet::new();
    for p in processes {
        if !pids.insert(p.pid) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicatePid,
                format!("Duplicate process id: P{}", p.pid),
            ));
        }
        if p.arrival < 0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::NegativeArrival,
                format!("P{} has negative arrival time {}", p.pid, p.arrival),
            ));
        }
        if p.burst <= 0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::NonPositiveBurst,
                format!("P{} has non-positive burst time {}", p.pid, p.burst),
            ));
        }
    }

    // Every discipline finishes by max(arrival) + Σburst
    let latest_arrival = processes.iter().map(|p| p.arrival).max().unwrap_or(0).max(0);
    let horizon = processes
        .iter()
        .map(|p| p.burst.max(0))
        .try_fold(latest_arrival, Time::checked_add);
    if horizon.is_none() {
        errors.push(ValidationError::new(
            ValidationErrorKind::TimeOverflow,
            "Latest arrival plus total burst time overflows the simulation clock",
        ));
    }

    finish(errors)
}

/// Validates the algorithm parameters.
pub fn validate_algorithm(algorithm: &Algorithm) -> ValidationResult {
    match algorithm {
        Algorithm::RoundRobin { quantum } if *quantum <= 0 => Err(vec![ValidationError::new(
            ValidationErrorKind::NonPositiveQuantum,
            format!("Round robin quantum must be positive, got {quantum}"),
        )]),
        _ => Ok(()),
    }
}

/// Validates a full simulation input: processes and algorithm parameters.
pub fn validate_input(processes: &[Process], algorithm: &Algorithm) -> ValidationResult {
    let mut errors = validate_processes(processes).err().unwrap_or_default();
    errors.extend(validate_algorithm(algorithm).err().unwrap_or_default());
    finish(errors)
}

fn finish(errors: Vec<ValidationError>) -> ValidationResult {
    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
