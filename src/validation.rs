//! Input validation for CPU scheduling runs.
//!
//! Checks a process list (and, for Round Robin, the time quantum) before a
//! scheduler runs. Detects:
//! - Empty process lists
//! - Zero or duplicate process IDs
//! - Negative arrival times
//! - Non-positive burst times
//! - Negative priorities
//! - Non-positive time quanta
//! - Lists whose latest arrival plus total burst does not fit in `i64`
//!
//! All errors are collected rather than stopping at the first one, so a
//! caller can report every offending process at once. The schedulers do
//! not depend on this module.

use std::collections::HashSet;
use std::fmt;

use tracing::warn;

use crate::models::{Process, ProcessId};

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Offending process, for per-process errors.
    pub process_id: Option<ProcessId>,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValidationErrorKind {
    /// No processes supplied.
    EmptyProcessList,
    /// Process ID is zero.
    InvalidProcessId,
    /// Two processes share the same ID.
    DuplicateId,
    /// Arrival time is negative.
    InvalidArrivalTime,
    /// Burst time is not positive.
    InvalidBurstTime,
    /// Priority is negative.
    InvalidPriority,
    /// Round Robin time quantum is not positive.
    InvalidTimeQuantum,
}

impl ValidationError {
    fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            process_id: None,
            message: message.into(),
        }
    }

    fn for_process(kind: ValidationErrorKind, id: ProcessId, detail: &str) -> Self {
        Self {
            kind,
            process_id: Some(id),
            message: format!("P{id}: {detail}"),
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl std::error::Error for ValidationError {}

/// Validates a single process.
///
/// Checks:
/// 1. ID is positive
/// 2. Arrival time is non-negative
/// 3. Burst time is positive
/// 4. Priority is non-negative
pub fn validate_process(process: &Process) -> ValidationResult {
    let mut errors = Vec::new();
    check_process(process, &mut errors);
    into_result(errors)
}

/// Validates a Round Robin time quantum.
pub fn validate_time_quantum(time_quantum: i64) -> Result<(), ValidationError> {
    if time_quantum <= 0 {
        return Err(ValidationError::new(
            ValidationErrorKind::InvalidTimeQuantum,
            "Time Quantum must be a positive number",
        ));
    }
    Ok(())
}

/// Validates a process list before simulation.
///
/// Checks:
/// 1. The list is not empty
/// 2. No duplicate IDs
/// 3. Every process passes [`validate_process`]
/// 4. The latest arrival plus the total burst fits in `i64`, which bounds
///    every timestamp a scheduler can produce
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_processes(processes: &[Process]) -> ValidationResult {
    if processes.is_empty() {
        warn!("validation failed: empty process list");
        return Err(vec![ValidationError::new(
            ValidationErrorKind::EmptyProcessList,
            "Add at least one process to simulate",
        )]);
    }

    let mut errors = Vec::new();
    let mut seen = HashSet::new();

    for process in processes {
        if !seen.insert(process.id) {
            errors.push(ValidationError::for_process(
                ValidationErrorKind::DuplicateId,
                process.id,
                "Process ID must be unique",
            ));
        }
        check_process(process, &mut errors);
    }
    check_time_horizon(processes, &mut errors);

    if !errors.is_empty() {
        warn!(error_count = errors.len(), "validation failed");
    }
    into_result(errors)
}

/// Validates a process list and, if present, a Round Robin time quantum.
pub fn validate_input(processes: &[Process], time_quantum: Option<i64>) -> ValidationResult {
    let mut errors = match validate_processes(processes) {
        Ok(()) => Vec::new(),
        Err(errors) => errors,
    };
    if let Some(Err(e)) = time_quantum.map(validate_time_quantum) {
        warn!(time_quantum = ?time_quantum, "invalid time quantum");
        errors.push(e);
    }
    into_result(errors)
}

fn check_process(process: &Process, errors: &mut Vec<ValidationError>) {
    let id = process.id;
    if id == 0 {
        errors.push(ValidationError::for_process(
            ValidationErrorKind::InvalidProcessId,
            id,
            "Process ID must be a positive number",
        ));
    }
    if process.arrival_time < 0 {
        errors.push(ValidationError::for_process(
            ValidationErrorKind::InvalidArrivalTime,
            id,
            "Arrival Time must be a non-negative number",
        ));
    }
    if process.burst_time <= 0 {
        errors.push(ValidationError::for_process(
            ValidationErrorKind::InvalidBurstTime,
            id,
            "Burst Time must be a positive number",
        ));
    }
    if process.priority < 0 {
        errors.push(ValidationError::for_process(
            ValidationErrorKind::InvalidPriority,
            id,
            "Priority must be a non-negative number",
        ));
    }
}

fn check_time_horizon(processes: &[Process], errors: &mut Vec<ValidationError>) {
    let valid = || {
        processes
            .iter()
            .filter(|p| p.arrival_time >= 0 && p.burst_time > 0)
    };
    let Some(latest_arrival) = valid().map(|p| p.arrival_time).max() else {
        return;
    };

    let mut horizon = latest_arrival;
    for process in valid() {
        match horizon.checked_add(process.burst_time) {
            Some(t) => horizon = t,
            None => {
                errors.push(ValidationError::for_process(
                    ValidationErrorKind::InvalidBurstTime,
                    process.id,
                    "Burst Time exceeds the representable time range",
                ));
                return;
            }
        }
    }
}

fn into_result(errors: Vec<ValidationError>) -> ValidationResult {
    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_processes() -> Vec<Process> {
        vec![
            Process::new(1, 0, 5).with_priority(2),
            Process::new(2, 1, 3).with_priority(1),
            Process::new(3, 2, 8).with_priority(3),
        ]
    }

    #[test]
    fn test_valid_input() {
        assert!(validate_processes(&sample_processes()).is_ok());
        assert!(validate_input(&sample_processes(), Some(2)).is_ok());
        assert!(validate_input(&sample_processes(), None).is_ok());
    }

    #[test]
    fn test_empty_process_list() {
        let errors = validate_processes(&[]).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].kind, ValidationErrorKind::EmptyProcessList);
        assert_eq!(errors[0].process_id, None);
        assert_eq!(errors[0].to_string(), "Add at least one process to simulate");
    }

    #[test]
    fn test_invalid_arrival_time() {
        let errors = validate_process(&Process::new(4, -1, 3)).unwrap_err();
        assert_eq!(errors[0].kind, ValidationErrorKind::InvalidArrivalTime);
        assert_eq!(errors[0].process_id, Some(4));
        assert_eq!(
            errors[0].message,
            "P4: Arrival Time must be a non-negative number"
        );
    }

    #[test]
    fn test_invalid_burst_time() {
        for burst in [0, -2] {
            let errors = validate_process(&Process::new(1, 0, burst)).unwrap_err();
            assert!(errors
                .iter()
                .any(|e| e.kind == ValidationErrorKind::InvalidBurstTime));
        }
    }

    #[test]
    fn test_invalid_priority() {
        let errors = validate_process(&Process::new(1, 0, 1).with_priority(-1)).unwrap_err();
        assert_eq!(errors[0].kind, ValidationErrorKind::InvalidPriority);
    }

    #[test]
    fn test_invalid_process_id() {
        let errors = validate_process(&Process::new(0, 0, 1)).unwrap_err();
        assert_eq!(errors[0].kind, ValidationErrorKind::InvalidProcessId);
    }

    #[test]
    fn test_duplicate_id() {
        let processes = vec![Process::new(1, 0, 2), Process::new(1, 3, 2)];
        let errors = validate_processes(&processes).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].kind, ValidationErrorKind::DuplicateId);
    }

    #[test]
    fn test_invalid_time_quantum() {
        assert!(validate_time_quantum(1).is_ok());
        for q in [0, -5] {
            let e = validate_time_quantum(q).unwrap_err();
            assert_eq!(e.kind, ValidationErrorKind::InvalidTimeQuantum);
            assert_eq!(e.to_string(), "Time Quantum must be a positive number");
        }
    }

    #[test]
    fn test_multiple_errors() {
        // Bad arrival + bad burst on one process, bad priority on another, bad quantum
        let processes = vec![
            Process::new(1, -1, 0),
            Process::new(2, 0, 3).with_priority(-4),
        ];
        let errors = validate_input(&processes, Some(0)).unwrap_err();
        assert_eq!(errors.len(), 4);
        assert_eq!(
            errors.iter().filter(|e| e.process_id == Some(1)).count(),
            2
        );
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::InvalidTimeQuantum));
    }

    #[test]
    fn test_time_horizon_overflow() {
        let errors = validate_input(&[Process::new(1, i64::MAX - 1, 5)], Some(2)).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].kind, ValidationErrorKind::InvalidBurstTime);
        assert_eq!(errors[0].process_id, Some(1));

        // Each burst fits on its own; the sum does not
        let processes = vec![Process::new(1, 0, i64::MAX), Process::new(2, 0, i64::MAX)];
        let errors = validate_processes(&processes).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].process_id, Some(2));
    }

    #[test]
    fn test_time_horizon_boundary_runs_every_policy() {
        use crate::scheduler::{simulate, Algorithm};

        let processes = vec![Process::new(1, i64::MAX - 5, 2), Process::new(2, 0, 3)];
        assert!(validate_input(&processes, Some(i64::MAX)).is_ok());

        for algo in Algorithm::ALL {
            let r = simulate(&processes, algo, i64::MAX);
            assert_eq!(r.makespan(), i64::MAX - 3);
            assert_eq!(r.result_for(1).unwrap().turnaround_time, 2);
            assert_eq!(r.result_for(2).unwrap().turnaround_time, 3);
            assert!((r.avg_waiting_time - 0.0).abs() < 1e-10);
        }
    }

    #[test]
    fn test_error_is_std_error() {
        fn assert_error<E: std::error::Error>(_: &E) {}
        let e = validate_time_quantum(0).unwrap_err();
        assert_error(&e);
    }
}
