//! Input validation for scheduling runs.
//!
//! Checks the process set (and Round-Robin quantum) before any
//! simulation starts. Detects:
//! - Empty process sets
//! - Duplicate IDs
//! - Negative arrival times
//! - Non-positive burst times
//! - Non-positive quantum
//! - Missing or non-positive priorities (priority scheduling only)
//! - Schedule horizons that do not fit the `i64` clock
//!
//! All problems are collected; a run either passes every check or
//! produces no output at all.

use std::collections::HashSet;
use std::fmt;

use crate::models::Process;

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// No processes were submitted.
    EmptyProcessSet,
    /// Two processes share the same ID.
    DuplicateId,
    /// A process arrives before t=0.
    NegativeArrival,
    /// A process has a burst below 1.
    InvalidBurst,
    /// Round-Robin quantum below 1.
    InvalidQuantum,
    /// Priority scheduling was requested for a process without a priority.
    MissingPriority,
    /// A priority below 1.
    InvalidPriority,
    /// Latest arrival plus total burst exceeds the representable time range.
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

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

/// Extra checks that depend on the selected algorithm.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ValidationOptions {
    /// Round-Robin time quantum to check, if any.
    pub quantum: Option<i64>,
    /// Whether every process must carry a priority.
    pub require_priority: bool,
}

impl ValidationOptions {
    /// Options for Round-Robin with the given quantum.
    pub fn round_robin(quantum: i64) -> Self {
        Self {
            quantum: Some(quantum),
            ..Default::default()
        }
    }

    /// Options for priority scheduling.
    pub fn priority() -> Self {
        Self {
            require_priority: true,
            ..Default::default()
        }
    }
}

/// Typed failure returned by every scheduling algorithm on bad input.
///
/// Wraps every validation problem found in the input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvalidInputError {
    /// All detected problems, in detection order.
    pub errors: Vec<ValidationError>,
}

impl InvalidInputError {
    /// Whether any error of the given kind was detected.
    pub fn has_kind(&self, kind: ValidationErrorKind) -> bool {
        self.errors.iter().any(|e| e.kind == kind)
    }
}

impl From<Vec<ValidationError>> for InvalidInputError {
    fn from(errors: Vec<ValidationError>) -> Self {
        Self { errors }
    }
}

impl fmt::Display for InvalidInputError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid scheduling input")?;
        for (i, e) in self.errors.iter().enumerate() {
            let sep = if i == 0 { ": " } else { "; " };
            write!(f, "{sep}{e}")?;
        }
        Ok(())
    }
}

impl std::error::Error for InvalidInputError {}

/// Validates a process set for a scheduling run.
///
/// Checks:
/// 1. At least one process
/// 2. No duplicate process IDs
/// 3. `arrival >= 0` and `burst >= 1` for every process
/// 4. `quantum >= 1` when a quantum is given
/// 5. Every process has a priority `>= 1` when priorities are required,
///    and any given priority is `>= 1`
/// 6. `max(arrival) + sum(burst)` fits in `i64`; no clock value can exceed it
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_processes(processes: &[Process], options: &ValidationOptions) -> ValidationResult {
    let mut errors = Vec::new();

    if processes.is_empty() {
        errors.push(ValidationError::new(
            ValidationErrorKind::EmptyProcessSet,
            "No processes to schedule",
        ));
    }

    if let Some(quantum) = options.quantum {
        if quantum < 1 {
            errors.push(ValidationError::new(
                ValidationErrorKind::InvalidQuantum,
                format!("Time quantum must be at least 1, got {quantum}"),
            ));
        }
    }

    let mut ids = HashSet::new();
    for p in processes {
        if !ids.insert(p.id.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("Duplicate process ID: {}", p.id),
            ));
        }

        if p.arrival < 0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::NegativeArrival,
                format!("Process '{}' has negative arrival time {}", p.id, p.arrival),
            ));
        }

        if p.burst < 1 {
            errors.push(ValidationError::new(
                ValidationErrorKind::InvalidBurst,
                format!("Process '{}' has burst time {}, must be at least 1", p.id, p.burst),
            ));
        }

        match p.priority {
            Some(pri) if pri < 1 => errors.push(ValidationError::new(
                ValidationErrorKind::InvalidPriority,
                format!("Process '{}' has priority {pri}, must be at least 1", p.id),
            )),
            None if options.require_priority => errors.push(ValidationError::new(
                ValidationErrorKind::MissingPriority,
                format!("Process '{}' has no priority", p.id),
            )),
            _ => {}
        }
    }

    if horizon(processes).is_none() {
        errors.push(ValidationError::new(
            ValidationErrorKind::TimeOverflow,
            "Latest arrival plus total burst time overflows the simulation clock",
        ));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Upper bound on every clock value a run can reach, or `None` on overflow.
fn horizon(processes: &[Process]) -> Option<i64> {
    let latest_arrival = processes.iter().map(|p| p.arrival.max(0)).max().unwrap_or(0);
    processes
        .iter()
        .try_fold(latest_arrival, |acc, p| acc.checked_add(p.burst.max(0)))
}

/// Validates and logs a rejection, converting to the typed error.
pub(crate) fn check(
    algorithm: &str,
    processes: &[Process],
    options: &ValidationOptions,
) -> Result<(), InvalidInputError> {
    validate_processes(processes, options).map_err(|errors| {
        let err = InvalidInputError::from(errors);
        log::warn!("{algorithm}: rejected input: {err}");
        err
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_processes() -> Vec<Process> {
        vec![
            Process::new("P1", 0, 5).with_priority(2),
            Process::new("P2", 1, 3).with_priority(1),
            Process::new("P3", 2, 8).with_priority(3),
        ]
    }

    #[test]
    fn test_valid_input() {
        let procs = sample_processes();
        assert!(validate_processes(&procs, &ValidationOptions::default()).is_ok());
        assert!(validate_processes(&procs, &ValidationOptions::round_robin(2)).is_ok());
        assert!(validate_processes(&procs, &ValidationOptions::priority()).is_ok());
    }

    #[test]
    fn test_empty_process_set() {
        let errors = validate_processes(&[], &ValidationOptions::default()).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].kind, ValidationErrorKind::EmptyProcessSet);
    }

    #[test]
    fn test_duplicate_id() {
        let procs = vec![Process::new("P1", 0, 1), Process::new("P1", 2, 1)];
        let errors = validate_processes(&procs, &ValidationOptions::default()).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::DuplicateId && e.message.contains("P1")));
    }

    #[test]
    fn test_invalid_burst() {
        let procs = vec![Process::new("P1", 0, 0), Process::new("P2", 0, -3)];
        let errors = validate_processes(&procs, &ValidationOptions::default()).unwrap_err();
        assert_eq!(
            errors
                .iter()
                .filter(|e| e.kind == ValidationErrorKind::InvalidBurst)
                .count(),
            2
        );
    }

    #[test]
    fn test_negative_arrival() {
        let procs = vec![Process::new("P1", -1, 2)];
        let errors = validate_processes(&procs, &ValidationOptions::default()).unwrap_err();
        assert_eq!(errors[0].kind, ValidationErrorKind::NegativeArrival);
    }

    #[test]
    fn test_invalid_quantum() {
        let procs = sample_processes();
        for q in [0, -2] {
            let errors = validate_processes(&procs, &ValidationOptions::round_robin(q)).unwrap_err();
            assert_eq!(errors[0].kind, ValidationErrorKind::InvalidQuantum);
        }
    }

    #[test]
    fn test_missing_priority() {
        let procs = vec![Process::new("P1", 0, 2)];
        assert!(validate_processes(&procs, &ValidationOptions::default()).is_ok());
        let errors = validate_processes(&procs, &ValidationOptions::priority()).unwrap_err();
        assert_eq!(errors[0].kind, ValidationErrorKind::MissingPriority);
    }

    #[test]
    fn test_invalid_priority() {
        let procs = vec![Process::new("P1", 0, 2).with_priority(0)];
        let errors = validate_processes(&procs, &ValidationOptions::default()).unwrap_err();
        assert_eq!(errors[0].kind, ValidationErrorKind::InvalidPriority);
    }

    #[test]
    fn test_time_overflow() {
        let procs = vec![Process::new("P1", i64::MAX - 2, 5)];
        let errors = validate_processes(&procs, &ValidationOptions::default()).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].kind, ValidationErrorKind::TimeOverflow);
    }

    #[test]
    fn test_total_burst_overflow() {
        let procs = vec![
            Process::new("P1", 0, i64::MAX / 2 + 1),
            Process::new("P2", 0, i64::MAX / 2 + 1),
        ];
        let errors = validate_processes(&procs, &ValidationOptions::default()).unwrap_err();
        assert_eq!(errors[0].kind, ValidationErrorKind::TimeOverflow);
    }

    #[test]
    fn test_horizon_at_limit_is_valid() {
        let procs = vec![Process::new("P1", i64::MAX - 5, 5)];
        assert!(validate_processes(&procs, &ValidationOptions::default()).is_ok());
    }

    #[test]
    fn test_multiple_errors() {
        let procs = vec![
            Process::new("P1", -1, 0),
            Process::new("P1", 0, 1),
        ];
        let errors = validate_processes(&procs, &ValidationOptions::round_robin(0)).unwrap_err();
        assert!(errors.len() >= 4);
    }

    #[test]
    fn test_invalid_input_error_display() {
        let err = check("FCFS", &[], &ValidationOptions::default()).unwrap_err();
        assert!(err.has_kind(ValidationErrorKind::EmptyProcessSet));
        assert_eq!(err.to_string(), "invalid scheduling input: No processes to schedule");
    }
}
