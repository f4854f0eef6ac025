//! Input validation for scheduling simulations.
//!
//! Checks the process set (and quantum, where relevant) before any
//! simulation starts. Detects:
//! - Empty process sets
//! - Duplicate IDs
//! - Non-positive bursts
//! - Negative arrivals
//! - Process sets not sorted by arrival
//! - Non-positive Round-Robin quanta
//! - Workloads whose finishing time does not fit the clock
//!
//! All problems are collected so the caller sees every defect at once.

use std::collections::HashSet;
use std::fmt;

use crate::models::{Algorithm, Process};

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// The process set is empty.
    EmptyInput,
    /// Two processes share the same ID.
    DuplicateId,
    /// A process has `burst <= 0`.
    NonPositiveBurst,
    /// A process has `arrival < 0`.
    NegativeArrival,
    /// A process arrives earlier than its predecessor in the input.
    UnsortedArrivals,
    /// A Round-Robin quantum is `<= 0`.
    NonPositiveQuantum,
    /// The latest arrival plus the total burst exceeds the clock range.
    TimeOverflow,
    /// Process definitions could not be read or parsed.
    Malformed,
}

impl ValidationError {
    pub(crate) fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

impl ValidationErrorKind {
    /// Short human-readable label.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::EmptyInput => "empty input",
            Self::DuplicateId => "duplicate id",
            Self::NonPositiveBurst => "non-positive burst",
            Self::NegativeArrival => "negative arrival",
            Self::UnsortedArrivals => "unsorted arrivals",
            Self::NonPositiveQuantum => "non-positive quantum",
            Self::TimeOverflow => "time overflow",
            Self::Malformed => "malformed input",
        }
    }
}

impl fmt::Display for ValidationErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.kind, self.message)
    }
}

impl std::error::Error for ValidationError {}

/// Validates a process set.
///
/// Checks:
/// 1. At least one process
/// 2. No duplicate IDs
/// 3. Every burst is positive
/// 4. Every arrival is non-negative
/// 5. Arrivals are non-decreasing in input order
/// 6. `max(arrival) + sum(burst)` fits in `i64`, so no simulation clock
///    can overflow
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_processes(processes: &[Process]) -> ValidationResult {
    let mut errors = Vec::new();

    if processes.is_empty() {
        errors.push(ValidationError::new(
            ValidationErrorKind::EmptyInput,
            "Process set is empty",
        ));
    }

    let mut ids = HashSet::new();
    let mut previous: Option<&Process> = None;

    for p in processes {
        if !ids.insert(p.id.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("Duplicate process ID: {}", p.id),
            ));
        }

        if p.burst <= 0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::NonPositiveBurst,
                format!("Process '{}' has non-positive burst {}", p.id, p.burst),
            ));
        }

        if p.arrival < 0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::NegativeArrival,
                format!("Process '{}' has negative arrival {}", p.id, p.arrival),
            ));
        }

        if let Some(prev) = previous {
            if p.arrival < prev.arrival {
                errors.push(ValidationError::new(
                    ValidationErrorKind::UnsortedArrivals,
                    format!(
                        "Process '{}' (arrival {}) listed after '{}' (arrival {})",
                        p.id, p.arrival, prev.id, prev.arrival
                    ),
                ));
            }
        }
        previous = Some(p);
    }

    if let Some(overflow) = detect_time_overflow(processes) {
        errors.push(overflow);
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Checks that every clock value a scheduler can reach fits in `i64`.
///
/// No discipline finishes later than the latest arrival plus the total
/// burst, since idle jumps never pass the latest arrival.
fn detect_time_overflow(processes: &[Process]) -> Option<ValidationError> {
    let latest_arrival = processes.iter().map(|p| p.arrival.max(0)).max()?;
    let mut horizon = latest_arrival;

    for p in processes.iter().filter(|p| p.burst > 0) {
        match horizon.checked_add(p.burst) {
            Some(h) => horizon = h,
            None => {
                return Some(ValidationError::new(
                    ValidationErrorKind::TimeOverflow,
                    format!(
                        "Process '{}' (burst {}) pushes the finishing time past {}",
                        p.id,
                        p.burst,
                        i64::MAX
                    ),
                ))
            }
        }
    }
    None
}

/// Validates the parameters of an algorithm.
pub fn validate_algorithm(algorithm: &Algorithm) -> ValidationResult {
    match algorithm {
        Algorithm::RoundRobin { quantum } if *quantum <= 0 => Err(vec![ValidationError::new(
            ValidationErrorKind::NonPositiveQuantum,
            format!("Round Robin quantum must be positive, got {quantum}"),
        )]),
        _ => Ok(()),
    }
}

/// Validates a process set together with the algorithm that will run it.
pub fn validate_input(processes: &[Process], algorithm: &Algorithm) -> ValidationResult {
    let mut errors = Vec::new();
    if let Err(mut e) = validate_algorithm(algorithm) {
        errors.append(&mut e);
    }
    if let Err(mut e) = validate_processes(processes) {
        errors.append(&mut e);
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
