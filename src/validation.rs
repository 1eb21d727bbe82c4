//! Input validation for course catalogs.
//!
//! Checks structural integrity of a subject list before generation.
//! Detects:
//! - Duplicate subject IDs
//! - Duplicate commission names within a subject
//! - Inverted time ranges (end ≤ start)
//!
//! Advisory only: the generator assumes pre-validated input and never
//! calls these checks itself. A subject with no commissions is not an
//! error — it simply contributes no valid branch.

use std::collections::HashSet;

use crate::models::{format_time, Subject};

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
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// Two entities share the same identifier.
    DuplicateId,
    /// A schedule entry ends at or before it starts.
    InvalidTimeRange,
}

impl ValidationError {
    fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// Validates a subject list.
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_subjects(subjects: &[Subject]) -> ValidationResult {
    let mut errors = Vec::new();

    let mut subject_ids = HashSet::new();
    for subject in subjects {
        if !subject_ids.insert(subject.id.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("Duplicate subject ID: {}", subject.id),
            ));
        }

        let mut commission_names = HashSet::new();
        for commission in &subject.commissions {
            if !commission_names.insert(commission.name.as_str()) {
                errors.push(ValidationError::new(
                    ValidationErrorKind::DuplicateId,
                    format!(
                        "Subject '{}' has duplicate commission '{}'",
                        subject.id, commission.name
                    ),
                ));
            }

            for entry in &commission.entries {
                if entry.end_min <= entry.start_min {
                    errors.push(ValidationError::new(
                        ValidationErrorKind::InvalidTimeRange,
                        format!(
                            "Subject '{}' commission '{}': entry ends at {} but starts at {}",
                            subject.id,
                            commission.name,
                            format_time(entry.end_min),
                            format_time(entry.start_min)
                        ),
                    ));
                }
            }
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
