//! Lookup error types.
//!
//! A missing student or course is reported back to the caller without
//! touching the grade book. Callers usually print these and carry on.

use thiserror::Error;

/// Errors raised when a lookup by email or course name misses.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LookupError {
    /// No student has the given email.
    #[error("Student not found")]
    StudentNotFound(String),

    /// Registration needs both; at least one of them is missing.
    #[error("Student or Course not found")]
    StudentOrCourseNotFound { email: String, course: String },
}

impl LookupError {
    /// The key that failed to resolve, for logging.
    pub fn key(&self) -> String {
        match self {
            LookupError::StudentNotFound(email) => email.clone(),
            LookupError::StudentOrCourseNotFound { email, course } => {
                format!("{email} / {course}")
            }
        }
    }
}
