use thiserror::Error;

use crate::models::ActivityKind;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum WorkoutError {
    #[error("Unknown activity kind '{}', available kinds: {}", .code, .valid.join(", "))]
    UnknownActivityKind {
        code: String,
        valid: Vec<&'static str>,
    },

    #[error("Invalid record shape for {kind}: expected {expected} values, got {actual}")]
    InvalidRecordShape {
        kind: ActivityKind,
        expected: usize,
        actual: usize,
    },

    #[error("Invalid input: {field} must be {requirement}, got {value}")]
    DomainPreconditionViolation {
        field: &'static str,
        requirement: &'static str,
        value: f64,
    },
}

/// Failures that abort a whole report run rather than a single record.
#[derive(Error, Debug)]
pub enum ReportError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
