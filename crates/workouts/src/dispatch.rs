//! Sensor package dispatch.

use tracing::debug;

use crate::calculator::{Running, Swimming, Walking, Workout};
use crate::errors::WorkoutError;
use crate::models::{ActivityKind, Session, SwimmingRecord, WalkingRecord};

/// Recognized package codes, in the order they are reported.
pub const ACTIVITY_CODES: [(&str, ActivityKind); 3] = [
    ("SWM", ActivityKind::Swimming),
    ("RUN", ActivityKind::Running),
    ("WLK", ActivityKind::Walking),
];

/// Resolves a package code to its activity kind. Codes are case-sensitive.
pub fn resolve_kind(code: &str) -> Result<ActivityKind, WorkoutError> {
    ACTIVITY_CODES
        .iter()
        .find(|(known, _)| *known == code)
        .map(|(_, kind)| *kind)
        .ok_or_else(|| WorkoutError::UnknownActivityKind {
            code: code.to_string(),
            valid: ACTIVITY_CODES.iter().map(|(known, _)| *known).collect(),
        })
}

/// Builds the workout for `code`, binding `values` positionally.
///
/// Values are only checked for count here; domain checks happen in
/// [`Workout::compute`].
pub fn read_package(code: &str, values: &[f64]) -> Result<Workout, WorkoutError> {
    let kind = resolve_kind(code)?;
    if values.len() != kind.arity() {
        return Err(WorkoutError::InvalidRecordShape {
            kind,
            expected: kind.arity(),
            actual: values.len(),
        });
    }
    debug!(%kind, ?values, "Dispatching package");

    let session = Session {
        action_count: values[0],
        duration_hours: values[1],
        weight_kg: values[2],
    };

    let workout = match kind {
        ActivityKind::Running => Workout::Running(Running::new(session)),
        ActivityKind::Walking => Workout::Walking(Walking::new(WalkingRecord {
            session,
            height_cm: values[3],
        })),
        ActivityKind::Swimming => Workout::Swimming(Swimming::new(SwimmingRecord {
            session,
            pool_length_m: values[3],
            pool_count: values[4],
        })),
    };

    Ok(workout)
}
