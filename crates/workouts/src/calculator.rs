//! Per-activity metric formulas.
//!
//! [`Workout`] is a tagged variant over the activity kinds. Every variant pairs
//! the raw record with its profile and implements [`WorkoutMetric`]; the enum
//! itself only selects the variant.

use tracing::debug;

use crate::errors::WorkoutError;
use crate::models::{ComputedMetrics, Session, SwimmingRecord, WalkingRecord};
use crate::profiles::{
    ActivityProfile, CM_IN_M, M_IN_KM, MIN_IN_HOUR, RunningProfile, SwimmingProfile,
    WalkingProfile, distance_km,
};

pub trait WorkoutMetric {
    fn label(&self) -> &'static str;
    fn session(&self) -> &Session;
    fn distance_km(&self) -> f64;

    fn mean_speed_kmh(&self) -> f64 {
        self.distance_km() / self.session().duration_hours
    }

    fn calories_kcal(&self) -> f64;

    /// Checks the readings the formulas divide by or scale with.
    fn validate(&self) -> Result<(), WorkoutError> {
        validate_session(self.session())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Running {
    pub record: Session,
    pub profile: RunningProfile,
}

impl Running {
    pub fn new(record: Session) -> Self {
        Self {
            record,
            profile: RunningProfile::default(),
        }
    }
}

impl WorkoutMetric for Running {
    fn label(&self) -> &'static str {
        self.profile.label()
    }

    fn session(&self) -> &Session {
        &self.record
    }

    fn distance_km(&self) -> f64 {
        distance_km(&self.profile, self.record.action_count)
    }

    fn calories_kcal(&self) -> f64 {
        let duration_min = self.record.duration_hours * MIN_IN_HOUR;
        (self.profile.speed_multiplier * self.mean_speed_kmh() + self.profile.speed_shift)
            * self.record.weight_kg
            / M_IN_KM
            * duration_min
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Walking {
    pub record: WalkingRecord,
    pub profile: WalkingProfile,
}

impl Walking {
    pub fn new(record: WalkingRecord) -> Self {
        Self {
            record,
            profile: WalkingProfile::default(),
        }
    }
}

impl WorkoutMetric for Walking {
    fn label(&self) -> &'static str {
        self.profile.label()
    }

    fn session(&self) -> &Session {
        &self.record.session
    }

    fn distance_km(&self) -> f64 {
        distance_km(&self.profile, self.record.session.action_count)
    }

    fn calories_kcal(&self) -> f64 {
        let weight = self.record.session.weight_kg;
        let speed_mps = self.mean_speed_kmh() * self.profile.kmh_to_mps;
        let height_m = self.record.height_cm / CM_IN_M;
        let duration_min = self.record.session.duration_hours * MIN_IN_HOUR;

        (self.profile.weight_multiplier * weight
            + (speed_mps.powi(2) / height_m) * self.profile.speed_height_multiplier * weight)
            * duration_min
    }

    fn validate(&self) -> Result<(), WorkoutError> {
        validate_session(&self.record.session)?;
        require_positive("height_cm", self.record.height_cm)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Swimming {
    pub record: SwimmingRecord,
    pub profile: SwimmingProfile,
}

impl Swimming {
    pub fn new(record: SwimmingRecord) -> Self {
        Self {
            record,
            profile: SwimmingProfile::default(),
        }
    }
}

impl WorkoutMetric for Swimming {
    fn label(&self) -> &'static str {
        self.profile.label()
    }

    fn session(&self) -> &Session {
        &self.record.session
    }

    fn distance_km(&self) -> f64 {
        distance_km(&self.profile, self.record.session.action_count)
    }

    /// Speed from pool geometry; the stroke count plays no part.
    fn mean_speed_kmh(&self) -> f64 {
        self.record.pool_length_m * self.record.pool_count
            / M_IN_KM
            / self.record.session.duration_hours
    }

    fn calories_kcal(&self) -> f64 {
        (self.mean_speed_kmh() + self.profile.speed_shift)
            * self.profile.weight_multiplier
            * self.record.session.weight_kg
            * self.record.session.duration_hours
    }

    fn validate(&self) -> Result<(), WorkoutError> {
        validate_session(&self.record.session)?;
        require_non_negative("pool_length_m", self.record.pool_length_m)?;
        require_non_negative("pool_count", self.record.pool_count)
    }
}

/// A workout ready to be summarized.
#[derive(Debug, Clone, PartialEq)]
pub enum Workout {
    Running(Running),
    Walking(Walking),
    Swimming(Swimming),
}

impl Workout {
    /// Computes the summary metrics, failing on readings the formulas can't use.
    pub fn compute(&self) -> Result<ComputedMetrics, WorkoutError> {
        match self {
            Workout::Running(w) => summarize(w),
            Workout::Walking(w) => summarize(w),
            Workout::Swimming(w) => summarize(w),
        }
    }
}

fn summarize(workout: &impl WorkoutMetric) -> Result<ComputedMetrics, WorkoutError> {
    workout.validate()?;

    let metrics = ComputedMetrics {
        activity_label: workout.label(),
        duration_hours: workout.session().duration_hours,
        distance_km: workout.distance_km(),
        mean_speed_kmh: workout.mean_speed_kmh(),
        calories_kcal: workout.calories_kcal(),
    };
    // Finite readings can still overflow the formulas
    require_finite("distance_km", metrics.distance_km)?;
    require_finite("mean_speed_kmh", metrics.mean_speed_kmh)?;
    require_finite("calories_kcal", metrics.calories_kcal)?;

    debug!(
        label = metrics.activity_label,
        distance_km = metrics.distance_km,
        mean_speed_kmh = metrics.mean_speed_kmh,
        calories_kcal = metrics.calories_kcal,
        "Computed workout metrics"
    );

    Ok(metrics)
}

fn validate_session(session: &Session) -> Result<(), WorkoutError> {
    require_non_negative("action_count", session.action_count)?;
    require_positive("duration_hours", session.duration_hours)?;
    require_positive("weight_kg", session.weight_kg)
}

fn require_positive(field: &'static str, value: f64) -> Result<(), WorkoutError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(WorkoutError::DomainPreconditionViolation {
            field,
            requirement: "a positive number",
            value,
        })
    }
}

fn require_non_negative(field: &'static str, value: f64) -> Result<(), WorkoutError> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(WorkoutError::DomainPreconditionViolation {
            field,
            requirement: "a non-negative number",
            value,
        })
    }
}

fn require_finite(field: &'static str, value: f64) -> Result<(), WorkoutError> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(WorkoutError::DomainPreconditionViolation {
            field,
            requirement: "finite",
            value,
        })
    }
}
