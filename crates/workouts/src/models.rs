use std::fmt;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ActivityKind {
    Running,
    Walking,
    Swimming,
}

impl ActivityKind {
    /// Three-letter code used by sensor packages.
    pub fn code(&self) -> &'static str {
        match self {
            ActivityKind::Running => "RUN",
            ActivityKind::Walking => "WLK",
            ActivityKind::Swimming => "SWM",
        }
    }

    /// Number of positional raw values a package of this kind carries.
    pub fn arity(&self) -> usize {
        match self {
            ActivityKind::Running => 3,
            ActivityKind::Walking => 4,
            ActivityKind::Swimming => 5,
        }
    }
}

impl fmt::Display for ActivityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Readings every activity kind starts with.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Session {
    /// Steps for running and walking, strokes for swimming.
    pub action_count: f64,
    pub duration_hours: f64,
    pub weight_kg: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WalkingRecord {
    pub session: Session,
    pub height_cm: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SwimmingRecord {
    pub session: Session,
    pub pool_length_m: f64,
    /// How many times the pool was swum end to end.
    pub pool_count: f64,
}

/// One raw sensor package: an activity code plus its positional values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Package {
    pub kind_code: String,
    pub values: Vec<f64>,
}

impl Package {
    pub fn new(kind_code: impl Into<String>, values: Vec<f64>) -> Self {
        Self {
            kind_code: kind_code.into(),
            values,
        }
    }
}

/// Summary of a completed workout.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ComputedMetrics {
    pub activity_label: &'static str,
    pub duration_hours: f64,
    pub distance_km: f64,
    pub mean_speed_kmh: f64,
    pub calories_kcal: f64,
}
