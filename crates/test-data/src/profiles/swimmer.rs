//! Swimmer athletic profile.

use super::AthleteProfile;

/// Athletic profile for pool swimming.
///
/// Based on a recreational freestyle swimmer:
/// - Stroke rate: ~30 strokes/min
/// - Pools: 25 m or 50 m
#[derive(Debug, Clone)]
pub struct SwimmerProfile {
    /// Strokes per minute.
    pub stroke_rate_spm: f64,
    /// Pool lengths the swimmer trains in, in metres.
    pub pool_lengths_m: Vec<f64>,
    /// Performance variance (coefficient of variation).
    pub variance: f64,
}

impl Default for SwimmerProfile {
    fn default() -> Self {
        Self {
            stroke_rate_spm: 30.0,
            pool_lengths_m: vec![25.0, 50.0],
            variance: 0.1,
        }
    }
}

impl AthleteProfile for SwimmerProfile {
    fn actions_per_hour(&self) -> f64 {
        self.stroke_rate_spm * 60.0
    }

    fn duration_range_hours(&self) -> (f64, f64) {
        (0.25, 1.5)
    }

    fn variance(&self) -> f64 {
        self.variance
    }
}
