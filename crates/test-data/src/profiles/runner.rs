//! Runner athletic profile.

use super::AthleteProfile;

/// Athletic profile for running activities.
///
/// Based on typical recreational runner performance:
/// - Cadence: ~165 steps/min
/// - Sessions: 20 minutes to 2 hours
#[derive(Debug, Clone)]
pub struct RunnerProfile {
    /// Steps per minute.
    pub cadence_spm: f64,
    /// Performance variance (coefficient of variation).
    pub variance: f64,
}

impl Default for RunnerProfile {
    fn default() -> Self {
        Self {
            cadence_spm: 165.0,
            variance: 0.08,
        }
    }
}

impl AthleteProfile for RunnerProfile {
    fn actions_per_hour(&self) -> f64 {
        self.cadence_spm * 60.0
    }

    fn duration_range_hours(&self) -> (f64, f64) {
        (0.33, 2.0)
    }

    fn variance(&self) -> f64 {
        self.variance
    }
}
