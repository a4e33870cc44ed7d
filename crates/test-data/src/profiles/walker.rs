//! Walker athletic profile.

use super::AthleteProfile;

/// Athletic profile for sports walking.
///
/// Walkers keep a steady ~120 steps/min with more day-to-day variance than
/// runners; sessions run from half an hour to three hours.
#[derive(Debug, Clone)]
pub struct WalkerProfile {
    /// Steps per minute.
    pub cadence_spm: f64,
    /// Performance variance (coefficient of variation).
    pub variance: f64,
}

impl Default for WalkerProfile {
    fn default() -> Self {
        Self {
            cadence_spm: 120.0,
            variance: 0.12,
        }
    }
}

impl AthleteProfile for WalkerProfile {
    fn actions_per_hour(&self) -> f64 {
        self.cadence_spm * 60.0
    }

    fn duration_range_hours(&self) -> (f64, f64) {
        (0.5, 3.0)
    }

    fn variance(&self) -> f64 {
        self.variance
    }
}
