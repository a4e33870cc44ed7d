//! Athletic performance profiles.
//!
//! Profiles define realistic cadences and session lengths for each activity
//! kind. Generators use them to produce raw readings a real sensor could have
//! recorded.

mod runner;
mod swimmer;
mod walker;

pub use runner::RunnerProfile;
pub use swimmer::SwimmerProfile;
pub use walker::WalkerProfile;

/// Trait for athletic performance profiles.
///
/// Implementations should provide:
/// - Typical actions (steps or strokes) per hour
/// - The range of session lengths
/// - Day-to-day variance
pub trait AthleteProfile: Send + Sync {
    /// Steps or strokes per hour at a steady effort.
    fn actions_per_hour(&self) -> f64;

    /// Shortest and longest session, in hours.
    fn duration_range_hours(&self) -> (f64, f64);

    /// Day-to-day performance variance as a coefficient of variation (0.0 - 1.0).
    ///
    /// A value of 0.1 means typical day-to-day variation of ±10%.
    fn variance(&self) -> f64;
}

/// Samples a variance factor from normal distribution.
/// Returns a multiplier around 1.0.
pub fn sample_variance(profile: &dyn AthleteProfile, rng: &mut impl rand::Rng) -> f64 {
    use rand_distr::{Distribution, Normal};

    match Normal::new(1.0, profile.variance()) {
        Ok(normal) if profile.variance() > 0.0 => {
            let sample: f64 = normal.sample(rng);
            sample.clamp(0.7, 1.4)
        }
        _ => 1.0,
    }
}
