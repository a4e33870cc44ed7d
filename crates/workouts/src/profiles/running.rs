//! Running coefficients.

use super::ActivityProfile;

/// Profile for running sessions.
///
/// Calories scale linearly with mean speed:
/// `(speed_multiplier * speed + speed_shift) * weight / 1000 * minutes`.
#[derive(Debug, Clone, PartialEq)]
pub struct RunningProfile {
    /// Step length in metres.
    pub step_length_m: f64,
    pub speed_multiplier: f64,
    pub speed_shift: f64,
}

impl Default for RunningProfile {
    fn default() -> Self {
        Self {
            step_length_m: 0.65,
            speed_multiplier: 18.0,
            speed_shift: 1.79,
        }
    }
}

impl ActivityProfile for RunningProfile {
    fn label(&self) -> &'static str {
        "Running"
    }

    fn action_length_m(&self) -> f64 {
        self.step_length_m
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_profile() {
        let profile = RunningProfile::default();
        assert!((profile.action_length_m() - 0.65).abs() < f64::EPSILON);
        assert!((profile.speed_multiplier - 18.0).abs() < f64::EPSILON);
        assert!((profile.speed_shift - 1.79).abs() < f64::EPSILON);
    }
}
