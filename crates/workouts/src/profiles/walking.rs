//! Sports walking coefficients.

use super::ActivityProfile;

/// Profile for sports walking sessions.
///
/// Calories depend on body weight, and on mean speed relative to height:
/// - `weight_multiplier * weight` is the baseline per minute
/// - `(speed_mps^2 / height_m) * speed_height_multiplier * weight` is added on top
#[derive(Debug, Clone, PartialEq)]
pub struct WalkingProfile {
    /// Step length in metres.
    pub step_length_m: f64,
    pub weight_multiplier: f64,
    pub speed_height_multiplier: f64,
    /// Factor converting km/h to m/s.
    pub kmh_to_mps: f64,
}

impl Default for WalkingProfile {
    fn default() -> Self {
        Self {
            step_length_m: 0.65,
            weight_multiplier: 0.035,
            speed_height_multiplier: 0.029,
            kmh_to_mps: 0.278,
        }
    }
}

impl ActivityProfile for WalkingProfile {
    fn label(&self) -> &'static str {
        "SportsWalking"
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
        let profile = WalkingProfile::default();
        assert!((profile.action_length_m() - 0.65).abs() < f64::EPSILON);
        assert!((profile.kmh_to_mps - 0.278).abs() < f64::EPSILON);
    }
}
