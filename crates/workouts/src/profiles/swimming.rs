//! Swimming coefficients.

use super::ActivityProfile;

/// Profile for pool swimming sessions.
///
/// Distance counts strokes, but mean speed comes from pool geometry.
#[derive(Debug, Clone, PartialEq)]
pub struct SwimmingProfile {
    /// Stroke length in metres.
    pub stroke_length_m: f64,
    pub speed_shift: f64,
    pub weight_multiplier: f64,
}

impl Default for SwimmingProfile {
    fn default() -> Self {
        Self {
            stroke_length_m: 1.38,
            speed_shift: 1.1,
            weight_multiplier: 2.0,
        }
    }
}

impl ActivityProfile for SwimmingProfile {
    fn label(&self) -> &'static str {
        "Swimming"
    }

    fn action_length_m(&self) -> f64 {
        self.stroke_length_m
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_profile() {
        let profile = SwimmingProfile::default();
        assert!((profile.action_length_m() - 1.38).abs() < f64::EPSILON);
        assert!((profile.weight_multiplier - 2.0).abs() < f64::EPSILON);
    }
}
