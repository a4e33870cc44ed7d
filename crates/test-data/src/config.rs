//! Configuration types for record generation.

use serde::{Deserialize, Serialize};

use crate::ActivityKind;

/// Relative weights for how often each activity kind is generated.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct KindMix {
    pub running: u32,
    pub walking: u32,
    pub swimming: u32,
}

impl KindMix {
    /// Generates only one kind.
    pub fn only(kind: ActivityKind) -> Self {
        let mut mix = Self {
            running: 0,
            walking: 0,
            swimming: 0,
        };
        match kind {
            ActivityKind::Running => mix.running = 1,
            ActivityKind::Walking => mix.walking = 1,
            ActivityKind::Swimming => mix.swimming = 1,
        }
        mix
    }

    /// Kinds paired with their weights, in a fixed order.
    pub fn weights(&self) -> [(ActivityKind, u32); 3] {
        [
            (ActivityKind::Running, self.running),
            (ActivityKind::Walking, self.walking),
            (ActivityKind::Swimming, self.swimming),
        ]
    }
}

impl Default for KindMix {
    fn default() -> Self {
        Self {
            running: 2,
            walking: 2,
            swimming: 1,
        }
    }
}

/// Normal distributions for body measurements, clamped to plausible bounds.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct BodyDistribution {
    pub weight_mean_kg: f64,
    pub weight_std_dev_kg: f64,
    pub weight_bounds_kg: (f64, f64),
    pub height_mean_cm: f64,
    pub height_std_dev_cm: f64,
    pub height_bounds_cm: (f64, f64),
}

impl Default for BodyDistribution {
    fn default() -> Self {
        Self {
            weight_mean_kg: 74.0,
            weight_std_dev_kg: 12.0,
            weight_bounds_kg: (45.0, 140.0),
            height_mean_cm: 174.0,
            height_std_dev_cm: 9.0,
            height_bounds_cm: (145.0, 210.0),
        }
    }
}

/// Configuration for a generation run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenConfig {
    /// Number of packages to generate.
    pub record_count: usize,

    /// How often each activity kind appears.
    pub kind_mix: KindMix,

    /// Athlete body measurements.
    pub body: BodyDistribution,
}

impl Default for GenConfig {
    fn default() -> Self {
        Self {
            record_count: 20,
            kind_mix: KindMix::default(),
            body: BodyDistribution::default(),
        }
    }
}
