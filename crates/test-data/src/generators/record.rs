//! Raw sensor package generation.

use rand::Rng;
use rand::distributions::WeightedIndex;
use rand::seq::SliceRandom;
use rand_distr::{Distribution, Normal, NormalError};
use thiserror::Error;
use tracing::debug;

use workouts::profiles::{ActivityProfile, SwimmingProfile};

use crate::config::{BodyDistribution, GenConfig};
use crate::profiles::{
    AthleteProfile, RunnerProfile, SwimmerProfile, WalkerProfile, sample_variance,
};
use crate::{ActivityKind, Package};

/// Pool length used when a swimmer profile lists none.
const FALLBACK_POOL_LENGTH_M: f64 = 25.0;

#[derive(Debug, Error)]
pub enum GenError {
    #[error("Kind mix must give at least one activity kind a positive weight")]
    EmptyKindMix,
    #[error("Invalid body distribution: {0}")]
    InvalidBody(#[from] NormalError),
    #[error("Invalid {field} bounds ({min}, {max}): must be positive with min <= max")]
    InvalidBounds {
        field: &'static str,
        min: f64,
        max: f64,
    },
    #[error("Invalid pool length {0}: must be a positive number of metres")]
    InvalidPoolLength(f64),
}

fn check_bounds(field: &'static str, (min, max): (f64, f64)) -> Result<(), GenError> {
    if min.is_finite() && max.is_finite() && min > 0.0 && min <= max {
        Ok(())
    } else {
        Err(GenError::InvalidBounds { field, min, max })
    }
}

/// Samples body measurements from a [`BodyDistribution`].
struct BodySampler {
    weight: Normal<f64>,
    height: Normal<f64>,
    config: BodyDistribution,
}

impl BodySampler {
    fn new(config: BodyDistribution) -> Result<Self, GenError> {
        check_bounds("weight_kg", config.weight_bounds_kg)?;
        check_bounds("height_cm", config.height_bounds_cm)?;

        Ok(Self {
            weight: Normal::new(config.weight_mean_kg, config.weight_std_dev_kg)?,
            height: Normal::new(config.height_mean_cm, config.height_std_dev_cm)?,
            config,
        })
    }

    /// Body weight in kilograms, to one decimal.
    fn weight_kg(&self, rng: &mut impl Rng) -> f64 {
        let (min, max) = self.config.weight_bounds_kg;
        let weight: f64 = self.weight.sample(rng);
        (weight.clamp(min, max) * 10.0).round() / 10.0
    }

    /// Height in whole centimetres.
    fn height_cm(&self, rng: &mut impl Rng) -> f64 {
        let (min, max) = self.config.height_bounds_cm;
        let height: f64 = self.height.sample(rng);
        height.clamp(min, max).round()
    }
}

/// Generates raw sensor packages.
///
/// Every package it produces dispatches and computes without error.
pub struct RecordGenerator {
    config: GenConfig,
    runner: RunnerProfile,
    walker: WalkerProfile,
    swimmer: SwimmerProfile,
}

impl RecordGenerator {
    /// Creates a generator with default athlete profiles.
    pub fn new(config: GenConfig) -> Self {
        Self {
            config,
            runner: RunnerProfile::default(),
            walker: WalkerProfile::default(),
            swimmer: SwimmerProfile::default(),
        }
    }

    pub fn with_swimmer(mut self, swimmer: SwimmerProfile) -> Self {
        self.swimmer = swimmer;
        self
    }

    /// Generates `record_count` packages with kinds drawn from the kind mix.
    pub fn generate(&self, rng: &mut impl Rng) -> Result<Vec<Package>, GenError> {
        let weights = self.config.kind_mix.weights();
        let index = WeightedIndex::new(weights.iter().map(|(_, weight)| *weight))
            .map_err(|_| GenError::EmptyKindMix)?;
        let body = self.prepare()?;

        let packages: Vec<Package> = (0..self.config.record_count)
            .map(|_| {
                let kind = weights[index.sample(rng)].0;
                self.package_for(kind, &body, rng)
            })
            .collect();

        debug!("Generated {} packages", packages.len());
        Ok(packages)
    }

    /// Generates a single package of the given kind.
    pub fn generate_one(
        &self,
        kind: ActivityKind,
        rng: &mut impl Rng,
    ) -> Result<Package, GenError> {
        let body = self.prepare()?;
        Ok(self.package_for(kind, &body, rng))
    }

    /// Checks the configuration and profiles before any sampling.
    fn prepare(&self) -> Result<BodySampler, GenError> {
        if let Some(&length) = self
            .swimmer
            .pool_lengths_m
            .iter()
            .find(|length| !(length.is_finite() && **length > 0.0))
        {
            return Err(GenError::InvalidPoolLength(length));
        }
        BodySampler::new(self.config.body)
    }

    fn package_for(
        &self,
        kind: ActivityKind,
        body: &BodySampler,
        rng: &mut impl Rng,
    ) -> Package {
        let values = match kind {
            ActivityKind::Running => {
                let (actions, duration) = sample_session(&self.runner, rng);
                vec![actions, duration, body.weight_kg(rng)]
            }
            ActivityKind::Walking => {
                let (actions, duration) = sample_session(&self.walker, rng);
                vec![actions, duration, body.weight_kg(rng), body.height_cm(rng)]
            }
            ActivityKind::Swimming => {
                let (strokes, duration) = sample_session(&self.swimmer, rng);
                let pool_length = self
                    .swimmer
                    .pool_lengths_m
                    .choose(rng)
                    .copied()
                    .unwrap_or(FALLBACK_POOL_LENGTH_M);
                // Whole pool lengths covered by the strokes taken
                let swum_m = strokes * SwimmingProfile::default().action_length_m();
                let pool_count = (swum_m / pool_length).floor();
                vec![strokes, duration, body.weight_kg(rng), pool_length, pool_count]
            }
        };

        Package::new(kind.code(), values)
    }
}

/// Samples a session length (hours, two decimals) and the action count for it.
fn sample_session(profile: &dyn AthleteProfile, rng: &mut impl Rng) -> (f64, f64) {
    let (min, max) = profile.duration_range_hours();
    let duration = (rng.gen_range(min..=max) * 100.0).round() / 100.0;
    let variance_factor = sample_variance(profile, rng);
    let actions = (profile.actions_per_hour() * duration * variance_factor).round();
    (actions, duration)
}
