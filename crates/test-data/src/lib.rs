//! Synthetic sensor packages for workouts.
//!
//! This crate generates plausible raw readings for every activity kind so the
//! calculators can be exercised on many records instead of a handful of
//! fixtures.
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use rand::SeedableRng;
//! use test_data::prelude::*;
//!
//! let mut rng = rand::rngs::StdRng::seed_from_u64(12345);
//! let packages = RecordGenerator::new(GenConfig::default()).generate(&mut rng)?;
//! ```

pub mod config;
pub mod generators;
pub mod profiles;

pub use workouts::models::{ActivityKind, Package};

pub mod prelude {
    //! Convenient re-exports for common usage.

    pub use crate::config::{BodyDistribution, GenConfig, KindMix};
    pub use crate::generators::{GenError, RecordGenerator};
    pub use crate::profiles::{
        AthleteProfile, RunnerProfile, SwimmerProfile, WalkerProfile, sample_variance,
    };
    pub use crate::{ActivityKind, Package};
}
