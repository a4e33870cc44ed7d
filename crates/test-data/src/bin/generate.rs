//! Generates synthetic sensor packages and prints their reports.
//!
//! Run with:
//! ```
//! GENERATE_COUNT=50 cargo run -p test-data --bin generate
//! ```

use std::io;

use rand::SeedableRng;
use rand::rngs::StdRng;
use test_data::config::GenConfig;
use test_data::generators::RecordGenerator;
use tracing_subscriber::EnvFilter;
use workouts::{config::ReportConfig, run_report};

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(io::stderr)
        .init();

    let defaults = GenConfig::default();
    let record_count = std::env::var("GENERATE_COUNT")
        .ok()
        .and_then(|raw| raw.parse::<usize>().ok())
        .unwrap_or(defaults.record_count);
    let config = GenConfig {
        record_count,
        ..defaults
    };

    let mut rng = StdRng::seed_from_u64(12345); // Reproducible data
    let packages = RecordGenerator::new(config).generate(&mut rng)?;
    tracing::info!("Generated {} packages", packages.len());

    let report_config = ReportConfig::from_env();
    let summary = run_report(&packages, &report_config, &mut io::stdout().lock())?;

    tracing::info!("Report completed!");
    tracing::info!("  Processed: {}", summary.processed);
    tracing::info!("  Failed: {}", summary.failed);

    Ok(())
}
