use std::io;

use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};
use workouts::{config::ReportConfig, run_report, samples::default_packages};

fn init_logging() {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();
}

fn main() -> anyhow::Result<()> {
    init_logging();
    let config = ReportConfig::from_env();

    tracing::info!("Reporting sample packages as {}", config.format);

    let packages = default_packages();
    let mut stdout = io::stdout().lock();
    let summary = run_report(&packages, &config, &mut stdout)?;

    if summary.failed > 0 {
        anyhow::bail!(
            "{} of {} packages could not be processed",
            summary.failed,
            packages.len()
        );
    }

    Ok(())
}
