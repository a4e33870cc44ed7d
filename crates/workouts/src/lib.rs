pub mod calculator;
pub mod config;
pub mod dispatch;
pub mod errors;
pub mod models;
pub mod profiles;
pub mod report;
pub mod samples;

use std::io::Write;

use tracing::{info, warn};

use crate::{
    config::ReportConfig,
    dispatch::read_package,
    errors::{ReportError, WorkoutError},
    models::{ComputedMetrics, Package},
    report::render,
};

/// Counts from one report run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReportSummary {
    pub processed: usize,
    pub failed: usize,
}

/// Dispatches and computes a single package.
pub fn summarize_package(package: &Package) -> Result<ComputedMetrics, WorkoutError> {
    read_package(&package.kind_code, &package.values)?.compute()
}

/// Writes one report line per package, in input order.
///
/// A package that fails dispatch or computation is logged and skipped; the
/// rest of the batch still runs. Write failures abort the run.
pub fn run_report<W: Write>(
    packages: &[Package],
    config: &ReportConfig,
    out: &mut W,
) -> Result<ReportSummary, ReportError> {
    let mut summary = ReportSummary::default();

    for (index, package) in packages.iter().enumerate() {
        match summarize_package(package) {
            Ok(metrics) => {
                writeln!(out, "{}", render(&metrics, config.format)?)?;
                summary.processed += 1;
            }
            Err(e) => {
                warn!(index, code = %package.kind_code, "Skipping package: {e}");
                summary.failed += 1;
            }
        }
    }

    info!(
        processed = summary.processed,
        failed = summary.failed,
        "Report finished"
    );
    Ok(summary)
}
