use std::io::Write;
use std::path::Path;

use dotenv::dotenv;
use tracing::{info, span, Level};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::config::constant::DEFAULT_LOG_FILTER;
use crate::domain::types::FleetReport;
use crate::error::FleetResult;
use crate::report::output::write_report;
use crate::setup::init::load_input;
use crate::setup::validate::validate;
use crate::solver::staffing::fleet_engineers;

/// Initialize tracing and environment
///
/// Logs go to stderr so stdout carries nothing but the report.
pub fn init_tracing_and_env() -> anyhow::Result<()> {
    dotenv().ok();

    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(DEFAULT_LOG_FILTER))?;

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr))
        .try_init()?;

    Ok(())
}

/// Load, validate, compute and report. Nothing is written to `out` unless every step succeeds.
pub fn run<W: Write>(input_path: &Path, out: &mut W) -> FleetResult<FleetReport> {
    let params = {
        let span = span!(Level::INFO, "setup");
        let _guard = span.enter();
        validate(load_input(input_path)?)?
    };

    let report = {
        let span = span!(Level::INFO, "staffing", districts = params.scooters.len());
        let _guard = span.enter();
        FleetReport {
            fleet_engineers: fleet_engineers(&params),
        }
    };

    info!("Fleet needs {} engineers", report.fleet_engineers);

    write_report(&report, out)?;
    Ok(report)
}
