//! Estimate command implementation.

use crate::cli::EstimateArgs;
use crate::error::Result;
use crate::input::CsvDepthFile;
use crate::logging::TracingObserver;
use crate::output::Formatter;
use floodrisk_domain::{DepthSource, Estimate, RiskEstimator};
use tracing::{info, warn};

/// Execute the estimate command.
pub fn execute_estimate(args: EstimateArgs, formatter: &Formatter) -> Result<()> {
    let estimate = run_estimate(&args)?;

    if let Some(warning) = saturation_warning(&estimate, formatter) {
        eprintln!("{}", warning);
    }

    println!("{}", formatter.format_estimate(&estimate)?);
    Ok(())
}

/// Warning for a mean deeper than the table's deepest tier, if any.
///
/// Only a clamped bucket can sit below the mean; otherwise the bucket is the
/// mean's ceiling.
pub fn saturation_warning(estimate: &Estimate, formatter: &Formatter) -> Option<String> {
    if estimate.mean_depth <= f64::from(estimate.bucket) {
        return None;
    }
    Some(formatter.warning(&format!(
        "Mean depth {:.2} m is beyond the deepest tier; cost capped at bucket {}",
        estimate.mean_depth, estimate.bucket
    )))
}

/// Load the depth file named in `args` and estimate its damage cost.
pub fn run_estimate(args: &EstimateArgs) -> Result<Estimate> {
    let source = CsvDepthFile::open(&args.file)?;
    let readings = source.depths()?;
    info!(
        file = %source.path().display(),
        readings = readings.len(),
        "Loaded depth readings"
    );

    let observer = TracingObserver;
    let estimator = RiskEstimator::standard().with_observer(&observer);
    let adjustment = args.adjustment();

    match estimator.estimate(&readings, adjustment) {
        Ok(estimate) => Ok(estimate),
        Err(e) => {
            warn!(%adjustment, error = %e, "Estimate failed");
            Err(e.into())
        }
    }
}
