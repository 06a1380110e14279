//! Trait definitions for external interactions
//!
//! These traits define the boundaries between the estimation core and the
//! infrastructure around it. Implementations live in `floodrisk-cli`.

use crate::Adjustment;

/// Provider of flood-depth readings in metres.
///
/// Implemented by the infrastructure layer (the CSV reader in
/// `floodrisk-cli`). Implementations are expected to have already checked
/// that their backing data exists and is in the right format.
pub trait DepthSource {
    /// Error type for reading depths
    type Error;

    /// Load every depth reading. Order is irrelevant to the mean.
    fn depths(&self) -> Result<Vec<f64>, Self::Error>;
}

impl DepthSource for [f64] {
    type Error = std::convert::Infallible;

    fn depths(&self) -> Result<Vec<f64>, Self::Error> {
        Ok(self.to_vec())
    }
}

impl DepthSource for Vec<f64> {
    type Error = std::convert::Infallible;

    fn depths(&self) -> Result<Vec<f64>, Self::Error> {
        Ok(self.clone())
    }
}

/// Optional observer notified as an estimate is computed.
///
/// The core never depends on an observer being present; both hooks default
/// to doing nothing.
pub trait EstimateObserver {
    /// Called once the (adjusted) mean depth is known.
    fn mean_computed(&self, _readings: usize, _adjustment: Adjustment, _mean: f64) {}

    /// Called once the damage cost for a mean has been looked up.
    fn damage_looked_up(&self, _mean: f64, _bucket: u32, _cost: u64) {}
}
