//! Floodrisk Domain Layer
//!
//! Core logic for turning per-property flood depths into an expected damage
//! cost for a postcode area. Everything here is pure: no I/O, no logging and
//! no global mutable state.
//!
//! ## Key Concepts
//!
//! - **Depth reading**: flood depth in metres at one property
//! - **Adjustment**: how the mean is diluted for properties that did not flood,
//!   either by padding with zero readings or by scaling by a percentage
//! - **Bucket**: the ceiling of the mean depth, clamped to the deepest tier
//! - **Damage table**: a static step function from bucket to cost
//!
//! ## Architecture
//!
//! Infrastructure (file parsing, logging, configuration) lives in
//! `floodrisk-cli`. This crate only defines trait seams for it, see
//! [`traits`].

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod adjustment;
pub mod damage_table;
pub mod error;
pub mod estimator;
pub mod traits;

// Re-exports for convenience
pub use adjustment::Adjustment;
pub use damage_table::{DamageTable, DamageTier};
pub use error::{Result, RiskError};
pub use estimator::{estimate_damage, mean_depth, Estimate, RiskEstimator};
pub use traits::{DepthSource, EstimateObserver};
