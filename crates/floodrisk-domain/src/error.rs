//! Error kinds for the estimation core

use thiserror::Error;

/// Result type alias for domain operations.
pub type Result<T> = std::result::Result<T, RiskError>;

/// Errors raised while computing a damage estimate.
///
/// Every failure is surfaced to the caller as-is; the core never retries or
/// substitutes a default.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RiskError {
    /// No readings to average over
    #[error("No depth readings supplied; the mean depth is undefined")]
    EmptyInput,

    /// Percentage adjustment outside (0, 100]
    #[error("Percent inundated must be greater than 0 and at most 100, got {0}")]
    OutOfRange(f64),

    /// A negative mean reached the damage lookup
    #[error("Mean depth cannot be negative, got {0}")]
    NegativeMean(f64),

    /// The mean is not a number
    #[error("Mean depth is not a number")]
    InvalidMean,

    /// A negative bucket was requested from the damage table
    #[error("Depth bucket cannot be negative, got {0}")]
    InvalidBucket(i64),

    /// The clamped bucket has no entry in the damage table
    #[error("No damage cost for bucket {0}; check it exists in the damage table")]
    InconsistentTable(i64),

    /// A reading is negative or not finite
    #[error("Depth reading {index} must be a non-negative finite number, got {value}")]
    InvalidReading {
        /// Zero-based position of the reading
        index: usize,
        /// The offending value
        value: f64,
    },

    /// A custom damage table failed validation
    #[error("Malformed damage table: {0}")]
    MalformedTable(String),
}
