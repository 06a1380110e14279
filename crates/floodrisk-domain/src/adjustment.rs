//! Mean-depth adjustment modes

use std::fmt;

/// How to account for properties that did not flood.
///
/// The two modes model different assumptions and are never composed; a
/// caller picks exactly one per estimate.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Adjustment {
    /// Append `count` zero-depth readings before averaging
    Padding {
        /// Number of non-inundated properties missing from the readings
        count: u64,
    },
    /// Scale the unweighted mean by `value / 100`
    Percentage {
        /// Percent of the area inundated, in (0, 100]
        value: f64,
    },
}

impl Adjustment {
    /// No adjustment: the plain arithmetic mean.
    pub const NONE: Adjustment = Adjustment::Padding { count: 0 };

    /// Padding mode with `count` zero readings.
    pub fn padding(count: u64) -> Self {
        Adjustment::Padding { count }
    }

    /// Percentage mode with `value` percent inundated.
    pub fn percentage(value: f64) -> Self {
        Adjustment::Percentage { value }
    }
}

impl Default for Adjustment {
    fn default() -> Self {
        Self::NONE
    }
}

impl fmt::Display for Adjustment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Adjustment::Padding { count: 0 } => write!(f, "none"),
            Adjustment::Padding { count } => write!(f, "{} non-inundated", count),
            Adjustment::Percentage { value } => write!(f, "{}% inundated", value),
        }
    }
}
