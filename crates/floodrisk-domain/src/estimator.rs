//! Risk estimator: readings → mean depth → damage cost.
//!
//! The mean is computed under exactly one [`Adjustment`], rounded up to an
//! integer bucket and looked up in a [`DamageTable`].

use crate::damage_table::DamageTable;
use crate::error::{Result, RiskError};
use crate::traits::EstimateObserver;
use crate::Adjustment;

/// Outcome of a full estimate.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Estimate {
    /// Number of readings supplied (before any padding)
    pub readings: usize,
    /// Adjustment applied to the mean
    pub adjustment: Adjustment,
    /// Adjusted mean depth in metres
    pub mean_depth: f64,
    /// Bucket used for the lookup, after clamping to the table
    pub bucket: u32,
    /// Expected damage cost
    pub cost: u64,
}

/// Computes damage estimates against a damage table.
///
/// Stateless apart from the borrowed table and observer, so one estimator
/// can be shared freely.
#[derive(Clone, Copy)]
pub struct RiskEstimator<'a> {
    table: &'a DamageTable,
    observer: Option<&'a dyn EstimateObserver>,
}

impl RiskEstimator<'static> {
    /// Estimator over the standard table with no observer.
    pub fn standard() -> Self {
        Self::new(DamageTable::standard())
    }
}

impl<'a> RiskEstimator<'a> {
    /// Create an estimator over `table`.
    pub fn new(table: &'a DamageTable) -> Self {
        Self {
            table,
            observer: None,
        }
    }

    /// Attach an observer that is told about each computation step.
    pub fn with_observer(mut self, observer: &'a dyn EstimateObserver) -> Self {
        self.observer = Some(observer);
        self
    }

    /// The table lookups go through.
    pub fn table(&self) -> &'a DamageTable {
        self.table
    }

    /// Mean depth of `readings` under `adjustment`. No rounding is applied.
    pub fn mean_depth(&self, readings: &[f64], adjustment: Adjustment) -> Result<f64> {
        let sum = checked_sum(readings)?;

        let mean = match adjustment {
            Adjustment::Padding { count } => {
                if readings.is_empty() && count == 0 {
                    return Err(RiskError::EmptyInput);
                }
                sum / (readings.len() as f64 + count as f64)
            }
            Adjustment::Percentage { value } => {
                if !(value > 0.0 && value <= 100.0) {
                    return Err(RiskError::OutOfRange(value));
                }
                if readings.is_empty() {
                    return Err(RiskError::EmptyInput);
                }
                sum / readings.len() as f64 * (value / 100.0)
            }
        };

        if let Some(observer) = self.observer {
            observer.mean_computed(readings.len(), adjustment, mean);
        }
        Ok(mean)
    }

    /// Damage cost for a mean depth.
    pub fn estimate_damage(&self, mean: f64) -> Result<u64> {
        self.lookup(mean).map(|(_, cost)| cost)
    }

    /// Run the whole pipeline over `readings`.
    pub fn estimate(&self, readings: &[f64], adjustment: Adjustment) -> Result<Estimate> {
        let mean_depth = self.mean_depth(readings, adjustment)?;
        let (bucket, cost) = self.lookup(mean_depth)?;
        Ok(Estimate {
            readings: readings.len(),
            adjustment,
            mean_depth,
            bucket,
            cost,
        })
    }

    fn lookup(&self, mean: f64) -> Result<(u32, u64)> {
        if mean.is_nan() {
            return Err(RiskError::InvalidMean);
        }
        if mean < 0.0 {
            return Err(RiskError::NegativeMean(mean));
        }

        // `as` saturates, so infinite means land on the deepest tier
        let bucket = self.table.clamp(mean.ceil() as i64)?;
        let cost = self.table.cost_for(i64::from(bucket))?;

        if let Some(observer) = self.observer {
            observer.damage_looked_up(mean, bucket, cost);
        }
        Ok((bucket, cost))
    }
}

impl std::fmt::Debug for RiskEstimator<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RiskEstimator")
            .field("table", self.table)
            .field("observed", &self.observer.is_some())
            .finish()
    }
}

/// Mean depth against the standard table. See [`RiskEstimator::mean_depth`].
pub fn mean_depth(readings: &[f64], adjustment: Adjustment) -> Result<f64> {
    RiskEstimator::standard().mean_depth(readings, adjustment)
}

/// Damage cost from the standard table. See [`RiskEstimator::estimate_damage`].
pub fn estimate_damage(mean: f64) -> Result<u64> {
    RiskEstimator::standard().estimate_damage(mean)
}

fn checked_sum(readings: &[f64]) -> Result<f64> {
    readings.iter().enumerate().try_fold(0.0, |acc, (index, &value)| {
        if value.is_finite() && value >= 0.0 {
            Ok(acc + value)
        } else {
            Err(RiskError::InvalidReading { index, value })
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::DamageTier;
    use std::cell::RefCell;

    fn zero_to_ten() -> Vec<f64> {
        (0..=10).map(f64::from).collect()
    }

    #[test]
    fn test_mean_at_full_inundation() {
        assert_eq!(mean_depth(&zero_to_ten(), Adjustment::percentage(100.0)).unwrap(), 5.0);
    }

    #[test]
    fn test_mean_at_partial_inundation() {
        assert_eq!(mean_depth(&zero_to_ten(), Adjustment::percentage(75.0)).unwrap(), 3.75);
        let mean = mean_depth(&zero_to_ten(), Adjustment::percentage(47.2)).unwrap();
        assert!((mean - 2.36).abs() < 1e-9);
    }

    #[test]
    fn test_percentage_bounds() {
        let readings = zero_to_ten();
        assert_eq!(
            mean_depth(&readings, Adjustment::percentage(0.0)),
            Err(RiskError::OutOfRange(0.0))
        );
        assert_eq!(
            mean_depth(&readings, Adjustment::percentage(-1.0)),
            Err(RiskError::OutOfRange(-1.0))
        );
        assert_eq!(
            mean_depth(&readings, Adjustment::percentage(101.0)),
            Err(RiskError::OutOfRange(101.0))
        );
        assert!(matches!(
            mean_depth(&readings, Adjustment::percentage(f64::NAN)),
            Err(RiskError::OutOfRange(_))
        ));
        assert!(mean_depth(&readings, Adjustment::percentage(100.0)).is_ok());
    }

    #[test]
    fn test_padding_dilutes_mean() {
        let readings = vec![3.0, 3.0];
        assert_eq!(mean_depth(&readings, Adjustment::padding(0)).unwrap(), 3.0);
        assert_eq!(mean_depth(&readings, Adjustment::padding(4)).unwrap(), 1.0);
    }

    #[test]
    fn test_empty_readings() {
        assert_eq!(mean_depth(&[], Adjustment::NONE), Err(RiskError::EmptyInput));
        assert_eq!(
            mean_depth(&[], Adjustment::percentage(50.0)),
            Err(RiskError::EmptyInput)
        );
    }

    #[test]
    fn test_empty_readings_padded() {
        let mean = mean_depth(&[], Adjustment::padding(5)).unwrap();
        assert_eq!(mean, 0.0);
        assert_eq!(estimate_damage(mean).unwrap(), 0);
    }

    #[test]
    fn test_invalid_readings() {
        assert_eq!(
            mean_depth(&[1.0, -0.5], Adjustment::NONE),
            Err(RiskError::InvalidReading { index: 1, value: -0.5 })
        );
        assert!(matches!(
            mean_depth(&[f64::INFINITY], Adjustment::NONE),
            Err(RiskError::InvalidReading { index: 0, .. })
        ));
    }

    #[test]
    fn test_estimate_boundaries() {
        assert_eq!(estimate_damage(0.0).unwrap(), 0);
        assert_eq!(estimate_damage(1.0).unwrap(), 50_000);
        assert_eq!(estimate_damage(2.0).unwrap(), 80_000);
        assert_eq!(estimate_damage(2.0001).unwrap(), 95_000);
        assert_eq!(estimate_damage(2.3).unwrap(), 95_000);
        assert_eq!(estimate_damage(5.5).unwrap(), 120_000);
    }

    #[test]
    fn test_estimate_saturates() {
        assert_eq!(estimate_damage(99_999.0).unwrap(), 134_000);
        assert_eq!(estimate_damage(f64::INFINITY).unwrap(), 134_000);
    }

    #[test]
    fn test_estimate_rejects_negative_and_nan() {
        assert_eq!(estimate_damage(-1.0), Err(RiskError::NegativeMean(-1.0)));
        assert_eq!(estimate_damage(f64::NAN), Err(RiskError::InvalidMean));
    }

    #[test]
    fn test_full_pipeline_scenarios() {
        let estimator = RiskEstimator::standard();

        let full = estimator
            .estimate(&zero_to_ten(), Adjustment::percentage(100.0))
            .unwrap();
        assert_eq!(full.mean_depth, 5.0);
        assert_eq!(full.bucket, 5);
        assert_eq!(full.cost, 112_500);
        assert_eq!(estimate_damage(full.mean_depth).unwrap(), 112_500);

        let partial = estimator
            .estimate(&zero_to_ten(), Adjustment::percentage(75.0))
            .unwrap();
        assert_eq!(partial.mean_depth, 3.75);
        assert_eq!(partial.bucket, 4);
        assert_eq!(partial.cost, 105_000);
        assert_eq!(partial.readings, 11);
    }

    #[test]
    fn test_estimate_reports_clamped_bucket() {
        let estimate = RiskEstimator::standard()
            .estimate(&[40.0, 60.0], Adjustment::NONE)
            .unwrap();
        assert_eq!(estimate.bucket, 10);
        assert_eq!(estimate.cost, 134_000);
    }

    #[test]
    fn test_custom_table_propagates_inconsistency() {
        let table = DamageTable::from_tiers([
            DamageTier { bucket: 0, cost: 0 },
            DamageTier { bucket: 2, cost: 10 },
        ])
        .unwrap();
        let estimator = RiskEstimator::new(&table);
        assert_eq!(estimator.estimate_damage(0.5), Err(RiskError::InconsistentTable(1)));
        assert_eq!(estimator.estimate_damage(1.5).unwrap(), 10);
    }

    #[test]
    fn test_estimate_over_custom_table_saturates() {
        let table = DamageTable::from_tiers([
            DamageTier { bucket: 0, cost: 0 },
            DamageTier { bucket: 3, cost: 30 },
        ])
        .unwrap();
        let estimate = RiskEstimator::new(&table)
            .estimate(&[50.0], Adjustment::NONE)
            .unwrap();
        assert_eq!(estimate.bucket, 3);
        assert_eq!(estimate.cost, 30);
    }

    #[derive(Default)]
    struct Recorder {
        events: RefCell<Vec<String>>,
    }

    impl EstimateObserver for Recorder {
        fn mean_computed(&self, readings: usize, adjustment: Adjustment, mean: f64) {
            self.events
                .borrow_mut()
                .push(format!("mean {} {} {}", readings, adjustment, mean));
        }

        fn damage_looked_up(&self, mean: f64, bucket: u32, cost: u64) {
            self.events
                .borrow_mut()
                .push(format!("damage {} {} {}", mean, bucket, cost));
        }
    }

    #[test]
    fn test_observer_sees_each_step() {
        let recorder = Recorder::default();
        let estimator = RiskEstimator::standard().with_observer(&recorder);
        estimator.estimate(&[1.0, 2.0], Adjustment::NONE).unwrap();

        let events = recorder.events.borrow();
        assert_eq!(events.as_slice(), ["mean 2 none 1.5", "damage 1.5 2 80000"]);
    }

    #[test]
    fn test_observer_not_called_on_failure() {
        let recorder = Recorder::default();
        let estimator = RiskEstimator::standard().with_observer(&recorder);
        assert!(estimator.estimate(&[], Adjustment::NONE).is_err());
        assert!(recorder.events.borrow().is_empty());
    }
}
