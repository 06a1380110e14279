//! Damage table: a step function from depth bucket to cost.
//!
//! Bucket `b` covers mean depths in `(b - 1, b]` metres; bucket 0 covers
//! exactly zero. Depths beyond the deepest tier cost the same as that tier.

use crate::error::{Result, RiskError};
use std::sync::LazyLock;

/// Costs of the standard table, indexed by bucket, in whole currency units.
const STANDARD_COSTS: [u64; 11] = [
    0, 50_000, 80_000, 95_000, 105_000, 112_500, 120_000, 125_000, 130_000, 132_500, 134_000,
];

static STANDARD: LazyLock<DamageTable> = LazyLock::new(|| DamageTable {
    tiers: STANDARD_COSTS
        .iter()
        .zip(0u32..)
        .map(|(&cost, bucket)| DamageTier { bucket, cost })
        .collect(),
});

/// One row of the damage table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DamageTier {
    /// Upper inclusive depth of the tier, in whole metres
    pub bucket: u32,
    /// Expected damage cost for the tier
    pub cost: u64,
}

/// Immutable damage table, ordered by bucket.
///
/// Invariants: at least one tier, buckets unique, costs non-decreasing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DamageTable {
    tiers: Vec<DamageTier>,
}

impl DamageTable {
    /// The standard table (buckets 0..=10).
    pub fn standard() -> &'static DamageTable {
        &STANDARD
    }

    /// Build a custom table from tiers in any order.
    ///
    /// Gaps between buckets are allowed; a lookup that lands in one fails
    /// with [`RiskError::InconsistentTable`].
    pub fn from_tiers(tiers: impl IntoIterator<Item = DamageTier>) -> Result<Self> {
        let mut tiers: Vec<DamageTier> = tiers.into_iter().collect();
        if tiers.is_empty() {
            return Err(RiskError::MalformedTable("table has no tiers".to_string()));
        }
        tiers.sort_by_key(|t| t.bucket);

        for pair in tiers.windows(2) {
            let (prev, next) = (pair[0], pair[1]);
            if prev.bucket == next.bucket {
                return Err(RiskError::MalformedTable(format!(
                    "bucket {} appears more than once",
                    next.bucket
                )));
            }
            if next.cost < prev.cost {
                return Err(RiskError::MalformedTable(format!(
                    "cost decreases from bucket {} ({}) to bucket {} ({})",
                    prev.bucket, prev.cost, next.bucket, next.cost
                )));
            }
        }

        Ok(Self { tiers })
    }

    /// Deepest defined bucket.
    pub fn max_bucket(&self) -> u32 {
        // Non-empty by construction
        self.tiers.last().map_or(0, |t| t.bucket)
    }

    /// Clamp a non-negative bucket to the deepest defined tier.
    pub fn clamp(&self, bucket: i64) -> Result<u32> {
        if bucket < 0 {
            return Err(RiskError::InvalidBucket(bucket));
        }
        let max = self.max_bucket();
        Ok(u32::try_from(bucket).map_or(max, |b| b.min(max)))
    }

    /// Cost for `bucket`, saturating at the deepest tier.
    pub fn cost_for(&self, bucket: i64) -> Result<u64> {
        let clamped = self.clamp(bucket)?;
        self.tiers
            .binary_search_by_key(&clamped, |t| t.bucket)
            .map(|i| self.tiers[i].cost)
            .map_err(|_| RiskError::InconsistentTable(i64::from(clamped)))
    }

    /// Tiers in ascending bucket order.
    pub fn tiers(&self) -> &[DamageTier] {
        &self.tiers
    }

    /// Iterate over tiers in ascending bucket order.
    pub fn iter(&self) -> impl Iterator<Item = &DamageTier> {
        self.tiers.iter()
    }
}

impl<'a> IntoIterator for &'a DamageTable {
    type Item = &'a DamageTier;
    type IntoIter = std::slice::Iter<'a, DamageTier>;

    fn into_iter(self) -> Self::IntoIter {
        self.tiers.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tier(bucket: u32, cost: u64) -> DamageTier {
        DamageTier { bucket, cost }
    }

    #[test]
    fn test_standard_table_values() {
        let table = DamageTable::standard();
        assert_eq!(table.max_bucket(), 10);
        assert_eq!(table.tiers().len(), 11);
        assert_eq!(table.cost_for(0).unwrap(), 0);
        assert_eq!(table.cost_for(1).unwrap(), 50_000);
        assert_eq!(table.cost_for(3).unwrap(), 95_000);
        assert_eq!(table.cost_for(5).unwrap(), 112_500);
        assert_eq!(table.cost_for(10).unwrap(), 134_000);
    }

    #[test]
    fn test_standard_table_is_non_decreasing() {
        let table = DamageTable::standard();
        assert!(table.tiers().windows(2).all(|w| w[0].cost <= w[1].cost));
    }

    #[test]
    fn test_saturates_above_max() {
        let table = DamageTable::standard();
        assert_eq!(table.cost_for(11).unwrap(), 134_000);
        assert_eq!(table.cost_for(99_999).unwrap(), 134_000);
        assert_eq!(table.cost_for(i64::MAX).unwrap(), 134_000);
    }

    #[test]
    fn test_negative_bucket_rejected() {
        let table = DamageTable::standard();
        assert_eq!(table.cost_for(-1), Err(RiskError::InvalidBucket(-1)));
    }

    #[test]
    fn test_gap_is_inconsistent() {
        let table = DamageTable::from_tiers([tier(0, 0), tier(1, 10), tier(3, 30)]).unwrap();
        assert_eq!(table.cost_for(1).unwrap(), 10);
        assert_eq!(table.cost_for(2), Err(RiskError::InconsistentTable(2)));
        assert_eq!(table.cost_for(7).unwrap(), 30);
    }

    #[test]
    fn test_missing_zero_bucket_is_inconsistent() {
        let table = DamageTable::from_tiers([tier(2, 100)]).unwrap();
        assert_eq!(table.cost_for(0), Err(RiskError::InconsistentTable(0)));
        assert_eq!(table.cost_for(5).unwrap(), 100);
    }

    #[test]
    fn test_from_tiers_sorts() {
        let table = DamageTable::from_tiers([tier(2, 20), tier(0, 0), tier(1, 10)]).unwrap();
        let buckets: Vec<u32> = table.iter().map(|t| t.bucket).collect();
        assert_eq!(buckets, vec![0, 1, 2]);
    }

    #[test]
    fn test_from_tiers_rejects_malformed() {
        assert!(matches!(
            DamageTable::from_tiers(Vec::new()),
            Err(RiskError::MalformedTable(_))
        ));
        assert!(matches!(
            DamageTable::from_tiers([tier(0, 0), tier(0, 5)]),
            Err(RiskError::MalformedTable(_))
        ));
        assert!(matches!(
            DamageTable::from_tiers([tier(0, 10), tier(1, 5)]),
            Err(RiskError::MalformedTable(_))
        ));
    }
}
