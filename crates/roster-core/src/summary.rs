//! Summary calculator
//!
//! Pure aggregation over a collection. Sums commute, so the result does
//! not depend on record order.

use crate::types::{rate, SummaryStats, WorkforceRecord};

/// Derive summary statistics from the current collection
///
/// Defined for the empty collection: all counts and rates are zero.
#[must_use]
pub fn compute(records: &[WorkforceRecord]) -> SummaryStats {
    let (total_positions, total_occupied, total_vacant) =
        records.iter().fold((0u64, 0u64, 0u64), |(t, o, v), r| {
            (
                t.saturating_add(r.total()),
                o.saturating_add(r.occupied()),
                v.saturating_add(r.vacant()),
            )
        });

    SummaryStats {
        total_positions,
        total_occupied,
        total_vacant,
        stability_rate: rate(total_occupied, total_positions),
        vacancy_rate: rate(total_vacant, total_positions),
    }
}

/// Largest vacant count in any single category, `0` when empty
#[must_use]
pub fn largest_need(records: &[WorkforceRecord]) -> u64 {
    records.iter().map(WorkforceRecord::vacant).max().unwrap_or(0)
}

impl SummaryStats {
    /// Compute from a collection; same as [`compute`]
    #[inline]
    #[must_use]
    pub fn from_records(records: &[WorkforceRecord]) -> Self {
        compute(records)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::defaults::default_collection;
    use pretty_assertions::assert_eq;

    #[test]
    fn single_medical_record() {
        let records = vec![WorkforceRecord::new("طبية", 296, 137, "#f43f5e")];
        let stats = compute(&records);

        assert_eq!(stats.total_positions, 433);
        assert_eq!(stats.total_occupied, 296);
        assert_eq!(stats.total_vacant, 137);
        assert_eq!(stats.vacancy_rate, 31.6);
        assert_eq!(stats.stability_rate, 68.4);
    }

    #[test]
    fn empty_collection_is_all_zero() {
        let stats = compute(&[]);
        assert_eq!(stats, SummaryStats::default());
        assert!(!stats.stability_rate.is_nan());
        assert!(!stats.vacancy_rate.is_nan());
    }

    #[test]
    fn default_collection_summary() {
        let stats = compute(&default_collection());
        assert_eq!(
            stats,
            SummaryStats {
                total_positions: 1689,
                total_occupied: 1344,
                total_vacant: 345,
                stability_rate: 79.6,
                vacancy_rate: 20.4,
            }
        );
    }

    #[test]
    fn largest_need_picks_max_vacant() {
        assert_eq!(largest_need(&default_collection()), 137);
        assert_eq!(largest_need(&[]), 0);
    }
}
