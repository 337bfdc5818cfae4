//! Categorizer
//!
//! Partitions records into medical / administrative / other buckets by
//! substring match on the category name. First match wins, checked in
//! that order. Names containing neither marker land in "other".

use crate::types::WorkforceRecord;
use serde::{Deserialize, Serialize};

/// Marker identifying medical categories
pub const MEDICAL_MARKER: &str = "طبي";

/// Marker identifying administrative categories
pub const ADMINISTRATIVE_MARKER: &str = "إداري";

/// Bucket a record falls into
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    /// Name contains the medical marker
    Medical,
    /// Name contains the administrative marker (and not the medical one)
    Administrative,
    /// Everything else
    Other,
}

impl Category {
    /// Chart label
    #[inline]
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Category::Medical => "كوادر طبية",
            Category::Administrative => "كوادر إدارية",
            Category::Other => "أخرى",
        }
    }

    /// Chart fill color
    #[inline]
    #[must_use]
    pub fn fill(self) -> &'static str {
        match self {
            Category::Medical => "#0ea5e9",
            Category::Administrative => "#8b5cf6",
            Category::Other => "#64748b",
        }
    }
}

/// Position totals per bucket
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct CategoryBreakdown {
    /// Sum of `total` over medical records
    pub medical: u64,
    /// Sum of `total` over administrative records
    pub administrative: u64,
    /// Sum of `total` over the rest
    pub other: u64,
}

impl CategoryBreakdown {
    /// Sum of all buckets
    #[inline]
    #[must_use]
    pub fn total(&self) -> u64 {
        self.medical
            .saturating_add(self.administrative)
            .saturating_add(self.other)
    }

    /// Bucket value for a category
    #[inline]
    #[must_use]
    pub fn get(&self, category: Category) -> u64 {
        match category {
            Category::Medical => self.medical,
            Category::Administrative => self.administrative,
            Category::Other => self.other,
        }
    }

    /// Donut chart input, one slice per bucket in fixed order
    #[must_use]
    pub fn slices(&self) -> [DonutSlice; 3] {
        [Category::Medical, Category::Administrative, Category::Other].map(|c| DonutSlice {
            category: c,
            label: c.label(),
            value: self.get(c),
            fill: c.fill(),
        })
    }
}

/// One labelled slice of the staff-mix chart
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DonutSlice {
    /// Bucket
    pub category: Category,
    /// Display label
    pub label: &'static str,
    /// Position total
    pub value: u64,
    /// Fill color
    pub fill: &'static str,
}

/// Substring classifier with configurable markers
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Categorizer {
    medical_marker: String,
    administrative_marker: String,
}

impl Categorizer {
    /// Create classifier with explicit markers
    #[inline]
    #[must_use]
    pub fn new(medical_marker: impl Into<String>, administrative_marker: impl Into<String>) -> Self {
        Self {
            medical_marker: medical_marker.into(),
            administrative_marker: administrative_marker.into(),
        }
    }

    /// Bucket for a single category name
    #[must_use]
    pub fn classify(&self, name: &str) -> Category {
        if name.contains(self.medical_marker.as_str()) {
            Category::Medical
        } else if name.contains(self.administrative_marker.as_str()) {
            Category::Administrative
        } else {
            Category::Other
        }
    }

    /// Sum record totals per bucket
    #[must_use]
    pub fn categorize(&self, records: &[WorkforceRecord]) -> CategoryBreakdown {
        records
            .iter()
            .fold(CategoryBreakdown::default(), |mut acc, record| {
                let bucket = match self.classify(record.name()) {
                    Category::Medical => &mut acc.medical,
                    Category::Administrative => &mut acc.administrative,
                    Category::Other => &mut acc.other,
                };
                *bucket = bucket.saturating_add(record.total());
                acc
            })
    }
}

impl Default for Categorizer {
    fn default() -> Self {
        Self::new(MEDICAL_MARKER, ADMINISTRATIVE_MARKER)
    }
}

/// Categorize with the default markers
#[inline]
#[must_use]
pub fn categorize(records: &[WorkforceRecord]) -> CategoryBreakdown {
    Categorizer::default().categorize(records)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::defaults::default_collection;
    use crate::summary::compute;

    #[test]
    fn default_collection_breakdown() {
        let breakdown = categorize(&default_collection());
        assert_eq!(breakdown.medical, 1278);
        assert_eq!(breakdown.administrative, 186);
        assert_eq!(breakdown.other, 225);
        assert_eq!(breakdown.total(), compute(&default_collection()).total_positions);
    }

    #[test]
    fn largest_records_sum_without_overflow() {
        let records = vec![
            WorkforceRecord::new("طبية أ", u64::MAX, u64::MAX, "#000"),
            WorkforceRecord::new("طبية ب", u64::MAX, 1, "#000"),
        ];
        let breakdown = categorize(&records);
        assert_eq!(breakdown.medical, crate::MAX_COUNT * 3 + 1);
        assert_eq!(breakdown.total(), compute(&records).total_positions);
    }

    #[test]
    fn medical_wins_over_administrative() {
        let categorizer = Categorizer::default();
        assert_eq!(categorizer.classify("طبية إدارية"), Category::Medical);
        assert_eq!(categorizer.classify("إدارية"), Category::Administrative);
        assert_eq!(categorizer.classify("خدمية"), Category::Other);
    }

    #[test]
    fn custom_markers() {
        let categorizer = Categorizer::new("med", "admin");
        let records = vec![
            WorkforceRecord::new("med staff", 1, 1, "#000"),
            WorkforceRecord::new("admin staff", 2, 2, "#000"),
            WorkforceRecord::new("cleaning", 3, 3, "#000"),
        ];
        let breakdown = categorizer.categorize(&records);
        assert_eq!(breakdown, CategoryBreakdown { medical: 2, administrative: 4, other: 6 });
    }

    #[test]
    fn slices_follow_fixed_order() {
        let slices = categorize(&default_collection()).slices();
        assert_eq!(slices[0].category, Category::Medical);
        assert_eq!(slices[0].value, 1278);
        assert_eq!(slices[1].fill, "#8b5cf6");
        assert_eq!(slices[2].label, "أخرى");
    }

    #[test]
    fn empty_collection_is_zero() {
        assert_eq!(categorize(&[]), CategoryBreakdown::default());
    }
}
