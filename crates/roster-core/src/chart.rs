//! Chart inputs
//!
//! Data-only shapes for the occupied/vacant bar charts. Rendering is left
//! to the presentation layer.

use crate::types::WorkforceRecord;
use serde::Serialize;

/// Bars shown on the overview page
pub const OVERVIEW_BAR_LIMIT: usize = 6;

/// One stacked bar: occupied below, vacant on top
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StackedBar {
    /// Category name
    pub name: String,
    /// Filled positions
    pub occupied: u64,
    /// Unfilled positions
    pub vacant: u64,
}

impl From<&WorkforceRecord> for StackedBar {
    fn from(record: &WorkforceRecord) -> Self {
        Self {
            name: record.name().to_string(),
            occupied: record.occupied(),
            vacant: record.vacant(),
        }
    }
}

/// One bar per record, in collection order
#[must_use]
pub fn stacked_bars(records: &[WorkforceRecord]) -> Vec<StackedBar> {
    records.iter().map(StackedBar::from).collect()
}

/// Leading bars for the overview chart
#[must_use]
pub fn overview_bars(records: &[WorkforceRecord]) -> Vec<StackedBar> {
    top_bars(records, OVERVIEW_BAR_LIMIT)
}

/// First `limit` bars in collection order
#[must_use]
pub fn top_bars(records: &[WorkforceRecord], limit: usize) -> Vec<StackedBar> {
    records.iter().take(limit).map(StackedBar::from).collect()
}
