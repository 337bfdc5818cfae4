//! Core types for Roster
//!
//! Defines the fundamental value types:
//! - Workforce records and the ordered collection
//! - Drafts coming from the edit form
//! - Derived summary statistics

use serde::{Deserialize, Serialize};

/// Color assigned to a record when the draft does not carry one
pub const DEFAULT_COLOR: &str = "#3b82f6";

/// Ordered roster; insertion order is display order
pub type WorkforceCollection = Vec<WorkforceRecord>;

/// Percentage of `part` in `whole`, rounded to one decimal place
///
/// Returns `0.0` when `whole` is zero.
#[inline]
#[must_use]
pub fn rate(part: u64, whole: u64) -> f64 {
    if whole == 0 {
        return 0.0;
    }
    #[allow(clippy::cast_precision_loss)]
    let percent = part as f64 / whole as f64 * 100.0;
    (percent * 10.0).round() / 10.0
}

/// Largest count a record can hold
///
/// Keeps `occupied + vacant` and every collection-wide sum well inside `u64`.
pub const MAX_COUNT: u64 = u32::MAX as u64;

/// Coerce raw form input into a non-negative count
///
/// The trimmed text must be a whole number (a fraction is truncated).
/// Blank, non-numeric, non-finite or negative input yields `0`; larger
/// values are capped at [`MAX_COUNT`].
#[must_use]
pub fn coerce_count(raw: &str) -> u64 {
    match raw.trim().parse::<f64>() {
        #[allow(
            clippy::cast_possible_truncation,
            clippy::cast_sign_loss,
            clippy::cast_precision_loss
        )]
        Ok(n) if n.is_finite() && n >= 1.0 => (n.trunc() as u64).min(MAX_COUNT),
        _ => 0,
    }
}

/// One staffing category with its occupied/vacant counts
///
/// `total` and `vacancy_rate` are derived on construction and cannot be
/// set independently. Records are replaced, never edited in place.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", from = "StoredRecord")]
pub struct WorkforceRecord {
    name: String,
    vacant: u64,
    occupied: u64,
    total: u64,
    vacancy_rate: f64,
    color: String,
}

impl WorkforceRecord {
    /// Build a record, deriving total and vacancy rate
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        occupied: u64,
        vacant: u64,
        color: impl Into<String>,
    ) -> Self {
        let occupied = occupied.min(MAX_COUNT);
        let vacant = vacant.min(MAX_COUNT);
        let total = occupied + vacant;
        Self {
            name: name.into(),
            vacant,
            occupied,
            total,
            vacancy_rate: rate(vacant, total),
            color: color.into(),
        }
    }

    /// Category name (primary key within a collection)
    #[inline]
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Filled positions
    #[inline]
    #[must_use]
    pub fn occupied(&self) -> u64 {
        self.occupied
    }

    /// Unfilled positions
    #[inline]
    #[must_use]
    pub fn vacant(&self) -> u64 {
        self.vacant
    }

    /// `occupied + vacant`
    #[inline]
    #[must_use]
    pub fn total(&self) -> u64 {
        self.total
    }

    /// Vacant share of total, percent with one decimal
    #[inline]
    #[must_use]
    pub fn vacancy_rate(&self) -> f64 {
        self.vacancy_rate
    }

    /// Occupied share of total as shown by the occupancy bar
    #[inline]
    #[must_use]
    pub fn occupancy_rate(&self) -> f64 {
        if self.total == 0 {
            return 0.0;
        }
        ((100.0 - self.vacancy_rate) * 10.0).round() / 10.0
    }

    /// Display color tag
    #[inline]
    #[must_use]
    pub fn color(&self) -> &str {
        &self.color
    }
}

/// On-disk shape of a record
///
/// Derived fields are ignored on read and recomputed, so a hand-edited
/// slot cannot break the record invariants.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct StoredRecord {
    name: String,
    #[serde(default)]
    occupied: u64,
    #[serde(default)]
    vacant: u64,
    #[serde(default = "default_color")]
    color: String,
}

fn default_color() -> String {
    DEFAULT_COLOR.to_string()
}

impl From<StoredRecord> for WorkforceRecord {
    fn from(stored: StoredRecord) -> Self {
        Self::new(stored.name, stored.occupied, stored.vacant, stored.color)
    }
}

/// Editor input for creating or replacing a record
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RecordDraft {
    /// Category name
    pub name: String,
    /// Filled positions
    pub occupied: u64,
    /// Unfilled positions
    pub vacant: u64,
    /// Display color, `DEFAULT_COLOR` when absent
    pub color: Option<String>,
}

impl RecordDraft {
    /// Create a draft from signed counts; negatives become zero
    #[inline]
    #[must_use]
    pub fn new(name: impl Into<String>, occupied: i64, vacant: i64) -> Self {
        Self {
            name: name.into(),
            occupied: u64::try_from(occupied).map_or(0, |n| n.min(MAX_COUNT)),
            vacant: u64::try_from(vacant).map_or(0, |n| n.min(MAX_COUNT)),
            color: None,
        }
    }

    /// Create a draft from raw form fields
    #[must_use]
    pub fn from_form(name: impl Into<String>, occupied: Option<&str>, vacant: Option<&str>) -> Self {
        Self {
            name: name.into(),
            occupied: occupied.map_or(0, coerce_count),
            vacant: vacant.map_or(0, coerce_count),
            color: None,
        }
    }

    /// With display color
    #[inline]
    #[must_use]
    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }

    /// Total the form would show for this draft
    #[inline]
    #[must_use]
    pub fn computed_total(&self) -> u64 {
        self.occupied.saturating_add(self.vacant)
    }

    /// Build the record this draft describes
    #[must_use]
    pub fn into_record(self) -> WorkforceRecord {
        let color = self.color.unwrap_or_else(default_color);
        WorkforceRecord::new(self.name, self.occupied, self.vacant, color)
    }
}

impl From<&WorkforceRecord> for RecordDraft {
    fn from(record: &WorkforceRecord) -> Self {
        Self {
            name: record.name.clone(),
            occupied: record.occupied,
            vacant: record.vacant,
            color: Some(record.color.clone()),
        }
    }
}

/// Aggregate statistics derived from a collection
///
/// Never stored on its own; always recomputed from the collection it
/// describes.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SummaryStats {
    /// Sum of record totals
    pub total_positions: u64,
    /// Sum of occupied counts
    pub total_occupied: u64,
    /// Sum of vacant counts
    pub total_vacant: u64,
    /// Occupied share of all positions, percent
    pub stability_rate: f64,
    /// Vacant share of all positions, percent
    pub vacancy_rate: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rate_rounds_to_one_decimal() {
        assert_eq!(rate(137, 433), 31.6);
        assert_eq!(rate(296, 433), 68.4);
        assert_eq!(rate(1, 3), 33.3);
        assert_eq!(rate(2, 3), 66.7);
    }

    #[test]
    fn rate_of_zero_whole_is_zero() {
        assert_eq!(rate(0, 0), 0.0);
        assert_eq!(rate(5, 0), 0.0);
    }

    #[test]
    fn record_derives_total_and_rate() {
        let record = WorkforceRecord::new("طبية", 296, 137, "#f43f5e");
        assert_eq!(record.total(), 433);
        assert_eq!(record.vacancy_rate(), 31.6);
        assert_eq!(record.occupancy_rate(), 68.4);
    }

    #[test]
    fn empty_record_has_zero_rates() {
        let record = WorkforceRecord::new("empty", 0, 0, DEFAULT_COLOR);
        assert_eq!(record.total(), 0);
        assert_eq!(record.vacancy_rate(), 0.0);
        assert_eq!(record.occupancy_rate(), 0.0);
    }

    #[test]
    fn coerce_count_accepts_only_whole_numbers() {
        assert_eq!(coerce_count("42"), 42);
        assert_eq!(coerce_count("  7 "), 7);
        assert_eq!(coerce_count("12abc"), 0);
        assert_eq!(coerce_count("3.9"), 3);
        assert_eq!(coerce_count("NaN"), 0);
        assert_eq!(coerce_count("inf"), 0);
        assert_eq!(coerce_count("99999999999"), MAX_COUNT);
        assert_eq!(coerce_count("+5"), 5);
        assert_eq!(coerce_count("-5"), 0);
        assert_eq!(coerce_count("abc"), 0);
        assert_eq!(coerce_count(""), 0);
    }

    #[test]
    fn draft_from_form_defaults_missing_fields() {
        let draft = RecordDraft::from_form("فنية", Some("10"), None);
        assert_eq!(draft.occupied, 10);
        assert_eq!(draft.vacant, 0);
        assert_eq!(draft.computed_total(), 10);
    }

    #[test]
    fn draft_clamps_negative_counts() {
        let draft = RecordDraft::new("x", -3, 4);
        assert_eq!(draft.occupied, 0);
        assert_eq!(draft.vacant, 4);
    }

    #[test]
    fn draft_without_color_gets_default() {
        let record = RecordDraft::new("x", 1, 1).into_record();
        assert_eq!(record.color(), DEFAULT_COLOR);
    }

    #[test]
    fn record_serializes_camel_case() {
        let record = WorkforceRecord::new("طبية", 296, 137, "#f43f5e");
        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json["vacancyRate"], 31.6);
        assert_eq!(json["total"], 433);
        assert_eq!(json["name"], "طبية");
    }

    #[test]
    fn record_deserialize_recomputes_derived_fields() {
        let json = r##"{"name":"x","occupied":3,"vacant":1,"total":99,"vacancyRate":7.0,"color":"#fff"}"##;
        let record: WorkforceRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.total(), 4);
        assert_eq!(record.vacancy_rate(), 25.0);
        assert_eq!(record.color(), "#fff");
    }

    #[test]
    fn oversized_counts_are_capped() {
        let json = format!(r#"{{"name":"a","occupied":{},"vacant":1}}"#, u64::MAX);
        let record: WorkforceRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(record.occupied(), MAX_COUNT);
        assert_eq!(record.total(), record.occupied() + record.vacant());

        let draft = RecordDraft::new("b", i64::MAX, -1);
        assert_eq!((draft.occupied, draft.vacant), (MAX_COUNT, 0));
    }

    #[test]
    fn record_deserialize_fills_missing_fields() {
        let record: WorkforceRecord = serde_json::from_str(r#"{"name":"x"}"#).unwrap();
        assert_eq!(record.total(), 0);
        assert_eq!(record.color(), DEFAULT_COLOR);
    }
}
