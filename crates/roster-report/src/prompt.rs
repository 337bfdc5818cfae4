//! Prompt construction
//!
//! The roster and its summary are embedded as JSON into a fixed
//! instruction template. The wording is not part of any contract.

use roster_core::{SummaryStats, WorkforceRecord};
use serde::{Deserialize, Serialize};

/// Who the report is for and who prepared the data
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReportMetadata {
    /// Hospital name
    pub hospital: String,
    /// Data analyst
    pub author: String,
    /// Analyst role
    pub role: String,
    /// Date the roster snapshot refers to
    pub date: String,
}

impl Default for ReportMetadata {
    fn default() -> Self {
        Self {
            hospital: "مستشفى علي عمر عسكر".to_string(),
            author: "م: طارق المغربي".to_string(),
            role: "تحليل بيانات".to_string(),
            date: "26/12/2025م".to_string(),
        }
    }
}

/// Build the report prompt for a roster snapshot
///
/// # Errors
/// Returns the serialization error if the roster cannot be encoded
pub fn build_prompt(
    records: &[WorkforceRecord],
    summary: &SummaryStats,
    metadata: &ReportMetadata,
) -> Result<String, serde_json::Error> {
    let stats_json = serde_json::to_string(summary)?;
    let records_json = serde_json::to_string(records)?;

    Ok(format!(
        "You are a strategic advisor on hospital management and healthcare workforce analysis. \
Prepare a \"gap analysis and strategic solutions\" report for {hospital}, written in formal Arabic \
for decision makers and formatted as Markdown.\n\
\n\
Baseline figures:\n\
- Total establishment: {total} positions.\n\
- Currently occupied: {occupied} staff ({stability}%).\n\
- Vacant: {vacant} positions ({vacancy}%).\n\
\n\
Summary JSON: {stats_json}\n\
Category detail JSON: {records_json}\n\
\n\
Required sections:\n\
1. Executive summary: what these numbers mean for the hospital.\n\
2. Operational risk: the risk of leaving vacancies open in sensitive categories.\n\
3. Strategic solutions: at least five practical measures.\n\
4. Urgent recommendations: steps for the next 90 days.\n\
\n\
Data prepared by {author} ({role}), {date}.",
        hospital = metadata.hospital,
        total = summary.total_positions,
        occupied = summary.total_occupied,
        stability = summary.stability_rate,
        vacant = summary.total_vacant,
        vacancy = summary.vacancy_rate,
        author = metadata.author,
        role = metadata.role,
        date = metadata.date,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use roster_core::{compute, default_collection};

    #[test]
    fn prompt_carries_summary_and_records() {
        let records = default_collection();
        let summary = compute(&records);
        let prompt = build_prompt(&records, &summary, &ReportMetadata::default()).unwrap();

        assert!(prompt.contains("1689 positions"));
        assert!(prompt.contains("345 positions (20.4%)"));
        assert!(prompt.contains("\"totalPositions\":1689"));
        assert!(prompt.contains("\"name\":\"قيادية\""));
        assert!(prompt.contains("مستشفى علي عمر عسكر"));
    }

    #[test]
    fn prompt_for_empty_roster() {
        let prompt = build_prompt(&[], &compute(&[]), &ReportMetadata::default()).unwrap();
        assert!(prompt.contains("Category detail JSON: []"));
    }
}
