//! Record editor
//!
//! Create/update/delete over a collection. Every operation takes the
//! current collection by reference and returns a wholly new collection;
//! on error the caller's collection is untouched.

use crate::error::RosterError;
use crate::types::{RecordDraft, WorkforceCollection, WorkforceRecord};
use std::collections::HashSet;

/// Append a new record built from `draft`
///
/// # Errors
/// - `RosterError::Validation` if the draft name is blank
/// - `RosterError::DuplicateName` if a record with the same name exists
pub fn add(records: &[WorkforceRecord], draft: RecordDraft) -> Result<WorkforceCollection, RosterError> {
    validate(&draft)?;

    if position(records, &draft.name).is_some() {
        return Err(RosterError::DuplicateName(draft.name));
    }

    let record = draft.into_record();
    tracing::debug!(name = record.name(), total = record.total(), "adding record");

    let mut next = Vec::with_capacity(records.len() + 1);
    next.extend_from_slice(records);
    next.push(record);
    Ok(next)
}

/// Replace the record named `original_name` in place
///
/// A rename is allowed as long as the new name does not collide with
/// another record.
///
/// # Errors
/// - `RosterError::Validation` if the draft name is blank
/// - `RosterError::NotFound` if `original_name` is absent
/// - `RosterError::DuplicateName` if the new name belongs to another record
pub fn update(
    records: &[WorkforceRecord],
    original_name: &str,
    draft: RecordDraft,
) -> Result<WorkforceCollection, RosterError> {
    validate(&draft)?;

    let idx = position(records, original_name)
        .ok_or_else(|| RosterError::NotFound(original_name.to_string()))?;

    if draft.name != original_name && position(records, &draft.name).is_some() {
        return Err(RosterError::DuplicateName(draft.name));
    }

    let record = draft.into_record();
    tracing::debug!(from = original_name, to = record.name(), "updating record");

    let mut next = records.to_vec();
    next[idx] = record;
    Ok(next)
}

/// Drop the record named `name`, keeping the order of the rest
///
/// # Errors
/// - `RosterError::NotFound` if no record has that name
pub fn remove(records: &[WorkforceRecord], name: &str) -> Result<WorkforceCollection, RosterError> {
    let idx = position(records, name).ok_or_else(|| RosterError::NotFound(name.to_string()))?;
    tracing::debug!(name, "removing record");

    let mut next = records.to_vec();
    next.remove(idx);
    Ok(next)
}

/// Find a record by exact, case-sensitive name
#[inline]
#[must_use]
pub fn find<'a>(records: &'a [WorkforceRecord], name: &str) -> Option<&'a WorkforceRecord> {
    records.iter().find(|r| r.name() == name)
}

/// Check a whole collection against the editor's rules
///
/// Used for collections that did not come through the editor, such as a
/// hand-edited slot.
///
/// # Errors
/// - `RosterError::Validation` for a blank name
/// - `RosterError::DuplicateName` for the first repeated name
pub fn check_collection(records: &[WorkforceRecord]) -> Result<(), RosterError> {
    let mut seen = HashSet::with_capacity(records.len());
    for record in records {
        if record.name().trim().is_empty() {
            return Err(RosterError::Validation("name is required".to_string()));
        }
        if !seen.insert(record.name()) {
            return Err(RosterError::DuplicateName(record.name().to_string()));
        }
    }
    Ok(())
}

fn position(records: &[WorkforceRecord], name: &str) -> Option<usize> {
    records.iter().position(|r| r.name() == name)
}

fn validate(draft: &RecordDraft) -> Result<(), RosterError> {
    if draft.name.trim().is_empty() {
        return Err(RosterError::Validation("name is required".to_string()));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::defaults::default_collection;

    fn sample() -> WorkforceCollection {
        vec![
            WorkforceRecord::new("a", 1, 1, "#111111"),
            WorkforceRecord::new("b", 2, 2, "#222222"),
            WorkforceRecord::new("c", 3, 3, "#333333"),
        ]
    }

    #[test]
    fn add_appends_at_end() {
        let next = add(&sample(), RecordDraft::new("d", 10, 5)).unwrap();
        assert_eq!(next.len(), 4);
        assert_eq!(next[3].name(), "d");
        assert_eq!(next[3].total(), 15);
        assert_eq!(next[3].vacancy_rate(), 33.3);
    }

    #[test]
    fn add_rejects_duplicate() {
        let records = sample();
        let err = add(&records, RecordDraft::new("b", 1, 1)).unwrap_err();
        assert!(matches!(err, RosterError::DuplicateName(ref n) if n == "b"));
        assert_eq!(records, sample());
    }

    #[test]
    fn add_is_case_sensitive() {
        let next = add(&sample(), RecordDraft::new("B", 1, 1)).unwrap();
        assert_eq!(next.len(), 4);
    }

    #[test]
    fn add_rejects_blank_name() {
        let err = add(&sample(), RecordDraft::new("   ", 1, 1)).unwrap_err();
        assert!(matches!(err, RosterError::Validation(_)));
    }

    #[test]
    fn update_replaces_in_place() {
        let next = update(&sample(), "b", RecordDraft::new("b", 8, 2)).unwrap();
        assert_eq!(next.len(), 3);
        assert_eq!(next[1].name(), "b");
        assert_eq!(next[1].total(), 10);
        assert_eq!(next[1].vacancy_rate(), 20.0);
        assert_eq!(next[0], sample()[0]);
        assert_eq!(next[2], sample()[2]);
    }

    #[test]
    fn update_allows_rename_to_free_name() {
        let next = update(&sample(), "b", RecordDraft::new("z", 2, 2)).unwrap();
        assert_eq!(next[1].name(), "z");
        assert!(find(&next, "b").is_none());
    }

    #[test]
    fn update_rejects_rename_collision() {
        let err = update(&sample(), "b", RecordDraft::new("c", 2, 2)).unwrap_err();
        assert!(matches!(err, RosterError::DuplicateName(ref n) if n == "c"));
    }

    #[test]
    fn update_missing_is_not_found() {
        let err = update(&sample(), "nope", RecordDraft::new("nope", 1, 1)).unwrap_err();
        assert!(matches!(err, RosterError::NotFound(_)));
    }

    #[test]
    fn update_keeps_existing_color_from_record() {
        let records = sample();
        let mut draft = RecordDraft::from(&records[0]);
        draft.vacant = 9;
        let next = update(&records, "a", draft).unwrap();
        assert_eq!(next[0].color(), "#111111");
        assert_eq!(next[0].total(), 10);
    }

    #[test]
    fn remove_preserves_order() {
        let next = remove(&sample(), "b").unwrap();
        let names: Vec<_> = next.iter().map(WorkforceRecord::name).collect();
        assert_eq!(names, vec!["a", "c"]);
    }

    #[test]
    fn remove_missing_is_not_found() {
        assert!(matches!(
            remove(&sample(), "x").unwrap_err(),
            RosterError::NotFound(_)
        ));
    }

    #[test]
    fn check_collection_flags_repeats_and_blanks() {
        assert!(check_collection(&sample()).is_ok());
        assert!(check_collection(&default_collection()).is_ok());

        let mut repeated = sample();
        repeated.push(WorkforceRecord::new("a", 9, 9, "#000000"));
        assert!(matches!(
            check_collection(&repeated),
            Err(RosterError::DuplicateName(name)) if name == "a"
        ));

        let blank = vec![WorkforceRecord::new("  ", 1, 1, "#000000")];
        assert!(matches!(check_collection(&blank), Err(RosterError::Validation(_))));
    }

    #[test]
    fn add_then_remove_restores_defaults() {
        let original = default_collection();
        let added = add(&original, RecordDraft::new("جديدة", 4, 4)).unwrap();
        let restored = remove(&added, "جديدة").unwrap();
        assert_eq!(restored, original);
    }
}
