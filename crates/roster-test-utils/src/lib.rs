//! Testing utilities for the roster workspace
//!
//! Shared fixtures for collections, drafts and dashboards.

#![allow(missing_docs)]

use roster_core::{RecordDraft, WorkforceCollection, WorkforceRecord};
use roster_store::{Dashboard, FileSlot, MemorySlot, RosterStore, StorageSlot};
use std::sync::Arc;
use tempfile::TempDir;

pub fn record(name: &str, occupied: u64, vacant: u64) -> WorkforceRecord {
    WorkforceRecord::new(name, occupied, vacant, "#3b82f6")
}

pub fn draft(name: &str, occupied: i64, vacant: i64) -> RecordDraft {
    RecordDraft::new(name, occupied, vacant)
}

/// The single-category collection used in the summary scenario
pub fn single_medical_collection() -> WorkforceCollection {
    vec![WorkforceRecord::new("طبية", 296, 137, "#f43f5e")]
}

/// Small mixed roster: one of each bucket
pub fn mixed_collection() -> WorkforceCollection {
    vec![
        record("طبية", 10, 5),
        record("إدارية", 4, 1),
        record("خدمية", 2, 2),
    ]
}

pub fn memory_dashboard() -> (Dashboard<Arc<MemorySlot>>, Arc<MemorySlot>) {
    let slot = Arc::new(MemorySlot::new());
    let dashboard = Dashboard::open(RosterStore::new(Arc::clone(&slot)));
    (dashboard, slot)
}

/// Dashboard over a file slot in a fresh temp dir; keep the dir alive
pub fn file_dashboard() -> (Dashboard<FileSlot>, TempDir) {
    let dir = tempfile::tempdir().unwrap();
    let dashboard = Dashboard::open(RosterStore::new(FileSlot::in_dir(dir.path())));
    (dashboard, dir)
}

/// Dashboard opened over `slot` after saving `records` into it
///
/// Records go through the normal load path, so a collection that breaks
/// the naming rules opens as the default roster.
pub fn seeded_dashboard<S: StorageSlot>(slot: S, records: &[WorkforceRecord]) -> Dashboard<S> {
    let store = RosterStore::new(slot);
    store.save(records).unwrap();
    Dashboard::open(store)
}

pub fn seeded_memory_dashboard(
    records: &[WorkforceRecord],
) -> (Dashboard<Arc<MemorySlot>>, Arc<MemorySlot>) {
    let slot = Arc::new(MemorySlot::new());
    (seeded_dashboard(Arc::clone(&slot), records), slot)
}

pub fn seeded_file_dashboard(records: &[WorkforceRecord]) -> (Dashboard<FileSlot>, TempDir) {
    let dir = tempfile::tempdir().unwrap();
    (seeded_dashboard(FileSlot::in_dir(dir.path()), records), dir)
}
