//! Dashboard state container
//!
//! Owns the current collection and its summary. Every edit is checked by
//! the record editor and then committed: the commit persists the new collection, recomputes the
//! summary and publishes a [`Snapshot`] to subscribers. Readers never see a
//! summary that disagrees with the collection.

use crate::slot::StorageSlot;
use crate::store::RosterStore;
use roster_core::{
    compute, editor, Categorizer, CategoryBreakdown, RecordDraft, RosterError, SummaryStats,
    ViewKind, WorkforceCollection, WorkforceRecord,
};
use tokio::sync::watch;

/// Synchronous yes/no prompt for destructive operations
pub trait Confirm {
    /// Ask the user; `true` means proceed
    fn confirm(&self, prompt: &str) -> bool;
}

impl<F> Confirm for F
where
    F: Fn(&str) -> bool,
{
    fn confirm(&self, prompt: &str) -> bool {
        self(prompt)
    }
}

/// Fixed answer, for non-interactive callers
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AutoConfirm(pub bool);

impl Confirm for AutoConfirm {
    fn confirm(&self, _prompt: &str) -> bool {
        self.0
    }
}

/// Result of an operation guarded by a confirmation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Confirmation {
    /// User agreed and the change was applied
    Applied,
    /// User declined; nothing changed
    Declined,
}

/// Collection and the summary derived from it
#[derive(Debug, Clone, PartialEq)]
pub struct Snapshot {
    /// Current records
    pub records: WorkforceCollection,
    /// Summary of `records`
    pub summary: SummaryStats,
}

/// Prompt shown before deleting a category
#[must_use]
pub fn remove_prompt(name: &str) -> String {
    format!("هل أنت متأكد من حذف المجموعة الوظيفية \"{name}\"؟")
}

/// Prompt shown before restoring the default roster
pub const RESET_PROMPT: &str =
    "هل أنت متأكد من رغبتك في استعادة البيانات الأصلية؟ سيتم فقدان جميع التعديلات الحالية.";

/// Single-user dashboard state
#[derive(Debug)]
pub struct Dashboard<S> {
    store: RosterStore<S>,
    records: WorkforceCollection,
    summary: SummaryStats,
    view: ViewKind,
    categorizer: Categorizer,
    snapshots: watch::Sender<Snapshot>,
}

impl<S: StorageSlot> Dashboard<S> {
    /// Open the dashboard: load-or-default, then derive the summary
    #[must_use]
    pub fn open(store: RosterStore<S>) -> Self {
        let records = store.load();
        let summary = compute(&records);
        let (snapshots, _) = watch::channel(Snapshot {
            records: records.clone(),
            summary,
        });

        tracing::info!(
            categories = records.len(),
            positions = summary.total_positions,
            "dashboard opened"
        );

        Self {
            store,
            records,
            summary,
            view: ViewKind::default(),
            categorizer: Categorizer::default(),
            snapshots,
        }
    }

    /// With a custom categorizer
    #[inline]
    #[must_use]
    pub fn with_categorizer(mut self, categorizer: Categorizer) -> Self {
        self.categorizer = categorizer;
        self
    }

    /// Add a category
    ///
    /// # Errors
    /// `Validation` or `DuplicateName`; the roster is unchanged
    pub fn add(&mut self, draft: RecordDraft) -> Result<(), RosterError> {
        let next = editor::add(&self.records, draft)?;
        self.commit(next);
        Ok(())
    }

    /// Replace the category named `original_name`
    ///
    /// # Errors
    /// `Validation`, `NotFound` or `DuplicateName`; the roster is unchanged
    pub fn update(&mut self, original_name: &str, draft: RecordDraft) -> Result<(), RosterError> {
        let next = editor::update(&self.records, original_name, draft)?;
        self.commit(next);
        Ok(())
    }

    /// Delete a category after confirmation
    ///
    /// # Errors
    /// `NotFound` if no category has that name (checked before asking)
    pub fn remove(&mut self, name: &str, confirm: &dyn Confirm) -> Result<Confirmation, RosterError> {
        let next = editor::remove(&self.records, name)?;
        if !confirm.confirm(&remove_prompt(name)) {
            tracing::debug!(name, "removal declined");
            return Ok(Confirmation::Declined);
        }
        self.commit(next);
        Ok(Confirmation::Applied)
    }

    /// Clear saved data and restore the default roster after confirmation
    ///
    /// The slot is left empty; the next edit writes it again.
    ///
    /// # Errors
    /// `Storage` if the slot cannot be cleared; the roster is unchanged
    pub fn reset(&mut self, confirm: &dyn Confirm) -> Result<Confirmation, RosterError> {
        if !confirm.confirm(RESET_PROMPT) {
            tracing::debug!("reset declined");
            return Ok(Confirmation::Declined);
        }
        let defaults = self.store.reset()?;
        self.replace(defaults);
        Ok(Confirmation::Applied)
    }

    /// The single mutation entry point
    ///
    /// Persists `next`, then swaps it in and republishes. A failed write
    /// is logged and the in-memory roster still advances; the next
    /// successful write catches the slot up.
    pub(crate) fn commit(&mut self, next: WorkforceCollection) {
        if let Err(e) = self.store.save(&next) {
            tracing::error!(error = %e, "failed to persist roster");
        }
        self.replace(next);
    }

    fn replace(&mut self, next: WorkforceCollection) {
        self.records = next;
        self.summary = compute(&self.records);
        self.snapshots.send_replace(Snapshot {
            records: self.records.clone(),
            summary: self.summary,
        });
    }

    /// Switch the active page
    #[inline]
    pub fn set_view(&mut self, view: ViewKind) {
        self.view = view;
    }

    /// Active page
    #[inline]
    #[must_use]
    pub fn view(&self) -> ViewKind {
        self.view
    }

    /// Current records in display order
    #[inline]
    #[must_use]
    pub fn records(&self) -> &[WorkforceRecord] {
        &self.records
    }

    /// Summary of the current records
    #[inline]
    #[must_use]
    pub fn summary(&self) -> SummaryStats {
        self.summary
    }

    /// Staff-mix buckets for the current records
    #[inline]
    #[must_use]
    pub fn breakdown(&self) -> CategoryBreakdown {
        self.categorizer.categorize(&self.records)
    }

    /// Current collection and summary together
    #[must_use]
    pub fn snapshot(&self) -> Snapshot {
        self.snapshots.borrow().clone()
    }

    /// Receive a new snapshot after every change
    #[inline]
    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<Snapshot> {
        self.snapshots.subscribe()
    }

    /// Backing store
    #[inline]
    #[must_use]
    pub fn store(&self) -> &RosterStore<S> {
        &self.store
    }
}
