//! Roster store
//!
//! Loads the persisted collection (falling back to the built-in roster),
//! writes the whole collection after every change, and clears the slot on
//! reset.

use crate::slot::StorageSlot;
use roster_core::{
    default_collection, editor, StorageError, WorkforceCollection, WorkforceRecord,
};

/// Persistence for one roster collection
#[derive(Debug)]
pub struct RosterStore<S> {
    slot: S,
}

impl<S: StorageSlot> RosterStore<S> {
    /// Create store over a slot
    #[inline]
    #[must_use]
    pub fn new(slot: S) -> Self {
        Self { slot }
    }

    /// Load the saved collection, or the default roster
    ///
    /// A missing slot, an unreadable slot, unparsable contents and a
    /// collection with blank or repeated names all fall back to the default; the slot is user-editable and a broken
    /// file must not stop the dashboard from starting.
    #[must_use]
    pub fn load(&self) -> WorkforceCollection {
        let raw = match self.slot.read() {
            Ok(Some(raw)) => raw,
            Ok(None) => {
                tracing::debug!(slot = self.slot.key(), "no saved roster, using defaults");
                return default_collection();
            }
            Err(e) => {
                tracing::warn!(slot = self.slot.key(), error = %e, "roster slot unreadable, using defaults");
                return default_collection();
            }
        };

        let records = match serde_json::from_str::<WorkforceCollection>(&raw) {
            Ok(records) => records,
            Err(e) => {
                tracing::warn!(slot = self.slot.key(), error = %e, "saved roster is corrupt, using defaults");
                return default_collection();
            }
        };

        if let Err(e) = editor::check_collection(&records) {
            tracing::warn!(slot = self.slot.key(), error = %e, "saved roster breaks naming rules, using defaults");
            return default_collection();
        }

        tracing::debug!(slot = self.slot.key(), count = records.len(), "loaded saved roster");
        records
    }

    /// Persist the full collection
    ///
    /// Writing the same collection twice leaves the same slot contents.
    ///
    /// # Errors
    /// Returns `StorageError` if serialization or the slot write fails
    pub fn save(&self, records: &[WorkforceRecord]) -> Result<(), StorageError> {
        let json = serde_json::to_string(records)?;
        self.slot.write(&json)
    }

    /// Clear the slot and hand back the default roster
    ///
    /// # Errors
    /// Returns `StorageError` if the slot cannot be cleared
    pub fn reset(&self) -> Result<WorkforceCollection, StorageError> {
        self.slot.clear()?;
        tracing::info!(slot = self.slot.key(), "roster reset to defaults");
        Ok(default_collection())
    }

    /// Underlying slot
    #[inline]
    #[must_use]
    pub fn slot(&self) -> &S {
        &self.slot
    }
}
